pub mod season;
pub mod team;

pub use season::{Season, SeasonStatus};
