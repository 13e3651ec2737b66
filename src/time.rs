use chrono::{DateTime, Utc};
use chrono_tz::America::Sao_Paulo;

/// Renders a timestamp the way the registration page always has: pt-BR order,
/// Brasília time.
pub fn format_next_open(at: DateTime<Utc>) -> String {
    at.with_timezone(&Sao_Paulo)
        .format("%d/%m/%Y, %H:%M:%S")
        .to_string()
}
