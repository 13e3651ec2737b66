/// Maximum accepted logo size in bytes (5 MiB).
pub const MAX_LOGO_SIZE: u64 = 5 * 1024 * 1024;

/// MIME types the logo upload accepts, as declared by the picker.
pub const ACCEPTED_LOGO_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/webp"];

/// Roster size bounds enforced by the roster manager and re-checked on submit.
pub const MIN_PLAYERS: usize = 6;
pub const MAX_PLAYERS: usize = 10;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let base_url = std::env::var("API_BASE")
            .unwrap_or_else(|_| "http://localhost:3001/api".to_string());

        Self { base_url }
    }
}
