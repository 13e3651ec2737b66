use serde::{Deserialize, Serialize};

/// Role codes a player may hold. Serialized as the bare code, e.g. `"GL"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    GL,
    VL,
    PV,
}

/// Wire shape of one roster entry inside the `players` multipart field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub id: String,
    pub nick: String,
    pub positions: Vec<Position>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogoFile {
    pub file_name: String,
    /// MIME type as declared by the picker, not sniffed from the bytes.
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Fully validated registration, ready to go out as multipart form data.
#[derive(Debug, Clone)]
pub struct TeamSubmission {
    pub name: String,
    pub owner: String,
    pub captain: String,
    pub coach: String,
    pub logo: LogoFile,
    pub players: Vec<PlayerEntry>,
    pub season_id: Option<String>,
}
