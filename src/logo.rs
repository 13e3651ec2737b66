use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::config::{ACCEPTED_LOGO_TYPES, MAX_LOGO_SIZE};
use crate::models::team::LogoFile;

pub const INVALID_TYPE_MSG: &str = "Tipo de arquivo inválido. Use PNG, JPG ou WebP.";
pub const TOO_LARGE_MSG: &str = "Arquivo muito grande. Máximo 5MB.";

/// Declared-type and size check, shared between the upload handler and the
/// pre-submit re-validation.
pub fn validate_logo(file: &LogoFile) -> Result<(), &'static str> {
    if !ACCEPTED_LOGO_TYPES.contains(&file.content_type.as_str()) {
        return Err(INVALID_TYPE_MSG);
    }

    if file.bytes.len() as u64 > MAX_LOGO_SIZE {
        return Err(TOO_LARGE_MSG);
    }

    Ok(())
}

/// Upload zone state. Picker and drag-and-drop both land in [`LogoSlot::select`].
#[derive(Debug, Clone, Default)]
pub enum LogoSlot {
    #[default]
    Empty,
    Preview {
        file: LogoFile,
        /// Base64 data URL rendered into the preview image.
        preview: String,
    },
}

impl LogoSlot {
    /// Accepts the file and switches to the preview state, or rejects it and
    /// clears the selection entirely.
    pub fn select(&mut self, file: LogoFile) -> Result<(), &'static str> {
        if let Err(msg) = validate_logo(&file) {
            *self = LogoSlot::Empty;
            return Err(msg);
        }

        let preview = format!(
            "data:{};base64,{}",
            file.content_type,
            STANDARD.encode(&file.bytes)
        );
        *self = LogoSlot::Preview { file, preview };

        Ok(())
    }

    pub fn clear(&mut self) {
        *self = LogoSlot::Empty;
    }

    pub fn file(&self) -> Option<&LogoFile> {
        match self {
            LogoSlot::Empty => None,
            LogoSlot::Preview { file, .. } => Some(file),
        }
    }

    pub fn preview(&self) -> Option<&str> {
        match self {
            LogoSlot::Empty => None,
            LogoSlot::Preview { preview, .. } => Some(preview),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, LogoSlot::Empty)
    }
}
