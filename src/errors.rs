use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::ui::Field;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{message}")]
    Validation { field: Field, message: String },

    #[error("{message}")]
    RegistrationClosed {
        message: String,
        next_open: Option<DateTime<Utc>>,
    },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Env error: {0}")]
    EnvError(String),
}

impl AppError {
    pub fn validation(field: Field, message: impl Into<String>) -> Self {
        AppError::Validation {
            field,
            message: message.into(),
        }
    }
}
