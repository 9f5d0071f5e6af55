//! Error Types
//!
//! Store failures carry a structured kind so views never inspect messages.

use thiserror::Error;

/// What went wrong on the store side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    ServerError,
    Network,
    Decode,
    Unknown,
}

impl ErrorKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => ErrorKind::NotFound,
            500..=599 => ErrorKind::ServerError,
            _ => ErrorKind::Unknown,
        }
    }

    /// Classification for collaborators that only report a message
    /// ("Erreur 404", "Request failed with status 500").
    pub fn classify(message: &str) -> Self {
        if message.contains("404") {
            ErrorKind::NotFound
        } else if message.contains("500") {
            ErrorKind::ServerError
        } else {
            ErrorKind::Unknown
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct StoreError {
    pub kind: ErrorKind,
    pub message: String,
}

impl StoreError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(ErrorKind::classify(&message), message)
    }

    pub fn from_status(status: u16, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            format!("Erreur {}", status)
        } else {
            format!("Erreur {}: {}", status, body.trim())
        };
        Self::new(ErrorKind::from_status(status), message)
    }

    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::new(ErrorKind::Network, err.to_string())
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::new(ErrorKind::Decode, err.to_string())
    }
}

/// Failures of the new bill pipeline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NewBillError {
    #[error("Le fichier {file_name} n'est pas une image jpg, jpeg, png ou gif")]
    InvalidExtension { file_name: String },

    #[error("Une requête est déjà en cours")]
    Busy,

    #[error("Champ obligatoire manquant : {0}")]
    MissingField(&'static str),

    #[error("Valeur numérique invalide pour {field} : {value}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Date invalide : {0}")]
    InvalidDate(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
