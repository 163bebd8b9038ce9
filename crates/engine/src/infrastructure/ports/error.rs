//! Error types for port operations.

/// Creature directory errors.
///
/// Callers never surface these to the user; they degrade to fallback
/// records or empty encounter data instead.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DirectoryError {
    /// Network failure or timeout before a response arrived.
    #[error("Directory request failed: {0}")]
    RequestFailed(String),

    /// Non-2xx status for a named resource.
    #[error("{resource} not found in directory (status {status})")]
    NotFound { resource: String, status: u16 },

    /// Body did not match the expected shape.
    #[error("Invalid directory response: {0}")]
    InvalidResponse(String),
}

impl DirectoryError {
    pub fn request_failed(message: impl ToString) -> Self {
        Self::RequestFailed(message.to_string())
    }

    pub fn not_found(resource: impl ToString, status: u16) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            status,
        }
    }

    pub fn invalid_response(message: impl ToString) -> Self {
        Self::InvalidResponse(message.to_string())
    }
}

/// Catalog load errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog at {path}: {message}")]
    Io { path: String, message: String },

    #[error("Malformed catalog document: {0}")]
    Parse(String),

    #[error("Invalid catalog: {0}")]
    Invalid(#[from] zonedex_domain::DomainError),
}

impl CatalogError {
    pub fn io(path: impl ToString, message: impl ToString) -> Self {
        Self::Io {
            path: path.to_string(),
            message: message.to_string(),
        }
    }

    pub fn parse(message: impl ToString) -> Self {
        Self::Parse(message.to_string())
    }
}

/// Local key-value storage errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Storage serialization error: {0}")]
    Serialization(String),

    #[error("Storage lock poisoned")]
    Poisoned,
}
