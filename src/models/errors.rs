use thiserror::Error;
use uuid::Uuid;

/// Service-level errors that can occur in business logic
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Item not found: {id}")]
    ItemNotFound { id: Uuid },

    #[error("Insufficient quantity: requested={requested}, available={available}")]
    InsufficientQuantity { requested: u32, available: u32 },

    #[error("Repository error: {source}")]
    Repository {
        #[from]
        source: RepositoryError,
    },
}

/// Repository-level errors for data access operations
///
/// The in-memory backend is infallible; the variants keep the seam open
/// for backends that are not.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Storage backend unavailable: {message}")]
    Backend { message: String },

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;
