use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Owner-scoped lookup miss. Does not say which half of the
    /// `id AND owner` predicate failed.
    #[error("Entity not found or not owned by caller: {entity} with id {id}")]
    NotFoundOrUnauthorized { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
