pub mod product;
pub mod product_sale;
pub mod product_supply;

use shared::errors::{RepositoryError, ServiceError};

pub(crate) fn product_not_found(id: i64) -> ServiceError {
    ServiceError::NotFound(format!("Product with id {id} not found"))
}

pub(crate) fn sale_not_found(id: i64) -> ServiceError {
    ServiceError::NotFound(format!("Product sale with id {id} not found"))
}

pub(crate) fn supply_not_found(id: i64) -> ServiceError {
    ServiceError::NotFound(format!("Product supply with id {id} not found"))
}

/// Maps a repository `NotFound` to the caller's message and passes every
/// other error through.
pub(crate) fn or_not_found(
    err: RepositoryError,
    not_found: impl FnOnce() -> ServiceError,
) -> ServiceError {
    match err {
        RepositoryError::NotFound => not_found(),
        other => ServiceError::Repo(other),
    }
}

/// Like [`or_not_found`], but a write rejected because its product is gone
/// reports the product instead of the record.
pub(crate) fn or_missing_product(
    err: RepositoryError,
    product_id: i64,
    not_found: impl FnOnce() -> ServiceError,
) -> ServiceError {
    match err {
        RepositoryError::ForeignKey(_) => product_not_found(product_id),
        other => or_not_found(other, not_found),
    }
}

pub(crate) fn missing(field: &str, message: &str) -> ServiceError {
    ServiceError::Validation(vec![format!("{field}: {message}")])
}
