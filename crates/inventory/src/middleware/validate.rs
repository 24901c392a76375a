use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use shared::{
    errors::{ErrorResponse, HttpError},
    utils::format_validation_errors,
};
use validator::Validate;

/// JSON body that is deserialized and validated before the handler runs.
/// Both failures are answered with the error envelope.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ErrorResponse;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = req.uri().path().to_owned();

        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                ErrorResponse::new(rejection.status(), Some(rejection.body_text())).with_path(&path)
            })?;

        value.validate().map_err(|errors| {
            HttpError::BadRequest(format_validation_errors(&errors).join("; ")).at(&path)
        })?;

        Ok(Self(value))
    }
}

/// Numeric `{id}` path segment; anything else is a 400.
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ErrorResponse;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path().to_owned();

        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| HttpError::BadRequest(rejection.body_text()).at(&path))?;

        Ok(Self(id))
    }
}

/// Query string extractor whose rejection uses the error envelope.
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ErrorResponse;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path().to_owned();

        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| HttpError::BadRequest(rejection.body_text()).at(&path))?;

        Ok(Self(value))
    }
}
