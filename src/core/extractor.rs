use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        FromRequestParts, Path, Query,
    },
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// Path extractor that answers malformed segments with the JSON error envelope
pub struct AppPath<T>(pub T);

impl<T, S> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppPathRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppPathRejection(rejection)),
        }
    }
}

pub struct AppPathRejection(PathRejection);

impl IntoResponse for AppPathRejection {
    fn into_response(self) -> Response {
        let message = match self.0 {
            PathRejection::FailedToDeserializePathParams(err) => {
                format!("Invalid path parameter: {}", err.body_text())
            }
            _ => "Failed to parse path parameters".to_string(),
        };

        AppError::BadRequest(message).into_response()
    }
}

/// Query string extractor with the same error envelope as [`AppPath`]
pub struct AppQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppQueryRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppQueryRejection(rejection)),
        }
    }
}

pub struct AppQueryRejection(QueryRejection);

impl IntoResponse for AppQueryRejection {
    fn into_response(self) -> Response {
        let message = match self.0 {
            QueryRejection::FailedToDeserializeQueryString(err) => {
                format!("Invalid query string: {}", err.body_text())
            }
            _ => "Failed to parse query string".to_string(),
        };

        AppError::BadRequest(message).into_response()
    }
}
