use axum::{extract::FromRequestParts, http::request::Parts};
use nutrimate_core::domain::common::UserIdentity;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Gateway header carrying the numeric user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor for the caller identity forwarded by the gateway.
///
/// An absent or empty header is the anonymous `default_user` identity. A
/// present header must be a numeric user id; anything else is rejected
/// instead of being coerced.
pub struct CallerIdentity(pub UserIdentity);

impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .map(|value| value.to_str().map(str::trim))
            .transpose()
            .map_err(|_| {
                ApiError::BadRequest(format!("{USER_ID_HEADER} header is not valid text"))
            })?;

        match raw {
            None | Some("") => Ok(Self(UserIdentity::Anonymous)),
            Some(value) => {
                let id = value.parse::<i32>().map_err(|_| {
                    ApiError::BadRequest(format!(
                        "{USER_ID_HEADER} header must be a numeric user id"
                    ))
                })?;
                Ok(Self(UserIdentity::Known(id)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderName, HeaderValue};
    use axum::{Router, routing::get};
    use axum_test::TestServer;

    use super::*;

    fn test_router() -> Router {
        Router::new().route(
            "/whoami",
            get(|CallerIdentity(identity): CallerIdentity| async move { identity.label() }),
        )
    }

    #[tokio::test]
    async fn missing_header_defaults_to_default_user() {
        let server = TestServer::new(test_router()).unwrap();

        let response = server.get("/whoami").await;

        response.assert_status_ok();
        response.assert_text("default_user");
    }

    #[tokio::test]
    async fn numeric_header_is_a_known_user() {
        let server = TestServer::new(test_router()).unwrap();

        let response = server
            .get("/whoami")
            .add_header(
                HeaderName::from_static("x-user-id"),
                HeaderValue::from_static("42"),
            )
            .await;

        response.assert_status_ok();
        response.assert_text("42");
    }

    #[tokio::test]
    async fn non_numeric_header_is_rejected() {
        let server = TestServer::new(test_router()).unwrap();

        let response = server
            .get("/whoami")
            .add_header(
                HeaderName::from_static("x-user-id"),
                HeaderValue::from_static("default_user"),
            )
            .await;

        response.assert_status_bad_request();
    }
}
