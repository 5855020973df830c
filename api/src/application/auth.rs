use axum::{extract::FromRequestParts, http::request::Parts};
use menuforge_core::domain::authentication::value_objects::Identity;
use uuid::Uuid;

use super::http::server::api_entities::api_error::ApiError;

/// Header set by the upstream auth gateway once the session is verified.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Custom extractor for required Identity
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>().copied() {
            return Ok(RequiredIdentity(identity));
        }

        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                ApiError::Unauthorized("Authentication required".to_string())
            })?;

        let user_id = Uuid::parse_str(user_id).map_err(|_| {
            tracing::debug!("Rejected malformed {} header", USER_ID_HEADER);
            ApiError::Unauthorized("Invalid user identity".to_string())
        })?;

        let identity = Identity::new(user_id);
        parts.extensions.insert(identity);

        Ok(RequiredIdentity(identity))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    async fn extract(request: Request<()>) -> Result<Identity, ApiError> {
        let (mut parts, _) = request.into_parts();
        RequiredIdentity::from_request_parts(&mut parts, &())
            .await
            .map(|RequiredIdentity(identity)| identity)
    }

    #[tokio::test]
    async fn test_identity_from_header() {
        let user_id = Uuid::new_v4();
        let request = Request::builder()
            .header(USER_ID_HEADER, user_id.to_string())
            .body(())
            .unwrap();

        assert_eq!(extract(request).await.unwrap().id(), user_id);
    }

    #[tokio::test]
    async fn test_missing_header_is_unauthorized() {
        let request = Request::builder().body(()).unwrap();

        assert!(matches!(
            extract(request).await,
            Err(ApiError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn test_malformed_header_is_unauthorized() {
        let request = Request::builder()
            .header(USER_ID_HEADER, "not-a-uuid")
            .body(())
            .unwrap();

        assert_eq!(
            extract(request).await,
            Err(ApiError::Unauthorized("Invalid user identity".to_string()))
        );
    }

    #[tokio::test]
    async fn test_identity_already_in_extensions_wins() {
        let user_id = Uuid::new_v4();
        let mut request = Request::builder()
            .header(USER_ID_HEADER, Uuid::new_v4().to_string())
            .body(())
            .unwrap();
        request.extensions_mut().insert(Identity::new(user_id));

        assert_eq!(extract(request).await.unwrap().id(), user_id);
    }
}
