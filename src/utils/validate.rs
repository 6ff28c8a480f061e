use crate::error::{AppError, AppResult};
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body extractor that runs `validator` rules after deserialization.
///
/// Deserialization failures surface as `BadRequest`; rule failures as
/// `ValidationErrors` with per-field messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Query string extractor that runs `validator` rules after deserialization.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> AppResult<Self> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        value.validate()?;
        Ok(ValidatedQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, header};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Debug, Deserialize, Validate)]
    struct TestBody {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
        #[validate(email(message = "Invalid email format"))]
        email: String,
    }

    #[tokio::test]
    async fn test_valid_json_body() {
        let body = r#"{"name":"Jane","email":"jane@example.com"}"#;
        let request = Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();

        let result = ValidatedJson::<TestBody>::from_request(request, &()).await;

        assert!(result.is_ok());
        let ValidatedJson(parsed) = result.unwrap();
        assert_eq!(parsed.name, "Jane");
        assert_eq!(parsed.email, "jane@example.com");
    }

    #[tokio::test]
    async fn test_validation_error_empty_name() {
        let body = r#"{"name":"","email":"jane@example.com"}"#;
        let request = Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();

        let result = ValidatedJson::<TestBody>::from_request(request, &()).await;

        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::ValidationErrors { errors } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "name");
                assert!(errors[0].message.contains("required"));
            }
            other => panic!("Expected ValidationErrors error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_json_rejection_malformed_body() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let result = ValidatedJson::<TestBody>::from_request(request, &()).await;

        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::BadRequest { message } => assert!(!message.is_empty()),
            other => panic!("Expected BadRequest error, got {:?}", other),
        }
    }

    #[derive(Debug, Deserialize, Validate)]
    struct TestQuery {
        #[validate(range(min = 1, message = "Page must be at least 1"))]
        page: u32,
    }

    #[tokio::test]
    async fn test_valid_query() {
        let request = Request::builder()
            .uri("/test?page=2")
            .body(Body::empty())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let result = ValidatedQuery::<TestQuery>::from_request_parts(&mut parts, &()).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().0.page, 2);
    }

    #[tokio::test]
    async fn test_query_validation_error() {
        let request = Request::builder()
            .uri("/test?page=0")
            .body(Body::empty())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let result = ValidatedQuery::<TestQuery>::from_request_parts(&mut parts, &()).await;

        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::ValidationErrors { errors } => {
                assert_eq!(errors[0].field, "page");
            }
            other => panic!("Expected ValidationErrors error, got {:?}", other),
        }
    }
}
