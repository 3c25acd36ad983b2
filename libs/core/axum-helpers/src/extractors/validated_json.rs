//! JSON extractor with validation through the `validator` crate.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// A body that fails to parse and a body that fails `Validate` both become a 400
/// [`AppError`]. Validation failures answer with the first custom rule message.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::post};
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct Credentials {
///     #[validate(required(message = "Username and password are required."))]
///     user_name: Option<String>,
/// }
///
/// async fn register(ValidatedJson(payload): ValidatedJson<Credentials>) -> String {
///     format!("Registering {:?}", payload.user_name)
/// }
///
/// let app = Router::new().route("/register", post(register));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}
