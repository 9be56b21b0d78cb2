//! Shared-secret guard for the admin routes.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use herald_clients::API_KEY_HEADER;

use crate::error::AppError;
use crate::state::AppState;

/// Proof that the caller presented the configured `API_KEY`.
///
/// Admin routes take this as their first extractor. Without a configured
/// key every admin call is refused.
///
/// ```ignore
/// async fn my_handler(_admin: AdminKey, State(state): State<AppState>) -> Json<()> {
///     Json(())
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AdminKey;

impl FromRequestParts<AppState> for AdminKey {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.admin_key.as_deref() else {
            return Err(AppError::Unauthorized(
                "Admin API disabled: no API_KEY configured".into(),
            ));
        };

        let presented = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized(format!("Missing {API_KEY_HEADER} header")))?;

        if presented != expected {
            return Err(AppError::Unauthorized(format!("Invalid {API_KEY_HEADER}")));
        }
        Ok(AdminKey)
    }
}
