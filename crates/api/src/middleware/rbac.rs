//! Role-based access control extractors.
//!
//! Wraps [`AuthUser`] and rejects requests whose role is not `staff`, the
//! only role allowed to edit the catalog. The account behind the token is
//! re-read on every request, so deactivating or deleting it takes effect
//! before the token expires.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use storyverse_core::error::CoreError;
use storyverse_core::roles::ROLE_STAFF;
use storyverse_db::repositories::AccountRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `staff` role on an account that still exists and is active.
///
/// Rejects with 401 if the account is gone and 403 if it is inactive or not
/// staff.
///
/// ```ignore
/// async fn staff_only(RequireStaff(user): RequireStaff) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireStaff(pub AuthUser);

impl FromRequestParts<AppState> for RequireStaff {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_STAFF {
            return Err(AppError::Core(CoreError::Forbidden(
                "Staff role required".into(),
            )));
        }

        let account = AccountRepo::find_by_id(&state.pool, user.account_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Account no longer exists".into()))
            })?;
        if !account.is_active {
            return Err(AppError::Core(CoreError::Forbidden(
                "Account is deactivated".into(),
            )));
        }
        if !account.is_staff {
            return Err(AppError::Core(CoreError::Forbidden(
                "Staff role required".into(),
            )));
        }
        Ok(RequireStaff(user))
    }
}
