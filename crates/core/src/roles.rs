//! Role names carried in access tokens.

/// Staff accounts may use the admin API.
pub const ROLE_STAFF: &str = "staff";

/// Any other active account.
pub const ROLE_USER: &str = "user";

/// The token role for an account's staff flag.
pub fn role_for(is_staff: bool) -> &'static str {
    if is_staff {
        ROLE_STAFF
    } else {
        ROLE_USER
    }
}
