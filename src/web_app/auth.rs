// web_app/auth.rs - Permissions and the admin session
//
// The login flow stores `{ "token": ..., "permissions": [...] }` in the
// `AUTH_CRED` cookie. Pages declare which permissions may open them and
// the `AuthGate` component checks the session against that list before
// the page mounts.

use serde::{Deserialize, Serialize};

pub const AUTH_CRED_COOKIE: &str = "AUTH_CRED";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    SuperAdmin,
    StoreOwner,
    Staff,
    Customer,
}

/// Shop pages open to admins, the shop owner and the shop's staff
pub const ADMIN_OWNER_AND_STAFF_ONLY: &[Permission] =
    &[Permission::SuperAdmin, Permission::StoreOwner, Permission::Staff];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl Session {
    /// Parse the `AUTH_CRED` cookie value
    ///
    /// Returns `None` for malformed JSON or an empty token.
    pub fn from_cookie(value: &str) -> Option<Self> {
        let session: Session = match serde_json::from_str(value.trim()) {
            Ok(session) => session,
            Err(e) => {
                tracing::debug!("ignoring malformed {} cookie: {}", AUTH_CRED_COOKIE, e);
                return None;
            }
        };
        if session.token.is_empty() {
            return None;
        }
        Some(session)
    }

    pub fn can_access(&self, required: &[Permission]) -> bool {
        has_access(required, &self.permissions)
    }
}

/// True when any granted permission is in `required`
///
/// An empty `required` list means the page is open to everyone.
pub fn has_access(required: &[Permission], granted: &[Permission]) -> bool {
    required.is_empty() || granted.iter().any(|p| required.contains(p))
}
