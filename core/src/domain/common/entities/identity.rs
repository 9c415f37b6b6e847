use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder identity used when the gateway forwards no `X-USER-ID` header.
pub const DEFAULT_USER_LABEL: &str = "default_user";

/// Caller identity as forwarded by the upstream gateway.
///
/// The header carries a numeric user id when the caller is signed in. An
/// absent header maps to `Anonymous` rather than being coerced into a fake
/// id; operations that persist per-user data must require `Known`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserIdentity {
    Known(i32),
    Anonymous,
}

impl UserIdentity {
    pub fn id(&self) -> Option<i32> {
        match self {
            UserIdentity::Known(id) => Some(*id),
            UserIdentity::Anonymous => None,
        }
    }

    /// Stable textual form: the user id, or `default_user` for anonymous
    /// callers.
    pub fn label(&self) -> String {
        match self {
            UserIdentity::Known(id) => id.to_string(),
            UserIdentity::Anonymous => DEFAULT_USER_LABEL.to_string(),
        }
    }
}

impl fmt::Display for UserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
