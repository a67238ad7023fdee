use crate::enums::role::Role;
use serde::{Deserialize, Serialize};

/// Authenticated session as handed over by the auth collaborator.
///
/// The `role` field is the raw role code; views never see it directly,
/// the shell converts it once via [`SessionInfo::role`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: String,
}

impl SessionInfo {
    /// Role carried by this session. Unknown codes degrade to the
    /// operational role rather than failing.
    pub fn role(&self) -> Role {
        Role::from_code_or_default(&self.role)
    }
}
