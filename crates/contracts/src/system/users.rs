use serde::{Deserialize, Serialize};

/// Body of `POST /api/user/changeUsername`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeUsernameRequest {
    pub email: String,
    pub user_name: String,
}

/// Body of `POST /api/user/changePassword`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub email: String,
    pub new_password: String,
}
