use serde::{Deserialize, Serialize};

/// Identity of the signed-in user as reported by the session endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl UserInfo {
    /// Email usable as the account key, as reported; blank values count as missing
    pub fn account_email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .filter(|email| !email.trim().is_empty())
    }
}

/// Body of `GET /api/auth/session`; an anonymous visitor gets `{}` or `null`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    #[serde(default)]
    pub user: Option<UserInfo>,
    #[serde(default)]
    pub expires: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_with_user() {
        let json = r#"{"user":{"name":"alice","email":"a@x.com"},"expires":"2026-11-01T00:00:00Z"}"#;
        let session: SessionResponse = serde_json::from_str(json).unwrap();
        let user = session.user.unwrap();
        assert_eq!(user.name.as_deref(), Some("alice"));
        assert_eq!(user.account_email(), Some("a@x.com"));
        assert_eq!(user.id, None);
    }

    #[test]
    fn test_empty_session() {
        let session: SessionResponse = serde_json::from_str("{}").unwrap();
        assert!(session.user.is_none());
    }

    #[test]
    fn test_blank_email_is_missing() {
        let user = UserInfo {
            email: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(user.account_email(), None);
    }

    #[test]
    fn test_email_is_not_rewritten() {
        let user = UserInfo {
            email: Some(" A@x.com".to_string()),
            ..Default::default()
        };
        assert_eq!(user.account_email(), Some(" A@x.com"));
    }
}
