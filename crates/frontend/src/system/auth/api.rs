use contracts::system::auth::SessionResponse;

use super::context::SessionState;
use crate::shared::http::{HttpReply, JsonTransport};

pub const SESSION_PATH: &str = "/api/auth/session";

/// Load the current session; any failure counts as signed out
pub async fn fetch_session<T>(transport: &T) -> SessionState
where
    T: JsonTransport + ?Sized,
{
    match transport.get(SESSION_PATH).await {
        Ok(reply) => parse_session(&reply),
        Err(e) => {
            log::warn!("Failed to load session: {}", e);
            SessionState::Unauthenticated
        }
    }
}

/// Map a session endpoint reply to a session state
pub fn parse_session(reply: &HttpReply) -> SessionState {
    if !reply.is_ok() {
        log::warn!("Session request failed: {}", reply.status);
        return SessionState::Unauthenticated;
    }

    let body = reply.body.trim();
    if body.is_empty() || body == "null" {
        return SessionState::Unauthenticated;
    }

    match serde_json::from_str::<SessionResponse>(body) {
        Ok(SessionResponse {
            user: Some(user), ..
        }) => SessionState::Authenticated(user),
        Ok(_) => SessionState::Unauthenticated,
        Err(e) => {
            log::warn!("Failed to parse session: {}", e);
            SessionState::Unauthenticated
        }
    }
}
