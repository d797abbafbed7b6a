use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::http::GlooTransport;

/// What the page knows about the signed-in user
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Loading,
    Authenticated(UserInfo),
    Unauthenticated,
}

impl SessionState {
    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Session context provider component
///
/// Loads the session once on mount. Nothing below it reads the session
/// endpoint directly.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let (session, set_session) = signal(SessionState::Loading);

    spawn_local(async move {
        let transport = GlooTransport::from_config();
        let state = api::fetch_session(&transport).await;
        if let Some(email) = state.user().and_then(|u| u.account_email()) {
            log::debug!("Session loaded for {}", email);
        }
        set_session.set(state);
    });

    provide_context(session);

    children()
}

/// Hook to access session state
pub fn use_session() -> ReadSignal<SessionState> {
    use_context::<ReadSignal<SessionState>>().expect("SessionProvider not found in component tree")
}
