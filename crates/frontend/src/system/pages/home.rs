use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::shared::icons::icon;
use crate::system::auth::context::{use_session, SessionState};

/// Settings route for a user; the id segment falls back to `me`
pub fn settings_href(user_id: Option<&str>) -> String {
    let id = user_id.map(str::trim).filter(|id| !id.is_empty()).unwrap_or("me");
    format!("/user/{}/settings", id)
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    view! {
        <main class="home-page" style="display: flex; min-height: 100vh; justify-content: center; align-items: center;">
            {move || match session.get() {
                SessionState::Loading => view! { <Spinner /> }.into_any(),
                SessionState::Authenticated(user) => {
                    let href = settings_href(user.id.as_deref());
                    let name = user
                        .name
                        .clone()
                        .or_else(|| user.email.clone())
                        .unwrap_or_default();
                    view! {
                        <Card attr:style="padding: 24px; min-width: 320px;">
                            <h2 style="margin: 0 0 12px 0;">{format!("Welcome, {}", name)}</h2>
                            <A href=href>
                                <Button appearance=ButtonAppearance::Primary>
                                    {icon("settings")}
                                    " Account settings"
                                </Button>
                            </A>
                        </Card>
                    }
                    .into_any()
                }
                SessionState::Unauthenticated => view! {
                    <Card attr:style="padding: 24px; min-width: 320px;">
                        <h2 style="margin: 0 0 12px 0;">"Not signed in"</h2>
                        <p style="margin: 0;">"Sign in to manage your account settings."</p>
                    </Card>
                }
                .into_any(),
            }}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_href() {
        assert_eq!(settings_href(Some("42")), "/user/42/settings");
        assert_eq!(settings_href(Some("  ")), "/user/me/settings");
        assert_eq!(settings_href(None), "/user/me/settings");
    }
}
