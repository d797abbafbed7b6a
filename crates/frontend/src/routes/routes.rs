use crate::system::pages::home::HomePage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::users::ui::settings::SettingsPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/user/:userid/settings") view=SettingsPage />
            </Routes>
        </Router>
    }
}
