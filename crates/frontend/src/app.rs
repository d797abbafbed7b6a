use crate::routes::routes::AppRoutes;
use crate::shared::config::config;
use crate::shared::notifications::{NotificationHost, NotificationService};
use crate::system::auth::context::SessionProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // One notification surface for the whole app
    provide_context(NotificationService::new(config().notifications.timeout_ms));

    view! {
        <ConfigProvider>
            <SessionProvider>
                <AppRoutes />
                <NotificationHost />
            </SessionProvider>
        </ConfigProvider>
    }
}
