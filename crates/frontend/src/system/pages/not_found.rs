use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found" style="padding: 48px; text-align: center;">
            <h2>"Page not found"</h2>
            <A href="/">"Back to home"</A>
        </div>
    }
}
