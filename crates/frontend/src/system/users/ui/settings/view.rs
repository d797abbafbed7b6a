use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use super::view_model::SettingsVm;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::system::auth::context::{use_session, SessionState};
use crate::system::users::api::AccountField;

/// Account settings page: username and password, submitted independently
#[component]
pub fn SettingsPage() -> impl IntoView {
    let vm = SettingsVm::new();
    let session = use_session();
    let notifications = use_notifications();

    // The identity is read at click time and handed to the command explicitly
    let submit = move |field: AccountField| {
        let identity = session.get_untracked().user().cloned();
        vm.submit(field, identity, notifications);
    };

    view! {
        <main class="settings-page" style="display: flex; min-height: 100vh; justify-content: center; align-items: center; padding: 64px 16px; background: linear-gradient(to top right, #3A0153, #1D022A);">
            <div style="display: flex; flex-direction: column; align-items: center; width: 100%; max-width: 960px;">
                <div style="align-self: flex-start;">
                    <A href="/">
                        <Button appearance=ButtonAppearance::Transparent attr:style="color: white;">
                            {icon("chevron-left")}
                            " Back"
                        </Button>
                    </A>
                </div>

                <Card attr:style="margin-top: 32px; width: 100%; max-width: 28rem; border: 2px solid #D700E1;">
                    <div class="settings-card__header">
                        <h2 class="settings-card__title" style="margin: 0;">"Settings"</h2>
                        <p class="settings-card__description" style="margin: 4px 0 0 0; opacity: 0.7;">
                            "Update your account settings"
                        </p>
                        <IdentityLine session=session />
                    </div>

                    <form
                        class="settings-form"
                        style="display: flex; flex-direction: column; gap: 24px;"
                        on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()
                    >
                        <AccountFieldInput
                            vm=vm
                            field=AccountField::Username
                            placeholder="New Username"
                            description="Enter your new username here."
                        />
                        <SubmitButton vm=vm field=AccountField::Username label="Update Username" on_submit=submit />

                        <AccountFieldInput
                            vm=vm
                            field=AccountField::Password
                            placeholder="New Password"
                            description="Enter your new password here."
                            password=true
                        />
                        <SubmitButton vm=vm field=AccountField::Password label="Update Password" on_submit=submit />
                    </form>
                </Card>
            </div>
        </main>
    }
}

#[component]
fn IdentityLine(session: ReadSignal<SessionState>) -> impl IntoView {
    view! {
        <div class="settings-card__identity" style="display: flex; align-items: center; gap: 6px; margin: 12px 0 20px 0; font-size: 0.85rem;">
            {move || match session.get() {
                SessionState::Loading => view! { <Spinner /> }.into_any(),
                SessionState::Authenticated(user) => {
                    let email = user.account_email().unwrap_or("no email on file").to_string();
                    view! {
                        {icon("user")}
                        <span>"Signed in as " <strong>{email}</strong></span>
                    }
                    .into_any()
                }
                SessionState::Unauthenticated => view! {
                    {icon("lock")}
                    <span>"Not signed in"</span>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn AccountFieldInput(
    vm: SettingsVm,
    field: AccountField,
    placeholder: &'static str,
    description: &'static str,
    #[prop(optional)] password: bool,
) -> impl IntoView {
    let input_type = if password {
        InputType::Password
    } else {
        InputType::Text
    };

    view! {
        <div class="form__group" style="display: flex; flex-direction: column; gap: 6px;">
            <Label>{field.label()}</Label>
            <Input
                value=vm.value(field)
                placeholder=placeholder
                input_type=input_type
                disabled=vm.is_submitting(field)
            />
            <div class="form__description" style="font-size: 0.8rem; opacity: 0.7;">{description}</div>
        </div>
    }
}

#[component]
fn SubmitButton<F>(
    vm: SettingsVm,
    field: AccountField,
    label: &'static str,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(AccountField) + Copy + Send + Sync + 'static,
{
    let submitting = vm.is_submitting(field);

    view! {
        <div>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| on_submit(field)
                disabled=submitting
            >
                {move || if submitting.get() { "Updating..." } else { label }}
            </Button>
        </div>
    }
}
