//! ViewModel for the account settings form
//!
//! Both sub-forms share this object but keep separate field values and
//! submission state.

use contracts::system::auth::UserInfo;
use leptos::prelude::*;

use super::state::{SubmitOutcome, SubmitState};
use crate::shared::http::{GlooTransport, JsonTransport};
use crate::shared::notifications::{NotificationService, Notifier};
use crate::system::users::api::{self, AccountField, SettingsError};

#[derive(Clone, Copy)]
pub struct SettingsVm {
    // === Form fields ===
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,

    // === UI State ===
    pub username_state: RwSignal<SubmitState>,
    pub password_state: RwSignal<SubmitState>,
}

impl SettingsVm {
    pub fn new() -> Self {
        Self {
            username: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            username_state: RwSignal::new(SubmitState::Idle),
            password_state: RwSignal::new(SubmitState::Idle),
        }
    }

    pub fn value(&self, field: AccountField) -> RwSignal<String> {
        match field {
            AccountField::Username => self.username,
            AccountField::Password => self.password,
        }
    }

    pub fn state(&self, field: AccountField) -> RwSignal<SubmitState> {
        match field {
            AccountField::Username => self.username_state,
            AccountField::Password => self.password_state,
        }
    }

    /// Disable the field's button while its request is in flight
    pub fn is_submitting(&self, field: AccountField) -> Signal<bool> {
        let state = self.state(field);
        Signal::derive(move || state.get().is_submitting())
    }

    // === Commands ===

    /// Submit one field with the identity supplied by the caller
    ///
    /// The in-flight check happens before the request is spawned, so a
    /// double click cannot queue a second request.
    pub fn submit(
        &self,
        field: AccountField,
        identity: Option<UserInfo>,
        notifier: NotificationService,
    ) {
        let Some(value) = self.begin(field) else {
            return;
        };

        let vm = *self;
        leptos::task::spawn_local(async move {
            let transport = GlooTransport::from_config();
            let _ = vm
                .finish(&transport, &notifier, field, identity.as_ref(), &value)
                .await;
        });
    }

    /// Same as [`submit`](Self::submit) on a caller-supplied transport,
    /// awaited in place. `None` when the field was already submitting.
    pub async fn submit_with<T, N>(
        &self,
        transport: &T,
        notifier: &N,
        field: AccountField,
        identity: Option<&UserInfo>,
    ) -> Option<Result<(), SettingsError>>
    where
        T: JsonTransport + ?Sized,
        N: Notifier + ?Sized,
    {
        let value = self.begin(field)?;
        Some(self.finish(transport, notifier, field, identity, &value).await)
    }

    /// Enter `Submitting` and snapshot the field value
    fn begin(&self, field: AccountField) -> Option<String> {
        let started = self
            .state(field)
            .try_update(|current| current.begin())
            .unwrap_or(false);
        if !started {
            log::debug!("{} update already in progress", field.label());
            return None;
        }
        Some(self.value(field).get_untracked())
    }

    async fn finish<T, N>(
        &self,
        transport: &T,
        notifier: &N,
        field: AccountField,
        identity: Option<&UserInfo>,
        value: &str,
    ) -> Result<(), SettingsError>
    where
        T: JsonTransport + ?Sized,
        N: Notifier + ?Sized,
    {
        let result = api::submit_change(transport, notifier, field, identity, value).await;
        self.state(field)
            .update(|current| current.settle(SubmitOutcome::from(&result)));
        result
    }
}

impl Default for SettingsVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::testing::RecordingTransport;
    use crate::shared::http::HttpReply;
    use crate::shared::notifications::testing::RecordingNotifier;
    use crate::shared::notifications::NotificationKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn alice() -> UserInfo {
        UserInfo {
            email: Some("a@x.com".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_username_submit_leaves_password_alone() {
        let owner = Owner::new();
        let vm = owner.with(SettingsVm::new);
        vm.username.set("alice2".to_string());
        vm.password.set("secret".to_string());

        let transport = RecordingTransport::replying(Ok(HttpReply::new(200, "{}")));
        let notifier = RecordingNotifier::default();

        let result = vm
            .submit_with(&transport, &notifier, AccountField::Username, Some(&alice()))
            .await;

        assert_eq!(result, Some(Ok(())));
        assert_eq!(vm.username.get_untracked(), "alice2");
        assert_eq!(vm.password.get_untracked(), "secret");
        assert_eq!(
            vm.username_state.get_untracked(),
            SubmitState::Settled(SubmitOutcome::Success)
        );
        assert_eq!(vm.password_state.get_untracked(), SubmitState::Idle);
        assert_eq!(
            transport.requests()[0].body,
            Some(json!({"email": "a@x.com", "userName": "alice2"}))
        );
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_sends_nothing() {
        let owner = Owner::new();
        let vm = owner.with(SettingsVm::new);
        vm.password.set("hunter2".to_string());

        let transport = RecordingTransport::replying(Ok(HttpReply::new(200, "{}")));
        let notifier = RecordingNotifier::default();
        let user = alice();

        let (first, second) = tokio::join!(
            vm.submit_with(&transport, &notifier, AccountField::Password, Some(&user)),
            vm.submit_with(&transport, &notifier, AccountField::Password, Some(&user)),
        );

        let outcomes = [first, second];
        assert_eq!(outcomes.iter().filter(|o| o.is_none()).count(), 1);
        assert!(outcomes.contains(&Some(Ok(()))));
        assert_eq!(transport.requests().len(), 1);
        assert_eq!(notifier.count(NotificationKind::Success), 1);
        assert_eq!(
            vm.password_state.get_untracked(),
            SubmitState::Settled(SubmitOutcome::Success)
        );
    }

    #[tokio::test]
    async fn test_failed_submit_can_be_retried() {
        let owner = Owner::new();
        let vm = owner.with(SettingsVm::new);
        vm.username.set("bob".to_string());

        let notifier = RecordingNotifier::default();
        let failing = RecordingTransport::replying(Ok(HttpReply::new(500, "boom")));
        let result = vm
            .submit_with(&failing, &notifier, AccountField::Username, Some(&alice()))
            .await;
        assert!(matches!(result, Some(Err(SettingsError::Http { status: 500, .. }))));
        assert_eq!(
            vm.username_state.get_untracked(),
            SubmitState::Settled(SubmitOutcome::Failed)
        );

        let working = RecordingTransport::replying(Ok(HttpReply::new(200, "{}")));
        let result = vm
            .submit_with(&working, &notifier, AccountField::Username, Some(&alice()))
            .await;
        assert_eq!(result, Some(Ok(())));
        assert_eq!(working.requests().len(), 1);
    }
}
