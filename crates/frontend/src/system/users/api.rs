//! Account settings requests
//!
//! Each change is one POST. The outcome is reported through a [`Notifier`]
//! and returned to the caller; nothing is retried.

use contracts::system::auth::UserInfo;
use contracts::system::users::{ChangePasswordRequest, ChangeUsernameRequest};
use thiserror::Error;

use crate::shared::http::{JsonTransport, TransportError};
use crate::shared::notifications::Notifier;

pub const CHANGE_USERNAME_PATH: &str = "/api/user/changeUsername";
pub const CHANGE_PASSWORD_PATH: &str = "/api/user/changePassword";

pub const NOT_SIGNED_IN_MESSAGE: &str = "You must be signed in to change your settings.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("HTTP error! status: {status}, message: {body}")]
    Http { status: u16, body: String },
    #[error("Failed to reach server: {0}")]
    Transport(#[from] TransportError),
    #[error("Invalid JSON in response: {0}")]
    InvalidJson(String),
    #[error("No signed-in user with an email address")]
    NotSignedIn,
}

/// Editable account field, each submitted to its own endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountField {
    Username,
    Password,
}

impl AccountField {
    pub fn label(self) -> &'static str {
        match self {
            AccountField::Username => "Username",
            AccountField::Password => "Password",
        }
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            AccountField::Username => CHANGE_USERNAME_PATH,
            AccountField::Password => CHANGE_PASSWORD_PATH,
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            AccountField::Username => "Username Updated Successfully!",
            AccountField::Password => "Password updated successfully!",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            AccountField::Username => "Failed to update username. Please try again.",
            AccountField::Password => "Failed to update password. Please try again.",
        }
    }

    /// Wire body for a change of this field
    fn payload(self, email: &str, value: &str) -> Result<serde_json::Value, SettingsError> {
        let payload = match self {
            AccountField::Username => serde_json::to_value(ChangeUsernameRequest {
                email: email.to_string(),
                user_name: value.to_string(),
            }),
            AccountField::Password => serde_json::to_value(ChangePasswordRequest {
                email: email.to_string(),
                new_password: value.to_string(),
            }),
        };
        payload.map_err(|e| TransportError(format!("Failed to serialize request: {}", e)).into())
    }
}

/// Change the signed-in user's username
pub async fn change_username<T, N>(
    transport: &T,
    notifier: &N,
    identity: Option<&UserInfo>,
    username: &str,
) -> Result<(), SettingsError>
where
    T: JsonTransport + ?Sized,
    N: Notifier + ?Sized,
{
    submit_change(transport, notifier, AccountField::Username, identity, username).await
}

/// Change the signed-in user's password
pub async fn change_password<T, N>(
    transport: &T,
    notifier: &N,
    identity: Option<&UserInfo>,
    password: &str,
) -> Result<(), SettingsError>
where
    T: JsonTransport + ?Sized,
    N: Notifier + ?Sized,
{
    submit_change(transport, notifier, AccountField::Password, identity, password).await
}

/// Send and report a single field change
///
/// A missing identity is reported through the notifier and sends nothing.
/// The value itself is sent as typed, empty or not; the server validates it.
pub async fn submit_change<T, N>(
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
    let Some(email) = identity.and_then(UserInfo::account_email) else {
        log::warn!("Refusing to update {}: no signed-in user", field.label());
        notifier.error(NOT_SIGNED_IN_MESSAGE);
        return Err(SettingsError::NotSignedIn);
    };

    match send(transport, field, email, value).await {
        Ok(()) => {
            log::info!("{} changed for {}", field.label(), email);
            notifier.success(field.success_message());
            Ok(())
        }
        Err(e) => {
            log::error!("Error updating {}: {}", field.label(), e);
            notifier.error(field.failure_message());
            Err(e)
        }
    }
}

async fn send<T>(
    transport: &T,
    field: AccountField,
    email: &str,
    value: &str,
) -> Result<(), SettingsError>
where
    T: JsonTransport + ?Sized,
{
    let payload = field.payload(email, value)?;
    let reply = transport.post_json(field.endpoint(), &payload).await?;

    if !reply.is_ok() {
        return Err(SettingsError::Http {
            status: reply.status,
            body: reply.body,
        });
    }

    // The body is not used, but it has to be JSON; an empty body is not
    serde_json::from_str::<serde_json::Value>(&reply.body)
        .map_err(|e| SettingsError::InvalidJson(e.to_string()))?;

    Ok(())
}
