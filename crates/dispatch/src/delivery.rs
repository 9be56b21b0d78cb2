//! Final hop shared by every notifier: recipient phone check, then send.

use herald_core::models::Account;

use crate::error::{DispatchError, DispatchResult};
use crate::ports::{SmsGateway, SmsRequest};

/// The number to text `recipient` at; a blank number counts as none.
///
/// Flows that call paid collaborators (the link shortener) before
/// [`deliver`] check this first.
pub(crate) fn recipient_phone(recipient: &Account) -> DispatchResult<&str> {
    recipient
        .phone_number()
        .filter(|number| !number.trim().is_empty())
        .ok_or(DispatchError::MissingPhone {
            account_id: recipient.id,
        })
}

/// Send `message` to `recipient` and return the gateway message id.
///
/// Fails with [`DispatchError::MissingPhone`] before contacting the gateway
/// when the recipient has no phone number.
pub(crate) async fn deliver(
    sms: &dyn SmsGateway,
    recipient: &Account,
    message: String,
) -> DispatchResult<Option<String>> {
    let phone_number = recipient_phone(recipient)?;

    let message_id = sms
        .send_message(SmsRequest {
            phone_number: phone_number.to_string(),
            message,
        })
        .await?;

    tracing::Span::current().record("message_id", message_id.as_str());
    tracing::debug!(recipient_id = recipient.id, %message_id, "SMS accepted by gateway");

    Ok(Some(message_id))
}
