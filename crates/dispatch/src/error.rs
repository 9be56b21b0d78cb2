use herald_core::types::AccountId;
use herald_core::CoreError;

/// Fatal outcome of dispatching one event.
///
/// Policy skips are not errors; they come back as
/// [`NotificationOutcome::skipped`](crate::outcome::NotificationOutcome::skipped).
/// Everything here propagates to the consumption layer untouched, which owns
/// redelivery and dead-lettering.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The payload does not match the schema bound to its event type.
    #[error("Malformed payload for {event_type}: {source}")]
    MalformedPayload {
        event_type: String,
        #[source]
        source: serde_json::Error,
    },

    /// The account that must receive the SMS has no phone number.
    #[error("Account {account_id} has no phone number to notify")]
    MissingPhone { account_id: AccountId },

    /// Neither the payload, the fetched entity nor the tracing context named
    /// a tenant, and the message needs tenant formatting.
    #[error("No tenant available for this event")]
    MissingTenant,

    /// A collaborator call failed, or returned data that cannot be used.
    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
