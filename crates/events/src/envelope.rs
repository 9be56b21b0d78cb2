//! Inbound event envelope and the tracing context it is delivered with.

use chrono::{DateTime, Utc};
use herald_core::types::TenantId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// InboundEvent
// ---------------------------------------------------------------------------

/// An event received from the bus.
///
/// On the wire the payload is a JSON document encoded as a string. Producers
/// that inline the document as a JSON object are accepted too; the object is
/// re-encoded so [`decode`](InboundEvent::decode) behaves the same for both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundEvent {
    /// Event-type URN, see [`crate::urn`].
    #[serde(rename = "type")]
    pub event_type: String,

    #[serde(deserialize_with = "payload_as_string")]
    pub payload: String,

    /// When this process received the event (UTC). Not part of the wire format.
    #[serde(skip, default = "Utc::now")]
    pub received_at: DateTime<Utc>,
}

impl InboundEvent {
    pub fn new(event_type: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            payload: payload.into(),
            received_at: Utc::now(),
        }
    }

    /// Decode the payload into the schema bound to this event type.
    pub fn decode<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.payload)
    }
}

fn payload_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

// ---------------------------------------------------------------------------
// EventContext
// ---------------------------------------------------------------------------

/// Tracing context of one delivery.
///
/// Carries the tenant for flows whose payload does not name one, and the
/// upstream trace id for log correlation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventContext {
    pub tenant_id: Option<TenantId>,
    pub trace_id: Option<String>,
}

impl EventContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tenant(mut self, tenant_id: TenantId) -> Self {
        self.tenant_id = Some(tenant_id);
        self
    }

    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
