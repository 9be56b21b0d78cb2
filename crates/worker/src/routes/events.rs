//! Push ingress: the bus delivers one event per request.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::post;
use axum::{Json, Router};
use herald_events::{EventContext, InboundEvent};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub const TENANT_HEADER: &str = "x-tenant-id";
pub const TRACE_HEADER: &str = "x-trace-id";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchResponse {
    /// `None` when the event did not warrant a notification.
    pub message_id: Option<String>,
}

/// POST /events
///
/// 200 acknowledges the event whether or not an SMS went out. Errors map to
/// 4xx/5xx through [`AppError`].
async fn receive_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(event): Json<InboundEvent>,
) -> AppResult<Json<DispatchResponse>> {
    let ctx = event_context(&headers)?;
    tracing::debug!(
        event_type = %event.event_type,
        received_at = %event.received_at,
        "Event received"
    );
    let outcome = state.router.dispatch(&event, &ctx).await?;

    Ok(Json(DispatchResponse {
        message_id: outcome.message_id,
    }))
}

/// Tracing context carried by the delivery headers.
fn event_context(headers: &HeaderMap) -> AppResult<EventContext> {
    let mut ctx = EventContext::new();

    if let Some(value) = header(headers, TENANT_HEADER)? {
        let tenant_id = value
            .parse()
            .map_err(|_| AppError::BadRequest(format!("Invalid {TENANT_HEADER}: {value}")))?;
        ctx = ctx.with_tenant(tenant_id);
    }
    if let Some(value) = header(headers, TRACE_HEADER)? {
        ctx = ctx.with_trace_id(value);
    }

    Ok(ctx)
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> AppResult<Option<&'a str>> {
    match headers.get(name) {
        None => Ok(None),
        Some(value) => value
            .to_str()
            .map(|v| Some(v.trim()).filter(|v| !v.is_empty()))
            .map_err(|_| AppError::BadRequest(format!("{name} is not valid ASCII"))),
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/events", post(receive_event))
}
