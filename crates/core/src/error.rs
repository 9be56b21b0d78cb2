/// Errors raised while talking to a remote collaborator or interpreting the
/// data it returned.
///
/// `service` names the collaborator (`"account"`, `"sms"`, ...) so log lines
/// and HTTP error bodies say which dependency failed.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("{service} service unreachable: {message}")]
    Upstream {
        service: &'static str,
        message: String,
    },

    #[error("{service} service returned HTTP {status}")]
    Status { service: &'static str, status: u16 },

    #[error("{service} service returned an unreadable body: {message}")]
    Decode {
        service: &'static str,
        message: String,
    },

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "order",
            id: "39043094".to_string(),
        };
        assert_eq!(err.to_string(), "Entity not found: order with id 39043094");
    }

    #[test]
    fn status_display_names_service() {
        let err = CoreError::Status {
            service: "sms",
            status: 503,
        };
        assert_eq!(err.to_string(), "sms service returned HTTP 503");
    }
}
