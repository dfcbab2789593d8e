// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;
use tracing::warn;

/// Contact messages are short; anything larger is rejected before deserialization.
const JSON_PAYLOAD_LIMIT: usize = 16 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_PAYLOAD_LIMIT)
        .error_handler(|err, req| {
            let message = err.to_string();
            warn!("Rejected JSON payload on {}: {}", req.path(), message);
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}
