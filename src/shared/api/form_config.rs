// src/shared/api/form_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::FormConfig;
use tracing::warn;

const FORM_PAYLOAD_LIMIT: usize = 16 * 1024;

/// Urlencoded bodies that fail to parse get the same envelope as bad JSON.
pub fn custom_form_config() -> FormConfig {
    FormConfig::default()
        .limit(FORM_PAYLOAD_LIMIT)
        .error_handler(|err, req| {
            let message = err.to_string();
            warn!("Rejected form payload on {}: {}", req.path(), message);
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}
