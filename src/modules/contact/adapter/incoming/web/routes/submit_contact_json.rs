use actix_web::{http::StatusCode, post, web, HttpResponse};

use crate::modules::contact::domain::entities::{ContactForm, SubmissionStatus};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/contact")]
pub async fn submit_contact_json_handler(
    req: web::Json<ContactForm>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let status = data.submit_contact.execute(req.into_inner()).await.status;

    if let SubmissionStatus::Error(msg) = &status {
        return ApiResponse::failure(StatusCode::BAD_GATEWAY, "CONTACT_FAILED", msg, &status);
    }

    ApiResponse::success(status)
}
