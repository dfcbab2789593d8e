use actix_web::{get, web, Responder};

use crate::modules::contact::adapter::incoming::web::render_contact_form;
use crate::modules::contact::domain::entities::{ContactForm, SubmissionStatus};
use crate::modules::portfolio::adapter::incoming::web::pages::home_page_response;
use crate::modules::portfolio::application::view::PortfolioView;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[get("/")]
pub async fn get_home_handler(data: web::Data<AppState>) -> impl Responder {
    let snapshot = data.load_portfolio.execute().await;
    let view = PortfolioView::from_snapshot(&snapshot);
    let form_html = render_contact_form(&ContactForm::default(), &SubmissionStatus::Idle);

    home_page_response(&view, &form_html)
}
