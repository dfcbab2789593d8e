use actix_web::{post, web, Responder};

use crate::modules::contact::adapter::incoming::web::render_contact_form;
use crate::modules::contact::domain::entities::ContactForm;
use crate::modules::portfolio::adapter::incoming::web::pages::home_page_response;
use crate::modules::portfolio::application::view::PortfolioView;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Browser form post. Re-renders the page with the settled status.
#[post("/contact")]
pub async fn submit_contact_form_handler(
    form: web::Form<ContactForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (submission, snapshot) = futures::join!(
        data.submit_contact.execute(form.into_inner()),
        data.load_portfolio.execute()
    );

    let view = PortfolioView::from_snapshot(&snapshot);
    let form_html = render_contact_form(&submission.form, &submission.status);

    home_page_response(&view, &form_html)
}
