use actix_web::{get, web, Responder};

use crate::modules::portfolio::application::view::PortfolioView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Same merged view the page renders, as JSON.
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    let snapshot = data.load_portfolio.execute().await;
    ApiResponse::success(PortfolioView::from_snapshot(&snapshot))
}
