pub mod portfolio_source_http;

pub use portfolio_source_http::PortfolioSourceHttp;
