mod load_portfolio_service;

pub use load_portfolio_service::{LoadPolicy, LoadPortfolioService};
