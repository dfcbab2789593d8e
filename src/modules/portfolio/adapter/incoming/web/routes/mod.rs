mod get_home;
mod get_portfolio;

pub use get_home::get_home_handler;
pub use get_portfolio::get_portfolio_handler;
