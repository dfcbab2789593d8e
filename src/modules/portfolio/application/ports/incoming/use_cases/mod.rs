mod load_portfolio;

pub use load_portfolio::LoadPortfolioUseCase;
