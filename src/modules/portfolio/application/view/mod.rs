mod portfolio_view;

pub use portfolio_view::{PortfolioView, ProjectCardView, SocialLinkView, StatView};
