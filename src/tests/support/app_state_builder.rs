use std::sync::Arc;

use actix_web::web;

use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::modules::portfolio::application::ports::incoming::use_cases::LoadPortfolioUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    load_portfolio: Arc<dyn LoadPortfolioUseCase + Send + Sync>,
    submit_contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            load_portfolio: Arc::new(StubLoadPortfolioUseCase::default()),
            submit_contact: Arc::new(StubSubmitContactUseCase::success()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_load_portfolio(
        mut self,
        uc: impl LoadPortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.load_portfolio = Arc::new(uc);
        self
    }

    pub fn with_submit_contact(
        mut self,
        uc: impl SubmitContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_contact = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            load_portfolio: self.load_portfolio,
            submit_contact: self.submit_contact,
        })
    }
}
