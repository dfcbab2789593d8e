use async_trait::async_trait;

use crate::modules::portfolio::domain::entities::PortfolioSnapshot;

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// One load per page mount. Failures are logged and swallowed; the
/// returned snapshot is always renderable.
#[async_trait]
pub trait LoadPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> PortfolioSnapshot;
}
