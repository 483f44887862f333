pub mod category_service;
pub mod summary_service;
pub mod transaction_service;

pub use category_service::{CategoryService, DEFAULT_COLORS};
pub use summary_service::{
    CategoryUsage, Insight, InsightKind, LedgerOverview, MonthlyTotals, SummaryService,
};
pub use transaction_service::TransactionService;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced to the form layer. Each variant carries one
/// human-readable message suitable for direct display; the ledger itself
/// never produces these (lookup misses there degrade to absent values).
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Category not found: {0}")]
    CategoryNotFound(String),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),
    #[error("{0}")]
    Invalid(String),
}
