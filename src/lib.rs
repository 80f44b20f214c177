// ==========================================
// Análise Full - core library
// ==========================================
// Marketplace fulfillment inventory analysis: import per-account
// FULL reports, join internal costs, classify inventory health,
// compute DBM replenishment and export one consolidated workbook.
// All processing is in-memory, one session at a time.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Import layer - external files in
pub mod importer;

// Engine layer - business rules
pub mod engine;

// Configuration layer - layouts and thresholds
pub mod config;

// Session - explicit per-run state
pub mod session;

// Export boundary - workbook and flat records
pub mod export;

// Log system
pub mod logging;

// ==========================================
// Re-exports
// ==========================================

// Domain types
pub use domain::types::{
    CostAlert, Criticality, DaysOfStock, DemandBand, IssueLevel, ListingStatus, SuggestedAction,
};

// Domain entities
pub use domain::{
    AnalyzedRow, ConsolidatedReport, ConsolidatedRow, CostJoin, CostReference, CostTable,
    ImportSummary, InventoryRow, RawInventoryRecord, ReplenishmentLine, ReplenishmentResult,
    RowIssue, SkuRollup,
};

// Engines
pub use engine::{consolidate, cross_account_rollup, replenishment_plan, DbmEngine, RuleEngine};

// Import / export surfaces
pub use config::{AnalysisConfig, RuleThresholds};
pub use export::{ExportError, WorkbookExporter};
pub use importer::{ImportError, ReportReader};
pub use session::{AccountAnalysis, AnalysisSession};

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "Análise Full";
