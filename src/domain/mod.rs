// ==========================================
// Análise Full - domain layer
// ==========================================
// Entities and categorical types. No I/O, no rules.
// ==========================================

pub mod inventory;
pub mod replenishment;
pub mod types;

pub use inventory::{
    CostJoin, CostReference, CostTable, ImportSummary, InventoryRow, RawInventoryRecord, RowIssue,
};
pub use replenishment::{
    AccountSlice, AnalyzedRow, ConsolidatedReport, ConsolidatedRow, ReplenishmentLine,
    ReplenishmentResult, SkuRollup,
};
pub use types::{
    CostAlert, Criticality, DaysOfStock, DemandBand, IssueLevel, ListingStatus, SuggestedAction,
};
