// ==========================================
// Análise Full - engine layer
// ==========================================
// Business rules. Every engine is a pure function of its inputs
// and the configured thresholds.
// ==========================================

pub mod consolidation;
pub mod cost_alert;
pub mod enrichment;
pub mod replenishment;
pub mod rules;

pub use consolidation::{consolidate, cross_account_rollup, replenishment_plan};
pub use enrichment::join_costs;
pub use replenishment::{DbmEngine, DbmFigures};
pub use rules::RuleEngine;
