// ==========================================
// Análise Full - replenishment domain model
// ==========================================
// Outputs of the rule engine (per row) and of the consolidation
// step (per session). ConsolidatedRow is the flat, serializable
// record the export boundary renders.
// ==========================================

use crate::domain::inventory::{CostJoin, InventoryRow};
use crate::domain::types::{
    CostAlert, Criticality, DaysOfStock, DemandBand, ListingStatus, SuggestedAction,
};
use serde::{Deserialize, Serialize};

// ==========================================
// ReplenishmentResult - rule engine output
// ==========================================
// Pure function of one enriched row. Carries the numeric support
// values that justified the classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplenishmentResult {
    pub action: SuggestedAction,
    pub cost_alert: CostAlert,

    pub daily_sales_avg: f64,
    pub days_of_stock: DaysOfStock,
    pub demand_band: DemandBand,
    pub safety_factor: f64,
    pub extra_units: i64,
    pub suggested_qty: i64,
    pub criticality: Criticality,

    // human-readable trace of the suggested-qty arithmetic
    pub calc_note: String,
}

impl ReplenishmentResult {
    pub fn needs_cost_review(&self) -> bool {
        self.cost_alert == CostAlert::NeedsCostReview
    }
}

// ==========================================
// AnalyzedRow - (InventoryRow, ReplenishmentResult) pair
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedRow {
    pub row: InventoryRow,
    pub cost: CostJoin,
    pub result: ReplenishmentResult,
}

// ==========================================
// ConsolidatedRow - flat export record
// ==========================================
// One row per SKU per account, account-tagged. Cost fields are
// None when the SKU had no match, never zero-filled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsolidatedRow {
    pub account: String,
    pub sku: String,
    pub listing_id: Option<String>,
    pub title: String,
    pub status: ListingStatus,

    pub sales_30d: i64,
    pub fulfillment_stock: i64,
    pub sellable_units: i64,
    pub unsellable_units: i64,
    pub boost_units: i64,
    pub fix_units: i64,
    pub disposal_risk_units: i64,
    pub time_to_deplete: Option<String>,

    pub aged_stock_units: Option<f64>,
    pub avg_days_in_stock: Option<f64>,
    pub total_cost: Option<f64>,
    pub cost_alert: CostAlert,

    pub action: SuggestedAction,
    pub daily_sales_avg: f64,
    pub days_of_stock: DaysOfStock,
    pub demand_band: DemandBand,
    pub suggested_qty: i64,
    pub criticality: Criticality,
    pub calc_note: String,
}

impl ConsolidatedRow {
    pub fn from_analyzed(analyzed: &AnalyzedRow) -> Self {
        let row = &analyzed.row;
        let result = &analyzed.result;
        let cost = analyzed.cost.reference();
        ConsolidatedRow {
            account: row.account.clone(),
            sku: row.sku.clone(),
            listing_id: row.listing_id.clone(),
            title: row.title.clone(),
            status: row.status,
            sales_30d: row.sales_30d,
            fulfillment_stock: row.fulfillment_stock,
            sellable_units: row.sellable_units,
            unsellable_units: row.unsellable_units,
            boost_units: row.boost_units,
            fix_units: row.fix_units,
            disposal_risk_units: row.disposal_risk_units,
            time_to_deplete: row.time_to_deplete.clone(),
            aged_stock_units: cost.map(|c| c.aged_stock_units),
            avg_days_in_stock: cost.map(|c| c.avg_days_in_stock),
            total_cost: cost.map(|c| c.total_cost),
            cost_alert: result.cost_alert,
            action: result.action,
            daily_sales_avg: result.daily_sales_avg,
            days_of_stock: result.days_of_stock,
            demand_band: result.demand_band,
            suggested_qty: result.suggested_qty,
            criticality: result.criticality,
            calc_note: result.calc_note.clone(),
        }
    }
}

// ==========================================
// ConsolidatedReport - ordered, account-tagged table
// ==========================================
// Row count equals the sum of the per-account row counts; SKUs
// repeating across accounts stay as separate rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsolidatedReport {
    pub rows: Vec<ConsolidatedRow>,
}

impl ConsolidatedReport {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total_sales_30d(&self) -> i64 {
        self.rows.iter().map(|r| r.sales_30d).sum()
    }

    pub fn total_stock(&self) -> i64 {
        self.rows.iter().map(|r| r.fulfillment_stock).sum()
    }

    pub fn total_cost(&self) -> f64 {
        self.rows.iter().filter_map(|r| r.total_cost).sum()
    }
}

// ==========================================
// SkuRollup - cross-account view of one SKU
// ==========================================
// Derived panel: aggregates the same SKU across every loaded
// account. The consolidated report itself never merges rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkuRollup {
    pub sku: String,
    pub title: String,
    pub per_account: Vec<AccountSlice>,
    pub total_sales_30d: i64,
    pub total_stock: i64,
    pub total_cost: f64,
    pub top_action: SuggestedAction,
    pub top_alert: CostAlert,
    // sales/cost when cost > 0, otherwise 0
    pub margin_ratio: f64,
}

impl SkuRollup {
    pub fn accounts_involved(&self) -> String {
        self.per_account
            .iter()
            .map(|s| s.account.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSlice {
    pub account: String,
    pub sales_30d: i64,
    pub stock: i64,
}

// ==========================================
// ReplenishmentLine - purchase plan over rollups
// ==========================================
// The buying view: DBM applied to the combined demand and stock
// of each SKU across accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplenishmentLine {
    pub sku: String,
    pub title: String,
    pub total_sales_30d: i64,
    pub total_stock: i64,
    pub suggested_qty: i64,
    pub criticality: Criticality,
    pub demand_band: DemandBand,
    pub calc_note: String,
}
