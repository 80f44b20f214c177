// ==========================================
// Análise Full - inventory domain model
// ==========================================
// One record per SKU per account report. Raw records are the
// import-pipeline intermediate; InventoryRow is the typed,
// filtered shape the engines work on. Cost data joins by SKU.
// ==========================================

use crate::domain::types::{IssueLevel, ListingStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

// ==========================================
// RawInventoryRecord - import intermediate
// ==========================================
// Produced by the row mapper straight from the grid. Numeric
// fields default to zero when the cell is empty or garbled;
// the mapper reports those substitutions as row issues.
// Lifecycle: import pipeline only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawInventoryRecord {
    pub sku: Option<String>,
    pub listing_id: Option<String>,
    pub title: Option<String>,
    pub status_raw: Option<String>,

    pub sales_30d: i64,            // vendas na janela do relatório
    pub sellable_units: i64,       // unidades aptas para venda
    pub unsellable_units: i64,     // não aptas
    pub fulfillment_stock: i64,    // estoque no Full
    pub monitor_units: i64,        // boa qualidade (monitorar)
    pub boost_units: i64,          // qtd. impulsionar
    pub fix_units: i64,            // qtd. corrigir
    pub disposal_risk_units: i64,  // qtd. risco de descarte

    pub affects_stock_metric: Option<String>,
    pub pending_inbound: Option<String>,
    pub time_to_deplete: Option<String>,

    // 1-based sheet row, for issue reports
    pub row_number: usize,
}

// ==========================================
// InventoryRow - one SKU in one account
// ==========================================
// SKU may be empty when the source row had no identifier; such
// rows carry an Error-level issue and skip classification but
// are never silently dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRow {
    pub account: String,
    pub sku: String,
    pub listing_id: Option<String>,
    pub title: String,
    pub status: ListingStatus,

    pub sales_30d: i64,
    pub sellable_units: i64,
    pub unsellable_units: i64,
    pub fulfillment_stock: i64,
    pub monitor_units: i64,
    pub boost_units: i64,
    pub fix_units: i64,
    pub disposal_risk_units: i64,

    pub affects_stock_metric: Option<String>,
    pub pending_inbound: Option<String>,
    pub time_to_deplete: Option<String>,

    pub row_number: usize,
}

impl InventoryRow {
    pub fn from_record(account: &str, record: RawInventoryRecord) -> Self {
        InventoryRow {
            account: account.to_string(),
            sku: record.sku.unwrap_or_default(),
            listing_id: record.listing_id,
            title: record.title.unwrap_or_default(),
            status: ListingStatus::from_source(record.status_raw.as_deref().unwrap_or("")),
            sales_30d: record.sales_30d,
            sellable_units: record.sellable_units,
            unsellable_units: record.unsellable_units,
            fulfillment_stock: record.fulfillment_stock,
            monitor_units: record.monitor_units,
            boost_units: record.boost_units,
            fix_units: record.fix_units,
            disposal_risk_units: record.disposal_risk_units,
            affects_stock_metric: record.affects_stock_metric,
            pending_inbound: record.pending_inbound,
            time_to_deplete: record.time_to_deplete,
            row_number: record.row_number,
        }
    }
}

// ==========================================
// CostReference - internal cost per SKU
// ==========================================
// Aggregated from the cost sheet: one entry per SKU, summed over
// its source lines, days-in-stock averaged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostReference {
    pub sku: String,
    pub aged_stock_units: f64,
    pub avg_days_in_stock: f64,
    pub total_cost: f64,
    pub sellable_units: f64,
}

// ==========================================
// CostTable - SKU -> CostReference
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CostTable {
    entries: HashMap<String, CostReference>,
}

impl CostTable {
    pub fn from_entries(entries: Vec<CostReference>) -> Self {
        CostTable {
            entries: entries.into_iter().map(|e| (e.sku.clone(), e)).collect(),
        }
    }

    pub fn lookup(&self, sku: &str) -> Option<&CostReference> {
        self.entries.get(sku)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ==========================================
// CostJoin - outcome of the cost enrichment
// ==========================================
// Distinguishes "no cost sheet was loaded" from "the sheet was
// loaded and this SKU is missing". Only the latter demands a
// human cost review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "reference", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CostJoin {
    TableAbsent,
    Unmatched,
    Matched(CostReference),
}

impl CostJoin {
    pub fn reference(&self) -> Option<&CostReference> {
        match self {
            CostJoin::Matched(r) => Some(r),
            _ => None,
        }
    }

    pub fn is_unmatched(&self) -> bool {
        matches!(self, CostJoin::Unmatched)
    }
}

// ==========================================
// RowIssue - data quality finding
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowIssue {
    pub row_number: usize,
    pub sku: Option<String>,
    pub level: IssueLevel,
    pub field: String,
    pub message: String,
}

// ==========================================
// ImportSummary - one report ingestion
// ==========================================
// Counters plus the issue list, so a reviewer can see exactly
// which rows were defaulted, flagged, or skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSummary {
    pub batch_id: Uuid,
    pub file_name: Option<String>,
    pub total_rows: usize,    // data rows seen after the start-row slice
    pub blank_rows: usize,    // fully empty rows, skipped
    pub parsed_rows: usize,   // mapped into records
    pub eligible_rows: usize, // passed the status/stock filter
    pub issues: Vec<RowIssue>,
    pub imported_at: DateTime<Utc>,
    pub elapsed_ms: u128,
}

impl ImportSummary {
    pub fn issue_count(&self, level: IssueLevel) -> usize {
        self.issues.iter().filter(|i| i.level == level).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sku: Option<&str>) -> RawInventoryRecord {
        RawInventoryRecord {
            sku: sku.map(str::to_string),
            listing_id: Some("MLB123".to_string()),
            title: Some("Filtro de óleo".to_string()),
            status_raw: Some("Ativo".to_string()),
            sales_30d: 12,
            sellable_units: 4,
            unsellable_units: 1,
            fulfillment_stock: 5,
            monitor_units: 0,
            boost_units: 0,
            fix_units: 0,
            disposal_risk_units: 0,
            affects_stock_metric: None,
            pending_inbound: None,
            time_to_deplete: None,
            row_number: 13,
        }
    }

    #[test]
    fn test_row_from_record_normalizes_status() {
        let row = InventoryRow::from_record("VALE RACE", record(Some("SKU-1")));
        assert_eq!(row.account, "VALE RACE");
        assert_eq!(row.status, ListingStatus::Active);
        assert_eq!(row.sku, "SKU-1");
    }

    #[test]
    fn test_row_from_record_missing_sku_becomes_empty() {
        let row = InventoryRow::from_record("VANPARTS", record(None));
        assert!(row.sku.is_empty());
    }

    #[test]
    fn test_cost_table_lookup() {
        let table = CostTable::from_entries(vec![CostReference {
            sku: "SKU-1".to_string(),
            aged_stock_units: 3.0,
            avg_days_in_stock: 120.0,
            total_cost: 180.0,
            sellable_units: 2.0,
        }]);
        assert!(table.lookup("SKU-1").is_some());
        assert!(table.lookup("SKU-2").is_none());
    }
}
