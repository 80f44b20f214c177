// ==========================================
// Report layouts
// ==========================================
// Source reports address fields by Excel column letter, not by
// header text, and data starts below a fixed banner region.
// Both are configuration: marketplaces move columns around.
// ==========================================

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Convert an Excel column letter ("A", "K", "AA") to a 0-based index.
pub fn column_index(letter: &str) -> Result<usize, ConfigError> {
    let letter = letter.trim();
    if letter.is_empty() {
        return Err(ConfigError::InvalidColumn(letter.to_string()));
    }
    let mut result: usize = 0;
    for ch in letter.chars() {
        let upper = ch.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return Err(ConfigError::InvalidColumn(letter.to_string()));
        }
        result = result * 26 + (upper as usize - 'A' as usize + 1);
    }
    Ok(result - 1)
}

// ==========================================
// FULL stock report layout
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportLayout {
    /// Worksheet holding the summary table (Excel only).
    pub sheet_name: String,
    /// First data row, 0-based. The rows above it are the report
    /// banner and header block.
    pub data_start_row: usize,
    pub columns: ReportColumns,
}

impl Default for ReportLayout {
    fn default() -> Self {
        ReportLayout {
            sheet_name: "Resumo".to_string(),
            data_start_row: 12,
            columns: ReportColumns::default(),
        }
    }
}

/// Column letters of the FULL report, one per mapped field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportColumns {
    pub sku: String,
    pub listing_id: String,
    pub title: String,
    pub status: String,
    pub sales_30d: String,
    pub affects_stock_metric: String,
    pub pending_inbound: String,
    pub sellable_units: String,
    pub unsellable_units: String,
    pub fulfillment_stock: String,
    pub monitor_units: String,
    pub boost_units: String,
    pub fix_units: String,
    pub disposal_risk_units: String,
    pub time_to_deplete: String,
}

impl Default for ReportColumns {
    fn default() -> Self {
        ReportColumns {
            sku: "D".to_string(),
            listing_id: "E".to_string(),
            title: "F".to_string(),
            status: "I".to_string(),
            sales_30d: "K".to_string(),
            affects_stock_metric: "L".to_string(),
            pending_inbound: "M".to_string(),
            sellable_units: "P".to_string(),
            unsellable_units: "Q".to_string(),
            fulfillment_stock: "U".to_string(),
            monitor_units: "W".to_string(),
            boost_units: "X".to_string(),
            fix_units: "Y".to_string(),
            disposal_risk_units: "Z".to_string(),
            time_to_deplete: "AA".to_string(),
        }
    }
}

// ==========================================
// Cost sheet layout
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CostLayout {
    pub sheet_name: String,
    pub data_start_row: usize,
    pub columns: CostColumns,
}

impl Default for CostLayout {
    fn default() -> Self {
        CostLayout {
            sheet_name: "Custos por estoque antigo".to_string(),
            data_start_row: 2,
            columns: CostColumns::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CostColumns {
    pub sku: String,
    pub aged_stock_units: String,
    pub days_in_stock: String,
    pub total_cost: String,
    pub sellable_units: String,
}

impl Default for CostColumns {
    fn default() -> Self {
        CostColumns {
            sku: "C".to_string(),
            aged_stock_units: "F".to_string(),
            days_in_stock: "I".to_string(),
            total_cost: "K".to_string(),
            sellable_units: "L".to_string(),
        }
    }
}
