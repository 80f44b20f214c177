// ==========================================
// Rule thresholds
// ==========================================
// Every cut-off the engines compare against. Defaults reproduce
// the rules the replenishment macro shipped with; a JSON profile
// can override any subset of fields.
// ==========================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleThresholds {
    // ===== reporting window =====
    /// Days covered by the sales column of the source report.
    pub sales_window_days: u32,
    /// Days of demand a replenishment order should cover.
    pub coverage_days: u32,

    // ===== suggested-action ladder =====
    /// Restock when stock is below this and sales at least restock_min_sales.
    pub restock_max_stock: i64,
    pub restock_min_sales: i64,
    /// Aggressive campaign when boost qty exceeds this.
    pub aggressive_boost_units: i64,
    /// Regular campaign needs any boost qty and at least this many sales.
    pub campaign_min_sales: i64,
    /// Listing fixes only pay off above this sales level.
    pub fix_min_sales: i64,
    /// "Avoid restock" band: sales below / stock above.
    pub slow_sales_below: i64,
    pub slow_stock_above: i64,

    // ===== cost alert bands =====
    pub cost_red_above: f64,
    pub cost_review_from: f64,

    // ===== demand bands =====
    /// High band: daily average strictly above this.
    pub high_band_avg: f64,
    /// Medium band: daily average at least this.
    pub medium_band_avg: f64,
    pub high_factor: f64,
    pub high_extra: i64,
    pub medium_factor: f64,
    pub medium_extra: i64,
    pub low_factor: f64,
    pub low_extra: i64,

    // ===== criticality =====
    /// Urgent when stock is below this fraction of the suggested qty.
    pub urgent_stock_ratio: f64,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        RuleThresholds {
            sales_window_days: 30,
            coverage_days: 15,

            restock_max_stock: 5,
            restock_min_sales: 10,
            aggressive_boost_units: 100,
            campaign_min_sales: 3,
            fix_min_sales: 5,
            slow_sales_below: 5,
            slow_stock_above: 10,

            cost_red_above: 150.0,
            cost_review_from: 101.0,

            high_band_avg: 1.0,
            medium_band_avg: 0.3,
            high_factor: 1.3,
            high_extra: 2,
            medium_factor: 1.2,
            medium_extra: 1,
            low_factor: 1.1,
            low_extra: 0,

            urgent_stock_ratio: 0.5,
        }
    }
}
