// ==========================================
// DBM replenishment engine
// ==========================================
// Demand-based management: classify sales velocity into a band,
// project demand over the coverage horizon with the band's
// safety factor, and grade how critical the current stock is
// against that projection. Deterministic, no hidden state.
// ==========================================

use crate::config::RuleThresholds;
use crate::domain::inventory::{CostJoin, InventoryRow};
use crate::domain::replenishment::{AnalyzedRow, ReplenishmentResult};
use crate::domain::types::{Criticality, DaysOfStock, DemandBand};
use crate::engine::{cost_alert, rules::RuleEngine};
use tracing::instrument;

// Numeric core of one DBM evaluation, shared between per-row
// results and the cross-account purchase plan.
#[derive(Debug, Clone)]
pub struct DbmFigures {
    pub daily_sales_avg: f64,
    pub days_of_stock: DaysOfStock,
    pub demand_band: DemandBand,
    pub safety_factor: f64,
    pub extra_units: i64,
    pub suggested_qty: i64,
    pub criticality: Criticality,
    pub calc_note: String,
}

pub struct DbmEngine<'a> {
    thresholds: &'a RuleThresholds,
}

impl<'a> DbmEngine<'a> {
    pub fn new(thresholds: &'a RuleThresholds) -> Self {
        Self { thresholds }
    }

    fn band(&self, daily_sales_avg: f64) -> (DemandBand, f64, i64) {
        let t = self.thresholds;
        if daily_sales_avg > t.high_band_avg {
            (DemandBand::High, t.high_factor, t.high_extra)
        } else if daily_sales_avg >= t.medium_band_avg {
            (DemandBand::Medium, t.medium_factor, t.medium_extra)
        } else {
            (DemandBand::Low, t.low_factor, t.low_extra)
        }
    }

    /// Evaluate a sales/stock pair. Works the same for one row of
    /// one account and for a SKU's totals across accounts.
    pub fn evaluate(&self, sales: i64, stock: i64) -> DbmFigures {
        let t = self.thresholds;
        let daily_sales_avg = sales.max(0) as f64 / t.sales_window_days as f64;
        let (demand_band, safety_factor, extra_units) = self.band(daily_sales_avg);

        let suggested_qty = (daily_sales_avg * t.coverage_days as f64 * safety_factor
            + extra_units as f64)
            .round() as i64;

        let criticality = if stock <= 0 {
            Criticality::TotalStockout
        } else if (stock as f64) < suggested_qty as f64 * t.urgent_stock_ratio {
            Criticality::Urgent
        } else if stock < suggested_qty {
            Criticality::Recommended
        } else {
            Criticality::Ok
        };

        let calc_note = format!(
            "Média {:.2} × {} × {} + {} = {}",
            daily_sales_avg, t.coverage_days, safety_factor, extra_units, suggested_qty
        );

        DbmFigures {
            daily_sales_avg,
            days_of_stock: DaysOfStock::compute(stock, daily_sales_avg),
            demand_band,
            safety_factor,
            extra_units,
            suggested_qty,
            criticality,
            calc_note,
        }
    }

    /// Full per-row classification: action ladder, cost alert and
    /// the DBM figures, from one enriched row.
    pub fn evaluate_row(&self, row: &InventoryRow, cost: &CostJoin) -> ReplenishmentResult {
        let figures = self.evaluate(row.sales_30d, row.fulfillment_stock);
        ReplenishmentResult {
            action: RuleEngine::new(self.thresholds).suggest_action(row),
            cost_alert: cost_alert::classify(cost, self.thresholds),
            daily_sales_avg: figures.daily_sales_avg,
            days_of_stock: figures.days_of_stock,
            demand_band: figures.demand_band,
            safety_factor: figures.safety_factor,
            extra_units: figures.extra_units,
            suggested_qty: figures.suggested_qty,
            criticality: figures.criticality,
            calc_note: figures.calc_note,
        }
    }

    #[instrument(skip(self, rows), fields(count = rows.len()))]
    pub fn evaluate_batch(&self, rows: Vec<(InventoryRow, CostJoin)>) -> Vec<AnalyzedRow> {
        rows.into_iter()
            .map(|(row, cost)| {
                let result = self.evaluate_row(&row, &cost);
                AnalyzedRow { row, cost, result }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{ListingStatus, SuggestedAction};

    fn engine(t: &RuleThresholds) -> DbmEngine<'_> {
        DbmEngine::new(t)
    }

    #[test]
    fn test_high_band_math() {
        let t = RuleThresholds::default();
        // 60 sales / 30d = 2.0/day -> High: 2.0 x 15 x 1.3 + 2 = 41
        let figures = engine(&t).evaluate(60, 100);
        assert_eq!(figures.demand_band, DemandBand::High);
        assert_eq!(figures.suggested_qty, 41);
        assert_eq!(figures.criticality, Criticality::Ok);
    }

    #[test]
    fn test_medium_and_low_bands() {
        let t = RuleThresholds::default();
        // 15/30 = 0.5/day -> Medium: 0.5 x 15 x 1.2 + 1 = 10
        let medium = engine(&t).evaluate(15, 4);
        assert_eq!(medium.demand_band, DemandBand::Medium);
        assert_eq!(medium.suggested_qty, 10);
        assert_eq!(medium.criticality, Criticality::Urgent);

        // 3/30 = 0.1/day -> Low: 0.1 x 15 x 1.1 + 0 = 2 (rounded)
        let low = engine(&t).evaluate(3, 1);
        assert_eq!(low.demand_band, DemandBand::Low);
        assert_eq!(low.suggested_qty, 2);
        assert_eq!(low.criticality, Criticality::Urgent);
    }

    #[test]
    fn test_zero_stock_is_total_stockout_with_zero_days() {
        let t = RuleThresholds::default();
        let figures = engine(&t).evaluate(60, 0);
        assert_eq!(figures.criticality, Criticality::TotalStockout);
        match figures.days_of_stock {
            DaysOfStock::Days(d) => assert_eq!(d, 0.0),
            DaysOfStock::NoMovement => panic!("tem giro, dias deveriam ser 0"),
        }
    }

    #[test]
    fn test_zero_sales_reports_no_movement() {
        let t = RuleThresholds::default();
        let figures = engine(&t).evaluate(0, 100);
        assert!(figures.days_of_stock.is_no_movement());
        assert_eq!(figures.suggested_qty, 0);
        assert_eq!(figures.criticality, Criticality::Ok);
    }

    #[test]
    fn test_stockout_row_with_demand_classifies_restock_now() {
        let t = RuleThresholds::default();
        let row = InventoryRow {
            account: "VALE RACE".to_string(),
            sku: "SKU-1".to_string(),
            listing_id: None,
            title: "Produto".to_string(),
            status: ListingStatus::Active,
            sales_30d: 60, // 2.0/dia
            sellable_units: 0,
            unsellable_units: 0,
            fulfillment_stock: 0,
            monitor_units: 0,
            boost_units: 0,
            fix_units: 0,
            disposal_risk_units: 0,
            affects_stock_metric: None,
            pending_inbound: None,
            time_to_deplete: None,
            row_number: 13,
        };
        let result = engine(&t).evaluate_row(&row, &CostJoin::TableAbsent);
        assert_eq!(result.action, SuggestedAction::RestockNow);
        assert_eq!(result.criticality, Criticality::TotalStockout);
        assert_eq!(result.days_of_stock, DaysOfStock::Days(0.0));
    }

    #[test]
    fn test_calc_note_shows_the_arithmetic() {
        let t = RuleThresholds::default();
        let figures = engine(&t).evaluate(60, 10);
        assert_eq!(figures.calc_note, "Média 2.00 × 15 × 1.3 + 2 = 41");
    }
}
