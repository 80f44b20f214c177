// ==========================================
// Suggested-action rules
// ==========================================
// Pure ladder over one inventory row: first hit wins. Order
// matters, stockout-with-demand outranks everything else.
// ==========================================

use crate::config::RuleThresholds;
use crate::domain::inventory::InventoryRow;
use crate::domain::types::{ListingStatus, SuggestedAction};

pub struct RuleEngine<'a> {
    thresholds: &'a RuleThresholds,
}

impl<'a> RuleEngine<'a> {
    pub fn new(thresholds: &'a RuleThresholds) -> Self {
        Self { thresholds }
    }

    /// Report scope filter: active listings, plus removed ("n/a")
    /// listings that still hold fulfillment stock.
    pub fn is_reportable(&self, status: ListingStatus, fulfillment_stock: i64) -> bool {
        match status {
            ListingStatus::Active => true,
            ListingStatus::NotApplicable => fulfillment_stock > 0,
            _ => false,
        }
    }

    /// Classify one row. Pure function of the row and thresholds.
    pub fn suggest_action(&self, row: &InventoryRow) -> SuggestedAction {
        let t = self.thresholds;
        let sales = row.sales_30d;
        let stock = row.fulfillment_stock;

        if stock <= 0 && sales > 0 {
            return SuggestedAction::RestockNow;
        }
        if sales == 0 && row.disposal_risk_units > 0 {
            return SuggestedAction::WithdrawNoRestock;
        }
        if stock < t.restock_max_stock && sales >= t.restock_min_sales {
            return SuggestedAction::RestockNow;
        }
        if row.boost_units > t.aggressive_boost_units {
            return SuggestedAction::AggressiveTurnover;
        }
        if row.boost_units > 0 && sales >= t.campaign_min_sales {
            return SuggestedAction::TurnoverCampaign;
        }
        if row.fix_units > 0 && sales > t.fix_min_sales {
            return SuggestedAction::FixListingAndRestock;
        }
        if sales < t.slow_sales_below && stock > t.slow_stock_above {
            return SuggestedAction::AvoidRestockPromote;
        }
        SuggestedAction::NoActionDefined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(sales: i64, stock: i64) -> InventoryRow {
        InventoryRow {
            account: "VALE RACE".to_string(),
            sku: "SKU-1".to_string(),
            listing_id: None,
            title: "Produto".to_string(),
            status: ListingStatus::Active,
            sales_30d: sales,
            sellable_units: 0,
            unsellable_units: 0,
            fulfillment_stock: stock,
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
    fn test_stockout_with_demand_is_restock_now() {
        let t = RuleThresholds::default();
        let engine = RuleEngine::new(&t);
        // any nonzero demand, even below the regular restock band
        assert_eq!(engine.suggest_action(&row(2, 0)), SuggestedAction::RestockNow);
    }

    #[test]
    fn test_no_movement_stock_is_not_restock() {
        let t = RuleThresholds::default();
        let engine = RuleEngine::new(&t);
        let action = engine.suggest_action(&row(0, 100));
        assert_ne!(action, SuggestedAction::RestockNow);
        // sales < 5 and stock > 10
        assert_eq!(action, SuggestedAction::AvoidRestockPromote);
    }

    #[test]
    fn test_no_sales_with_disposal_risk_is_withdraw() {
        let t = RuleThresholds::default();
        let engine = RuleEngine::new(&t);
        let mut r = row(0, 3);
        r.disposal_risk_units = 4;
        assert_eq!(
            engine.suggest_action(&r),
            SuggestedAction::WithdrawNoRestock
        );
    }

    #[test]
    fn test_low_stock_high_sales_is_restock() {
        let t = RuleThresholds::default();
        let engine = RuleEngine::new(&t);
        assert_eq!(engine.suggest_action(&row(10, 4)), SuggestedAction::RestockNow);
    }

    #[test]
    fn test_boost_ladder() {
        let t = RuleThresholds::default();
        let engine = RuleEngine::new(&t);

        let mut r = row(3, 8);
        r.boost_units = 150;
        assert_eq!(engine.suggest_action(&r), SuggestedAction::AggressiveTurnover);

        r.boost_units = 20;
        assert_eq!(engine.suggest_action(&r), SuggestedAction::TurnoverCampaign);
    }

    #[test]
    fn test_fix_listing_needs_sales() {
        let t = RuleThresholds::default();
        let engine = RuleEngine::new(&t);
        let mut r = row(6, 8);
        r.fix_units = 2;
        assert_eq!(
            engine.suggest_action(&r),
            SuggestedAction::FixListingAndRestock
        );

        // giro fraco: cai na regra de promoção, não na de correção
        let mut slow = row(2, 20);
        slow.fix_units = 2;
        assert_eq!(
            engine.suggest_action(&slow),
            SuggestedAction::AvoidRestockPromote
        );
    }

    #[test]
    fn test_healthy_row_has_no_action() {
        let t = RuleThresholds::default();
        let engine = RuleEngine::new(&t);
        assert_eq!(engine.suggest_action(&row(6, 8)), SuggestedAction::NoActionDefined);
    }

    #[test]
    fn test_reportable_filter() {
        let t = RuleThresholds::default();
        let engine = RuleEngine::new(&t);
        assert!(engine.is_reportable(ListingStatus::Active, 0));
        assert!(engine.is_reportable(ListingStatus::NotApplicable, 3));
        assert!(!engine.is_reportable(ListingStatus::NotApplicable, 0));
        assert!(!engine.is_reportable(ListingStatus::Paused, 50));
    }
}
