// ==========================================
// Cost alert classification
// ==========================================
// Bands over the accumulated storage cost of a SKU. An SKU the
// cost sheet does not know about is a review case, not a free
// one.
// ==========================================

use crate::config::RuleThresholds;
use crate::domain::inventory::CostJoin;
use crate::domain::types::CostAlert;

pub fn classify(join: &CostJoin, thresholds: &RuleThresholds) -> CostAlert {
    match join {
        CostJoin::TableAbsent => CostAlert::NoCost,
        CostJoin::Unmatched => CostAlert::NeedsCostReview,
        CostJoin::Matched(reference) => {
            let cost = reference.total_cost;
            if cost > thresholds.cost_red_above {
                CostAlert::RedAlert
            } else if cost >= thresholds.cost_review_from {
                CostAlert::EvaluateTurnover
            } else if cost == 0.0 {
                CostAlert::NoCost
            } else {
                CostAlert::NoUrgency
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::inventory::CostReference;

    fn matched(total_cost: f64) -> CostJoin {
        CostJoin::Matched(CostReference {
            sku: "SKU-1".to_string(),
            aged_stock_units: 1.0,
            avg_days_in_stock: 90.0,
            total_cost,
            sellable_units: 1.0,
        })
    }

    #[test]
    fn test_bands() {
        let t = RuleThresholds::default();
        assert_eq!(classify(&matched(150.01), &t), CostAlert::RedAlert);
        assert_eq!(classify(&matched(150.0), &t), CostAlert::EvaluateTurnover);
        assert_eq!(classify(&matched(101.0), &t), CostAlert::EvaluateTurnover);
        assert_eq!(classify(&matched(100.0), &t), CostAlert::NoUrgency);
        assert_eq!(classify(&matched(0.0), &t), CostAlert::NoCost);
    }

    #[test]
    fn test_unmatched_is_review_not_free() {
        let t = RuleThresholds::default();
        assert_eq!(classify(&CostJoin::Unmatched, &t), CostAlert::NeedsCostReview);
    }

    #[test]
    fn test_absent_table_is_no_cost() {
        let t = RuleThresholds::default();
        assert_eq!(classify(&CostJoin::TableAbsent, &t), CostAlert::NoCost);
    }
}
