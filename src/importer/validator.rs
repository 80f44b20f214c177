// ==========================================
// Record validator
// ==========================================
// Data-quality checks on mapped records. Findings never remove
// a row; Error-level findings keep the row out of classification
// while still surfacing it in the import summary.
// ==========================================

use crate::domain::inventory::{RawInventoryRecord, RowIssue};
use crate::domain::types::IssueLevel;

pub struct RecordValidator;

impl RecordValidator {
    pub fn validate(record: &RawInventoryRecord) -> Vec<RowIssue> {
        let mut issues = Vec::new();

        if record.sku.is_none() {
            issues.push(RowIssue {
                row_number: record.row_number,
                sku: None,
                level: IssueLevel::Error,
                field: "sku".to_string(),
                message: "SKU ausente".to_string(),
            });
        }

        if record.fulfillment_stock < 0 {
            issues.push(RowIssue {
                row_number: record.row_number,
                sku: record.sku.clone(),
                level: IssueLevel::Warning,
                field: "fulfillment_stock".to_string(),
                message: format!("estoque negativo: {}", record.fulfillment_stock),
            });
        }

        if record.sales_30d < 0 {
            issues.push(RowIssue {
                row_number: record.row_number,
                sku: record.sku.clone(),
                level: IssueLevel::Warning,
                field: "sales_30d".to_string(),
                message: format!("vendas negativas: {}", record.sales_30d),
            });
        }

        if record.status_raw.is_none() {
            issues.push(RowIssue {
                row_number: record.row_number,
                sku: record.sku.clone(),
                level: IssueLevel::Info,
                field: "status".to_string(),
                message: "status vazio".to_string(),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> RawInventoryRecord {
        RawInventoryRecord {
            sku: Some("SKU-1".to_string()),
            listing_id: None,
            title: None,
            status_raw: Some("ativo".to_string()),
            sales_30d: 10,
            sellable_units: 0,
            unsellable_units: 0,
            fulfillment_stock: 3,
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
    fn test_clean_record_has_no_issues() {
        assert!(RecordValidator::validate(&record()).is_empty());
    }

    #[test]
    fn test_missing_sku_is_error() {
        let mut r = record();
        r.sku = None;
        let issues = RecordValidator::validate(&r);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].level, IssueLevel::Error);
        assert_eq!(issues[0].field, "sku");
    }

    #[test]
    fn test_negative_stock_is_warning() {
        let mut r = record();
        r.fulfillment_stock = -2;
        let issues = RecordValidator::validate(&r);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].level, IssueLevel::Warning);
    }
}
