// ==========================================
// Row mapper
// ==========================================
// Positional grid row -> RawInventoryRecord. Column letters are
// resolved to indexes once, when the mapper is built, so a bad
// profile fails before any row is touched.
//
// Contract: mapping never fails. Optional text stays None,
// garbled numerics default to zero and are reported as issues.
// ==========================================

use crate::config::{column_index, ConfigError, ReportLayout};
use crate::domain::inventory::{RawInventoryRecord, RowIssue};
use crate::domain::types::IssueLevel;
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::file_parser::cell;

struct ResolvedColumns {
    sku: usize,
    listing_id: usize,
    title: usize,
    status: usize,
    sales_30d: usize,
    affects_stock_metric: usize,
    pending_inbound: usize,
    sellable_units: usize,
    unsellable_units: usize,
    fulfillment_stock: usize,
    monitor_units: usize,
    boost_units: usize,
    fix_units: usize,
    disposal_risk_units: usize,
    time_to_deplete: usize,
}

pub struct RowMapper {
    cols: ResolvedColumns,
}

impl RowMapper {
    pub fn new(layout: &ReportLayout) -> Result<Self, ConfigError> {
        let c = &layout.columns;
        Ok(RowMapper {
            cols: ResolvedColumns {
                sku: column_index(&c.sku)?,
                listing_id: column_index(&c.listing_id)?,
                title: column_index(&c.title)?,
                status: column_index(&c.status)?,
                sales_30d: column_index(&c.sales_30d)?,
                affects_stock_metric: column_index(&c.affects_stock_metric)?,
                pending_inbound: column_index(&c.pending_inbound)?,
                sellable_units: column_index(&c.sellable_units)?,
                unsellable_units: column_index(&c.unsellable_units)?,
                fulfillment_stock: column_index(&c.fulfillment_stock)?,
                monitor_units: column_index(&c.monitor_units)?,
                boost_units: column_index(&c.boost_units)?,
                fix_units: column_index(&c.fix_units)?,
                disposal_risk_units: column_index(&c.disposal_risk_units)?,
                time_to_deplete: column_index(&c.time_to_deplete)?,
            },
        })
    }

    /// Map one grid row. `sheet_row` is the absolute 0-based row;
    /// issues carry it 1-based, as a spreadsheet user reads it.
    pub fn map_row(&self, cells: &[String], sheet_row: usize) -> (RawInventoryRecord, Vec<RowIssue>) {
        let row_number = sheet_row + 1;
        let mut issues = Vec::new();

        let sku = DataCleaner::normalize_null(cell(cells, self.cols.sku));

        let quantity = |idx: usize, field: &str, issues: &mut Vec<RowIssue>| -> i64 {
            match DataCleaner::normalize_null(cell(cells, idx)) {
                None => 0,
                Some(raw) => match DataCleaner::parse_int(&raw) {
                    Some(v) => v,
                    None => {
                        issues.push(RowIssue {
                            row_number,
                            sku: sku.clone(),
                            level: IssueLevel::Warning,
                            field: field.to_string(),
                            message: format!("valor não numérico '{raw}', assumido 0"),
                        });
                        0
                    }
                },
            }
        };

        let record = RawInventoryRecord {
            sku: sku.clone(),
            listing_id: DataCleaner::normalize_null(cell(cells, self.cols.listing_id)),
            title: DataCleaner::normalize_null(cell(cells, self.cols.title)),
            status_raw: DataCleaner::normalize_null(cell(cells, self.cols.status)),
            sales_30d: quantity(self.cols.sales_30d, "sales_30d", &mut issues),
            sellable_units: quantity(self.cols.sellable_units, "sellable_units", &mut issues),
            unsellable_units: quantity(self.cols.unsellable_units, "unsellable_units", &mut issues),
            fulfillment_stock: quantity(
                self.cols.fulfillment_stock,
                "fulfillment_stock",
                &mut issues,
            ),
            monitor_units: quantity(self.cols.monitor_units, "monitor_units", &mut issues),
            boost_units: quantity(self.cols.boost_units, "boost_units", &mut issues),
            fix_units: quantity(self.cols.fix_units, "fix_units", &mut issues),
            disposal_risk_units: quantity(
                self.cols.disposal_risk_units,
                "disposal_risk_units",
                &mut issues,
            ),
            affects_stock_metric: DataCleaner::normalize_null(cell(
                cells,
                self.cols.affects_stock_metric,
            )),
            pending_inbound: DataCleaner::normalize_null(cell(cells, self.cols.pending_inbound)),
            time_to_deplete: DataCleaner::normalize_null(cell(cells, self.cols.time_to_deplete)),
            row_number,
        };

        (record, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ReportColumns, ReportLayout};

    fn compact_layout() -> ReportLayout {
        // A..O, no gaps, handy for fixtures
        ReportLayout {
            sheet_name: "Resumo".to_string(),
            data_start_row: 0,
            columns: ReportColumns {
                sku: "A".into(),
                listing_id: "B".into(),
                title: "C".into(),
                status: "D".into(),
                sales_30d: "E".into(),
                affects_stock_metric: "F".into(),
                pending_inbound: "G".into(),
                sellable_units: "H".into(),
                unsellable_units: "I".into(),
                fulfillment_stock: "J".into(),
                monitor_units: "K".into(),
                boost_units: "L".into(),
                fix_units: "M".into(),
                disposal_risk_units: "N".into(),
                time_to_deplete: "O".into(),
            },
        }
    }

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_map_row_basic() {
        let mapper = RowMapper::new(&compact_layout()).unwrap();
        let cells = row(&[
            "SKU-1", "MLB9", "Óleo 5W30", "Ativo", "42", "Sim", "", "10", "1", "8", "0", "0", "0",
            "0", "12 dias",
        ]);

        let (record, issues) = mapper.map_row(&cells, 12);
        assert!(issues.is_empty());
        assert_eq!(record.sku.as_deref(), Some("SKU-1"));
        assert_eq!(record.sales_30d, 42);
        assert_eq!(record.fulfillment_stock, 8);
        assert_eq!(record.row_number, 13);
        assert_eq!(record.pending_inbound, None);
    }

    #[test]
    fn test_map_row_garbled_numeric_defaults_and_flags() {
        let mapper = RowMapper::new(&compact_layout()).unwrap();
        let cells = row(&[
            "SKU-2", "", "", "Ativo", "muitas", "", "", "", "", "5", "", "", "", "", "",
        ]);

        let (record, issues) = mapper.map_row(&cells, 0);
        assert_eq!(record.sales_30d, 0);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "sales_30d");
        assert_eq!(issues[0].level, IssueLevel::Warning);
    }

    #[test]
    fn test_map_row_short_row_is_all_defaults() {
        let mapper = RowMapper::new(&compact_layout()).unwrap();
        let (record, issues) = mapper.map_row(&row(&["SKU-3"]), 0);
        assert!(issues.is_empty());
        assert_eq!(record.fulfillment_stock, 0);
        assert_eq!(record.status_raw, None);
    }
}
