// ==========================================
// Cost sheet reader
// ==========================================
// The cost sheet carries one line per stock lot; SKUs repeat.
// Lines aggregate per SKU: units and cost sum, days-in-stock
// averages over the lines that carried it.
// ==========================================

use crate::config::{column_index, AnalysisConfig, CostLayout};
use crate::domain::inventory::{CostReference, CostTable};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::ImportResult;
use crate::importer::file_parser::{cell, is_blank_row, UniversalFileParser};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, instrument};

#[derive(Default)]
struct CostAccumulator {
    aged_stock_units: f64,
    days_sum: f64,
    days_count: u32,
    total_cost: f64,
    sellable_units: f64,
}

pub struct CostReader {
    layout: CostLayout,
    sku_col: usize,
    aged_col: usize,
    days_col: usize,
    cost_col: usize,
    sellable_col: usize,
}

impl CostReader {
    pub fn new(config: &AnalysisConfig) -> ImportResult<Self> {
        let c = &config.costs.columns;
        Ok(CostReader {
            sku_col: column_index(&c.sku)?,
            aged_col: column_index(&c.aged_stock_units)?,
            days_col: column_index(&c.days_in_stock)?,
            cost_col: column_index(&c.total_cost)?,
            sellable_col: column_index(&c.sellable_units)?,
            layout: config.costs.clone(),
        })
    }

    #[instrument(skip(self), fields(path = %path.as_ref().display()))]
    pub fn read<P: AsRef<Path>>(&self, path: P) -> ImportResult<CostTable> {
        let grid = UniversalFileParser.parse(path.as_ref(), Some(&self.layout.sheet_name))?;

        let mut buckets: HashMap<String, CostAccumulator> = HashMap::new();
        for (_, cells) in grid.data_rows(self.layout.data_start_row) {
            if is_blank_row(cells) {
                continue;
            }
            let sku = match DataCleaner::normalize_null(cell(cells, self.sku_col)) {
                Some(s) => s,
                None => continue, // lot line without SKU, nothing to join against
            };

            let decimal =
                |idx: usize| DataCleaner::parse_float(cell(cells, idx)).unwrap_or(0.0);

            let acc = buckets.entry(sku).or_default();
            acc.aged_stock_units += decimal(self.aged_col);
            acc.total_cost += decimal(self.cost_col);
            acc.sellable_units += decimal(self.sellable_col);
            if let Some(days) = DataCleaner::parse_float(cell(cells, self.days_col)) {
                acc.days_sum += days;
                acc.days_count += 1;
            }
        }

        let entries = buckets
            .into_iter()
            .map(|(sku, acc)| CostReference {
                sku,
                aged_stock_units: acc.aged_stock_units,
                avg_days_in_stock: if acc.days_count > 0 {
                    (acc.days_sum / acc.days_count as f64).round()
                } else {
                    0.0
                },
                total_cost: acc.total_cost,
                sellable_units: acc.sellable_units,
            })
            .collect::<Vec<_>>();

        debug!(skus = entries.len(), "tabela de custos agregada");
        Ok(CostTable::from_entries(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CostColumns;
    use std::io::Write;

    fn compact_config() -> AnalysisConfig {
        let mut config = AnalysisConfig::default();
        config.costs = CostLayout {
            sheet_name: "Custos".to_string(),
            data_start_row: 1,
            columns: CostColumns {
                sku: "A".into(),
                aged_stock_units: "B".into(),
                days_in_stock: "C".into(),
                total_cost: "D".into(),
                sellable_units: "E".into(),
            },
        };
        config
    }

    fn csv_costs(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_cost_lines_aggregate_per_sku() {
        let file = csv_costs(
            "sku,unid,dias,custo,aptas\n\
             SKU-1,2,100,\"80,50\",1\n\
             SKU-1,3,200,\"40,25\",2\n\
             SKU-2,1,30,10,1\n",
        );
        let table = CostReader::new(&compact_config())
            .unwrap()
            .read(file.path())
            .unwrap();

        assert_eq!(table.len(), 2);
        let one = table.lookup("SKU-1").unwrap();
        assert_eq!(one.aged_stock_units, 5.0);
        assert_eq!(one.avg_days_in_stock, 150.0);
        assert!((one.total_cost - 120.75).abs() < 1e-9);
    }

    #[test]
    fn test_lines_without_sku_are_ignored() {
        let file = csv_costs("sku,unid,dias,custo,aptas\n,5,10,99,1\nSKU-9,1,10,5,1\n");
        let table = CostReader::new(&compact_config())
            .unwrap()
            .read(file.path())
            .unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.lookup("SKU-9").is_some());
    }
}
