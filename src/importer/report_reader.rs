// ==========================================
// FULL report reader
// ==========================================
// Orchestrates one report ingestion: parse grid, slice to the
// data region, map rows, validate. Blank rows are counted and
// skipped; everything else is kept.
// ==========================================

use crate::config::AnalysisConfig;
use crate::domain::inventory::{RawInventoryRecord, RowIssue};
use crate::domain::types::IssueLevel;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::{is_blank_row, UniversalFileParser};
use crate::importer::row_mapper::RowMapper;
use crate::importer::validator::RecordValidator;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, instrument, warn};

#[derive(Debug, Clone)]
pub struct ParsedReport {
    pub records: Vec<RawInventoryRecord>,
    pub issues: Vec<RowIssue>,
    /// Data rows seen below the start row, blanks included.
    pub total_rows: usize,
    pub blank_rows: usize,
}

pub struct ReportReader {
    mapper: RowMapper,
    sheet_name: String,
    data_start_row: usize,
}

impl ReportReader {
    pub fn new(config: &AnalysisConfig) -> ImportResult<Self> {
        Ok(ReportReader {
            mapper: RowMapper::new(&config.report)?,
            sheet_name: config.report.sheet_name.clone(),
            data_start_row: config.report.data_start_row,
        })
    }

    #[instrument(skip(self), fields(path = %path.as_ref().display()))]
    pub fn read<P: AsRef<Path>>(&self, path: P) -> ImportResult<ParsedReport> {
        let path = path.as_ref();
        let grid = UniversalFileParser.parse(path, Some(&self.sheet_name))?;

        let mut records = Vec::new();
        let mut issues = Vec::new();
        let mut total_rows = 0usize;
        let mut blank_rows = 0usize;

        for (sheet_row, cells) in grid.data_rows(self.data_start_row) {
            total_rows += 1;
            if is_blank_row(cells) {
                blank_rows += 1;
                continue;
            }

            let (record, mut row_issues) = self.mapper.map_row(cells, sheet_row);
            row_issues.extend(RecordValidator::validate(&record));
            issues.append(&mut row_issues);
            records.push(record);
        }

        if records.is_empty() {
            // an upload that produces nothing must fail loudly,
            // not flow through as an empty result
            return Err(ImportError::EmptyReport(path.display().to_string()));
        }

        // SKUs are unique within one account's report; a repeat is
        // usually a copy/paste slip in the source sheet
        let mut seen = HashSet::new();
        for record in &records {
            if let Some(sku) = &record.sku {
                if !seen.insert(sku.clone()) {
                    issues.push(RowIssue {
                        row_number: record.row_number,
                        sku: Some(sku.clone()),
                        level: IssueLevel::Warning,
                        field: "sku".to_string(),
                        message: "SKU duplicado no relatório".to_string(),
                    });
                }
            }
        }

        if !issues.is_empty() {
            warn!(
                issues = issues.len(),
                rows = records.len(),
                "relatório importado com ressalvas"
            );
        }
        debug!(rows = records.len(), blank_rows, "relatório interpretado");

        Ok(ParsedReport {
            records,
            issues,
            total_rows,
            blank_rows,
        })
    }
}
