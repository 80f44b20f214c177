// ==========================================
// Analysis session
// ==========================================
// Explicit session state: every loaded account and its analyzed
// rows live here and nowhere else. The session is created, fed
// and dropped within one processing run; nothing persists.
// ==========================================

use crate::config::AnalysisConfig;
use crate::domain::inventory::{ImportSummary, InventoryRow};
use crate::domain::replenishment::AnalyzedRow;
use crate::domain::types::CostAlert;
use crate::engine::{enrichment, DbmEngine, RuleEngine};
use crate::importer::{CostReader, ImportError, ReportReader};
use chrono::Utc;
use std::path::Path;
use std::time::Instant;
use tracing::{info, instrument};
use uuid::Uuid;

// ==========================================
// AccountAnalysis - one account's processed report
// ==========================================
#[derive(Debug, Clone)]
pub struct AccountAnalysis {
    pub account: String,
    pub rows: Vec<AnalyzedRow>,
    pub summary: ImportSummary,
}

impl AccountAnalysis {
    pub fn total_sales_30d(&self) -> i64 {
        self.rows.iter().map(|r| r.row.sales_30d).sum()
    }

    pub fn total_stock(&self) -> i64 {
        self.rows.iter().map(|r| r.row.fulfillment_stock).sum()
    }

    pub fn total_cost(&self) -> f64 {
        self.rows
            .iter()
            .filter_map(|r| r.cost.reference().map(|c| c.total_cost))
            .sum()
    }

    pub fn alert_count(&self, alert: CostAlert) -> usize {
        self.rows
            .iter()
            .filter(|r| r.result.cost_alert == alert)
            .count()
    }
}

// ==========================================
// AnalysisSession
// ==========================================
#[derive(Debug, Default)]
pub struct AnalysisSession {
    config: AnalysisConfig,
    accounts: Vec<AccountAnalysis>,
}

impl AnalysisSession {
    pub fn new(config: AnalysisConfig) -> Self {
        AnalysisSession {
            config,
            accounts: Vec::new(),
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn accounts(&self) -> &[AccountAnalysis] {
        &self.accounts
    }

    pub fn get(&self, account: &str) -> Option<&AccountAnalysis> {
        self.accounts.iter().find(|a| a.account == account)
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Run the whole pipeline for one account: parse, map,
    /// validate, filter, enrich with costs, classify. Loading the
    /// same account again replaces its previous slot.
    #[instrument(skip(self, report_path, costs_path))]
    pub fn load_account(
        &mut self,
        account: &str,
        report_path: &Path,
        costs_path: Option<&Path>,
    ) -> Result<&AccountAnalysis, ImportError> {
        let started = Instant::now();

        let parsed = ReportReader::new(&self.config)?.read(report_path)?;
        let parsed_rows = parsed.records.len();

        let cost_table = match costs_path {
            Some(path) => Some(CostReader::new(&self.config)?.read(path)?),
            None => None,
        };

        let rules = RuleEngine::new(&self.config.thresholds);
        let eligible: Vec<InventoryRow> = parsed
            .records
            .into_iter()
            .map(|record| InventoryRow::from_record(account, record))
            .filter(|row| rules.is_reportable(row.status, row.fulfillment_stock))
            .collect();
        let eligible_rows = eligible.len();

        let enriched = enrichment::join_costs(eligible, cost_table.as_ref());
        let rows = DbmEngine::new(&self.config.thresholds).evaluate_batch(enriched);

        let summary = ImportSummary {
            batch_id: Uuid::new_v4(),
            file_name: report_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string()),
            total_rows: parsed.total_rows,
            blank_rows: parsed.blank_rows,
            parsed_rows,
            eligible_rows,
            issues: parsed.issues,
            imported_at: Utc::now(),
            elapsed_ms: started.elapsed().as_millis(),
        };

        info!(
            account,
            rows = rows.len(),
            issues = summary.issues.len(),
            elapsed_ms = summary.elapsed_ms as u64,
            "conta processada"
        );

        let analysis = AccountAnalysis {
            account: account.to_string(),
            rows,
            summary,
        };

        let pos = match self.accounts.iter().position(|a| a.account == account) {
            Some(i) => {
                self.accounts[i] = analysis;
                i
            }
            None => {
                self.accounts.push(analysis);
                self.accounts.len() - 1
            }
        };
        Ok(&self.accounts[pos])
    }
}
