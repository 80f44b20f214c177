// ==========================================
// Análise Full - configuration layer
// ==========================================
// Column positions, sheet names, start rows and rule thresholds
// are all data, loaded from an optional JSON profile. Defaults
// reproduce the stock FULL report layout.
// ==========================================

pub mod layout;
pub mod thresholds;

pub use layout::{column_index, CostColumns, CostLayout, ReportColumns, ReportLayout};
pub use thresholds::RuleThresholds;

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("perfil de configuração não encontrado: {0}")]
    FileNotFound(String),

    #[error("falha ao ler o perfil: {0}")]
    Io(#[from] std::io::Error),

    #[error("perfil JSON inválido: {0}")]
    Json(#[from] serde_json::Error),

    #[error("coluna inválida: '{0}' (esperada letra de coluna Excel)")]
    InvalidColumn(String),
}

// ==========================================
// AnalysisConfig - full profile
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub report: ReportLayout,
    pub costs: CostLayout,
    pub thresholds: RuleThresholds,
}

impl AnalysisConfig {
    /// Load a JSON profile. Missing fields fall back to defaults,
    /// so a profile only has to spell out what differs.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        let raw = std::fs::read_to_string(path)?;
        let config: AnalysisConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every configured column letter up front, so bad
    /// profiles fail at load time instead of mid-import.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let r = &self.report.columns;
        for letter in [
            &r.sku,
            &r.listing_id,
            &r.title,
            &r.status,
            &r.sales_30d,
            &r.affects_stock_metric,
            &r.pending_inbound,
            &r.sellable_units,
            &r.unsellable_units,
            &r.fulfillment_stock,
            &r.monitor_units,
            &r.boost_units,
            &r.fix_units,
            &r.disposal_risk_units,
            &r.time_to_deplete,
        ] {
            column_index(letter)?;
        }
        let c = &self.costs.columns;
        for letter in [
            &c.sku,
            &c.aged_stock_units,
            &c.days_in_stock,
            &c.total_cost,
            &c.sellable_units,
        ] {
            column_index(letter)?;
        }
        Ok(())
    }
}
