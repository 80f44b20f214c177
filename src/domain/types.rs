// ==========================================
// Análise Full - domain type definitions
// ==========================================
// Closed categorical sets used by the rule engine.
// Display renders the operator-facing label (pt-BR, as the
// consolidated workbook shows it); serde uses stable codes.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Listing status (marketplace lifecycle)
// ==========================================
// Source values are free text ("Ativo", "Pausado", "N/A", ...);
// normalization happens once at the import boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingStatus {
    Active,        // "ativo"
    NotApplicable, // "n/a" (listing removed, stock may remain)
    Paused,        // "pausado"
    Unknown,       // anything else, kept for review
}

impl ListingStatus {
    /// Normalize a source status cell. Matching is case-insensitive
    /// and whitespace-tolerant.
    pub fn from_source(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "ativo" => ListingStatus::Active,
            "n/a" => ListingStatus::NotApplicable,
            "pausado" => ListingStatus::Paused,
            _ => ListingStatus::Unknown,
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingStatus::Active => write!(f, "ativo"),
            ListingStatus::NotApplicable => write!(f, "n/a"),
            ListingStatus::Paused => write!(f, "pausado"),
            ListingStatus::Unknown => write!(f, "desconhecido"),
        }
    }
}

// ==========================================
// Suggested action (stock comment)
// ==========================================
// Closed set, one per SKU row. priority() drives the
// cross-account rollup: the highest-priority action wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuggestedAction {
    RestockNow,           // ruptura iminente com demanda
    FixListingAndRestock, // anúncio com problema e giro bom
    AggressiveTurnover,   // excesso grande para impulsionar
    TurnoverCampaign,     // reduzir estoque com campanha
    WithdrawNoRestock,    // sem giro e risco de descarte
    AvoidRestockPromote,  // giro fraco com estoque alto
    NoActionDefined,      // saudável / nada a fazer
}

impl SuggestedAction {
    /// Rollup weight. Higher wins when the same SKU appears in
    /// more than one account.
    pub fn priority(&self) -> u8 {
        match self {
            SuggestedAction::RestockNow => 6,
            SuggestedAction::FixListingAndRestock => 5,
            SuggestedAction::AggressiveTurnover => 4,
            SuggestedAction::TurnoverCampaign => 3,
            SuggestedAction::WithdrawNoRestock => 2,
            SuggestedAction::AvoidRestockPromote => 1,
            SuggestedAction::NoActionDefined => 0,
        }
    }
}

impl fmt::Display for SuggestedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestedAction::RestockNow => write!(f, "Repor imediatamente"),
            SuggestedAction::FixListingAndRestock => write!(f, "Corrigir anúncio e repor"),
            SuggestedAction::AggressiveTurnover => write!(f, "Campanha de giro agressiva"),
            SuggestedAction::TurnoverCampaign => write!(f, "Campanha de giro / reduzir estoque"),
            SuggestedAction::WithdrawNoRestock => write!(f, "Avaliar retirada / sem reposição"),
            SuggestedAction::AvoidRestockPromote => write!(f, "Evitar reposição / criar promoção"),
            SuggestedAction::NoActionDefined => write!(f, "Sem ação definida"),
        }
    }
}

// ==========================================
// Cost alert
// ==========================================
// Classified from the joined cost reference. NeedsCostReview is
// a distinct state for rows whose SKU had no match in the cost
// table; it is never collapsed into "cost = 0".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CostAlert {
    RedAlert,         // custo acumulado acima do teto
    EvaluateTurnover, // custo na faixa de atenção
    NeedsCostReview,  // SKU sem correspondência na planilha de custos
    NoUrgency,        // custo presente e baixo
    NoCost,           // custo apurado igual a zero / tabela ausente
}

impl CostAlert {
    pub fn priority(&self) -> u8 {
        match self {
            CostAlert::RedAlert => 4,
            CostAlert::EvaluateTurnover => 3,
            CostAlert::NeedsCostReview => 2,
            CostAlert::NoUrgency => 1,
            CostAlert::NoCost => 0,
        }
    }
}

impl fmt::Display for CostAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostAlert::RedAlert => write!(f, "Alerta Vermelho"),
            CostAlert::EvaluateTurnover => write!(f, "Avaliar giro"),
            CostAlert::NeedsCostReview => write!(f, "Revisar custo"),
            CostAlert::NoUrgency => write!(f, "Sem urgência"),
            CostAlert::NoCost => write!(f, "Sem custo"),
        }
    }
}

// ==========================================
// Demand band (sales velocity)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DemandBand {
    High,
    Medium,
    Low,
}

impl fmt::Display for DemandBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemandBand::High => write!(f, "Alta"),
            DemandBand::Medium => write!(f, "Média"),
            DemandBand::Low => write!(f, "Baixa"),
        }
    }
}

// ==========================================
// Replenishment criticality
// ==========================================
// rank() orders the consolidated report: most critical first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Criticality {
    TotalStockout,
    Urgent,
    Recommended,
    Ok,
}

impl Criticality {
    pub fn rank(&self) -> u8 {
        match self {
            Criticality::TotalStockout => 0,
            Criticality::Urgent => 1,
            Criticality::Recommended => 2,
            Criticality::Ok => 3,
        }
    }
}

impl fmt::Display for Criticality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criticality::TotalStockout => write!(f, "Ruptura total"),
            Criticality::Urgent => write!(f, "Reposição urgente"),
            Criticality::Recommended => write!(f, "Reposição recomendada"),
            Criticality::Ok => write!(f, "OK"),
        }
    }
}

// ==========================================
// Days of stock
// ==========================================
// Undefined when there is no sales movement. Kept as a distinct
// case instead of an infinity or a division error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "days", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DaysOfStock {
    Days(f64),
    NoMovement,
}

impl DaysOfStock {
    /// stock / daily average, or NoMovement when the average is zero.
    /// Negative stock is clamped to zero days, not reported as
    /// negative coverage.
    pub fn compute(stock: i64, daily_sales_avg: f64) -> Self {
        if daily_sales_avg <= 0.0 {
            return DaysOfStock::NoMovement;
        }
        let stock = stock.max(0) as f64;
        DaysOfStock::Days(stock / daily_sales_avg)
    }

    pub fn is_no_movement(&self) -> bool {
        matches!(self, DaysOfStock::NoMovement)
    }
}

impl fmt::Display for DaysOfStock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaysOfStock::Days(d) => write!(f, "{:.1}", d),
            DaysOfStock::NoMovement => write!(f, "Sem giro"),
        }
    }
}

// ==========================================
// Row issue level
// ==========================================
// Error rows stay in the output but are not classified;
// Warning/Info rows are processed normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueLevel {
    Error,
    Warning,
    Info,
}

impl fmt::Display for IssueLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueLevel::Error => write!(f, "ERROR"),
            IssueLevel::Warning => write!(f, "WARNING"),
            IssueLevel::Info => write!(f, "INFO"),
        }
    }
}
