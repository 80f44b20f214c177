// ==========================================
// Workbook exporter
// ==========================================
// Renders a session into one .xlsx: a sheet per account, the
// account-tagged consolidated table, the per-SKU panel, the
// replenishment plan and the import issue log. Cost-alert cells
// carry the tag colors reviewers know from the old workbook.
// ==========================================

use crate::domain::replenishment::{ConsolidatedReport, ReplenishmentLine, SkuRollup};
use crate::domain::types::CostAlert;
use crate::session::AnalysisSession;
use std::path::Path;
use thiserror::Error;
use tracing::{info, instrument};
use umya_spreadsheet::{writer, Spreadsheet, Worksheet};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("nada para exportar: nenhuma conta carregada")]
    NothingToExport,

    #[error("falha ao montar a planilha: {0}")]
    Workbook(String),

    #[error("falha ao gravar o arquivo: {0}")]
    Io(#[from] std::io::Error),
}

const ACCOUNT_HEADERS: [&str; 20] = [
    "SKU",
    "# Anúncio",
    "Produto",
    "Status",
    "Vendas últimos 30 dias",
    "Afeta métrica estoque",
    "Entrada pendente",
    "Unid. aptas p/ venda",
    "Não aptas",
    "Estoque Full",
    "Boa Qualidade",
    "Qtd. Impulsionar",
    "Qtd. Corrigir",
    "Qtd. Risco Descarte",
    "Tempo até esgotar",
    "Comentário estoque",
    "Estoque antigo",
    "Dias estocado (média)",
    "Custo total",
    "Alerta de custo",
];

const CONSOLIDATED_HEADERS: [&str; 15] = [
    "Conta",
    "SKU",
    "Produto",
    "Status",
    "Vendas 30d",
    "Estoque Full",
    "Média diária",
    "Dias de estoque",
    "Categoria",
    "Qtd. Sugerida",
    "Criticidade",
    "Comentário estoque",
    "Alerta de custo",
    "Custo total",
    "Cálculo Usado",
];

const PANEL_HEADERS: [&str; 9] = [
    "SKU",
    "Produto",
    "Empresas Envolvidas",
    "Total Vendas 30d",
    "Total Estoque",
    "Custo Total",
    "Margem %",
    "Ação Recomendada",
    "Alerta de Custo",
];

const PLAN_HEADERS: [&str; 8] = [
    "SKU",
    "Produto",
    "Total Vendas 30d",
    "Total Estoque",
    "Qtd. Sugerida",
    "Criticidade",
    "Categoria",
    "Cálculo Usado",
];

const ISSUE_HEADERS: [&str; 6] = ["Conta", "Linha", "SKU", "Nível", "Campo", "Ocorrência"];

/// ARGB-less fill colors, same palette the alert tags used.
fn alert_color(alert: CostAlert) -> &'static str {
    match alert {
        CostAlert::RedAlert => "FFC7CE",
        CostAlert::EvaluateTurnover => "FFEB9C",
        CostAlert::NeedsCostReview => "FCD5B4",
        CostAlert::NoUrgency => "C6EFCE",
        CostAlert::NoCost => "F2F2F2",
    }
}

/// Excel sheet names: max 31 chars, no []:*?/\ characters.
fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        .take(31)
        .collect();
    if cleaned.trim().is_empty() {
        "Conta".to_string()
    } else {
        cleaned
    }
}

fn unique_sheet_name(book: &Spreadsheet, base: &str) -> String {
    let base = sanitize_sheet_name(base);
    if book.get_sheet_by_name(&base).is_none() {
        return base;
    }
    let mut n = 2usize;
    loop {
        // make room for the suffix inside the 31-char limit
        let suffix = format!(" ({})", n);
        let stem: String = base.chars().take(31 - suffix.chars().count()).collect();
        let candidate = format!("{}{}", stem.trim_end(), suffix);
        if book.get_sheet_by_name(&candidate).is_none() {
            return candidate;
        }
        n += 1;
    }
}

fn set_text(sheet: &mut Worksheet, col: u32, row: u32, value: &str) {
    sheet.get_cell_mut((col, row)).set_value(value);
}

fn set_num(sheet: &mut Worksheet, col: u32, row: u32, value: f64) {
    sheet.get_cell_mut((col, row)).set_value_number(value);
}

fn write_headers(sheet: &mut Worksheet, headers: &[&str]) {
    for (i, header) in headers.iter().enumerate() {
        set_text(sheet, i as u32 + 1, 1, header);
    }
}

pub struct WorkbookExporter;

impl WorkbookExporter {
    pub fn new() -> Self {
        WorkbookExporter
    }

    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn export_to_file<P: AsRef<Path>>(
        &self,
        session: &AnalysisSession,
        report: &ConsolidatedReport,
        rollups: &[SkuRollup],
        plan: &[ReplenishmentLine],
        path: P,
    ) -> Result<(), ExportError> {
        if session.is_empty() {
            return Err(ExportError::NothingToExport);
        }

        let mut book = umya_spreadsheet::new_file();

        for account in session.accounts() {
            let name = unique_sheet_name(&book, &account.account);
            let sheet = book
                .new_sheet(&name)
                .map_err(|e| ExportError::Workbook(e.to_string()))?;

            write_headers(sheet, &ACCOUNT_HEADERS);
            for (i, analyzed) in account.rows.iter().enumerate() {
                let row = i as u32 + 2;
                let r = &analyzed.row;
                let result = &analyzed.result;
                let cost = analyzed.cost.reference();

                set_text(sheet, 1, row, &r.sku);
                set_text(sheet, 2, row, r.listing_id.as_deref().unwrap_or(""));
                set_text(sheet, 3, row, &r.title);
                set_text(sheet, 4, row, &r.status.to_string());
                set_num(sheet, 5, row, r.sales_30d as f64);
                set_text(sheet, 6, row, r.affects_stock_metric.as_deref().unwrap_or(""));
                set_text(sheet, 7, row, r.pending_inbound.as_deref().unwrap_or(""));
                set_num(sheet, 8, row, r.sellable_units as f64);
                set_num(sheet, 9, row, r.unsellable_units as f64);
                set_num(sheet, 10, row, r.fulfillment_stock as f64);
                set_num(sheet, 11, row, r.monitor_units as f64);
                set_num(sheet, 12, row, r.boost_units as f64);
                set_num(sheet, 13, row, r.fix_units as f64);
                set_num(sheet, 14, row, r.disposal_risk_units as f64);
                set_text(sheet, 15, row, r.time_to_deplete.as_deref().unwrap_or(""));
                set_text(sheet, 16, row, &result.action.to_string());
                match cost {
                    Some(c) => {
                        set_num(sheet, 17, row, c.aged_stock_units);
                        set_num(sheet, 18, row, c.avg_days_in_stock);
                        set_num(sheet, 19, row, c.total_cost);
                    }
                    None => {
                        set_text(sheet, 17, row, "");
                        set_text(sheet, 18, row, "");
                        set_text(sheet, 19, row, "");
                    }
                }
                set_text(sheet, 20, row, &result.cost_alert.to_string());
                sheet
                    .get_style_mut((20u32, row))
                    .set_background_color(alert_color(result.cost_alert));
            }
        }

        {
            let name = unique_sheet_name(&book, "Consolidado por Conta");
            let sheet = book
                .new_sheet(&name)
                .map_err(|e| ExportError::Workbook(e.to_string()))?;
            write_headers(sheet, &CONSOLIDATED_HEADERS);
            for (i, r) in report.rows.iter().enumerate() {
                let row = i as u32 + 2;
                set_text(sheet, 1, row, &r.account);
                set_text(sheet, 2, row, &r.sku);
                set_text(sheet, 3, row, &r.title);
                set_text(sheet, 4, row, &r.status.to_string());
                set_num(sheet, 5, row, r.sales_30d as f64);
                set_num(sheet, 6, row, r.fulfillment_stock as f64);
                set_num(sheet, 7, row, r.daily_sales_avg);
                set_text(sheet, 8, row, &r.days_of_stock.to_string());
                set_text(sheet, 9, row, &r.demand_band.to_string());
                set_num(sheet, 10, row, r.suggested_qty as f64);
                set_text(sheet, 11, row, &r.criticality.to_string());
                set_text(sheet, 12, row, &r.action.to_string());
                set_text(sheet, 13, row, &r.cost_alert.to_string());
                match r.total_cost {
                    Some(cost) => set_num(sheet, 14, row, cost),
                    None => set_text(sheet, 14, row, ""),
                }
                set_text(sheet, 15, row, &r.calc_note);
                sheet
                    .get_style_mut((13u32, row))
                    .set_background_color(alert_color(r.cost_alert));
            }
        }

        {
            let name = unique_sheet_name(&book, "Painel Consolidado");
            let sheet = book
                .new_sheet(&name)
                .map_err(|e| ExportError::Workbook(e.to_string()))?;
            write_headers(sheet, &PANEL_HEADERS);
            for (i, rollup) in rollups.iter().enumerate() {
                let row = i as u32 + 2;
                set_text(sheet, 1, row, &rollup.sku);
                set_text(sheet, 2, row, &rollup.title);
                set_text(sheet, 3, row, &rollup.accounts_involved());
                set_num(sheet, 4, row, rollup.total_sales_30d as f64);
                set_num(sheet, 5, row, rollup.total_stock as f64);
                set_num(sheet, 6, row, rollup.total_cost);
                set_num(sheet, 7, row, rollup.margin_ratio);
                set_text(sheet, 8, row, &rollup.top_action.to_string());
                set_text(sheet, 9, row, &rollup.top_alert.to_string());
                sheet
                    .get_style_mut((9u32, row))
                    .set_background_color(alert_color(rollup.top_alert));
            }
        }

        {
            let name = unique_sheet_name(&book, "Reposição Full");
            let sheet = book
                .new_sheet(&name)
                .map_err(|e| ExportError::Workbook(e.to_string()))?;
            write_headers(sheet, &PLAN_HEADERS);
            for (i, line) in plan.iter().enumerate() {
                let row = i as u32 + 2;
                set_text(sheet, 1, row, &line.sku);
                set_text(sheet, 2, row, &line.title);
                set_num(sheet, 3, row, line.total_sales_30d as f64);
                set_num(sheet, 4, row, line.total_stock as f64);
                set_num(sheet, 5, row, line.suggested_qty as f64);
                set_text(sheet, 6, row, &line.criticality.to_string());
                set_text(sheet, 7, row, &line.demand_band.to_string());
                set_text(sheet, 8, row, &line.calc_note);
            }
        }

        {
            let name = unique_sheet_name(&book, "Ocorrências");
            let sheet = book
                .new_sheet(&name)
                .map_err(|e| ExportError::Workbook(e.to_string()))?;
            write_headers(sheet, &ISSUE_HEADERS);
            let mut row = 2u32;
            for account in session.accounts() {
                for issue in &account.summary.issues {
                    set_text(sheet, 1, row, &account.account);
                    set_num(sheet, 2, row, issue.row_number as f64);
                    set_text(sheet, 3, row, issue.sku.as_deref().unwrap_or(""));
                    set_text(sheet, 4, row, &issue.level.to_string());
                    set_text(sheet, 5, row, &issue.field);
                    set_text(sheet, 6, row, &issue.message);
                    row += 1;
                }
            }
        }

        // drop the placeholder sheet new_file() creates
        let _ = book.remove_sheet_by_name("Sheet1");

        writer::xlsx::write(&book, path.as_ref())
            .map_err(|e| ExportError::Workbook(e.to_string()))?;

        info!(
            accounts = session.accounts().len(),
            rows = report.len(),
            "planilha exportada"
        );
        Ok(())
    }
}

impl Default for WorkbookExporter {
    fn default() -> Self {
        Self::new()
    }
}
