// ==========================================
// Shared test fixtures
// ==========================================
#![allow(dead_code)] // each test binary uses its own subset
// Compact CSV layout for pipeline tests plus an xlsx writer that
// reproduces the real FULL report geometry (sheet "Resumo", data
// from row 13, letter-addressed columns).
// ==========================================

use analise_full::config::{AnalysisConfig, CostColumns, CostLayout, ReportColumns, ReportLayout};
use std::io::Write;
use tempfile::NamedTempFile;

/// Report columns packed into A..O and cost columns into A..E,
/// both with a single header row. Exercises the config-driven
/// column mapping without 27-column fixtures.
pub fn compact_config() -> AnalysisConfig {
    let mut config = AnalysisConfig::default();
    config.report = ReportLayout {
        sheet_name: "Resumo".to_string(),
        data_start_row: 1,
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
    };
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

pub fn csv_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("criar csv temporário");
    write!(file, "{}", content).expect("escrever csv temporário");
    file
}

/// One data line of the compact FULL report layout.
pub fn report_line(
    sku: &str,
    status: &str,
    sales: i64,
    stock: i64,
    boost: i64,
    fix: i64,
    disposal: i64,
) -> String {
    format!(
        "{sku},MLB-{sku},Produto {sku},{status},{sales},,,0,0,{stock},0,{boost},{fix},{disposal},\n"
    )
}

pub const REPORT_HEADER: &str = "sku,anuncio,produto,status,vendas,afeta,entrada,aptas,nao_aptas,estoque,boa_qualidade,impulsionar,corrigir,descarte,tempo\n";

pub const COSTS_HEADER: &str = "sku,unidades,dias,custo,aptas\n";

pub fn cost_line(sku: &str, units: f64, days: f64, cost: f64) -> String {
    format!("{sku},{units},{days},{cost},0\n")
}

/// A minimal but geometry-faithful FULL report workbook: sheet
/// "Resumo", banner rows above, data starting at sheet row 13,
/// fields in their letter-addressed columns.
pub struct FullReportRow<'a> {
    pub sku: &'a str,
    pub title: &'a str,
    pub status: &'a str,
    pub sales_30d: i64,
    pub fulfillment_stock: i64,
    pub disposal_risk_units: i64,
}

pub fn full_report_xlsx(rows: &[FullReportRow<'_>]) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".xlsx")
        .tempfile()
        .expect("criar xlsx temporário");

    let mut book = umya_spreadsheet::new_file();
    let sheet = book.new_sheet("Resumo").expect("criar aba Resumo");
    sheet.get_cell_mut("A1").set_value("Relatório de estoque FULL");

    for (i, row) in rows.iter().enumerate() {
        let r = 13 + i as u32; // first data row of the real report
        sheet.get_cell_mut((4u32, r)).set_value(row.sku); // D
        sheet.get_cell_mut((5u32, r)).set_value(format!("MLB-{}", row.sku)); // E
        sheet.get_cell_mut((6u32, r)).set_value(row.title); // F
        sheet.get_cell_mut((9u32, r)).set_value(row.status); // I
        sheet
            .get_cell_mut((11u32, r))
            .set_value_number(row.sales_30d as f64); // K
        sheet
            .get_cell_mut((21u32, r))
            .set_value_number(row.fulfillment_stock as f64); // U
        sheet
            .get_cell_mut((26u32, r))
            .set_value_number(row.disposal_risk_units as f64); // Z
        sheet.get_cell_mut((27u32, r)).set_value("30 dias"); // AA
    }

    let _ = book.remove_sheet_by_name("Sheet1");
    umya_spreadsheet::writer::xlsx::write(&book, file.path()).expect("gravar xlsx temporário");
    file
}
