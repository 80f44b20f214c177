// ==========================================
// Consolidation
// ==========================================
// Merges every loaded account into one account-tagged table.
// Row counts are preserved exactly: the same SKU in two accounts
// stays as two rows. The per-SKU cross-account rollup is a
// separate, derived panel.
// ==========================================

use crate::domain::replenishment::{
    AccountSlice, ConsolidatedReport, ConsolidatedRow, ReplenishmentLine, SkuRollup,
};
use crate::engine::replenishment::DbmEngine;
use crate::session::AnalysisSession;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Build the consolidated report: all accounts, in load order,
/// then sorted by criticality (most critical first) and suggested
/// quantity. The sort is stable, ties keep account order.
#[instrument(skip(session), fields(accounts = session.accounts().len()))]
pub fn consolidate(session: &AnalysisSession) -> ConsolidatedReport {
    let mut rows: Vec<ConsolidatedRow> = session
        .accounts()
        .iter()
        .flat_map(|account| account.rows.iter().map(ConsolidatedRow::from_analyzed))
        .collect();

    rows.sort_by(|a, b| {
        a.criticality
            .rank()
            .cmp(&b.criticality.rank())
            .then(b.suggested_qty.cmp(&a.suggested_qty))
    });

    debug!(rows = rows.len(), "consolidado montado");
    ConsolidatedReport { rows }
}

/// Cross-account rollup: one entry per SKU, aggregating sales,
/// stock and cost over every account that carries it. Rows with
/// an empty SKU cannot be keyed and stay out of this panel (they
/// remain in the consolidated report).
pub fn cross_account_rollup(report: &ConsolidatedReport) -> Vec<SkuRollup> {
    let mut order: Vec<String> = Vec::new();
    let mut by_sku: HashMap<String, SkuRollup> = HashMap::new();

    for row in &report.rows {
        if row.sku.is_empty() {
            continue;
        }
        let rollup = by_sku.entry(row.sku.clone()).or_insert_with(|| {
            order.push(row.sku.clone());
            SkuRollup {
                sku: row.sku.clone(),
                title: row.title.clone(),
                per_account: Vec::new(),
                total_sales_30d: 0,
                total_stock: 0,
                total_cost: 0.0,
                top_action: row.action,
                top_alert: row.cost_alert,
                margin_ratio: 0.0,
            }
        });

        if rollup.title.is_empty() {
            rollup.title = row.title.clone();
        }

        match rollup
            .per_account
            .iter_mut()
            .find(|s| s.account == row.account)
        {
            Some(slice) => {
                slice.sales_30d += row.sales_30d;
                slice.stock += row.fulfillment_stock;
            }
            None => rollup.per_account.push(AccountSlice {
                account: row.account.clone(),
                sales_30d: row.sales_30d,
                stock: row.fulfillment_stock,
            }),
        }

        rollup.total_sales_30d += row.sales_30d;
        rollup.total_stock += row.fulfillment_stock;
        if let Some(cost) = row.total_cost {
            rollup.total_cost += cost;
        }

        // highest priority wins across accounts
        if row.action.priority() > rollup.top_action.priority() {
            rollup.top_action = row.action;
        }
        if row.cost_alert.priority() > rollup.top_alert.priority() {
            rollup.top_alert = row.cost_alert;
        }
    }

    order
        .into_iter()
        .filter_map(|sku| by_sku.remove(&sku))
        .map(|mut rollup| {
            rollup.margin_ratio = if rollup.total_cost > 0.0 {
                rollup.total_sales_30d as f64 / rollup.total_cost
            } else {
                0.0
            };
            rollup
        })
        .collect()
}

/// Purchase plan over the rollups: DBM applied to each SKU's
/// combined demand and stock, most critical first.
pub fn replenishment_plan(rollups: &[SkuRollup], engine: &DbmEngine<'_>) -> Vec<ReplenishmentLine> {
    let mut lines: Vec<ReplenishmentLine> = rollups
        .iter()
        .map(|rollup| {
            let figures = engine.evaluate(rollup.total_sales_30d, rollup.total_stock);
            ReplenishmentLine {
                sku: rollup.sku.clone(),
                title: rollup.title.clone(),
                total_sales_30d: rollup.total_sales_30d,
                total_stock: rollup.total_stock,
                suggested_qty: figures.suggested_qty,
                criticality: figures.criticality,
                demand_band: figures.demand_band,
                calc_note: figures.calc_note,
            }
        })
        .collect();

    lines.sort_by(|a, b| {
        a.criticality
            .rank()
            .cmp(&b.criticality.rank())
            .then(b.suggested_qty.cmp(&a.suggested_qty))
    });
    lines
}
