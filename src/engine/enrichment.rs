// ==========================================
// Cost enrichment
// ==========================================
// Joins inventory rows against the internal cost table by SKU.
// A failed join is data, not an error: the row flows on with an
// Unmatched marker.
// ==========================================

use crate::domain::inventory::{CostJoin, CostTable, InventoryRow};
use tracing::warn;

/// Join rows to the cost table. `table` is None when no cost
/// sheet was loaded for this account.
pub fn join_costs(
    rows: Vec<InventoryRow>,
    table: Option<&CostTable>,
) -> Vec<(InventoryRow, CostJoin)> {
    let mut unmatched = 0usize;

    let joined: Vec<(InventoryRow, CostJoin)> = rows
        .into_iter()
        .map(|row| {
            let join = match table {
                None => CostJoin::TableAbsent,
                Some(table) => match table.lookup(&row.sku) {
                    Some(reference) => CostJoin::Matched(reference.clone()),
                    None => {
                        unmatched += 1;
                        CostJoin::Unmatched
                    }
                },
            };
            (row, join)
        })
        .collect();

    if unmatched > 0 {
        warn!(unmatched, total = joined.len(), "SKUs sem custo correspondente");
    }
    joined
}
