use crate::loader::Row;
use crate::loader::RowIter;
use crate::loader::RowPayload;
use crate::rootfile::Tree;
use crate::sheet::column::Column;
use crate::sheet::column::ColumnType;
use crate::sheet::value::Value;
use std::sync::Arc;

/// Charts a tree: one typed column per branch in native order, one
/// positional record per entry.
pub(super) fn load(tree: Arc<Tree>) -> (Vec<Column>, RowIter) {
    let columns = tree
        .branches
        .iter()
        .map(|branch| {
            Column::new(
                branch.name.as_str(),
                ColumnType::from_type_code(branch.leaf_type.type_code()),
            )
        })
        .collect();
    // Records stop at the shortest branch; the declared entry count
    // still drives the progress total.
    let records = tree
        .branches
        .iter()
        .map(|branch| branch.data.len())
        .min()
        .unwrap_or(0);
    let total = tree.entries;
    let rows = (0..records).map(move |index| Row {
        cells: tree
            .branches
            .iter()
            .map(|branch| branch.data.value_at(index).unwrap_or(Value::Null))
            .collect(),
        payload: RowPayload::Record,
    });
    (columns, RowIter::new(total, Box::new(rows)))
}
