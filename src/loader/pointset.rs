use crate::loader::Row;
use crate::loader::RowIter;
use crate::loader::RowPayload;
use crate::rootfile::Graph;
use crate::rootfile::GraphErrors;
use crate::sheet::column::Column;
use crate::sheet::column::ColumnType;
use crate::sheet::value::Value;
use std::sync::Arc;

/// Charts a graph: one row per point, with error columns matching the
/// graph's declared error flavor.
pub(super) fn load(graph: Arc<Graph>) -> (Vec<Column>, RowIter) {
    let mut names = vec!["x", "y"];
    match graph.errors() {
        GraphErrors::None => {}
        GraphErrors::Symmetric { .. } => names.extend(["ex", "ey"]),
        GraphErrors::Asymmetric { .. } => {
            names.extend(["ex_low", "ex_high", "ey_low", "ey_high"])
        }
    }
    let columns = names
        .into_iter()
        .map(|name| Column::new(name, ColumnType::Double))
        .collect();
    let total = graph.n_points() as u64;
    let rows = (0..graph.n_points()).map(move |index| {
        let mut cells = vec![
            Value::Float(graph.x()[index]),
            Value::Float(graph.y()[index]),
        ];
        match graph.errors() {
            GraphErrors::None => {}
            GraphErrors::Symmetric { ex, ey } => {
                cells.push(Value::Float(ex[index]));
                cells.push(Value::Float(ey[index]));
            }
            GraphErrors::Asymmetric {
                ex_low,
                ex_high,
                ey_low,
                ey_high,
            } => {
                cells.push(Value::Float(ex_low[index]));
                cells.push(Value::Float(ex_high[index]));
                cells.push(Value::Float(ey_low[index]));
                cells.push(Value::Float(ey_high[index]));
            }
        }
        Row {
            cells,
            payload: RowPayload::Record,
        }
    });
    (columns, RowIter::new(total, Box::new(rows)))
}
