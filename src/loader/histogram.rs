use crate::loader::Row;
use crate::loader::RowIter;
use crate::loader::RowPayload;
use crate::rootfile::Hist1d;
use crate::rootfile::Hist2d;
use crate::sheet::column::Column;
use crate::sheet::column::ColumnType;
use crate::sheet::value::Value;
use std::sync::Arc;

/// Charts a 1-D histogram: per-bin derived quantities, one row per bin.
/// Error and variance columns appear only for weighted histograms.
pub(super) fn load_1d(hist: Arc<Hist1d>, flow: bool) -> (Vec<Column>, RowIter) {
    let mut names = vec!["left", "right", "center", "height", "counts", "width"];
    if hist.weighted() {
        names.push("error");
        names.push("variance");
    }
    let columns = names
        .into_iter()
        .map(|name| Column::new(name, ColumnType::Double))
        .collect();

    let edges = hist.edges(flow);
    let heights = hist.heights(flow).to_vec();
    let counts = hist.counts(flow);
    let statistics = hist
        .weighted()
        .then(|| (hist.errors(flow), hist.variances(flow).to_vec()));
    let bins = heights.len();
    let rows = (0..bins).map(move |index| {
        let left = edges[index];
        let right = edges[index + 1];
        let mut cells = vec![
            Value::Float(left),
            Value::Float(right),
            Value::Float(0.5 * (left + right)),
            Value::Float(heights[index]),
            Value::Float(counts[index]),
            Value::Float(right - left),
        ];
        if let Some((errors, variances)) = &statistics {
            cells.push(Value::Float(errors[index]));
            cells.push(Value::Float(variances[index]));
        }
        Row {
            cells,
            payload: RowPayload::Record,
        }
    });
    (columns, RowIter::new(bins as u64, Box::new(rows)))
}

/// Charts a 2-D histogram: x labels down the key column, one height
/// column per y bin.
pub(super) fn load_2d(hist: Arc<Hist2d>, flow: bool) -> (Vec<Column>, RowIter) {
    let heights = hist.heights(flow);
    let slices = heights.len();
    let y_bins = heights.first().map(|row| row.len()).unwrap_or(0);
    let mut columns = vec![Column::key("x", ColumnType::Any)];
    columns.extend((0..y_bins).map(|index| {
        Column::new(
            bin_label(index, y_bins, "y-", "y+").as_str(),
            ColumnType::Double,
        )
    }));
    let rows = (0..slices).map(move |index| {
        let mut cells = vec![Value::Text(bin_label(index, slices, "x-", "x+"))];
        cells.extend(heights[index].iter().map(|height| Value::Float(*height)));
        Row {
            cells,
            payload: RowPayload::Record,
        }
    });
    (columns, RowIter::new(slices as u64, Box::new(rows)))
}

/// First and last bins read as the given flow sentinels, interior bins
/// by their y index, whether or not flow bins are actually present.
fn bin_label(index: usize, count: usize, low: &str, high: &str) -> String {
    if index == 0 {
        low.to_owned()
    } else if index == count - 1 {
        high.to_owned()
    } else {
        format!("y_{}", index - 1)
    }
}
