use crate::loader::ChildSheet;
use crate::loader::KeyValueSheet;
use crate::loader::RootSheet;
use crate::loader::Row;
use crate::loader::RowIter;
use crate::loader::RowPayload;
use crate::loader::SheetOptions;
use crate::rootfile::DirEntry;
use crate::rootfile::Directory;
use crate::rootfile::RootObject;
use crate::sheet::column::Column;
use crate::sheet::column::ColumnType;
use crate::sheet::value::Value;
use std::sync::Arc;

/// Charts a directory: one row per direct key, each carrying a
/// ready-made child sheet. The name column header is the directory's
/// label passed in by the owning sheet.
pub(super) fn load(
    label: String,
    directory: Arc<Directory>,
    options: SheetOptions,
) -> (Vec<Column>, RowIter) {
    let columns = vec![
        Column::key(label.as_str(), ColumnType::Varchar),
        Column::new("type", ColumnType::Varchar),
        Column::new("nItems", ColumnType::BigInt),
    ];
    let total = directory.len() as u64;
    let rows = (0..directory.len()).map(move |index| entry_row(&directory.entries()[index], options));
    (columns, RowIter::new(total, Box::new(rows)))
}

fn entry_row(entry: &DirEntry, options: SheetOptions) -> Row {
    let name = entry.key_name();
    let object = entry.object.clone();
    let child = child_sheet(name.as_str(), &object, options);
    Row {
        cells: vec![
            Value::Text(name),
            Value::Text(object.class_name().to_owned()),
            Value::Int(n_items(&object)),
        ],
        payload: RowPayload::Sheet {
            child: Box::new(child),
            object,
        },
    }
}

/// Charted classes get a real sheet; anything else gets the generic
/// object view with a leading `type` entry before its members.
fn child_sheet(name: &str, object: &RootObject, options: SheetOptions) -> ChildSheet {
    match object {
        RootObject::Other(other) => {
            let mut entries = vec![(
                "type".to_owned(),
                Value::from(other.meta.class_name.as_str()),
            )];
            entries.extend(other.meta.attrs().iter().cloned());
            ChildSheet::KeyValue(KeyValueSheet::new(name.to_owned(), entries))
        }
        _ => ChildSheet::Root(RootSheet::open_object(name, object.clone(), options)),
    }
}

/// Item count per the child's category: entries for a tree, first-axis
/// bins for histograms, points for a graph, direct keys for a nested
/// directory, and the member-view length otherwise.
fn n_items(object: &RootObject) -> i64 {
    match object {
        RootObject::Directory(directory) => directory.len() as i64,
        RootObject::Tree(tree) => tree.entries as i64,
        RootObject::Hist1d(hist) => hist.axis.n_bins() as i64,
        RootObject::Hist2d(hist) => hist.x_axis.n_bins() as i64,
        RootObject::Graph(graph) => graph.n_points() as i64,
        RootObject::Other(other) => 1 + other.meta.attrs().len() as i64,
    }
}
