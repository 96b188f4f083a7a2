//! The format adapter: presents decoded objects as sheets.
//!
//! A [`RootSheet`] wraps a file path or an already-decoded object and,
//! when loaded, classifies it into one of five shape categories
//! (directory, tree, 1-D histogram, 2-D histogram, or graph), installing
//! that category's columns and producing its rows as a single lazy pass.
//! Drill-down and the metadata command route everything else through the
//! generic key-value inspection view.

mod container;
mod histogram;
mod pointset;
mod tabular;

use crate::rootfile::DecodeError;
use crate::rootfile::Decoder;
use crate::rootfile::RootObject;
use crate::sheet::column::Column;
use crate::sheet::column::ColumnType;
use crate::sheet::progress::Progress;
use crate::sheet::value::Value;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while charting objects into sheets.
#[derive(Error, Debug)]
pub enum SheetError {
    /// The resolved object matches none of the charted categories.
    #[error("unrecognized object type '{0}'")]
    UnrecognizedObject(String),

    /// Drill-down or metadata was requested on a row shape that has no
    /// such view.
    #[error("unimplemented row type '{0}'")]
    UnimplementedRow(String),

    #[error("{0}")]
    Decode(#[from] DecodeError),
}

/// Named options controlling histogram presentation.
/// Both flags default to off: flow bins appear only when asked for.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SheetOptions {
    /// Include under/overflow bins for 1-D histograms
    pub th1_flow: bool,
    /// Include under/overflow bins for 2-D histograms
    pub th2_flow: bool,
}

/// Row type label of sheets whose rows are sheets themselves.
pub const ROWTYPE_SHEETS: &str = "sheets";
/// Row type label of sheets with plain data rows.
pub const ROWTYPE_ROWS: &str = "rows";

/// A key binding for the host's command table.
#[derive(Copy, Clone, Debug)]
pub struct Command {
    pub keystroke: &'static str,
    pub longname: &'static str,
    pub help: &'static str,
}

/// Commands this adapter contributes to the host.
pub const COMMANDS: &[Command] = &[Command {
    keystroke: "A",
    longname: "dive-metadata",
    help: "open metadata sheet for object referenced in current row",
}];

/// What a sheet was constructed over.
#[derive(Clone)]
enum SourceHandle {
    /// A filesystem path, decoded on first load
    Path {
        path: PathBuf,
        decoder: Arc<dyn Decoder>,
    },
    /// An already-decoded object, used as-is
    Object(RootObject),
}

impl fmt::Debug for SourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceHandle::Path { path, .. } => f.debug_tuple("Path").field(path).finish(),
            SourceHandle::Object(object) => {
                f.debug_tuple("Object").field(&object.class_name()).finish()
            }
        }
    }
}

/// One yielded row: its cells, aligned with the sheet's columns, and the
/// payload drill-down operates on.
#[derive(Clone, Debug)]
pub struct Row {
    pub cells: Vec<Value>,
    pub payload: RowPayload,
}

/// What a row stands for.
#[derive(Clone, Debug)]
pub enum RowPayload {
    /// A plain positional data record
    Record,
    /// One key/value pair of an inspection view
    Entry,
    /// A ready-made child sheet over a decoded object
    Sheet {
        child: Box<ChildSheet>,
        object: RootObject,
    },
}

impl RowPayload {
    /// Concrete payload kind, used in failure reports.
    pub fn kind_name(&self) -> &'static str {
        match self {
            RowPayload::Record => "record",
            RowPayload::Entry => "entry",
            RowPayload::Sheet { .. } => "sheet",
        }
    }
}

/// A sheet reachable by drilling into a row.
#[derive(Clone, Debug)]
pub enum ChildSheet {
    Root(RootSheet),
    KeyValue(KeyValueSheet),
}

/// The generic key-value inspection view: shared by tuple drill-down,
/// uncharted directory children, and the metadata command.
#[derive(Clone, Debug)]
pub struct KeyValueSheet {
    name: String,
    entries: Vec<(String, Value)>,
}

impl KeyValueSheet {
    pub fn new(name: String, entries: Vec<(String, Value)>) -> Self {
        KeyValueSheet { name, entries }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn entries(&self) -> &[(String, Value)] {
        &self.entries
    }

    /// The fixed `key`/`value` column pair.
    pub fn columns(&self) -> Vec<Column> {
        vec![
            Column::key("key", ColumnType::Varchar),
            Column::new("value", ColumnType::Any),
        ]
    }

    /// One row per entry, in mapping order.
    pub fn rows(&self) -> RowIter {
        let total = self.entries.len() as u64;
        let rows = self.entries.clone().into_iter().map(|(name, value)| Row {
            cells: vec![Value::Text(name), value],
            payload: RowPayload::Entry,
        });
        RowIter::new(total, Box::new(rows))
    }
}

/// The lazy, finite, non-restartable row pass of one load.
/// Progress is readable between pulls; re-loading the sheet starts a
/// fresh pass.
pub struct RowIter {
    rows: Box<dyn Iterator<Item = Row>>,
    progress: Progress,
}

impl RowIter {
    pub(crate) fn new(total: u64, rows: Box<dyn Iterator<Item = Row>>) -> Self {
        RowIter {
            rows,
            progress: Progress::new(total),
        }
    }

    /// Snapshot of rows produced so far against the known total.
    pub fn progress(&self) -> Progress {
        self.progress
    }
}

impl fmt::Debug for RowIter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowIter")
            .field("progress", &self.progress)
            .finish_non_exhaustive()
    }
}

impl Iterator for RowIter {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        let row = self.rows.next();
        if row.is_some() {
            self.progress.produced += 1;
        }
        row
    }
}

/// A sheet over a path or decoded object.
///
/// Construction never touches the file; decoding, classification, and
/// column installation all happen in [`RootSheet::load`].
#[derive(Clone, Debug)]
pub struct RootSheet {
    name: String,
    source: SourceHandle,
    options: SheetOptions,
    columns: Vec<Column>,
    rowtype: &'static str,
}

impl RootSheet {
    /// Creates a sheet over a file path. Never fails synchronously; a bad
    /// path surfaces when rows are first requested.
    pub fn open(
        name: &str,
        path: impl Into<PathBuf>,
        decoder: Arc<dyn Decoder>,
        options: SheetOptions,
    ) -> Self {
        RootSheet {
            name: name.to_owned(),
            source: SourceHandle::Path {
                path: path.into(),
                decoder,
            },
            options,
            columns: Vec::new(),
            rowtype: ROWTYPE_ROWS,
        }
    }

    /// Creates a sheet over an already-decoded object, the drill-down
    /// constructor.
    pub fn open_object(name: &str, object: RootObject, options: SheetOptions) -> Self {
        RootSheet {
            name: name.to_owned(),
            source: SourceHandle::Object(object),
            options,
            columns: Vec::new(),
            rowtype: ROWTYPE_ROWS,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn options(&self) -> SheetOptions {
        self.options
    }

    /// Columns of the current load; empty before the first load.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// `"sheets"` for container sheets, `"rows"` otherwise.
    pub fn rowtype(&self) -> &'static str {
        self.rowtype
    }

    /// The decoded object behind this sheet, when constructed over one.
    pub fn source_object(&self) -> Option<&RootObject> {
        match &self.source {
            SourceHandle::Object(object) => Some(object),
            SourceHandle::Path { .. } => None,
        }
    }

    /// Resolves, classifies, and charts the source, installing this
    /// sheet's columns before returning the row pass. Each call restarts
    /// from scratch; an uncharted class fails with its name and yields
    /// nothing.
    pub fn load(&mut self) -> Result<RowIter, SheetError> {
        self.columns.clear();
        self.rowtype = ROWTYPE_ROWS;
        let object = self.resolve()?;
        let (columns, rows) = match &object {
            RootObject::Directory(directory) => {
                self.rowtype = ROWTYPE_SHEETS;
                container::load(self.source_label(), Arc::clone(directory), self.options)
            }
            RootObject::Tree(tree) => tabular::load(Arc::clone(tree)),
            RootObject::Hist2d(hist) => histogram::load_2d(Arc::clone(hist), self.options.th2_flow),
            RootObject::Hist1d(hist) => histogram::load_1d(Arc::clone(hist), self.options.th1_flow),
            RootObject::Graph(graph) => pointset::load(Arc::clone(graph)),
            RootObject::Other(object) => {
                return Err(SheetError::UnrecognizedObject(
                    object.meta.class_name.clone(),
                ))
            }
        };
        self.columns = columns;
        Ok(rows)
    }

    /// Drill-down. Sheet payloads come back as-is, records are wrapped
    /// into the key-value view keyed by this sheet's column names (or
    /// positionally before any load), and inspection entries have nowhere
    /// further to go.
    pub fn open_row(&self, row: &Row) -> Result<ChildSheet, SheetError> {
        match &row.payload {
            RowPayload::Sheet { child, .. } => Ok(child.as_ref().clone()),
            RowPayload::Record => Ok(ChildSheet::KeyValue(self.wrap_record(row))),
            RowPayload::Entry => Err(SheetError::UnimplementedRow(
                row.payload.kind_name().to_owned(),
            )),
        }
    }

    /// The metadata view: a key-value sheet over the member mapping of
    /// the object a row stands for. Rows not backed by a decoded object
    /// have no metadata.
    pub fn attrs_sheet(&self, row: &Row) -> Result<KeyValueSheet, SheetError> {
        match &row.payload {
            RowPayload::Sheet { object, .. } => {
                let name = match row.cells.first() {
                    Some(Value::Text(name)) => name.clone(),
                    _ => self.name.clone(),
                };
                Ok(KeyValueSheet::new(
                    format!("{}_attrs", name),
                    object.attrs().to_vec(),
                ))
            }
            payload => Err(SheetError::UnimplementedRow(payload.kind_name().to_owned())),
        }
    }

    fn resolve(&self) -> Result<RootObject, SheetError> {
        match &self.source {
            SourceHandle::Path { path, decoder } => {
                Ok(RootObject::Directory(decoder.open(path.as_path())?))
            }
            SourceHandle::Object(object) => Ok(object.clone()),
        }
    }

    /// Header of the container name column: the directory's own name, or
    /// the file path for the unnamed file root.
    fn source_label(&self) -> String {
        match &self.source {
            SourceHandle::Path { path, .. } => path.display().to_string(),
            SourceHandle::Object(RootObject::Directory(directory))
                if !directory.meta.name.is_empty() =>
            {
                directory.meta.name.clone()
            }
            SourceHandle::Object(_) => self.name.clone(),
        }
    }

    fn wrap_record(&self, row: &Row) -> KeyValueSheet {
        let entries = row
            .cells
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                let key = self
                    .columns
                    .get(index)
                    .map(|column| column.name.clone())
                    .unwrap_or_else(|| index.to_string());
                (key, cell.clone())
            })
            .collect();
        KeyValueSheet::new(format!("{}_row", self.name), entries)
    }
}
