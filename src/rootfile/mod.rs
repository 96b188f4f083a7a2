//! Decoded-object model and the decoder boundary.
//!
//! The types here mirror what a ROOT I/O library materializes from a file:
//! a tree of named directories whose entries are trees, histograms, graphs,
//! or objects of any other class. Parsing, decompression, and basket
//! decoding are the decoder's concern; everything in this module is an
//! immutable, `Arc`-shared view over already-decoded data.

pub mod directory;
pub mod graph;
pub mod histogram;
pub mod memory;
pub mod tree;

pub use directory::DirEntry;
pub use directory::Directory;
pub use graph::Graph;
pub use graph::GraphErrors;
pub use histogram::Axis;
pub use histogram::Hist1d;
pub use histogram::Hist2d;
pub use memory::MemoryDecoder;
pub use tree::Branch;
pub use tree::BranchData;
pub use tree::LeafType;
pub use tree::Tree;

use crate::sheet::value::Value;
use std::fs::File;
use std::io;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised at the decoder boundary.
/// Propagated unmodified to the user; never retried, never swallowed.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("not a root file: {0}")]
    NotRootFile(String),

    #[error("object not found: {0}")]
    ObjectNotFound(String),

    #[error("corrupt object: {0}")]
    Corrupt(String),
}

/// Identity shared by every decoded object: its key name, title, and the
/// ROOT class it was serialized as (`"TTree"`, `"TH1D"`, ...).
#[derive(Clone, Debug)]
pub struct ObjectMeta {
    pub name: String,
    pub title: String,
    pub class_name: String,
    /// Ordered member mapping backing the metadata view
    attrs: Vec<(String, Value)>,
}

impl ObjectMeta {
    /// Creates metadata pre-populated with the `fName`/`fTitle` members
    /// every ROOT object carries.
    pub fn new(class_name: &str, name: &str, title: &str) -> Self {
        let attrs = vec![
            ("fName".to_owned(), Value::from(name)),
            ("fTitle".to_owned(), Value::from(title)),
        ];
        ObjectMeta {
            name: name.to_owned(),
            title: title.to_owned(),
            class_name: class_name.to_owned(),
            attrs,
        }
    }

    /// Appends a member to the attribute mapping, preserving order.
    pub fn push_attr(&mut self, name: &str, value: Value) {
        self.attrs.push((name.to_owned(), value));
    }

    /// The ordered member mapping, as reported by the decoder.
    pub fn attrs(&self) -> &[(String, Value)] {
        &self.attrs
    }
}

/// A decoded object of a class the adapter does not chart.
/// Only its class name and member mapping are presentable.
#[derive(Clone, Debug)]
pub struct OtherObject {
    pub meta: ObjectMeta,
}

impl OtherObject {
    /// Creates an uncharted object from its class name and extra members.
    pub fn new(class_name: &str, name: &str, title: &str, attrs: Vec<(String, Value)>) -> Self {
        let mut meta = ObjectMeta::new(class_name, name, title);
        for (name, value) in attrs {
            meta.push_attr(name.as_str(), value);
        }
        OtherObject { meta }
    }
}

/// The closed set of decoded object shapes.
///
/// Five arms are charted into sheets; `Other` is the explicit unknown arm
/// that classification reports as an error instead of leaving a gap.
/// Payloads are `Arc`-shared so drill-down sheets reference sub-objects
/// of their parent's handle without copying.
#[derive(Clone, Debug)]
pub enum RootObject {
    Directory(Arc<Directory>),
    Tree(Arc<Tree>),
    Hist1d(Arc<Hist1d>),
    Hist2d(Arc<Hist2d>),
    Graph(Arc<Graph>),
    Other(Arc<OtherObject>),
}

impl RootObject {
    /// Shared metadata of the underlying object.
    pub fn meta(&self) -> &ObjectMeta {
        match self {
            RootObject::Directory(directory) => &directory.meta,
            RootObject::Tree(tree) => &tree.meta,
            RootObject::Hist1d(hist) => &hist.meta,
            RootObject::Hist2d(hist) => &hist.meta,
            RootObject::Graph(graph) => &graph.meta,
            RootObject::Other(object) => &object.meta,
        }
    }

    /// Key name of the underlying object.
    pub fn name(&self) -> &str {
        self.meta().name.as_str()
    }

    /// ROOT class name of the underlying object.
    pub fn class_name(&self) -> &str {
        self.meta().class_name.as_str()
    }

    /// Ordered member mapping of the underlying object.
    pub fn attrs(&self) -> &[(String, Value)] {
        self.meta().attrs()
    }

    /// True if both handles reference the same decoded allocation.
    pub fn ptr_eq(&self, other: &RootObject) -> bool {
        match (self, other) {
            (RootObject::Directory(a), RootObject::Directory(b)) => Arc::ptr_eq(a, b),
            (RootObject::Tree(a), RootObject::Tree(b)) => Arc::ptr_eq(a, b),
            (RootObject::Hist1d(a), RootObject::Hist1d(b)) => Arc::ptr_eq(a, b),
            (RootObject::Hist2d(a), RootObject::Hist2d(b)) => Arc::ptr_eq(a, b),
            (RootObject::Graph(a), RootObject::Graph(b)) => Arc::ptr_eq(a, b),
            (RootObject::Other(a), RootObject::Other(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// The external library that parses files into decoded objects.
/// Implementations own all binary-format concerns; the adapter only ever
/// sees the finished object graph.
pub trait Decoder {
    /// Opens the file at `path` and returns its root directory.
    fn open(&self, path: &Path) -> Result<Arc<Directory>, DecodeError>;
}

/// Leading marker identifying the format on disk.
const MAGIC: &[u8] = b"root";

/// Reads at most the first 8 bytes of the file and reports whether they
/// start with the `root` marker. This is a cheap sniff, not validation;
/// false positives are acceptable since real decoding fails loudly.
pub fn detect(path: &Path) -> io::Result<bool> {
    let mut file = File::open(path)?;
    let mut head = [0u8; 8];
    let mut filled = 0;
    while filled < head.len() {
        let count = file.read(&mut head[filled..])?;
        if count == 0 {
            break;
        }
        filled += count;
    }
    Ok(head[..filled].starts_with(MAGIC))
}

#[cfg(test)]
mod tests {
    use crate::rootfile::detect;
    use crate::rootfile::ObjectMeta;
    use crate::sheet::value::Value;
    use std::io::Write;

    fn write_temp(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn detect_accepts_magic() {
        let file = write_temp(b"root\x00\x00\xbe\xef trailing");
        assert!(detect(file.path()).unwrap());
    }

    #[test]
    fn detect_accepts_bare_magic() {
        let file = write_temp(b"root");
        assert!(detect(file.path()).unwrap());
    }

    #[test]
    fn detect_rejects_other_bytes() {
        let file = write_temp(b"PK\x03\x04more");
        assert!(!detect(file.path()).unwrap());
    }

    #[test]
    fn detect_rejects_short_file() {
        let file = write_temp(b"ro");
        assert!(!detect(file.path()).unwrap());
    }

    #[test]
    fn detect_propagates_missing_file() {
        let path = std::path::Path::new("/nonexistent/run42.root");
        assert!(detect(path).is_err());
    }

    #[test]
    fn meta_standard_members() {
        let meta = ObjectMeta::new("TH1D", "mass", "invariant mass");
        assert_eq!(meta.attrs()[0], ("fName".to_owned(), Value::from("mass")));
        assert_eq!(
            meta.attrs()[1],
            ("fTitle".to_owned(), Value::from("invariant mass"))
        );
    }
}
