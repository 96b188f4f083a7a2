use crate::rootfile::ObjectMeta;
use crate::sheet::value::Value;

/// Element type a branch's leaf was declared with.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LeafType {
    F32,
    F64,
    I32,
    I64,
    U32,
    U64,
    I16,
    I8,
    Bool,
}

impl LeafType {
    /// Numpy-style element type code, the form column typing keys on.
    pub const fn type_code(&self) -> &'static str {
        match self {
            LeafType::F32 => "<f4",
            LeafType::F64 => "<f8",
            LeafType::I32 => "<i4",
            LeafType::I64 => "<i8",
            LeafType::U32 => "<u4",
            LeafType::U64 => "<u8",
            LeafType::I16 => "<i2",
            LeafType::I8 => "|i1",
            LeafType::Bool => "|b1",
        }
    }
}

/// Materialized branch values, widened to one storage class per family.
/// The declared element type stays on the owning branch's `LeafType`.
#[derive(Clone, Debug)]
pub enum BranchData {
    Int(Vec<i64>),
    Float(Vec<f64>),
    Bool(Vec<bool>),
}

impl BranchData {
    /// Number of materialized values.
    pub fn len(&self) -> usize {
        match self {
            BranchData::Int(values) => values.len(),
            BranchData::Float(values) => values.len(),
            BranchData::Bool(values) => values.len(),
        }
    }

    /// Returns true if no values were materialized.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at the given entry index, if materialized.
    pub fn value_at(&self, index: usize) -> Option<Value> {
        match self {
            BranchData::Int(values) => values.get(index).map(|value| Value::Int(*value)),
            BranchData::Float(values) => values.get(index).map(|value| Value::Float(*value)),
            BranchData::Bool(values) => values.get(index).map(|value| Value::Bool(*value)),
        }
    }
}

/// One named array field of a tree.
#[derive(Clone, Debug)]
pub struct Branch {
    pub name: String,
    pub leaf_type: LeafType,
    pub data: BranchData,
}

impl Branch {
    pub fn new(name: &str, leaf_type: LeafType, data: BranchData) -> Self {
        Branch {
            name: name.to_owned(),
            leaf_type,
            data,
        }
    }
}

/// A decoded tree: a record-oriented dataset where each branch is a full
/// column of values. Branch order is the file's native order.
#[derive(Clone, Debug)]
pub struct Tree {
    pub meta: ObjectMeta,
    /// Declared entry count (`fEntries`); branches may hold fewer values
    /// when the decoder truncated a read.
    pub entries: u64,
    pub branches: Vec<Branch>,
}

impl Tree {
    pub fn new(name: &str, title: &str, entries: u64, branches: Vec<Branch>) -> Self {
        let mut meta = ObjectMeta::new("TTree", name, title);
        meta.push_attr("fEntries", Value::Int(entries as i64));
        Tree {
            meta,
            entries,
            branches,
        }
    }
}
