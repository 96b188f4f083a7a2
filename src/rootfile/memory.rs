use crate::rootfile::DecodeError;
use crate::rootfile::Decoder;
use crate::rootfile::Directory;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

/// A decoder over a registry of already-decoded files.
/// Backs tests and embedders that decode elsewhere and hand the finished
/// object graphs over by path.
#[derive(Default)]
pub struct MemoryDecoder {
    files: HashMap<PathBuf, Arc<Directory>>,
}

impl MemoryDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the decoded root directory served for `path`.
    pub fn register(&mut self, path: impl Into<PathBuf>, root: Arc<Directory>) {
        self.files.insert(path.into(), root);
    }
}

impl Decoder for MemoryDecoder {
    fn open(&self, path: &Path) -> Result<Arc<Directory>, DecodeError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| DecodeError::NotRootFile(path.display().to_string()))
    }
}
