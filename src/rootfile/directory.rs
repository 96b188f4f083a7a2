use crate::rootfile::DecodeError;
use crate::rootfile::ObjectMeta;
use crate::rootfile::RootObject;
use regex::Regex;

/// One key of a directory: the entry name, its cycle number, and the
/// decoded object it points to. ROOT keeps every write cycle of a key;
/// cycles start at 1 and grow per name.
#[derive(Clone, Debug)]
pub struct DirEntry {
    pub name: String,
    pub cycle: u16,
    pub object: RootObject,
}

impl DirEntry {
    /// Cycle-qualified key name, e.g. `events;1`.
    pub fn key_name(&self) -> String {
        format!("{};{}", self.name, self.cycle)
    }
}

/// A decoded directory: an ordered list of keys in the file's native
/// key order. Children may be trees, histograms, graphs, nested
/// directories, or objects of any other class.
#[derive(Clone, Debug)]
pub struct Directory {
    pub meta: ObjectMeta,
    entries: Vec<DirEntry>,
}

impl Directory {
    /// Creates an empty directory.
    pub fn new(name: &str, title: &str) -> Self {
        Directory {
            meta: ObjectMeta::new("TDirectoryFile", name, title),
            entries: Vec::new(),
        }
    }

    /// Appends an object under its own name, assigning the next write
    /// cycle for that name.
    pub fn insert(&mut self, object: RootObject) {
        let name = object.name().to_owned();
        let cycle = self
            .entries
            .iter()
            .filter(|entry| entry.name == name)
            .map(|entry| entry.cycle)
            .max()
            .map(|cycle| cycle + 1)
            .unwrap_or(1);
        self.entries.push(DirEntry {
            name,
            cycle,
            object,
        });
    }

    /// Direct entries in native key order.
    pub fn entries(&self) -> &[DirEntry] {
        &self.entries
    }

    /// Number of direct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the directory holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a direct entry by name. Without an explicit cycle the
    /// highest cycle wins.
    pub fn find(&self, name: &str, cycle: Option<u16>) -> Option<&DirEntry> {
        match cycle {
            Some(cycle) => self
                .entries
                .iter()
                .find(|entry| entry.name == name && entry.cycle == cycle),
            None => self
                .entries
                .iter()
                .filter(|entry| entry.name == name)
                .max_by_key(|entry| entry.cycle),
        }
    }

    /// Resolves a slash-separated object path, each segment optionally
    /// cycle-qualified (`sub/events;2`). Intermediate segments must be
    /// directories.
    pub fn get(&self, path: &str) -> Result<&RootObject, DecodeError> {
        let pattern = Regex::new(r"^([^;/]+)(?:;(\d+))?$").expect("Hardcode regex pattern");
        let not_found = || DecodeError::ObjectNotFound(path.to_owned());
        let mut directory = self;
        let mut segments = path.split('/').peekable();
        while let Some(segment) = segments.next() {
            let captures = pattern.captures(segment).ok_or_else(not_found)?;
            let name = captures.get(1).ok_or_else(not_found)?.as_str();
            let cycle = captures
                .get(2)
                .map(|matcher| matcher.as_str().parse::<u16>())
                .transpose()
                .map_err(|_| not_found())?;
            let entry = directory.find(name, cycle).ok_or_else(not_found)?;
            if segments.peek().is_none() {
                return Ok(&entry.object);
            }
            directory = match &entry.object {
                RootObject::Directory(child) => child.as_ref(),
                _ => return Err(not_found()),
            };
        }
        Err(not_found())
    }
}

#[cfg(test)]
mod tests {
    use crate::rootfile::Directory;
    use crate::rootfile::OtherObject;
    use crate::rootfile::RootObject;
    use std::sync::Arc;

    fn object(name: &str) -> RootObject {
        RootObject::Other(Arc::new(OtherObject::new("TList", name, "", Vec::new())))
    }

    #[test]
    fn directory_insert_assigns_cycles() {
        let mut dir = Directory::new("run", "");
        dir.insert(object("mass"));
        dir.insert(object("mass"));
        dir.insert(object("eta"));

        let entries = dir.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].key_name(), "mass;1");
        assert_eq!(entries[1].key_name(), "mass;2");
        assert_eq!(entries[2].key_name(), "eta;1");
    }

    #[test]
    fn directory_find_prefers_highest_cycle() {
        let mut dir = Directory::new("run", "");
        dir.insert(object("mass"));
        dir.insert(object("mass"));

        assert_eq!(dir.find("mass", None).unwrap().cycle, 2);
        assert_eq!(dir.find("mass", Some(1)).unwrap().cycle, 1);
        assert!(dir.find("mass", Some(3)).is_none());
        assert!(dir.find("eta", None).is_none());
    }

    #[test]
    fn directory_get_resolves_nested_paths() {
        let mut sub = Directory::new("sub", "");
        sub.insert(object("eta"));
        let mut dir = Directory::new("run", "");
        dir.insert(object("mass"));
        dir.insert(object("mass"));
        dir.insert(RootObject::Directory(Arc::new(sub)));

        assert_eq!(dir.get("mass").unwrap().name(), "mass");
        assert_eq!(dir.get("sub/eta").unwrap().name(), "eta");
        let explicit = dir.get("mass;1").unwrap();
        assert!(explicit.ptr_eq(&dir.find("mass", Some(1)).unwrap().object));
    }

    #[test]
    fn directory_get_reports_missing_objects() {
        let mut dir = Directory::new("run", "");
        dir.insert(object("mass"));

        assert!(dir.get("eta").is_err());
        assert!(dir.get("mass;9").is_err());
        assert!(dir.get("mass/deeper").is_err());
        assert!(dir.get("").is_err());
    }
}
