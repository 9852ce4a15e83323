use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// One cached document: a snapshot of a virtual file's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub content: String,
    pub version: u32,
}

/// Version-keyed document cache for engine implementations.
///
/// The orchestrator owns the authoritative virtual files; an engine
/// holds only this reference view, keyed by name and version. A stale
/// update (version not newer than the cached one) is ignored, so
/// "update-then-query" ordering is all an engine needs to stay
/// consistent.
#[derive(Debug, Default)]
pub struct DocumentRegistry {
    docs: HashMap<String, Document>,
}

impl DocumentRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or refresh a document, returning the cached snapshot
    pub fn acquire(&mut self, name: &str, content: &str, version: u32) -> &Document {
        match self.docs.entry(name.to_string()) {
            Entry::Occupied(entry) => {
                let doc = entry.into_mut();
                if doc.version < version {
                    log::debug!("Replacing document {name}: v{} -> v{version}", doc.version);
                    doc.content = content.to_string();
                    doc.version = version;
                }
                doc
            }
            Entry::Vacant(entry) => {
                log::debug!("Registering document {name} at v{version}");
                entry.insert(Document {
                    content: content.to_string(),
                    version,
                })
            }
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Document> {
        self.docs.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.docs.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.docs.keys().map(String::as_str)
    }

    /// Drop every cached document; used when the engine configuration
    /// changes and cached analysis would be stale
    pub fn invalidate_all(&mut self) {
        self.docs.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}
