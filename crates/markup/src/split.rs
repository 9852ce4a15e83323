/// Delimiter that begins a new named virtual file
pub const FILENAME_MARKER: &str = "// @filename: ";

/// A named in-memory source unit presented to the analysis engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualFile {
    /// Unique name within the sample
    pub name: String,

    /// Current content; replaced (never edited) on every change
    pub content: String,

    /// Bumped on every content replacement, starting at 1
    pub version: u32,
}

/// One raw segment produced by splitting a sample on the filename marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitFile {
    pub name: String,
    pub content: String,
}

/// Partition a buffer into named file segments.
///
/// Without any marker the whole buffer is one file under
/// `default_name`. With markers, a non-empty leading segment also goes
/// under `default_name`; each later segment's first line is the file
/// name and the rest its content. A segment with an empty name yields
/// no file.
pub fn split_files(code: &str, default_name: &str) -> Vec<SplitFile> {
    if !code.contains(FILENAME_MARKER) {
        return vec![SplitFile {
            name: default_name.to_string(),
            content: code.to_string(),
        }];
    }

    let mut files = Vec::new();
    let mut segments = code.split(FILENAME_MARKER);

    if let Some(head) = segments.next() {
        if !head.trim().is_empty() {
            files.push(SplitFile {
                name: default_name.to_string(),
                content: trim_segment(head),
            });
        }
    }

    for segment in segments {
        let (name_line, rest) = segment.split_once('\n').unwrap_or((segment, ""));
        let name = name_line.trim();
        if name.is_empty() {
            log::debug!("Skipping dangling filename directive");
            continue;
        }
        files.push(SplitFile {
            name: name.to_string(),
            content: trim_segment(rest),
        });
    }

    files
}

// The newline before the next marker belongs to the separation, not to
// the segment's content.
fn trim_segment(segment: &str) -> String {
    segment.strip_suffix('\n').unwrap_or(segment).to_string()
}

/// The orchestrator's authoritative set of virtual files, in
/// declaration order.
#[derive(Debug, Default)]
pub struct FileRegistry {
    files: Vec<VirtualFile>,
}

impl FileRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file or replace its content; replacement bumps the
    /// version and keeps the file's declaration position
    pub fn upsert(&mut self, name: &str, content: &str) -> &VirtualFile {
        let idx = match self.files.iter().position(|file| file.name == name) {
            Some(idx) => {
                let file = &mut self.files[idx];
                file.content = content.to_string();
                file.version += 1;
                idx
            }
            None => {
                self.files.push(VirtualFile {
                    name: name.to_string(),
                    content: content.to_string(),
                    version: 1,
                });
                self.files.len() - 1
            }
        };
        &self.files[idx]
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&VirtualFile> {
        self.files.iter().find(|file| file.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VirtualFile> {
        self.files.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// All file contents in declaration order, newline-separated.
    /// This is the combined buffer every returned position refers to.
    #[must_use]
    pub fn combined_code(&self) -> String {
        self.files
            .iter()
            .map(|file| file.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Byte offset at which a file's content begins within the
    /// combined buffer. Carried explicitly from declaration order, so
    /// identical file contents cannot collide.
    #[must_use]
    pub fn start_offset(&self, name: &str) -> Option<usize> {
        let mut offset = 0;
        for file in &self.files {
            if file.name == name {
                return Some(offset);
            }
            offset += file.content.len() + 1;
        }
        None
    }
}
