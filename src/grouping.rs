// src/grouping.rs
use crate::filesystem::ScannedFile;
use std::collections::HashMap;

/// Files grouped by extension. Keys keep their leading dot; `""` holds files
/// without an extension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionIndex {
    groups: HashMap<String, Vec<String>>,
}

/// One group as handed to the reporter, with its file names sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionGroup<'a> {
    pub extension: &'a str,
    pub files: Vec<&'a str>,
}

impl ExtensionGroup<'_> {
    /// Display label: the extension without its leading dot.
    pub fn label(&self) -> &str {
        self.extension
            .strip_prefix('.')
            .unwrap_or(self.extension)
    }
}

impl ExtensionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `name` to the group for `extension`, creating the group on
    /// first use. Duplicates are kept.
    pub fn insert(&mut self, name: String, extension: &str) {
        // Not `entry(extension.to_owned())`: that allocates a key on every call.
        match self.groups.get_mut(extension) {
            Some(files) => files.push(name),
            None => {
                self.groups.insert(extension.to_owned(), vec![name]);
            }
        }
    }

    pub fn from_files(files: impl IntoIterator<Item = ScannedFile>) -> Self {
        let mut index = Self::new();
        index.extend(files);
        index
    }

    /// Number of distinct extensions.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of files across all groups.
    pub fn file_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Files recorded for `extension`, in insertion order.
    pub fn get(&self, extension: &str) -> Option<&[String]> {
        self.groups.get(extension).map(Vec::as_slice)
    }

    /// All groups with keys and file names in ascending byte order.
    pub fn sorted_groups(&self) -> Vec<ExtensionGroup<'_>> {
        let mut groups: Vec<ExtensionGroup<'_>> = self
            .groups
            .iter()
            .map(|(ext, names)| {
                let mut files: Vec<&str> = names.iter().map(String::as_str).collect();
                files.sort_unstable();
                ExtensionGroup {
                    extension: ext.as_str(),
                    files,
                }
            })
            .collect();
        groups.sort_unstable_by(|a, b| a.extension.cmp(b.extension));
        groups
    }
}

impl Extend<ScannedFile> for ExtensionIndex {
    fn extend<I: IntoIterator<Item = ScannedFile>>(&mut self, iter: I) {
        for file in iter {
            self.insert(file.name, &file.extension);
        }
    }
}

impl FromIterator<ScannedFile> for ExtensionIndex {
    fn from_iter<I: IntoIterator<Item = ScannedFile>>(iter: I) -> Self {
        Self::from_files(iter)
    }
}
