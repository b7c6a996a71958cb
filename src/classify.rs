// src/classify.rs
use std::fs::FileType;

/// Kind of a directory entry, as reported without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    /// FIFOs, sockets, devices and anything the platform adds.
    Other,
}

impl EntryKind {
    pub const fn is_file(self) -> bool {
        matches!(self, Self::File)
    }
}

impl From<FileType> for EntryKind {
    fn from(ft: FileType) -> Self {
        classify(ft)
    }
}

/// Maps an OS file type onto an [`EntryKind`].
///
/// `ft` must come from `DirEntry::file_type` or `symlink_metadata`, otherwise
/// a symlink is reported as whatever it points to.
pub fn classify(ft: FileType) -> EntryKind {
    if ft.is_symlink() {
        EntryKind::Symlink
    } else if ft.is_dir() {
        EntryKind::Directory
    } else if ft.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}
