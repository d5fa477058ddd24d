//! The selected document reference.
//!
//! Only the name of the selected file is ever observed. Content is never
//! opened, read, or validated; the extension list is advertised to the user
//! but not enforced.

use std::fmt;
use std::path::{Path, PathBuf};

/// Extensions shown in the upload prompt.
pub const ADVERTISED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "json", "xml"];

/// Human-readable form of [`ADVERTISED_EXTENSIONS`].
pub const ADVERTISED_FORMATS: &str = "PDF, Word, JSON, XML";

/// An opaque reference to the document chosen for review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    reference: PathBuf,
}

impl UploadedFile {
    /// Build a file reference from user input.
    ///
    /// Returns `None` for blank input, which counts as no selection.
    pub fn from_input(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                reference: PathBuf::from(trimmed),
            })
        }
    }

    /// The reference exactly as given.
    #[must_use]
    pub fn reference(&self) -> &Path {
        &self.reference
    }

    /// Display name: the last path component, or the whole reference.
    #[must_use]
    pub fn name(&self) -> String {
        self.reference.file_name().map_or_else(
            || self.reference.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        )
    }

    /// Lowercased extension, if any.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        self.reference
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
    }

    /// Whether the extension is one the prompt advertises. Advisory only.
    #[must_use]
    pub fn has_advertised_extension(&self) -> bool {
        self.extension()
            .is_some_and(|ext| ADVERTISED_EXTENSIONS.contains(&ext.as_str()))
    }
}

impl fmt::Display for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
