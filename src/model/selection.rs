use std::path::PathBuf;

use crate::config::LibraryConfig;
use crate::error::BrowseError;
use crate::model::Category;

/// The currently chosen body part. `None` is the "Select Body Part"
/// sentinel shown as the dropdown placeholder.
#[derive(Debug, Default)]
pub struct Selection {
    current: Option<Category>,
}

impl Selection {
    pub fn set(&mut self, category: Category) {
        self.current = Some(category);
    }

    pub fn current(&self) -> Option<Category> {
        self.current
    }

    /// Resolves the model directory for the current selection.
    ///
    /// Fails before any file picker is constructed: with no selection, or
    /// with a configured directory that is absent on disk. The selection
    /// itself is left untouched either way.
    pub fn resolve_directory(
        &self,
        library: &LibraryConfig,
    ) -> Result<(Category, PathBuf), BrowseError> {
        let category = self.current.ok_or(BrowseError::NoSelection)?;
        let directory = library.directory(category);
        if !directory.is_dir() {
            return Err(BrowseError::DirectoryNotFound {
                category,
                path: directory.to_path_buf(),
            });
        }
        Ok((category, directory.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browse_without_selection_is_rejected() {
        let selection = Selection::default();
        let library = LibraryConfig::default();
        assert!(matches!(
            selection.resolve_directory(&library),
            Err(BrowseError::NoSelection)
        ));
    }

    #[test]
    fn browse_with_missing_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let library = LibraryConfig::rooted(dir.path().join("nowhere"));

        let mut selection = Selection::default();
        selection.set(Category::Foot);

        match selection.resolve_directory(&library) {
            Err(BrowseError::DirectoryNotFound { category, path }) => {
                assert_eq!(category, Category::Foot);
                assert_eq!(path, dir.path().join("nowhere").join("foot"));
            }
            other => panic!("expected DirectoryNotFound, got {other:?}"),
        }
        assert_eq!(selection.current(), Some(Category::Foot));
    }

    #[test]
    fn browse_resolves_the_mapped_directory() {
        let dir = tempfile::tempdir().unwrap();
        let library = LibraryConfig::rooted(dir.path());
        std::fs::create_dir_all(library.directory(Category::Heart)).unwrap();

        let mut selection = Selection::default();
        selection.set(Category::Heart);

        let (category, directory) = selection.resolve_directory(&library).unwrap();
        assert_eq!(category, Category::Heart);
        assert_eq!(directory, dir.path().join("heart"));
    }
}
