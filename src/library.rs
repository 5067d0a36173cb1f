// SPDX-License-Identifier: MPL-2.0
//! The list of uploaded files shown on the upload screen.
//!
//! Entries are addressed by [`FileId`], never by position, so removals stay
//! correct while a filter is active.

use crate::upload::{FileId, UploadedFile};
use serde::{Deserialize, Serialize};

/// How the library lays out its entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    Table,
}

#[derive(Debug, Default)]
pub struct Library {
    files: Vec<UploadedFile>,
    view_mode: ViewMode,
    filter_text: String,
    fullscreen: Option<FileId>,
}

impl Library {
    #[must_use]
    pub fn new(view_mode: ViewMode) -> Self {
        Self {
            view_mode,
            ..Self::default()
        }
    }

    /// Appends files in the given order.
    pub fn add(&mut self, files: impl IntoIterator<Item = UploadedFile>) {
        self.files.extend(files);
    }

    /// Revokes the preview and removes the entry. Returns `false` for unknown ids.
    pub fn remove(&mut self, id: FileId) -> bool {
        let Some(index) = self.files.iter().position(|f| f.id == id) else {
            return false;
        };

        let removed = self.files.remove(index);
        log::info!("removed {}", removed.file.name);
        removed.preview.revoke();

        if self.fullscreen == Some(id) {
            self.fullscreen = None;
        }
        true
    }

    /// Revokes every preview. Called on exit.
    pub fn clear(&mut self) {
        for file in self.files.drain(..) {
            file.preview.revoke();
        }
        self.fullscreen = None;
    }

    /// Files whose name contains the filter text, ignoring case.
    pub fn filtered(&self) -> impl Iterator<Item = &UploadedFile> {
        let needle = self.filter_text.to_lowercase();
        self.files
            .iter()
            .filter(move |f| needle.is_empty() || f.file.name.to_lowercase().contains(&needle))
    }

    #[must_use]
    pub fn get(&self, id: FileId) -> Option<&UploadedFile> {
        self.files.iter().find(|f| f.id == id)
    }

    #[must_use]
    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    #[must_use]
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
    }

    /// Opens the fullscreen preview if `id` is in the list.
    pub fn open_fullscreen(&mut self, id: FileId) {
        if self.get(id).is_some() {
            self.fullscreen = Some(id);
        }
    }

    pub fn close_fullscreen(&mut self) {
        self.fullscreen = None;
    }

    #[must_use]
    pub fn fullscreen(&self) -> Option<&UploadedFile> {
        self.fullscreen.and_then(|id| self.get(id))
    }
}

/// Human-readable size: base 1024, up to two decimals, trailing zeros dropped.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::{self, FileBlob};
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn uploaded(names: &[&str]) -> Vec<UploadedFile> {
        let mut png = Vec::new();
        RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]))
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .expect("encode");

        let blobs = names
            .iter()
            .map(|name| Ok(FileBlob::from_bytes(*name, png.clone(), None)));
        upload::accept(blobs, upload::DEFAULT_MAX_FILE_SIZE).accepted
    }

    fn names<'a>(files: impl Iterator<Item = &'a UploadedFile>) -> Vec<&'a str> {
        files.map(UploadedFile::name).collect()
    }

    #[test]
    fn format_file_size_matches_expected_strings() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(500), "500 B");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_file_size(1_234_567), "1.18 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut library = Library::default();
        library.add(uploaded(&["b.png", "a.png"]));
        library.add(uploaded(&["c.png"]));
        assert_eq!(names(library.files().iter()), vec!["b.png", "a.png", "c.png"]);
    }

    #[test]
    fn filter_is_case_insensitive_and_empty_matches_all() {
        let mut library = Library::default();
        library.add(uploaded(&["Holiday.PNG", "cat.png", "HOLIDAY-2.jpg"]));

        library.set_filter("holiday");
        assert_eq!(
            names(library.filtered()),
            vec!["Holiday.PNG", "HOLIDAY-2.jpg"]
        );

        library.set_filter("");
        assert_eq!(library.filtered().count(), 3);
    }

    #[test]
    fn filter_applies_regardless_of_view_mode() {
        let mut library = Library::new(ViewMode::Grid);
        library.add(uploaded(&["a.png", "b.png"]));
        library.set_filter("B.");

        let grid: Vec<String> = library.filtered().map(|f| f.name().to_string()).collect();
        library.set_view_mode(ViewMode::Table);
        let table = names(library.filtered());
        assert_eq!(grid, vec!["b.png"]);
        assert_eq!(grid, table);
    }

    #[test]
    fn remove_uses_stable_id_under_filter() {
        let mut library = Library::default();
        library.add(uploaded(&["a.png", "b.png", "c.png"]));
        library.set_filter("c");

        let target = library.filtered().next().map(|f| f.id).expect("match");
        assert!(library.remove(target));
        assert_eq!(names(library.files().iter()), vec!["a.png", "b.png"]);
        assert!(!library.remove(target));
    }

    #[test]
    fn removing_fullscreen_file_closes_preview() {
        let mut library = Library::default();
        library.add(uploaded(&["a.png", "b.png"]));
        let first = library.files()[0].id;
        let second = library.files()[1].id;

        library.open_fullscreen(first);
        library.remove(second);
        assert_eq!(library.fullscreen().map(UploadedFile::name), Some("a.png"));

        library.remove(first);
        assert!(library.fullscreen().is_none());
    }

    #[test]
    fn clear_empties_library() {
        let mut library = Library::default();
        library.add(uploaded(&["a.png"]));
        library.open_fullscreen(library.files()[0].id);
        library.clear();
        assert!(library.is_empty());
        assert!(library.fullscreen().is_none());
    }

    #[test]
    fn view_mode_serializes_lowercase() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            mode: ViewMode,
        }
        let text = toml::to_string(&Wrapper {
            mode: ViewMode::Table,
        })
        .expect("serialize");
        assert!(text.contains("\"table\""));
        let back: Wrapper = toml::from_str("mode = \"grid\"").expect("parse");
        assert_eq!(back.mode, ViewMode::Grid);
    }
}
