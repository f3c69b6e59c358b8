//! Slide collection – turns a [`SlideOrder`] into the list of slides that
//! actually exist on disk, with their contents.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GenerateError;
use crate::metadata::SlideOrder;

/// A slide reference that matched a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSlide {
    pub category: String,
    pub file: String,
    pub path: PathBuf,
    pub content: String,
}

/// Result of collection: the slides found, in order, and the paths that were
/// referenced but absent.
#[derive(Debug, Clone, Default)]
pub struct CollectedSlides {
    pub slides: Vec<ResolvedSlide>,
    pub missing: Vec<PathBuf>,
}

/// Read `path` as text. Invalid UTF-8 is replaced rather than rejected;
/// slide fragments are inserted as-is and one stray byte should not stop
/// the export.
pub fn read_lossy(path: &Path) -> Result<String, GenerateError> {
    let bytes = fs::read(path).map_err(|e| GenerateError::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Resolve every reference in `order` against `presentation_dir`.
///
/// Missing files are logged and skipped. A file that exists but cannot be
/// read is an error.
pub fn collect_slides(
    presentation_dir: &Path,
    order: &SlideOrder,
) -> Result<CollectedSlides, GenerateError> {
    let mut collected = CollectedSlides::default();

    for reference in order.references() {
        let path = presentation_dir
            .join(&reference.category)
            .join(&reference.name);

        if !path.is_file() {
            log::warn!("Slide not found: {}", path.display());
            collected.missing.push(path);
            continue;
        }

        let content = read_lossy(&path)?;
        collected.slides.push(ResolvedSlide {
            category: reference.category.clone(),
            file: reference.name.clone(),
            path,
            content,
        });
    }

    log_progress(&collected.slides);
    Ok(collected)
}

/// Per-slide progress, with a header whenever the category changes.
fn log_progress(slides: &[ResolvedSlide]) {
    let total = slides.len();
    log::info!("Adding {total} slides in order");

    let mut current_category: Option<&str> = None;
    for (i, slide) in slides.iter().enumerate() {
        if current_category != Some(slide.category.as_str()) {
            current_category = Some(slide.category.as_str());
            log::info!("{}:", slide.category);
        }
        let done = i + 1;
        let percent = (done * 100 + total / 2) / total;
        log::info!("  ✓ {} [{done}/{total} - {percent}%]", slide.file);
    }
}
