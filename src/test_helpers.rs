//! Shared test utilities.
//!
//! Provides fixture setup plus lookup helpers that panic with a clear message
//! on a miss, so assertions read as plain content checks:
//!
//! ```rust
//! let tmp = setup_fixtures();
//! let manifest = scan(tmp.path()).unwrap();
//! let home = find_page(&manifest, "home");
//! assert_eq!(section_labels(home)[0], "Hero");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::scan::Manifest;
use crate::types::Page;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    for entry in walkdir::WalkDir::new(&fixtures) {
        let entry = entry.unwrap();
        let rel = entry.path().strip_prefix(&fixtures).unwrap();
        let dst = tmp.path().join(rel);
        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&dst).unwrap();
        } else {
            std::fs::copy(entry.path(), &dst).unwrap();
        }
    }
    tmp
}

/// Write an extra page file into a fixture copy.
pub fn write_page(root: &Path, name: &str, content: &str) {
    std::fs::write(root.join(name), content).unwrap();
}

// =========================================================================
// Manifest lookups (panic with a clear message on miss)
// =========================================================================

/// Find a page by slug. Panics if not found.
pub fn find_page<'a>(manifest: &'a Manifest, slug: &str) -> &'a Page {
    manifest.find_page(slug).unwrap_or_else(|| {
        let slugs = page_slugs(manifest);
        panic!("page '{slug}' not found. Available: {slugs:?}")
    })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All page slugs in manifest order.
pub fn page_slugs(manifest: &Manifest) -> Vec<&str> {
    manifest.pages.iter().map(|p| p.slug.as_str()).collect()
}

/// Navigation titles in order.
pub fn nav_titles(manifest: &Manifest) -> Vec<&str> {
    manifest
        .navigation
        .iter()
        .map(|n| n.title.as_str())
        .collect()
}

/// Section component names of a page, in render order.
pub fn section_labels(page: &Page) -> Vec<&'static str> {
    page.sections.iter().map(|s| s.label()).collect()
}
