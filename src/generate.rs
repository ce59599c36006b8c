//! HTML site generation.
//!
//! Stage 2 of the build pipeline. Reads the scan manifest and writes the
//! final static site.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html          # The `home` page
//! ├── about-us.html       # One file per other page
//! ├── site.css            # Config-driven custom properties + base stylesheet
//! ├── carousel.js         # Browser runtime for every rotating component
//! ├── booking.js          # Availability form handling
//! └── assets/             # Copied verbatim from the content root
//! ```
//!
//! ## Bundles
//!
//! The stylesheet and scripts are compiled into the binary and written next
//! to the pages. Links carry a short SHA-256 of the bundle content
//! (`site.css?v=1a2b3c4d`), so a redeploy with changed colors or a new
//! runtime is never served from a stale browser cache. Every page sits at
//! the output root, so the links are relative and the site also works when
//! opened straight from disk.
//!
//! ## Above the Fold
//!
//! The first section of every page renders with `loading="eager"` images;
//! everything further down the page is lazy.
//!
//! ## Progress
//!
//! [`generate`] optionally reports each written file over an mpsc channel so
//! the CLI can print progress while copying runs on the rayon pool.

use crate::carousel::CarouselError;
use crate::components::layout::{self, AssetLinks};
use crate::components::{RenderContext, render_section};
use crate::config;
use crate::scan::Manifest;
use crate::types::Page;
use maud::{Markup, html};
use rayon::prelude::*;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Cannot render page '{page}': {source}")]
    Render {
        page: String,
        source: CarouselError,
    },
}

/// Progress reported while generating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateEvent {
    BundleWritten { file: String, url: String },
    PageWritten { title: String, file: String },
    AssetsCopied { count: usize },
}

/// Summary of one generate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub pages: Vec<GeneratedPage>,
    pub assets: AssetLinks,
    pub assets_copied: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub title: String,
    pub file: String,
    pub in_nav: bool,
    pub sections: usize,
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const CAROUSEL_JS: &str = include_str!("../static/carousel.js");
const BOOKING_JS: &str = include_str!("../static/booking.js");

/// Length of the content hash appended to bundle URLs.
const FINGERPRINT_LEN: usize = 8;

pub fn generate(
    manifest_path: &Path,
    source_dir: &Path,
    output_dir: &Path,
    progress: Option<Sender<GenerateEvent>>,
) -> Result<GenerateReport, GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;

    let emit = |event: GenerateEvent| {
        if let Some(tx) = &progress {
            // A dropped receiver only means nobody is listening
            let _ = tx.send(event);
        }
    };

    fs::create_dir_all(output_dir)?;

    let css = site_css(&manifest.config);
    let assets = AssetLinks {
        css: write_bundle(output_dir, "site.css", &css)?,
        carousel_js: write_bundle(output_dir, "carousel.js", CAROUSEL_JS)?,
        booking_js: write_bundle(output_dir, "booking.js", BOOKING_JS)?,
    };
    for (file, url) in [
        ("site.css", &assets.css),
        ("carousel.js", &assets.carousel_js),
        ("booking.js", &assets.booking_js),
    ] {
        emit(GenerateEvent::BundleWritten {
            file: file.to_string(),
            url: url.clone(),
        });
    }

    let assets_src = source_dir.join(&manifest.config.assets_dir);
    let assets_copied = if assets_src.is_dir() {
        copy_assets(&assets_src, &output_dir.join(&manifest.config.assets_dir))?
    } else {
        0
    };
    emit(GenerateEvent::AssetsCopied {
        count: assets_copied,
    });

    let mut pages = Vec::with_capacity(manifest.pages.len());
    for page in &manifest.pages {
        let markup = render_page(page, &manifest, &assets).map_err(|source| {
            GenerateError::Render {
                page: page.slug.clone(),
                source,
            }
        })?;
        let file = page.output_file();
        fs::write(output_dir.join(&file), markup.into_string())?;
        emit(GenerateEvent::PageWritten {
            title: page.title.clone(),
            file: file.clone(),
        });
        pages.push(GeneratedPage {
            title: page.title.clone(),
            file,
            in_nav: page.in_nav,
            sections: page.sections.len(),
        });
    }

    Ok(GenerateReport {
        pages,
        assets,
        assets_copied,
    })
}

/// Full stylesheet: generated custom properties followed by the base rules.
pub fn site_css(config: &config::SiteConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_theme_css(&config.theme),
        CSS_STATIC
    )
}

/// Short content hash for cache busting.
pub fn fingerprint(content: &[u8]) -> String {
    let digest = Sha256::digest(content);
    let hex = format!("{:x}", digest);
    hex[..FINGERPRINT_LEN].to_string()
}

fn write_bundle(output_dir: &Path, name: &str, content: &str) -> std::io::Result<String> {
    fs::write(output_dir.join(name), content)?;
    Ok(format!("{}?v={}", name, fingerprint(content.as_bytes())))
}

/// Copy a directory tree, files in parallel. Returns the number of files copied.
fn copy_assets(src: &Path, dst: &Path) -> std::io::Result<usize> {
    let mut files: Vec<(PathBuf, PathBuf)> = Vec::new();
    for entry in walkdir::WalkDir::new(src) {
        let entry = entry?;
        let rel = match entry.path().strip_prefix(src) {
            Ok(rel) => rel,
            Err(_) => continue,
        };
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if !is_hidden(entry.path()) {
            files.push((entry.path().to_path_buf(), target));
        }
    }

    files
        .par_iter()
        .map(|(from, to)| fs::copy(from, to).map(|_| ()))
        .collect::<std::io::Result<Vec<()>>>()?;
    Ok(files.len())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

// ============================================================================
// Page rendering
// ============================================================================

/// Document title: the site name alone on the home page, otherwise
/// `Page · Site`.
fn document_title(page: &Page, site_name: &str) -> String {
    if page.slug == "home" {
        site_name.to_string()
    } else {
        format!("{} · {}", page.title, site_name)
    }
}

/// Render one page into a complete HTML document.
pub fn render_page(
    page: &Page,
    manifest: &Manifest,
    assets: &AssetLinks,
) -> Result<Markup, CarouselError> {
    let sections = page
        .sections
        .iter()
        .enumerate()
        .map(|(idx, section)| {
            let ctx = RenderContext {
                site: &manifest.site,
                config: &manifest.config,
                eager: idx == 0,
            };
            render_section(section, &ctx)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let nav = layout::render_nav(&manifest.navigation, &page.slug);
    let content = html! {
        (layout::site_header(&manifest.site, nav))
        main.page {
            @for section in sections {
                (section)
            }
        }
        (layout::site_footer(&manifest.site))
    };

    let body_class = format!("page-{}", page.slug);
    Ok(layout::base_document(
        &document_title(page, &manifest.site.name),
        &manifest.site.tagline,
        assets,
        Some(&body_class),
        content,
    ))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    /// Scan the fixtures, write the manifest, and generate into a fresh dir.
    fn build_fixtures() -> (TempDir, TempDir, GenerateReport) {
        let content = setup_fixtures();
        let manifest = scan::scan(content.path()).unwrap();
        let manifest_path = content.path().join("manifest.json");
        fs::write(&manifest_path, serde_json::to_string(&manifest).unwrap()).unwrap();
        let out = TempDir::new().unwrap();
        let report = generate(&manifest_path, content.path(), out.path(), None).unwrap();
        (content, out, report)
    }

    fn assets() -> AssetLinks {
        AssetLinks {
            css: "site.css?v=0".to_string(),
            carousel_js: "carousel.js?v=0".to_string(),
            booking_js: "booking.js?v=0".to_string(),
        }
    }

    #[test]
    fn writes_one_file_per_page() {
        let (_content, out, report) = build_fixtures();
        let files: Vec<&str> = report.pages.iter().map(|p| p.file.as_str()).collect();
        assert_eq!(files, vec!["index.html", "about-us.html", "press-kit.html"]);
        for file in files {
            assert!(out.path().join(file).exists(), "{file} missing");
        }
    }

    #[test]
    fn writes_fingerprinted_bundles() {
        let (_content, out, report) = build_fixtures();
        assert!(out.path().join("site.css").exists());
        assert!(out.path().join("carousel.js").exists());
        assert!(out.path().join("booking.js").exists());
        assert!(report.assets.css.starts_with("site.css?v="));

        let index = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(index.contains(&report.assets.css));
        assert!(index.contains(&report.assets.carousel_js));
    }

    #[test]
    fn stylesheet_uses_configured_accent() {
        let (_content, out, _) = build_fixtures();
        let css = fs::read_to_string(out.path().join("site.css")).unwrap();
        assert!(css.contains("--color-accent: #0f766e;"));
        assert!(css.contains("--section-padding: clamp("));
    }

    #[test]
    fn copies_assets_under_assets_dir() {
        let (_content, out, report) = build_fixtures();
        assert!(report.assets_copied >= 1);
        assert!(out.path().join("assets/favicon.svg").exists());
    }

    #[test]
    fn home_page_has_every_component() {
        let (_content, out, _) = build_fixtures();
        let index = fs::read_to_string(out.path().join("index.html")).unwrap();
        for class in [
            "hero",
            "marquee",
            "image-slider",
            "room-showcase",
            "stats",
            "testimonials",
            "contact-section",
        ] {
            assert!(index.contains(class), "missing {class}");
        }
        assert!(index.contains("<title>Casa Marea</title>"));
    }

    #[test]
    fn first_section_eager_rest_lazy() {
        let (_content, out, _) = build_fixtures();
        let about = fs::read_to_string(out.path().join("about-us.html")).unwrap();
        // Story section comes first on the about page
        let first_lazy = about.find(r#"loading="lazy""#).unwrap();
        let eager = about.find(r#"loading="eager""#).unwrap();
        assert!(eager < first_lazy);
    }

    #[test]
    fn nav_marks_current_page() {
        let (_content, out, _) = build_fixtures();
        let about = fs::read_to_string(out.path().join("about-us.html")).unwrap();
        assert!(about.contains(r#"<a href="/about-us.html" aria-current="page">"#));
        assert!(about.contains("<title>About Us · Casa Marea</title>"));
    }

    #[test]
    fn hidden_page_generated_but_not_in_nav() {
        let (_content, out, report) = build_fixtures();
        let press = report.pages.iter().find(|p| p.file == "press-kit.html").unwrap();
        assert!(!press.in_nav);
        let index = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(!index.contains("/press-kit.html"));
    }

    #[test]
    fn progress_events_reported() {
        let content = setup_fixtures();
        let manifest = scan::scan(content.path()).unwrap();
        let manifest_path = content.path().join("manifest.json");
        fs::write(&manifest_path, serde_json::to_string(&manifest).unwrap()).unwrap();
        let out = TempDir::new().unwrap();

        let (tx, rx) = std::sync::mpsc::channel();
        generate(&manifest_path, content.path(), out.path(), Some(tx)).unwrap();
        let events: Vec<GenerateEvent> = rx.iter().collect();

        let pages = events
            .iter()
            .filter(|e| matches!(e, GenerateEvent::PageWritten { .. }))
            .count();
        assert_eq!(pages, 3);
        assert!(matches!(events[0], GenerateEvent::BundleWritten { .. }));
    }

    #[test]
    fn render_page_reports_empty_carousel() {
        let content = setup_fixtures();
        let mut manifest = scan::scan(content.path()).unwrap();
        let home = manifest.pages.iter_mut().find(|p| p.slug == "home").unwrap();
        for section in &mut home.sections {
            if let crate::types::Section::Testimonials(t) = section {
                t.testimonials.clear();
            }
        }
        let home = find_page(&manifest, "home");
        assert_eq!(
            render_page(home, &manifest, &assets()).unwrap_err(),
            CarouselError::Empty
        );
    }

    #[test]
    fn fingerprint_is_stable_and_short() {
        assert_eq!(fingerprint(b"body {}"), fingerprint(b"body {}"));
        assert_ne!(fingerprint(b"a"), fingerprint(b"b"));
        assert_eq!(fingerprint(b"x").len(), FINGERPRINT_LEN);
    }

    #[test]
    fn hidden_files_not_copied() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        fs::create_dir_all(src.path().join("img")).unwrap();
        fs::write(src.path().join("img/a.jpg"), b"a").unwrap();
        fs::write(src.path().join(".DS_Store"), b"x").unwrap();
        let copied = copy_assets(src.path(), dst.path()).unwrap();
        assert_eq!(copied, 1);
        assert!(dst.path().join("img/a.jpg").exists());
        assert!(!dst.path().join(".DS_Store").exists());
    }
}
