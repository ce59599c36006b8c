//! Content scanning and manifest generation.
//!
//! Stage 1 of the build pipeline. Reads the content directory, validates it,
//! and produces a [`Manifest`] that the generate stage consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! content/
//! ├── config.toml          # Presentation config (optional)
//! ├── site.toml            # Hotel name, tagline, contact, social links (required)
//! ├── 010-home.toml        # Page (numbered = appears in nav) → index.html
//! ├── 020-about-us.toml    # Page → about-us.html
//! ├── our-story.md         # Markdown referenced by a story section
//! ├── press-kit.toml       # Unnumbered = generated, hidden from nav
//! └── assets/              # Copied verbatim to the output root
//! ```
//!
//! ## Page Files
//!
//! ```toml
//! title = "Welcome"            # optional, defaults to the slug
//!
//! [[sections]]
//! kind = "hero"
//! video = "/assets/hero.mp4"
//! poster = "/assets/hero.jpg"
//! headline = "Where the tide slows down"
//!
//! [[sections]]
//! kind = "testimonials"
//! testimonials = [
//!   { text = "Unforgettable.", author = "Maya R.", rating = 5 },
//! ]
//! ```
//!
//! ## Validation
//!
//! The scanner rejects content that would produce a broken page:
//! - A `home` page must exist (it becomes `index.html`)
//! - Slugs must be unique and URL-safe
//! - Every rotating section needs at least one item, and every room at least
//!   one image (a carousel over nothing has no valid index)
//! - Testimonial ratings must be 1 to 5
//! - Story `file` references must exist

use crate::config::{self, SiteConfig};
use crate::naming::{is_valid_slug, parse_entry_name};
use crate::types::{NavItem, Page, Room, Section, SiteInfo};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Missing site file: {0}")]
    MissingSiteFile(PathBuf),
    #[error("Invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid page slug '{slug}' in {path} (use lowercase letters, digits and dashes)")]
    InvalidSlug { slug: String, path: PathBuf },
    #[error("Duplicate page slug '{0}'")]
    DuplicateSlug(String),
    #[error("No home page found (add a page file named like 010-home.toml)")]
    MissingHomePage,
    #[error("{section} section #{position} in {page} has no items")]
    EmptyCarousel {
        page: String,
        section: &'static str,
        position: usize,
    },
    #[error("Room '{room}' in {page} has no images")]
    RoomWithoutImages { page: String, room: String },
    #[error("Testimonial by '{author}' in {page} has rating {rating} (expected 1-5)")]
    InvalidRating {
        page: String,
        author: String,
        rating: u8,
    },
    #[error("Story file not found: {0}")]
    MissingStoryFile(PathBuf),
}

/// Manifest output from the scan stage
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub site: SiteInfo,
    pub navigation: Vec<NavItem>,
    pub pages: Vec<Page>,
    pub config: SiteConfig,
}

impl Manifest {
    pub fn find_page(&self, slug: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.slug == slug)
    }
}

/// On-disk shape of a page file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PageFile {
    title: Option<String>,
    #[serde(default)]
    sections: Vec<Section>,
}

const SITE_FILE: &str = "site.toml";
const CONFIG_FILE: &str = "config.toml";

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    let config = config::load_config(root)?;
    let site = load_site_info(root)?;
    let pages = parse_pages(root)?;

    if !pages.iter().any(|p| p.slug == "home") {
        return Err(ScanError::MissingHomePage);
    }

    let navigation = pages
        .iter()
        .filter(|p| p.in_nav)
        .map(|p| NavItem {
            title: p.link_title.clone(),
            href: p.href(),
            slug: p.slug.clone(),
        })
        .collect();

    Ok(Manifest {
        site,
        navigation,
        pages,
        config,
    })
}

fn load_site_info(root: &Path) -> Result<SiteInfo, ScanError> {
    let path = root.join(SITE_FILE);
    if !path.is_file() {
        return Err(ScanError::MissingSiteFile(path));
    }
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|source| ScanError::Toml { path, source })
}

/// Parse every page file in the content root.
///
/// Numbered files appear in navigation sorted by number; unnumbered files are
/// generated but hidden.
fn parse_pages(root: &Path) -> Result<Vec<Page>, ScanError> {
    let mut page_files: Vec<PathBuf> = fs::read_dir(root)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| is_page_file(p))
        .collect();
    page_files.sort();

    let mut pages = Vec::new();
    let mut seen = HashSet::new();
    for path in &page_files {
        let page = parse_page(root, path)?;
        if !seen.insert(page.slug.clone()) {
            return Err(ScanError::DuplicateSlug(page.slug));
        }
        pages.push(page);
    }

    pages.sort_by_key(|p| p.sort_key);
    Ok(pages)
}

fn is_page_file(path: &Path) -> bool {
    let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
        return false;
    };
    path.is_file()
        && !name.starts_with('.')
        && name != SITE_FILE
        && name != CONFIG_FILE
        && path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("toml"))
            .unwrap_or(false)
}

fn parse_page(root: &Path, path: &Path) -> Result<Page, ScanError> {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let source = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let parsed = parse_entry_name(&stem);
    if !is_valid_slug(&parsed.slug) {
        return Err(ScanError::InvalidSlug {
            slug: parsed.slug,
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    let file: PageFile = toml::from_str(&content).map_err(|source| ScanError::Toml {
        path: path.to_path_buf(),
        source,
    })?;

    let mut sections = file.sections;
    for (idx, section) in sections.iter_mut().enumerate() {
        resolve_story_file(root, section)?;
        validate_section(&source, idx + 1, section)?;
    }

    let link_title = capitalize_words(&parsed.display_title);
    Ok(Page {
        title: file.title.unwrap_or_else(|| link_title.clone()),
        link_title,
        slug: parsed.slug,
        in_nav: parsed.number.is_some(),
        sort_key: parsed.number.unwrap_or(u32::MAX),
        source,
        sections,
    })
}

/// Inline the markdown of a story section that points at a file.
fn resolve_story_file(root: &Path, section: &mut Section) -> Result<(), ScanError> {
    if let Section::Story(story) = section {
        if let Some(file) = &story.file {
            let path = root.join(file);
            if !path.is_file() {
                return Err(ScanError::MissingStoryFile(path));
            }
            story.body = fs::read_to_string(&path)?;
        }
    }
    Ok(())
}

fn validate_section(page: &str, position: usize, section: &Section) -> Result<(), ScanError> {
    if section.carousel_len() == Some(0) {
        return Err(ScanError::EmptyCarousel {
            page: page.to_string(),
            section: section.label(),
            position,
        });
    }

    let rooms: &[Room] = match section {
        Section::RoomShowcase(s) => s.rooms.as_slice(),
        Section::RoomsCards(s) => s.rooms.as_slice(),
        _ => &[],
    };
    if let Some(room) = rooms.iter().find(|r| r.images.is_empty()) {
        return Err(ScanError::RoomWithoutImages {
            page: page.to_string(),
            room: room.name.clone(),
        });
    }

    if let Section::Testimonials(s) = section {
        if let Some(t) = s
            .testimonials
            .iter()
            .find(|t| !(1..=5).contains(&t.rating))
        {
            return Err(ScanError::InvalidRating {
                page: page.to_string(),
                author: t.author.clone(),
                rating: t.rating,
            });
        }
    }

    Ok(())
}

/// `about us` → `About Us`
fn capitalize_words(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
