//! CLI output formatting for all pipeline stages.
//!
//! # Information-First Display
//!
//! Output reads as a content inventory: every page leads with its positional
//! index and title, and file names follow as indented `Source:` context.
//! Sections are listed by component name with the numbers that matter for
//! rotation (item count and interval).
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Pages
//! 001 Welcome to Casa Marea (7 sections)
//!     Source: 010-home.toml
//!     Hero
//!     Feature banner (4 items, 1px every 30ms)
//!     Testimonials (4 items, every 5s)
//!
//! Hidden pages
//!     Press Kit (1 section)
//!         Source: press-kit.toml
//!
//! Config
//!     config.toml
//!     assets/
//! ```
//!
//! ## Generate
//!
//! ```text
//! site.css → site.css?v=1a2b3c4d
//! Copied 3 assets
//! 001 Welcome to Casa Marea → index.html
//! 002 About Us → about-us.html
//!     Press Kit → press-kit.html
//!
//! Generated 3 pages, 12 sections, 3 assets copied
//! ```
//!
//! ## Preview
//!
//! ```text
//! Testimonials (4 items, every 5s)
//!     0 → 1 → 2 → 3 → 0 → 1
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::config::CarouselsConfig;
use crate::generate::{GenerateEvent, GenerateReport};
use crate::preview::{LiveTick, Timeline};
use crate::scan::Manifest;
use crate::types::{Page, Section};
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut.trim_end())
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{} {}", n, one)
    } else {
        format!("{} {}", n, many)
    }
}

/// Human interval: whole seconds as `5s`, fractions as `1.5s`, short ones in ms.
pub fn format_duration(d: Duration) -> String {
    let ms = d.as_millis();
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms % 1000 == 0 {
        format!("{}s", ms / 1000)
    } else {
        format!("{:.1}s", d.as_secs_f64())
    }
}

/// Page header line: index (numbered pages only) + title + section count.
fn page_header(index: Option<usize>, page: &Page) -> String {
    let count = plural(page.sections.len(), "section", "sections");
    match index {
        Some(i) => format!("{} {} ({})", format_index(i), page.title, count),
        None => format!("{} ({})", page.title, count),
    }
}

/// One-line summary of a section: component name plus rotation details.
pub fn section_summary(section: &Section, carousels: &CarouselsConfig) -> String {
    let label = section.label();
    let every = |ms: u64| format_duration(Duration::from_millis(ms));
    match section {
        Section::FeatureBanner(s) => format!(
            "{} ({}, {}px every {})",
            label,
            plural(s.items.len(), "item", "items"),
            carousels.marquee.step_px,
            every(carousels.marquee.interval_ms)
        ),
        Section::ImageSlider(s) => format!(
            "{} ({}, every {})",
            label,
            plural(s.slides.len(), "slide", "slides"),
            every(carousels.image_slider.interval_ms)
        ),
        Section::RoomShowcase(s) => format!(
            "{} ({}, every {})",
            label,
            plural(s.rooms.len(), "room", "rooms"),
            every(carousels.room_showcase.interval_ms)
        ),
        Section::RoomsCards(s) => format!(
            "{} ({}, photos every {})",
            label,
            plural(s.rooms.len(), "room", "rooms"),
            every(carousels.room_cards.interval_ms)
        ),
        Section::Stats(s) => format!(
            "{} ({}, every {})",
            label,
            plural(s.stats.len(), "stat", "stats"),
            every(carousels.stats.interval_ms)
        ),
        Section::Testimonials(s) => format!(
            "{} ({}, every {})",
            label,
            plural(s.testimonials.len(), "item", "items"),
            every(carousels.testimonials.interval_ms)
        ),
        Section::FeatureGrid(s) => format!(
            "{} ({})",
            label,
            plural(s.features.len(), "feature", "features")
        ),
        Section::Story(s) => {
            let first_line = s.body.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
            let preview = truncate_desc(first_line.trim_start_matches('#').trim(), 40);
            if preview.is_empty() {
                label.to_string()
            } else {
                format!("{}: {}", label, preview)
            }
        }
        Section::Hero(_) | Section::Contact(_) => label.to_string(),
    }
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan stage output showing discovered pages and their sections.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    let carousels = &manifest.config.carousels;

    lines.push("Pages".to_string());
    for (i, page) in manifest.pages.iter().filter(|p| p.in_nav).enumerate() {
        lines.push(page_header(Some(i + 1), page));
        lines.push(format!("{}Source: {}", indent(1), page.source));
        for section in &page.sections {
            lines.push(format!("{}{}", indent(1), section_summary(section, carousels)));
        }
    }

    let hidden: Vec<&Page> = manifest.pages.iter().filter(|p| !p.in_nav).collect();
    if !hidden.is_empty() {
        lines.push(String::new());
        lines.push("Hidden pages".to_string());
        for page in hidden {
            lines.push(format!("{}{}", indent(1), page_header(None, page)));
            lines.push(format!("{}Source: {}", indent(2), page.source));
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push(format!("{}config.toml", indent(1)));
    }
    if source_root.join(&manifest.config.assets_dir).is_dir() {
        lines.push(format!("{}{}/", indent(1), manifest.config.assets_dir));
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format a single generate progress event.
pub fn format_generate_event(event: &GenerateEvent) -> Vec<String> {
    match event {
        GenerateEvent::BundleWritten { file, url } => {
            vec![format!("{} \u{2192} {}", file, url)]
        }
        GenerateEvent::AssetsCopied { count } => {
            vec![format!("Copied {}", plural(*count, "asset", "assets"))]
        }
        GenerateEvent::PageWritten { title, file } => {
            vec![format!("Wrote {} ({})", file, title)]
        }
    }
}

/// Format the generate summary: every page with its output file.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();

    let mut position = 0;
    for page in &report.pages {
        if page.in_nav {
            position += 1;
            lines.push(format!(
                "{} {} \u{2192} {}",
                format_index(position),
                page.title,
                page.file
            ));
        } else {
            lines.push(format!("{}{} \u{2192} {}", indent(1), page.title, page.file));
        }
    }

    let sections: usize = report.pages.iter().map(|p| p.sections).sum();
    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}, {} copied",
        plural(report.pages.len(), "page", "pages"),
        plural(sections, "section", "sections"),
        plural(report.assets_copied, "asset", "assets")
    ));

    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Preview output
// ============================================================================

/// Format one carousel timeline: header, then the index sequence.
pub fn format_timeline(timeline: &Timeline) -> Vec<String> {
    let steps: Vec<String> = timeline
        .indices
        .iter()
        .enumerate()
        .map(|(tick, idx)| {
            if timeline.wraps.contains(&tick) {
                format!("{}*", idx)
            } else {
                idx.to_string()
            }
        })
        .collect();

    vec![
        format!(
            "{} ({} {}, every {})",
            timeline.label,
            timeline.len,
            timeline.unit,
            format_duration(timeline.interval)
        ),
        format!("{}{}", indent(1), steps.join(" \u{2192} ")),
    ]
}

/// Format every timeline of a page preview.
pub fn format_preview_output(page_title: &str, ticks: u32, timelines: &[Timeline]) -> Vec<String> {
    let mut lines = vec![format!(
        "{}: {}",
        page_title,
        plural(ticks as usize, "tick", "ticks")
    )];
    for timeline in timelines {
        lines.extend(format_timeline(timeline));
    }
    if timelines.iter().any(|t| !t.wraps.is_empty()) {
        lines.push(String::new());
        lines.push("* seamless wrap: track snapped back by one set width".to_string());
    }
    lines
}

/// Print preview output to stdout.
pub fn print_preview_output(page_title: &str, ticks: u32, timelines: &[Timeline]) {
    for line in format_preview_output(page_title, ticks, timelines) {
        println!("{}", line);
    }
}

/// Format one live tick.
pub fn format_live_tick(tick: &LiveTick) -> String {
    format!("{}tick {:>3} \u{2192} {}", indent(1), tick.tick, tick.index)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::GeneratedPage;
    use crate::scan;
    use crate::test_helpers::*;
    use crate::types::{FeatureBanner, Story, Testimonial, Testimonials};

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
    }

    #[test]
    fn truncate_desc_cuts_on_chars() {
        assert_eq!(truncate_desc("short", 10), "short");
        assert_eq!(truncate_desc("Pousada à beira-mar", 7), "Pousada...");
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(Duration::from_millis(5000)), "5s");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
        assert_eq!(format_duration(Duration::from_millis(30)), "30ms");
    }

    #[test]
    fn testimonials_summary() {
        let section = Section::Testimonials(Testimonials {
            heading: None,
            testimonials: (0..4)
                .map(|i| Testimonial {
                    text: "Lovely".to_string(),
                    author: format!("Guest {i}"),
                    rating: 5,
                    origin: None,
                })
                .collect(),
        });
        assert_eq!(
            section_summary(&section, &CarouselsConfig::default()),
            "Testimonials (4 items, every 5s)"
        );
    }

    #[test]
    fn marquee_summary_shows_speed() {
        let section = Section::FeatureBanner(FeatureBanner {
            items: vec!["Spa".to_string()],
        });
        assert_eq!(
            section_summary(&section, &CarouselsConfig::default()),
            "Feature banner (1 item, 1px every 30ms)"
        );
    }

    #[test]
    fn story_summary_previews_first_line() {
        let section = Section::Story(Story {
            heading: None,
            body: "\n# Our story\n\nMore text".to_string(),
            file: None,
            image: None,
        });
        assert_eq!(
            section_summary(&section, &CarouselsConfig::default()),
            "Story: Our story"
        );
    }

    #[test]
    fn scan_output_lists_pages_and_sections() {
        let tmp = setup_fixtures();
        let manifest = scan::scan(tmp.path()).unwrap();
        let lines = format_scan_output(&manifest, tmp.path());

        assert_eq!(lines[0], "Pages");
        assert_eq!(lines[1], "001 Welcome to Casa Marea (7 sections)");
        assert_eq!(lines[2], "    Source: 010-home.toml");
        assert_eq!(lines[3], "    Hero");
        assert!(lines.contains(&"Hidden pages".to_string()));
        assert!(lines.contains(&"        Source: press-kit.toml".to_string()));
        assert!(lines.contains(&"    config.toml".to_string()));
        assert!(lines.contains(&"    assets/".to_string()));
    }

    #[test]
    fn generate_output_separates_hidden_pages() {
        let report = GenerateReport {
            pages: vec![
                GeneratedPage {
                    title: "Welcome".to_string(),
                    file: "index.html".to_string(),
                    in_nav: true,
                    sections: 3,
                },
                GeneratedPage {
                    title: "Press Kit".to_string(),
                    file: "press-kit.html".to_string(),
                    in_nav: false,
                    sections: 1,
                },
            ],
            assets: Default::default(),
            assets_copied: 1,
        };
        let lines = format_generate_output(&report);
        assert_eq!(lines[0], "001 Welcome \u{2192} index.html");
        assert_eq!(lines[1], "    Press Kit \u{2192} press-kit.html");
        assert_eq!(
            lines.last().unwrap(),
            "Generated 2 pages, 4 sections, 1 asset copied"
        );
    }

    #[test]
    fn generate_events() {
        let event = GenerateEvent::AssetsCopied { count: 3 };
        assert_eq!(format_generate_event(&event), vec!["Copied 3 assets"]);
    }

    #[test]
    fn timeline_marks_wraps() {
        let timeline = Timeline {
            label: "Image slider".to_string(),
            unit: "slides",
            len: 3,
            interval: Duration::from_secs(5),
            indices: vec![0, 1, 2, 0, 1],
            wraps: vec![3],
        };
        let lines = format_timeline(&timeline);
        assert_eq!(lines[0], "Image slider (3 slides, every 5s)");
        assert_eq!(lines[1], "    0 \u{2192} 1 \u{2192} 2 \u{2192} 0* \u{2192} 1");
    }

    #[test]
    fn live_tick_line() {
        let line = format_live_tick(&LiveTick { tick: 2, index: 1 });
        assert_eq!(line, "    tick   2 \u{2192} 1");
    }
}
