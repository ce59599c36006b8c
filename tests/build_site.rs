//! End-to-end CLI tests: run the built binary against the fixture content.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/content")
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_resort-site"))
        .args(args)
        .output()
        .expect("failed to run resort-site")
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("non-UTF-8 temp path")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Full build into a fresh directory. Returns (output dir, temp dir, stdout).
fn build() -> (TempDir, TempDir, String) {
    let out = TempDir::new().unwrap();
    let temp = TempDir::new().unwrap();
    let output = run(&[
        "build",
        "--source",
        path_str(&fixtures()),
        "--output",
        path_str(out.path()),
        "--temp-dir",
        path_str(temp.path()),
    ]);
    assert!(
        output.status.success(),
        "build failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let text = stdout(&output);
    (out, temp, text)
}

#[test]
fn build_writes_pages_bundles_and_assets() {
    let (out, temp, _) = build();
    for file in [
        "index.html",
        "about-us.html",
        "press-kit.html",
        "site.css",
        "carousel.js",
        "booking.js",
        "assets/favicon.svg",
        "assets/robots.txt",
    ] {
        assert!(out.path().join(file).exists(), "{file} missing");
    }
    assert!(temp.path().join("manifest.json").exists());
}

#[test]
fn build_reports_stages() {
    let (_out, _temp, text) = build();
    assert!(text.contains("==> Stage 1: Scanning"));
    assert!(text.contains("==> Stage 2: Generating HTML"));
    assert!(text.contains("001 Welcome to Casa Marea (7 sections)"));
    assert!(text.contains("Testimonials (4 items, every 5s)"));
    assert!(text.contains("Generated 3 pages"));
    assert!(text.contains("==> Build complete"));
}

#[test]
fn index_wires_carousels_and_booking_form() {
    let (out, _temp, _) = build();
    let index = std::fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(index.starts_with("<!DOCTYPE html>"));
    assert!(index.contains(r#"data-carousel="discrete""#));
    assert!(index.contains(r#"data-carousel="track""#));
    assert!(index.contains(r#"action="/availability""#));
    assert!(index.contains("carousel.js?v="));
    assert!(index.contains("booking.js?v="));
}

#[test]
fn scan_then_generate_matches_build() {
    let out = TempDir::new().unwrap();
    let temp = TempDir::new().unwrap();
    let fixtures_dir = fixtures();
    let common = [
        "--source",
        path_str(&fixtures_dir),
        "--output",
        path_str(out.path()),
        "--temp-dir",
        path_str(temp.path()),
    ];

    let scan = run(&[&["scan"][..], &common[..]].concat());
    assert!(scan.status.success());
    let generate = run(&[&["generate"][..], &common[..]].concat());
    assert!(generate.status.success());
    assert!(out.path().join("index.html").exists());
}

#[test]
fn check_validates_without_output() {
    let out = TempDir::new().unwrap();
    let output = run(&[
        "check",
        "--source",
        path_str(&fixtures()),
        "--output",
        path_str(out.path()),
    ]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("==> Content is valid"));
    assert!(!out.path().join("index.html").exists());
}

#[test]
fn check_fails_on_invalid_content() {
    let content = TempDir::new().unwrap();
    std::fs::write(content.path().join("site.toml"), "name = \"Nowhere\"\n").unwrap();
    let output = run(&["check", "--source", path_str(content.path())]);
    assert!(!output.status.success());
}

#[test]
fn book_prints_availability_url() {
    let output = run(&[
        "book",
        "--source",
        path_str(&fixtures()),
        "--check-in",
        "2025-06-01",
        "--check-out",
        "2025-06-03",
    ]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        "/availability?checkIn=2025-06-01&checkOut=2025-06-03&rooms=1&adults=2&children=0&name="
    );
}

#[test]
fn book_without_dates_fails() {
    let output = run(&[
        "book",
        "--source",
        path_str(&fixtures()),
        "--check-in",
        "",
        "--check-out",
        "2025-06-03",
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("MissingDates"));
}

#[test]
fn preview_prints_testimonial_timeline() {
    let output = run(&[
        "preview",
        "--source",
        path_str(&fixtures()),
        "--ticks",
        "5",
    ]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Testimonials (4 items, every 5s)"));
    assert!(text.contains("0 \u{2192} 1 \u{2192} 2 \u{2192} 3 \u{2192} 0 \u{2192} 1"));
    assert!(text.contains("0*"));
}

#[test]
fn gen_config_prints_stock_config() {
    let output = run(&["gen-config"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("[carousels.testimonials]"));
    assert!(text.contains("availability_path"));
}
