use clap::{Parser, Subcommand};
use resort_site::booking::BookingRequest;
use resort_site::{config, generate, output, preview, scan};
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "resort-site")]
#[command(about = "Static site generator for hotel and resort websites")]
#[command(long_about = "\
Static site generator for hotel and resort websites

Pages are TOML files made of sections. Numbered pages appear in the
navigation in number order; the page named 'home' becomes index.html.

Content structure:

  content/
  ├── site.toml                # Hotel name, tagline, contact, social links
  ├── config.toml              # Colors, fonts, carousel timing, booking (optional)
  ├── 010-home.toml            # Page → index.html
  ├── 020-rooms.toml           # Page → rooms.html
  ├── our-story.md             # Markdown for a story section (file = \"our-story.md\")
  ├── press-kit.toml           # No number prefix = generated, hidden from nav
  └── assets/                  # Images, video, favicon → copied to dist/assets/

Section kinds: hero, feature_banner, image_slider, room_showcase,
rooms_cards, stats, testimonials, feature_grid, story, contact.

Run 'resort-site gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifest)
    #[arg(long, default_value = ".resort-site-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan content directory into a manifest
    Scan,
    /// Produce the final HTML site from the manifest
    Generate,
    /// Run the full pipeline: scan → generate
    Build,
    /// Validate content directory without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print the availability URL the booking form would open
    Book(BookArgs),
    /// Show how a page's carousels rotate over timer ticks
    Preview(PreviewArgs),
}

#[derive(clap::Args)]
struct BookArgs {
    /// Arrival date (YYYY-MM-DD)
    #[arg(long)]
    check_in: String,
    /// Departure date (YYYY-MM-DD)
    #[arg(long)]
    check_out: String,
    /// Number of rooms (default from config)
    #[arg(long)]
    rooms: Option<u32>,
    /// Number of adults (default from config)
    #[arg(long)]
    adults: Option<u32>,
    /// Number of children (default from config)
    #[arg(long)]
    children: Option<u32>,
    /// Guest name
    #[arg(long, default_value = "")]
    name: String,
    /// Guest phone (omitted from the URL when empty)
    #[arg(long, default_value = "")]
    phone: String,
}

#[derive(clap::Args)]
struct PreviewArgs {
    /// Page slug
    #[arg(long, default_value = "home")]
    page: String,
    /// Number of timer ticks to simulate
    #[arg(long, default_value_t = 6)]
    ticks: u32,
    /// Run the first carousel on a real timer instead of simulating
    #[arg(long)]
    live: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest, &cli.source);
        }
        Command::Generate => {
            let manifest_path = cli.temp_dir.join("manifest.json");
            run_generate(&manifest_path, &cli.source, &cli.output)?;
        }
        Command::Build => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            let manifest_path = write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest, &cli.source);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            run_generate(&manifest_path, &cli.source, &cli.output)?;

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest, &cli.source);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Book(args) => {
            let site_config = config::load_config(&cli.source)?;
            let booking = &site_config.booking;
            let defaults = BookingRequest::with_defaults(booking);
            let request = BookingRequest {
                name: args.name,
                phone: args.phone,
                check_in: args.check_in,
                check_out: args.check_out,
                rooms: args.rooms.unwrap_or(defaults.rooms),
                adults: args.adults.unwrap_or(defaults.adults),
                children: args.children.unwrap_or(defaults.children),
            };
            println!("{}", request.availability_url(&booking.availability_path)?);
        }
        Command::Preview(args) => {
            let manifest = scan::scan(&cli.source)?;
            let timelines = preview::preview(&manifest, &args.page, args.ticks)?;
            let title = manifest
                .find_page(&args.page)
                .map(|p| p.title.as_str())
                .unwrap_or(args.page.as_str());

            if let (true, Some(first)) = (args.live, timelines.first()) {
                println!(
                    "==> Live: {} ({} {}, every {})",
                    first.label,
                    first.len,
                    first.unit,
                    output::format_duration(first.interval)
                );
                preview::run_live(first.len, first.interval, args.ticks, |tick| {
                    println!("{}", output::format_live_tick(&tick));
                })?;
            } else {
                output::print_preview_output(title, args.ticks, &timelines);
            }
        }
    }

    Ok(())
}

fn write_manifest(manifest: &scan::Manifest, temp_dir: &Path) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(temp_dir)?;
    let manifest_path = temp_dir.join("manifest.json");
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(&manifest_path, json)?;
    Ok(manifest_path)
}

/// Generate with progress printed from a separate thread as events arrive.
fn run_generate(
    manifest_path: &Path,
    source: &Path,
    output_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            for line in output::format_generate_event(&event) {
                println!("{}", line);
            }
        }
    });
    let result = generate::generate(manifest_path, source, output_dir, Some(tx));
    if printer.join().is_err() {
        eprintln!("progress printer panicked");
    }
    output::print_generate_output(&result?);
    Ok(())
}
