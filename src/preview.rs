//! Carousel timelines in the terminal.
//!
//! Runs every rotating section of a page through the same [`Carousel`],
//! [`Track`] and [`Autoplay`] state machines the site is built from, and
//! records which item is in view after each timer tick:
//!
//! ```text
//! Testimonials (4 items, every 5s)
//!     0 → 1 → 2 → 3 → 0 → 1
//! Image slider (3 slides, every 5s)
//!     0 → 1 → 2 → 0* → 1 → 2
//! ```
//!
//! `*` marks a seamless wrap of a track carousel. The simulation is
//! deterministic; [`run_live`] drives one carousel from a real [`Ticker`]
//! instead.

use crate::carousel::{Autoplay, Carousel, CarouselError, ManualNavigation, Track};
use crate::config::CarouselsConfig;
use crate::scan::Manifest;
use crate::ticker::Ticker;
use crate::types::{Page, Section};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;

/// Upper bound on simulated ticks; every tick keeps one index per timeline.
pub const MAX_TICKS: u32 = 10_000;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("No page with slug '{0}'")]
    UnknownPage(String),
    #[error("Cannot preview {ticks} ticks (at most {max})")]
    TooManyTicks { ticks: u32, max: u32 },
    #[error("Page '{0}' has no rotating sections")]
    NothingToPreview(String),
    #[error(transparent)]
    Carousel(#[from] CarouselError),
}

/// The items a rotating section showed over a run of timer ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    /// Section label plus context, e.g. `Room cards: Dune Suite`.
    pub label: String,
    pub unit: &'static str,
    pub len: usize,
    pub interval: Duration,
    /// Index in view at start and after each tick.
    pub indices: Vec<usize>,
    /// Ticks (1-based) after which a track wrapped.
    pub wraps: Vec<usize>,
}

/// Timelines for one page, looked up by slug.
pub fn preview(manifest: &Manifest, slug: &str, ticks: u32) -> Result<Vec<Timeline>, PreviewError> {
    if ticks > MAX_TICKS {
        return Err(PreviewError::TooManyTicks {
            ticks,
            max: MAX_TICKS,
        });
    }
    let page = manifest
        .find_page(slug)
        .ok_or_else(|| PreviewError::UnknownPage(slug.to_string()))?;
    let timelines = page_timelines(page, &manifest.config.carousels, ticks)?;
    if timelines.is_empty() {
        return Err(PreviewError::NothingToPreview(slug.to_string()));
    }
    Ok(timelines)
}

/// Simulate every rotating section of a page for `ticks` timer ticks.
///
/// The marquee is continuous rather than indexed and is left out.
pub fn page_timelines(
    page: &Page,
    config: &CarouselsConfig,
    ticks: u32,
) -> Result<Vec<Timeline>, CarouselError> {
    let mut timelines = Vec::new();
    for section in &page.sections {
        match section {
            Section::ImageSlider(s) => timelines.push(slider_timeline(
                section.label(),
                s.slides.len(),
                config.image_slider.interval(),
                ticks,
            )?),
            Section::RoomShowcase(s) => timelines.push(discrete_timeline(
                section.label().to_string(),
                "rooms",
                s.rooms.len(),
                config.room_showcase.interval(),
                ticks,
            )?),
            Section::RoomsCards(s) => {
                for room in &s.rooms {
                    timelines.push(discrete_timeline(
                        format!("{}: {}", section.label(), room.name),
                        "photos",
                        room.images.len(),
                        config.room_cards.interval(),
                        ticks,
                    )?);
                }
            }
            Section::Stats(s) => timelines.push(discrete_timeline(
                section.label().to_string(),
                "stats",
                s.stats.len(),
                config.stats.interval(),
                ticks,
            )?),
            Section::Testimonials(s) => timelines.push(discrete_timeline(
                section.label().to_string(),
                "items",
                s.testimonials.len(),
                config.testimonials.interval(),
                ticks,
            )?),
            _ => {}
        }
    }
    Ok(timelines)
}

/// Index carousel driven by its autoplay clock, one interval per tick.
pub fn discrete_timeline(
    label: String,
    unit: &'static str,
    len: usize,
    interval: Duration,
    ticks: u32,
) -> Result<Timeline, CarouselError> {
    let mut carousel = Carousel::new((0..len).collect())?;
    let mut autoplay = Autoplay::new(interval, ManualNavigation::default())?;

    let mut indices = vec![carousel.current()];
    for _ in 0..ticks {
        for _ in 0..autoplay.elapse(interval) {
            carousel.advance();
        }
        indices.push(carousel.current());
    }

    Ok(Timeline {
        label,
        unit,
        len,
        interval,
        indices,
        wraps: Vec::new(),
    })
}

/// Slide track: advance, then wrap and settle once the move lands on the
/// copy of the first slide.
fn slider_timeline(
    label: &str,
    len: usize,
    interval: Duration,
    ticks: u32,
) -> Result<Timeline, CarouselError> {
    const SLIDE_WIDTH: f64 = 1.0;
    let mut track = Track::slides(len, SLIDE_WIDTH)?;
    let mut autoplay = Autoplay::new(interval, ManualNavigation::default())?;

    let mut indices = vec![track.slide_index(SLIDE_WIDTH, len)];
    let mut wraps = Vec::new();
    for tick in 1..=ticks as usize {
        for _ in 0..autoplay.elapse(interval) {
            if track.advance().wrap_pending {
                track.wrap();
                track.settle();
                wraps.push(tick);
            }
        }
        indices.push(track.slide_index(SLIDE_WIDTH, len));
    }

    Ok(Timeline {
        label: label.to_string(),
        unit: "slides",
        len,
        interval,
        indices,
        wraps,
    })
}

/// One tick observed by [`run_live`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveTick {
    pub tick: u32,
    pub index: usize,
}

/// Drive a carousel of `len` items from a real [`Ticker`] for `ticks` ticks.
///
/// The carousel is shared between the ticker thread and the caller; indices
/// are reported back over a channel and handed to `on_tick` in order. The
/// ticker is cancelled before returning, so nothing advances afterwards.
pub fn run_live<F>(
    len: usize,
    interval: Duration,
    ticks: u32,
    mut on_tick: F,
) -> Result<Vec<usize>, CarouselError>
where
    F: FnMut(LiveTick),
{
    if interval.is_zero() {
        return Err(CarouselError::ZeroInterval);
    }
    let carousel = Arc::new(Mutex::new(Carousel::new((0..len).collect::<Vec<_>>())?));
    let (tx, rx) = mpsc::channel();

    let shared = Arc::clone(&carousel);
    let ticker = Ticker::start(interval, move || {
        let index = shared
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .advance();
        // Receiver gone means the run is over
        let _ = tx.send(index);
    });

    let mut seen = Vec::new();
    for (n, index) in rx.iter().take(ticks as usize).enumerate() {
        on_tick(LiveTick {
            tick: n as u32 + 1,
            index,
        });
        seen.push(index);
    }
    ticker.cancel();
    Ok(seen)
}
