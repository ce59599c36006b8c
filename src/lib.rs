//! # Resort Site
//!
//! A static site generator for small hotel and resort marketing sites. Content
//! lives in TOML page files made of sections (hero video, room showcase,
//! testimonials, ...); the generator renders them into plain HTML with a
//! small script that runs every rotating component.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      content/  →  manifest.json    (files → validated structured data)
//! 2. Generate  manifest  →  dist/            (HTML pages, CSS, JS, assets)
//! ```
//!
//! The manifest is human-readable JSON and the only thing the generate stage
//! reads besides the assets directory, so either stage can be run and
//! inspected on its own.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: reads `site.toml`, page files and config, validates, produces the manifest |
//! | [`generate`] | Stage 2: renders pages with Maud, writes fingerprinted bundles, copies assets |
//! | [`components`] | One render function per section kind, plus the page layout |
//! | [`carousel`] | The rotation state machines: [`carousel::Carousel`], [`carousel::Track`], [`carousel::Autoplay`] |
//! | [`ticker`] | Cancellable recurring timer thread |
//! | [`booking`] | Availability query URL built from the hero search form |
//! | [`preview`] | Terminal simulation of a page's carousels |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`types`] | Page and section types serialized into the manifest |
//! | [`naming`] | `NNN-slug` filename convention parser |
//! | [`output`] | CLI output formatting for every command |
//!
//! # Design Decisions
//!
//! ## One Carousel Controller
//!
//! Image slider, room showcase, room cards, stats, testimonials and the
//! feature marquee all rotate through the same small set of state machines.
//! Components render the initial state from a [`carousel::Carousel`] and
//! annotate the markup; `static/carousel.js` runs the identical transitions
//! in the browser. The preview command runs them in the terminal, which is
//! how their timelines are tested.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): malformed markup
//! is a build error, interpolation is escaped by default, and there is no
//! template directory to ship.
//!
//! ## NNN-Prefix Ordering
//!
//! Page files use a numeric prefix (`010-home.toml`) for navigation order.
//! Pages without a prefix are generated but left out of navigation, useful
//! for pages linked from elsewhere (a press kit, seasonal offers).

pub mod booking;
pub mod carousel;
pub mod components;
pub mod config;
pub mod generate;
pub mod naming;
pub mod output;
pub mod preview;
pub mod scan;
pub mod ticker;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
