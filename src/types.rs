//! Shared content types.
//!
//! These are deserialized from `site.toml` and the page files during scan,
//! written to `manifest.json`, and read back by generate, so both stages
//! agree on one shape.

use serde::{Deserialize, Serialize};

/// Hotel identity and contact details from `site.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteInfo {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub contact: Contact,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub social: Vec<SocialLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    pub address: String,
    pub phone: String,
    pub email: String,
    /// External map link opened by the address.
    pub map_url: String,
    /// Optional embeddable map URL shown in an iframe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_embed: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// A page assembled from sections, one per `NNN-slug.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Document title and heading.
    pub title: String,
    /// Display label in nav (slug with dashes → spaces).
    pub link_title: String,
    /// Filename stem with the number prefix stripped.
    pub slug: String,
    /// Whether this page appears in navigation (has number prefix).
    pub in_nav: bool,
    /// Sort key from number prefix (for ordering).
    pub sort_key: u32,
    /// Page file name, relative to the content root.
    pub source: String,
    pub sections: Vec<Section>,
}

impl Page {
    /// Output file for this page: the `home` page becomes the site index.
    pub fn output_file(&self) -> String {
        if self.slug == "home" {
            "index.html".to_string()
        } else {
            format!("{}.html", self.slug)
        }
    }

    /// Absolute link to this page.
    pub fn href(&self) -> String {
        if self.slug == "home" {
            "/".to_string()
        } else {
            format!("/{}.html", self.slug)
        }
    }
}

/// Navigation entry (numbered pages only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub title: String,
    pub href: String,
    pub slug: String,
}

/// One block of a page, tagged by `kind` in the page file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Hero(Hero),
    FeatureBanner(FeatureBanner),
    ImageSlider(ImageSlider),
    RoomShowcase(RoomShowcase),
    RoomsCards(RoomsCards),
    Stats(Stats),
    Testimonials(Testimonials),
    FeatureGrid(FeatureGrid),
    Story(Story),
    Contact(ContactBlock),
}

impl Section {
    /// Human-readable component name, used in CLI output and errors.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Hero(_) => "Hero",
            Section::FeatureBanner(_) => "Feature banner",
            Section::ImageSlider(_) => "Image slider",
            Section::RoomShowcase(_) => "Room showcase",
            Section::RoomsCards(_) => "Rooms cards",
            Section::Stats(_) => "Stats",
            Section::Testimonials(_) => "Testimonials",
            Section::FeatureGrid(_) => "Feature grid",
            Section::Story(_) => "Story",
            Section::Contact(_) => "Contact",
        }
    }

    /// Number of rotating items, for sections that rotate.
    pub fn carousel_len(&self) -> Option<usize> {
        match self {
            Section::FeatureBanner(s) => Some(s.items.len()),
            Section::ImageSlider(s) => Some(s.slides.len()),
            Section::RoomShowcase(s) => Some(s.rooms.len()),
            Section::RoomsCards(s) => Some(s.rooms.len()),
            Section::Stats(s) => Some(s.stats.len()),
            Section::Testimonials(s) => Some(s.testimonials.len()),
            _ => None,
        }
    }
}

/// Full-bleed video banner with the booking search form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hero {
    pub video: String,
    pub poster: String,
    pub headline: String,
    #[serde(default)]
    pub subline: String,
    #[serde(default = "default_true")]
    pub booking_form: bool,
}

fn default_true() -> bool {
    true
}

/// Endless strip of short selling points.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureBanner {
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Slide {
    pub image: String,
    #[serde(default)]
    pub caption: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageSlider {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Room {
    pub name: String,
    pub description: String,
    /// Display price, e.g. `"from $240 / night"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoomShowcase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub rooms: Vec<Room>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoomsCards {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub rooms: Vec<Room>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stat {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Testimonial {
    pub text: String,
    pub author: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Testimonials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Feature {
    /// Short glyph or emoji shown above the title.
    #[serde(default)]
    pub icon: String,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureGrid {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub features: Vec<Feature>,
}

/// Markdown prose. `file` is resolved into `body` during scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Story {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Contact and location block; data comes from `site.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default = "default_true")]
    pub show_map: bool,
}
