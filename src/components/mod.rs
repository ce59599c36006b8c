//! Page components.
//!
//! Each section kind from a page file renders through one function here.
//! Components are pure: content and config in, [`Markup`] out. Rotating
//! components build a [`Carousel`] over their items first, render the state
//! it starts in (first item active, first dot lit), and annotate the markup
//! with `data-*` attributes that `static/carousel.js` reads to run the same
//! state machine in the browser:
//!
//! | Attribute | Meaning |
//! |-----------|---------|
//! | `data-carousel` | `discrete` (index) or `track` (pixel offset) |
//! | `data-interval` | Milliseconds between automatic advances |
//! | `data-reset-on-manual` | Whether arrow/dot clicks restart the countdown |
//! | `data-reset-delay` | Track only: ms the transition stays off after a wrap |
//! | `data-step` | Track only: `slide` or a pixel step |

pub mod blocks;
pub mod hero;
pub mod layout;
pub mod marquee;
pub mod rooms;
pub mod slider;
pub mod stats;
pub mod testimonials;

use crate::carousel::{Carousel, CarouselError};
use crate::config::SiteConfig;
use crate::types::{Section, SiteInfo};
use maud::{Markup, html};

/// Everything a section needs besides its own content.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub site: &'a SiteInfo,
    pub config: &'a SiteConfig,
    /// Above the fold: images load eagerly instead of lazily.
    pub eager: bool,
}

impl RenderContext<'_> {
    pub fn loading(&self) -> &'static str {
        if self.eager { "eager" } else { "lazy" }
    }

    fn reset_on_manual(&self) -> &'static str {
        if self.config.carousels.manual_resets_timer {
            "true"
        } else {
            "false"
        }
    }
}

/// Render one page section.
pub fn render_section(section: &Section, ctx: &RenderContext) -> Result<Markup, CarouselError> {
    match section {
        Section::Hero(hero) => Ok(hero::render(hero, ctx)),
        Section::FeatureBanner(banner) => marquee::render(banner, ctx),
        Section::ImageSlider(slider) => slider::render(slider, ctx),
        Section::RoomShowcase(showcase) => rooms::render_showcase(showcase, ctx),
        Section::RoomsCards(cards) => rooms::render_cards(cards, ctx),
        Section::Stats(stats) => stats::render(stats, ctx),
        Section::Testimonials(t) => testimonials::render(t, ctx),
        Section::FeatureGrid(grid) => Ok(blocks::render_feature_grid(grid)),
        Section::Story(story) => Ok(blocks::render_story(story, ctx)),
        Section::Contact(contact) => Ok(blocks::render_contact(contact, ctx)),
    }
}

fn section_heading(heading: Option<&str>) -> Markup {
    html! {
        @if let Some(h) = heading {
            h2.section-heading { (h) }
        }
    }
}

/// Previous/next arrows for a carousel.
fn carousel_arrows(label: &str) -> Markup {
    html! {
        button.carousel-arrow.carousel-prev type="button" data-carousel-prev="" aria-label={ "Previous " (label) } { "‹" }
        button.carousel-arrow.carousel-next type="button" data-carousel-next="" aria-label={ "Next " (label) } { "›" }
    }
}

/// Indicator dots, lit from the carousel's current index.
fn carousel_dots<T>(carousel: &Carousel<T>, label: &str) -> Markup {
    html! {
        div.carousel-dots role="group" aria-label={ (label) " navigation" } {
            @for (idx, active) in carousel.indicators().into_iter().enumerate() {
                button.carousel-dot.is-active[active]
                    type="button"
                    data-carousel-dot=(idx)
                    aria-label={ "Show " (label) " " (idx + 1) }
                    aria-current=[active.then_some("true")] {}
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::config::SiteConfig;
    use crate::types::{Contact, SiteInfo, SocialLink};

    pub fn site() -> SiteInfo {
        SiteInfo {
            name: "Casa Marea".to_string(),
            tagline: "Slow days by the sea".to_string(),
            logo: None,
            contact: Contact {
                address: "Rua do Mar 12, Sagres".to_string(),
                phone: "+351 282 000 000".to_string(),
                email: "stay@casamarea.example".to_string(),
                map_url: "https://maps.example.com/?q=Casa+Marea".to_string(),
                map_embed: Some("https://maps.example.com/embed?q=Casa+Marea".to_string()),
            },
            social: vec![SocialLink {
                label: "Instagram".to_string(),
                url: "https://instagram.example/casamarea".to_string(),
            }],
            footer_note: None,
        }
    }

    pub fn config() -> SiteConfig {
        SiteConfig::default()
    }
}
