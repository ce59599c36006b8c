//! Hero video banner with the availability search form.

use super::RenderContext;
use crate::booking::BookingRequest;
use crate::config::BookingConfig;
use crate::types::Hero;
use maud::{Markup, html};

pub fn render(hero: &Hero, ctx: &RenderContext) -> Markup {
    html! {
        section.hero {
            video.hero-video autoplay muted loop playsinline preload="metadata" poster=(hero.poster) {
                source src=(hero.video) type=(video_mime(&hero.video));
            }
            div.hero-overlay {}
            div.hero-content {
                h1.hero-headline { (hero.headline) }
                @if !hero.subline.is_empty() {
                    p.hero-subline { (hero.subline) }
                }
                @if hero.booking_form {
                    (booking_form(&ctx.config.booking))
                }
            }
        }
    }
}

fn video_mime(src: &str) -> &'static str {
    if src.to_ascii_lowercase().ends_with(".webm") {
        "video/webm"
    } else {
        "video/mp4"
    }
}

/// The availability search form.
///
/// Fields are laid out in query order so a plain GET submission (no script)
/// produces the same parameters; `static/booking.js` takes over when loaded
/// and enforces the date check with a blocking alert.
pub fn booking_form(config: &BookingConfig) -> Markup {
    let defaults = BookingRequest::with_defaults(config);
    html! {
        form.booking-form #booking action=(config.availability_path) method="get" data-booking-form="" {
            label.field {
                span { "Check-in" }
                input type="date" name="checkIn" required;
            }
            label.field {
                span { "Check-out" }
                input type="date" name="checkOut" required;
            }
            (count_select("Rooms", "rooms", 1, config.max_rooms, defaults.rooms))
            (count_select("Adults", "adults", 1, config.max_guests, defaults.adults))
            (count_select("Children", "children", 0, config.max_guests, defaults.children))
            label.field {
                span { "Name" }
                input type="text" name="name" autocomplete="name" value=(defaults.name);
            }
            label.field {
                span { "Phone" }
                input type="tel" name="phone" autocomplete="tel" value=(defaults.phone);
            }
            button.booking-submit type="submit" { "Check availability" }
        }
    }
}

fn count_select(label: &str, name: &str, min: u32, max: u32, selected: u32) -> Markup {
    html! {
        label.field.field-count {
            span { (label) }
            select name=(name) {
                @for n in min..=max {
                    option value=(n) selected[n == selected] { (n) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::fixtures;

    fn hero() -> Hero {
        Hero {
            video: "/assets/hero.mp4".to_string(),
            poster: "/assets/hero.jpg".to_string(),
            headline: "Where the tide slows down".to_string(),
            subline: "Twelve rooms above the Atlantic".to_string(),
            booking_form: true,
        }
    }

    #[test]
    fn renders_video_with_poster() {
        let site = fixtures::site();
        let config = fixtures::config();
        let ctx = RenderContext {
            site: &site,
            config: &config,
            eager: true,
        };
        let html = render(&hero(), &ctx).into_string();
        assert!(html.contains(r#"poster="/assets/hero.jpg""#));
        assert!(html.contains(r#"type="video/mp4""#));
        assert!(html.contains("autoplay"));
        assert!(html.contains("Where the tide slows down"));
    }

    #[test]
    fn booking_form_can_be_hidden() {
        let site = fixtures::site();
        let config = fixtures::config();
        let ctx = RenderContext {
            site: &site,
            config: &config,
            eager: true,
        };
        let mut h = hero();
        h.booking_form = false;
        let html = render(&h, &ctx).into_string();
        assert!(!html.contains("booking-form"));
    }

    #[test]
    fn form_targets_availability_route() {
        let html = booking_form(&BookingConfig::default()).into_string();
        assert!(html.contains(r#"action="/availability""#));
        assert!(html.contains(r#"method="get""#));
        assert!(html.contains(r#"name="checkIn" required"#));
        assert!(html.contains(r#"name="checkOut" required"#));
    }

    #[test]
    fn form_fields_in_query_order() {
        let html = booking_form(&BookingConfig::default()).into_string();
        let order: Vec<usize> = [
            "name=\"checkIn\"",
            "name=\"checkOut\"",
            "name=\"rooms\"",
            "name=\"adults\"",
            "name=\"children\"",
            "name=\"name\"",
            "name=\"phone\"",
        ]
        .iter()
        .map(|field| html.find(field).unwrap())
        .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn selects_preselect_defaults() {
        let html = booking_form(&BookingConfig::default()).into_string();
        assert!(html.contains(r#"<option value="2" selected>2</option>"#));
        assert!(html.contains(r#"<option value="0" selected>0</option>"#));
    }

    #[test]
    fn webm_sources_get_webm_type() {
        assert_eq!(video_mime("/a/clip.WEBM"), "video/webm");
        assert_eq!(video_mime("/a/clip.mp4"), "video/mp4");
    }
}
