//! Room showcase and room cards.
//!
//! The showcase presents one room at a time and rotates through them. The
//! cards grid shows every room at once, with a small image slider nested in
//! each card; every nested slider runs its own independent carousel.

use super::{RenderContext, carousel_arrows, carousel_dots, section_heading};
use crate::carousel::{Carousel, CarouselError};
use crate::types::{Room, RoomShowcase, RoomsCards};
use maud::{Markup, html};

pub fn render_showcase(
    showcase: &RoomShowcase,
    ctx: &RenderContext,
) -> Result<Markup, CarouselError> {
    let carousel = Carousel::new(showcase.rooms.iter().collect::<Vec<_>>())?;
    let loading = ctx.loading();

    Ok(html! {
        section.room-showcase {
            (section_heading(showcase.heading.as_deref()))
            div.carousel
                data-carousel="discrete"
                data-interval=(ctx.config.carousels.room_showcase.interval_ms)
                data-reset-on-manual=(ctx.reset_on_manual())
                data-length=(carousel.len()) {
                @for (idx, room) in carousel.items().iter().enumerate() {
                    @let active = idx == carousel.current();
                    article.carousel-item.showcase-room.is-active[active] data-index=(idx) aria-hidden=[(!active).then_some("true")] {
                        @if let Some(cover) = room.images.first() {
                            img.showcase-image src=(cover) alt=(room.name) loading=(loading);
                        }
                        div.showcase-body {
                            h3 { (room.name) }
                            p { (room.description) }
                            @if let Some(price) = &room.price {
                                p.room-price { (price) }
                            }
                            (amenities(room))
                        }
                    }
                }
                @if carousel.len() > 1 {
                    (carousel_arrows("room"))
                    (carousel_dots(&carousel, "room"))
                }
            }
        }
    })
}

pub fn render_cards(cards: &RoomsCards, ctx: &RenderContext) -> Result<Markup, CarouselError> {
    let rendered = cards
        .rooms
        .iter()
        .map(|room| room_card(room, ctx))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(html! {
        section.rooms-cards {
            (section_heading(cards.heading.as_deref()))
            div.room-grid {
                @for card in rendered {
                    (card)
                }
            }
        }
    })
}

fn room_card(room: &Room, ctx: &RenderContext) -> Result<Markup, CarouselError> {
    let images = Carousel::new(room.images.iter().collect::<Vec<_>>())?;
    let label = format!("{} photo", room.name);

    Ok(html! {
        article.room-card {
            div.carousel.room-card-slider
                data-carousel="discrete"
                data-interval=(ctx.config.carousels.room_cards.interval_ms)
                data-reset-on-manual=(ctx.reset_on_manual())
                data-length=(images.len()) {
                @for (idx, src) in images.items().iter().enumerate() {
                    img.carousel-item.is-active[idx == images.current()]
                        src=(src)
                        alt={ (room.name) " " (idx + 1) }
                        data-index=(idx)
                        loading=(ctx.loading());
                }
                @if images.len() > 1 {
                    (carousel_arrows(&label))
                    (carousel_dots(&images, &label))
                }
            }
            div.room-card-body {
                h3 { (room.name) }
                p { (room.description) }
                @if let Some(price) = &room.price {
                    p.room-price { (price) }
                }
                (amenities(room))
            }
        }
    })
}

fn amenities(room: &Room) -> Markup {
    html! {
        @if !room.amenities.is_empty() {
            ul.amenities {
                @for a in &room.amenities {
                    li { (a) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::fixtures;

    fn room(name: &str, images: usize) -> Room {
        Room {
            name: name.to_string(),
            description: format!("{name} description"),
            price: Some("from €180 / night".to_string()),
            images: (1..=images)
                .map(|i| format!("/assets/{}-{i}.jpg", name.to_lowercase()))
                .collect(),
            amenities: vec!["Sea view".to_string(), "Balcony".to_string()],
        }
    }

    fn with_ctx<F: FnOnce(&RenderContext) -> String>(f: F) -> String {
        let site = fixtures::site();
        let config = fixtures::config();
        let ctx = RenderContext {
            site: &site,
            config: &config,
            eager: false,
        };
        f(&ctx)
    }

    #[test]
    fn showcase_activates_first_room() {
        let showcase = RoomShowcase {
            heading: Some("Our rooms".to_string()),
            rooms: vec![room("Dune", 1), room("Tide", 2), room("Reef", 1)],
        };
        let html = with_ctx(|ctx| render_showcase(&showcase, ctx).unwrap().into_string());
        assert_eq!(html.matches("showcase-room is-active").count(), 1);
        assert!(html.contains(r#"data-interval="4000""#));
        assert!(html.contains("Our rooms"));
        // Only the first image of each room is shown
        assert!(!html.contains("/assets/tide-2.jpg"));
    }

    #[test]
    fn hidden_rooms_marked_aria_hidden() {
        let showcase = RoomShowcase {
            heading: None,
            rooms: vec![room("Dune", 1), room("Tide", 1)],
        };
        let html = with_ctx(|ctx| render_showcase(&showcase, ctx).unwrap().into_string());
        assert_eq!(html.matches(r#"aria-hidden="true""#).count(), 1);
    }

    #[test]
    fn each_card_has_its_own_slider() {
        let cards = RoomsCards {
            heading: None,
            rooms: vec![room("Dune", 3), room("Tide", 2)],
        };
        let html = with_ctx(|ctx| render_cards(&cards, ctx).unwrap().into_string());
        assert_eq!(html.matches("room-card-slider").count(), 2);
        assert_eq!(html.matches(r#"data-interval="3000""#).count(), 2);
        assert_eq!(html.matches("carousel-item is-active").count(), 2);
        assert!(html.contains("Show Dune photo 3"));
    }

    #[test]
    fn single_image_card_has_no_controls() {
        let cards = RoomsCards {
            heading: None,
            rooms: vec![room("Dune", 1)],
        };
        let html = with_ctx(|ctx| render_cards(&cards, ctx).unwrap().into_string());
        assert!(!html.contains("carousel-dots"));
    }

    #[test]
    fn card_without_images_rejected() {
        let cards = RoomsCards {
            heading: None,
            rooms: vec![room("Dune", 0)],
        };
        let site = fixtures::site();
        let config = fixtures::config();
        let ctx = RenderContext {
            site: &site,
            config: &config,
            eager: false,
        };
        assert_eq!(
            render_cards(&cards, &ctx).unwrap_err(),
            CarouselError::Empty
        );
    }

    #[test]
    fn amenities_listed() {
        let cards = RoomsCards {
            heading: None,
            rooms: vec![room("Dune", 1)],
        };
        let html = with_ctx(|ctx| render_cards(&cards, ctx).unwrap().into_string());
        assert!(html.contains("<li>Sea view</li>"));
    }
}
