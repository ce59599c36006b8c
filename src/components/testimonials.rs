//! Guest testimonials, one quote at a time.

use super::{RenderContext, carousel_arrows, carousel_dots, section_heading};
use crate::carousel::{Carousel, CarouselError};
use crate::types::Testimonials;
use maud::{Markup, html};

const MAX_STARS: u8 = 5;

pub fn render(section: &Testimonials, ctx: &RenderContext) -> Result<Markup, CarouselError> {
    let carousel = Carousel::new(section.testimonials.iter().collect::<Vec<_>>())?;

    Ok(html! {
        section.testimonials-section {
            (section_heading(section.heading.as_deref()))
            div.carousel.testimonials
                data-carousel="discrete"
                data-interval=(ctx.config.carousels.testimonials.interval_ms)
                data-reset-on-manual=(ctx.reset_on_manual())
                data-direction=(carousel.direction().as_str())
                data-length=(carousel.len()) {
                @for (idx, t) in carousel.items().iter().enumerate() {
                    @let active = idx == carousel.current();
                    blockquote.carousel-item.testimonial.is-active[active] data-index=(idx) aria-hidden=[(!active).then_some("true")] {
                        (stars(t.rating))
                        p.testimonial-text { (t.text) }
                        footer.testimonial-author {
                            cite { (t.author) }
                            @if let Some(origin) = &t.origin {
                                span.testimonial-origin { (origin) }
                            }
                        }
                    }
                }
                @if carousel.len() > 1 {
                    (carousel_arrows("testimonial"))
                    (carousel_dots(&carousel, "testimonial"))
                }
            }
        }
    })
}

fn stars(rating: u8) -> Markup {
    let rating = rating.min(MAX_STARS);
    html! {
        div.rating role="img" aria-label={ (rating) " out of " (MAX_STARS) " stars" } {
            @for n in 0..MAX_STARS {
                span.star.is-filled[n < rating] aria-hidden="true" { "★" }
            }
        }
    }
}
