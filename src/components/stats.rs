//! Highlight numbers ("12 rooms", "4.9 guest rating").
//!
//! All figures stay visible; the carousel moves a highlight across them.

use super::{RenderContext, carousel_dots, section_heading};
use crate::carousel::{Carousel, CarouselError};
use crate::types::Stats;
use maud::{Markup, html};

pub fn render(stats: &Stats, ctx: &RenderContext) -> Result<Markup, CarouselError> {
    let carousel = Carousel::new(stats.stats.iter().collect::<Vec<_>>())?;

    Ok(html! {
        section.stats-section {
            (section_heading(stats.heading.as_deref()))
            div.carousel.stats
                data-carousel="discrete"
                data-interval=(ctx.config.carousels.stats.interval_ms)
                data-reset-on-manual=(ctx.reset_on_manual())
                data-length=(carousel.len()) {
                ul.stat-list {
                    @for (idx, stat) in carousel.items().iter().enumerate() {
                        li.carousel-item.stat.is-active[idx == carousel.current()] data-index=(idx) {
                            @if let Some(image) = &stat.image {
                                img.stat-image src=(image) alt="" loading=(ctx.loading());
                            }
                            span.stat-value { (stat.value) }
                            span.stat-label { (stat.label) }
                        }
                    }
                }
                @if carousel.len() > 1 {
                    (carousel_dots(&carousel, "highlight"))
                }
            }
        }
    })
}
