//! Feature banner: an endless strip of short selling points.
//!
//! The item set is rendered twice back-to-back on one track. The browser
//! runtime moves the track a few pixels per tick and, once the offset passes
//! the width of the first copy, pulls it back by exactly that width with the
//! transition switched off. Both copies look the same, so the reset is
//! invisible.

use super::RenderContext;
use crate::carousel::{Carousel, CarouselError};
use crate::types::FeatureBanner;
use maud::{Markup, html};

pub fn render(banner: &FeatureBanner, ctx: &RenderContext) -> Result<Markup, CarouselError> {
    let carousel = Carousel::new(banner.items.iter().collect())?;
    let marquee = &ctx.config.carousels.marquee;

    Ok(html! {
        section.feature-banner {
            div.marquee
                data-carousel="track"
                data-step=(marquee.step_px)
                data-interval=(marquee.interval_ms)
                data-reset-delay=(marquee.reset_delay_ms)
                data-length=(carousel.len()) {
                div.track {
                    @for copy in 0..2 {
                        ul.marquee-set aria-hidden=[(copy == 1).then_some("true")] {
                            @for item in carousel.items() {
                                li.marquee-item { (item) }
                            }
                        }
                    }
                }
            }
        }
    })
}
