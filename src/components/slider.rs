//! Full-width image slider.
//!
//! Slides sit side by side on a track, followed by a copy of the first
//! slide. Advancing past the last real slide animates onto the copy; the
//! runtime then snaps the track back to the real first slide with the
//! transition disabled for `reset_delay_ms`, so the loop never jumps
//! visibly and the first dot lights up on both sides of the reset.

use super::{RenderContext, carousel_arrows, carousel_dots, section_heading};
use crate::carousel::{Carousel, CarouselError};
use crate::types::{ImageSlider, Slide};
use maud::{Markup, html};

pub fn render(slider: &ImageSlider, ctx: &RenderContext) -> Result<Markup, CarouselError> {
    let carousel = Carousel::new(slider.slides.iter().collect::<Vec<_>>())?;
    let timing = &ctx.config.carousels.image_slider;
    let loading = ctx.loading();

    Ok(html! {
        section.image-slider-section {
            (section_heading(slider.heading.as_deref()))
            div.carousel.image-slider
                data-carousel="track"
                data-step="slide"
                data-interval=(timing.interval_ms)
                data-reset-delay=(timing.reset_delay_ms)
                data-reset-on-manual=(ctx.reset_on_manual())
                data-length=(carousel.len()) {
                div.slider-viewport {
                    div.track {
                        @for (idx, slide) in carousel.items().iter().enumerate() {
                            (slide_figure(slide, idx == carousel.current(), loading, false))
                        }
                        // Copy of the first slide for the seamless wrap
                        (slide_figure(carousel.items()[0], false, loading, true))
                    }
                }
                @if carousel.len() > 1 {
                    (carousel_arrows("slide"))
                    (carousel_dots(&carousel, "slide"))
                }
            }
        }
    })
}

fn slide_figure(slide: &Slide, active: bool, loading: &str, clone: bool) -> Markup {
    html! {
        figure.slide.is-active[active].is-clone[clone] aria-hidden=[clone.then_some("true")] {
            img src=(slide.image) alt=(slide.caption) loading=(loading);
            @if !slide.caption.is_empty() {
                figcaption { (slide.caption) }
            }
        }
    }
}
