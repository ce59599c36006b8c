//! Static blocks: feature grid, story prose, contact details.

use super::{RenderContext, section_heading};
use crate::types::{ContactBlock, FeatureGrid, Story};
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

pub fn render_feature_grid(grid: &FeatureGrid) -> Markup {
    html! {
        section.feature-grid {
            (section_heading(grid.heading.as_deref()))
            ul.features {
                @for feature in &grid.features {
                    li.feature {
                        @if !feature.icon.is_empty() {
                            span.feature-icon aria-hidden="true" { (feature.icon) }
                        }
                        h3 { (feature.title) }
                        p { (feature.text) }
                    }
                }
            }
        }
    }
}

pub fn render_story(story: &Story, ctx: &RenderContext) -> Markup {
    let parser = Parser::new(&story.body);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);

    html! {
        section.story.has-image[story.image.is_some()] {
            @if let Some(image) = &story.image {
                img.story-image src=(image) alt="" loading=(ctx.loading());
            }
            div.story-body {
                (section_heading(story.heading.as_deref()))
                article.prose {
                    (PreEscaped(body_html))
                }
            }
        }
    }
}

pub fn render_contact(contact: &ContactBlock, ctx: &RenderContext) -> Markup {
    let info = &ctx.site.contact;
    html! {
        section.contact-section {
            (section_heading(contact.heading.as_deref()))
            div.contact-grid {
                address.contact-details {
                    p {
                        a href=(info.map_url) target="_blank" rel="noopener" { (info.address) }
                    }
                    p {
                        a href={ "tel:" (tel_target(&info.phone)) } { (info.phone) }
                    }
                    p {
                        a href={ "mailto:" (info.email) } { (info.email) }
                    }
                }
                @if contact.show_map {
                    @if let Some(embed) = &info.map_embed {
                        iframe.contact-map
                            src=(embed)
                            title={ "Map of " (ctx.site.name) }
                            loading="lazy"
                            referrerpolicy="no-referrer-when-downgrade" {}
                    }
                }
            }
        }
    }
}

/// Phone number with the spacing removed, for `tel:` links.
pub(crate) fn tel_target(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '(' && *c != ')')
        .collect()
}
