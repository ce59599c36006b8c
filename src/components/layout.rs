//! Document shell shared by every page: head, header with navigation, footer.

use super::blocks::tel_target;
use crate::types::{NavItem, SiteInfo};
use maud::{DOCTYPE, Markup, html};

/// Fingerprinted URLs of the generated stylesheet and scripts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetLinks {
    pub css: String,
    pub carousel_js: String,
    pub booking_js: String,
}

/// Renders the base HTML document structure.
pub fn base_document(
    title: &str,
    description: &str,
    assets: &AssetLinks,
    body_class: Option<&str>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @if !description.is_empty() {
                    meta name="description" content=(description);
                }
                title { (title) }
                link rel="stylesheet" href=(assets.css);
                script src=(assets.carousel_js) defer {}
                script src=(assets.booking_js) defer {}
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

/// Site header: brand on the left, navigation and booking call to action on the right.
pub fn site_header(site: &SiteInfo, nav: Markup) -> Markup {
    html! {
        header.site-header {
            a.brand href="/" {
                @if let Some(logo) = &site.logo {
                    img.brand-logo src=(logo) alt="";
                }
                span.brand-name { (site.name) }
            }
            nav.site-nav {
                (nav)
            }
            a.header-cta href="/#booking" { "Book now" }
        }
    }
}

/// Renders the navigation menu (hamburger style, slides from right).
pub fn render_nav(items: &[NavItem], current_slug: &str) -> Markup {
    html! {
        input.nav-toggle type="checkbox" id="nav-toggle";
        label.nav-hamburger for="nav-toggle" aria-label="Menu" {
            span.hamburger-line {}
            span.hamburger-line {}
            span.hamburger-line {}
        }
        div.nav-panel {
            label.nav-close for="nav-toggle" { "×" }
            ul {
                @for item in items {
                    @let is_current = item.slug == current_slug;
                    li class=[is_current.then_some("current")] {
                        a href=(item.href) aria-current=[is_current.then_some("page")] { (item.title) }
                    }
                }
            }
        }
    }
}

pub fn site_footer(site: &SiteInfo) -> Markup {
    let contact = &site.contact;
    html! {
        footer.site-footer {
            div.footer-brand {
                span.brand-name { (site.name) }
                @if !site.tagline.is_empty() {
                    p.tagline { (site.tagline) }
                }
            }
            address.footer-contact {
                a href=(contact.map_url) target="_blank" rel="noopener" { (contact.address) }
                a href={ "tel:" (tel_target(&contact.phone)) } { (contact.phone) }
                a href={ "mailto:" (contact.email) } { (contact.email) }
            }
            @if !site.social.is_empty() {
                ul.social-links {
                    @for link in &site.social {
                        li {
                            a href=(link.url) target="_blank" rel="noopener" { (link.label) }
                        }
                    }
                }
            }
            @if let Some(note) = &site.footer_note {
                p.footer-note { (note) }
            }
        }
    }
}
