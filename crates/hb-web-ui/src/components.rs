//! Reusable UI Components
//!
//! Site chrome (header, overlay menu, footer) and small building blocks.

use chrono::Datelike;
use hb_core::chrome::{self, CallToAction, DONATE, DONATE_NOW};
use hb_core::content::Icon;
use hb_core::{FallbackImage, ImageSource, Page, SiteContent};
use leptos::*;

use crate::state::SiteNav;

/// Application header with navigation
#[component]
pub fn Navbar(nav: SiteNav, #[prop(into)] brand: String) -> impl IntoView {
    let navigate = nav.navigate;
    let toggle_menu = nav.toggle_menu;

    view! {
        <header class="site-header">
            <div class="header-bar">
                <div class="brand" on:click=move |_| navigate.call(Page::Home)>
                    <IconGlyph icon=Icon::Heart/>
                    <span class="brand-name">{brand}</span>
                </div>
                <nav class="header-nav">
                    <NavButtons nav=nav/>
                </nav>
                <div class="header-cta">
                    <CtaButton cta=DONATE on_navigate=navigate/>
                </div>
                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| toggle_menu.call(())
                >
                    {move || if nav.menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || nav.menu_open.get()>
                <div class="mobile-menu">
                    <NavButtons nav=nav/>
                    <CtaButton cta=DONATE_NOW on_navigate=navigate/>
                </div>
            </Show>
        </header>
    }
}

/// The five page links; the active one gets the `selected` class
#[component]
fn NavButtons(nav: SiteNav) -> impl IntoView {
    move || {
        chrome::primary_links(nav.page.get())
            .into_iter()
            .map(|link| {
                view! {
                    <button
                        class="nav-link"
                        class:selected=link.selected
                        on:click=move |_| nav.navigate.call(link.target)
                    >
                        {link.label}
                    </button>
                }
            })
            .collect_view()
    }
}

#[component]
pub fn CtaButton(cta: CallToAction, on_navigate: Callback<Page>) -> impl IntoView {
    view! {
        <button class="cta-button" on:click=move |_| on_navigate.call(cta.target)>
            {cta.label}
        </button>
    }
}

/// Site footer with quick links
#[component]
pub fn Footer(on_navigate: Callback<Page>) -> impl IntoView {
    let content = expect_context::<StoredValue<SiteContent>>();
    let (organization, blurb, info) = content.with_value(|c| {
        (
            c.organization.name.clone(),
            c.organization.footer_blurb.clone(),
            c.contact.clone(),
        )
    });
    let copyright = chrome::copyright_line(&organization, chrono::Local::now().year());

    view! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-about">
                    <div class="brand">
                        <IconGlyph icon=Icon::Heart/>
                        <span class="brand-name">{organization}</span>
                    </div>
                    <p>{blurb}</p>
                </div>
                <div class="footer-links">
                    <h3>"Quick Links"</h3>
                    <ul>
                        {chrome::footer_links().iter().map(|link| {
                            let target = link.target;
                            view! {
                                <li>
                                    <button class="footer-link" on:click=move |_| on_navigate.call(target)>
                                        {link.label}
                                    </button>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </div>
                <div class="footer-contact">
                    <h3>"Contact"</h3>
                    <ul>
                        <li>{info.short_address}</li>
                        <li>{info.email}</li>
                        <li>{info.phone}</li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{copyright}</p>
            </div>
        </footer>
    }
}

/// `<img>` that swaps to its fallback URL on the first load error
#[component]
pub fn FallbackImg(
    source: ImageSource,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let image = create_rw_signal(FallbackImage::new(source));

    view! {
        <img
            src=move || image.with(|i| i.current_src().to_string())
            alt=alt
            class=class
            on:error=move |_| image.update(|i| {
                i.on_error();
            })
        />
    }
}

#[component]
pub fn IconGlyph(icon: Icon) -> impl IntoView {
    let (name, glyph) = match icon {
        Icon::Heart => ("heart", "♥"),
        Icon::Users => ("users", "👥"),
        Icon::Briefcase => ("briefcase", "💼"),
    };

    view! {
        <span class=format!("icon icon-{name}") aria-hidden="true">{glyph}</span>
    }
}

/// Error display
#[component]
pub fn ErrorDisplay(message: String) -> impl IntoView {
    view! {
        <div class="error-display">
            <span class="error-icon">"⚠️"</span>
            <span class="error-message">{message}</span>
        </div>
    }
}
