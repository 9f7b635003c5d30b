//! Server-rendered views.
//!
//! DESIGN
//! ======
//! Pages are Leptos components rendered to strings on the server; there is
//! no hydration step. Every view reads static data (or one lookup result),
//! and Leptos escapes text and attribute values. Optional actions are
//! `Option<Action>` children and render as nothing when absent, so no empty
//! button slot ever reaches the page.

pub mod detail;
pub mod landing;

use leptos::prelude::*;

pub use detail::{render_detail, render_not_found};
pub use landing::render_landing;

// =============================================================================
// ACTIONS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStyle {
    Primary,
    Outline,
    Ghost,
}

impl ActionStyle {
    fn class(self) -> &'static str {
        match self {
            Self::Primary => "button",
            Self::Outline => "button button--outline",
            Self::Ghost => "button button--ghost",
        }
    }
}

/// A link rendered as a button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub label: &'static str,
    pub href: String,
    pub style: ActionStyle,
}

impl Action {
    #[must_use]
    pub fn new(label: &'static str, href: impl Into<String>, style: ActionStyle) -> Self {
        Self { label, href: href.into(), style }
    }
}

fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

/// Button-styled link. External targets open in a new tab.
#[component]
pub fn ActionLink(action: Action) -> impl IntoView {
    let external = is_external(&action.href);
    view! {
        <a
            class=action.style.class()
            href=action.href
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
        >
            {action.label}
        </a>
    }
}

// =============================================================================
// SHARED PIECES
// =============================================================================

#[component]
pub fn Badges(items: &'static [&'static str], badge_class: &'static str) -> impl IntoView {
    items
        .iter()
        .map(move |item| view! { <span class=badge_class>{*item}</span> })
        .collect_view()
}

#[component]
pub fn BulletList(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="bullets">
            {items
                .iter()
                .map(|item| {
                    view! {
                        <li>
                            <span class="bullet" aria-hidden="true"></span>
                            <span>{*item}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

/// Full HTML document around a page body.
#[component]
pub fn Document(title: String, children: Children) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <link rel="icon" href="/favicons/web-favicon.png" />
                <link rel="stylesheet" href="/styles.css" />
            </head>
            <body>{children()}</body>
        </html>
    }
}

// =============================================================================
// RENDERING
// =============================================================================

/// Build a view under a fresh reactive owner and render it to HTML.
#[must_use]
pub fn render_view<V>(build: impl FnOnce() -> V) -> String
where
    V: IntoView + 'static,
{
    Owner::new().with(|| build().to_html())
}

/// Render a page body inside the shared [`Document`].
#[must_use]
pub fn render_page<V>(title: String, body: impl FnOnce() -> V) -> String
where
    V: IntoView + 'static,
{
    render_view(|| {
        let body = body();
        view! { <Document title=title>{body}</Document> }
    })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
