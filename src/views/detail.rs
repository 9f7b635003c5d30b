//! Project detail page and its not-found fallback.

use leptos::prelude::*;

use crate::catalog::ProjectDetail;

use super::{Action, ActionLink, ActionStyle, Badges, BulletList, render_page};

pub const NOT_FOUND_HEADING: &str = "Project not found";

/// Header actions on the detail page. "View Code" always links to the
/// source repository; "Live Demo" only exists when a demo is deployed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailActions {
    pub demo: Option<Action>,
    pub code: Action,
}

impl DetailActions {
    #[must_use]
    pub fn for_project(detail: &ProjectDetail) -> Self {
        Self {
            demo: detail.demo().map(|href| Action::new("Live Demo", href, ActionStyle::Primary)),
            code: Action::new("View Code", detail.github_link, ActionStyle::Outline),
        }
    }
}

#[must_use]
pub fn render_detail(detail: &ProjectDetail) -> String {
    let detail = *detail;
    render_page(detail.name.to_owned(), move || view! { <DetailPage detail=detail /> })
}

#[must_use]
pub fn render_not_found() -> String {
    render_page(NOT_FOUND_HEADING.to_owned(), || view! { <NotFound /> })
}

#[component]
pub fn DetailPage(detail: ProjectDetail) -> impl IntoView {
    let DetailActions { demo, code } = DetailActions::for_project(&detail);
    view! {
        <main class="detail">
            <a class="back-link" href="/">
                "Back to portfolio"
            </a>
            <header class="detail__header">
                <h1>{detail.name}</h1>
                <p class="detail__summary">{detail.summary}</p>
                <div class="badges">
                    <Badges items=detail.tech_stack badge_class="badge badge--secondary" />
                </div>
                <div class="detail__actions">
                    {demo.map(|action| view! { <ActionLink action=action /> })}
                    <ActionLink action=code />
                </div>
            </header>
            <section class="card">
                <h2>"Project Overview"</h2>
                <p>{detail.description}</p>
            </section>
            <div class="grid grid--two">
                <section class="card">
                    <h2>"Key Features"</h2>
                    <BulletList items=detail.features />
                </section>
                <section class="card">
                    <h2>"Challenges & Solutions"</h2>
                    <BulletList items=detail.challenges />
                </section>
            </div>
            <section class="card">
                <h2>"Project Gallery"</h2>
                <Gallery name=detail.name images=detail.images />
            </section>
            <p class="detail__built-for">{detail.built_for}</p>
        </main>
    }
}

/// Each screenshot sits in a fixed 3:2 cell so the grid stays uniform.
#[component]
fn Gallery(name: &'static str, images: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="gallery">
            {images
                .iter()
                .enumerate()
                .map(move |(i, src)| {
                    view! {
                        <figure class="gallery__cell">
                            <img src=*src alt=format!("{name} screenshot {}", i + 1) width="600" height="400" />
                        </figure>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <main class="not-found">
            <h1>{NOT_FOUND_HEADING}</h1>
            <ActionLink action=Action::new("Go back home", "/", ActionStyle::Primary) />
        </main>
    }
}

#[cfg(test)]
#[path = "detail_test.rs"]
mod tests;
