//! Landing page: hero, project cards, about, tech stack, contact, footer.

use leptos::prelude::*;

use crate::catalog::{CATALOG, ProjectSummary};
use crate::profile::{PROFILE, TECH_STACK, TechGroup};
use crate::services::contact::{ContactFormState, SubmitResult};

use super::{Action, ActionLink, ActionStyle, Badges, render_page};

/// Actions shown under a project card. Demo is absent for projects without
/// a live deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardActions {
    pub demo: Option<Action>,
    pub code: Action,
    pub details: Action,
}

impl CardActions {
    #[must_use]
    pub fn for_project(project: &ProjectSummary) -> Self {
        Self {
            demo: project.demo().map(|href| Action::new("Demo", href, ActionStyle::Outline)),
            code: Action::new("Code", project.github_link, ActionStyle::Outline),
            details: Action::new("Details", project.detail_href(), ActionStyle::Ghost),
        }
    }
}

/// Render the landing page with the contact form in the given state.
#[must_use]
pub fn render_landing(form: &ContactFormState) -> String {
    let form = form.clone();
    render_page(format!("{} - Portfolio", PROFILE.full_name()), move || view! { <LandingPage form=form /> })
}

#[component]
pub fn LandingPage(form: ContactFormState) -> impl IntoView {
    view! {
        <Hero />
        <ProjectsSection />
        <AboutSection />
        <TechStackSection />
        <ContactSection form=form />
        <Footer />
    }
}

#[component]
pub fn ProjectCard(project: ProjectSummary) -> impl IntoView {
    let CardActions { demo, code, details } = CardActions::for_project(&project);
    view! {
        <article class="card project-card">
            <div class="card__media">
                <img src=project.image alt=project.name width="500" height="300" />
            </div>
            <h3 class="card__title">{project.name}</h3>
            <p class="card__description">{project.summary}</p>
            <div class="badges">
                <Badges items=project.tech_stack badge_class="badge badge--secondary" />
            </div>
            <div class="card__actions">
                {demo.map(|action| view! { <ActionLink action=action /> })}
                <ActionLink action=code />
                <ActionLink action=details />
            </div>
            <p class="card__story">{project.story}</p>
        </article>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="hero">
            <div class="hero__text">
                <h1>
                    {format!("{} ", PROFILE.first_name)}
                    <span class="muted">{PROFILE.last_name}</span>
                </h1>
                <p class="hero__headline">{PROFILE.headline}</p>
                <p class="hero__tagline">{PROFILE.tagline}</p>
                <div class="hero__links">
                    {PROFILE
                        .links
                        .iter()
                        .map(|link| {
                            view! { <ActionLink action=Action::new(link.label, link.href, ActionStyle::Outline) /> }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="hero__portrait">
                <img src=PROFILE.portrait alt=PROFILE.full_name() width="320" height="320" />
            </div>
        </section>
    }
}

#[component]
fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="projects" class="section section--alt">
            <h2>"Featured Projects"</h2>
            <p class="section__lead">
                "A collection of projects that showcase my expertise in AI, machine learning, and fullstack development."
            </p>
            <div class="grid grid--cards">
                {CATALOG.iter().map(|project| view! { <ProjectCard project=*project /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="section">
            <h2>"About Me"</h2>
            <div class="prose">{PROFILE.about.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}</div>
        </section>
    }
}

#[component]
fn TechGroupCard(group: &'static TechGroup) -> impl IntoView {
    let class = if group.learning { "badge badge--learning" } else { "badge badge--outline" };
    view! {
        <div class="tech-group">
            <h3>{group.title}</h3>
            <div class="badges">
                <Badges items=group.items badge_class=class />
            </div>
        </div>
    }
}

#[component]
fn TechStackSection() -> impl IntoView {
    view! {
        <section id="tech-stack" class="section section--alt">
            <h2>"Tech Stack"</h2>
            <p class="section__lead">"Technologies I work with"</p>
            {TECH_STACK.iter().map(|group| view! { <TechGroupCard group=group /> }).collect_view()}
        </section>
    }
}

#[component]
fn Flash(result: SubmitResult) -> impl IntoView {
    let (modifier, role) = if result.is_sent() { ("sent", "status") } else { ("failed", "alert") };
    view! {
        <p class=format!("flash flash--{modifier}") role=role>
            {result.message()}
        </p>
    }
}

/// The message form. Field values come from the last submission and are
/// only present after a failed send.
#[component]
pub fn ContactForm(form: ContactFormState) -> impl IntoView {
    let ContactFormState { fields, outcome } = form;
    view! {
        <div class="card contact-form">
            <h3>"Send me a message"</h3>
            {outcome.map(|result| view! { <Flash result=result /> })}
            <form method="post" action="/contact">
                <label for="name">"Name"</label>
                <input type="text" id="name" name="name" placeholder="Your name" value=fields.name />
                <label for="email">"Email"</label>
                <input
                    type="email"
                    id="email"
                    name="email"
                    placeholder="your.email@example.com"
                    value=fields.email
                />
                <label for="message">"Message"</label>
                <textarea
                    id="message"
                    name="message"
                    rows="5"
                    placeholder="Tell me about your project or just say hello!"
                >
                    {fields.message}
                </textarea>
                <button type="submit" class="button">
                    "Send Message"
                </button>
            </form>
        </div>
    }
}

#[component]
fn ContactSection(form: ContactFormState) -> impl IntoView {
    view! {
        <section id="contact" class="section">
            <h2>"Let's Connect"</h2>
            <p class="section__lead">
                "Interested in collaborating or have a project in mind? I'd love to hear from you."
            </p>
            <div class="grid grid--contact">
                <div class="card contact-card">
                    <h3>"Email"</h3>
                    <a href=format!("mailto:{}", PROFILE.contact_email)>{PROFILE.contact_email}</a>
                </div>
                <div class="card contact-card">
                    <h3>"LinkedIn"</h3>
                    <a href=PROFILE.linkedin_url>"Connect with me"</a>
                </div>
            </div>
            <ContactForm form=form />
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let name = PROFILE.full_name();
    let copyright = format!("\u{a9} {} {name}. All rights reserved.", PROFILE.copyright_year);
    view! {
        <footer class="footer">
            <h3>{name}</h3>
            <p>{PROFILE.footer_roles}</p>
            <nav class="footer__links">
                {PROFILE
                    .footer_links
                    .iter()
                    .map(|link| view! { <a href=link.href>{link.label}</a> })
                    .collect_view()}
            </nav>
            <p class="footer__copyright">{copyright}</p>
        </footer>
    }
}

#[cfg(test)]
#[path = "landing_test.rs"]
mod tests;
