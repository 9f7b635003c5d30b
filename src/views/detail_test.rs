use super::*;
use crate::catalog::{DETAILS, Lookup, project_detail};
use crate::views::render_view;

fn chat_app() -> &'static ProjectDetail {
    project_detail("1").found().unwrap()
}

#[test]
fn detail_renders_record_in_order() {
    let html = render_detail(chat_app());
    assert!(html.contains("Real Time Chat App</h1>"));
    assert!(html.contains("Project Overview"));
    assert!(html.contains("Challenges"));

    let positions: Vec<usize> = chat_app()
        .features
        .iter()
        .chain(chat_app().challenges)
        .map(|item| html.find(item).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(html.matches(r#"class="bullet""#).count(), 7);
}

#[test]
fn gallery_has_one_uniform_cell_per_image() {
    let html = render_detail(chat_app());
    assert_eq!(html.matches("gallery__cell").count(), 3);
    assert!(html.contains(r#"alt="Real Time Chat App screenshot 1""#));
    assert!(html.contains(r#"alt="Real Time Chat App screenshot 3""#));
    let first = html.find("chat-screen.jpg").unwrap();
    let last = html.find("signup-screen.jpg").unwrap();
    assert!(first < last);
}

#[test]
fn code_action_always_links_to_source() {
    for detail in DETAILS {
        let actions = DetailActions::for_project(detail);
        assert_eq!(actions.code.href, detail.github_link);
        assert!(!actions.code.href.is_empty());
        let html = render_detail(detail);
        assert!(html.contains("View Code"));
        assert!(html.contains(&format!(r#"href="{}""#, detail.github_link)));
    }
}

#[test]
fn demo_action_only_when_deployed() {
    let html = render_detail(chat_app());
    assert!(!html.contains("Live Demo"));
    assert!(!html.contains(r##"href="#""##));

    let live = ProjectDetail { demo_link: "https://chat.example.com", ..*chat_app() };
    let html = render_detail(&live);
    assert!(html.contains("Live Demo"));
    assert!(html.contains(r#"href="https://chat.example.com""#));
}

#[test]
fn detail_text_is_escaped_by_the_renderer() {
    let odd = ProjectDetail { name: "Tom <&> Jerry", ..*chat_app() };
    let html = render_view(move || view! { <DetailPage detail=odd /> });
    assert!(html.contains("Tom &lt;&amp;&gt; Jerry"));
    assert!(!html.contains("<&>"));
}

#[test]
fn detail_links_back_home() {
    let html = render_detail(chat_app());
    assert!(html.contains(r#"class="back-link" href="/""#));
    assert!(html.contains("Back to portfolio"));
}

#[test]
fn not_found_page_offers_single_way_home() {
    for raw in ["99", "abc"] {
        assert_eq!(project_detail(raw), Lookup::NotFound);
    }
    let html = render_not_found();
    assert!(html.contains("Project not found</h1>"));
    assert!(html.contains(r#"href="/""#));
    assert!(html.contains("Go back home"));
    assert_eq!(html.matches("<a ").count(), 1);
}
