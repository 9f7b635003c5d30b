use super::*;

#[test]
fn external_action_opens_in_new_tab() {
    let html = render_view(|| {
        view! { <ActionLink action=Action::new("Code", "https://github.com/x/y", ActionStyle::Outline) /> }
    });
    assert!(html.contains(r#"href="https://github.com/x/y""#));
    assert!(html.contains(r#"target="_blank""#));
    assert!(html.contains(r#"rel="noopener noreferrer""#));
    assert!(html.contains("button--outline"));
}

#[test]
fn internal_action_stays_in_tab() {
    let html = render_view(|| view! { <ActionLink action=Action::new("Details", "/projects/1", ActionStyle::Ghost) /> });
    assert!(!html.contains("target="));
    assert!(!html.contains("rel="));
    assert!(html.contains("Details"));
    assert!(html.contains(r#"href="/projects/1""#));
}

#[test]
fn absent_optional_action_renders_nothing() {
    let none: Option<Action> = None;
    let html = render_view(move || view! { <div>{none.map(|action| view! { <ActionLink action=action /> })}</div> });
    assert!(!html.contains("<a "));

    let demo = Some(Action::new("Demo", "https://demo.example.com", ActionStyle::Outline));
    let html = render_view(move || view! { <div>{demo.map(|action| view! { <ActionLink action=action /> })}</div> });
    assert_eq!(html.matches("<a ").count(), 1);
    assert!(html.contains(r#"href="https://demo.example.com""#));
}

#[test]
fn page_text_is_escaped() {
    let html = render_page("A & B".to_owned(), || view! { <p>{"<b>bold</b>"}</p> });
    assert!(html.to_ascii_lowercase().starts_with("<!doctype html>"));
    assert!(html.contains("A &amp; B"));
    assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    assert!(!html.contains("<b>"));
    assert!(html.contains(r#"href="/styles.css""#));
}

#[test]
fn bullet_list_preserves_order() {
    let html = render_view(|| view! { <BulletList items=&["first", "second"] /> });
    let first = html.find("first").unwrap();
    let second = html.find("second").unwrap();
    assert!(first < second);
    assert_eq!(html.matches("<li>").count(), 2);
    assert_eq!(html.matches(r#"class="bullet""#).count(), 2);
}

#[test]
fn badges_carry_their_class() {
    let html = render_view(|| view! { <Badges items=&["Rust", "Go"] badge_class="badge badge--outline" /> });
    assert_eq!(html.matches(r#"class="badge badge--outline""#).count(), 2);
    assert!(html.find("Rust").unwrap() < html.find("Go").unwrap());
}
