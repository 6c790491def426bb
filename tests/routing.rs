#![cfg(not(target_arch = "wasm32"))]

mod common;

use common::{nav_section, render_after, render_at};

const FRONT_HEADING: &str = "Worblehat Frontpage";
const BOOKS_HEADING: &str = "Books Page!";

#[tokio::test]
async fn root_mounts_front_page_only() {
    let html = render_at("/").await;
    assert!(html.contains(FRONT_HEADING));
    assert!(!html.contains(BOOKS_HEADING));
}

#[tokio::test]
async fn books_path_mounts_books_page_only() {
    let html = render_at("/books").await;
    assert!(html.contains(BOOKS_HEADING));
    assert!(!html.contains(FRONT_HEADING));
}

#[tokio::test]
async fn nav_bar_links_every_page() {
    for path in ["/", "/books"] {
        let html = render_at(path).await;
        let nav = nav_section(&html);
        assert!(nav.contains(r#"href="/""#), "missing home link on {path}");
        assert!(nav.contains(r#"href="/books""#), "missing books link on {path}");
    }
}

#[tokio::test]
async fn nav_bar_renders_the_same_on_every_page() {
    let front = render_at("/").await;
    let books = render_at("/books").await;
    assert_eq!(nav_section(&front), nav_section(&books));
}

#[tokio::test]
async fn front_page_render_does_not_depend_on_history() {
    let initial = render_at("/").await;
    let round_trip = render_after(vec!["/", "/books", "/"]).await;
    assert_eq!(initial, round_trip);
    assert!(!round_trip.contains(BOOKS_HEADING));
}

#[tokio::test]
async fn unknown_path_mounts_neither_page() {
    let html = render_at("/shelves").await;
    assert!(!html.contains(FRONT_HEADING));
    assert!(!html.contains(BOOKS_HEADING));
    // the nav bar is still there to get back
    assert!(html.contains("<nav"));
}
