#![allow(dead_code)]

use yew::prelude::*;
use yew::ServerRenderer;
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::Router;

use worblehat_ui::AppShell;

#[derive(Properties, PartialEq)]
pub struct ShellAtProps {
    /// Visited paths, oldest first. The last one is the current location.
    pub entries: Vec<&'static str>,
}

#[function_component(ShellAt)]
pub fn shell_at(props: &ShellAtProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::with_entries(props.entries.clone()));

    html! {
        <Router {history}>
            <AppShell />
        </Router>
    }
}

/// Renders the app shell after navigating through `entries`. Effects do not
/// run during server rendering, so pages appear as of their first paint.
pub async fn render_after(entries: Vec<&'static str>) -> String {
    ServerRenderer::<ShellAt>::with_props(move || ShellAtProps { entries })
        .hydratable(false)
        .render()
        .await
}

pub async fn render_at(path: &'static str) -> String {
    render_after(vec![path]).await
}

/// The `<nav>` element of a rendered page.
pub fn nav_section(html: &str) -> &str {
    let start = html.find("<nav").expect("no <nav> rendered");
    let end = html[start..].find("</nav>").expect("unterminated <nav>") + start;
    &html[start..end]
}
