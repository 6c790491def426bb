use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

use crate::route::Route;

/// Links to every page. Stateless, so it renders the same on every route.
#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    html! {
        <nav class="navbar">
            <Link<Route> classes={classes!("nav-btn")} to={Route::Front}>
                <Icon icon_id={IconId::LucideHome} width={"20"} height={"20"} />
                <span class="nav-label">{"Home"}</span>
            </Link<Route>>
            <Link<Route> classes={classes!("nav-btn")} to={Route::Books}>
                <Icon icon_id={IconId::LucideLibrary} width={"20"} height={"20"} />
                <span class="nav-label">{"Books"}</span>
            </Link<Route>>
        </nav>
    }
}
