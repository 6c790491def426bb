use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::NavBar;
use crate::route::{switch, Route};

/// Root component mounted into the host document. Owns the browser history.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppShell />
        </BrowserRouter>
    }
}

/// Navigation bar plus the routed page. Must sit inside a router.
#[function_component(AppShell)]
pub fn app_shell() -> Html {
    html! {
        <div class="app">
            <NavBar />
            <main class="container">
                <Switch<Route> render={switch} />
            </main>
        </div>
    }
}
