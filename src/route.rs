use yew::prelude::*;
use yew_router::prelude::*;

use crate::logging;
use crate::pages::{BooksPage, FrontPage};

#[derive(Clone, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Front,
    #[at("/books")]
    Books,
    /// Any path without a page of its own. Redirected to [`Route::FALLBACK`].
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Where unmatched paths end up.
    pub const FALLBACK: Route = Route::Front;
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Front => html! { <FrontPage /> },
        Route::Books => html! { <BooksPage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    use_effect_with((), |_| {
        logging::warn(&format!(
            "no page for the current path, redirecting to {}",
            Route::FALLBACK.to_path()
        ));
        || ()
    });

    html! { <Redirect<Route> to={Route::FALLBACK} /> }
}
