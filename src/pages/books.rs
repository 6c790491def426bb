use yew::prelude::*;

use crate::components::BookShelf;
use crate::logging;
use crate::models::{seed_titles, BookList, BookListAction};

#[function_component(BooksPage)]
pub fn books_page() -> Html {
    let books = use_reducer(BookList::default);

    { // load once, after the first render
        let books = books.clone();
        use_effect_with((), move |_| {
            let titles = seed_titles();
            logging::debug(&format!("books page loaded {} titles", titles.len()));
            books.dispatch(BookListAction::Load(titles));
            || ()
        });
    }

    html! {
        <div class="container" id="books-container">
            <h1>{"Books Page!"}</h1>
            <BookShelf titles={books.titles().to_vec()} />
        </div>
    }
}
