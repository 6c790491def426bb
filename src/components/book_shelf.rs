use yew::prelude::*;

use crate::components::Book;

#[derive(Properties, PartialEq)]
pub struct BookShelfProps {
    /// Rendered one item per title, in order.
    pub titles: Vec<String>,
}

#[function_component(BookShelf)]
pub fn book_shelf(props: &BookShelfProps) -> Html {
    html! {
        <ul class="book-list">
            { for props.titles.iter().map(|title| html! { <Book title={title.clone()} /> }) }
        </ul>
    }
}
