use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BookProps {
    pub title: AttrValue,
}

#[function_component(Book)]
pub fn book(props: &BookProps) -> Html {
    html! {
        <li class="book">{ props.title.clone() }</li>
    }
}
