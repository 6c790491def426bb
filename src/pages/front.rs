use yew::prelude::*;

use crate::components::{Button, ButtonColor, ButtonVariant};

#[function_component(FrontPage)]
pub fn front_page() -> Html {
    html! {
        <div class="container" id="front-container">
            <h1>{"Worblehat Frontpage"}</h1>
            // no handler bound yet
            <Button label="Trykk her" variant={ButtonVariant::Contained} color={ButtonColor::Primary} />
        </div>
    }
}
