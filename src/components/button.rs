use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Contained,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Contained => "btn-contained",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonColor {
    #[default]
    Primary,
}

impl ButtonColor {
    pub fn class(self) -> &'static str {
        match self {
            ButtonColor::Primary => "btn-primary",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub color: ButtonColor,
    /// Without a callback the button renders but does nothing when clicked.
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = classes!("btn", props.variant.class(), props.color.class());

    html! {
        <button {class} type="button" onclick={props.onclick.clone()}>
            { props.label.clone() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_contained_primary() {
        assert_eq!(ButtonVariant::default().class(), "btn-contained");
        assert_eq!(ButtonColor::default().class(), "btn-primary");
    }
}
