//! Status panel shown in place of the joke list.
//!
//! # Design
//! - Keep copy entirely prop-driven.
//! - `alert` switches the ARIA role so failures are announced.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub(crate) title: AttrValue,
    #[prop_or_default]
    pub(crate) description: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) alert: bool,
    #[prop_or_default]
    pub(crate) class: Classes,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    let role = props.alert.then_some(AttrValue::Static("alert"));
    html! {
        <div class={classes!("empty-state", props.class.clone())} role={role}>
            <h4>{props.title.clone()}</h4>
            {props.description.clone().map(|text| html! {
                <p class="muted">{text}</p>
            }).unwrap_or_default()}
        </div>
    }
}
