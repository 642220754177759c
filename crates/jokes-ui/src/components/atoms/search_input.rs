//! Labeled search input.
//!
//! # Design
//! - Controlled input: the owner holds the value and receives every keystroke.
//! - No debouncing; filtering is cheap enough to run per input event.
//! - Optional focus on mount for the primary search box.

use gloo::console;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SearchInputProps {
    pub(crate) id: AttrValue,
    #[prop_or_default]
    pub(crate) value: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub(crate) input_type: AttrValue,
    #[prop_or_default]
    pub(crate) is_focused: bool,
    #[prop_or_default]
    pub(crate) on_input: Callback<String>,
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(SearchInput)]
pub(crate) fn search_input(props: &SearchInputProps) -> Html {
    let input_ref = use_node_ref();

    {
        let input_ref = input_ref.clone();
        use_effect_with_deps(
            move |is_focused| {
                if *is_focused {
                    if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                        if let Err(err) = input.focus() {
                            console::error!("search input focus failed", err);
                        }
                    }
                }
                || ()
            },
            props.is_focused,
        );
    }

    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                on_input.emit(input.value());
            }
        })
    };

    html! {
        <>
            <label for={props.id.clone()}>{ for props.children.iter() }{" "}</label>
            <input
                ref={input_ref}
                id={props.id.clone()}
                type={props.input_type.clone()}
                value={props.value.clone()}
                autofocus={props.is_focused}
                oninput={oninput}
            />
        </>
    }
}
