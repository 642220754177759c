//! Joke list and card views.
//!
//! # Design
//! - Render strictly from props; removal intent is bubbled to the owner.
//! - Cards are keyed by joke id so dismissals never reuse the wrong DOM node.

use crate::components::atoms::IconButton;
use jokes_api_models::{Joke, JokeId};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct JokeListProps {
    pub(crate) jokes: Rc<Vec<Joke>>,
    pub(crate) on_remove: Callback<JokeId>,
}

#[function_component(JokeList)]
pub(crate) fn joke_list(props: &JokeListProps) -> Html {
    html! {
        <div class="joke-list">
            { for props.jokes.iter().map(|joke| html! {
                <JokeCard
                    key={joke.id.to_string()}
                    joke={joke.clone()}
                    on_remove={props.on_remove.clone()}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct JokeCardProps {
    pub(crate) joke: Joke,
    pub(crate) on_remove: Callback<JokeId>,
}

#[function_component(JokeCard)]
pub(crate) fn joke_card(props: &JokeCardProps) -> Html {
    let onclick = {
        let on_remove = props.on_remove.clone();
        let id = props.joke.id;
        Callback::from(move |_| on_remove.emit(id))
    };
    html! {
        <div class="joke">
            <IconButton aria_label="Remove joke" onclick={onclick}>
                <i class="fas fa-times"></i>
            </IconButton>
            <br />
            <span>{format!("Category : {}", props.joke.category)}</span>
            <br />
            <span>{format!("Type : {}", props.joke.kind)}</span>
            <br />
            <span>{format!("Joke : {}", props.joke.joke)}</span>
        </div>
    }
}
