use crate::app::api::ApiCtx;
use crate::app::preferences::{StorageCtx, use_persistent_state};
use crate::components::atoms::{EmptyState, SearchInput};
use crate::core::config::{JokeApiConfig, PAGE_TITLE, SEARCH_KEY};
use crate::features::jokes::actions::JokesAction;
use crate::features::jokes::api::spawn_fetch;
use crate::features::jokes::logic::filter_by_category;
use crate::features::jokes::state::{FetchStatus, JokesState};
use crate::features::jokes::view::JokeList;
use jokes_api_models::JokeId;
use std::rc::Rc;
use yew::prelude::*;

mod api;
pub(crate) mod preferences;

/// Provides the storage and API contexts for the page.
#[function_component(JokesRoot)]
pub(crate) fn jokes_root() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(JokeApiConfig::default()), ());
    let storage_ctx = use_memo(|_| StorageCtx::browser(), ());
    html! {
        <ContextProvider<StorageCtx> context={(*storage_ctx).clone()}>
            <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
                <JokesApp />
            </ContextProvider<ApiCtx>>
        </ContextProvider<StorageCtx>>
    }
}

/// Page controller: owns the joke collection and the persisted search term.
#[function_component(JokesApp)]
pub(crate) fn jokes_app() -> Html {
    let api_ctx = use_context::<ApiCtx>().unwrap_or_default();
    let jokes = use_reducer(JokesState::default);
    let search = use_persistent_state(SEARCH_KEY, "");

    {
        let client = Rc::clone(&api_ctx.client);
        let dispatcher = jokes.dispatcher();
        let ticket = jokes.next_ticket();
        use_effect_with_deps(
            move |_| {
                let handle = spawn_fetch(client, ticket, dispatcher.clone());
                move || handle.cancel(&dispatcher)
            },
            (),
        );
    }

    let visible = use_memo(
        |(collection, term)| filter_by_category(collection, term),
        (Rc::clone(&jokes.jokes), (*search).clone()),
    );

    let on_search = {
        let search = search.clone();
        Callback::from(move |text: String| search.set(text))
    };
    let on_remove = {
        let dispatcher = jokes.dispatcher();
        Callback::from(move |id: JokeId| dispatcher.dispatch(JokesAction::Remove(id)))
    };

    let body = match &jokes.status {
        FetchStatus::Failed(message) => html! {
            <EmptyState
                title="Could not load jokes"
                description={Some(AttrValue::from(message.clone()))}
                alert={true}
            />
        },
        FetchStatus::Idle | FetchStatus::Loading => html! {
            <p class="muted">{"Loading jokes..."}</p>
        },
        FetchStatus::Loaded if visible.is_empty() && !jokes.jokes.is_empty() => html! {
            <EmptyState
                title="No jokes match"
                description={Some(AttrValue::from(format!(
                    "No category contains \"{}\".",
                    *search
                )))}
            />
        },
        FetchStatus::Loaded => html! {
            <JokeList jokes={Rc::clone(&visible)} on_remove={on_remove} />
        },
    };

    html! {
        <div class="App">
            <h1>{PAGE_TITLE}</h1>
            <SearchInput
                id="search"
                value={AttrValue::from((*search).clone())}
                is_focused={true}
                on_input={on_search}
            >
                <strong>{"Search :"}</strong>
            </SearchInput>
            <hr />
            {body}
        </div>
    }
}

/// Mount the page into `#root`, or `<body>` when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let document = gloo::utils::document();
    document.set_title(PAGE_TITLE);
    if let Some(root) = document.get_element_by_id("root") {
        yew::Renderer::<JokesRoot>::with_root(root).render();
    } else {
        yew::Renderer::<JokesRoot>::new().render();
    }
}
