//! Persistence helpers for the app shell.

use crate::core::error::StorageError;
use crate::core::persist::{KeyValueStore, read_or};
use gloo::console;
use gloo::utils::window;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::Storage;
use yew::prelude::*;

/// `localStorage`-backed store holding raw strings.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Result<Storage, StorageError> {
        window()
            .local_storage()
            .map_err(|err| StorageError::Unavailable(describe(&err)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is not exposed".to_string()))
    }
}

impl KeyValueStore for BrowserStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| StorageError::Unavailable(describe(&err)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                detail: describe(&err),
            })
    }
}

/// Storage capability shared with components through context.
#[derive(Clone)]
pub(crate) struct StorageCtx {
    pub(crate) store: Rc<dyn KeyValueStore>,
}

impl StorageCtx {
    pub(crate) fn browser() -> Self {
        Self {
            store: Rc::new(BrowserStore),
        }
    }
}

impl Default for StorageCtx {
    fn default() -> Self {
        Self::browser()
    }
}

impl PartialEq for StorageCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

/// String state seeded from storage and written back whenever it changes.
#[hook]
pub(crate) fn use_persistent_state(
    key: &'static str,
    default: &'static str,
) -> UseStateHandle<String> {
    let ctx = use_context::<StorageCtx>().unwrap_or_default();
    let value = {
        let store = Rc::clone(&ctx.store);
        use_state(move || read_or(store.as_ref(), key, default))
    };
    {
        let store = Rc::clone(&ctx.store);
        use_effect_with_deps(
            move |value: &String| {
                if let Err(err) = store.write(key, value) {
                    log_storage_error("set", key, &err.to_string());
                }
                || ()
            },
            (*value).clone(),
        );
    }
    value
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
