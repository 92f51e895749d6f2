use std::rc::Rc;
use yew::prelude::*;

use crate::models::{error::AppError, gdp::Dataset};
use crate::services::api::fetch_gdp;
use crate::utils::scope::LiveScope;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq, Debug)]
pub enum DataState {
    Loading,
    Loaded(Rc<Dataset>),
    Error(String),
}

impl DataState {
    /// Terminal state for a finished fetch.
    pub fn from_result(result: Result<Dataset, AppError>) -> Self {
        match result {
            Ok(dataset) => DataState::Loaded(Rc::new(dataset)),
            Err(e) => DataState::Error(e.to_string()),
        }
    }

    /// Returns true if the state is loading
    pub fn is_loading(&self) -> bool {
        matches!(self, DataState::Loading)
    }

    /// Returns the data if it is loaded
    pub fn data(&self) -> Option<&Rc<Dataset>> {
        match self {
            DataState::Loaded(dataset) => Some(dataset),
            _ => None,
        }
    }

    /// Returns the error message if the fetch failed
    pub fn error(&self) -> Option<&str> {
        match self {
            DataState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Fetches the GDP series once at mount. Results arriving after unmount are dropped.
#[hook]
pub fn use_gdp_data() -> UseStateHandle<DataState> {
    let state = use_state(|| DataState::Loading);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            let scope = LiveScope::new();
            let token = scope.token();

            spawn_local(async move {
                let result = fetch_gdp().await;
                if let Err(e) = &result {
                    gloo::console::error!(&format!("GDP fetch failed: {e}"));
                }
                let next = DataState::from_result(result);

                if !token.apply(|| state.set(next)) {
                    gloo::console::debug!("GDP fetch resolved after unmount, result discarded");
                }
            });

            move || scope.end()
        });
    }

    state
}
