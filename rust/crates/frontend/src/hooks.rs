//! Data-loading hooks shared by the screens.

use std::cell::Cell;
use std::rc::Rc;

use screen_state::FetchState;
use serde::de::DeserializeOwned;
use web_sys::AbortController;
use web_types::Endpoint;
use yew::prelude::*;

use crate::api::{ApiClient, log_failure};

/// The API client provided by the app shell.
#[hook]
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_default()
}

/// Cancellation scope tied to the lifetime of an effect.
///
/// Dropping the scope (through [`RequestScope::cancel`]) aborts the
/// request and marks any late result as stale.
#[derive(Clone)]
pub struct RequestScope {
    alive: Rc<Cell<bool>>,
    controller: Option<AbortController>,
}

impl Default for RequestScope {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestScope {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
            controller: AbortController::new().ok(),
        }
    }

    pub fn signal(&self) -> Option<web_sys::AbortSignal> {
        self.controller.as_ref().map(|c| c.signal())
    }

    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    pub fn cancel(&self) {
        self.alive.set(false);
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}

/// Fetch a collection once on mount.
///
/// Starts in [`FetchState::Loading`] and settles once. Unmounting aborts the
/// request; a result that arrives afterwards is discarded.
#[hook]
pub fn use_list<T>(endpoint: Endpoint) -> FetchState<Rc<Vec<T>>>
where
    T: DeserializeOwned + 'static,
{
    let client = use_api();
    let state = use_state(FetchState::<Rc<Vec<T>>>::default);

    {
        let state = state.clone();

        use_effect_with(endpoint, move |endpoint| {
            let scope = RequestScope::new();
            let endpoint = endpoint.clone();

            {
                let scope = scope.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let signal = scope.signal();
                    let result = client.get_list::<T>(&endpoint, signal.as_ref()).await;

                    if let Err(e) = &result {
                        log_failure(endpoint.label(), e);
                    }
                    if !scope.is_alive() {
                        return;
                    }
                    if let Some(next) = FetchState::from_result(result.map(Rc::new)) {
                        state.set(next);
                    }
                });
            }

            move || scope.cancel()
        });
    }

    (*state).clone()
}

/// Flag that turns false once the calling component unmounts.
#[hook]
pub fn use_mounted() -> Rc<Cell<bool>> {
    let mounted = use_memo((), |_| Cell::new(true));

    {
        let mounted = mounted.clone();
        use_effect_with((), move |_| move || mounted.set(false));
    }

    mounted
}
