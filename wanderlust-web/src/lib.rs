#![forbid(unsafe_code)]
//! Browser shell for Wanderlust.
//!
//! Provides the `localStorage` plan persistence, the plan-store context and
//! the suggestion hook that view components build on.
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod dom;
pub mod plan_context;
pub mod storage;
pub mod suggestions;

pub use plan_context::{PlanAction, PlanContext, PlanState, PlanStoreProvider, use_plan_store};
pub use storage::{LocalStoragePlans, WebPlanStorage, WebStorageError};
pub use suggestions::{SuggestionState, SuggestionsHandle, pick_suggestions, use_suggestions};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    log::debug!("wanderlust shell initialised");
}
