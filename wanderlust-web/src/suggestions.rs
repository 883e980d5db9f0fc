//! Recommendation hook with the simulated "finding your destinations" pause.
use std::cell::Cell;
use std::rc::Rc;

use wanderlust_core::constants::RECOMMEND_DELAY_MS;
use wanderlust_core::{Catalog, Destination, UserProfile, recommend, recommend_rng};
use yew::prelude::*;

use crate::dom;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SuggestionState {
    #[default]
    Idle,
    Loading,
    Ready {
        seed: u64,
        picks: Vec<Destination>,
    },
}

impl SuggestionState {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn picks(&self) -> &[Destination] {
        match self {
            Self::Ready { picks, .. } => picks,
            Self::Idle | Self::Loading => &[],
        }
    }
}

/// Sample suggestions from the bundled catalog for `profile`.
#[must_use]
pub fn pick_suggestions(profile: &UserProfile, seed: u64) -> SuggestionState {
    let picks = recommend(
        Catalog::bundled().as_slice(),
        profile,
        &mut recommend_rng(seed),
    );
    SuggestionState::Ready { seed, picks }
}

#[derive(Clone, PartialEq)]
pub struct SuggestionsHandle {
    pub state: SuggestionState,
    /// Start (or restart) a suggestion pass; the "find different suggestions" button.
    pub refresh: Callback<()>,
}

/// Suggestions for `profile`, revealed after [`RECOMMEND_DELAY_MS`].
///
/// A pass completing after the component unmounted does nothing.
#[hook]
pub fn use_suggestions(profile: UserProfile) -> SuggestionsHandle {
    let state = use_state(SuggestionState::default);
    let mounted: Rc<Cell<bool>> = use_memo((), |()| Cell::new(true));

    {
        let mounted = mounted.clone();
        use_effect_with((), move |()| {
            mounted.set(true);
            move || mounted.set(false)
        });
    }

    let refresh = {
        let state = state.clone();
        Callback::from(move |()| {
            state.set(SuggestionState::Loading);
            let state = state.clone();
            let mounted = mounted.clone();
            let profile = profile.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let delay = i32::try_from(RECOMMEND_DELAY_MS).unwrap_or(i32::MAX);
                if let Err(err) = dom::sleep_ms(delay).await {
                    log::warn!("suggestion delay failed: {}", dom::js_error_message(&err));
                }
                if !mounted.get() {
                    return;
                }
                state.set(pick_suggestions(&profile, dom::entropy_seed()));
            });
        })
    };

    SuggestionsHandle {
        state: (*state).clone(),
        refresh,
    }
}
