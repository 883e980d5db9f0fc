//! Tab-wide plan store exposed to components through a Yew context.
//!
//! Pages dispatch [`PlanAction`]s; each one is applied to the core
//! [`PlanStore`] (which persists it) and the latest [`Notice`] is kept for
//! the toast layer to pick up.
use std::rc::Rc;

use wanderlust_core::{
    Destination, Notice, Plan, PlanStatus, PlanStore, Region, StatusCounts,
};
use yew::prelude::*;

use crate::storage::WebPlanStorage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    Add(Destination),
    Remove(String),
    UpdateStatus { id: String, status: PlanStatus },
    DismissNotice,
}

#[derive(Debug, Clone)]
pub struct PlanState {
    store: PlanStore<WebPlanStorage>,
    notice: Option<Notice>,
}

impl PlanState {
    /// Open the store over the browser's `localStorage`.
    #[must_use]
    pub fn load() -> Self {
        Self::with_storage(WebPlanStorage::default())
    }

    #[must_use]
    pub fn with_storage(storage: WebPlanStorage) -> Self {
        Self {
            store: PlanStore::open(storage),
            notice: None,
        }
    }

    #[must_use]
    pub fn plans(&self) -> &[Plan] {
        self.store.plans()
    }

    #[must_use]
    pub fn plans_by_status(&self, status: PlanStatus) -> Vec<&Plan> {
        self.store.plans_by_status(status)
    }

    #[must_use]
    pub fn plans_by_region(&self, region: Region) -> Vec<&Plan> {
        self.store.plans_by_region(region)
    }

    #[must_use]
    pub fn contains(&self, name: &str, region: Region) -> bool {
        self.store.contains(name, region)
    }

    #[must_use]
    pub fn status_counts(&self) -> StatusCounts {
        self.store.status_counts()
    }

    /// Message produced by the most recent action, if not yet dismissed.
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}

impl PartialEq for PlanState {
    fn eq(&self, other: &Self) -> bool {
        self.notice == other.notice && self.store.plans() == other.store.plans()
    }
}

impl Reducible for PlanState {
    type Action = PlanAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.notice = match action {
            PlanAction::Add(destination) => Some(next.store.add_plan(destination).notice()),
            PlanAction::Remove(id) => next.store.remove_plan(&id).as_ref().map(Notice::removed),
            PlanAction::UpdateStatus { id, status } => next
                .store
                .update_plan_status(&id, status)
                .map(|plan| Notice::status_changed(plan, status)),
            PlanAction::DismissNotice => None,
        };
        Rc::new(next)
    }
}

pub type PlanContext = UseReducerHandle<PlanState>;

#[derive(Properties, PartialEq)]
pub struct PlanStoreProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Provides [`PlanContext`] to every descendant.
#[function_component(PlanStoreProvider)]
pub fn plan_store_provider(props: &PlanStoreProviderProps) -> Html {
    let plans = use_reducer(PlanState::load);
    html! {
        <ContextProvider<PlanContext> context={plans}>
            { props.children.clone() }
        </ContextProvider<PlanContext>>
    }
}

/// The plan store, when rendered inside a [`PlanStoreProvider`].
#[hook]
pub fn use_plan_store() -> Option<PlanContext> {
    use_context::<PlanContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wanderlust_core::{Catalog, MemoryStorage};

    fn state() -> (Rc<PlanState>, MemoryStorage) {
        let memory = MemoryStorage::new();
        let state = PlanState::with_storage(WebPlanStorage::Memory(memory.clone()));
        (Rc::new(state), memory)
    }

    fn ooty() -> Destination {
        Catalog::bundled()
            .find("Ooty", Region::TamilNadu)
            .unwrap()
            .clone()
    }

    #[test]
    fn add_then_duplicate_sets_matching_notices() {
        let (state, memory) = state();
        let state = state.reduce(PlanAction::Add(ooty()));
        assert_eq!(state.notice().unwrap().title, "Added to your plan!");
        assert!(memory.raw().is_some());

        let state = state.reduce(PlanAction::Add(ooty()));
        assert_eq!(state.notice().unwrap().title, "Already in your plan");
        assert_eq!(state.plans().len(), 1);
        assert!(state.contains("Ooty", Region::TamilNadu));
    }

    #[test]
    fn status_and_remove_actions_update_filters() {
        let (state, _memory) = state();
        let state = state.reduce(PlanAction::Add(ooty()));
        let id = state.plans()[0].id.clone();

        let state = state.reduce(PlanAction::UpdateStatus {
            id: id.clone(),
            status: PlanStatus::Ongoing,
        });
        assert_eq!(state.plans_by_status(PlanStatus::Ongoing).len(), 1);
        assert_eq!(state.status_counts().ongoing, 1);

        let state = state.reduce(PlanAction::Remove(id));
        assert!(state.plans_by_status(PlanStatus::Ongoing).is_empty());
        assert_eq!(state.notice().unwrap().title, "Removed from your plan");
    }

    #[test]
    fn unknown_ids_clear_the_notice() {
        let (state, _memory) = state();
        let state = state.reduce(PlanAction::Add(ooty()));
        let state = state.reduce(PlanAction::Remove("missing".to_string()));
        assert!(state.notice().is_none());
        assert_eq!(state.plans().len(), 1);
    }

    #[test]
    fn dismiss_keeps_plans() {
        let (state, _memory) = state();
        let state = state
            .reduce(PlanAction::Add(ooty()))
            .reduce(PlanAction::DismissNotice);
        assert!(state.notice().is_none());
        assert_eq!(state.plans_by_region(Region::TamilNadu).len(), 1);
    }

    #[test]
    fn state_reloads_from_shared_memory() {
        let (state, memory) = state();
        let first = state.reduce(PlanAction::Add(ooty()));
        let reloaded = PlanState::with_storage(WebPlanStorage::Memory(memory));
        assert_eq!(reloaded.plans(), first.plans());
    }
}
