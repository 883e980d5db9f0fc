//! The trip-plan store: the single owner of every [`Plan`].
//!
//! Each mutation applies fully in memory and then writes the whole list
//! through the injected [`PlanStorage`]. A failed write is logged and
//! otherwise ignored; the in-memory list stays authoritative.
use std::collections::HashSet;

use crate::destination::{Destination, Region};
use crate::notice::Notice;
use crate::plan::{Clock, Plan, PlanStatus, SystemClock, generate_id};
use crate::storage::PlanStorage;

/// Result of [`PlanStore::add_plan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(Plan),
    /// A plan for the same `(name, region)` already existed; nothing changed.
    Duplicate(Plan),
}

impl AddOutcome {
    #[must_use]
    pub const fn plan(&self) -> &Plan {
        match self {
            Self::Added(plan) | Self::Duplicate(plan) => plan,
        }
    }

    #[must_use]
    pub const fn is_added(&self) -> bool {
        matches!(self, Self::Added(_))
    }

    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            Self::Added(plan) => Notice::added(plan),
            Self::Duplicate(plan) => Notice::duplicate(plan),
        }
    }
}

/// Per-status totals for the trip-plan summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub selected: usize,
    pub ongoing: usize,
    pub completed: usize,
}

impl StatusCounts {
    #[must_use]
    pub const fn get(&self, status: PlanStatus) -> usize {
        match status {
            PlanStatus::Selected => self.selected,
            PlanStatus::Ongoing => self.ongoing,
            PlanStatus::Completed => self.completed,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.selected + self.ongoing + self.completed
    }
}

#[derive(Debug, Clone)]
pub struct PlanStore<S, C = SystemClock> {
    plans: Vec<Plan>,
    storage: S,
    clock: C,
}

impl<S: PlanStorage> PlanStore<S> {
    /// Open the store using wall-clock timestamps.
    pub fn open(storage: S) -> Self {
        Self::open_with_clock(storage, SystemClock)
    }
}

impl<S: PlanStorage, C: Clock> PlanStore<S, C> {
    /// Load persisted plans; absent or unreadable state starts empty.
    pub fn open_with_clock(storage: S, clock: C) -> Self {
        let plans = match storage.load() {
            Ok(Some(plans)) => dedupe_loaded(plans),
            Ok(None) => Vec::new(),
            Err(err) => {
                log::warn!("discarding unreadable plan state: {err}");
                Vec::new()
            }
        };
        log::debug!("plan store opened with {} plans", plans.len());
        Self {
            plans,
            storage,
            clock,
        }
    }

    /// Track a destination as a new `Selected` plan unless one already
    /// exists for the same `(name, region)`.
    pub fn add_plan(&mut self, destination: Destination) -> AddOutcome {
        if let Some(existing) = self.find_for(&destination.name, destination.region) {
            log::debug!("duplicate add suppressed for {}", existing.id);
            return AddOutcome::Duplicate(existing.clone());
        }
        let now = self.clock.now();
        let id = generate_id(&destination.name, now, |candidate| {
            self.plans.iter().any(|p| p.id == candidate)
        });
        let plan = Plan::create(destination, id, now);
        self.plans.push(plan.clone());
        self.persist();
        AddOutcome::Added(plan)
    }

    /// Delete a plan. Returns it, or `None` when the id is unknown.
    pub fn remove_plan(&mut self, id: &str) -> Option<Plan> {
        let index = self.plans.iter().position(|p| p.id == id)?;
        let removed = self.plans.remove(index);
        self.persist();
        Some(removed)
    }

    /// Move a plan to `status`. Returns the updated plan, or `None` when the
    /// id is unknown.
    pub fn update_plan_status(&mut self, id: &str, status: PlanStatus) -> Option<&Plan> {
        let index = self.plans.iter().position(|p| p.id == id)?;
        self.plans[index].status = status;
        self.persist();
        self.plans.get(index)
    }

    #[must_use]
    pub fn plans_by_status(&self, status: PlanStatus) -> Vec<&Plan> {
        self.plans.iter().filter(|p| p.status == status).collect()
    }

    #[must_use]
    pub fn plans_by_region(&self, region: Region) -> Vec<&Plan> {
        self.plans.iter().filter(|p| p.region() == region).collect()
    }

    #[must_use]
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Plan> {
        self.plans.iter().find(|p| p.id == id)
    }

    /// The plan tracking `(name, region)`, if any.
    #[must_use]
    pub fn find_for(&self, name: &str, region: Region) -> Option<&Plan> {
        self.plans.iter().find(|p| p.is(name, region))
    }

    /// "Already added" check used when rendering destination cards.
    #[must_use]
    pub fn contains(&self, name: &str, region: Region) -> bool {
        self.find_for(name, region).is_some()
    }

    #[must_use]
    pub fn status_counts(&self) -> StatusCounts {
        self.plans
            .iter()
            .fold(StatusCounts::default(), |mut counts, plan| {
                match plan.status {
                    PlanStatus::Selected => counts.selected += 1,
                    PlanStatus::Ongoing => counts.ongoing += 1,
                    PlanStatus::Completed => counts.completed += 1,
                }
                counts
            })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&self) {
        if let Err(err) = self.storage.save(&self.plans) {
            log::warn!("failed to persist {} plans: {err}", self.plans.len());
        }
    }
}

/// Hand-edited state may repeat a destination; keep the first occurrence.
fn dedupe_loaded(plans: Vec<Plan>) -> Vec<Plan> {
    let mut seen = HashSet::with_capacity(plans.len());
    let before = plans.len();
    let kept: Vec<Plan> = plans
        .into_iter()
        .filter(|p| seen.insert((p.destination.name.clone(), p.region())))
        .collect();
    if kept.len() != before {
        log::warn!("dropped {} duplicate persisted plans", before - kept.len());
    }
    kept
}
