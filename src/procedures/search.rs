//! Determines the quasi-models of a scenario, up to some horizon.
//!
//! # Overview
//!
//! A run begins with one quasi-model for each [initial candidate](crate::scenario::Scenario::initial_candidates) of the scenario, rooted at the start time of the scenario.
//! Timepoints are then read in ascending order of time, and no timepoint after the horizon is read.
//!
//! At each timepoint:
//!
//! - If the timepoint has a constraint, each quasi-model whose latest observation is incompatible with the constraint is pruned.
//!   + If every quasi-model is pruned the scenario is unrealizable, and the run fails.
//! - If the timepoint has an event, each quasi-model is [resolved](crate::procedures::resolve) on its latest observation with the statements bound to the event.
//!   + If no statement is triggered the quasi-model is unchanged.
//!   + Otherwise, the quasi-model is replaced by one quasi-model for each successor, whose history is extended with the successor at the following time.
//!
//! So, the constraint of a timepoint is checked before the event of the timepoint fires, and the effects of an event at time *t* are observed at time *t* + 1.
//!
//! ```none
//!                  +--------------------+
//!   seed --------->| next timepoint ≤ h |----------> surviving quasi-models
//!                  +--------------------+  none
//!                    |              ⌃
//!                    ⌄              |
//!             +------------+   +-------+
//!             | constraint |-->| event |
//!             +------------+   +-------+
//!                    |
//!                    +--> unrealizable, if nothing survives
//! ```
//!
//! The count of initial candidates is checked against the model limit before any is built, and the count of quasi-models is checked as each quasi-model is extended at an event.
//! The time limit is checked at each timepoint and each resolution.
//!
//! An event at the last representable time has nowhere to record its effects, and is an error.
//!
//! # Example
//!
//! ```rust
//! # use otter_acts::config::Config;
//! # use otter_acts::context::Context;
//! # use otter_acts::scenario::Scenario;
//! # use otter_acts::structures::formula::Formula;
//! # use otter_acts::structures::names::Fluent;
//! # use otter_acts::structures::statement::Statement;
//! # use otter_acts::structures::timepoint::{Event, Timepoint};
//! let loaded = Formula::atom("loaded");
//! let statements = vec![Statement::releases("spin", None, Formula::Top, "loaded")];
//! let timepoints = [
//!     Timepoint::new(0).with_constraint(loaded.clone()),
//!     Timepoint::new(1).with_event(Event::new("spin", None)),
//!     Timepoint::new(3).with_constraint(Formula::negation(loaded)),
//! ];
//! let scenario = Scenario::new(["loaded"].map(Fluent::from), timepoints, statements).unwrap();
//! let the_context = Context::from_config(Config::default(), scenario);
//!
//! assert_eq!(the_context.run(5).unwrap().model_count(), 1);
//! assert_eq!(the_context.run(2).unwrap().model_count(), 2);
//! ```

use crate::{
    context::Context,
    db::history::{HistoryDB, QuasiModel},
    misc::log::targets,
    procedures::resolve::resolve,
    structures::timepoint::Time,
    types::err::{self, LimitError, LogicError},
};

/// The quasi-models which survive a run, together with their histories.
pub struct Surviving {
    pub(crate) history_db: HistoryDB,
    pub(crate) models: Vec<QuasiModel>,
    pub(crate) horizon: Time,
    pub(crate) atom_limit: usize,
}

impl Surviving {
    pub fn history_db(&self) -> &HistoryDB {
        &self.history_db
    }

    pub fn models(&self) -> &[QuasiModel] {
        &self.models
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// The latest time read by the run.
    pub fn horizon(&self) -> Time {
        self.horizon
    }
}

impl Context {
    /// Runs the scenario of the context up to and including `horizon`.
    pub fn run(&self, horizon: Time) -> Result<Surviving, err::ErrorKind> {
        let total_time = std::time::Instant::now();
        let atom_limit = self.config.atom_limit.value;
        let start_time = self.scenario.start_time();

        let mut history_db = HistoryDB::default();

        let candidates = self
            .scenario
            .initial_candidates(atom_limit, self.config.model_limit.value)?;
        if candidates.is_empty() {
            log::info!(target: targets::SEARCH, "No initial candidates at {start_time}");
            return Err(err::ErrorKind::from(LogicError::Unrealizable(start_time)));
        }
        let mut models: Vec<QuasiModel> = candidates
            .into_iter()
            .map(|observation| history_db.root(start_time, observation))
            .collect();

        log::info!(target: targets::SEARCH, "Run from {start_time} to {horizon} with {} quasi-model(s)", models.len());

        for timepoint in self.scenario.timepoints() {
            if timepoint.time > horizon {
                break;
            }
            self.check_time_limit(total_time)?;

            if let Some(constraint) = &timepoint.constraint {
                let worlds = constraint.models(atom_limit)?;
                let mut surviving = Vec::with_capacity(models.len());

                for model in models {
                    let compatible = match history_db.latest(model) {
                        Some(node) => node.observation().is_compatible_with(&worlds)?,
                        None => false,
                    };
                    match compatible {
                        true => surviving.push(model),
                        false => history_db.prune(model),
                    }
                }

                log::debug!(target: targets::SEARCH, "{} quasi-model(s) survive the constraint at {}", surviving.len(), timepoint.time);
                if surviving.is_empty() {
                    return Err(err::ErrorKind::from(LogicError::Unrealizable(
                        timepoint.time,
                    )));
                }
                models = surviving;
            }

            if let Some(event) = &timepoint.event {
                let statements = self.scenario.statements_for(event);
                let mut extended = Vec::with_capacity(models.len());
                let next_time = timepoint
                    .time
                    .checked_add(1)
                    .ok_or(LogicError::TimeOverflow(timepoint.time))?;

                for model in models {
                    self.check_time_limit(total_time)?;

                    let successors = match history_db.latest(model) {
                        Some(node) => resolve(node.observation(), &statements, atom_limit)?,
                        None => continue,
                    };

                    if successors.is_empty() {
                        extended.push(model);
                        continue;
                    }
                    for successor in successors {
                        extended.push(history_db.extend(model, next_time, successor, event.clone()));
                    }
                    self.check_model_limit(extended.len())?;
                }

                log::debug!(target: targets::SEARCH, "{} quasi-model(s) after {event} at {}", extended.len(), timepoint.time);
                models = extended;
            }
        }

        log::info!(target: targets::SEARCH, "{} quasi-model(s) survive, over {} node(s)", models.len(), history_db.len());

        Ok(Surviving {
            history_db,
            models,
            horizon,
            atom_limit,
        })
    }

    fn check_model_limit(&self, count: usize) -> Result<(), LimitError> {
        let limit = self.config.model_limit.value;
        match count > limit {
            true => Err(LimitError::Models { count, limit }),
            false => Ok(()),
        }
    }

    fn check_time_limit(&self, total_time: std::time::Instant) -> Result<(), LimitError> {
        match self.config.time_limit() {
            Some(limit) if total_time.elapsed() > limit => Err(LimitError::TimeLimit),
            _ => Ok(()),
        }
    }
}
