/*!
Scenarios --- a domain of fluents, a timeline, and a rule base.

A scenario is built once and is read-only thereafter.
Construction checks that no two timepoints share a time, and timepoints are always read in ascending order of time.

# Initial candidates

The observations a run begins from are the [initial candidates](Scenario::initial_candidates) of the scenario.
These are every observation over the domain compatible with the constraint at the first time of the scenario, if there is one, and every observation over the domain otherwise.

```rust
# use otter_acts::scenario::Scenario;
# use otter_acts::structures::formula::Formula;
# use otter_acts::structures::names::Fluent;
# use otter_acts::structures::timepoint::Timepoint;
let fluents = ["ready", "sent", "read"].map(Fluent::from);
let not_sent = Timepoint::new(0).with_constraint(Formula::negation(Formula::atom("sent")));

let scenario = Scenario::new(fluents, [not_sent], vec![]).unwrap();
assert_eq!(scenario.initial_candidates(8, 1 << 16).unwrap().len(), 4);

let duplicate = Scenario::new(["ready"].map(Fluent::from), [Timepoint::new(1), Timepoint::new(1)], vec![]);
assert!(duplicate.is_err());
```
*/

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    misc::log::targets,
    structures::{
        formula::{
            models::{assignment_from_bits, ENUMERATION_BIT_LIMIT},
            Formula,
        },
        names::Fluent,
        observation::Observation,
        statement::Statement,
        timepoint::{Event, Time, Timepoint},
        valuation::Assignment,
    },
    types::err::{self, LimitError, LogicError},
};

#[derive(Clone, Debug, Default)]
pub struct Scenario {
    fluents: BTreeSet<Fluent>,
    timepoints: BTreeMap<Time, Timepoint>,
    statements: Vec<Statement>,
}

impl Scenario {
    /// A scenario over `fluents`, with the given timepoints and statements.
    ///
    /// Two timepoints with the same time are an error.
    pub fn new(
        fluents: impl IntoIterator<Item = Fluent>,
        timepoints: impl IntoIterator<Item = Timepoint>,
        statements: Vec<Statement>,
    ) -> Result<Self, LogicError> {
        let mut timeline = BTreeMap::default();
        for timepoint in timepoints {
            if timeline.contains_key(&timepoint.time) {
                log::info!(target: targets::SCENARIO, "Duplicate timepoint at {}", timepoint.time);
                return Err(LogicError::DuplicateTime(timepoint.time));
            }
            timeline.insert(timepoint.time, timepoint);
        }

        let scenario = Scenario {
            fluents: fluents.into_iter().collect(),
            timepoints: timeline,
            statements,
        };
        log::debug!(target: targets::SCENARIO, "Scenario over {} fluent(s) with {} timepoint(s) and {} statement(s)", scenario.fluents.len(), scenario.timepoints.len(), scenario.statements.len());

        Ok(scenario)
    }

    /// The domain of the scenario.
    pub fn fluents(&self) -> &BTreeSet<Fluent> {
        &self.fluents
    }

    /// The timepoints of the scenario, in ascending order of time.
    pub fn timepoints(&self) -> impl Iterator<Item = &Timepoint> {
        self.timepoints.values()
    }

    pub fn timepoint(&self, time: Time) -> Option<&Timepoint> {
        self.timepoints.get(&time)
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// The earliest time of the scenario, or zero if the scenario has no timepoints.
    pub fn start_time(&self) -> Time {
        self.timepoints.keys().next().copied().unwrap_or(0)
    }

    /// The latest time of the scenario, or zero if the scenario has no timepoints.
    pub fn end_time(&self) -> Time {
        self.timepoints.keys().next_back().copied().unwrap_or(0)
    }

    /// The statements bound to `event`.
    ///
    /// No statement is bound to an event whose action or agent differs, and so this may well be empty.
    pub fn statements_for(&self, event: &Event) -> Vec<&Statement> {
        self.statements
            .iter()
            .filter(|statement| statement.applies_to(event))
            .collect()
    }

    /// Every observation over the domain which is compatible with the constraint at the start time, if any.
    ///
    /// Each model of the constraint is extended with every assignment to the fluents the constraint does not mention.
    ///
    /// The count of candidates is known before any is built, and a count over `model_limit` is an error.
    pub fn initial_candidates(
        &self,
        atom_limit: usize,
        model_limit: usize,
    ) -> Result<Vec<Observation>, err::ErrorKind> {
        let constraint = self.constraint_at(self.start_time());

        let (models, constrained) = match constraint {
            Some(constraint) => (constraint.models(atom_limit)?, constraint.atoms()),
            None => (vec![Assignment::default()], BTreeSet::default()),
        };

        if let Some(undefined) = constrained.difference(&self.fluents).next() {
            return Err(err::ErrorKind::from(LogicError::UndefinedFluent(
                undefined.clone(),
            )));
        }

        let free: Vec<Fluent> = self.fluents.difference(&constrained).cloned().collect();
        let limit = atom_limit.min(ENUMERATION_BIT_LIMIT);
        if free.len() > limit {
            return Err(err::ErrorKind::from(LimitError::Atoms {
                count: free.len(),
                limit,
            }));
        }

        let count = 1_usize
            .checked_shl(free.len() as u32)
            .and_then(|extensions| extensions.checked_mul(models.len()))
            .unwrap_or(usize::MAX);
        if count > model_limit {
            log::info!(target: targets::SCENARIO, "{count} initial candidate(s) exceed the model limit");
            return Err(err::ErrorKind::from(LimitError::Models {
                count,
                limit: model_limit,
            }));
        }

        let mut candidates = Vec::with_capacity(count);
        for model in &models {
            for bits in 0..(1_u64 << free.len()) {
                let extension = assignment_from_bits(&free, bits);
                let candidate = Observation::from_pairs(model.pairs().chain(extension.pairs()))?;
                candidates.push(candidate);
            }
        }

        log::debug!(target: targets::SCENARIO, "{} initial candidate(s) from {} model(s) of the initial constraint", candidates.len(), models.len());
        Ok(candidates)
    }

    /// The constraint at `time`, if any.
    pub fn constraint_at(&self, time: Time) -> Option<&Formula> {
        self.timepoints
            .get(&time)
            .and_then(|timepoint| timepoint.constraint.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{names::Agent, valuation::Valuation};

    fn letter_fluents() -> [Fluent; 4] {
        ["ready", "sent", "delivered", "read"].map(Fluent::from)
    }

    #[test]
    fn unconstrained_candidates() {
        let scenario = Scenario::new(letter_fluents(), [], vec![]).unwrap();
        let candidates = scenario.initial_candidates(8, 1 << 16).unwrap();
        assert_eq!(candidates.len(), 16);

        let distinct: BTreeSet<_> = candidates.iter().collect();
        assert_eq!(distinct.len(), 16);
        assert!(candidates.iter().all(|c| c.fluent_count() == 4));
        assert_eq!(scenario.start_time(), 0);
    }

    #[test]
    fn constrained_candidates() {
        let all_false = Formula::conjunction_of(
            letter_fluents().map(|fluent| Formula::negation(Formula::from(fluent))),
        );
        let scenario = Scenario::new(
            letter_fluents(),
            [Timepoint::new(0).with_constraint(all_false)],
            vec![],
        )
        .unwrap();

        let candidates = scenario.initial_candidates(8, 1 << 16).unwrap();
        assert_eq!(candidates, vec![Observation::all_false(&letter_fluents())]);
    }

    #[test]
    fn constraint_outside_domain() {
        let scenario = Scenario::new(
            letter_fluents(),
            [Timepoint::new(0).with_constraint(Formula::atom("loaded"))],
            vec![],
        )
        .unwrap();
        assert_eq!(
            scenario.initial_candidates(8, 1 << 16),
            Err(err::ErrorKind::from(LogicError::UndefinedFluent(Fluent::from("loaded"))))
        );
    }

    #[test]
    fn only_the_first_constraint_seeds() {
        let scenario = Scenario::new(
            letter_fluents(),
            [
                Timepoint::new(1).with_event(Event::new("write", None)),
                Timepoint::new(2).with_constraint(Formula::atom("ready")),
            ],
            vec![],
        )
        .unwrap();
        assert_eq!(scenario.start_time(), 1);
        assert_eq!(scenario.end_time(), 2);
        assert_eq!(scenario.initial_candidates(8, 1 << 16).unwrap().len(), 16);
    }

    #[test]
    fn candidates_are_counted_before_they_are_built() {
        let scenario = Scenario::new(letter_fluents(), [], vec![]).unwrap();
        assert_eq!(
            scenario.initial_candidates(8, 15),
            Err(err::ErrorKind::from(LimitError::Models { count: 16, limit: 15 }))
        );
        assert_eq!(scenario.initial_candidates(8, 16).unwrap().len(), 16);

        let many = (0..20).map(|index| Fluent::new(format!("f{index}")));
        let scenario = Scenario::new(many, [], vec![]).unwrap();
        assert_eq!(
            scenario.initial_candidates(20, 1),
            Err(err::ErrorKind::from(LimitError::Models { count: 1 << 20, limit: 1 }))
        );
    }

    #[test]
    fn statement_filtering() {
        let sender = Some(Agent::from("Sender"));
        let statements = vec![
            Statement::causes("write", sender.clone(), Formula::Top, Formula::atom("ready")),
            Statement::causes("send", sender.clone(), Formula::atom("ready"), Formula::atom("sent")),
            Statement::causes("write", None, Formula::Top, Formula::atom("read")),
        ];
        let scenario = Scenario::new(letter_fluents(), [], statements).unwrap();

        assert_eq!(scenario.statements_for(&Event::new("write", sender)).len(), 1);
        assert_eq!(scenario.statements_for(&Event::new("write", None)).len(), 1);
        assert!(scenario
            .statements_for(&Event::new("read", Some(Agent::from("Receiver"))))
            .is_empty());
    }
}
