/*!
Resolves the firing of an event on an observation to the admissible successor observations.

# Overview

Given an observation and the statements bound to some event, resolution:

1. Conjoins the effects of each triggered [effect statement](crate::structures::statement::EffectStatement).
2. Enumerates the models of the conjoined effect, each of which is a candidate assignment of the fluents the effects are about.
   + If no effect statement is triggered, the conjoined effect is [Top](crate::structures::formula::Formula::Top) and the only candidate is the empty assignment.
   + If some effect statement is triggered and the conjoined effect has no models, the effects contradict each other, and this is an error.
3. Branches each candidate on the fluent of each triggered [release statement](crate::structures::statement::ReleaseStatement), with one branch for each value of the fluent.
   + If the released fluent is fixed by the conjoined effect, the effect and release statements conflict, and this is an error.
   + A fluent released by two triggered statements is branched on once.
4. Merges each candidate into a copy of the observation.

So, with *m* models of the conjoined effect and *r* distinct released fluents, there are m·2^r successors.

If no statement is triggered, there are no successors.
This is distinct from a firing whose only successor is the observation itself, and callers are to read the absence of successors as the observation being unchanged.

The observation given is never mutated.

# Example

```rust
# use otter_acts::procedures::resolve::resolve;
# use otter_acts::structures::formula::Formula;
# use otter_acts::structures::names::Fluent;
# use otter_acts::structures::observation::Observation;
# use otter_acts::structures::statement::Statement;
let observation = Observation::all_false(&["sent", "delivered"].map(Fluent::from))
    .merge([(Fluent::from("sent"), true)])
    .unwrap();

let deliver = Statement::releases("deliver", None, Formula::atom("sent"), "delivered");

let successors = resolve(&observation, &[&deliver], 8).unwrap();
assert_eq!(successors.len(), 2);
assert!(successors.contains(&observation));
```

# Duplicates

Successors are never duplicates of one another.
Each candidate is an assignment to the same fluents as every other candidate, no two candidates agree on every such fluent, and merging overwrites exactly those fluents.
*/

use std::collections::BTreeSet;

use crate::{
    misc::log::targets,
    structures::{
        formula::{models::ENUMERATION_BIT_LIMIT, Formula},
        names::Fluent,
        observation::Observation,
        statement::Statement,
    },
    types::err::{self, LimitError, LogicError},
};

/// The successors of `observation`, given `statements` are the statements bound to the event fired.
///
/// Any statement given is assumed to be bound to the event, and no check is made.
pub fn resolve(
    observation: &Observation,
    statements: &[&Statement],
    atom_limit: usize,
) -> Result<Vec<Observation>, err::ErrorKind> {
    let mut effect = Formula::Top;
    let mut effect_triggered = false;
    let mut released: Vec<&Fluent> = Vec::default();

    for statement in statements {
        if !statement.is_triggered(observation)? {
            continue;
        }
        log::trace!(target: targets::RESOLVE, "Triggered: {statement}");

        match statement {
            Statement::Effect(effect_statement) => {
                effect_triggered = true;
                effect = effect.conjoin(effect_statement.effect.clone());
            }
            Statement::Release(release_statement) => released.push(&release_statement.fluent),
        }
    }

    if !effect_triggered && released.is_empty() {
        log::trace!(target: targets::RESOLVE, "No statement triggered on {observation}");
        return Ok(Vec::default());
    }

    let mut candidates = effect.models(atom_limit)?;
    if candidates.is_empty() {
        log::info!(target: targets::RESOLVE, "Contradictory effect: {effect}");
        return Err(err::ErrorKind::from(LogicError::ContradictoryEffects));
    }

    let fixed = effect.atoms();
    let mut branched: BTreeSet<&Fluent> = BTreeSet::default();

    for fluent in released {
        if fixed.contains(fluent) {
            log::info!(target: targets::RESOLVE, "Conflict on {fluent}");
            return Err(err::ErrorKind::from(LogicError::EffectReleaseConflict(
                fluent.clone(),
            )));
        }
        if !branched.insert(fluent) {
            continue;
        }

        let count = fixed.len() + branched.len();
        let limit = atom_limit.min(ENUMERATION_BIT_LIMIT);
        if count > limit {
            return Err(err::ErrorKind::from(LimitError::Atoms { count, limit }));
        }

        candidates = candidates
            .into_iter()
            .flat_map(|candidate| {
                [
                    candidate.extended(fluent.clone(), true),
                    candidate.extended(fluent.clone(), false),
                ]
            })
            .collect();
    }

    let successors = candidates
        .iter()
        .map(|candidate| observation.merge(candidate.pairs()))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(target: targets::RESOLVE, "{} successor(s) of {observation}", successors.len());
    Ok(successors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::names::Agent;

    fn letter_observation(pairs: &[(&str, bool)]) -> Observation {
        let base = Observation::all_false(&["ready", "sent", "delivered", "read"].map(Fluent::from));
        base.merge(pairs.iter().map(|(name, value)| (Fluent::from(*name), *value)))
            .unwrap()
    }

    #[test]
    fn nothing_triggered() {
        let observation = letter_observation(&[]);
        let send = Statement::causes("send", None, Formula::atom("ready"), Formula::atom("sent"));
        assert_eq!(resolve(&observation, &[&send], 8), Ok(vec![]));
        assert_eq!(resolve(&observation, &[], 8), Ok(vec![]));
    }

    #[test]
    fn effect_is_forced() {
        let observation = letter_observation(&[("ready", true)]);
        let send = Statement::causes(
            "send",
            Some(Agent::from("Sender")),
            Formula::atom("ready"),
            Formula::conjunction(Formula::atom("sent"), Formula::negation(Formula::atom("ready"))),
        );

        let successors = resolve(&observation, &[&send], 8).unwrap();
        assert_eq!(successors, vec![letter_observation(&[("sent", true)])]);
    }

    #[test]
    fn effects_conjoin() {
        let observation = letter_observation(&[]);
        let one = Statement::causes("act", None, Formula::Top, Formula::atom("ready"));
        let other = Statement::causes(
            "act",
            None,
            Formula::Top,
            Formula::disjunction(Formula::atom("sent"), Formula::atom("read")),
        );

        let successors = resolve(&observation, &[&one, &other], 8).unwrap();
        assert_eq!(successors.len(), 3);
        assert!(successors.iter().all(|s| s.get("ready") == Ok(true)));
    }

    #[test]
    fn contradictory_effects() {
        let observation = letter_observation(&[]);
        let one = Statement::causes("act", None, Formula::Top, Formula::atom("ready"));
        let other = Statement::causes(
            "act",
            None,
            Formula::Top,
            Formula::negation(Formula::atom("ready")),
        );
        assert_eq!(
            resolve(&observation, &[&one, &other], 8),
            Err(err::ErrorKind::from(LogicError::ContradictoryEffects))
        );
    }

    #[test]
    fn duplicate_release_branches_once() {
        let observation = letter_observation(&[]);
        let one = Statement::releases("act", None, Formula::Top, "read");
        let other = Statement::releases("act", None, Formula::Top, "read");
        assert_eq!(resolve(&observation, &[&one, &other], 8).unwrap().len(), 2);
    }

    #[test]
    fn released_fluent_outside_domain() {
        let observation = letter_observation(&[]);
        let release = Statement::releases("act", None, Formula::Top, "loaded");
        assert_eq!(
            resolve(&observation, &[&release], 8),
            Err(err::ErrorKind::from(LogicError::UndefinedFluent(Fluent::from("loaded"))))
        );
    }

    #[test]
    fn release_respects_atom_limit() {
        let observation = letter_observation(&[]);
        let effect = Statement::causes("act", None, Formula::Top, Formula::atom("ready"));
        let release = Statement::releases("act", None, Formula::Top, "read");

        assert!(resolve(&observation, &[&effect, &release], 2).is_ok());
        assert_eq!(
            resolve(&observation, &[&effect, &release], 1),
            Err(err::ErrorKind::from(LimitError::Atoms { count: 2, limit: 1 }))
        );
    }
}
