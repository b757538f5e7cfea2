/*!
Observations --- total assignments of values to the fluents of a scenario, aka. snapshots of the world.

An observation is immutable once built.
Updates are made by [merging](Observation::merge) some collection of (fluent, value) pairs into a copy of the observation, and:
- Merging never introduces a fluent.
  Each fluent merged must already be part of the observation, else the merge is an [UndefinedFluent](LogicError::UndefinedFluent) error.
- Each fluent may be set at most once in a single merge, else the merge is a [DuplicateAssignment](LogicError::DuplicateAssignment) error.

```rust
# use otter_acts::structures::names::Fluent;
# use otter_acts::structures::observation::Observation;
let before = Observation::from_pairs([(Fluent::from("ready"), false), (Fluent::from("sent"), false)]).unwrap();
let after = before.merge([(Fluent::from("ready"), true)]).unwrap();

assert_eq!(before.get("ready"), Ok(false));
assert_eq!(after.get("ready"), Ok(true));
assert_eq!(after.get("sent"), Ok(false));

assert!(before.merge([(Fluent::from("read"), true)]).is_err());
```
*/

use std::collections::{BTreeMap, BTreeSet};

use crate::types::err::{LogicError, LookupError};

use super::{
    names::Fluent,
    valuation::{Assignment, Valuation},
};

/// A total assignment of values to some finite set of fluents.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Observation {
    values: BTreeMap<Fluent, bool>,
}

impl Observation {
    /// An observation from (fluent, value) pairs, each fluent appearing at most once.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (Fluent, bool)>,
    ) -> Result<Self, LogicError> {
        let mut values = BTreeMap::default();
        for (fluent, value) in pairs {
            if values.contains_key(&fluent) {
                return Err(LogicError::DuplicateAssignment(fluent));
            }
            values.insert(fluent, value);
        }
        Ok(Observation { values })
    }

    /// The observation on which every fluent of `fluents` is false.
    pub fn all_false<'f>(fluents: impl IntoIterator<Item = &'f Fluent>) -> Self {
        Observation {
            values: fluents.into_iter().map(|fluent| (fluent.clone(), false)).collect(),
        }
    }

    /// The value of `fluent`.
    pub fn get(&self, fluent: &str) -> Result<bool, LookupError> {
        match self.values.get(fluent) {
            Some(value) => Ok(*value),
            None => Err(LookupError {
                fluent: Fluent::from(fluent),
            }),
        }
    }

    /// The fluents of the observation.
    pub fn fluents(&self) -> impl Iterator<Item = &Fluent> {
        self.values.keys()
    }

    /// A copy of the observation, with each fluent of `update` given the value paired with it.
    pub fn merge(
        &self,
        update: impl IntoIterator<Item = (Fluent, bool)>,
    ) -> Result<Observation, LogicError> {
        let mut merged = self.clone();
        let mut seen = BTreeSet::default();

        for (fluent, value) in update {
            match merged.values.get_mut(&fluent) {
                None => return Err(LogicError::UndefinedFluent(fluent)),
                Some(held) => *held = value,
            }
            if !seen.insert(fluent.clone()) {
                return Err(LogicError::DuplicateAssignment(fluent));
            }
        }

        Ok(merged)
    }

    /// Whether the observation, restricted to the fluents of some candidate, agrees with the candidate for at least one of the candidates.
    ///
    /// A candidate which values some fluent absent from the observation is an error.
    /// With no candidates the observation is compatible with nothing.
    pub fn is_compatible_with(&self, candidates: &[Assignment]) -> Result<bool, LookupError> {
        'candidate_loop: for candidate in candidates {
            for (fluent, value) in candidate.fluent_value_pairs() {
                if self.get(fluent.name())? != value {
                    continue 'candidate_loop;
                }
            }
            return Ok(true);
        }
        Ok(false)
    }

    /// The fluents whose value differs between the observations.
    ///
    /// Fluents present in only one of the observations are ignored.
    pub fn difference<'o>(&'o self, other: &'o Observation) -> impl Iterator<Item = &'o Fluent> {
        self.values.iter().filter_map(|(fluent, value)| {
            match other.values.get(fluent) {
                Some(other_value) if other_value != value => Some(fluent),
                _ => None,
            }
        })
    }
}

impl Valuation for Observation {
    fn value_of(&self, fluent: &str) -> Option<bool> {
        self.values.get(fluent).copied()
    }

    fn fluent_value_pairs(&self) -> impl Iterator<Item = (&Fluent, bool)> {
        self.values.iter().map(|(fluent, value)| (fluent, *value))
    }

    fn fluent_count(&self) -> usize {
        self.values.len()
    }
}

impl std::fmt::Display for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.valuation_string())
    }
}

#[cfg(test)]
mod observation_tests {
    use super::*;

    fn fluents(names: &[&str]) -> Vec<Fluent> {
        names.iter().map(|name| Fluent::from(*name)).collect()
    }

    #[test]
    fn merge_empty() {
        let observation = Observation::all_false(&fluents(&["a", "b"]));
        assert_eq!(observation.merge([]), Ok(observation.clone()));
    }

    #[test]
    fn merge_projection() {
        let observation = Observation::all_false(&fluents(&["a", "b"]))
            .merge([(Fluent::from("b"), true)])
            .unwrap();
        let projection = [(Fluent::from("a"), false), (Fluent::from("b"), true)];
        assert_eq!(observation.merge(projection), Ok(observation.clone()));
    }

    #[test]
    fn merge_undefined() {
        let observation = Observation::all_false(&fluents(&["a"]));
        assert_eq!(
            observation.merge([(Fluent::from("b"), true)]),
            Err(LogicError::UndefinedFluent(Fluent::from("b")))
        );
    }

    #[test]
    fn merge_duplicate() {
        let observation = Observation::all_false(&fluents(&["a"]));
        let update = [(Fluent::from("a"), true), (Fluent::from("a"), false)];
        assert_eq!(
            observation.merge(update),
            Err(LogicError::DuplicateAssignment(Fluent::from("a")))
        );
    }

    #[test]
    fn from_pairs_duplicate() {
        let pairs = [(Fluent::from("a"), true), (Fluent::from("a"), true)];
        assert!(Observation::from_pairs(pairs).is_err());
    }

    #[test]
    fn compatibility() {
        let observation = Observation::all_false(&fluents(&["a", "b"]))
            .merge([(Fluent::from("a"), true)])
            .unwrap();

        let a: Assignment = [(Fluent::from("a"), true)].into_iter().collect();
        let b: Assignment = [(Fluent::from("b"), true)].into_iter().collect();
        let c: Assignment = [(Fluent::from("c"), true)].into_iter().collect();

        assert_eq!(observation.is_compatible_with(&[b.clone(), a.clone()]), Ok(true));
        assert_eq!(observation.is_compatible_with(&[b]), Ok(false));
        assert_eq!(observation.is_compatible_with(&[]), Ok(false));
        assert_eq!(observation.is_compatible_with(&[Assignment::default()]), Ok(true));
        assert!(observation.is_compatible_with(&[c]).is_err());
    }

    #[test]
    fn difference() {
        let before = Observation::all_false(&fluents(&["a", "b", "c"]));
        let after = before
            .merge([(Fluent::from("b"), true), (Fluent::from("c"), true)])
            .unwrap();
        let changed = before.difference(&after).cloned().collect::<Vec<_>>();
        assert_eq!(changed, fluents(&["b", "c"]));
        assert_eq!(before.difference(&before).count(), 0);
    }
}
