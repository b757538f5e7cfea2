/*!
A (partial) function from fluents to truth values.

If every fluent of interest is assigned a value the valuation is 'total', otherwise the valuation is 'partial'.
- A total valuation of a scenario's fluents is an [Observation](crate::structures::observation::Observation).
- A partial valuation is an [Assignment], e.g. a model of a formula over the atoms of the formula.

Formulas are [evaluated](crate::structures::formula::Formula::evaluate) on anything which implements [Valuation], and so the same evaluation serves both for checking a precondition against an observation and for enumerating the models of a formula.

```rust
# use otter_acts::structures::valuation::{Assignment, Valuation};
let mut assignment = Assignment::default();
assignment.insert("sent".into(), true);
assignment.insert("ready".into(), false);

assert_eq!(assignment.value_of("sent"), Some(true));
assert_eq!(assignment.value_of("read"), None);
assert_eq!(assignment.fluent_count(), 2);
```
*/

use std::collections::BTreeMap;

use super::names::Fluent;

/// Something which stores the value of a fluent, or perhaps the information that the fluent has no value.
pub trait Valuation {
    /// The value of a fluent under the valuation, or otherwise nothing.
    fn value_of(&self, fluent: &str) -> Option<bool>;

    /// An iterator through all (fluent, value) pairs, in fluent order.
    fn fluent_value_pairs(&self) -> impl Iterator<Item = (&Fluent, bool)>;

    /// A count of the fluents valued.
    fn fluent_count(&self) -> usize;

    /// A string of the valued fluents, with false fluents prefixed by '-'.
    fn valuation_string(&self) -> String {
        self.fluent_value_pairs()
            .map(|(fluent, value)| match value {
                true => format!("{fluent}"),
                false => format!("-{fluent}"),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A partial assignment of values to fluents, with at most one value for each fluent.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Assignment {
    values: BTreeMap<Fluent, bool>,
}

impl Assignment {
    /// Assigns `value` to `fluent`, returning the previous value of `fluent`, if any.
    pub fn insert(&mut self, fluent: Fluent, value: bool) -> Option<bool> {
        self.values.insert(fluent, value)
    }

    /// Whether some value is assigned to `fluent`.
    pub fn contains(&self, fluent: &str) -> bool {
        self.values.contains_key(fluent)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// A copy of the assignment, extended with `value` for `fluent`.
    pub fn extended(&self, fluent: Fluent, value: bool) -> Self {
        let mut extension = self.clone();
        extension.insert(fluent, value);
        extension
    }

    /// An iterator over owned (fluent, value) pairs, as used to [merge](crate::structures::observation::Observation::merge) an assignment.
    pub fn pairs(&self) -> impl Iterator<Item = (Fluent, bool)> + '_ {
        self.values.iter().map(|(fluent, value)| (fluent.clone(), *value))
    }
}

impl Valuation for Assignment {
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

impl FromIterator<(Fluent, bool)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (Fluent, bool)>>(iter: T) -> Self {
        Assignment {
            values: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.valuation_string())
    }
}
