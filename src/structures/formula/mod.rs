/*!
Propositional formulas over fluents.

A formula is a tree whose leaves are fluents, and whose internal nodes are either a negation of one formula, or some [binary operator](Operator) applied to two formulas.
The empty formula [Top](Formula::Top) is the constant 'true', and is used for vacuous preconditions.

A formula is [evaluated](Formula::evaluate) on some [valuation](crate::structures::valuation::Valuation):
- ¬a is true *if and only if* a is false.
- a ∧ b, a ∨ b, and a → b are as usual, with a → b read as ¬a ∨ b.
- a ↔ b is true *if and only if* a and b have the same value.

Evaluation is strict: a fluent which is not part of the valuation is a [LookupError], and is never read as false.

```rust
# use otter_acts::structures::formula::Formula;
# use otter_acts::structures::observation::Observation;
# use otter_acts::structures::names::Fluent;
let ready = Formula::atom("ready");
let sent = Formula::atom("sent");
let formula = Formula::implication(sent, ready);

let observation = Observation::from_pairs([(Fluent::from("ready"), false), (Fluent::from("sent"), false)]).unwrap();
assert_eq!(formula.evaluate(&observation), Ok(true));

let missing = Formula::atom("read");
assert!(missing.evaluate(&observation).is_err());
```

# Keywords

The keywords of the [operators](Operator), together with `not`, are reserved and do not name fluents.
See [is_reserved].
*/

pub mod models;

use std::collections::BTreeSet;

use crate::types::err::LookupError;

use super::{names::Fluent, valuation::Valuation};

/// The keyword for negation.
pub const NOT_KEYWORD: &str = "not";

/// Binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    And,
    Or,
    Implies,
    Iff,
}

impl Operator {
    /// The value of the operator applied to `left` and `right`.
    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            Self::And => left && right,
            Self::Or => left || right,
            Self::Implies => !left || right,
            Self::Iff => left == right,
        }
    }

    /// The operator with the given keyword, if any.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "and" => Some(Self::And),
            "or" => Some(Self::Or),
            "implies" => Some(Self::Implies),
            "iff" | "if and only if" => Some(Self::Iff),
            _ => None,
        }
    }

    /// The (canonical) keyword of the operator.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Implies => "implies",
            Self::Iff => "iff",
        }
    }

    /// Binding strength, with higher values binding more tightly.
    /// Negation binds more tightly than any binary operator.
    pub fn precedence(self) -> u8 {
        match self {
            Self::And => 4,
            Self::Or => 3,
            Self::Implies => 2,
            Self::Iff => 1,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Whether `name` is a keyword, and so cannot name a fluent.
pub fn is_reserved(name: &str) -> bool {
    name == NOT_KEYWORD || Operator::from_keyword(name).is_some()
}

/// A propositional formula.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Formula {
    /// The empty formula, true on every valuation.
    #[default]
    Top,

    /// A fluent.
    Atom(Fluent),

    /// The negation of a formula.
    Not(Box<Formula>),

    /// Some binary operator applied to two formulas.
    Binary(Operator, Box<Formula>, Box<Formula>),
}

impl Formula {
    pub fn atom(fluent: impl Into<Fluent>) -> Self {
        Self::Atom(fluent.into())
    }

    pub fn negation(formula: Formula) -> Self {
        Self::Not(Box::new(formula))
    }

    pub fn binary(operator: Operator, left: Formula, right: Formula) -> Self {
        Self::Binary(operator, Box::new(left), Box::new(right))
    }

    pub fn conjunction(left: Formula, right: Formula) -> Self {
        Self::binary(Operator::And, left, right)
    }

    pub fn disjunction(left: Formula, right: Formula) -> Self {
        Self::binary(Operator::Or, left, right)
    }

    pub fn implication(left: Formula, right: Formula) -> Self {
        Self::binary(Operator::Implies, left, right)
    }

    pub fn biconditional(left: Formula, right: Formula) -> Self {
        Self::binary(Operator::Iff, left, right)
    }

    /// The conjunction of `self` and `other`, where conjunction with [Top](Formula::Top) is identity.
    pub fn conjoin(self, other: Formula) -> Self {
        match (self, other) {
            (Self::Top, other) => other,
            (formula, Self::Top) => formula,
            (formula, other) => Self::conjunction(formula, other),
        }
    }

    /// The conjunction of every formula in `formulas`, or [Top](Formula::Top) if there are none.
    pub fn conjunction_of(formulas: impl IntoIterator<Item = Formula>) -> Self {
        formulas
            .into_iter()
            .fold(Self::Top, |conjunction, formula| conjunction.conjoin(formula))
    }

    /// Whether the formula is the empty formula.
    pub fn is_top(&self) -> bool {
        matches!(self, Self::Top)
    }

    /// The value of the formula on `valuation`.
    ///
    /// Any fluent of the formula absent from `valuation` is an error.
    pub fn evaluate<V: Valuation>(&self, valuation: &V) -> Result<bool, LookupError> {
        match self {
            Self::Top => Ok(true),

            Self::Atom(fluent) => match valuation.value_of(fluent.name()) {
                Some(value) => Ok(value),
                None => Err(LookupError {
                    fluent: fluent.clone(),
                }),
            },

            Self::Not(formula) => Ok(!formula.evaluate(valuation)?),

            Self::Binary(operator, left, right) => {
                let left = left.evaluate(valuation)?;
                let right = right.evaluate(valuation)?;
                Ok(operator.apply(left, right))
            }
        }
    }

    /// The distinct fluents appearing in the formula.
    pub fn atoms(&self) -> BTreeSet<Fluent> {
        let mut atoms = BTreeSet::default();
        self.collect_atoms(&mut atoms);
        atoms
    }

    fn collect_atoms(&self, atoms: &mut BTreeSet<Fluent>) {
        match self {
            Self::Top => {}
            Self::Atom(fluent) => {
                atoms.insert(fluent.clone());
            }
            Self::Not(formula) => formula.collect_atoms(atoms),
            Self::Binary(_, left, right) => {
                left.collect_atoms(atoms);
                right.collect_atoms(atoms);
            }
        }
    }
}

impl From<Fluent> for Formula {
    fn from(fluent: Fluent) -> Self {
        Self::Atom(fluent)
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Top => write!(f, "⊤"),
            Self::Atom(fluent) => write!(f, "{fluent}"),
            Self::Not(formula) => write!(f, "not {formula}"),
            Self::Binary(operator, left, right) => write!(f, "({left} {operator} {right})"),
        }
    }
}

#[cfg(test)]
mod formula_tests {
    use super::*;
    use crate::structures::valuation::Assignment;

    fn valuation(pairs: &[(&str, bool)]) -> Assignment {
        pairs
            .iter()
            .map(|(name, value)| (Fluent::from(*name), *value))
            .collect()
    }

    #[test]
    fn top_is_true() {
        assert_eq!(Formula::Top.evaluate(&Assignment::default()), Ok(true));
    }

    #[test]
    fn operators() {
        let v = valuation(&[("a", false), ("b", true)]);
        let a = Formula::atom("a");
        let b = Formula::atom("b");

        assert_eq!(a.evaluate(&v), Ok(false));
        assert_eq!(Formula::negation(a.clone()).evaluate(&v), Ok(true));
        assert_eq!(Formula::conjunction(a.clone(), b.clone()).evaluate(&v), Ok(false));
        assert_eq!(Formula::disjunction(a.clone(), b.clone()).evaluate(&v), Ok(true));
        assert_eq!(Formula::implication(a.clone(), b.clone()).evaluate(&v), Ok(true));
        assert_eq!(Formula::implication(b.clone(), a.clone()).evaluate(&v), Ok(false));
        assert_eq!(Formula::biconditional(a, b).evaluate(&v), Ok(false));
    }

    #[test]
    fn nested() {
        let v = valuation(&[("a", true), ("b", false), ("c", true)]);
        let b_iff_c = Formula::biconditional(Formula::atom("b"), Formula::atom("c"));
        let a_and_b_iff_c = Formula::conjunction(Formula::atom("a"), b_iff_c);

        assert_eq!(a_and_b_iff_c.evaluate(&v), Ok(false));

        let either = Formula::disjunction(a_and_b_iff_c.clone(), a_and_b_iff_c);
        assert_eq!(either.evaluate(&v), Ok(false));

        let b_or_c = Formula::disjunction(Formula::atom("b"), Formula::atom("c"));
        assert_eq!(
            Formula::conjunction(Formula::atom("a"), b_or_c).evaluate(&v),
            Ok(true)
        );
    }

    #[test]
    fn missing_fluent() {
        let v = valuation(&[("a", true)]);
        let formula = Formula::disjunction(Formula::atom("a"), Formula::atom("b"));
        assert_eq!(
            formula.evaluate(&v),
            Err(LookupError {
                fluent: Fluent::from("b")
            })
        );
    }

    #[test]
    fn atoms_are_distinct() {
        let formula = Formula::conjunction(
            Formula::atom("a"),
            Formula::disjunction(Formula::atom("b"), Formula::negation(Formula::atom("a"))),
        );
        let atoms = formula.atoms();
        assert_eq!(atoms.len(), 2);
        assert!(atoms.contains("a") && atoms.contains("b"));
        assert!(Formula::Top.atoms().is_empty());
    }

    #[test]
    fn conjoin_top() {
        let a = Formula::atom("a");
        assert_eq!(Formula::Top.conjoin(a.clone()), a);
        assert_eq!(a.clone().conjoin(Formula::Top), a);
        assert_eq!(Formula::conjunction_of([]), Formula::Top);
    }

    #[test]
    fn keywords() {
        assert!(is_reserved("not"));
        assert!(is_reserved("if and only if"));
        assert!(!is_reserved("letter sent"));
        assert_eq!(Operator::from_keyword("iff"), Some(Operator::Iff));
    }
}
