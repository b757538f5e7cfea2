//! Enumeration of the models of a formula.
//!
//! The models of a formula 𝐅 are the assignments to the atoms of 𝐅 on which 𝐅 is true.
//! In other words, all possible worlds consistent with 𝐅, restricted to the fluents 𝐅 is about.
//!
//! # Complexity
//!
//! Enumeration is exponential in the number of distinct atoms of a formula: with *k* atoms each of the 2^*k* assignments is built and evaluated.
//! This is the most expensive primitive of the library, and is called for every constraint, every query on a formula, and every firing which triggers an effect.
//! As such, enumeration is bounded by an atom limit (see [Config](crate::config::Config)) and exceeding the limit is an error, rather than a (very) long wait.

use crate::{
    misc::log::targets,
    structures::{names::Fluent, valuation::Assignment},
    types::err::{self, LimitError},
};

use super::Formula;

/// The largest atom limit representable, as assignments are enumerated through the bits of a u64.
pub const ENUMERATION_BIT_LIMIT: usize = 63;

impl Formula {
    /// Every assignment to the atoms of the formula on which the formula is true, in no particular order.
    ///
    /// - The models of [Top](Formula::Top) are the single empty assignment.
    /// - An unsatisfiable formula has no models.
    ///
    /// ```rust
    /// # use otter_acts::structures::formula::Formula;
    /// let a_or_b = Formula::disjunction(Formula::atom("a"), Formula::atom("b"));
    /// assert_eq!(a_or_b.models(8).unwrap().len(), 3);
    ///
    /// assert_eq!(Formula::Top.models(8).unwrap().len(), 1);
    /// assert!(a_or_b.models(1).is_err());
    /// ```
    pub fn models(&self, atom_limit: usize) -> Result<Vec<Assignment>, err::ErrorKind> {
        let atoms: Vec<Fluent> = self.atoms().into_iter().collect();

        let limit = atom_limit.min(ENUMERATION_BIT_LIMIT);
        if atoms.len() > limit {
            return Err(err::ErrorKind::from(LimitError::Atoms {
                count: atoms.len(),
                limit,
            }));
        }

        let mut models = Vec::default();
        for bits in 0..(1_u64 << atoms.len()) {
            let assignment = assignment_from_bits(&atoms, bits);
            if self.evaluate(&assignment)? {
                models.push(assignment);
            }
        }

        log::trace!(target: targets::FORMULA, "{} model(s) of {self} over {} atom(s)", models.len(), atoms.len());
        Ok(models)
    }
}

/// The assignment to `atoms` where the *i*th atom is true *if and only if* the *i*th bit of `bits` is set.
pub(crate) fn assignment_from_bits(atoms: &[Fluent], bits: u64) -> Assignment {
    atoms
        .iter()
        .enumerate()
        .map(|(index, atom)| (atom.clone(), bits & (1 << index) != 0))
        .collect()
}

#[cfg(test)]
mod model_tests {
    use super::*;
    use crate::structures::valuation::Valuation;

    #[test]
    fn top() {
        let models = Formula::Top.models(4).unwrap();
        assert_eq!(models.len(), 1);
        assert!(models[0].is_empty());
    }

    #[test]
    fn contradiction() {
        let a = Formula::atom("a");
        let a_and_not_a = Formula::conjunction(a.clone(), Formula::negation(a));
        assert!(a_and_not_a.models(4).unwrap().is_empty());
    }

    #[test]
    fn conjunction_of_literals() {
        let formula = Formula::conjunction(
            Formula::atom("ready"),
            Formula::negation(Formula::atom("sent")),
        );
        let models = formula.models(4).unwrap();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].value_of("ready"), Some(true));
        assert_eq!(models[0].value_of("sent"), Some(false));
    }

    #[test]
    fn models_cover_exactly_the_atoms() {
        let formula = Formula::implication(Formula::atom("p"), Formula::atom("q"));
        let models = formula.models(4).unwrap();
        assert_eq!(models.len(), 3);
        for model in &models {
            assert_eq!(model.fluent_count(), 2);
            assert_eq!(formula.evaluate(model), Ok(true));
        }
    }

    #[test]
    fn atom_limit() {
        let formula = Formula::conjunction_of(["a", "b", "c"].map(Formula::atom));
        assert_eq!(
            formula.models(2),
            Err(err::ErrorKind::Limit(LimitError::Atoms { count: 3, limit: 2 }))
        );
        assert_eq!(formula.models(3).unwrap().len(), 1);
    }
}
