//! Key structures, such as formulas, observations, and statements.
//!
//! # Languages
//!
//! A scenario is about some finite set of [fluents](names::Fluent), its *domain*.
//! Every [formula](formula) is a formula of the language built from the domain by negation and the [binary operators](formula::Operator).
//!
//! Languages do not have an implementation.
//! Instead the [scenario](crate::scenario) determines the domain, and any formula which mentions a fluent outside the domain is an error when evaluated.
//!
//! # Valuations
//!
//! A valuation may be partial, such as a model of a formula, or total, as an [observation](observation) of the world at some time is.
//! Both are [Valuation](valuation::Valuation)s, and formulas are evaluated in the same way on either.
//!
//! # Time
//!
//! Time is discrete, and a scenario is a collection of [timepoints](timepoint) each of which may carry an [event](timepoint::Event) and/or a constraint.
//! The [statements](statement) of a scenario describe what follows from an event.

pub mod formula;
pub mod names;
pub mod observation;
pub mod statement;
pub mod timepoint;
pub mod valuation;
