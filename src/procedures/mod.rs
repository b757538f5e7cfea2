//! Procedures of a run.
//!
//! For the most part these are methods accessed via a [context](crate::context), and primarily placed here for documentation.
//!
//! - [resolve] determines the successors of an observation on the firing of some event.
//! - [search] drives a scenario's timeline, maintaining the quasi-models which survive each timepoint.

pub mod resolve;
pub mod search;
