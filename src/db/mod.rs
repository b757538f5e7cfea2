//! Databases for holding information relevant to a run.
//!
//!   - [The history database](crate::db::history)
//!     + An arena of path nodes, each indexed by a [node key](history::NodeKey). \
//!       Every quasi-model is a path through the arena from some root to some leaf, and quasi-models share any common prefix of their paths.

pub mod history;
