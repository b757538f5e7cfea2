/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when tracing how a scenario unfolds, or why a run failed.

Note, no log implementation is provided by the library.
The cli installs [log4rs](https://docs.rs/log4rs) when built with the `log` feature.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [formulas](crate::structures::formula), and model enumeration in particular
    pub const FORMULA: &str = "formula";

    /// Logs related to [resolution](crate::procedures::resolve) of a firing
    pub const RESOLVE: &str = "resolve";

    /// Logs related to the [search](crate::procedures::search) for quasi-models
    pub const SEARCH: &str = "search";

    /// Logs related to the [history database](crate::db::history)
    pub const HISTORY: &str = "history";

    /// Logs related to [queries](crate::query)
    pub const QUERY: &str = "query";

    /// Logs related to [scenarios](crate::scenario)
    pub const SCENARIO: &str = "scenario";

    /// Logs related to reading [structured input](crate::input)
    pub const INPUT: &str = "input";
}
