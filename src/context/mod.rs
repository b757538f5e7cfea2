/*!
The context --- within which a scenario is run and queries are answered.

A context is made from a [configuration](crate::config::Config) and a [scenario](crate::scenario::Scenario), both of which are fixed thereafter.

Each [run](Context::run) of a context is independent of any other run, and is deterministic given the context and horizon.
So, a batch of queries with a shared horizon is [answered](Context::answer) from a single run, and an error in the run is an error for every query of the batch.

# Example
```rust
# use otter_acts::config::Config;
# use otter_acts::context::Context;
# use otter_acts::query::{Answer, Mode, Query};
# use otter_acts::scenario::Scenario;
# use otter_acts::structures::formula::Formula;
# use otter_acts::structures::names::{Action, Agent, Fluent};
# use otter_acts::structures::statement::Statement;
# use otter_acts::structures::timepoint::{Event, Timepoint};
let shooter = Some(Agent::from("Fred"));
let statements = vec![
    Statement::causes("load", shooter.clone(), Formula::Top, Formula::atom("loaded")),
    Statement::causes(
        "shoot",
        shooter.clone(),
        Formula::atom("loaded"),
        Formula::negation(Formula::disjunction(Formula::atom("loaded"), Formula::atom("alive"))),
    ),
];
let timepoints = [
    Timepoint::new(0).with_constraint(Formula::atom("alive")),
    Timepoint::new(1).with_event(Event::new("load", shooter.clone())),
    Timepoint::new(3).with_event(Event::new("shoot", shooter.clone())),
];
let scenario = Scenario::new(["loaded", "alive"].map(Fluent::from), timepoints, statements).unwrap();
let the_context = Context::from_config(Config::default(), scenario);

let queries = [
    Query::Formula { formula: Formula::atom("alive"), time: 4, mode: Mode::Necessary },
    Query::Action { action: Action::from("shoot"), agent: None, time: 3 },
    Query::Agent { agent: Agent::from("Fred") },
    Query::Formula { formula: Formula::atom("alive"), time: 9, mode: Mode::Possible },
];

let answers = the_context.answer(&queries, 5).unwrap();
assert_eq!(answers, vec![Answer::False, Answer::True, Answer::True, Answer::Indeterminate]);
```
*/

use crate::{
    config::Config,
    misc::log::targets,
    query::{Answer, Query},
    scenario::Scenario,
    structures::timepoint::Time,
    types::err,
};

pub struct Context {
    /// The configuration of a context.
    pub config: Config,

    /// The scenario run by the context.
    pub scenario: Scenario,
}

impl Context {
    /// Creates a context from some given configuration and scenario.
    pub fn from_config(config: Config, scenario: Scenario) -> Self {
        Self { config, scenario }
    }

    /// The answer to each of `queries`, from a single run to `horizon`.
    pub fn answer(&self, queries: &[Query], horizon: Time) -> Result<Vec<Answer>, err::ErrorKind> {
        let surviving = self.run(horizon)?;
        log::info!(target: targets::QUERY, "Answering {} query(s)", queries.len());

        queries.iter().map(|query| surviving.answer(query)).collect()
    }

    /// The answer to `query`, from a run to `horizon`.
    pub fn query(&self, query: &Query, horizon: Time) -> Result<Answer, err::ErrorKind> {
        self.run(horizon)?.answer(query)
    }
}
