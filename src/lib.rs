//! A library for reasoning about actions, the agents who perform them, and the fluents they change, over discrete time.
//!
//! otter_acts interprets a small action language: a domain of boolean [fluents](structures::names::Fluent), a rule base of [statements](structures::statement) which say what follows from an action, and a timeline of [events and constraints](structures::timepoint).
//! From these every history consistent with the timeline is determined, and queries about what must or might be true, what was done, and who did something are answered.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a configuration and a [scenario], either [programatically](scenario::Scenario::new) or from [structured input](input).
//!
//! Internally, and at a high-level, a run is viewed in terms of a growing collection of candidate histories, or quasi-models:
//! - Each quasi-model begins from some observation consistent with the first constraint of the scenario.
//! - At an event, each quasi-model branches on the ways the statements triggered by the event may be [resolved](procedures::resolve).
//! - At a constraint, each quasi-model inconsistent with the constraint is pruned.
//!
//! And, if every quasi-model is pruned the scenario is unrealizable.
//!
//! Useful starting points, then, may be:
//! - The [search procedure](crate::procedures::search) to inspect the dynamics of a run.
//! - The [history database](crate::db::history) to inspect how quasi-models are stored.
//! - The [structures] to familiarise yourself with formulas, observations, statements, and timepoints.
//! - The [queries](crate::query) to see what may be asked of a run.
//!
//! # Examples
//!
//! + The letter scenario: a letter is written, sent, perhaps delivered, and read if delivered.
//!
//! ```rust
//! # use otter_acts::config::Config;
//! # use otter_acts::context::Context;
//! # use otter_acts::query::{Answer, Mode, Query};
//! # use otter_acts::scenario::Scenario;
//! # use otter_acts::structures::formula::Formula;
//! # use otter_acts::structures::names::{Action, Agent, Fluent};
//! # use otter_acts::structures::statement::Statement;
//! # use otter_acts::structures::timepoint::{Event, Timepoint};
//! let sender = Some(Agent::from("Sender"));
//! let postman = Some(Agent::from("Postman"));
//!
//! let statements = vec![
//!     Statement::causes("write", sender.clone(), Formula::Top, Formula::atom("ready")),
//!     Statement::causes("send", sender.clone(), Formula::atom("ready"), Formula::atom("sent")),
//!     Statement::releases("deliver", postman.clone(), Formula::atom("sent"), "delivered"),
//! ];
//!
//! let fluents = ["ready", "sent", "delivered"].map(Fluent::from);
//! let nothing_yet = Formula::conjunction_of(
//!     fluents.clone().map(|fluent| Formula::negation(Formula::from(fluent))),
//! );
//!
//! let timepoints = [
//!     Timepoint::new(0).with_constraint(nothing_yet),
//!     Timepoint::new(1).with_event(Event::new("write", sender.clone())),
//!     Timepoint::new(2).with_event(Event::new("send", sender)),
//!     Timepoint::new(3).with_event(Event::new("deliver", postman)),
//! ];
//!
//! let scenario = Scenario::new(fluents, timepoints, statements).unwrap();
//! let the_context = Context::from_config(Config::default(), scenario);
//!
//! let surviving = the_context.run(5).unwrap();
//! assert_eq!(surviving.model_count(), 2);
//!
//! let delivered = Formula::atom("delivered");
//! let necessarily = Query::Formula { formula: delivered.clone(), time: 4, mode: Mode::Necessary };
//! let possibly = Query::Formula { formula: delivered, time: 4, mode: Mode::Possible };
//!
//! assert_eq!(surviving.answer(&necessarily), Ok(Answer::False));
//! assert_eq!(surviving.answer(&possibly), Ok(Answer::True));
//! ```
//!
//! + Read a problem from structured input.
//!
//! ```rust
//! # use otter_acts::config::Config;
//! # use otter_acts::context::Context;
//! # use otter_acts::input::Problem;
//! # use otter_acts::query::Answer;
//! let json = r#"{
//!   "TIME": {"termination": 3},
//!   "STATE": ["loaded", "alive"],
//!   "STATEMENT": [
//!     {"action": "shoot", "agent": null, "statement_type": "causes",
//!      "effects": ["not", "alive", "and", "not", "loaded"], "condition": ["loaded"]}
//!   ],
//!   "ACS": [{"action": "shoot", "agent": null, "time": 1}],
//!   "OBS": [{"parsed_expression": ["alive", "and", "loaded"], "time": 0}],
//!   "QUERY": [
//!     {"query_type": "fluent",
//!      "concrete_query": {"kind": "possibly", "condition": ["alive"], "time": 2}}
//!   ]
//! }"#;
//!
//! let batch = Problem::from_json(json).unwrap().into_batch().unwrap();
//! let the_context = Context::from_config(Config::default(), batch.scenario);
//! let answers = the_context.answer(&batch.queries, batch.horizon).unwrap();
//! assert_eq!(answers, vec![Answer::False]);
//! ```
//!
//! # Complexity
//!
//! Two things grow quickly:
//! - The models of a formula are enumerated by truth table, and so enumeration is exponential in the count of distinct atoms of the formula.
//! - Each release branches every quasi-model, and so the count of quasi-models may double at each event.
//!
//! Both are bounded by the [configuration](crate::config), and exceeding a bound is an error rather than a (very) long wait.
//! Histories are stored in an arena with shared prefixes, and so branching does not copy a history.
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod procedures;

pub mod config;
pub mod context;
pub mod scenario;
pub mod structures;
pub mod types;

pub mod db;

pub mod input;
pub mod query;

pub mod misc;
