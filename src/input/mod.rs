/*!
Structured input --- a scenario and a batch of queries, as a JSON document.

The document is that produced by a front-end which has already parsed any text, and has the shape:

```json
{
  "TIME": { "termination": 5 },
  "STATE": ["letter ready", "letter sent"],
  "AGENT": ["Sender"],
  "ACTION": ["write letter", "send letter"],
  "STATEMENT": [
    { "action": "send letter", "agent": "Sender", "statement_type": "causes",
      "effects": ["letter sent"], "condition": ["letter ready"] }
  ],
  "ACS": [ { "action": "send letter", "agent": "Sender", "time": 1 } ],
  "OBS": [ { "parsed_expression": [["not", "letter sent"]], "time": 0 } ],
  "QUERY": [
    { "query_type": "fluent",
      "concrete_query": { "kind": "necessary", "condition": ["letter sent"], "time": 2 } }
  ]
}
```

`TIME` and `STATE` are required, and every other section defaults to empty.
If `AGENT` or `ACTION` is given, every agent or action used elsewhere must be declared there.

# Formulas

A formula is a nested list of names, read infix:
- The keywords `not`, `and`, `or`, `implies`, and `iff` (or `if and only if`) are operators, and bind in that order, from most to least tightly.
  Binary operators associate to the left.
- A nested list is a parenthesised sub-formula, and so a singleton list is its element.
- An empty list, or `null`, is the empty formula.

The effects of a statement are a list of literals (a name, perhaps preceded by `not`) separated by `and`.
The fluent released by a release statement is the fluent of the first literal of its effects.

# Timepoints

Observations (`OBS`) at the same time are conjoined, and an observation at the time of an event (`ACS`) constrains the timepoint of the event.
Two events at the same time are an error.
*/

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{
    misc::log::targets,
    query::{Mode, Query},
    scenario::Scenario,
    structures::{
        formula::{is_reserved, Formula, Operator, NOT_KEYWORD},
        names::{Action, Agent, Fluent},
        statement::Statement,
        timepoint::{Event, Time, Timepoint},
    },
    types::err::{self, LogicError, ParseError},
};

/// A formula, or list of effects, as a tree of names.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Tree {
    Name(String),
    List(Vec<Tree>),
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TimeSection {
    pub termination: Option<Time>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct StatementEntry {
    pub action: Option<String>,
    pub agent: Option<String>,
    pub statement_type: Option<String>,
    pub effects: Option<Tree>,
    pub condition: Option<Tree>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EventEntry {
    pub action: Option<String>,
    pub agent: Option<String>,
    pub time: Option<Time>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ObservationEntry {
    pub parsed_expression: Option<Tree>,
    pub time: Option<Time>,
}

/// The fields of any concrete query, of which each kind of query reads some.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ConcreteQuery {
    pub kind: Option<String>,
    pub condition: Option<Tree>,
    pub time: Option<Time>,
    pub action: Option<String>,
    pub agent: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct QueryEntry {
    pub query_type: Option<String>,
    pub concrete_query: Option<ConcreteQuery>,
}

/// A structured problem, as deserialised.
#[derive(Clone, Debug, Deserialize)]
pub struct Problem {
    #[serde(rename = "TIME")]
    pub time: Option<TimeSection>,

    #[serde(rename = "STATE")]
    pub states: Option<Vec<String>>,

    #[serde(rename = "AGENT")]
    pub agents: Option<Vec<String>>,

    #[serde(rename = "ACTION")]
    pub actions: Option<Vec<String>>,

    #[serde(rename = "STATEMENT", default)]
    pub statements: Vec<StatementEntry>,

    #[serde(rename = "ACS", default)]
    pub events: Vec<EventEntry>,

    #[serde(rename = "OBS", default)]
    pub observations: Vec<ObservationEntry>,

    #[serde(rename = "QUERY", default)]
    pub queries: Vec<QueryEntry>,
}

/// A scenario, together with queries to answer from a run to the horizon.
#[derive(Debug)]
pub struct Batch {
    pub scenario: Scenario,
    pub queries: Vec<Query>,
    pub horizon: Time,
}

impl Problem {
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        serde_json::from_str(json).map_err(|e| ParseError::Json(e.to_string()))
    }

    /// The scenario, queries, and horizon of the problem.
    pub fn into_batch(self) -> Result<Batch, err::ErrorKind> {
        let horizon = self
            .time
            .as_ref()
            .and_then(|time| time.termination)
            .ok_or(ParseError::MissingField("TIME.termination"))?;

        let states = self.states.as_ref().ok_or(ParseError::MissingField("STATE"))?;
        let mut fluents = Vec::with_capacity(states.len());
        for state in states {
            fluents.push(fluent_from_name(state)?);
        }

        let mut statements = Vec::with_capacity(self.statements.len());
        for entry in &self.statements {
            statements.push(self.statement_from_entry(entry)?);
        }

        let mut timeline: BTreeMap<Time, Timepoint> = BTreeMap::default();
        for entry in &self.events {
            let time = entry.time.ok_or(ParseError::MissingField("ACS.time"))?;
            let event = self.event_from(entry.action.as_deref(), entry.agent.as_deref(), "ACS.action")?;
            if timeline.contains_key(&time) {
                return Err(err::ErrorKind::from(LogicError::DuplicateTime(time)));
            }
            timeline.insert(time, Timepoint::new(time).with_event(event));
        }

        for entry in &self.observations {
            let time = entry.time.ok_or(ParseError::MissingField("OBS.time"))?;
            let constraint = formula_from_option(entry.parsed_expression.as_ref())?;
            let timepoint = timeline
                .remove(&time)
                .unwrap_or_else(|| Timepoint::new(time));
            timeline.insert(time, timepoint.with_constraint(constraint));
        }

        let mut queries = Vec::with_capacity(self.queries.len());
        for entry in &self.queries {
            queries.push(self.query_from_entry(entry)?);
        }

        log::debug!(target: targets::INPUT, "Read {} statement(s), {} timepoint(s), and {} query(s)", statements.len(), timeline.len(), queries.len());

        let scenario = Scenario::new(fluents, timeline.into_values(), statements)?;

        Ok(Batch {
            scenario,
            queries,
            horizon,
        })
    }

    fn statement_from_entry(&self, entry: &StatementEntry) -> Result<Statement, ParseError> {
        let event = self.event_from(entry.action.as_deref(), entry.agent.as_deref(), "STATEMENT.action")?;
        let precondition = formula_from_option(entry.condition.as_ref())?;
        let effects = match &entry.effects {
            Some(tree) => literals_from_tree(tree)?,
            None => Vec::default(),
        };

        let statement_type = entry
            .statement_type
            .as_deref()
            .ok_or(ParseError::MissingField("STATEMENT.statement_type"))?;

        match statement_type {
            "causes" => {
                let effect = Formula::conjunction_of(effects.into_iter().map(|(fluent, value)| {
                    match value {
                        true => Formula::Atom(fluent),
                        false => Formula::negation(Formula::Atom(fluent)),
                    }
                }));
                Ok(Statement::causes(event.action, event.agent, precondition, effect))
            }

            "releases" => match effects.into_iter().next() {
                Some((fluent, _)) => {
                    Ok(Statement::releases(event.action, event.agent, precondition, fluent))
                }
                None => Err(ParseError::MissingField("STATEMENT.effects")),
            },

            unknown => Err(ParseError::UnknownStatementType(unknown.to_string())),
        }
    }

    fn query_from_entry(&self, entry: &QueryEntry) -> Result<Query, ParseError> {
        let query_type = entry
            .query_type
            .as_deref()
            .ok_or(ParseError::MissingField("QUERY.query_type"))?;
        let concrete = entry
            .concrete_query
            .as_ref()
            .ok_or(ParseError::MissingField("QUERY.concrete_query"))?;

        match query_type {
            "fluent" => {
                let mode: Mode = concrete
                    .kind
                    .as_deref()
                    .ok_or(ParseError::MissingField("QUERY.concrete_query.kind"))?
                    .parse()?;
                let time = concrete
                    .time
                    .ok_or(ParseError::MissingField("QUERY.concrete_query.time"))?;
                let formula = formula_from_option(concrete.condition.as_ref())?;
                Ok(Query::Formula {
                    formula,
                    time,
                    mode,
                })
            }

            "action" => {
                let event =
                    self.event_from(concrete.action.as_deref(), concrete.agent.as_deref(), "QUERY.concrete_query.action")?;
                let time = concrete
                    .time
                    .ok_or(ParseError::MissingField("QUERY.concrete_query.time"))?;
                Ok(Query::Action {
                    action: event.action,
                    agent: event.agent,
                    time,
                })
            }

            "agent" => match concrete.agent.as_deref() {
                Some(agent) => Ok(Query::Agent {
                    agent: self.agent_from(agent)?,
                }),
                None => Err(ParseError::MissingField("QUERY.concrete_query.agent")),
            },

            unknown => Err(ParseError::UnknownQueryType(unknown.to_string())),
        }
    }

    fn event_from(
        &self,
        action: Option<&str>,
        agent: Option<&str>,
        action_field: &'static str,
    ) -> Result<Event, ParseError> {
        let action = match action {
            Some(action) => self.action_from(action)?,
            None => return Err(ParseError::MissingField(action_field)),
        };
        let agent = match agent {
            Some(agent) => Some(self.agent_from(agent)?),
            None => None,
        };
        Ok(Event::new(action, agent))
    }

    fn action_from(&self, name: &str) -> Result<Action, ParseError> {
        match &self.actions {
            Some(actions) if !actions.iter().any(|action| action == name) => {
                Err(ParseError::Undeclared("action", name.to_string()))
            }
            _ => Ok(Action::from(name)),
        }
    }

    fn agent_from(&self, name: &str) -> Result<Agent, ParseError> {
        match &self.agents {
            Some(agents) if !agents.iter().any(|agent| agent == name) => {
                Err(ParseError::Undeclared("agent", name.to_string()))
            }
            _ => Ok(Agent::from(name)),
        }
    }
}

fn fluent_from_name(name: &str) -> Result<Fluent, ParseError> {
    match is_reserved(name) {
        true => Err(ParseError::ReservedName(name.to_string())),
        false => Ok(Fluent::from(name)),
    }
}

/// The formula of an optional tree, where the absence of a tree is the empty formula.
pub fn formula_from_option(tree: Option<&Tree>) -> Result<Formula, ParseError> {
    match tree {
        None => Ok(Formula::Top),
        Some(tree) => formula_from_tree(tree),
    }
}

/// The formula of a tree.
///
/// ```rust
/// # use otter_acts::input::{formula_from_tree, Tree};
/// # use otter_acts::structures::formula::Formula;
/// let tree: Tree = serde_json::from_str(r#"["a", "or", ["not", "b"], "and", "c"]"#).unwrap();
/// let expected = Formula::disjunction(
///     Formula::atom("a"),
///     Formula::conjunction(Formula::negation(Formula::atom("b")), Formula::atom("c")),
/// );
/// assert_eq!(formula_from_tree(&tree), Ok(expected));
/// ```
pub fn formula_from_tree(tree: &Tree) -> Result<Formula, ParseError> {
    formula_and_depth(tree).map(|(formula, _)| formula)
}

/// The deepest nesting of operators permitted in a formula read from input.
pub const FORMULA_DEPTH_LIMIT: usize = 1024;

fn formula_and_depth(tree: &Tree) -> Result<(Formula, usize), ParseError> {
    match tree {
        Tree::Name(name) => fluent_from_name(name).map(|fluent| (Formula::Atom(fluent), 1)),
        Tree::List(items) if items.is_empty() => Ok((Formula::Top, 1)),
        Tree::List(items) => {
            let mut parser = InfixParser { items, position: 0 };
            let (formula, depth) = parser.expression(0)?;
            match items.get(parser.position) {
                None => Ok((formula, depth)),
                Some(unexpected) => Err(ParseError::MalformedFormula(format!(
                    "unexpected {unexpected:?} after {formula}"
                ))),
            }
        }
    }
}

/// The depth of a formula with an operator applied to a formula of depth `depth`.
fn deeper(depth: usize) -> Result<usize, ParseError> {
    match depth < FORMULA_DEPTH_LIMIT {
        true => Ok(depth + 1),
        false => Err(ParseError::MalformedFormula(format!(
            "operators nested deeper than {FORMULA_DEPTH_LIMIT}"
        ))),
    }
}

/// Precedence climbing over a list of items.
///
/// Chains of binary operators and of negations are read in loops, and so the recursion of the reader is bounded by the count of precedence levels and the nesting of lists.
struct InfixParser<'t> {
    items: &'t [Tree],
    position: usize,
}

impl InfixParser<'_> {
    fn peek_operator(&self) -> Option<Operator> {
        match self.items.get(self.position) {
            Some(Tree::Name(name)) => Operator::from_keyword(name),
            _ => None,
        }
    }

    fn expression(&mut self, min_precedence: u8) -> Result<(Formula, usize), ParseError> {
        let (mut left, mut depth) = self.operand()?;

        while let Some(operator) = self.peek_operator() {
            if operator.precedence() < min_precedence {
                break;
            }
            self.position += 1;
            let (right, right_depth) = self.expression(operator.precedence() + 1)?;
            depth = deeper(depth.max(right_depth))?;
            left = Formula::binary(operator, left, right);
        }

        Ok((left, depth))
    }

    fn operand(&mut self) -> Result<(Formula, usize), ParseError> {
        let mut negations = 0;
        while let Some(Tree::Name(name)) = self.items.get(self.position) {
            if name != NOT_KEYWORD {
                break;
            }
            negations += 1;
            self.position += 1;
        }

        let item = self.items.get(self.position).ok_or_else(|| {
            ParseError::MalformedFormula("an operator is missing an operand".to_string())
        })?;
        self.position += 1;

        let (mut formula, mut depth) = match item {
            Tree::Name(name) if Operator::from_keyword(name).is_some() => {
                return Err(ParseError::MalformedFormula(format!(
                    "'{name}' where an operand was expected"
                )))
            }
            Tree::Name(name) => (Formula::Atom(fluent_from_name(name)?), 1),
            Tree::List(items) if items.is_empty() => {
                return Err(ParseError::MalformedFormula(
                    "empty sub-formula".to_string(),
                ))
            }
            list => formula_and_depth(list)?,
        };

        for _ in 0..negations {
            depth = deeper(depth)?;
            formula = Formula::negation(formula);
        }
        Ok((formula, depth))
    }
}

/// The literals of a list of effects, as (fluent, value) pairs.
pub fn literals_from_tree(tree: &Tree) -> Result<Vec<(Fluent, bool)>, ParseError> {
    let mut names = Vec::default();
    flatten(tree, &mut names);

    let mut literals = Vec::default();
    let mut negated = false;
    for name in names {
        match name {
            "and" => {
                if negated {
                    return Err(ParseError::MalformedFormula("'not' before 'and'".to_string()));
                }
            }
            NOT_KEYWORD => negated = !negated,
            fluent => {
                literals.push((fluent_from_name(fluent)?, !negated));
                negated = false;
            }
        }
    }

    match negated {
        true => Err(ParseError::MalformedFormula("trailing 'not' in effects".to_string())),
        false => Ok(literals),
    }
}

fn flatten<'t>(tree: &'t Tree, names: &mut Vec<&'t str>) {
    match tree {
        Tree::Name(name) => names.push(name),
        Tree::List(items) => items.iter().for_each(|item| flatten(item, names)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(json: &str) -> Tree {
        serde_json::from_str(json).unwrap()
    }

    fn a() -> Formula {
        Formula::atom("a")
    }

    fn b() -> Formula {
        Formula::atom("b")
    }

    fn c() -> Formula {
        Formula::atom("c")
    }

    #[test]
    fn precedence() {
        assert_eq!(
            formula_from_tree(&tree(r#"["a", "and", "b", "or", "c"]"#)),
            Ok(Formula::disjunction(Formula::conjunction(a(), b()), c()))
        );
        assert_eq!(
            formula_from_tree(&tree(r#"["a", "implies", "b", "if and only if", "c"]"#)),
            Ok(Formula::biconditional(Formula::implication(a(), b()), c()))
        );
        assert_eq!(
            formula_from_tree(&tree(r#"["not", "a", "and", "b"]"#)),
            Ok(Formula::conjunction(Formula::negation(a()), b()))
        );
    }

    #[test]
    fn left_associative() {
        assert_eq!(
            formula_from_tree(&tree(r#"["a", "implies", "b", "implies", "c"]"#)),
            Ok(Formula::implication(Formula::implication(a(), b()), c()))
        );
    }

    #[test]
    fn nesting() {
        assert_eq!(formula_from_tree(&tree(r#"[["a"]]"#)), Ok(a()));
        assert_eq!(formula_from_tree(&tree(r#""a""#)), Ok(a()));
        assert_eq!(formula_from_tree(&tree(r#"[]"#)), Ok(Formula::Top));
        assert_eq!(formula_from_option(None), Ok(Formula::Top));
        assert_eq!(
            formula_from_tree(&tree(r#"["a", "and", ["b", "or", "c"]]"#)),
            Ok(Formula::conjunction(a(), Formula::disjunction(b(), c())))
        );
        assert_eq!(
            formula_from_tree(&tree(r#"["not", ["not", "a"]]"#)),
            Ok(Formula::negation(Formula::negation(a())))
        );
        assert_eq!(
            formula_from_tree(&tree(r#"["not", "not", "a", "or", "not", "b"]"#)),
            Ok(Formula::disjunction(
                Formula::negation(Formula::negation(a())),
                Formula::negation(b())
            ))
        );
    }

    #[test]
    fn depth_is_bounded() {
        let mut negated = vec![Tree::Name(NOT_KEYWORD.to_string()); 1_000_000];
        negated.push(Tree::Name("a".to_string()));
        assert!(matches!(
            formula_from_tree(&Tree::List(negated)),
            Err(ParseError::MalformedFormula(_))
        ));

        let mut chained = vec![Tree::Name("a".to_string())];
        for _ in 0..1_000_000 {
            chained.push(Tree::Name("and".to_string()));
            chained.push(Tree::Name("a".to_string()));
        }
        assert!(matches!(
            formula_from_tree(&Tree::List(chained)),
            Err(ParseError::MalformedFormula(_))
        ));

        let mut shallow = vec![Tree::Name(NOT_KEYWORD.to_string()); FORMULA_DEPTH_LIMIT - 1];
        shallow.push(Tree::Name("a".to_string()));
        assert!(formula_from_tree(&Tree::List(shallow)).is_ok());
    }

    #[test]
    fn malformed() {
        assert!(matches!(
            formula_from_tree(&tree(r#"["a", "and"]"#)),
            Err(ParseError::MalformedFormula(_))
        ));
        assert!(matches!(
            formula_from_tree(&tree(r#"["a", "b"]"#)),
            Err(ParseError::MalformedFormula(_))
        ));
        assert!(matches!(
            formula_from_tree(&tree(r#"["or", "b"]"#)),
            Err(ParseError::MalformedFormula(_))
        ));
        assert_eq!(
            formula_from_tree(&tree(r#""or""#)),
            Err(ParseError::ReservedName("or".to_string()))
        );
    }

    #[test]
    fn effects() {
        let literals = literals_from_tree(&tree(r#"["a", "and", "not", "b"]"#)).unwrap();
        assert_eq!(
            literals,
            vec![(Fluent::from("a"), true), (Fluent::from("b"), false)]
        );

        let literals = literals_from_tree(&tree(r#"[["a"], ["not", "b"]]"#)).unwrap();
        assert_eq!(
            literals,
            vec![(Fluent::from("a"), true), (Fluent::from("b"), false)]
        );

        assert!(literals_from_tree(&tree(r#"["a", "and", "not"]"#)).is_err());
    }

    fn problem(json: &str) -> Problem {
        Problem::from_json(json).unwrap()
    }

    #[test]
    fn observations_conjoin() {
        let batch = problem(
            r#"{
              "TIME": {"termination": 3},
              "STATE": ["john alive", "julia alive"],
              "OBS": [
                {"parsed_expression": [["john alive"]], "time": 0},
                {"parsed_expression": [["julia alive"]], "time": 0}
              ]
            }"#,
        )
        .into_batch()
        .unwrap();

        let timepoints = batch.scenario.timepoints().collect::<Vec<_>>();
        assert_eq!(timepoints.len(), 1);
        assert_eq!(
            timepoints[0].constraint,
            Some(Formula::conjunction(
                Formula::atom("john alive"),
                Formula::atom("julia alive")
            ))
        );
        assert_eq!(batch.horizon, 3);
    }

    #[test]
    fn observation_joins_event() {
        let batch = problem(
            r#"{
              "TIME": {"termination": 3},
              "STATE": ["loaded"],
              "ACS": [{"action": "shoot", "agent": null, "time": 2}],
              "OBS": [{"parsed_expression": ["loaded"], "time": 2}]
            }"#,
        )
        .into_batch()
        .unwrap();

        let timepoint = batch.scenario.timepoint(2).unwrap();
        assert_eq!(timepoint.event, Some(Event::new("shoot", None)));
        assert_eq!(timepoint.constraint, Some(Formula::atom("loaded")));
    }

    #[test]
    fn duplicate_events() {
        let result = problem(
            r#"{
              "TIME": {"termination": 3},
              "STATE": ["loaded"],
              "ACS": [
                {"action": "shoot", "agent": null, "time": 2},
                {"action": "load", "agent": null, "time": 2}
              ]
            }"#,
        )
        .into_batch();
        assert_eq!(
            result.err(),
            Some(err::ErrorKind::from(LogicError::DuplicateTime(2)))
        );
    }

    #[test]
    fn missing_fields() {
        let result = problem(r#"{"STATE": ["loaded"]}"#).into_batch();
        assert_eq!(
            result.err(),
            Some(err::ErrorKind::from(ParseError::MissingField("TIME.termination")))
        );

        let result = problem(r#"{"TIME": {"termination": 1}}"#).into_batch();
        assert_eq!(
            result.err(),
            Some(err::ErrorKind::from(ParseError::MissingField("STATE")))
        );

        assert!(matches!(
            Problem::from_json("{"),
            Err(ParseError::Json(_))
        ));
    }

    #[test]
    fn undeclared_names() {
        let result = problem(
            r#"{
              "TIME": {"termination": 3},
              "STATE": ["loaded"],
              "AGENT": ["Fred"],
              "ACS": [{"action": "shoot", "agent": "Bill", "time": 2}]
            }"#,
        )
        .into_batch();
        assert_eq!(
            result.err(),
            Some(err::ErrorKind::from(ParseError::Undeclared(
                "agent",
                "Bill".to_string()
            )))
        );
    }

    #[test]
    fn statements_and_queries() {
        let batch = problem(
            r#"{
              "TIME": {"termination": 4},
              "STATE": ["loaded", "alive"],
              "STATEMENT": [
                {"action": "load", "agent": null, "statement_type": "causes",
                 "effects": ["loaded"], "condition": null},
                {"action": "spin", "agent": null, "statement_type": "releases",
                 "effects": ["loaded"], "condition": ["loaded"]}
              ],
              "QUERY": [
                {"query_type": "fluent",
                 "concrete_query": {"kind": "possibly", "condition": ["loaded"], "time": 2}},
                {"query_type": "action",
                 "concrete_query": {"action": "spin", "agent": null, "time": 1}},
                {"query_type": "agent", "concrete_query": {"agent": "Fred"}}
              ]
            }"#,
        )
        .into_batch()
        .unwrap();

        assert_eq!(
            batch.scenario.statements(),
            &[
                Statement::causes("load", None, Formula::Top, Formula::atom("loaded")),
                Statement::releases("spin", None, Formula::atom("loaded"), "loaded"),
            ]
        );
        assert_eq!(
            batch.queries,
            vec![
                Query::Formula {
                    formula: Formula::atom("loaded"),
                    time: 2,
                    mode: Mode::Possible
                },
                Query::Action {
                    action: Action::from("spin"),
                    agent: None,
                    time: 1
                },
                Query::Agent {
                    agent: Agent::from("Fred")
                },
            ]
        );
    }

    #[test]
    fn unknown_types() {
        let result = problem(
            r#"{
              "TIME": {"termination": 4},
              "STATE": ["loaded"],
              "STATEMENT": [{"action": "load", "statement_type": "prevents", "effects": ["loaded"]}]
            }"#,
        )
        .into_batch();
        assert_eq!(
            result.err(),
            Some(err::ErrorKind::from(ParseError::UnknownStatementType(
                "prevents".to_string()
            )))
        );
    }
}
