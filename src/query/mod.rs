/*!
Queries, and their evaluation against the quasi-models which survive a run.

- A [formula query](Query::Formula) asks whether a formula holds at some time, either in every surviving quasi-model ([necessarily](Mode::Necessary)) or in some surviving quasi-model ([possibly](Mode::Possible)).
  The observation read from a quasi-model is the latest observation of its history at or before the time of the query.
- An [action query](Query::Action) asks whether, in some surviving quasi-model, an action fired at some time.
  The firing of an action at time *t* is recorded on the entry at time *t* + 1, where the effects of the firing are observed.
- An [agent query](Query::Agent) asks whether an agent is active in every surviving quasi-model.
  An agent is active in a quasi-model if some entry of its history was produced by an event of the agent and differs from the entry before.

Formula and action queries about a time after the horizon of the run are [indeterminate](Answer::Indeterminate), as is a formula query about a time before any entry of some history.

```rust
# use otter_acts::query::{Answer, Mode};
assert_eq!("possibly".parse::<Mode>(), Ok(Mode::Possible));
assert_eq!(Answer::from(true), Answer::True);
assert_eq!(format!("{}", Answer::Indeterminate), "indeterminate");
```
*/

use crate::{
    db::history::QuasiModel,
    misc::log::targets,
    procedures::search::Surviving,
    structures::{
        formula::Formula,
        names::{Action, Agent},
        timepoint::Time,
        valuation::Assignment,
    },
    types::err::{self, ParseError},
};

/// How a formula query quantifies over surviving quasi-models.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// In every surviving quasi-model.
    Necessary,

    /// In some surviving quasi-model.
    Possible,
}

impl std::str::FromStr for Mode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "necessary" | "necessarily" => Ok(Self::Necessary),
            "possible" | "possibly" => Ok(Self::Possible),
            _ => Err(ParseError::UnknownMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Necessary => write!(f, "necessary"),
            Self::Possible => write!(f, "possibly"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
    Formula {
        formula: Formula,
        time: Time,
        mode: Mode,
    },

    /// The agent is optional, and if present must match the agent of the firing.
    Action {
        action: Action,
        agent: Option<Agent>,
        time: Time,
    },

    Agent {
        agent: Agent,
    },
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Formula {
                formula,
                time,
                mode,
            } => write!(f, "{mode} {formula} at {time}"),
            Self::Action {
                action,
                agent: Some(agent),
                time,
            } => write!(f, "{action} by {agent} at {time}"),
            Self::Action {
                action,
                agent: None,
                time,
            } => write!(f, "{action} at {time}"),
            Self::Agent { agent } => write!(f, "{agent} active"),
        }
    }
}

/// The answer to a query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    True,
    False,

    /// The query is about a time the run did not reach.
    Indeterminate,
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        match value {
            true => Self::True,
            false => Self::False,
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::Indeterminate => write!(f, "indeterminate"),
        }
    }
}

impl Surviving {
    /// The answer to `query`.
    pub fn answer(&self, query: &Query) -> Result<Answer, err::ErrorKind> {
        let answer = match query {
            Query::Formula {
                formula,
                time,
                mode,
            } => self.formula_holds(formula, *time, *mode)?,

            Query::Action {
                action,
                agent,
                time,
            } => self.action_performed(action, agent.as_ref(), *time),

            Query::Agent { agent } => Answer::from(self.agent_active(agent)),
        };

        log::debug!(target: targets::QUERY, "{query}: {answer}");
        Ok(answer)
    }

    /// Whether `formula` holds at `time`, quantified over surviving quasi-models by `mode`.
    pub fn formula_holds(
        &self,
        formula: &Formula,
        time: Time,
        mode: Mode,
    ) -> Result<Answer, err::ErrorKind> {
        if time > self.horizon {
            return Ok(Answer::Indeterminate);
        }

        let worlds = formula.models(self.atom_limit)?;

        let mut every = true;
        let mut some = false;
        for model in &self.models {
            match self.compatible_at(*model, &worlds, time)? {
                None => return Ok(Answer::Indeterminate),
                Some(true) => some = true,
                Some(false) => every = false,
            }
        }

        Ok(Answer::from(match mode {
            Mode::Necessary => every,
            Mode::Possible => some,
        }))
    }

    fn compatible_at(
        &self,
        model: QuasiModel,
        worlds: &[Assignment],
        time: Time,
    ) -> Result<Option<bool>, err::ErrorKind> {
        match self.history_db.latest_at_or_before(model, time) {
            None => Ok(None),
            Some(node) => Ok(Some(node.observation().is_compatible_with(worlds)?)),
        }
    }

    /// Whether `action` (by `agent`, if given) fired at `time` in some surviving quasi-model.
    pub fn action_performed(&self, action: &Action, agent: Option<&Agent>, time: Time) -> Answer {
        if time > self.horizon {
            return Answer::Indeterminate;
        }
        // No firing is recorded after the last representable time.
        let Some(recorded_at) = time.checked_add(1) else {
            return Answer::False;
        };

        let performed = self.models.iter().any(|model| {
            self.history_db.ancestry(*model).any(|node| {
                node.time() == recorded_at
                    && node.firing().is_some_and(|firing| {
                        &firing.action == action
                            && agent.map_or(true, |agent| firing.agent.as_ref() == Some(agent))
                    })
            })
        });

        Answer::from(performed)
    }

    /// Whether `agent` changed the world in every surviving quasi-model.
    pub fn agent_active(&self, agent: &Agent) -> bool {
        self.models.iter().all(|model| {
            self.history_db.ancestry(*model).any(|node| {
                let by_agent = node
                    .firing()
                    .is_some_and(|firing| firing.agent.as_ref() == Some(agent));

                by_agent
                    && self.history_db.predecessor(node).is_some_and(|before| {
                        before.observation().difference(node.observation()).next().is_some()
                    })
            })
        })
    }
}
