/*!
Statements --- the causal rules of a scenario.

Each statement is bound to an [event](Event), i.e. an action together with the agent (if any) which performs the action, and has a precondition.
When the event fires on some observation on which the precondition holds, the statement is *triggered*, and:
- A triggered [effect](EffectStatement) fixes the observation at the next time to one of the models of the effect.
- A triggered [release](ReleaseStatement) frees a fluent, so either value of the fluent is admissible at the next time.

See [resolve](crate::procedures::resolve) for how the triggered statements of a firing combine.
*/

use crate::types::err::LookupError;

use super::{
    formula::Formula,
    names::{Action, Agent, Fluent},
    observation::Observation,
    timepoint::Event,
};

/// A deterministic causal rule: `action by agent causes effect if precondition`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectStatement {
    pub event: Event,
    pub precondition: Formula,
    pub effect: Formula,
}

/// A nondeterministic causal rule: `action by agent releases fluent if precondition`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReleaseStatement {
    pub event: Event,
    pub precondition: Formula,
    pub fluent: Fluent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    Effect(EffectStatement),
    Release(ReleaseStatement),
}

impl Statement {
    /// `action` by `agent` causes `effect` if `precondition`.
    pub fn causes(
        action: impl Into<Action>,
        agent: Option<Agent>,
        precondition: Formula,
        effect: Formula,
    ) -> Self {
        Self::Effect(EffectStatement {
            event: Event::new(action, agent),
            precondition,
            effect,
        })
    }

    /// `action` by `agent` releases `fluent` if `precondition`.
    pub fn releases(
        action: impl Into<Action>,
        agent: Option<Agent>,
        precondition: Formula,
        fluent: impl Into<Fluent>,
    ) -> Self {
        Self::Release(ReleaseStatement {
            event: Event::new(action, agent),
            precondition,
            fluent: fluent.into(),
        })
    }

    pub fn event(&self) -> &Event {
        match self {
            Self::Effect(statement) => &statement.event,
            Self::Release(statement) => &statement.event,
        }
    }

    pub fn action(&self) -> &Action {
        &self.event().action
    }

    pub fn agent(&self) -> Option<&Agent> {
        self.event().agent.as_ref()
    }

    pub fn precondition(&self) -> &Formula {
        match self {
            Self::Effect(statement) => &statement.precondition,
            Self::Release(statement) => &statement.precondition,
        }
    }

    /// Whether the statement is bound to `event`, matching both action and agent exactly.
    pub fn applies_to(&self, event: &Event) -> bool {
        self.event() == event
    }

    /// Whether the precondition of the statement holds on `observation`.
    pub fn is_triggered(&self, observation: &Observation) -> Result<bool, LookupError> {
        self.precondition().evaluate(observation)
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Effect(statement) => write!(f, "{} causes {}", statement.event, statement.effect)?,
            Self::Release(statement) => {
                write!(f, "{} releases {}", statement.event, statement.fluent)?
            }
        }
        let precondition = self.precondition();
        match precondition.is_top() {
            true => Ok(()),
            false => write!(f, " if {precondition}"),
        }
    }
}
