//! Points of a timeline.
//!
//! A timepoint is some time, together with (optionally) an [event](Event) which fires at the time and (optionally) a constraint which must hold at the time.
//!
//! When a timepoint carries both, the constraint is checked on the observation holding at the time, and the event then fires.
//! So, the effects of the event are observed at the following time and are not subject to the constraint.

use super::{
    formula::Formula,
    names::{Action, Agent},
};

/// Times are integers.
pub type Time = i64;

/// The firing of an action, perhaps by some agent.
///
/// An event without an agent is distinct from an event with any agent.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Event {
    pub action: Action,
    pub agent: Option<Agent>,
}

impl Event {
    pub fn new(action: impl Into<Action>, agent: Option<Agent>) -> Self {
        Event {
            action: action.into(),
            agent,
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.agent {
            Some(agent) => write!(f, "{}({agent})", self.action),
            None => write!(f, "{}", self.action),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timepoint {
    pub time: Time,
    pub event: Option<Event>,
    pub constraint: Option<Formula>,
}

impl Timepoint {
    /// A timepoint with neither event nor constraint.
    pub fn new(time: Time) -> Self {
        Timepoint {
            time,
            event: None,
            constraint: None,
        }
    }

    pub fn with_event(mut self, event: Event) -> Self {
        self.event = Some(event);
        self
    }

    /// Adds `constraint` to the timepoint, conjoined with any constraint already present.
    pub fn with_constraint(mut self, constraint: Formula) -> Self {
        self.constraint = Some(match self.constraint.take() {
            Some(present) => present.conjoin(constraint),
            None => constraint,
        });
        self
    }

    /// Whether the timepoint has neither event nor constraint.
    pub fn is_empty(&self) -> bool {
        self.event.is_none() && self.constraint.is_none()
    }
}

impl std::fmt::Display for Timepoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t{}", self.time)?;
        if let Some(constraint) = &self.constraint {
            write!(f, " [{constraint}]")?;
        }
        if let Some(event) = &self.event {
            write!(f, " {event}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraints_conjoin() {
        let timepoint = Timepoint::new(2)
            .with_constraint(Formula::atom("a"))
            .with_constraint(Formula::atom("b"));
        assert_eq!(
            timepoint.constraint,
            Some(Formula::conjunction(Formula::atom("a"), Formula::atom("b")))
        );
        assert!(!timepoint.is_empty());
        assert!(Timepoint::new(0).is_empty());
    }

    #[test]
    fn event_display() {
        let event = Event::new("send", Some(Agent::from("Sender")));
        assert_eq!(format!("{event}"), "send(Sender)");
        assert_eq!(format!("{}", Event::new("shoot", None)), "shoot");
    }
}
