//! Table-driven finite state machines.
//!
//! Transitions are plain data: each row names an event, the states it may fire
//! from, and the state it lands in. Entities look up their next state here
//! instead of hand-coding the rules in match arms.

use std::fmt::Debug;

/// One row of a transition table.
#[derive(Debug)]
pub struct Transition<S: 'static, E: 'static> {
    pub event: E,
    pub from: &'static [S],
    pub to: S,
}

#[derive(Debug)]
pub struct StateMachine<S: 'static, E: 'static> {
    transitions: &'static [Transition<S, E>],
}

impl<S, E> StateMachine<S, E>
where
    S: Copy + PartialEq + Debug,
    E: Copy + PartialEq + Debug,
{
    pub const fn new(transitions: &'static [Transition<S, E>]) -> Self {
        Self { transitions }
    }

    /// Returns the target state if `event` may fire from `from`.
    pub fn next(&self, from: S, event: E) -> Option<S> {
        self.transitions
            .iter()
            .find(|t| t.event == event && t.from.contains(&from))
            .map(|t| t.to)
    }

    #[cfg(test)]
    pub fn can_fire(&self, from: S, event: E) -> bool {
        self.next(from, event).is_some()
    }

    /// Events that may fire from `from`, in table order.
    #[cfg(test)]
    pub fn events_from(&self, from: S) -> Vec<E> {
        let mut events: Vec<E> = Vec::new();
        for t in self.transitions.iter().filter(|t| t.from.contains(&from)) {
            if !events.contains(&t.event) {
                events.push(t.event);
            }
        }
        events
    }
}
