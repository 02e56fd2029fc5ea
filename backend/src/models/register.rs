use serde::Serialize;

use super::event::Event;

/// A named collection of events, e.g. "Macro Signals" or "Daily".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Register {
    pub id: String,
    pub name: String,
    pub events: Vec<Event>,
}

impl Register {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            events: Vec::new(),
        }
    }

    pub fn add(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
