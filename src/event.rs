use std::collections::{BTreeMap, VecDeque};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SelectVia {
    Click,
    Key,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    // Time housekeeping
    Tick,

    // Input-derived intents
    DatasetSelected { index: usize, via: SelectVia },
    CameraMoved,

    // Window
    WindowResized { width: i32, height: i32 },

    // Animation
    CrossfadeSettled { index: Option<usize> },
}

pub struct EventEnvelope {
    /// Tick the event was emitted on.
    pub tick: u64,
    pub kind: Event,
}

#[derive(Default)]
pub struct EventQueue {
    // map of tick -> FIFO queue of events
    by_tick: BTreeMap<u64, VecDeque<EventEnvelope>>,
    pub now: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit_now(&mut self, kind: Event) {
        let env = EventEnvelope {
            tick: self.now,
            kind,
        };
        self.by_tick.entry(self.now).or_default().push_back(env);
    }

    pub fn pop_ready(&mut self) -> Option<EventEnvelope> {
        self.by_tick
            .get_mut(&self.now)
            .and_then(|q| q.pop_front())
    }

    pub fn advance_tick(&mut self) {
        if self.by_tick.get(&self.now).is_some_and(|q| q.is_empty()) {
            self.by_tick.remove(&self.now);
        }
        self.now = self.now.wrapping_add(1);
    }
}
