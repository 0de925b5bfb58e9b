use chrono::Utc;

use crate::domain::post::PostId;

pub trait IdGenerator {
    fn next_id(&mut self) -> PostId;
}

/// Millisecond timestamps, bumped by one whenever the clock has not moved
/// past the previously issued value.
#[derive(Debug, Clone, Default)]
pub struct TimestampIdGenerator {
    last: i64,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn issue(&mut self, now_millis: i64) -> PostId {
        self.last = now_millis.max(self.last + 1);
        PostId::new(self.last.to_string())
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&mut self) -> PostId {
        self.issue(Utc::now().timestamp_millis())
    }
}

/// Deterministic counter, handy for tests and scripted sessions.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> PostId {
        let id = PostId::new(self.next.to_string());
        self.next += 1;
        id
    }
}
