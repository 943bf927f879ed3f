use std::time::Duration;

use crate::live::page::Presentation;

pub const ANIMATION_DURATION: Duration = Duration::from_millis(1000);
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone)]
pub struct CounterAnimation {
    current: f64,
    end: f64,
    increment: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(start: i64, end: i64, duration: Duration) -> Self {
        let frames = duration.as_millis() as f64 / FRAME_INTERVAL.as_millis() as f64;
        let range = (end - start) as f64;
        let increment = if frames > 0.0 { range / frames } else { range };

        Self {
            current: start as f64,
            end: end as f64,
            increment,
            done: false,
        }
    }
}

impl Iterator for CounterAnimation {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.done {
            return None;
        }

        self.current += self.increment;
        let reached = (self.increment > 0.0 && self.current >= self.end)
            || (self.increment < 0.0 && self.current <= self.end)
            || self.increment == 0.0;
        if reached {
            self.current = self.end;
            self.done = true;
        }

        Some(self.current.floor() as i64)
    }
}

pub async fn animate_value(page: &dyn Presentation, id: &str, start: i64, end: i64, duration: Duration) {
    if !page.has_slot(id) {
        return;
    }

    let mut ticker =
        tokio::time::interval_at(tokio::time::Instant::now() + FRAME_INTERVAL, FRAME_INTERVAL);
    for value in CounterAnimation::new(start, end, duration) {
        ticker.tick().await;
        page.set_text(id, &value.to_string());
    }
}
