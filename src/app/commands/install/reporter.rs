use std::time::{Duration, Instant};

use crate::ports::ConsolePort;

/// Wall-clock timer started when the command begins.
#[derive(Debug, Clone, Copy)]
pub struct RunTimer {
    started: Instant,
}

impl RunTimer {
    pub fn start() -> Self {
        Self { started: Instant::now() }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Run statistics, e.g. `Time: 1.42s`.
    pub fn stats(&self) -> String {
        format_stats(self.elapsed())
    }
}

fn format_stats(elapsed: Duration) -> String {
    format!("Time: {:.2}s", elapsed.as_secs_f64())
}

/// Emit the final status line.
pub fn report_done<C: ConsolePort + ?Sized>(console: &mut C, timer: &RunTimer) {
    console.say(&format!("Done! {}", timer.stats()));
}
