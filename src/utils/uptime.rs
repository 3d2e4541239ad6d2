//! Process start time and uptime rendering

use chrono::{DateTime, SecondsFormat, Utc};
use std::time::{Duration, Instant};

/// Captured once at startup and never modified
#[derive(Debug, Clone, Copy)]
pub struct ProcessClock {
    started: Instant,
    started_at: DateTime<Utc>,
}

impl ProcessClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Time since startup, taken from the monotonic clock so successive
    /// readings never go backwards
    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

impl Default for ProcessClock {
    fn default() -> Self {
        Self::start()
    }
}

/// Render a duration as `[N day(s), ]H:MM:SS[.ffffff]`
pub fn format_uptime(uptime: Duration) -> String {
    let total_secs = uptime.as_secs();
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;
    let micros = uptime.subsec_micros();

    let mut out = String::new();
    if days > 0 {
        let unit = if days == 1 { "day" } else { "days" };
        out.push_str(&format!("{} {}, ", days, unit));
    }
    out.push_str(&format!("{}:{:02}:{:02}", hours, minutes, seconds));
    if micros > 0 {
        out.push_str(&format!(".{:06}", micros));
    }
    out
}

/// Current wall-clock time as RFC 3339 UTC with microseconds
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
