use std::time::{Duration, Instant};

use crate::core::NO_TIME;

/// Play time of the current level. Runs only while the player is moving
/// through a level, stands still otherwise.
#[derive(Clone, Debug, Default)]
pub struct PlayClock {
    started: bool,
    banked: Duration,
    running_since: Option<Instant>,
}

impl PlayClock {
    pub fn new() -> PlayClock {
        PlayClock::default()
    }

    pub fn reset(&mut self) {
        *self = PlayClock::default();
    }

    /// Starts the clock on the first call, resumes it after [`PlayClock::freeze`].
    pub fn run(&mut self) {
        self.started = true;
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }

    pub fn freeze(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.banked += since.elapsed();
        }
    }

    /// Continues from a previously recorded play time, frozen until the next move.
    pub fn restore(&mut self, played: Duration) {
        self.started = true;
        self.banked = played;
        self.running_since = None;
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    pub fn elapsed(&self) -> Option<Duration> {
        if !self.started {
            return None;
        }
        Some(self.banked + self.running_since.map(|since| since.elapsed()).unwrap_or_default())
    }
}

/// `HH:MM:SS,mmm`, or `--:--:--` when the clock never ran.
pub fn format_elapsed(elapsed: Option<Duration>) -> String {
    let Some(elapsed) = elapsed else {
        return NO_TIME.to_string();
    };
    let seconds = elapsed.as_secs();
    format!(
        "{:02}:{:02}:{:02},{:03}",
        seconds / 3600,
        (seconds / 60) % 60,
        seconds % 60,
        elapsed.subsec_millis()
    )
}

/// Inverse of [`format_elapsed`]. Accepts unpadded milliseconds as well.
pub fn parse_elapsed(text: &str) -> Option<Duration> {
    if text == NO_TIME {
        return None;
    }
    let mut parts = text.splitn(3, ':');
    let hours: u64 = parts.next()?.trim().parse().ok()?;
    let minutes: u64 = parts.next()?.trim().parse().ok()?;
    let (seconds, millis) = parts.next()?.split_once(',')?;
    let seconds: u64 = seconds.trim().parse().ok()?;
    let millis: u64 = millis.trim().parse().ok()?;
    let total = hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)?;
    Duration::from_secs(total).checked_add(Duration::from_millis(millis))
}
