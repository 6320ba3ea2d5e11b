use crate::ticker::Ticker;
use rand::seq::SliceRandom;
use std::time::Instant;

/// Length of a work session in seconds (25 minutes)
pub const WORK_DURATION_SECS: u32 = 25 * 60;

/// Length of a tea break in seconds (5 minutes)
pub const BREAK_DURATION_SECS: u32 = 5 * 60;

const BREAK_MESSAGES: &[&str] = &[
    "Take a short break and enjoy your tea! It's important to rest between focused work sessions.",
];

const WORK_MESSAGES: &[&str] = &[
    "Stay focused and keep pushing forward!",
    "Small steps every day lead to big accomplishments.",
    "Your productivity is a measure of your dedication.",
    "Every task completed is a step towards your goal.",
    "Consistency is the key to success.",
];

/// Advisory message pool for a mode
pub fn advisory_pool(break_mode: bool) -> &'static [&'static str] {
    if break_mode {
        BREAK_MESSAGES
    } else {
        WORK_MESSAGES
    }
}

fn pick_advisory(break_mode: bool) -> &'static str {
    let pool = advisory_pool(break_mode);
    pool.choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or_default()
}

/// Format seconds as zero-padded MM:SS
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Pomodoro / tea-break countdown.
///
/// Runs independently of the task list. While running, a single [`Ticker`]
/// is armed; every transition that stops the timer cancels it.
#[derive(Debug, Clone)]
pub struct PomodoroTimer {
    remaining_secs: u32,
    running: bool,
    break_mode: bool,
    advisory: &'static str,
    ticker: Ticker,
}

impl Default for PomodoroTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl PomodoroTimer {
    /// Idle in work mode with the full work duration
    pub fn new() -> Self {
        Self {
            remaining_secs: WORK_DURATION_SECS,
            running: false,
            break_mode: false,
            advisory: pick_advisory(false),
            ticker: Ticker::default(),
        }
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_break_mode(&self) -> bool {
        self.break_mode
    }

    pub fn advisory(&self) -> &'static str {
        self.advisory
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Pane heading for the current mode
    pub fn title(&self) -> &'static str {
        if self.break_mode {
            "Tea Break"
        } else {
            "Pomodoro Timer"
        }
    }

    /// Duration the current mode resets to
    pub fn mode_duration(&self) -> u32 {
        if self.break_mode {
            BREAK_DURATION_SECS
        } else {
            WORK_DURATION_SECS
        }
    }

    /// Remaining time as MM:SS
    pub fn format_remaining(&self) -> String {
        format_clock(self.remaining_secs)
    }

    /// Fraction of the current mode already elapsed (0.0 to 1.0)
    pub fn progress_ratio(&self) -> f64 {
        let total = self.mode_duration() as f64;
        let elapsed = total - self.remaining_secs.min(self.mode_duration()) as f64;
        (elapsed / total).clamp(0.0, 1.0)
    }

    fn set_running(&mut self, running: bool, now: Instant) {
        self.running = running;
        // No tick source when stopped or when there is nothing left to count
        if running && self.remaining_secs > 0 {
            self.ticker.arm(now);
        } else {
            self.ticker.cancel();
        }
    }

    fn set_break_mode(&mut self, break_mode: bool) {
        if self.break_mode != break_mode {
            self.break_mode = break_mode;
            self.advisory = pick_advisory(break_mode);
        }
    }

    /// Flip running/paused without touching remaining time or mode
    pub fn start_pause(&mut self, now: Instant) {
        let running = !self.running;
        self.set_running(running, now);
        tracing::debug!(running, remaining = self.remaining_secs, "timer start/pause");
    }

    /// Stop and return to a fresh work session
    pub fn stop(&mut self, now: Instant) {
        self.set_running(false, now);
        self.remaining_secs = WORK_DURATION_SECS;
        self.set_break_mode(false);
    }

    /// Stop and refill the current mode's duration
    pub fn reset(&mut self, now: Instant) {
        self.set_running(false, now);
        self.remaining_secs = self.mode_duration();
    }

    /// Switch between work and break mode. Always refills with the break
    /// duration, including when leaving break mode.
    pub fn toggle_break_mode(&mut self, now: Instant) {
        self.set_running(false, now);
        self.remaining_secs = BREAK_DURATION_SECS;
        let flipped = !self.break_mode;
        self.set_break_mode(flipped);
    }

    /// One second elapsed. Stops itself on reaching zero.
    pub fn tick(&mut self) {
        if !self.running || self.remaining_secs == 0 {
            return;
        }
        self.remaining_secs -= 1;
        if self.remaining_secs == 0 {
            self.running = false;
            self.ticker.cancel();
            tracing::info!(break_mode = self.break_mode, "timer finished");
        }
    }

    /// Apply every tick the schedule says is due by `now`. Returns true if
    /// anything changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let due = self.ticker.due_ticks(now);
        for _ in 0..due {
            self.tick();
            if !self.running {
                break;
            }
        }
        due > 0
    }
}
