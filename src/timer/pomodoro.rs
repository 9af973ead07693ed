//! Pomodoro countdown.
//!
//! One interval runs at a time. A finished interval waits in `Finished`
//! until the next `start`, which moves on to the following phase.
//!
//! ```
//! use memory_match::timer::{Pomodoro, TimerConfig, TimerEvent, TimerPhase, TimerStatus};
//!
//! let mut timer = Pomodoro::new(TimerConfig::new().with_work_ms(1000));
//! timer.start(0);
//! assert_eq!(timer.remaining_ms(400), 600);
//!
//! let event = timer.tick(1000);
//! assert!(matches!(event, Some(TimerEvent::PhaseFinished { phase: TimerPhase::Work, .. })));
//! assert_eq!(timer.status(), TimerStatus::Finished);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

const MINUTE_MS: u64 = 60_000;

/// Interval lengths and the long-break cadence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    pub work_ms: u64,
    pub short_break_ms: u64,
    pub long_break_ms: u64,
    /// A long break follows every this many completed work sessions.
    /// Zero means breaks are always short.
    pub long_break_every: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_ms: 25 * MINUTE_MS,
            short_break_ms: 5 * MINUTE_MS,
            long_break_ms: 15 * MINUTE_MS,
            long_break_every: 4,
        }
    }
}

impl TimerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_work_ms(mut self, ms: u64) -> Self {
        self.work_ms = ms;
        self
    }

    #[must_use]
    pub fn with_short_break_ms(mut self, ms: u64) -> Self {
        self.short_break_ms = ms;
        self
    }

    #[must_use]
    pub fn with_long_break_ms(mut self, ms: u64) -> Self {
        self.long_break_ms = ms;
        self
    }

    /// Zero disables long breaks.
    #[must_use]
    pub fn with_long_break_every(mut self, every: u32) -> Self {
        self.long_break_every = every;
        self
    }

    #[must_use]
    pub fn duration_of(&self, phase: TimerPhase) -> u64 {
        match phase {
            TimerPhase::Work => self.work_ms,
            TimerPhase::ShortBreak => self.short_break_ms,
            TimerPhase::LongBreak => self.long_break_ms,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerPhase {
    Work,
    ShortBreak,
    LongBreak,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerStatus {
    Idle,
    Running,
    Paused,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerEvent {
    PhaseFinished {
        phase: TimerPhase,
        completed_work_sessions: u32,
    },
}

/// Work/break timer driven by host-supplied timestamps.
#[derive(Clone, Debug)]
pub struct Pomodoro {
    config: TimerConfig,
    phase: TimerPhase,
    status: TimerStatus,
    /// Remaining time while idle or paused.
    remaining_ms: u64,
    /// Deadline while running.
    deadline_ms: u64,
    completed_work_sessions: u32,
}

impl Pomodoro {
    #[must_use]
    pub fn new(config: TimerConfig) -> Self {
        let remaining_ms = config.work_ms;
        Self {
            config,
            phase: TimerPhase::Work,
            status: TimerStatus::Idle,
            remaining_ms,
            deadline_ms: 0,
            completed_work_sessions: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    #[must_use]
    pub fn status(&self) -> TimerStatus {
        self.status
    }

    #[must_use]
    pub fn completed_work_sessions(&self) -> u32 {
        self.completed_work_sessions
    }

    #[must_use]
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        match self.status {
            TimerStatus::Running => self.deadline_ms.saturating_sub(now_ms),
            _ => self.remaining_ms,
        }
    }

    /// Start the countdown from idle, or the next phase after a finish.
    ///
    /// Returns false if the timer was already running or paused.
    pub fn start(&mut self, now_ms: u64) -> bool {
        match self.status {
            TimerStatus::Idle => {}
            TimerStatus::Finished => self.enter(self.next_phase()),
            TimerStatus::Running | TimerStatus::Paused => return false,
        }
        self.run_from(now_ms);
        true
    }

    pub fn pause(&mut self, now_ms: u64) -> bool {
        if self.status != TimerStatus::Running {
            return false;
        }
        self.remaining_ms = self.deadline_ms.saturating_sub(now_ms);
        self.status = TimerStatus::Paused;
        true
    }

    pub fn resume(&mut self, now_ms: u64) -> bool {
        if self.status != TimerStatus::Paused {
            return false;
        }
        self.run_from(now_ms);
        true
    }

    /// Back to an idle work interval with no sessions counted.
    pub fn reset(&mut self) {
        self.completed_work_sessions = 0;
        self.enter(TimerPhase::Work);
    }

    /// Abandon the current interval and move idle to the next phase.
    ///
    /// A skipped work interval does not count as completed.
    pub fn skip(&mut self) {
        let next = match self.status {
            TimerStatus::Finished => self.next_phase(),
            _ => match self.phase {
                TimerPhase::Work => TimerPhase::ShortBreak,
                TimerPhase::ShortBreak | TimerPhase::LongBreak => TimerPhase::Work,
            },
        };
        self.enter(next);
    }

    /// Finish the running interval once its deadline has passed.
    pub fn tick(&mut self, now_ms: u64) -> Option<TimerEvent> {
        if self.status != TimerStatus::Running || now_ms < self.deadline_ms {
            return None;
        }

        self.status = TimerStatus::Finished;
        self.remaining_ms = 0;
        if self.phase == TimerPhase::Work {
            self.completed_work_sessions += 1;
        }
        debug!(
            "{:?} finished ({} work sessions)",
            self.phase, self.completed_work_sessions
        );

        Some(TimerEvent::PhaseFinished {
            phase: self.phase,
            completed_work_sessions: self.completed_work_sessions,
        })
    }

    fn next_phase(&self) -> TimerPhase {
        match self.phase {
            TimerPhase::Work
                if self
                    .completed_work_sessions
                    .checked_rem(self.config.long_break_every)
                    == Some(0) =>
            {
                TimerPhase::LongBreak
            }
            TimerPhase::Work => TimerPhase::ShortBreak,
            TimerPhase::ShortBreak | TimerPhase::LongBreak => TimerPhase::Work,
        }
    }

    fn enter(&mut self, phase: TimerPhase) {
        self.phase = phase;
        self.status = TimerStatus::Idle;
        self.remaining_ms = self.config.duration_of(phase);
    }

    fn run_from(&mut self, now_ms: u64) {
        self.deadline_ms = now_ms.saturating_add(self.remaining_ms);
        self.status = TimerStatus::Running;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer() -> Pomodoro {
        Pomodoro::new(
            TimerConfig::new()
                .with_work_ms(100)
                .with_short_break_ms(20)
                .with_long_break_ms(50)
                .with_long_break_every(2),
        )
    }

    #[test]
    fn test_initial_state() {
        let timer = timer();
        assert_eq!(timer.phase(), TimerPhase::Work);
        assert_eq!(timer.status(), TimerStatus::Idle);
        assert_eq!(timer.remaining_ms(0), 100);
    }

    #[test]
    fn test_pause_freezes_remaining() {
        let mut timer = timer();
        timer.start(1000);
        assert!(timer.pause(1030));

        assert_eq!(timer.remaining_ms(5000), 70);
        assert!(timer.tick(5000).is_none());

        assert!(timer.resume(6000));
        assert_eq!(timer.remaining_ms(6010), 60);
        assert!(timer.tick(6069).is_none());
        assert!(timer.tick(6070).is_some());
    }

    #[test]
    fn test_finish_fires_once() {
        let mut timer = timer();
        timer.start(0);

        assert_eq!(
            timer.tick(100),
            Some(TimerEvent::PhaseFinished {
                phase: TimerPhase::Work,
                completed_work_sessions: 1
            })
        );
        assert!(timer.tick(200).is_none());
        assert_eq!(timer.remaining_ms(200), 0);
    }

    #[test]
    fn test_long_break_cadence() {
        let mut timer = timer();
        let mut now = 0;
        let mut phases = Vec::new();

        for _ in 0..4 {
            timer.start(now);
            phases.push(timer.phase());
            now += 1000;
            timer.tick(now);
        }

        assert_eq!(
            phases,
            vec![
                TimerPhase::Work,
                TimerPhase::ShortBreak,
                TimerPhase::Work,
                TimerPhase::LongBreak
            ]
        );
        assert_eq!(timer.completed_work_sessions(), 2);
    }

    #[test]
    fn test_zero_cadence_never_takes_long_break() {
        let config: TimerConfig = serde_json::from_str(
            r#"{ "work_ms": 10, "short_break_ms": 5, "long_break_ms": 50, "long_break_every": 0 }"#,
        )
        .unwrap();
        let mut timer = Pomodoro::new(config);
        let mut now = 0;

        for _ in 0..3 {
            timer.start(now);
            now += 100;
            timer.tick(now);
            timer.start(now);
            assert_eq!(timer.phase(), TimerPhase::ShortBreak);
            now += 100;
            timer.tick(now);
        }

        assert_eq!(timer.completed_work_sessions(), 3);
    }

    #[test]
    fn test_invalid_transitions_ignored() {
        let mut timer = timer();
        assert!(!timer.pause(0));
        assert!(!timer.resume(0));

        timer.start(0);
        assert!(!timer.start(10));
        assert!(!timer.resume(10));
        assert_eq!(timer.status(), TimerStatus::Running);
    }

    #[test]
    fn test_skip_and_reset() {
        let mut timer = timer();
        timer.start(0);
        timer.skip();

        assert_eq!(timer.phase(), TimerPhase::ShortBreak);
        assert_eq!(timer.status(), TimerStatus::Idle);
        assert_eq!(timer.completed_work_sessions(), 0);

        timer.skip();
        assert_eq!(timer.phase(), TimerPhase::Work);

        timer.start(0);
        timer.tick(100);
        timer.reset();
        assert_eq!(timer.phase(), TimerPhase::Work);
        assert_eq!(timer.completed_work_sessions(), 0);
        assert_eq!(timer.remaining_ms(0), 100);
    }
}
