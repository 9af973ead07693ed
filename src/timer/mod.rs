//! Pomodoro work/break timer.

pub mod pomodoro;

pub use pomodoro::{Pomodoro, TimerConfig, TimerEvent, TimerPhase, TimerStatus};
