use std::time::Duration;

use log::debug;

use super::GridEngine;

/// Interval between automatic steps
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

/// Scheduler drives `GridEngine::step` on a fixed interval.
/// It owns no clock: callers feed it elapsed time from whatever frame or
/// timer loop they run.
#[derive(Clone, Debug)]
pub struct Scheduler {
    interval: Duration,
    elapsed: Duration,
    running: bool,
}

impl Scheduler {
    /// Create a stopped scheduler with the given step interval
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            running: false,
        }
    }

    /// Time between automatic steps
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the step interval; accumulated time is kept
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Whether periodic stepping is active
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin periodic stepping. Has no effect if already running.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.elapsed = Duration::ZERO;
            debug!("scheduler started, interval {:?}", self.interval);
        }
    }

    /// Halt periodic stepping. Has no effect if already stopped.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            debug!("scheduler stopped");
        }
    }

    /// Advance the clock by `delta`, stepping once when strictly more than
    /// the interval has accumulated. Leftover time is dropped, so a long
    /// stall yields one step rather than a burst. Returns whether a step
    /// happened.
    pub fn tick(&mut self, engine: &mut GridEngine, delta: Duration) -> bool {
        if !self.running {
            return false;
        }

        self.elapsed += delta;
        if self.elapsed <= self.interval {
            return false;
        }

        engine.step();
        self.elapsed = Duration::ZERO;
        true
    }

    /// Manual single step, whether or not the scheduler is running
    pub fn step_once(&mut self, engine: &mut GridEngine) {
        engine.step();
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoardConfig;

    fn engine() -> GridEngine {
        GridEngine::with_seed(BoardConfig::new(30, 30, 10), 0).unwrap()
    }

    #[test]
    fn test_default_interval_is_half_second() {
        let scheduler = Scheduler::default();
        assert_eq!(scheduler.interval(), Duration::from_millis(500));
        assert!(!scheduler.is_running());
    }

    #[test]
    fn test_stopped_scheduler_never_steps() {
        let mut engine = engine();
        let mut scheduler = Scheduler::default();
        assert!(!scheduler.tick(&mut engine, Duration::from_secs(10)));
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_steps_once_per_interval() {
        let mut engine = engine();
        let mut scheduler = Scheduler::default();
        scheduler.start();

        let frame = Duration::from_millis(100);
        let steps = (0..20).filter(|_| scheduler.tick(&mut engine, frame)).count();

        // Steps land on frames 6, 12 and 18: the interval must be exceeded
        assert_eq!(steps, 3);
        assert_eq!(engine.generation(), 3);
    }

    #[test]
    fn test_exact_interval_does_not_step() {
        let mut engine = engine();
        let mut scheduler = Scheduler::default();
        scheduler.start();
        assert!(!scheduler.tick(&mut engine, Duration::from_millis(500)));
        assert!(scheduler.tick(&mut engine, Duration::from_millis(1)));
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn test_long_stall_steps_only_once() {
        let mut engine = engine();
        let mut scheduler = Scheduler::default();
        scheduler.start();

        assert!(scheduler.tick(&mut engine, Duration::from_millis(2000)));
        assert_eq!(engine.generation(), 1);

        // Leftover time from the stall is not carried over
        assert!(!scheduler.tick(&mut engine, Duration::from_millis(400)));
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn test_start_and_stop_are_idempotent() {
        let mut engine = engine();
        let mut scheduler = Scheduler::default();

        scheduler.start();
        scheduler.tick(&mut engine, Duration::from_millis(300));
        scheduler.start();
        assert!(scheduler.tick(&mut engine, Duration::from_millis(250)));

        scheduler.stop();
        scheduler.stop();
        assert!(!scheduler.is_running());
        assert!(!scheduler.tick(&mut engine, Duration::from_secs(1)));
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn test_step_once_ignores_running_state() {
        let mut engine = engine();
        let mut scheduler = Scheduler::default();
        scheduler.step_once(&mut engine);
        scheduler.step_once(&mut engine);
        assert_eq!(engine.generation(), 2);
    }
}
