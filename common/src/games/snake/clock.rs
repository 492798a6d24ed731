use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockState {
    Stopped,
    Running,
    Paused,
    GameOver,
}

/// Owner of the one live periodic timer. `arm` must replace any previously
/// armed timer; ticks it produces carry `generation`.
pub trait TickScheduler {
    fn arm(&mut self, interval: Duration, generation: u64);
    fn cancel(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArmedTimer {
    pub interval: Duration,
    pub generation: u64,
}

/// Scheduler without a real timer: the caller steps the game by hand.
/// Remembers what would have been armed.
#[derive(Debug, Default)]
pub struct ManualTickScheduler {
    pub armed: Option<ArmedTimer>,
    pub arm_count: usize,
    pub cancel_count: usize,
}

impl TickScheduler for ManualTickScheduler {
    fn arm(&mut self, interval: Duration, generation: u64) {
        self.armed = Some(ArmedTimer {
            interval,
            generation,
        });
        self.arm_count += 1;
    }

    fn cancel(&mut self) {
        if self.armed.take().is_some() {
            self.cancel_count += 1;
        }
    }
}

pub fn next_interval(current: Duration, step: Duration, floor: Duration) -> Duration {
    current.saturating_sub(step).max(floor)
}

pub struct GameClock<S: TickScheduler> {
    state: ClockState,
    tick_interval: Duration,
    initial_interval: Duration,
    generation: u64,
    scheduler: S,
}

impl<S: TickScheduler> GameClock<S> {
    pub fn new(scheduler: S, initial_interval: Duration) -> Self {
        Self {
            state: ClockState::Stopped,
            tick_interval: initial_interval,
            initial_interval,
            generation: 0,
            scheduler,
        }
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn start(&mut self) -> bool {
        if self.state != ClockState::Stopped {
            return false;
        }
        self.state = ClockState::Running;
        self.rearm();
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.state != ClockState::Running {
            return false;
        }
        self.scheduler.cancel();
        self.state = ClockState::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state != ClockState::Paused {
            return false;
        }
        self.state = ClockState::Running;
        self.rearm();
        true
    }

    pub fn finish(&mut self) -> bool {
        if self.state != ClockState::Running {
            return false;
        }
        self.scheduler.cancel();
        self.state = ClockState::GameOver;
        true
    }

    pub fn reset(&mut self) {
        self.scheduler.cancel();
        self.state = ClockState::Stopped;
        self.tick_interval = self.initial_interval;
    }

    /// A running clock switches to the new interval right away.
    pub fn set_interval(&mut self, interval: Duration) {
        if interval == self.tick_interval {
            return;
        }
        self.tick_interval = interval;
        if self.state == ClockState::Running {
            self.rearm();
        }
    }

    /// Whether a tick from the timer armed as `generation` may still run.
    pub fn accepts(&self, generation: u64) -> bool {
        self.state == ClockState::Running && generation == self.generation
    }

    fn rearm(&mut self) {
        self.scheduler.cancel();
        self.generation += 1;
        self.scheduler.arm(self.tick_interval, self.generation);
    }
}
