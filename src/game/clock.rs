/// The session clock accumulates the loop's elapsed time instead of running
/// on a wall-clock interval, so it pauses, stops and tests deterministically.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum ClockState {
    /// waiting for the first move of the session
    Ready,
    Running,
    /// stopped clocks never resume
    Stopped,
}

#[derive(Debug)]
pub struct GameClock {
    state: ClockState,
    elapsed: f32,
}

impl GameClock {
    pub fn new() -> Self {
        GameClock {
            state: ClockState::Ready,
            elapsed: 0.0,
        }
    }

    /// Begins ticking; later calls are no-ops, and a stopped clock stays
    /// stopped.
    pub fn start(&mut self) {
        if self.state == ClockState::Ready {
            self.state = ClockState::Running;
        }
    }

    pub fn tick(&mut self, dt: f32) {
        if self.state == ClockState::Running {
            self.elapsed += dt;
        }
    }

    pub fn stop(&mut self) {
        self.state = ClockState::Stopped;
    }

    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// MM:SS for the HUD.
    pub fn display(&self) -> String {
        let total = self.elapsed as u32;
        format!("{:02}:{:02}", total / 60, total % 60)
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn does_not_tick_before_start() {
        let mut clock = GameClock::new();
        clock.tick(2.0);
        assert_relative_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.display(), "00:00");
    }

    #[test]
    fn accumulates_while_running_and_formats_minutes() {
        let mut clock = GameClock::new();
        clock.start();
        for _ in 0..125 {
            clock.tick(1.0);
        }
        assert_eq!(clock.display(), "02:05");
    }

    #[test]
    fn start_is_idempotent() {
        let mut clock = GameClock::new();
        clock.start();
        clock.tick(30.0);
        clock.start();
        assert_relative_eq!(clock.elapsed(), 30.0);
    }

    #[test]
    fn stop_is_permanent() {
        let mut clock = GameClock::new();
        clock.start();
        clock.tick(10.0);
        clock.stop();
        clock.tick(10.0);
        assert_relative_eq!(clock.elapsed(), 10.0);
        // restarting after a stop must not bring the clock back
        clock.start();
        clock.tick(10.0);
        assert!(!clock.is_running());
        assert_relative_eq!(clock.elapsed(), 10.0);
    }
}
