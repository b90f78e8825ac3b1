//! Time-gated spawn timers

/// Fires once more than `interval_ms` has elapsed since the last fire
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spawner {
    pub interval_ms: f64,
    /// Host timestamp of the last fire (0 for a new spawner)
    pub last_fire_ms: f64,
}

impl Spawner {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_fire_ms: 0.0,
        }
    }

    /// Returns true and restarts the timer if the interval has elapsed
    pub fn poll(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_fire_ms > self.interval_ms {
            self.last_fire_ms = now_ms;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_strictly_after_interval() {
        let mut spawner = Spawner::new(1800.0);
        assert!(!spawner.poll(1000.0));
        assert!(!spawner.poll(1800.0));
        assert!(spawner.poll(1800.5));
        assert_eq!(spawner.last_fire_ms, 1800.5);
    }

    #[test]
    fn test_timer_restarts_on_fire() {
        let mut spawner = Spawner::new(1800.0);
        assert!(spawner.poll(2000.0));
        assert!(!spawner.poll(3000.0));
        assert!(!spawner.poll(3800.0));
        assert!(spawner.poll(3801.0));
    }

    #[test]
    fn test_new_spawner_measures_from_zero() {
        let mut spawner = Spawner::new(3000.0);
        assert_eq!(spawner.last_fire_ms, 0.0);
        assert!(!spawner.poll(3000.0));
        assert!(spawner.poll(3000.5));
    }
}
