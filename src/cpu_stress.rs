use std::time::{Duration, Instant};

/// How long each request to the engine keeps a core busy.
pub const DEFAULT_BUSY_WAIT: Duration = Duration::from_millis(1500);

/// Spin on the current thread until `duration` of wall-clock time has passed.
///
/// Never sleeps or yields, so the calling thread holds a full core for the
/// whole window. Returns the measured elapsed time, which is never shorter
/// than `duration`.
pub fn busy_wait(duration: Duration) -> Duration {
    let start = Instant::now();
    loop {
        let elapsed = start.elapsed();
        if elapsed >= duration {
            return elapsed;
        }
        std::hint::spin_loop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spins_for_at_least_the_requested_time() {
        let wanted = Duration::from_millis(40);
        let start = Instant::now();
        let reported = busy_wait(wanted);

        assert!(reported >= wanted);
        assert!(start.elapsed() >= wanted);
    }

    #[test]
    fn zero_duration_returns_immediately() {
        let reported = busy_wait(Duration::ZERO);
        assert!(reported < Duration::from_millis(50));
    }
}
