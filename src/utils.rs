use rand::Rng;
use std::time::Duration;

/// Sleeps for a random duration in `max / 2..=max` between page requests.
pub fn random_delay(max: Duration) {
    let max_ms = max.as_millis() as u64;
    if max_ms == 0 {
        return;
    }
    let delay = rand::rng().random_range(max_ms / 2..=max_ms);
    std::thread::sleep(Duration::from_millis(delay));
}
