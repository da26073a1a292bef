use time::precise_time_ns;

pub struct Timer {
    start: u64,
    current_time: u64
}

impl Timer {
    pub fn start() -> Timer {
        let time = precise_time_ns();
        Timer {
            start: time,
            current_time: time
        }
    }

    pub fn lap_and_report(&mut self, message: &str) {
        let (since_last_lap, since_started) = self.lap();
        info!("[TIMER] --- Announcement: {}\n    + Time since last message: {:.5}s\n    + Time since started: {:.5}s",
            message, since_last_lap, since_started);
    }

    pub fn lap(&mut self) -> (f64, f64) {
        let current_time = precise_time_ns();
        let since_last_lap = (current_time - self.current_time) as f64 * 1e-9;
        let since_started = (current_time - self.start) as f64 * 1e-9;
        self.current_time = current_time;

        (since_last_lap, since_started)
    }
}
