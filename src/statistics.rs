use std::time::{Duration, Instant};

pub struct RaceStatistics {
    pub laps_completed: u32,
    pub lap_times: Vec<Duration>,
    pub best_lap: Option<Duration>,
    pub last_lap: Option<Duration>,
    pub top_speed: f32,
    pub distance_traveled: f32,
    pub tracks_driven: u32,
    session_start: Instant,
}

impl RaceStatistics {
    pub fn new() -> Self {
        RaceStatistics {
            laps_completed: 0,
            lap_times: Vec::new(),
            best_lap: None,
            last_lap: None,
            top_speed: 0.0,
            distance_traveled: 0.0,
            tracks_driven: 1,
            session_start: Instant::now(),
        }
    }

    pub fn record_frame(&mut self, speed: f32, delta_time: f32) {
        if speed > self.top_speed {
            self.top_speed = speed;
        }
        self.distance_traveled += speed * delta_time;
    }

    pub fn record_lap(&mut self, lap_time: Duration) {
        self.laps_completed += 1;
        self.lap_times.push(lap_time);
        self.last_lap = Some(lap_time);

        match self.best_lap {
            Some(best) if lap_time >= best => {}
            _ => self.best_lap = Some(lap_time),
        }
    }

    pub fn record_new_track(&mut self) {
        self.tracks_driven += 1;
    }

    pub fn average_lap(&self) -> Option<Duration> {
        if self.lap_times.is_empty() {
            return None;
        }
        let total: Duration = self.lap_times.iter().sum();
        Some(total / self.lap_times.len() as u32)
    }

    pub fn session_duration(&self) -> Duration {
        self.session_start.elapsed()
    }

    pub fn display(&self) -> Result<(), String> {
        let elapsed_sec = self.session_duration().as_secs_f32();

        let format_lap = |lap: Option<Duration>| match lap {
            Some(time) => format!("{:.2}s", time.as_secs_f32()),
            None => "N/A".to_string(),
        };

        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║                      SESSION STATISTICS                      ║");
        println!("╠══════════════════════════════════════════════════════════════╣");
        println!("║ Session Duration: {:>10.1}s                                ║", elapsed_sec);
        println!("║ Tracks Driven: {:<8}                                      ║", self.tracks_driven);
        println!("║ Laps Completed: {:<8}                                     ║", self.laps_completed);
        println!("║ Distance Traveled: {:>12.0} units                        ║", self.distance_traveled);
        println!("╠══════════════════════════════════════════════════════════════╣");
        println!("║ Top Speed: {:>16.0} units/s                           ║", self.top_speed);
        println!("║ Best Lap: {:>12}                                       ║", format_lap(self.best_lap));
        println!("║ Last Lap: {:>12}                                       ║", format_lap(self.last_lap));
        println!("║ Avg Lap:  {:>12}                                       ║", format_lap(self.average_lap()));
        println!("╚══════════════════════════════════════════════════════════════╝");

        Ok(())
    }
}
