use std::time::{Duration, Instant};

use crate::constants::{
    ACCELERATION, BRAKING, CENTRIFUGAL, DECELERATION, MAX_SPEED, OFF_ROAD_DECEL, OFF_ROAD_LIMIT,
};
use crate::track::Track;

/// Steering input for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Steer {
    None,
    Left,
    Right,
}

/// The single mutable scalar state of the game: where the car is along the
/// track, how far off the center line it sits and how fast it moves.
pub struct Player {
    /// World z along the track, wrapped into [0, track length).
    pub position: f32,
    /// Lateral offset in road half-width units: -1 left edge, +1 right edge.
    pub x: f32,
    pub speed: f32,
    pub lap: u32,
    lap_start: Instant,
}

impl Player {
    pub fn new() -> Self {
        Player {
            position: 0.0,
            x: 0.0,
            speed: 0.0,
            lap: 1,
            lap_start: Instant::now(),
        }
    }

    pub fn reset(&mut self) {
        self.position = 0.0;
        self.x = 0.0;
        self.speed = 0.0;
        self.lap = 1;
        self.lap_start = Instant::now();
    }

    pub fn is_off_road(&self) -> bool {
        self.x.abs() > 1.0
    }

    pub fn lap_elapsed(&self) -> Duration {
        self.lap_start.elapsed()
    }

    /// Advance one frame. Returns the lap time when this frame completed a
    /// lap (crossed the wrap seam).
    pub fn update(
        &mut self,
        delta_time: f32,
        throttle: bool,
        braking: bool,
        steer: Steer,
        track: &Track,
    ) -> Option<Duration> {
        let speed_percent = self.speed / MAX_SPEED;

        // Steering authority and centrifugal pull both scale with speed so
        // a stationary car stays put
        let steer_direction = match steer {
            Steer::Left => -1.0,
            Steer::Right => 1.0,
            Steer::None => 0.0,
        };
        self.x += steer_direction * delta_time * 2.0 * speed_percent;

        let current_curve = track.find_segment(self.position).curve;
        self.x -= delta_time * speed_percent * current_curve * CENTRIFUGAL;
        self.x = self.x.clamp(-2.0, 2.0);

        if throttle {
            self.speed = accelerate(self.speed, ACCELERATION, delta_time);
        } else if braking {
            self.speed = accelerate(self.speed, BRAKING, delta_time);
        } else {
            self.speed = accelerate(self.speed, DECELERATION, delta_time);
        }

        if self.is_off_road() && self.speed > OFF_ROAD_LIMIT {
            self.speed = accelerate(self.speed, OFF_ROAD_DECEL, delta_time);
        }

        self.speed = self.speed.clamp(0.0, MAX_SPEED);

        let advanced = self.position + self.speed * delta_time;
        self.position = track.wrap(advanced);

        if advanced >= track.length() {
            self.lap += 1;
            let lap_time = self.lap_start.elapsed();
            self.lap_start = Instant::now();
            Some(lap_time)
        } else {
            None
        }
    }
}

fn accelerate(speed: f32, accel: f32, delta_time: f32) -> f32 {
    speed + accel * delta_time
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SEGMENT_LENGTH;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_throttle_reaches_and_holds_max_speed() {
        let track = Track::demo();
        let mut player = Player::new();
        for _ in 0..1200 {
            player.update(DT, true, false, Steer::None, &track);
        }
        assert!((player.speed - MAX_SPEED).abs() < 0.001);
    }

    #[test]
    fn test_braking_stops_at_zero() {
        let track = Track::demo();
        let mut player = Player::new();
        player.speed = MAX_SPEED;
        for _ in 0..600 {
            player.update(DT, false, true, Steer::None, &track);
        }
        assert_eq!(player.speed, 0.0);
    }

    #[test]
    fn test_coasting_decelerates() {
        let track = Track::demo();
        let mut player = Player::new();
        player.speed = MAX_SPEED;
        player.update(DT, false, false, Steer::None, &track);
        assert!(player.speed < MAX_SPEED);
        assert!(player.speed > 0.0);
    }

    #[test]
    fn test_stationary_car_does_not_steer() {
        let track = Track::demo();
        let mut player = Player::new();
        player.update(DT, false, false, Steer::Right, &track);
        assert_eq!(player.x, 0.0);
    }

    #[test]
    fn test_steering_moves_lateral_offset() {
        let track = Track::demo();
        let mut player = Player::new();
        player.speed = MAX_SPEED;
        for _ in 0..30 {
            player.update(DT, true, false, Steer::Right, &track);
        }
        assert!(player.x > 0.0);
        for _ in 0..120 {
            player.update(DT, true, false, Steer::Right, &track);
        }
        assert!(player.x <= 2.0);
    }

    #[test]
    fn test_off_road_slows_down() {
        let track = Track::demo();
        let mut player = Player::new();
        player.x = 1.5;
        player.speed = MAX_SPEED;
        let mut on_road = Player::new();
        on_road.speed = MAX_SPEED;
        player.update(DT, true, false, Steer::None, &track);
        on_road.update(DT, true, false, Steer::None, &track);
        assert!(player.speed < on_road.speed);
    }

    #[test]
    fn test_off_road_does_not_slow_below_limit() {
        let track = Track::demo();
        let mut player = Player::new();
        player.x = 1.5;
        player.speed = OFF_ROAD_LIMIT * 0.5;
        player.update(DT, true, false, Steer::None, &track);
        assert!(player.speed > OFF_ROAD_LIMIT * 0.5);
    }

    #[test]
    fn test_position_wraps_and_counts_lap() {
        let track = Track::demo();
        let mut player = Player::new();
        player.position = track.length() - SEGMENT_LENGTH / 2.0;
        player.speed = MAX_SPEED;
        let lap_time = player.update(DT, true, false, Steer::None, &track);
        assert!(lap_time.is_some());
        assert_eq!(player.lap, 2);
        assert!(player.position < track.length());
        assert!(player.position >= 0.0);
    }

    #[test]
    fn test_curve_pulls_car_outward() {
        let track = Track::demo();
        let mut player = Player::new();
        // Mid right-hand curve; centrifugal pull pushes the car left
        player.position = 350.0 * SEGMENT_LENGTH;
        player.speed = MAX_SPEED;
        player.update(DT, true, false, Steer::None, &track);
        assert!(player.x < 0.0);
    }
}
