use sdl2::event::Event;
use sdl2::render::Canvas;
use sdl2::ttf::Font;
use sdl2::video::Window;

use crate::camera::Camera;
use crate::input::{InputAction, InputHandler};
use crate::player::Player;
use crate::rendering::{hud, road_renderer};
use crate::statistics::RaceStatistics;
use crate::track::Track;

pub struct GameState {
    track: Track,
    player: Player,
    camera: Camera,
    input: InputHandler,
    statistics: RaceStatistics,
    paused: bool,
    show_stats: bool,
}

impl GameState {
    pub fn new() -> Self {
        GameState {
            track: Track::demo(),
            player: Player::new(),
            camera: Camera::new(),
            input: InputHandler::new(),
            statistics: RaceStatistics::new(),
            paused: false,
            show_stats: false,
        }
    }

    pub fn statistics(&self) -> &RaceStatistics {
        &self.statistics
    }

    /// Route an event through the input handler. Returns false when the
    /// game should exit.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match self.input.process_event(event) {
            InputAction::TogglePause => {
                self.paused = !self.paused;
                println!("Paused: {}", if self.paused { "ON" } else { "OFF" });
            }
            InputAction::ToggleStatistics => {
                self.show_stats = !self.show_stats;
            }
            InputAction::NewTrack => {
                self.regenerate_track();
            }
            InputAction::Exit => return false,
            InputAction::None => {}
        }
        true
    }

    pub fn update(&mut self, delta_time: f32) {
        if self.paused {
            return;
        }

        let completed_lap = self.player.update(
            delta_time,
            self.input.throttle(),
            self.input.braking(),
            self.input.steer(),
            &self.track,
        );

        self.statistics.record_frame(self.player.speed, delta_time);

        if let Some(lap_time) = completed_lap {
            self.statistics.record_lap(lap_time);
            println!(
                "Lap {} completed in {:.2}s (best: {:.2}s)",
                self.statistics.laps_completed,
                lap_time.as_secs_f32(),
                self.statistics
                    .best_lap
                    .unwrap_or(lap_time)
                    .as_secs_f32()
            );
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, font: Option<&Font>) -> Result<(), String> {
        road_renderer::render(canvas, &self.track, &self.player, &self.camera)?;
        hud::render_hud(canvas, &self.player, &self.statistics, font)?;

        if self.show_stats {
            hud::render_stats_modal(canvas, &self.statistics, font)?;
        }

        canvas.present();
        Ok(())
    }

    fn regenerate_track(&mut self) {
        println!("Generating new random track...");
        self.track = Track::random(&mut rand::thread_rng());
        self.player.reset();
        self.statistics.record_new_track();
    }
}
