use sdl2::event::Event;
use std::time::Instant;

mod camera;
mod constants;
mod game;
mod input;
mod player;
mod rendering;
mod statistics;
mod track;

use constants::{FRAME_DURATION, WINDOW_HEIGHT, WINDOW_WIDTH};
use game::GameState;

fn main() -> Result<(), String> {
    println!("=== Highway Run - Pseudo-3D Road Renderer ===");
    input::print_controls();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window("Highway Run", WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window
        .into_canvas()
        .accelerated()
        .present_vsync()
        .build()
        .map_err(|e| e.to_string())?;

    let ttf_context = sdl2::ttf::init().map_err(|e| e.to_string())?;
    let font = match ttf_context.load_font("assets/fonts/font.ttf", 18) {
        Ok(font) => Some(font),
        Err(e) => {
            println!("Warning: could not load HUD font: {}", e);
            None
        }
    };

    let mut game = GameState::new();
    let mut event_pump = sdl_context.event_pump()?;
    let mut running = true;
    let mut last_frame = Instant::now();

    println!("Race started!");

    while running {
        let now = Instant::now();
        let delta_time = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => running = false,
                _ => {
                    if !game.handle_event(&event) {
                        running = false;
                    }
                }
            }
        }

        game.update(delta_time);
        game.render(&mut canvas, font.as_ref())?;

        let frame_time = now.elapsed();
        if frame_time < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - frame_time);
        }
    }

    game.statistics().display()?;
    Ok(())
}
