use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, TextureQuery};
use sdl2::ttf::Font;
use sdl2::video::Window;

use crate::constants::MAX_SPEED;
use crate::player::Player;
use crate::statistics::RaceStatistics;

// Display scale: top speed reads as ~216 km/h
const KMH_PER_UNIT: f32 = 0.018;

/// Per-frame readout in the top-left corner. Text when a font is available,
/// a rect-based speed bar otherwise.
pub fn render_hud(
    canvas: &mut Canvas<Window>,
    player: &Player,
    stats: &RaceStatistics,
    font: Option<&Font>,
) -> Result<(), String> {
    match font {
        Some(font) => render_text_hud(canvas, player, stats, font),
        None => render_bar_hud(canvas, player, stats),
    }
}

fn render_text_hud(
    canvas: &mut Canvas<Window>,
    player: &Player,
    stats: &RaceStatistics,
    font: &Font,
) -> Result<(), String> {
    let format_lap = |lap: Option<std::time::Duration>| match lap {
        Some(time) => format!("{:.2}s", time.as_secs_f32()),
        None => "--".to_string(),
    };

    let lines = vec![
        format!("Speed: {:>3.0} km/h", player.speed * KMH_PER_UNIT),
        format!("Lap {}  {:.1}s", player.lap, player.lap_elapsed().as_secs_f32()),
        format!("Last: {}", format_lap(stats.last_lap)),
        format!("Best: {}", format_lap(stats.best_lap)),
    ];

    let mut y_offset = 10;
    for line in lines.iter() {
        draw_text(canvas, font, line, 10, y_offset)?;
        y_offset += font.height() + 4;
    }

    Ok(())
}

fn draw_text(
    canvas: &mut Canvas<Window>,
    font: &Font,
    text: &str,
    x: i32,
    y: i32,
) -> Result<(), String> {
    let surface = font
        .render(text)
        .blended(Color::RGB(255, 255, 255))
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let texture = texture_creator
        .create_texture_from_surface(&surface)
        .map_err(|e| e.to_string())?;

    let TextureQuery { width, height, .. } = texture.query();
    canvas.copy(&texture, None, Some(Rect::new(x, y, width, height)))?;

    Ok(())
}

// Fallback when no usable font is installed: speed bar plus lap pips
fn render_bar_hud(
    canvas: &mut Canvas<Window>,
    player: &Player,
    stats: &RaceStatistics,
) -> Result<(), String> {
    canvas.set_draw_color(Color::RGBA(0, 0, 0, 200));
    canvas.fill_rect(Rect::new(10, 10, 240, 60))?;

    canvas.set_draw_color(Color::RGB(255, 255, 255));
    canvas.draw_rect(Rect::new(10, 10, 240, 60))?;

    let speed_fraction = (player.speed / MAX_SPEED).clamp(0.0, 1.0);
    let bar_width = (220.0 * speed_fraction) as u32;

    let bar_color = if player.is_off_road() {
        Color::RGB(255, 150, 0)
    } else {
        Color::RGB(0, 255, 0)
    };
    canvas.set_draw_color(bar_color);
    if bar_width > 0 {
        canvas.fill_rect(Rect::new(20, 20, bar_width, 16))?;
    }

    // One pip per completed lap
    canvas.set_draw_color(Color::RGB(0, 255, 0));
    for i in 0..stats.laps_completed.min(25) {
        canvas.fill_rect(Rect::new(20 + (i as i32 * 8), 48, 6, 12))?;
    }

    Ok(())
}

/// Translucent session-statistics overlay, toggled with Space.
pub fn render_stats_modal(
    canvas: &mut Canvas<Window>,
    stats: &RaceStatistics,
    font: Option<&Font>,
) -> Result<(), String> {
    let (window_width, window_height) = canvas.output_size()?;
    canvas.set_draw_color(Color::RGBA(0, 0, 0, 180));
    canvas.fill_rect(Rect::new(0, 0, window_width, window_height))?;

    let modal_width = (window_width as f32 * 0.5) as u32;
    let modal_height = (window_height as f32 * 0.6) as u32;
    let modal_x = (window_width - modal_width) / 2;
    let modal_y = (window_height - modal_height) / 2;

    canvas.set_draw_color(Color::RGB(50, 50, 50));
    canvas.fill_rect(Rect::new(
        modal_x as i32,
        modal_y as i32,
        modal_width,
        modal_height,
    ))?;

    canvas.set_draw_color(Color::RGB(200, 200, 200));
    canvas.draw_rect(Rect::new(
        modal_x as i32,
        modal_y as i32,
        modal_width,
        modal_height,
    ))?;

    let font = match font {
        Some(font) => font,
        // Nothing more to show without a font; the frame still presents
        None => return Ok(()),
    };

    let format_lap = |lap: Option<std::time::Duration>| match lap {
        Some(time) => format!("{:.2} seconds", time.as_secs_f32()),
        None => "N/A (no laps yet)".to_string(),
    };

    let stats_lines = vec![
        "Session Statistics".to_string(),
        "------------------".to_string(),
        format!("Laps completed: {}", stats.laps_completed),
        format!("Tracks driven: {}", stats.tracks_driven),
        format!(
            "Distance traveled: {:.0} units",
            stats.distance_traveled
        ),
        format!(
            "Top speed: {:.0} km/h",
            stats.top_speed * KMH_PER_UNIT
        ),
        String::new(),
        "Lap Times".to_string(),
        "---------".to_string(),
        format!("Best lap: {}", format_lap(stats.best_lap)),
        format!("Last lap: {}", format_lap(stats.last_lap)),
        format!("Average lap: {}", format_lap(stats.average_lap())),
        String::new(),
        format!(
            "Session duration: {:.1} seconds",
            stats.session_duration().as_secs_f32()
        ),
        String::new(),
        "Press Space to close".to_string(),
    ];

    let mut y_offset = modal_y as i32 + 20;
    for line in stats_lines.iter() {
        if line.is_empty() {
            y_offset += 15;
            continue;
        }

        let surface = font
            .render(line)
            .blended(Color::RGB(255, 255, 255))
            .map_err(|e| e.to_string())?;

        let texture_creator = canvas.texture_creator();
        let texture = texture_creator
            .create_texture_from_surface(&surface)
            .map_err(|e| e.to_string())?;

        let TextureQuery { width, height, .. } = texture.query();

        let x = modal_x as i32 + ((modal_width as i32 - width as i32) / 2);
        canvas.copy(&texture, None, Some(Rect::new(x, y_offset, width, height)))?;

        y_offset += height as i32 + 5;
    }

    Ok(())
}
