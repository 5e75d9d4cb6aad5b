use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::camera::{Camera, ScreenPoint};
use crate::constants::{FOG_COLOR, ROAD_WIDTH, SKY_COLOR};
use crate::player::Player;
use crate::track::{interpolate, SegmentPalette, Track};

/// One road segment with both edges projected to screen space, ready to be
/// painted. `fog` is 1.0 at the camera and falls toward 0.0 at the horizon.
#[derive(Debug, Clone, Copy)]
pub struct ProjectedSegment {
    pub near: ScreenPoint,
    pub far: ScreenPoint,
    pub palette: SegmentPalette,
    pub fog: f32,
}

/// Walk `draw_distance` segments ahead of the player, front-to-back,
/// carrying the curve accumulator, and project each one. Pure: no canvas
/// access, so the whole perspective walk is unit-testable.
///
/// Curve model: the road center of segment n is displaced horizontally by
/// the accumulated `x`, with `x += dx; dx += segment.curve` per step. `dx`
/// is seeded from the fraction of the base segment already travelled so the
/// road under the car stays centered between frames.
pub fn project_track(
    track: &Track,
    player: &Player,
    camera: &Camera,
    screen_width: u32,
    screen_height: u32,
) -> Vec<ProjectedSegment> {
    let segments = track.segments();
    let segment_length = track.segment_length();

    let base = track.find_segment(player.position);
    let base_percent = track.percent_of_segment(player.position);

    let camera_x = player.x * ROAD_WIDTH;
    let camera_y = camera.height + track.elevation_at(player.position);
    let camera_z = player.position;

    let mut x = 0.0;
    let mut dx = -(base.curve * base_percent);

    let count = camera.draw_distance.min(segments.len());
    let mut projected = Vec::with_capacity(count);

    for n in 0..count {
        let index = (base.index + n) % segments.len();
        let segment = &segments[index];

        // Segments that wrapped past the end of the array sit one full lap
        // ahead of the camera
        let z_offset = if index < base.index { track.length() } else { 0.0 };
        let near_z = segment.index as f32 * segment_length + z_offset;
        let far_z = near_z + segment_length;

        let offset_near = x;
        let offset_far = x + dx;
        x += dx;
        dx += segment.curve;

        // Near-plane cull
        if near_z - camera_z <= camera.depth {
            continue;
        }

        let near = camera.project(
            offset_near,
            segment.p1_y,
            near_z,
            camera_x,
            camera_y,
            camera_z,
            screen_width,
            screen_height,
            ROAD_WIDTH,
        );
        let far = camera.project(
            offset_far,
            segment.p2_y,
            far_z,
            camera_x,
            camera_y,
            camera_z,
            screen_width,
            screen_height,
            ROAD_WIDTH,
        );

        projected.push(ProjectedSegment {
            near,
            far,
            palette: segment.palette,
            fog: fog_factor(n, camera.draw_distance, camera.fog_density),
        });
    }

    projected
}

/// Clear to the sky color and paint the projected segments back-to-front.
/// Nearer segments overdraw farther ones; that painter's ordering is the
/// entire depth model.
pub fn render(
    canvas: &mut Canvas<Window>,
    track: &Track,
    player: &Player,
    camera: &Camera,
) -> Result<(), String> {
    let (screen_width, screen_height) = canvas.output_size()?;

    canvas.set_draw_color(SKY_COLOR);
    canvas.clear();

    let projected = project_track(track, player, camera, screen_width, screen_height);

    for segment in projected.iter().rev() {
        draw_segment(canvas, segment, screen_width, screen_height)?;
    }

    Ok(())
}

fn draw_segment(
    canvas: &mut Canvas<Window>,
    segment: &ProjectedSegment,
    screen_width: u32,
    screen_height: u32,
) -> Result<(), String> {
    let near = segment.near;
    let far = segment.far;

    // Degenerate or facing away (far edge at or below the near edge on
    // screen, e.g. the back side of a crest)
    if far.y >= near.y {
        return Ok(());
    }

    let fog = segment.fog;

    // Grass spans the full screen width between the two edge rows
    let top = (far.y.max(0.0)) as i32;
    let bottom = (near.y.min(screen_height as f32)) as i32;
    if bottom > top {
        canvas.set_draw_color(blend(segment.palette.grass, FOG_COLOR, fog));
        canvas.fill_rect(Rect::new(0, top, screen_width, (bottom - top) as u32))?;
    }

    // Rumble strips extend past the road edge
    let rumble_near = near.w / 6.0;
    let rumble_far = far.w / 6.0;
    draw_trapezoid(
        canvas,
        blend(segment.palette.rumble, FOG_COLOR, fog),
        near.x,
        near.y,
        near.w + rumble_near,
        far.x,
        far.y,
        far.w + rumble_far,
        screen_width,
        screen_height,
    )?;

    draw_trapezoid(
        canvas,
        blend(segment.palette.road, FOG_COLOR, fog),
        near.x,
        near.y,
        near.w,
        far.x,
        far.y,
        far.w,
        screen_width,
        screen_height,
    )?;

    if let Some(lane) = segment.palette.lane {
        draw_trapezoid(
            canvas,
            blend(lane, FOG_COLOR, fog),
            near.x,
            near.y,
            near.w / 32.0,
            far.x,
            far.y,
            far.w / 32.0,
            screen_width,
            screen_height,
        )?;
    }

    Ok(())
}

/// Scanline-fill a road trapezoid: center/half-width interpolated per row
/// between the far edge (x2, y2, w2) and the near edge (x1, y1, w1). The
/// canvas has no polygon primitive, so each row is a 1-pixel-high rect.
#[allow(clippy::too_many_arguments)]
fn draw_trapezoid(
    canvas: &mut Canvas<Window>,
    color: Color,
    x1: f32,
    y1: f32,
    w1: f32,
    x2: f32,
    y2: f32,
    w2: f32,
    screen_width: u32,
    screen_height: u32,
) -> Result<(), String> {
    if y2 >= y1 {
        return Ok(());
    }

    canvas.set_draw_color(color);

    let top = y2.max(0.0) as i32;
    let bottom = (y1.min(screen_height as f32)) as i32;

    for row in top..bottom {
        let t = (row as f32 - y2) / (y1 - y2);
        let center = interpolate(x2, x1, t);
        let half_width = interpolate(w2, w1, t);

        let left = (center - half_width).max(0.0) as i32;
        let right = (center + half_width).min(screen_width as f32) as i32;
        if right > left {
            canvas.fill_rect(Rect::new(left, row, (right - left) as u32, 1))?;
        }
    }

    Ok(())
}

/// Exponential distance fog: 1 at the camera, tending to 0 at the draw
/// distance. `1 / exp((n / draw_distance)^2 * density)`.
pub fn fog_factor(n: usize, draw_distance: usize, density: f32) -> f32 {
    let ratio = n as f32 / draw_distance as f32;
    (1.0 / (ratio * ratio * density).exp()).clamp(0.0, 1.0)
}

/// Blend `color` toward `fog_color`; t = 1 keeps the color, t = 0 is full
/// fog.
pub fn blend(color: Color, fog_color: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| (a as f32 * t + b as f32 * (1.0 - t)).round() as u8;
    Color::RGB(
        channel(color.r, fog_color.r),
        channel(color.g, fog_color.g),
        channel(color.b, fog_color.b),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DRAW_DISTANCE, FOG_DENSITY, SEGMENT_LENGTH};

    const W: u32 = 1024;
    const H: u32 = 768;

    #[test]
    fn test_fog_factor_range() {
        assert!((fog_factor(0, DRAW_DISTANCE, FOG_DENSITY) - 1.0).abs() < 0.001);
        let mut previous = f32::INFINITY;
        for n in 0..DRAW_DISTANCE {
            let fog = fog_factor(n, DRAW_DISTANCE, FOG_DENSITY);
            assert!((0.0..=1.0).contains(&fog));
            assert!(fog <= previous);
            previous = fog;
        }
        assert!(fog_factor(DRAW_DISTANCE, DRAW_DISTANCE, FOG_DENSITY) < 0.01);
    }

    #[test]
    fn test_blend_endpoints() {
        let a = Color::RGB(200, 100, 0);
        let b = Color::RGB(0, 100, 200);
        assert_eq!(blend(a, b, 1.0), a);
        assert_eq!(blend(a, b, 0.0), b);
        let mid = blend(a, b, 0.5);
        assert_eq!(mid.r, 100);
        assert_eq!(mid.g, 100);
        assert_eq!(mid.b, 100);
    }

    #[test]
    fn test_projection_walk_narrows_toward_horizon() {
        let track = Track::demo();
        let player = Player::new();
        let camera = Camera::new();
        let projected = project_track(&track, &player, &camera, W, H);

        assert!(!projected.is_empty());
        assert!(projected.len() <= camera.draw_distance);

        let first = &projected[0];
        // Near edge is wider and lower on screen than the far edge
        assert!(first.near.w > first.far.w);
        assert!(first.near.y > first.far.y);

        // Over the flat opening straight the rows climb monotonically
        for pair in projected[..200].windows(2) {
            assert!(pair[1].near.y <= pair[0].near.y + 0.001);
        }
    }

    #[test]
    fn test_projection_culls_nothing_ahead_of_camera() {
        let track = Track::demo();
        let player = Player::new();
        let camera = Camera::new();
        for segment in project_track(&track, &player, &camera, W, H) {
            assert!(segment.near.scale > 0.0);
            assert!(segment.far.scale > 0.0);
        }
    }

    #[test]
    fn test_projection_wraps_at_track_end() {
        let track = Track::demo();
        let mut player = Player::new();
        player.position = track.length() - 10.0 * SEGMENT_LENGTH;
        let camera = Camera::new();
        let projected = project_track(&track, &player, &camera, W, H);

        // The walk crosses the seam without losing segments
        assert!(projected.len() > camera.draw_distance / 2);
        // And wrapped segments still sit ahead of the camera
        for segment in &projected {
            assert!(segment.near.scale > 0.0);
        }
    }

    #[test]
    fn test_right_curve_displaces_road_rightward() {
        let track = Track::demo();
        let mut player = Player::new();
        // Straight leading into the right-hand curve at segment 300
        player.position = 250.0 * SEGMENT_LENGTH;
        let camera = Camera::new();
        let projected = project_track(&track, &player, &camera, W, H);

        let near_center = projected[0].near.x;
        let far_center = projected.last().unwrap().far.x;
        assert!(far_center > near_center + 1.0);
    }

    #[test]
    fn test_fog_increases_with_distance() {
        let track = Track::demo();
        let player = Player::new();
        let camera = Camera::new();
        let projected = project_track(&track, &player, &camera, W, H);
        assert!(projected[0].fog > projected.last().unwrap().fog);
    }
}
