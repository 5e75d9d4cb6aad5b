use crate::constants::{CAMERA_HEIGHT, DRAW_DISTANCE, FIELD_OF_VIEW, FOG_DENSITY};

/// A world point projected to screen space: pixel center, pixel row and the
/// projected half-width of the road at that depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub scale: f32,
}

/// Projection parameters. `depth` is the distance to the projection plane
/// for the configured field of view; the whole perspective trick is
/// `scale = depth / z`.
pub struct Camera {
    pub height: f32,
    pub depth: f32,
    pub draw_distance: usize,
    pub fog_density: f32,
}

impl Camera {
    pub fn new() -> Self {
        Camera {
            height: CAMERA_HEIGHT,
            depth: 1.0 / (FIELD_OF_VIEW.to_radians() / 2.0).tan(),
            draw_distance: DRAW_DISTANCE,
            fog_density: FOG_DENSITY,
        }
    }

    /// Project a world point relative to the camera at
    /// (camera_x, camera_y, camera_z). Callers cull `z - camera_z <= 0`
    /// before projecting; world y is up, screen y is down.
    #[allow(clippy::too_many_arguments)]
    pub fn project(
        &self,
        x: f32,
        y: f32,
        z: f32,
        camera_x: f32,
        camera_y: f32,
        camera_z: f32,
        screen_width: u32,
        screen_height: u32,
        road_width: f32,
    ) -> ScreenPoint {
        let half_width = screen_width as f32 / 2.0;
        let half_height = screen_height as f32 / 2.0;

        let tx = x - camera_x;
        let ty = y - camera_y;
        let tz = z - camera_z;

        let scale = self.depth / tz;

        ScreenPoint {
            x: half_width + scale * tx * half_width,
            y: half_height - scale * ty * half_height,
            w: scale * road_width * half_width,
            scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_on_axis_projects_to_center() {
        let camera = Camera::new();
        let point = camera.project(0.0, 0.0, 1000.0, 0.0, 0.0, 0.0, 1024, 768, 2000.0);
        assert!((point.x - 512.0).abs() < 0.001);
        assert!((point.y - 384.0).abs() < 0.001);
    }

    #[test]
    fn test_doubling_depth_halves_scale() {
        let camera = Camera::new();
        let near = camera.project(500.0, 0.0, 1000.0, 0.0, 0.0, 0.0, 1024, 768, 2000.0);
        let far = camera.project(500.0, 0.0, 2000.0, 0.0, 0.0, 0.0, 1024, 768, 2000.0);
        assert!((near.scale - 2.0 * far.scale).abs() < 0.0001);
        assert!((near.w - 2.0 * far.w).abs() < 0.001);
    }

    #[test]
    fn test_point_above_camera_rises_on_screen() {
        let camera = Camera::new();
        let level = camera.project(0.0, 0.0, 1000.0, 0.0, 0.0, 0.0, 1024, 768, 2000.0);
        let above = camera.project(0.0, 500.0, 1000.0, 0.0, 0.0, 0.0, 1024, 768, 2000.0);
        // Screen y grows downward
        assert!(above.y < level.y);
    }

    #[test]
    fn test_camera_translation_is_relative() {
        let camera = Camera::new();
        let a = camera.project(0.0, 0.0, 3000.0, 0.0, 0.0, 2000.0, 1024, 768, 2000.0);
        let b = camera.project(100.0, 50.0, 1500.0, 100.0, 50.0, 500.0, 1024, 768, 2000.0);
        assert!((a.x - b.x).abs() < 0.001);
        assert!((a.y - b.y).abs() < 0.001);
        assert!((a.scale - b.scale).abs() < 0.0001);
    }

    #[test]
    fn test_depth_matches_field_of_view() {
        let camera = Camera::new();
        // 100 degree fov: depth = 1 / tan(50deg)
        assert!((camera.depth - 1.0 / 50.0_f32.to_radians().tan()).abs() < 0.0001);
    }
}
