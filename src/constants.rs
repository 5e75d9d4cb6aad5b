use sdl2::pixels::Color;

pub const WINDOW_WIDTH: u32 = 1024;
pub const WINDOW_HEIGHT: u32 = 768;
pub const FPS: u32 = 60;
pub const FRAME_DURATION: std::time::Duration =
    std::time::Duration::from_millis(1000 / FPS as u64);

// World-space road geometry. ROAD_WIDTH is the half-width from the center
// line to either edge.
pub const ROAD_WIDTH: f32 = 2000.0;
pub const SEGMENT_LENGTH: f32 = 200.0;
pub const RUMBLE_LENGTH: usize = 3;
pub const LANE_MARKER_CADENCE: usize = 6;
pub const CHECKPOINT_CADENCE: usize = 50;

// Camera
pub const CAMERA_HEIGHT: f32 = 1000.0;
pub const FIELD_OF_VIEW: f32 = 100.0; // degrees
pub const DRAW_DISTANCE: usize = 300; // segments rendered per frame
pub const FOG_DENSITY: f32 = 5.0;

// Speed model, derived from the track scale: top speed covers one segment
// per frame at the target frame rate.
pub const MAX_SPEED: f32 = SEGMENT_LENGTH * FPS as f32;
pub const ACCELERATION: f32 = MAX_SPEED / 5.0;
pub const BRAKING: f32 = -MAX_SPEED;
pub const DECELERATION: f32 = -MAX_SPEED / 5.0;
pub const OFF_ROAD_DECEL: f32 = -MAX_SPEED / 2.0;
pub const OFF_ROAD_LIMIT: f32 = MAX_SPEED / 4.0;
pub const CENTRIFUGAL: f32 = 0.3;

pub const SKY_COLOR: Color = Color {
    r: 113,
    g: 197,
    b: 207,
    a: 255,
};
pub const FOG_COLOR: Color = Color {
    r: 0,
    g: 108,
    b: 0,
    a: 255,
};

pub const ROAD_LIGHT: Color = Color {
    r: 107,
    g: 107,
    b: 107,
    a: 255,
};
pub const ROAD_DARK: Color = Color {
    r: 105,
    g: 105,
    b: 105,
    a: 255,
};
pub const ROAD_CHECKPOINT: Color = Color {
    r: 255,
    g: 0,
    b: 0,
    a: 255,
};
pub const ROAD_START: Color = Color {
    r: 255,
    g: 255,
    b: 255,
    a: 255,
};

pub const GRASS_LIGHT: Color = Color {
    r: 16,
    g: 200,
    b: 16,
    a: 255,
};
pub const GRASS_DARK: Color = Color {
    r: 0,
    g: 154,
    b: 0,
    a: 255,
};

pub const RUMBLE_LIGHT: Color = Color {
    r: 255,
    g: 255,
    b: 255,
    a: 255,
};
pub const RUMBLE_DARK: Color = Color {
    r: 187,
    g: 0,
    b: 0,
    a: 255,
};

pub const LANE_MARKER: Color = Color {
    r: 255,
    g: 255,
    b: 255,
    a: 255,
};
