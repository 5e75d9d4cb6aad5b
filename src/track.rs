use rand::Rng;
use sdl2::pixels::Color;
use std::f32::consts::PI;

use crate::constants::{
    CHECKPOINT_CADENCE, GRASS_DARK, GRASS_LIGHT, LANE_MARKER, LANE_MARKER_CADENCE, ROAD_CHECKPOINT,
    ROAD_DARK, ROAD_LIGHT, ROAD_START, RUMBLE_DARK, RUMBLE_LENGTH, RUMBLE_LIGHT, SEGMENT_LENGTH,
};

/// Colors used to draw one segment: road surface, grass on both sides,
/// rumble strips along the edges, and an optional center lane marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentPalette {
    pub road: Color,
    pub grass: Color,
    pub rumble: Color,
    pub lane: Option<Color>,
}

/// One slice of road. World z of the near edge is `index * SEGMENT_LENGTH`;
/// `p1_y`/`p2_y` are the elevations at the near and far edge, and `curve` is
/// the per-segment horizontal displacement delta accumulated during
/// projection (positive bends right).
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub index: usize,
    pub curve: f32,
    pub p1_y: f32,
    pub p2_y: f32,
    pub palette: SegmentPalette,
}

pub struct Track {
    segments: Vec<Segment>,
    segment_length: f32,
}

impl Track {
    /// The fixed layout of the early prototypes: a right curve, a left
    /// curve, a sharper right and one hill, on a 1600 segment loop.
    pub fn demo() -> Self {
        let mut builder = TrackBuilder::new();
        builder.add_straight(300);
        builder.add_road(25, 50, 25, 2.0, 0.0);
        builder.add_straight(200);
        builder.add_road(25, 50, 25, -2.0, 0.0);
        builder.add_straight(200);
        builder.add_road(25, 50, 25, 3.0, 0.0);
        builder.add_straight(100);
        builder.add_hill(100, 1500.0);
        builder.add_straight(400);
        builder.build()
    }

    /// Procedural layout assembled from the same building blocks. Always
    /// eases elevation back to zero and runs straight into the wrap seam.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut builder = TrackBuilder::new();
        builder.add_straight(100);

        while builder.len() < 1400 {
            match rng.gen_range(0..4) {
                0 => builder.add_straight(rng.gen_range(50..150)),
                1 => {
                    let curve = rng.gen_range(1.0..3.0) * if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
                    builder.add_road(25, rng.gen_range(25..75), 25, curve, builder.last_y());
                }
                2 => builder.add_hill(rng.gen_range(60..140), rng.gen_range(500.0..1500.0)),
                _ => builder.add_s_curves(rng.gen_range(1.5..2.5)),
            }
        }

        // Flatten out before the seam so last.p2_y meets first.p1_y
        if builder.last_y() != 0.0 {
            builder.add_road(50, 0, 50, 0.0, 0.0);
        }
        builder.add_straight(100);
        builder.build()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment_length(&self) -> f32 {
        self.segment_length
    }

    /// Lap length in world units.
    pub fn length(&self) -> f32 {
        self.segments.len() as f32 * self.segment_length
    }

    /// Segment whose span contains world z. Wraps modulo the track, for any
    /// finite z including negatives.
    pub fn find_segment(&self, z: f32) -> &Segment {
        let len = self.segments.len() as i64;
        let mut index = (z / self.segment_length).floor() as i64 % len;
        if index < 0 {
            index += len;
        }
        &self.segments[index as usize]
    }

    /// Wrap a world z into [0, length()).
    pub fn wrap(&self, z: f32) -> f32 {
        let length = self.length();
        let wrapped = z % length;
        if wrapped < 0.0 {
            wrapped + length
        } else {
            wrapped
        }
    }

    /// Fraction of its segment that z has covered, in [0, 1).
    pub fn percent_of_segment(&self, z: f32) -> f32 {
        let wrapped = self.wrap(z);
        (wrapped % self.segment_length) / self.segment_length
    }

    /// Interpolated road elevation under world z.
    pub fn elevation_at(&self, z: f32) -> f32 {
        let segment = self.find_segment(z);
        let percent = self.percent_of_segment(z);
        interpolate(segment.p1_y, segment.p2_y, percent)
    }
}

/// Accumulates (curve, end elevation) pairs and assigns palettes once the
/// whole layout is known.
struct TrackBuilder {
    curves: Vec<f32>,
    end_ys: Vec<f32>,
}

impl TrackBuilder {
    fn new() -> Self {
        TrackBuilder {
            curves: Vec::new(),
            end_ys: Vec::new(),
        }
    }

    fn len(&self) -> usize {
        self.curves.len()
    }

    fn last_y(&self) -> f32 {
        self.end_ys.last().copied().unwrap_or(0.0)
    }

    fn push(&mut self, curve: f32, end_y: f32) {
        self.curves.push(curve);
        self.end_ys.push(end_y);
    }

    /// Core block: ease the curve in over `enter` segments, hold it for
    /// `hold`, ease it out over `leave`, while elevation moves from the
    /// current height to `end_y` with a cosine ease over the whole block.
    fn add_road(&mut self, enter: usize, hold: usize, leave: usize, curve: f32, end_y: f32) {
        let start_y = self.last_y();
        let total = (enter + hold + leave) as f32;
        let mut n = 0;

        for i in 0..enter {
            n += 1;
            self.push(
                ease_in(0.0, curve, i as f32 / enter as f32),
                ease_in_out(start_y, end_y, n as f32 / total),
            );
        }
        for _ in 0..hold {
            n += 1;
            self.push(curve, ease_in_out(start_y, end_y, n as f32 / total));
        }
        for i in 0..leave {
            n += 1;
            self.push(
                ease_in_out(curve, 0.0, i as f32 / leave as f32),
                ease_in_out(start_y, end_y, n as f32 / total),
            );
        }
    }

    fn add_straight(&mut self, count: usize) {
        let y = self.last_y();
        self.add_road(0, count, 0, 0.0, y);
    }

    fn add_hill(&mut self, count: usize, height: f32) {
        let base = self.last_y();
        self.add_road(count / 4, 0, count / 4, 0.0, base + height);
        self.add_road(count / 4, 0, count / 4, 0.0, base);
    }

    fn add_s_curves(&mut self, curve: f32) {
        let y = self.last_y();
        self.add_road(25, 25, 25, curve, y);
        self.add_road(25, 25, 25, -curve, y);
    }

    fn build(self) -> Track {
        let mut segments = Vec::with_capacity(self.curves.len());
        let mut previous_y = 0.0;

        for (index, (&curve, &end_y)) in self.curves.iter().zip(self.end_ys.iter()).enumerate() {
            segments.push(Segment {
                index,
                curve,
                p1_y: previous_y,
                p2_y: end_y,
                palette: palette_for(index),
            });
            previous_y = end_y;
        }

        println!("Initialised track with {} segments", segments.len());

        Track {
            segments,
            segment_length: SEGMENT_LENGTH,
        }
    }
}

fn palette_for(index: usize) -> SegmentPalette {
    let band = index / RUMBLE_LENGTH;
    let light = band % 2 == 0;

    let road = if index < RUMBLE_LENGTH {
        ROAD_START
    } else if index % CHECKPOINT_CADENCE == 0 {
        ROAD_CHECKPOINT
    } else if light {
        ROAD_LIGHT
    } else {
        ROAD_DARK
    };

    SegmentPalette {
        road,
        grass: if light { GRASS_LIGHT } else { GRASS_DARK },
        rumble: if light { RUMBLE_LIGHT } else { RUMBLE_DARK },
        lane: if index % LANE_MARKER_CADENCE < RUMBLE_LENGTH {
            Some(LANE_MARKER)
        } else {
            None
        },
    }
}

pub fn interpolate(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn ease_in(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t * t
}

fn ease_in_out(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * ((-(t * PI).cos() / 2.0) + 0.5)
}
