//! The sun drawn next to the word: a ring of light points that a dark arc
//! covers a little more with every wrong guess.

use serde::{Deserialize, Serialize};

pub const DEFAULT_RADIUS: f64 = 100.0;
pub const DEFAULT_POINT_SIZE: f64 = 5.0;

/// Angular distance between two neighbouring points.
pub const STEP_DEGREES: u32 = 9;
/// Arc eclipsed by each wrong guess (a fifth of the circle).
pub const ARC_DEGREES: u32 = 72;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shade {
    Light,
    Dark,
}

/// One dot of the sun, centred on (`x`, `y`) relative to the sun's centre.
/// `y` grows downwards, so angles run clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunPoint {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub shade: Shade,
}

/// Build the sun for `attempts` wrong guesses.
///
/// Light points for the whole circle come first, then one dark arc per
/// attempt. Draw them in order so the dark points cover the light ones.
pub fn render(attempts: u32, radius: f64, point_size: f64) -> Vec<SunPoint> {
    let mut points = Vec::new();

    arc(&mut points, 0, 360, radius, point_size, Shade::Light);

    for i in 0..attempts {
        arc(&mut points, arc_start(i), ARC_DEGREES, radius, point_size, Shade::Dark);
    }

    points
}

/// Start angle of the `i`-th dark arc; past a full eclipse the arcs wrap around.
fn arc_start(i: u32) -> u32 {
    (i % (360 / ARC_DEGREES)) * ARC_DEGREES
}

fn arc(points: &mut Vec<SunPoint>, start: u32, range: u32, radius: f64, size: f64, shade: Shade) {
    for step in 0..range / STEP_DEGREES {
        let angle = f64::from((start + step * STEP_DEGREES) % 360).to_radians();
        points.push(SunPoint {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
            size,
            shade,
        });
    }
}
