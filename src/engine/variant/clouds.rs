use rand::Rng;

use crate::engine::canvas::{Canvas, Ink, Viewport};

/// Off-screen margin clouds drift through before wrapping, in logical px.
const WRAP_MARGIN: f32 = 100.0;

/// Base radii of the five puffs making up one cloud, relative to its center.
const PUFF_SHAPE: [(f32, f32, f32); 5] = [
    (0.0, 0.0, 40.0),
    (30.0, -10.0, 35.0),
    (-30.0, -10.0, 35.0),
    (15.0, 10.0, 30.0),
    (-15.0, 10.0, 30.0),
];

/// Parameter set distinguishing the fair / overcast / storm cloud layers.
#[derive(Debug, Clone, Copy)]
pub struct CloudStyle {
    pub scale_min: f32,
    pub scale_span: f32,
    pub speed_min: f32,
    pub speed_span: f32,
    pub opacity_min: f32,
    pub opacity_span: f32,
    /// Fraction of the surface height the bank occupies from the top.
    pub band: f32,
    pub ink: Ink,
}

impl CloudStyle {
    pub const FAIR: Self = Self {
        scale_min: 0.5,
        scale_span: 0.5,
        speed_min: 0.1,
        speed_span: 0.2,
        opacity_min: 0.5,
        opacity_span: 0.0,
        band: 1.0 / 3.0,
        ink: Ink::Cloud,
    };

    pub const OVERCAST: Self = Self {
        scale_min: 0.5,
        scale_span: 0.5,
        speed_min: 0.1,
        speed_span: 0.3,
        opacity_min: 0.4,
        opacity_span: 0.3,
        band: 0.5,
        ink: Ink::Cloud,
    };

    pub const STORM: Self = Self {
        scale_min: 0.7,
        scale_span: 0.5,
        speed_min: 0.1,
        speed_span: 0.3,
        opacity_min: 0.6,
        opacity_span: 0.3,
        band: 0.5,
        ink: Ink::StormCloud,
    };
}

#[derive(Debug, Clone)]
pub struct CloudPuff {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub speed: f32,
    pub opacity: f32,
}

/// One parameterized drifting-cloud layer shared by the Clear, Cloudy and
/// Thunder variants.
#[derive(Debug)]
pub struct CloudBank {
    pub puffs: Vec<CloudPuff>,
    style: CloudStyle,
}

impl CloudBank {
    #[must_use]
    pub fn new(count: usize, viewport: Viewport, style: CloudStyle) -> Self {
        let mut rng = rand::rng();
        let puffs = (0..count)
            .map(|_| CloudPuff {
                x: rng.random_range(0.0..viewport.width()),
                y: rng.random_range(0.0..(viewport.height() * style.band).max(1.0)),
                scale: style.scale_min + rng.random_range(0.0..1.0) * style.scale_span,
                speed: style.speed_min + rng.random_range(0.0..1.0) * style.speed_span,
                opacity: style.opacity_min + rng.random_range(0.0..1.0) * style.opacity_span,
            })
            .collect();
        Self { puffs, style }
    }

    pub fn step(&mut self, canvas: &mut Canvas) {
        let width = canvas.viewport().width();
        for puff in &mut self.puffs {
            paint_cloud(canvas, puff, self.style.ink);
            puff.x += puff.speed;
            if puff.x > width + WRAP_MARGIN {
                puff.x = -WRAP_MARGIN;
            }
        }
    }
}

fn paint_cloud(canvas: &mut Canvas, puff: &CloudPuff, ink: Ink) {
    let levels: &[char] = if puff.opacity >= 0.7 {
        &['▓', '▓', '▒']
    } else if puff.opacity >= 0.5 {
        &['▒', '▒', '░']
    } else {
        &['░', '░', '░']
    };
    for (dx, dy, r) in PUFF_SHAPE {
        canvas.shaded_disc(
            puff.x + dx * puff.scale,
            puff.y + dy * puff.scale,
            r * puff.scale,
            levels,
            ink,
        );
    }
}
