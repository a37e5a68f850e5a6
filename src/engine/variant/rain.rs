use rand::Rng;

use crate::engine::canvas::{Canvas, Ink, Viewport};
use crate::engine::config::AnimationConfig;

/// A drop recycles into a ripple when it lands within this many radii of the
/// nearest puddle's center.
const RIPPLE_PROXIMITY_RADII: f32 = 2.0;
const RIPPLE_GROWTH: f32 = 0.3;
const RIPPLE_FADE: f32 = 0.02;
const RIPPLE_START_OPACITY: f32 = 0.7;

#[derive(Debug, Clone)]
pub struct Raindrop {
    pub x: f32,
    pub y: f32,
    /// Streak length, drawn downward from (x, y). Range [10, 20).
    pub length: f32,
    /// Fall speed per frame. Range [15, 30).
    pub speed: f32,
    /// Range [1, 3); thick drops get a heavier glyph.
    pub thickness: f32,
}

#[derive(Debug, Clone)]
pub struct Ripple {
    pub x: f32,
    pub y: f32,
    /// Grows from 1 by `RIPPLE_GROWTH` per frame, bounded by `max_radius`.
    pub radius: f32,
    /// Range [5, 15).
    pub max_radius: f32,
    /// Decays from 0.7 by `RIPPLE_FADE` per frame.
    pub opacity: f32,
}

#[derive(Debug, Clone)]
pub struct Puddle {
    pub x: f32,
    pub y: f32,
    /// Range [10, 30).
    pub radius: f32,
    pub ripples: Vec<Ripple>,
}

#[derive(Debug)]
pub struct RainSim {
    pub drops: Vec<Raindrop>,
    pub puddles: Vec<Puddle>,
}

impl RainSim {
    #[must_use]
    pub fn new(viewport: Viewport, config: &AnimationConfig) -> Self {
        let mut rng = rand::rng();
        let drops = (0..config.rain_drops)
            .map(|_| Raindrop {
                x: rng.random_range(0.0..viewport.width()),
                y: rng.random_range(0.0..viewport.height()),
                length: rng.random_range(10.0..20.0),
                speed: rng.random_range(15.0..30.0),
                thickness: rng.random_range(1.0..3.0),
            })
            .collect();
        let puddles = (0..config.puddles)
            .map(|_| Puddle {
                x: rng.random_range(0.0..viewport.width()),
                y: (viewport.height() - rng.random_range(0.0..100.0)).max(0.0),
                radius: rng.random_range(10.0..30.0),
                ripples: Vec::new(),
            })
            .collect();
        Self { drops, puddles }
    }

    pub fn step(&mut self, canvas: &mut Canvas) {
        let viewport = canvas.viewport();
        let mut rng = rand::rng();

        for drop in &mut self.drops {
            let glyph = if drop.thickness >= 2.0 { '║' } else { '│' };
            canvas.vspan(drop.x, drop.y, drop.y + drop.length, glyph, Ink::Drop);

            drop.y += drop.speed;
            if drop.y > viewport.height() {
                // recycle above the surface and hand a ripple to the
                // nearest puddle if the drop landed close enough
                drop.y = -drop.length;
                drop.x = rng.random_range(0.0..viewport.width());
                spawn_ripple(&mut self.puddles, drop.x, &mut rng);
            }
        }

        for puddle in &mut self.puddles {
            canvas.ring(
                puddle.x,
                puddle.y,
                puddle.radius,
                puddle.radius / 3.0,
                '~',
                Ink::Puddle,
            );
            for ripple in &mut puddle.ripples {
                let glyph = if ripple.opacity >= 0.45 { 'o' } else { '·' };
                canvas.ring(
                    ripple.x,
                    ripple.y,
                    ripple.radius,
                    ripple.radius / 3.0,
                    glyph,
                    Ink::Ripple,
                );
                ripple.radius += RIPPLE_GROWTH;
                ripple.opacity -= RIPPLE_FADE;
            }
            puddle
                .ripples
                .retain(|r| r.opacity > 0.0 && r.radius < r.max_radius);
        }
    }
}

/// Read-only nearest-puddle lookup by horizontal distance; the puddle owns
/// the ripple it receives.
fn spawn_ripple(puddles: &mut [Puddle], landing_x: f32, rng: &mut impl Rng) {
    let Some(nearest) = puddles
        .iter_mut()
        .min_by(|a, b| (a.x - landing_x).abs().total_cmp(&(b.x - landing_x).abs()))
    else {
        return;
    };
    if (nearest.x - landing_x).abs() < nearest.radius * RIPPLE_PROXIMITY_RADII {
        let y = nearest.y - rng.random_range(0.0..5.0);
        nearest.ripples.push(Ripple {
            x: landing_x,
            y,
            radius: 1.0,
            max_radius: rng.random_range(5.0..15.0),
            opacity: RIPPLE_START_OPACITY,
        });
    }
}
