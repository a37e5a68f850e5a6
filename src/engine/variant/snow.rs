use rand::Rng;

use crate::engine::canvas::{Canvas, Ink, Viewport};
use crate::engine::config::AnimationConfig;

/// Accumulation added to a ground segment each time a flake lands in it.
const ACCUMULATION_STEP: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct Snowflake {
    pub x: f32,
    pub y: f32,
    /// Range [1, 4).
    pub radius: f32,
    /// Fall speed per frame. Range [1, 3).
    pub speed: f32,
    /// Constant lateral drift. Range [-0.5, 0.5).
    pub wind: f32,
    /// Wobble amplitude [0, 0.1) and per-frame phase speed [0, 0.05).
    pub wobble: f32,
    pub wobble_speed: f32,
    pub wobble_phase: f32,
}

/// One horizontal sample of the ground-snow silhouette. Height only grows,
/// and only up to its target.
#[derive(Debug, Clone)]
pub struct GroundSnow {
    pub x: f32,
    pub height: f32,
    /// Range [10, 40).
    pub target_height: f32,
}

#[derive(Debug)]
pub struct SnowSim {
    pub flakes: Vec<Snowflake>,
    pub ground: Vec<GroundSnow>,
}

impl SnowSim {
    #[must_use]
    pub fn new(viewport: Viewport, config: &AnimationConfig) -> Self {
        let mut rng = rand::rng();
        let flakes = (0..config.snow_flakes)
            .map(|_| Snowflake {
                x: rng.random_range(0.0..viewport.width()),
                y: rng.random_range(0.0..viewport.height()),
                radius: rng.random_range(1.0..4.0),
                speed: rng.random_range(1.0..3.0),
                wind: rng.random_range(-0.5..0.5),
                wobble: rng.random_range(0.0..0.1),
                wobble_speed: rng.random_range(0.0..0.05),
                wobble_phase: 0.0,
            })
            .collect();
        let segments = config.ground_segments.max(1);
        let ground = (0..segments)
            .map(|i| GroundSnow {
                x: viewport.width() / segments as f32 * i as f32,
                height: 0.0,
                target_height: rng.random_range(10.0..40.0),
            })
            .collect();
        Self { flakes, ground }
    }

    pub fn step(&mut self, canvas: &mut Canvas) {
        let viewport = canvas.viewport();
        let mut rng = rand::rng();

        for flake in &mut self.flakes {
            let glyph = if flake.radius < 2.0 {
                '·'
            } else if flake.radius < 3.0 {
                '•'
            } else {
                '*'
            };
            canvas.plot(flake.x, flake.y, glyph, Ink::Flake);

            flake.wobble_phase += flake.wobble_speed;
            flake.y += flake.speed;
            flake.x += flake.wind + flake.wobble_phase.sin() * flake.wobble;

            if flake.y > viewport.height() {
                flake.y = -flake.radius;
                flake.x = rng.random_range(0.0..viewport.width());
                accumulate(&mut self.ground, flake.x, viewport.width());
            }
            if flake.x > viewport.width() {
                flake.x = 0.0;
            } else if flake.x < 0.0 {
                flake.x = viewport.width();
            }
        }

        paint_silhouette(canvas, &self.ground, viewport);
    }
}

fn accumulate(ground: &mut [GroundSnow], landing_x: f32, width: f32) {
    if ground.is_empty() {
        return;
    }
    let segment_width = width / ground.len() as f32;
    let idx = (landing_x / segment_width) as usize;
    if let Some(segment) = ground.get_mut(idx)
        && segment.height < segment.target_height
    {
        segment.height = (segment.height + ACCUMULATION_STEP).min(segment.target_height);
    }
}

/// Draw the accumulation as a column-filled curve, linearly interpolating
/// height between neighboring segments.
fn paint_silhouette(canvas: &mut Canvas, ground: &[GroundSnow], viewport: Viewport) {
    if ground.is_empty() {
        return;
    }
    let cols = canvas.cols();
    let cell_w = viewport.width() / f32::from(cols);
    let segment_width = viewport.width() / ground.len() as f32;
    for col in 0..cols {
        let x = (f32::from(col) + 0.5) * cell_w;
        let pos = x / segment_width;
        let i = (pos as usize).min(ground.len() - 1);
        let next = (i + 1).min(ground.len() - 1);
        let t = pos - i as f32;
        let height = ground[i].height * (1.0 - t) + ground[next].height * t;
        canvas.fill_column_up(x, height, '▓', Ink::SnowBank);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    #[test]
    fn init_fields_stay_in_documented_ranges() {
        let sim = SnowSim::new(viewport(), &AnimationConfig::default());
        assert_eq!(sim.flakes.len(), 80);
        assert_eq!(sim.ground.len(), 20);
        for flake in &sim.flakes {
            assert!(flake.radius >= 1.0 && flake.radius < 4.0);
            assert!(flake.speed >= 1.0 && flake.speed < 3.0);
            assert!(flake.wind >= -0.5 && flake.wind < 0.5);
        }
        for segment in &sim.ground {
            assert_eq!(segment.height, 0.0);
            assert!(segment.target_height >= 10.0 && segment.target_height < 40.0);
        }
    }

    #[test]
    fn flakes_stay_inside_horizontal_bounds() {
        let mut sim = SnowSim::new(viewport(), &AnimationConfig::default());
        let mut canvas = Canvas::new(80, 24, viewport());
        for _ in 0..300 {
            canvas.clear();
            sim.step(&mut canvas);
        }
        for flake in &sim.flakes {
            assert!(flake.x >= 0.0 && flake.x <= 800.0);
        }
    }

    #[test]
    fn accumulation_is_monotone_and_capped() {
        let mut ground = vec![GroundSnow {
            x: 0.0,
            height: 0.0,
            target_height: 10.0,
        }];
        for _ in 0..200 {
            accumulate(&mut ground, 1.0, 800.0);
        }
        assert!((ground[0].height - 10.0).abs() < 1e-3);
        accumulate(&mut ground, 1.0, 800.0);
        assert!(ground[0].height <= 10.0);
    }

    #[test]
    fn landing_flake_feeds_its_own_segment() {
        let mut ground: Vec<GroundSnow> = (0..4)
            .map(|i| GroundSnow {
                x: 200.0 * i as f32,
                height: 0.0,
                target_height: 40.0,
            })
            .collect();
        accumulate(&mut ground, 450.0, 800.0);
        assert_eq!(ground[2].height, ACCUMULATION_STEP);
        assert_eq!(ground[0].height, 0.0);
    }

    #[test]
    fn silhouette_paints_snow_bank_cells() {
        let vp = viewport();
        let mut canvas = Canvas::new(80, 24, vp);
        let ground: Vec<GroundSnow> = (0..20)
            .map(|i| GroundSnow {
                x: 40.0 * i as f32,
                height: 30.0,
                target_height: 40.0,
            })
            .collect();
        paint_silhouette(&mut canvas, &ground, vp);
        assert!(canvas.ink_count(Ink::SnowBank) >= 80);
    }
}
