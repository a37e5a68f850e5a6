use rand::Rng;

use crate::engine::canvas::{Canvas, Ink, Viewport};
use crate::engine::config::AnimationConfig;

/// Shared sway clock advance per frame, in seconds at the 30fps tick.
const SWAY_TICK: f32 = 1.0 / 30.0;
const SWAY_AMPLITUDE: f32 = 10.0;
/// Phase offset between neighboring blades so the field ripples.
const BLADE_PHASE_STEP: f32 = 0.3;

#[derive(Debug, Clone)]
pub struct WindStreak {
    pub x: f32,
    pub y: f32,
    /// Range [30, 80).
    pub length: f32,
    /// Range [0.5, 2.0); thick streaks get a heavier glyph.
    pub thickness: f32,
    /// Range [3, 8).
    pub speed: f32,
    /// Range [0.1, 0.4).
    pub opacity: f32,
}

/// Decorative ground element; only base position and height persist, the
/// sway comes from the shared time-based sine.
#[derive(Debug, Clone)]
pub struct GrassBlade {
    pub x: f32,
    pub height: f32,
}

#[derive(Debug)]
pub struct WindySim {
    pub streaks: Vec<WindStreak>,
    pub grass: Vec<GrassBlade>,
    /// Shared sway clock in seconds.
    pub time: f32,
}

impl WindySim {
    #[must_use]
    pub fn new(viewport: Viewport, config: &AnimationConfig) -> Self {
        let mut rng = rand::rng();
        let streaks = (0..config.wind_streaks)
            .map(|_| WindStreak {
                x: rng.random_range(0.0..viewport.width()),
                y: rng.random_range(0.0..viewport.height()),
                length: rng.random_range(30.0..80.0),
                thickness: rng.random_range(0.5..2.0),
                speed: rng.random_range(3.0..8.0),
                opacity: rng.random_range(0.1..0.4),
            })
            .collect();
        let blades = config.grass_blades.max(1);
        let max_height = viewport.height() * 0.1;
        let grass = (0..blades)
            .map(|i| GrassBlade {
                x: viewport.width() / blades as f32 * i as f32,
                height: max_height * rng.random_range(0.7..1.0),
            })
            .collect();
        Self {
            streaks,
            grass,
            time: 0.0,
        }
    }

    pub fn step(&mut self, canvas: &mut Canvas) {
        let viewport = canvas.viewport();
        let mut rng = rand::rng();
        self.time += SWAY_TICK;

        for streak in &mut self.streaks {
            let glyph = if streak.thickness >= 1.5 { '═' } else { '─' };
            canvas.hspan(streak.x, streak.x + streak.length, streak.y, glyph, Ink::Streak);

            streak.x += streak.speed;
            if streak.x - streak.length > viewport.width() {
                streak.x = -streak.length;
                streak.y = rng.random_range(0.0..viewport.height());
            }
        }

        for (i, blade) in self.grass.iter().enumerate() {
            let sway = (self.time + i as f32 * BLADE_PHASE_STEP).sin() * SWAY_AMPLITUDE;
            let glyph = if sway > 2.0 {
                '╱'
            } else if sway < -2.0 {
                '╲'
            } else {
                '│'
            };
            let base_y = viewport.height() - 0.001;
            canvas.stroke(
                blade.x,
                base_y,
                blade.x + sway * 1.5,
                base_y - blade.height,
                glyph,
                Ink::Grass,
            );
        }
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
        let sim = WindySim::new(viewport(), &AnimationConfig::default());
        assert_eq!(sim.streaks.len(), 60);
        assert_eq!(sim.grass.len(), 20);
        for streak in &sim.streaks {
            assert!(streak.length >= 30.0 && streak.length < 80.0);
            assert!(streak.speed >= 3.0 && streak.speed < 8.0);
            assert!(streak.opacity >= 0.1 && streak.opacity < 0.4);
        }
        for blade in &sim.grass {
            assert!(blade.height >= 42.0 && blade.height <= 60.0);
        }
    }

    #[test]
    fn streak_recycles_at_the_left_edge() {
        let mut sim = WindySim::new(viewport(), &AnimationConfig::default());
        sim.streaks.truncate(1);
        sim.streaks[0].x = 800.0 + sim.streaks[0].length;
        sim.streaks[0].speed = 3.0;
        let mut canvas = Canvas::new(80, 24, viewport());
        sim.step(&mut canvas);
        let streak = &sim.streaks[0];
        assert_eq!(streak.x, -streak.length);
        assert!(streak.y >= 0.0 && streak.y < 600.0);
    }

    #[test]
    fn grass_sway_is_shared_and_bounded() {
        let mut sim = WindySim::new(viewport(), &AnimationConfig::default());
        let mut canvas = Canvas::new(80, 24, viewport());
        for _ in 0..90 {
            canvas.clear();
            sim.step(&mut canvas);
        }
        assert!((sim.time - 3.0).abs() < 1e-3);
        // blades carry no per-frame state beyond base position and height
        for blade in &sim.grass {
            assert!(blade.height <= 60.0);
        }
    }

    #[test]
    fn step_paints_streaks_and_grass() {
        let mut sim = WindySim::new(viewport(), &AnimationConfig::default());
        let mut canvas = Canvas::new(80, 24, viewport());
        sim.step(&mut canvas);
        assert!(canvas.ink_count(Ink::Streak) > 0);
        assert!(canvas.ink_count(Ink::Grass) > 0);
    }
}
