use rand::Rng;

use crate::engine::canvas::{Canvas, Ink, Viewport};
use crate::engine::config::AnimationConfig;
use crate::engine::variant::clouds::{CloudBank, CloudStyle};

const SUN_RADIUS: f32 = 40.0;
/// Birds wrap once fully past the right edge, re-entering from the left.
const BIRD_MARGIN: f32 = 20.0;

#[derive(Debug, Clone)]
pub struct SunRay {
    /// Base angle, evenly distributed around the disc.
    pub angle: f32,
    /// Range [50, 80).
    pub length: f32,
    /// Rotation per frame in radians. Range [0.03, 0.10).
    pub spin: f32,
}

#[derive(Debug, Clone)]
pub struct Bird {
    pub x: f32,
    pub y: f32,
    /// Horizontal speed per frame. Range [0.5, 1.5).
    pub speed: f32,
    /// Sinusoidal wing flap: phase advances by `wing_speed` each frame.
    pub wing_phase: f32,
    /// Range [0.05, 0.15).
    pub wing_speed: f32,
}

#[derive(Debug)]
pub struct ClearSim {
    pub sun_x: f32,
    pub sun_y: f32,
    pub rays: Vec<SunRay>,
    pub clouds: CloudBank,
    pub birds: Vec<Bird>,
    /// Shared ray-rotation phase, in frames.
    pub phase: f32,
}

impl ClearSim {
    #[must_use]
    pub fn new(viewport: Viewport, config: &AnimationConfig) -> Self {
        let mut rng = rand::rng();
        let ray_count = config.sun_rays.max(1);
        let rays = (0..ray_count)
            .map(|i| SunRay {
                angle: i as f32 / ray_count as f32 * std::f32::consts::TAU,
                length: rng.random_range(50.0..80.0),
                spin: rng.random_range(0.03..0.10),
            })
            .collect();
        let birds = (0..config.birds)
            .map(|_| Bird {
                x: rng.random_range(0.0..viewport.width()),
                y: bird_lane(viewport, &mut rng),
                speed: rng.random_range(0.5..1.5),
                wing_phase: 0.0,
                wing_speed: rng.random_range(0.05..0.15),
            })
            .collect();
        Self {
            sun_x: viewport.width() * 0.8,
            sun_y: viewport.height() * 0.2,
            rays,
            clouds: CloudBank::new(config.fair_clouds, viewport, CloudStyle::FAIR),
            birds,
            phase: 0.0,
        }
    }

    pub fn step(&mut self, canvas: &mut Canvas) {
        let viewport = canvas.viewport();
        let mut rng = rand::rng();
        self.phase += 1.0;

        canvas.shaded_disc(self.sun_x, self.sun_y, SUN_RADIUS, &['▓', '▒', '░'], Ink::Sun);
        for ray in &self.rays {
            let angle = ray.angle + self.phase * ray.spin;
            let x0 = self.sun_x + angle.cos() * SUN_RADIUS;
            let y0 = self.sun_y + angle.sin() * SUN_RADIUS;
            let x1 = self.sun_x + angle.cos() * (SUN_RADIUS + ray.length);
            let y1 = self.sun_y + angle.sin() * (SUN_RADIUS + ray.length);
            canvas.stroke(x0, y0, x1, y1, ray_glyph(angle), Ink::SunRay);
        }

        self.clouds.step(canvas);

        for bird in &mut self.birds {
            bird.wing_phase += bird.wing_speed;
            let glyph = if bird.wing_phase.sin() >= 0.0 { 'v' } else { 'V' };
            canvas.plot(bird.x, bird.y, glyph, Ink::Bird);

            bird.x += bird.speed;
            if bird.x > viewport.width() + BIRD_MARGIN {
                bird.x = -BIRD_MARGIN;
                bird.y = bird_lane(viewport, &mut rng);
            }
        }
    }
}

fn bird_lane(viewport: Viewport, rng: &mut impl Rng) -> f32 {
    viewport.height() / 4.0 + rng.random_range(0.0..(viewport.height() / 2.0).max(0.001))
}

/// Pick a line glyph by angle octant so rays read as radiating strokes.
fn ray_glyph(angle: f32) -> char {
    let octant = ((angle.rem_euclid(std::f32::consts::TAU) / std::f32::consts::TAU * 8.0) as usize)
        .min(7);
    match octant {
        0 | 4 => '─',
        1 | 5 => '╲',
        2 | 6 => '│',
        _ => '╱',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    #[test]
    fn sun_sits_in_the_upper_right() {
        let sim = ClearSim::new(viewport(), &AnimationConfig::default());
        assert_eq!(sim.sun_x, 640.0);
        assert_eq!(sim.sun_y, 120.0);
        assert_eq!(sim.rays.len(), 12);
        assert_eq!(sim.birds.len(), 5);
        assert_eq!(sim.clouds.puffs.len(), 3);
    }

    #[test]
    fn rays_are_evenly_distributed_with_bounded_spin() {
        let sim = ClearSim::new(viewport(), &AnimationConfig::default());
        for (i, ray) in sim.rays.iter().enumerate() {
            let expected = i as f32 / 12.0 * std::f32::consts::TAU;
            assert!((ray.angle - expected).abs() < 1e-5);
            assert!(ray.length >= 50.0 && ray.length < 80.0);
            assert!(ray.spin >= 0.03 && ray.spin < 0.10);
        }
    }

    #[test]
    fn bird_wraps_to_left_edge_with_new_lane() {
        let mut sim = ClearSim::new(viewport(), &AnimationConfig::default());
        sim.birds[0].x = 800.0 + BIRD_MARGIN;
        sim.birds[0].speed = 1.0;
        let mut canvas = Canvas::new(80, 24, viewport());
        sim.step(&mut canvas);
        let bird = &sim.birds[0];
        assert_eq!(bird.x, -BIRD_MARGIN);
        assert!(bird.y >= 150.0 && bird.y < 450.0);
    }

    #[test]
    fn step_paints_sun_rays_and_birds() {
        let mut sim = ClearSim::new(viewport(), &AnimationConfig::default());
        let mut canvas = Canvas::new(80, 24, viewport());
        sim.step(&mut canvas);
        assert!(canvas.ink_count(Ink::Sun) > 0);
        assert!(canvas.ink_count(Ink::SunRay) > 0);
    }

    #[test]
    fn ray_glyph_covers_all_octants() {
        for i in 0..16 {
            let angle = i as f32 * std::f32::consts::TAU / 16.0;
            let glyph = ray_glyph(angle);
            assert!(matches!(glyph, '─' | '╲' | '│' | '╱'));
        }
    }
}
