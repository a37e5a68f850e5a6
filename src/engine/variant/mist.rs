use rand::Rng;

use crate::engine::canvas::{Canvas, Ink, Viewport};
use crate::engine::config::AnimationConfig;

#[derive(Debug, Clone)]
pub struct MistBlob {
    pub x: f32,
    pub y: f32,
    /// Range [20, 50).
    pub radius: f32,
    /// Range [0.1, 0.3).
    pub opacity: f32,
    /// Horizontal drift per frame. Range [0.1, 0.3).
    pub speed: f32,
}

/// Large, low-opacity radial blobs drifting right and wrapping at the edge.
#[derive(Debug)]
pub struct MistSim {
    pub blobs: Vec<MistBlob>,
}

impl MistSim {
    #[must_use]
    pub fn new(viewport: Viewport, config: &AnimationConfig) -> Self {
        let mut rng = rand::rng();
        let blobs = (0..config.mist_blobs)
            .map(|_| MistBlob {
                x: rng.random_range(0.0..viewport.width()),
                y: rng.random_range(0.0..viewport.height()),
                radius: rng.random_range(20.0..50.0),
                opacity: rng.random_range(0.1..0.3),
                speed: rng.random_range(0.1..0.3),
            })
            .collect();
        Self { blobs }
    }

    pub fn step(&mut self, canvas: &mut Canvas) {
        let viewport = canvas.viewport();
        let mut rng = rand::rng();
        for blob in &mut self.blobs {
            let levels: &[char] = if blob.opacity >= 0.2 {
                &['▒', '░', '·']
            } else {
                &['░', '·', '·']
            };
            canvas.shaded_disc(blob.x, blob.y, blob.radius, levels, Ink::Mist);

            blob.x += blob.speed;
            if blob.x - blob.radius > viewport.width() {
                blob.x = -blob.radius;
                blob.y = rng.random_range(0.0..viewport.height());
            }
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
        let sim = MistSim::new(viewport(), &AnimationConfig::default());
        assert_eq!(sim.blobs.len(), 200);
        for blob in &sim.blobs {
            assert!(blob.radius >= 20.0 && blob.radius < 50.0);
            assert!(blob.opacity >= 0.1 && blob.opacity < 0.3);
            assert!(blob.speed >= 0.1 && blob.speed < 0.3);
        }
    }

    #[test]
    fn blob_wraps_only_once_fully_off_screen() {
        let mut sim = MistSim::new(viewport(), &AnimationConfig::default());
        let mut canvas = Canvas::new(80, 24, viewport());
        sim.blobs.truncate(1);
        sim.blobs[0].x = 800.0 + sim.blobs[0].radius;
        sim.blobs[0].speed = 0.3;
        sim.step(&mut canvas);
        let blob = &sim.blobs[0];
        assert_eq!(blob.x, -blob.radius);
        assert!(blob.y >= 0.0 && blob.y < 600.0);
    }

    #[test]
    fn step_paints_soft_cells() {
        let mut sim = MistSim::new(viewport(), &AnimationConfig::default());
        let mut canvas = Canvas::new(80, 24, viewport());
        sim.step(&mut canvas);
        assert!(canvas.ink_count(Ink::Mist) > 0);
    }
}
