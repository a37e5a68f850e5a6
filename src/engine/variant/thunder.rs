use rand::Rng;

use crate::engine::canvas::{Canvas, Ink, Viewport};
use crate::engine::config::AnimationConfig;
use crate::engine::variant::clouds::{CloudBank, CloudStyle};

/// Peak flash overlay opacity at the start of an episode.
const FLASH_PEAK: f32 = 0.7;

/// Flash countdown: `IDLE` (remaining == 0) or `FLASHING` (1..=duration).
/// A trigger is possible only while idle and after the post-flash cooldown
/// has fully elapsed, so an episode can never re-trigger mid-flash.
#[derive(Debug, Clone)]
pub struct LightningTimer {
    duration: u8,
    remaining: u8,
    chance: f64,
    cooldown: u32,
    cooldown_left: u32,
}

impl LightningTimer {
    #[must_use]
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            duration: config.thunder_duration.max(1),
            remaining: 0,
            chance: config.thunder_chance.clamp(0.0, 1.0),
            cooldown: config.thunder_cooldown,
            cooldown_left: 0,
        }
    }

    #[must_use]
    pub fn is_flashing(&self) -> bool {
        self.remaining > 0
    }

    #[must_use]
    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    /// Advance one frame; returns the flash overlay opacity for this frame,
    /// or `None` while idle.
    pub fn tick(&mut self, rng: &mut impl Rng) -> Option<f32> {
        if self.remaining == 0 {
            if self.cooldown_left > 0 {
                self.cooldown_left -= 1;
                return None;
            }
            if !rng.random_bool(self.chance) {
                return None;
            }
            self.remaining = self.duration;
        }
        let opacity = FLASH_PEAK * f32::from(self.remaining) / f32::from(self.duration);
        self.remaining -= 1;
        if self.remaining == 0 {
            self.cooldown_left = self.cooldown;
        }
        Some(opacity)
    }
}

/// Storm: composes a dark cloud bank with its own lightning state, rather
/// than borrowing fields from another variant.
#[derive(Debug)]
pub struct ThunderSim {
    pub clouds: CloudBank,
    pub lightning: LightningTimer,
    flash_enabled: bool,
}

impl ThunderSim {
    #[must_use]
    pub fn new(viewport: Viewport, config: &AnimationConfig) -> Self {
        Self {
            clouds: CloudBank::new(config.overcast_clouds, viewport, CloudStyle::STORM),
            lightning: LightningTimer::new(config),
            flash_enabled: config.flash_enabled,
        }
    }

    pub fn step(&mut self, canvas: &mut Canvas) {
        let mut rng = rand::rng();
        self.clouds.step(canvas);

        if let Some(opacity) = self.lightning.tick(&mut rng) {
            if self.flash_enabled {
                canvas.set_flash(opacity);
            }
            paint_bolt(canvas, &mut rng);
        }
    }
}

/// Jagged polyline from the top edge down to 80% of the surface height.
fn paint_bolt(canvas: &mut Canvas, rng: &mut impl Rng) {
    let viewport = canvas.viewport();
    let mut x = rng.random_range(0.0..viewport.width());
    let mut y = 0.0;
    let floor = viewport.height() * 0.8;
    while y < floor {
        let next_x = x + rng.random_range(-40.0..40.0);
        let next_y = y + rng.random_range(20.0..70.0);
        let glyph = if next_x >= x { '╲' } else { '╱' };
        canvas.stroke(x, y, next_x, next_y, glyph, Ink::Bolt);
        x = next_x;
        y = next_y;
    }
}
