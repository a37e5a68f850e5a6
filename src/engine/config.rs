use std::time::Duration;

/// Canonical tuning set for the animation variants. The randomized ranges
/// quoted on the fields are what the simulations draw from at init and on
/// recycle, independent of surface size.
#[derive(Debug, Clone)]
pub struct AnimationConfig {
    /// Raindrop pool size.
    pub rain_drops: usize,
    /// Persistent puddles along the lower band of the surface.
    pub puddles: usize,
    /// Snowflake pool size.
    pub snow_flakes: usize,
    /// Horizontal samples of the ground-snow silhouette.
    pub ground_segments: usize,
    /// Rotating sun rays in the Clear variant.
    pub sun_rays: usize,
    /// Drifting clouds on a clear day.
    pub fair_clouds: usize,
    /// Birds crossing the sky in the Clear variant.
    pub birds: usize,
    /// Clouds in the Cloudy and Thunder variants.
    pub overcast_clouds: usize,
    /// Per-frame probability of a lightning flash while idle.
    pub thunder_chance: f64,
    /// Flash countdown length in frames.
    pub thunder_duration: u8,
    /// Frames after a flash ends before the next one may trigger.
    pub thunder_cooldown: u32,
    /// Whether the full-surface flash overlay is painted at all; bolts are
    /// drawn regardless.
    pub flash_enabled: bool,
    /// Soft blobs in the Mist variant.
    pub mist_blobs: usize,
    /// Horizontal streaks in the Windy variant.
    pub wind_streaks: usize,
    /// Swaying grass blades along the bottom edge.
    pub grass_blades: usize,
    /// Target simulation frame rate; the pacer skips frames above it.
    pub target_fps: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            rain_drops: 100,
            puddles: 10,
            snow_flakes: 80,
            ground_segments: 20,
            sun_rays: 12,
            fair_clouds: 3,
            birds: 5,
            overcast_clouds: 10,
            thunder_chance: 0.01,
            thunder_duration: 5,
            thunder_cooldown: 45,
            flash_enabled: true,
            mist_blobs: 200,
            wind_streaks: 60,
            grass_blades: 20,
            target_fps: 30,
        }
    }
}

impl AnimationConfig {
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.target_fps.max(1)))
    }

    /// Reduced-motion profile: quarter the pool sizes, keep everything else.
    #[must_use]
    pub fn reduced_motion(mut self) -> Self {
        self.rain_drops = (self.rain_drops / 4).max(1);
        self.snow_flakes = (self.snow_flakes / 4).max(1);
        self.mist_blobs = (self.mist_blobs / 4).max(1);
        self.wind_streaks = (self.wind_streaks / 4).max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_frame_interval_matches_target_fps() {
        let config = AnimationConfig::default();
        assert_eq!(config.frame_interval(), Duration::from_millis(33));
    }

    #[test]
    fn frame_interval_survives_zero_fps() {
        let config = AnimationConfig {
            target_fps: 0,
            ..AnimationConfig::default()
        };
        assert_eq!(config.frame_interval(), Duration::from_millis(1000));
    }

    #[test]
    fn reduced_motion_scales_pools_but_never_to_zero() {
        let config = AnimationConfig {
            rain_drops: 2,
            ..AnimationConfig::default()
        }
        .reduced_motion();
        assert_eq!(config.rain_drops, 1);
        assert_eq!(config.snow_flakes, 20);
        assert_eq!(config.mist_blobs, 50);
        assert_eq!(config.wind_streaks, 15);
        assert_eq!(config.puddles, 10);
    }
}
