use crate::engine::canvas::{Canvas, Viewport};
use crate::engine::config::AnimationConfig;
use crate::engine::variant::clouds::{CloudBank, CloudStyle};

/// Overcast sky: a denser, slower cloud bank and nothing else.
#[derive(Debug)]
pub struct CloudySim {
    pub clouds: CloudBank,
}

impl CloudySim {
    #[must_use]
    pub fn new(viewport: Viewport, config: &AnimationConfig) -> Self {
        Self {
            clouds: CloudBank::new(config.overcast_clouds, viewport, CloudStyle::OVERCAST),
        }
    }

    pub fn step(&mut self, canvas: &mut Canvas) {
        self.clouds.step(canvas);
    }
}
