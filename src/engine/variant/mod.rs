//! The seven weather variants, dispatched through a closed enum. Each
//! simulation owns its pools outright; shared behavior (the drifting cloud
//! bank) is composed, never inherited, so no variant carries fields it does
//! not use.

pub mod clear;
pub mod cloudy;
pub mod clouds;
pub mod mist;
pub mod rain;
pub mod snow;
pub mod thunder;
pub mod windy;

use crate::engine::canvas::{Canvas, Viewport};
use crate::engine::config::AnimationConfig;

pub use clear::ClearSim;
pub use cloudy::CloudySim;
pub use mist::MistSim;
pub use rain::RainSim;
pub use snow::SnowSim;
pub use thunder::ThunderSim;
pub use windy::WindySim;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKind {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Thunder,
    Mist,
    Windy,
}

impl VariantKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            VariantKind::Clear => "Clear",
            VariantKind::Cloudy => "Cloudy",
            VariantKind::Rain => "Rain",
            VariantKind::Snow => "Snow",
            VariantKind::Thunder => "Thunder",
            VariantKind::Mist => "Mist",
            VariantKind::Windy => "Windy",
        }
    }

    pub const ALL: [VariantKind; 7] = [
        VariantKind::Clear,
        VariantKind::Cloudy,
        VariantKind::Rain,
        VariantKind::Snow,
        VariantKind::Thunder,
        VariantKind::Mist,
        VariantKind::Windy,
    ];
}

#[derive(Debug)]
pub enum Simulation {
    Rain(RainSim),
    Snow(SnowSim),
    Clear(ClearSim),
    Cloudy(CloudySim),
    Thunder(ThunderSim),
    Mist(MistSim),
    Windy(WindySim),
}

impl Simulation {
    #[must_use]
    pub fn new(kind: VariantKind, viewport: Viewport, config: &AnimationConfig) -> Self {
        match kind {
            VariantKind::Rain => Simulation::Rain(RainSim::new(viewport, config)),
            VariantKind::Snow => Simulation::Snow(SnowSim::new(viewport, config)),
            VariantKind::Clear => Simulation::Clear(ClearSim::new(viewport, config)),
            VariantKind::Cloudy => Simulation::Cloudy(CloudySim::new(viewport, config)),
            VariantKind::Thunder => Simulation::Thunder(ThunderSim::new(viewport, config)),
            VariantKind::Mist => Simulation::Mist(MistSim::new(viewport, config)),
            VariantKind::Windy => Simulation::Windy(WindySim::new(viewport, config)),
        }
    }

    #[must_use]
    pub fn kind(&self) -> VariantKind {
        match self {
            Simulation::Rain(_) => VariantKind::Rain,
            Simulation::Snow(_) => VariantKind::Snow,
            Simulation::Clear(_) => VariantKind::Clear,
            Simulation::Cloudy(_) => VariantKind::Cloudy,
            Simulation::Thunder(_) => VariantKind::Thunder,
            Simulation::Mist(_) => VariantKind::Mist,
            Simulation::Windy(_) => VariantKind::Windy,
        }
    }

    /// Full re-seed at new dimensions; pools are rebuilt, not rescaled.
    pub fn reinit(&mut self, viewport: Viewport, config: &AnimationConfig) {
        *self = Simulation::new(self.kind(), viewport, config);
    }

    /// Advance one frame tick and paint onto the canvas. A simulation whose
    /// primary pool is empty is a no-op; a dropped frame is not worth a
    /// failure path.
    pub fn step(&mut self, canvas: &mut Canvas) {
        if self.particle_count() == 0 {
            tracing::warn!(variant = self.kind().label(), "step on empty pool, skipping");
            return;
        }
        match self {
            Simulation::Rain(sim) => sim.step(canvas),
            Simulation::Snow(sim) => sim.step(canvas),
            Simulation::Clear(sim) => sim.step(canvas),
            Simulation::Cloudy(sim) => sim.step(canvas),
            Simulation::Thunder(sim) => sim.step(canvas),
            Simulation::Mist(sim) => sim.step(canvas),
            Simulation::Windy(sim) => sim.step(canvas),
        }
    }

    /// Size of the variant's primary particle pool.
    #[must_use]
    pub fn particle_count(&self) -> usize {
        match self {
            Simulation::Rain(sim) => sim.drops.len(),
            Simulation::Snow(sim) => sim.flakes.len(),
            Simulation::Clear(sim) => sim.rays.len(),
            Simulation::Cloudy(sim) => sim.clouds.puffs.len(),
            Simulation::Thunder(sim) => sim.clouds.puffs.len(),
            Simulation::Mist(sim) => sim.blobs.len(),
            Simulation::Windy(sim) => sim.streaks.len(),
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
    fn every_variant_constructs_with_populated_pools() {
        let config = AnimationConfig::default();
        for kind in VariantKind::ALL {
            let sim = Simulation::new(kind, viewport(), &config);
            assert_eq!(sim.kind(), kind);
            assert!(sim.particle_count() > 0, "{kind:?} pool empty at init");
        }
    }

    #[test]
    fn pool_size_is_invariant_over_many_steps() {
        let config = AnimationConfig::default();
        let mut canvas = Canvas::new(80, 24, viewport());
        for kind in VariantKind::ALL {
            let mut sim = Simulation::new(kind, viewport(), &config);
            let initial = sim.particle_count();
            for _ in 0..500 {
                canvas.clear();
                sim.step(&mut canvas);
            }
            assert_eq!(sim.particle_count(), initial, "{kind:?} pool size drifted");
        }
    }

    #[test]
    fn empty_pool_step_is_a_no_op() {
        let config = AnimationConfig {
            rain_drops: 0,
            ..AnimationConfig::default()
        };
        let mut sim = Simulation::new(VariantKind::Rain, viewport(), &config);
        let mut canvas = Canvas::new(80, 24, viewport());
        sim.step(&mut canvas);
        assert_eq!(canvas.ink_count(crate::engine::canvas::Ink::Drop), 0);
    }

    #[test]
    fn reinit_reseeds_at_new_dimensions() {
        let config = AnimationConfig::default();
        let mut sim = Simulation::new(VariantKind::Snow, viewport(), &config);
        sim.reinit(Viewport::new(100.0, 50.0), &config);
        let Simulation::Snow(snow) = &sim else {
            panic!("variant changed across reinit");
        };
        assert_eq!(snow.flakes.len(), config.snow_flakes);
        for flake in &snow.flakes {
            assert!(flake.x < 100.0);
            assert!(flake.y < 50.0);
        }
    }
}
