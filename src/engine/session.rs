use crate::engine::canvas::{Canvas, Viewport};
use crate::engine::condition::variant_for_condition;
use crate::engine::config::AnimationConfig;
use crate::engine::pacer::FramePacer;
use crate::engine::variant::{Simulation, VariantKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
    Paused,
}

/// One animation session: the active simulation, its canvas, and the frame
/// gate. Owning all of this in one value (instead of process-wide globals)
/// keeps independent sessions possible and makes switching an explicit full
/// teardown.
#[derive(Debug)]
pub struct AnimationSession {
    config: AnimationConfig,
    viewport: Viewport,
    canvas: Canvas,
    pacer: FramePacer,
    sim: Option<Simulation>,
    state: RunState,
}

impl AnimationSession {
    #[must_use]
    pub fn new(viewport: Viewport, cols: u16, rows: u16, config: AnimationConfig) -> Self {
        let pacer = FramePacer::new(config.frame_interval());
        Self {
            config,
            viewport,
            canvas: Canvas::new(cols, rows, viewport),
            pacer,
            sim: None,
            state: RunState::Stopped,
        }
    }

    /// Select the variant for `condition` and (re)start the loop. The
    /// previous simulation instance is discarded entirely; pools are built
    /// fresh for the current viewport. Unknown codes resolve to Clear.
    pub fn start(&mut self, condition: &str, now_ms: u64) {
        let kind = variant_for_condition(condition);
        tracing::debug!(condition, variant = kind.label(), "switching animation");
        self.sim = Some(Simulation::new(kind, self.viewport, &self.config));
        self.canvas.clear();
        self.pacer.reset(now_ms);
        self.state = RunState::Running;
    }

    pub fn pause(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Paused;
        }
    }

    /// Resume after a pause. The pacer is re-anchored to `now_ms` so the
    /// first resumed frame advances by exactly one tick, however long the
    /// pause lasted.
    pub fn resume(&mut self, now_ms: u64) {
        if self.state == RunState::Paused {
            self.pacer.reset(now_ms);
            self.state = RunState::Running;
        }
    }

    /// Full teardown: no simulation, blank canvas, no further frames.
    pub fn stop(&mut self) {
        self.sim = None;
        self.canvas.clear();
        self.state = RunState::Stopped;
    }

    /// Re-seed the active simulation at new surface dimensions. Pools are
    /// statistically redistributed, not rescaled.
    pub fn resize(&mut self, viewport: Viewport, cols: u16, rows: u16) {
        self.viewport = viewport;
        self.canvas.resize(cols, rows, viewport);
        if let Some(sim) = &mut self.sim {
            sim.reinit(viewport, &self.config);
        }
    }

    /// Run at most one simulation step for the timestamp `now_ms`. Returns
    /// whether a step executed (and the canvas was repainted).
    pub fn frame(&mut self, now_ms: u64) -> bool {
        if self.state != RunState::Running {
            return false;
        }
        let Some(sim) = &mut self.sim else {
            return false;
        };
        if !self.pacer.frame_due(now_ms) {
            return false;
        }
        self.canvas.clear();
        sim.step(&mut self.canvas);
        true
    }

    #[must_use]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    #[must_use]
    pub fn run_state(&self) -> RunState {
        self.state
    }

    #[must_use]
    pub fn variant(&self) -> Option<VariantKind> {
        self.sim.as_ref().map(Simulation::kind)
    }

    #[must_use]
    pub fn simulation(&self) -> Option<&Simulation> {
        self.sim.as_ref()
    }
}
