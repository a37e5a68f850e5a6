//! Weather-driven animation engine: particle pools, variant simulations,
//! frame pacing and the session object tying them together. The engine has
//! no terminal or async dependencies; the host feeds it timestamps, resize
//! events and a condition code, and blits the canvas it paints.

pub mod canvas;
pub mod condition;
pub mod config;
pub mod pacer;
pub mod session;
pub mod variant;

pub use canvas::{Canvas, Cell, Ink, Viewport, viewport_for_grid};
pub use condition::variant_for_condition;
pub use config::AnimationConfig;
pub use pacer::FramePacer;
pub use session::{AnimationSession, RunState};
pub use variant::{Simulation, VariantKind};
