pub mod controller;
pub mod state;

pub use controller::{DrawController, DrawEvent, SHUFFLE_STEPS};
pub use state::{DrawPhase, DrawState};
