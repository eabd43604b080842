//! App-Layer: Session-Zustand, Use-Cases und Szenen-Builder.

pub mod render_scene;
pub mod state;
pub mod use_cases;

pub use state::{AppState, FloatingArrow, RunState, SelectionState, StartingArrow};
