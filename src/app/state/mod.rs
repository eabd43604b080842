//! Session-Zustand: App-State, Selektion, Lauf-Cursor.

pub mod app_state;
pub mod run;
pub mod selection;

pub use app_state::AppState;
pub use run::RunState;
pub use selection::{FloatingArrow, SelectionState, StartingArrow};
