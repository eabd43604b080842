//! Core-Domänentypen: Zustände, Übergänge, Automat.

pub mod automaton;
pub mod state;
pub mod transition;

pub use automaton::{Automaton, EvaluationResult};
pub use state::{is_input_char, State};
pub use transition::Transition;
