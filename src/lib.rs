//! DFA-Sandbox-Editor-Kern.
//! Automaten-Modell, Arc-Geometrie und Hit-Testing als Library
//! exportiert für Tests und Frontends.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{AppState, FloatingArrow, RunState, SelectionState, StartingArrow};
pub use core::{is_input_char, Automaton, EvaluationResult, State, Transition};
pub use shared::{
    ArrowHead, ArrowPath, EditorOptions, FloatingArrowVisual, Highlight, RenderScene,
    StartingArrowVisual, StateVisual, TransitionVisual,
};
