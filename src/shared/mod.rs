//! Layer-übergreifende Module: Geometrie, Optionen, Render-Vertrag.

pub mod arc_geometry;
pub mod options;
pub mod render_scene;

pub use options::EditorOptions;
pub use render_scene::{
    ArrowHead, ArrowPath, FloatingArrowVisual, Highlight, RenderScene, StartingArrowVisual,
    StateVisual, TransitionVisual,
};
