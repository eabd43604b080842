//! Use-Cases: eine Datei pro Nutzer-Geste, alle über `&mut AppState`.

pub mod editing;
pub mod run;
pub mod selection;
