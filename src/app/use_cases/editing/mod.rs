//! Mutierende Use-Cases: Zustände, Übergänge, Startzustand, Labels.

pub mod add_state;
pub mod connect;
pub mod delete_state;
pub mod edit_label;
pub mod starting_state;
