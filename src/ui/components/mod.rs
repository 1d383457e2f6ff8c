//! Reusable UI components

mod button;
mod input_dialog;

pub use button::*;
pub use input_dialog::*;
