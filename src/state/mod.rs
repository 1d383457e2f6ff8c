//! Application state module

mod app_state;
mod forms;
mod page;
mod router;

pub use app_state::*;
pub use forms::*;
pub use page::*;
pub use router::*;
