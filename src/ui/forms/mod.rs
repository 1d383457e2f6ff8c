//! Form pages and field rendering

mod field_renderer;
pub mod form_page;
