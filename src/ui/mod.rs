//! UI modules for the job matcher window
//!
//! Rendering code for the header, the search form and the results table.

mod components;
mod results_table;
mod search_form;
pub mod theme;

pub use components::{render_about_dialog, render_header};
pub use search_form::render_search_view;
