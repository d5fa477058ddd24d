//! One view per wizard screen.

mod final_report;
mod home;
mod layer;

pub use final_report::render_final_report;
pub use home::render_home;
pub use layer::render_layer;
