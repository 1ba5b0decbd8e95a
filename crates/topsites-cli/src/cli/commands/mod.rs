//! CLI command handlers.

mod list;
mod normalize;
mod suggestions;

pub use list::run_list;
pub use normalize::run_normalize;
pub use suggestions::{run_remove_suggestion, run_restore_suggestions, run_suggestions};
