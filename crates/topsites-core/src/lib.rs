pub mod config;
pub mod logging;

pub mod defaults;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod prefs;
pub mod site;
pub mod source;
pub mod sponsored;
