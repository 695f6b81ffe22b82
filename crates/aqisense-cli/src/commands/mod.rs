//! Command implementations for the CLI.

mod config;
mod model;
mod predict;
mod scale;

pub use config::cmd_config;
pub use model::cmd_model;
pub use predict::{PredictArgs, cmd_predict};
pub use scale::cmd_scale;
