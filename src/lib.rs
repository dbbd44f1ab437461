mod config;
mod error;
mod helpers;
mod renderer;

pub use config::ViewConfig;
pub use error::RenderError;
pub use helpers::{link_to, link_to_with};
pub use renderer::ViewRenderer;
