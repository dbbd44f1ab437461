use std::fs;
use std::io;
use std::path::PathBuf;

use log::{debug, warn};
use minijinja::value::Value;
use minijinja::{Environment, context};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::config::ViewConfig;
use crate::error::RenderError;
use crate::helpers;

static ENGINE: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    helpers::register(&mut env);
    env
});

/// Resolves view names to template files and renders them.
///
/// Templates are re-read from disk on every call; edits are visible on the
/// next render. All operations return the rendered string.
#[derive(Debug, Clone, Default)]
pub struct ViewRenderer {
    config: ViewConfig,
}

impl ViewRenderer {
    pub fn new(config: ViewConfig) -> Self {
        Self { config }
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self::new(ViewConfig::new(root))
    }

    /// Renders `<root>/<view_name>.html` against `ctx`.
    ///
    /// A missing view file yields the static not-found page instead. The read
    /// is attempted directly rather than preceded by an existence check, so a
    /// file deleted mid-request still lands on the fallback.
    pub fn render_view<T: Serialize>(&self, view_name: &str, ctx: T) -> Result<String, RenderError> {
        let path = self.config.view_path(view_name);
        let source = match fs::read_to_string(&path) {
            Ok(source) => source,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!("view '{view_name}' not found at {}, serving not-found page", path.display());
                return self.render_not_found();
            }
            Err(err) => return Err(RenderError::io(path, err)),
        };
        debug!("rendering view '{view_name}' from {}", path.display());
        Ok(ENGINE.render_str(&source, ctx)?)
    }

    /// Renders the layout template, exposing `content_provider` to it as the
    /// callable `content` alongside the values in `ctx`.
    ///
    /// A missing layout file is an error; there is no fallback.
    pub fn render_layout<T, F>(&self, content_provider: F, ctx: T) -> Result<String, RenderError>
    where
        T: Serialize,
        F: Fn() -> String + Send + Sync + 'static,
    {
        let path = self.config.layout_path();
        let source =
            fs::read_to_string(&path).map_err(|err| RenderError::io(path.clone(), err))?;
        debug!("rendering layout from {}", path.display());
        let content = Value::from_function(move || content_provider());
        let scope = context! { content, ..Value::from_serialize(&ctx) };
        Ok(ENGINE.render_str(&source, scope)?)
    }

    /// Returns the static not-found page verbatim; no templating applied.
    pub fn render_not_found(&self) -> Result<String, RenderError> {
        let path = self.config.not_found_path();
        debug!("serving not-found page from {}", path.display());
        fs::read_to_string(&path).map_err(|err| RenderError::io(path, err))
    }
}
