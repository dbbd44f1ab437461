use std::env;
use std::path::PathBuf;

const DEFAULT_LAYOUT_FILE: &str = "layout.html";
const DEFAULT_NOT_FOUND_FILE: &str = "404.html";
const VIEW_EXTENSION: &str = "html";

/// Where view files live and what the fixed pages are called.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    root: PathBuf,
    layout_file: String,
    not_found_file: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

impl ViewConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            layout_file: DEFAULT_LAYOUT_FILE.to_string(),
            not_found_file: DEFAULT_NOT_FOUND_FILE.to_string(),
        }
    }

    /// Reads `VIEW_ROOT`, falling back to the current directory.
    pub fn from_env() -> Self {
        // Load environment variables from .env if present
        dotenvy::dotenv().ok();
        match env::var("VIEW_ROOT") {
            Ok(root) => Self::new(root),
            Err(_) => Self::default(),
        }
    }

    pub fn layout_file(mut self, name: impl Into<String>) -> Self {
        self.layout_file = name.into();
        self
    }

    pub fn not_found_file(mut self, name: impl Into<String>) -> Self {
        self.not_found_file = name.into();
        self
    }

    pub(crate) fn view_path(&self, view_name: &str) -> PathBuf {
        self.root.join(format!("{view_name}.{VIEW_EXTENSION}"))
    }

    pub(crate) fn layout_path(&self) -> PathBuf {
        self.root.join(&self.layout_file)
    }

    pub(crate) fn not_found_path(&self) -> PathBuf {
        self.root.join(&self.not_found_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_path_appends_html_extension() {
        let config = ViewConfig::new("web/out");
        assert_eq!(config.view_path("index"), PathBuf::from("web/out/index.html"));
    }

    #[test]
    fn fixed_pages_use_defaults_unless_overridden() {
        let config = ViewConfig::new("pages");
        assert_eq!(config.layout_path(), PathBuf::from("pages/layout.html"));
        assert_eq!(config.not_found_path(), PathBuf::from("pages/404.html"));

        let config = ViewConfig::new("pages").not_found_file("missing.html");
        assert_eq!(config.not_found_path(), PathBuf::from("pages/missing.html"));
    }
}
