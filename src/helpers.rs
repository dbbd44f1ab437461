use minijinja::Environment;
use minijinja::value::Value;

/// Builds an anchor tag from a URL and literal link text.
///
/// Neither `url` nor `text` is escaped; callers sanitize untrusted input.
pub fn link_to(url: &str, text: &str) -> String {
    format!("<a href='{url}'>{text}</a>")
}

/// Like [`link_to`], but the link text comes from invoking `block`.
pub fn link_to_with<F>(url: &str, block: F) -> String
where
    F: FnOnce() -> String,
{
    link_to(url, &block())
}

pub(crate) fn register(env: &mut Environment<'_>) {
    env.add_function("link_to", |url: String, text: Option<String>| {
        // Safe string, so an auto-escaping template does not mangle the tag
        Value::from_safe_string(link_to(&url, text.as_deref().unwrap_or_default()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_to_with_text() {
        assert_eq!(link_to("/home", "Home"), "<a href='/home'>Home</a>");
    }

    #[test]
    fn link_to_with_block() {
        assert_eq!(
            link_to_with("/home", || "Go Home".to_string()),
            "<a href='/home'>Go Home</a>"
        );
    }

    #[test]
    fn link_to_with_empty_text() {
        assert_eq!(link_to("/home", ""), "<a href='/home'></a>");
    }
}
