//! HTML sanitization for rendered post bodies

use ammonia::Builder;
use std::borrow::Cow;

/// CSS properties syntect emits for highlighted code
const ALLOWED_STYLE_PROPERTIES: &[&str] = &[
    "color",
    "background-color",
    "font-weight",
    "font-style",
    "text-decoration",
];

/// Allow-list sanitizer applied to rendered markdown before it is handed to
/// the page layer
pub struct HtmlSanitizer {
    builder: Builder<'static>,
}

impl HtmlSanitizer {
    pub fn new() -> Self {
        let mut builder = Builder::default();

        builder.add_tags(&["input"]);
        builder.add_tag_attributes("input", &["type", "checked", "disabled"]);
        builder.add_tag_attributes("figure", &["class"]);
        builder.add_tag_attributes("td", &["class", "align"]);
        builder.add_tag_attributes("th", &["align"]);
        builder.add_tag_attributes("code", &["class"]);
        builder.add_tag_attributes("pre", &["style"]);
        builder.add_tag_attributes("span", &["class", "style"]);
        builder.add_tag_attributes("div", &["class", "id"]);
        builder.add_tag_attributes("sup", &["class", "id"]);
        builder.add_tag_attributes("a", &["id"]);

        builder.attribute_filter(|_element, attribute, value| {
            if attribute.eq_ignore_ascii_case("style") {
                sanitize_style_attribute(value).map(Cow::Owned)
            } else {
                Some(Cow::Borrowed(value))
            }
        });

        Self { builder }
    }

    /// Strip everything outside the allow-list
    pub fn clean(&self, html: &str) -> String {
        self.builder.clean(html).to_string()
    }
}

impl Default for HtmlSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep only simple colour/font declarations; `None` drops the attribute
fn sanitize_style_attribute(value: &str) -> Option<String> {
    let declarations: Vec<String> = value
        .split(';')
        .filter_map(|decl| {
            let (property, val) = decl.split_once(':')?;
            let property = property.trim().to_ascii_lowercase();
            let val = val.trim();
            let safe_value = !val.is_empty()
                && val.chars().all(|c| {
                    c.is_ascii_alphanumeric() || matches!(c, '#' | ' ' | '-' | ',' | '.' | '%')
                });
            (ALLOWED_STYLE_PROPERTIES.contains(&property.as_str()) && safe_value)
                .then(|| format!("{}:{}", property, val))
        })
        .collect();

    if declarations.is_empty() {
        None
    } else {
        Some(format!("{};", declarations.join(";")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_basic_markup() {
        let sanitizer = HtmlSanitizer::new();
        let html = "<h1>Title</h1>\n<p>Hello <em>there</em></p>\n";
        assert_eq!(sanitizer.clean(html), html);
    }

    #[test]
    fn test_removes_script_and_handlers() {
        let sanitizer = HtmlSanitizer::new();
        let cleaned = sanitizer.clean(
            r#"<p onclick="steal()">Hi</p><script>alert(1)</script><a href="javascript:alert(1)">x</a>"#,
        );
        assert!(!cleaned.contains("script"));
        assert!(!cleaned.contains("onclick"));
        assert!(!cleaned.contains("javascript:"));
        assert!(cleaned.contains("<p>Hi</p>"));
    }

    #[test]
    fn test_keeps_highlight_colours() {
        let sanitizer = HtmlSanitizer::new();
        let cleaned = sanitizer.clean(r#"<span style="color:#c0c5ce;">let</span>"#);
        assert_eq!(cleaned, r#"<span style="color:#c0c5ce;">let</span>"#);
    }

    #[test]
    fn test_style_filter() {
        assert_eq!(
            sanitize_style_attribute("color:#fff; position: fixed"),
            Some("color:#fff;".to_string())
        );
        assert_eq!(
            sanitize_style_attribute("background-color:url(javascript:x)"),
            None
        );
        assert_eq!(sanitize_style_attribute("position:absolute"), None);
    }

    #[test]
    fn test_task_list_checkbox_survives() {
        let sanitizer = HtmlSanitizer::new();
        let cleaned = sanitizer.clean(r#"<li><input disabled="" type="checkbox"> todo</li>"#);
        assert!(cleaned.contains("<input"));
        assert!(cleaned.contains("checkbox"));
    }
}
