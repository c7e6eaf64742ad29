//! Structured descriptor markup
//!
//! Container backends assemble an [`Element`] tree and render it once at the
//! end, instead of concatenating tag strings inline. The tree keeps every
//! opened tag closed by construction; escaping and attribute-name validation
//! keep hostile parameter data from corrupting the structure.

use std::fmt::Write;

use crate::error::{Error, Result};

/// Validate a markup name (element tag or attribute name).
///
/// Attribute names cannot be escaped, only rejected, so the rules are
/// strict:
/// - Must not be empty
/// - Maximum 255 characters
/// - Must start with an ASCII letter or underscore
/// - May only contain ASCII alphanumeric characters, `_`, `-`, and `.`
///
/// # Examples
///
/// ```
/// use jndio_core::markup::validate_markup_name;
///
/// assert!(validate_markup_name("driver-name").is_ok());
/// assert!(validate_markup_name("res.type").is_ok());
///
/// assert!(validate_markup_name("").is_err());
/// assert!(validate_markup_name("1st").is_err());
/// assert!(validate_markup_name("a b").is_err());
/// assert!(validate_markup_name("x\"y").is_err());
/// ```
pub fn validate_markup_name(name: &str) -> std::result::Result<(), &'static str> {
    if name.is_empty() {
        return Err("name cannot be empty");
    }

    if name.len() > 255 {
        return Err("name too long (max 255)");
    }

    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return Err("name must start with a letter or underscore"),
    }

    for c in chars {
        if !c.is_ascii_alphanumeric() && c != '_' && c != '-' && c != '.' {
            return Err("name contains a character not allowed in markup names");
        }
    }

    Ok(())
}

/// Escape a string for element text content.
///
/// Replaces `&`, `<`, and `>`.
///
/// # Examples
///
/// ```
/// use jndio_core::markup::escape_text;
///
/// assert_eq!(escape_text("jdbc/Orders"), "jdbc/Orders");
/// assert_eq!(escape_text("a<b&c"), "a&lt;b&amp;c");
/// ```
pub fn escape_text(value: &str) -> String {
    // Fast path: nothing to escape (common case)
    if !value.contains(['&', '<', '>']) {
        return value.to_string();
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Escape a string for a double-quoted attribute value.
///
/// Replaces `&`, `<`, `>`, and `"`.
///
/// # Examples
///
/// ```
/// use jndio_core::markup::escape_attribute;
///
/// assert_eq!(escape_attribute("secret"), "secret");
/// assert_eq!(escape_attribute("a\"b"), "a&quot;b");
/// ```
pub fn escape_attribute(value: &str) -> String {
    if !value.contains(['&', '<', '>', '"']) {
        return value.to_string();
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// One node of a descriptor fragment: a tag with either text content or
/// child elements, plus an ordered attribute list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    text: Option<String>,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    /// Create an empty element
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            text: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create an element carrying text content
    pub fn with_text(tag: &'static str, text: impl Into<String>) -> Self {
        Self {
            tag,
            text: Some(text.into()),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute (order preserved into the rendered output)
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Append a child element
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Render the tree to a descriptor fragment.
    ///
    /// Two-space indentation per depth, attribute-only elements self-close,
    /// no trailing newline. Fails on an attribute name that cannot form a
    /// well-formed markup name; no partial output is returned in that case.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.render_into(&mut out, 0)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String, depth: usize) -> Result<()> {
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{}<{}", indent, self.tag);

        for (name, value) in &self.attributes {
            validate_markup_name(name)
                .map_err(|reason| Error::invalid_parameter_key(name, reason))?;
            let _ = write!(out, " {}=\"{}\"", name, escape_attribute(value));
        }

        match (&self.text, self.children.is_empty()) {
            (Some(text), _) => {
                let _ = write!(out, ">{}</{}>", escape_text(text), self.tag);
            }
            (None, true) => {
                out.push_str("/>");
            }
            (None, false) => {
                out.push('>');
                for child in &self.children {
                    out.push('\n');
                    child.render_into(out, depth + 1)?;
                }
                let _ = write!(out, "\n{}</{}>", indent, self.tag);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_element() {
        let el = Element::with_text("res-ref-name", "jdbc/Orders");
        assert_eq!(el.render().unwrap(), "<res-ref-name>jdbc/Orders</res-ref-name>");
    }

    #[test]
    fn test_render_self_closing_with_attributes() {
        let el = Element::new("init-param").attr("user", "app");
        assert_eq!(el.render().unwrap(), "<init-param user=\"app\"/>");
    }

    #[test]
    fn test_render_nested() {
        let el = Element::new("resource-ref")
            .child(Element::with_text("res-ref-name", "jdbc/Orders"))
            .child(Element::new("init-param").attr("user", "app"));
        assert_eq!(
            el.render().unwrap(),
            "<resource-ref>\n  <res-ref-name>jdbc/Orders</res-ref-name>\n  <init-param user=\"app\"/>\n</resource-ref>"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let el = Element::with_text("res-type", "a<b>&c");
        assert_eq!(el.render().unwrap(), "<res-type>a&lt;b&gt;&amp;c</res-type>");
    }

    #[test]
    fn test_attribute_value_is_escaped() {
        let el = Element::new("init-param").attr("password", "p\"<&>w");
        assert_eq!(
            el.render().unwrap(),
            "<init-param password=\"p&quot;&lt;&amp;&gt;w\"/>"
        );
    }

    #[test]
    fn test_bad_attribute_name_rejected() {
        let el = Element::new("init-param").attr("a b", "x");
        let err = el.render().unwrap_err();
        assert!(err.to_string().contains("a b"));
    }

    #[test]
    fn test_name_validation() {
        assert!(validate_markup_name("driver-name").is_ok());
        assert!(validate_markup_name("_internal").is_ok());
        assert!(validate_markup_name("ns.key").is_ok());

        assert!(validate_markup_name("").is_err());
        assert!(validate_markup_name("9key").is_err());
        assert!(validate_markup_name("key=\"x\"").is_err());
        assert!(validate_markup_name("k\ney").is_err());
        assert!(validate_markup_name(&"a".repeat(256)).is_err());
    }
}
