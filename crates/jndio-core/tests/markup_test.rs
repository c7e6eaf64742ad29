//! Unit tests for the jndio-core markup module
//!
//! The proptest section generates hostile parameter values and verifies the
//! structural invariants hold for every rendered fragment.

use jndio_core::markup::{escape_attribute, escape_text, validate_markup_name, Element};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_render_full_resource_ref_shape() {
    let fragment = Element::new("resource-ref")
        .child(Element::with_text("res-ref-name", "jdbc/Orders"))
        .child(Element::with_text("res-type", "javax.sql.DataSource"))
        .child(Element::new("init-param").attr("user", "app"))
        .child(Element::new("init-param").attr("password", "secret"))
        .render()
        .unwrap();

    assert_eq!(
        fragment,
        "<resource-ref>\n\
         \x20\x20<res-ref-name>jdbc/Orders</res-ref-name>\n\
         \x20\x20<res-type>javax.sql.DataSource</res-type>\n\
         \x20\x20<init-param user=\"app\"/>\n\
         \x20\x20<init-param password=\"secret\"/>\n\
         </resource-ref>"
    );
}

#[test]
fn test_render_is_deterministic() {
    let element = Element::new("resource-ref")
        .child(Element::with_text("res-ref-name", "jdbc/Foo"))
        .child(Element::new("init-param").attr("a", "1"));

    assert_eq!(element.render().unwrap(), element.render().unwrap());
}

#[test]
fn test_no_partial_output_on_bad_key() {
    // The bad key sits after two good children; the whole render fails.
    let element = Element::new("resource-ref")
        .child(Element::with_text("res-ref-name", "jdbc/Foo"))
        .child(Element::new("init-param").attr("ok", "1"))
        .child(Element::new("init-param").attr("not ok", "2"));

    assert!(element.render().is_err());
}

#[test]
fn test_escaping_table() {
    assert_eq!(escape_text("a&b"), "a&amp;b");
    assert_eq!(escape_text("<tag>"), "&lt;tag&gt;");
    assert_eq!(escape_text("plain"), "plain");

    assert_eq!(escape_attribute("say \"hi\""), "say &quot;hi&quot;");
    assert_eq!(escape_attribute("&<>\""), "&amp;&lt;&gt;&quot;");
}

#[test]
fn test_markup_name_rules() {
    assert!(validate_markup_name("driver-name").is_ok());
    assert!(validate_markup_name("user").is_ok());
    assert!(validate_markup_name("a.b-c_d").is_ok());

    assert!(validate_markup_name("").is_err());
    assert!(validate_markup_name("-leading").is_err());
    assert!(validate_markup_name("1leading").is_err());
    assert!(validate_markup_name("sp ace").is_err());
    assert!(validate_markup_name("quo\"te").is_err());
    assert!(validate_markup_name("sla/sh").is_err());
}

proptest! {
    /// Escaped text never leaks a raw reserved character
    #[test]
    fn escaped_text_has_no_reserved_chars(value in ".{0,200}") {
        let escaped = escape_text(&value);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        // Every remaining '&' must start one of our own entities
        for (i, _) in escaped.match_indices('&') {
            let rest = &escaped[i..];
            prop_assert!(
                rest.starts_with("&amp;") || rest.starts_with("&lt;") || rest.starts_with("&gt;")
            );
        }
    }

    /// Escaped attribute values never break out of their quotes
    #[test]
    fn escaped_attribute_has_no_quote(value in ".{0,200}") {
        let escaped = escape_attribute(&value);
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('<'));
    }

    /// A fragment rendered with an arbitrary attribute value keeps its
    /// opening and closing tags balanced
    #[test]
    fn rendered_fragment_stays_balanced(value in ".{0,200}") {
        let fragment = Element::new("resource-ref")
            .child(Element::new("init-param").attr("key", value))
            .render()
            .unwrap();
        prop_assert!(fragment.starts_with("<resource-ref>"));
        prop_assert!(fragment.ends_with("</resource-ref>"));
        prop_assert_eq!(fragment.matches("<init-param ").count(), 1);
    }
}
