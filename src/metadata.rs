//! Slide-order metadata.
//!
//! A presentation's host HTML file declares its slide order as a script
//! variable:
//!
//! ```js
//! const categorySlides = {
//!     intro: [{ category: 'intro', name: 'title.html' }],
//!     body: [
//!         { category: 'body', name: 'a.html' },
//!         { category: 'body', name: 'b.html' },
//!     ],
//! };
//! ```
//!
//! The object literal is cut out with a regex and read with a JSON5 parser.
//! JSON5 covers the object-literal syntax people write by hand (unquoted
//! keys, single quotes, trailing commas, comments) and is data only, so
//! nothing in the host file is ever executed.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::GenerateError;

/// Name of the script variable holding the mapping.
pub const DECLARATION_NAME: &str = "categorySlides";

static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:const|let|var)\s+categorySlides\s*=\s*(\{[\s\S]*?\})\s*;")
        .expect("declaration pattern is valid")
});

/// Pointer to one slide fragment: `<presentation-dir>/<category>/<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideReference {
    pub category: String,
    pub name: String,
}

impl SlideReference {
    pub fn new(category: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
        }
    }
}

/// Ordered category → slide-list mapping. Declaration order is render order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideOrder {
    categories: Vec<(String, Vec<SlideReference>)>,
}

impl SlideOrder {
    pub fn new(categories: Vec<(String, Vec<SlideReference>)>) -> Self {
        Self { categories }
    }

    /// Categories in declaration order with their slide lists.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &[SlideReference])> {
        self.categories
            .iter()
            .map(|(name, refs)| (name.as_str(), refs.as_slice()))
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Every reference, category by category, in list order.
    pub fn references(&self) -> impl Iterator<Item = &SlideReference> {
        self.categories.iter().flat_map(|(_, refs)| refs.iter())
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn slide_count(&self) -> usize {
        self.categories.iter().map(|(_, refs)| refs.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slide_count() == 0
    }
}

/// Find the `categorySlides` declaration in `html` and parse it.
pub fn extract_slide_order(html: &str) -> Result<SlideOrder, GenerateError> {
    let literal = DECLARATION
        .captures(html)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| {
            GenerateError::MetadataParse(format!(
                "no `{DECLARATION_NAME}` declaration found"
            ))
        })?;
    parse_slide_literal(literal.as_str())
}

/// Parse the object literal on the right-hand side of the declaration.
pub fn parse_slide_literal(literal: &str) -> Result<SlideOrder, GenerateError> {
    let value: Value =
        json5::from_str(literal).map_err(|e| GenerateError::MetadataParse(e.to_string()))?;

    let Value::Object(map) = value else {
        return Err(GenerateError::MetadataParse(format!(
            "`{DECLARATION_NAME}` must be an object"
        )));
    };

    let mut categories = Vec::with_capacity(map.len());
    for (category, slides) in map {
        let refs: Vec<SlideReference> = serde_json::from_value(slides).map_err(|e| {
            GenerateError::MetadataParse(format!("category `{category}`: {e}"))
        })?;
        categories.push((category, refs));
    }
    Ok(SlideOrder::new(categories))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: &str = r#"<!DOCTYPE html>
<html>
<body>
<script>
    const categorySlides = {
        intro: [
            { category: 'intro', name: 'title.html' },
        ],
        // main content
        body: [
            { category: 'body', name: 'a.html' },
            { category: 'body', name: 'b.html' }
        ]
    };

    let current = 0;
    const other = { a: 1 };
</script>
</body>
</html>"#;

    #[test]
    fn extracts_js_object_literal() {
        let order = extract_slide_order(HOST).unwrap();
        assert_eq!(order.category_names(), vec!["intro", "body"]);
        assert_eq!(order.slide_count(), 3);
        let names: Vec<&str> = order.references().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["title.html", "a.html", "b.html"]);
    }

    #[test]
    fn category_order_is_declaration_order() {
        let order = parse_slide_literal(
            r#"{"zeta": [{"category":"zeta","name":"z.html"}], "alpha": [{"category":"alpha","name":"a.html"}]}"#,
        )
        .unwrap();
        assert_eq!(order.category_names(), vec!["zeta", "alpha"]);
    }

    #[test]
    fn reference_category_may_differ_from_key() {
        let order =
            parse_slide_literal(r#"{ recap: [{ category: 'intro', name: 'agenda.html' }] }"#)
                .unwrap();
        let (key, refs) = order.categories().next().unwrap();
        assert_eq!(key, "recap");
        assert_eq!(refs[0], SlideReference::new("intro", "agenda.html"));
    }

    #[test]
    fn extra_reference_fields_are_ignored() {
        let order = parse_slide_literal(
            r#"{ intro: [{ category: 'intro', name: 't.html', title: 'Welcome' }] }"#,
        )
        .unwrap();
        assert_eq!(order.slide_count(), 1);
    }

    #[test]
    fn empty_mapping_is_valid() {
        let order = extract_slide_order("<script>var categorySlides = {};</script>").unwrap();
        assert!(order.is_empty());
        assert_eq!(order.category_count(), 0);
    }

    #[test]
    fn missing_declaration_is_an_error() {
        let err = extract_slide_order("<html><script>const slides = {};</script></html>")
            .unwrap_err();
        assert!(matches!(err, GenerateError::MetadataParse(_)));
    }

    #[test]
    fn malformed_literal_is_an_error() {
        let html = "<script>const categorySlides = { intro: [ { name: 'x.html' } ] oops };</script>";
        assert!(matches!(
            extract_slide_order(html),
            Err(GenerateError::MetadataParse(_))
        ));
    }

    #[test]
    fn code_is_never_evaluated() {
        let html = "<script>const categorySlides = { intro: require('fs').readdirSync('.') };</script>";
        assert!(matches!(
            extract_slide_order(html),
            Err(GenerateError::MetadataParse(_))
        ));
    }

    #[test]
    fn wrong_shape_names_the_category() {
        let err = parse_slide_literal(r#"{ intro: "title.html" }"#).unwrap_err();
        assert!(err.to_string().contains("intro"), "{err}");

        let err = parse_slide_literal("[1, 2]").unwrap_err();
        assert!(err.to_string().contains("object"), "{err}");
    }
}
