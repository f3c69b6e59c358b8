//! Print document builder.
//!
//! Pure function from slides plus configuration to one HTML string. Slide
//! content is inserted verbatim; the output contains nothing that varies
//! between runs.

use crate::collect::ResolvedSlide;
use crate::config::Config;
use crate::templates;

/// Opening tag of each slide container.
pub const SLIDE_OPEN: &str = r#"<div class="slide">"#;

/// Build the complete print document for the presentation `title`.
pub fn build_print_document(title: &str, slides: &[ResolvedSlide], config: &Config) -> String {
    let body_len: usize = slides.iter().map(|s| s.content.len() + 48).sum();
    let mut html = String::with_capacity(body_len + 8 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str(&format!(
        "    <title>{} - Print Version</title>\n",
        html_escape(title)
    ));
    html.push_str(templates::font_links());
    html.push_str(&render_style(config));
    html.push_str("</head>\n<body>\n");

    for slide in slides {
        push_slide(&mut html, &slide.content);
    }

    html.push_str(&templates::footer());
    html
}

/// The style block with configuration values substituted.
pub fn render_style(config: &Config) -> String {
    templates::style_template()
        .replace("{{slide_width}}", &config.slide_width)
        .replace("{{slide_height}}", &config.slide_height)
        .replace("{{brand_primary}}", &config.brand_primary)
        .replace("{{brand_dark}}", &config.brand_dark)
}

fn push_slide(html: &mut String, content: &str) {
    html.push_str("    ");
    html.push_str(SLIDE_OPEN);
    html.push_str("\n        ");
    html.push_str(content);
    html.push_str("\n    </div>\n\n");
}

fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn slide(file: &str, content: &str) -> ResolvedSlide {
        ResolvedSlide {
            category: "intro".into(),
            file: file.into(),
            path: PathBuf::from("intro").join(file),
            content: content.into(),
        }
    }

    #[test]
    fn one_container_per_slide_in_order() {
        let slides = [slide("a.html", "<h1>A</h1>"), slide("b.html", "<h1>B</h1>")];
        let html = build_print_document("deck", &slides, &Config::default());

        assert_eq!(html.matches(SLIDE_OPEN).count(), 2);
        let a = html.find("<h1>A</h1>").unwrap();
        let b = html.find("<h1>B</h1>").unwrap();
        assert!(a < b);
    }

    #[test]
    fn no_slides_still_gives_a_document() {
        let html = build_print_document("deck", &[], &Config::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("</html>"));
        assert_eq!(html.matches(SLIDE_OPEN).count(), 0);
    }

    #[test]
    fn content_is_inserted_verbatim() {
        let raw = "<script>let x = 1 < 2 && \"y\";</script>";
        let html = build_print_document("deck", &[slide("s.html", raw)], &Config::default());
        assert!(html.contains(raw));
    }

    #[test]
    fn title_is_escaped() {
        let html = build_print_document("<deck>", &[], &Config::default());
        assert!(html.contains("<title>&lt;deck&gt; - Print Version</title>"));
    }

    #[test]
    fn page_size_drives_slide_box_and_page_rule() {
        let config = Config {
            slide_width: "10in".into(),
            slide_height: "7.5in".into(),
            ..Config::default()
        };
        let css = render_style(&config);
        assert!(css.contains("width: 10in;"));
        assert!(css.contains("height: 7.5in;"));
        assert!(css.contains("size: 10in 7.5in;"));
        assert!(!css.contains("{{"));
    }

    #[test]
    fn brand_dark_only_colours_h3() {
        let config = Config {
            brand_dark: "#123456".into(),
            ..Config::default()
        };
        assert_eq!(render_style(&config).matches("#123456").count(), 1);
    }
}
