//! Fixed fragments of the print document.
//!
//! The style sheet carries `{{placeholder}}` markers that
//! [`crate::document`] fills from the [`crate::config::Config`]:
//! `{{slide_width}}`, `{{slide_height}}`, `{{brand_primary}}`,
//! `{{brand_dark}}`.

/// Prism release loaded by the footer.
pub const PRISM_VERSION: &str = "1.29.0";

/// Prism language components loaded in addition to the core bundle.
pub const PRISM_LANGUAGES: &[&str] = &["kotlin", "java", "bash"];

/// Global the footer script sets once highlighting has run.
pub const HIGHLIGHT_DONE_FLAG: &str = "__slidesHighlighted";

/// Font links that go into `<head>` before the style sheet.
pub fn font_links() -> &'static str {
    r#"    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    <link href="https://fonts.googleapis.com/css2?family=Raleway:ital,wght@0,100..900;1,100..900&display=swap" rel="stylesheet">
"#
}

/// Print style sheet with placeholders.
pub fn style_template() -> &'static str {
    r#"    <style>
        :root {
            --font-base: 'Raleway', sans-serif;
            --font-mono: 'Monaco', 'Courier New', monospace;
        }

        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: var(--font-base);
            color: #333;
            background: white;
        }

        .slide {
            width: {{slide_width}};
            height: {{slide_height}};
            padding: 60px;
            page-break-after: always;
            page-break-inside: avoid;
            position: relative;
            background: white;
            margin: 0 auto;
            display: flex;
            flex-direction: column;
            justify-content: flex-start;
        }

        /* Title slides: a .center block opening with an h1 */
        .slide:has(> .center > h1:first-child) {
            justify-content: center;
        }

        .slide:last-child {
            page-break-after: auto;
        }

        h1 {
            font-size: 3em;
            color: {{brand_primary}};
            margin-bottom: 20px;
            font-weight: 700;
        }

        h2 {
            font-size: 2.5em;
            color: {{brand_primary}};
            margin-bottom: 40px;
            font-weight: 600;
        }

        h3 {
            font-size: 1.8em;
            color: {{brand_dark}};
            margin-top: 10px;
            margin-bottom: 15px;
            font-weight: 600;
        }

        .subtitle {
            font-size: 1.4em;
            color: #666;
            margin-top: 10px;
        }

        ul {
            list-style: none;
            margin: 20px 0;
        }

        ul li {
            font-size: 1.3em;
            line-height: 1.8;
            margin-bottom: 15px;
            padding-left: 30px;
            position: relative;
        }

        ul li:before {
            content: "▸";
            position: absolute;
            left: 0;
            color: {{brand_primary}};
            font-weight: bold;
        }

        .two-column,
        .comparison {
            display: grid;
            grid-template-columns: 1fr 1fr;
            margin-top: 20px;
        }

        .two-column {
            gap: 40px;
        }

        .comparison {
            gap: 20px;
        }

        code {
            background: #f5f5f5;
            padding: 2px 8px;
            border-radius: 4px;
            font-family: var(--font-mono);
            font-size: 0.9em;
            color: #d63384;
        }

        pre {
            background: #2d2d2d;
            color: #f8f8f2;
            padding: 20px;
            border-radius: 8px;
            overflow-x: auto;
            margin: 20px 0;
            font-size: 0.95em;
            line-height: 1.5;
        }

        pre code {
            background: none;
            color: inherit;
            padding: 0;
        }

        pre[class*="language-"] {
            background: #2d2d2d;
            margin: 20px 0;
            padding: 20px;
            border-radius: 8px;
            font-size: 0.95em;
        }

        code[class*="language-"] {
            background: none;
            color: #f8f8f2;
            text-shadow: none;
            font-family: var(--font-mono);
        }

        .highlight {
            background: #fff3cd;
            padding: 2px 6px;
            border-radius: 3px;
        }

        .note {
            background: #e7f3ff;
            border-left: 4px solid {{brand_primary}};
            padding: 15px 20px;
            margin: 20px 0;
            font-size: 1.1em;
            border-radius: 4px;
        }

        .center {
            text-align: center;
        }

        table {
            width: 100%;
            border-collapse: collapse;
            margin: 20px 0;
            font-size: 1.1em;
        }

        th, td {
            padding: 12px;
            text-align: left;
            border-bottom: 1px solid #ddd;
        }

        th {
            background: {{brand_primary}};
            color: white;
            font-weight: 600;
        }

        .box {
            background: #f8f9fa;
            padding: 20px;
            border-radius: 8px;
            border: 2px solid #e9ecef;
        }

        .box h4 {
            color: {{brand_primary}};
            margin-bottom: 10px;
            font-size: 1.3em;
        }

        @media print {
            .slide {
                page-break-after: always;
                page-break-inside: avoid;
            }

            body {
                background: white;
            }
        }

        @page {
            size: {{slide_width}} {{slide_height}};
            margin: 0;
        }
    </style>
"#
}

/// Everything after the last slide: Prism assets, the highlight trigger
/// and the closing tags.
pub fn footer() -> String {
    let cdn = format!("https://cdnjs.cloudflare.com/ajax/libs/prism/{PRISM_VERSION}");
    let mut out = String::new();
    out.push_str("\n<!-- Prism.js for syntax highlighting -->\n");
    out.push_str(&format!(
        "<link href=\"{cdn}/themes/prism-tomorrow.min.css\" rel=\"stylesheet\"/>\n"
    ));
    out.push_str(&format!("<script src=\"{cdn}/prism.min.js\"></script>\n"));
    for lang in PRISM_LANGUAGES {
        out.push_str(&format!(
            "<script src=\"{cdn}/components/prism-{lang}.min.js\"></script>\n"
        ));
    }
    out.push_str(&format!(
        r#"<script>
    if (typeof Prism !== 'undefined') {{
        Prism.highlightAll();
        window.{HIGHLIGHT_DONE_FLAG} = true;
    }}
</script>
</body>
</html>
"#
    ));
    out
}
