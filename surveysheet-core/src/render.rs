use crate::error::{Result, SheetError};
use printpdf::{GeneratePdfOptions, PdfDocument, PdfSaveOptions};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Renders a personalized survey HTML string to a PDF file.
///
/// The template's stylesheet (`<template_name>_style.css` in `templates_dir`)
/// is mandatory and applied first; `stylesheets` are applied after it in the
/// order given. Stylesheets are inlined into the document head before
/// rendering. The PDF is written to `output_path`, replacing any existing
/// file, and the same bytes are returned.
pub fn generate_pdf(
    templates_dir: &Path,
    template_name: &str,
    html_str: &str,
    output_path: impl AsRef<Path>,
    stylesheets: &[PathBuf],
) -> Result<Vec<u8>> {
    let template_css_path = templates_dir.join(format!("{template_name}_style.css"));
    if !template_css_path.is_file() {
        return Err(SheetError::StylesheetNotFound(template_css_path));
    }
    debug!("using template CSS: {}", template_css_path.display());

    let mut css_sources = vec![fs::read_to_string(&template_css_path)?];
    for sheet in stylesheets {
        if !sheet.is_file() {
            return Err(SheetError::StylesheetNotFound(sheet.clone()));
        }
        css_sources.push(fs::read_to_string(sheet)?);
    }

    let html = inline_stylesheets(html_str, &css_sources);

    let images = BTreeMap::new();
    let fonts = BTreeMap::new();
    let options = GeneratePdfOptions::default();
    let mut warnings = Vec::new();

    let doc = PdfDocument::from_html(&html, &images, &fonts, &options, &mut warnings)
        .map_err(|e| SheetError::Render(e.to_string()))?;
    if !warnings.is_empty() {
        debug!("PDF generation produced {} warnings", warnings.len());
    }

    let mut save_warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut save_warnings);

    fs::write(output_path.as_ref(), &bytes)?;
    Ok(bytes)
}

/// Splices `<style>` blocks into the document head, keeping source order.
/// Documents without a `</head>` tag get the styles prepended instead.
fn inline_stylesheets(html: &str, css_sources: &[String]) -> String {
    let mut styles = String::new();
    for css in css_sources {
        styles.push_str("<style>\n");
        styles.push_str(css);
        styles.push_str("\n</style>\n");
    }

    match html.find("</head>") {
        Some(pos) => {
            let mut out = String::with_capacity(html.len() + styles.len());
            out.push_str(&html[..pos]);
            out.push_str(&styles);
            out.push_str(&html[pos..]);
            out
        }
        None => format!("{styles}{html}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const MINIMAL_HTML: &str =
        "<!DOCTYPE html><html><head><title>t</title></head><body><p>hello</p></body></html>";

    fn setup_templates(dir: &TempDir) {
        fs::write(
            dir.path().join("test_template_style.css"),
            "p { font-size: 12pt; }",
        )
        .unwrap();
    }

    #[test]
    fn test_inline_stylesheets_into_head() {
        let css = vec!["p { color: red; }".to_string()];
        let html = inline_stylesheets(MINIMAL_HTML, &css);

        let style_pos = html.find("<style>").unwrap();
        let head_end = html.find("</head>").unwrap();
        assert!(style_pos < head_end);
        assert!(html.contains("p { color: red; }"));
    }

    #[test]
    fn test_inline_stylesheets_without_head_prepends() {
        let css = vec!["p { color: red; }".to_string()];
        let html = inline_stylesheets("<p>bare</p>", &css);
        assert!(html.starts_with("<style>"));
        assert!(html.ends_with("<p>bare</p>"));
    }

    #[test]
    fn test_generate_pdf_writes_pdf_file() {
        let dir = TempDir::new().unwrap();
        setup_templates(&dir);
        let output = dir.path().join("out.pdf");

        let bytes =
            generate_pdf(dir.path(), "test_template", MINIMAL_HTML, &output, &[]).unwrap();

        assert!(output.exists());
        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(fs::read(&output).unwrap(), bytes);
    }

    #[test]
    fn test_generate_pdf_overwrites_deterministically() {
        let dir = TempDir::new().unwrap();
        setup_templates(&dir);
        let output = dir.path().join("out.pdf");

        generate_pdf(dir.path(), "test_template", MINIMAL_HTML, &output, &[]).unwrap();
        let first_len = fs::metadata(&output).unwrap().len();

        generate_pdf(dir.path(), "test_template", MINIMAL_HTML, &output, &[]).unwrap();
        let second_len = fs::metadata(&output).unwrap().len();

        assert_eq!(first_len, second_len);
    }

    #[test]
    fn test_missing_template_stylesheet_fails_before_write() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.pdf");

        let result = generate_pdf(dir.path(), "missing", MINIMAL_HTML, &output, &[]);

        assert!(matches!(result, Err(SheetError::StylesheetNotFound(_))));
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_extra_stylesheet_fails_before_write() {
        let dir = TempDir::new().unwrap();
        setup_templates(&dir);
        let output = dir.path().join("out.pdf");
        let extra = dir.path().join("absent.css");

        let result = generate_pdf(
            dir.path(),
            "test_template",
            MINIMAL_HTML,
            &output,
            &[extra],
        );

        assert!(matches!(result, Err(SheetError::StylesheetNotFound(_))));
        assert!(!output.exists());
    }
}
