use crate::error::{Result, SheetError};
use crate::questions::QUESTIONS;
use crate::sheet::SheetMeta;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Contact number printed on every sheet header.
const PHONE_NUMBER: &str = "+91 9876543210";

/// Answer choices per question. The bubble layout in the shipped templates is
/// sized for exactly four columns.
const BUBBLES_PER_QUESTION: usize = 4;

/// Loads the HTML template named `template_name` from `templates_dir`.
///
/// A missing template is an error; nothing downstream can recover from it.
pub fn load_template(templates_dir: &Path, template_name: &str) -> Result<String> {
    let template_html_path = templates_dir.join(format!("{template_name}.html"));
    if !template_html_path.is_file() {
        return Err(SheetError::TemplateNotFound(template_html_path));
    }
    debug!("loading template HTML: {}", template_html_path.display());
    Ok(fs::read_to_string(&template_html_path)?)
}

/// Builds the questions table body: one row per bank question, in bank order,
/// each with the question text and four answer bubbles.
pub fn questions_table() -> String {
    let mut questions_html = String::new();

    for question in QUESTIONS {
        questions_html.push_str("<tr>\n");
        questions_html.push_str(&format!(
            "    <td class=\"question\">{}</td>\n",
            escape_html(question)
        ));
        for _ in 0..BUBBLES_PER_QUESTION {
            questions_html.push_str("    <td class=\"bubble\"><span class=\"circle\"></span></td>\n");
        }
        questions_html.push_str("</tr>\n");
    }

    questions_html
}

/// Produces the complete personalized HTML document for one sheet.
///
/// Every `{{token}}` occurrence in the template is replaced; tokens missing
/// from the template are silently skipped. Student-supplied values are
/// HTML-escaped before substitution so they cannot alter the document
/// structure. The output is not validated as HTML.
pub fn personalize_sheet(meta: &SheetMeta, templates_dir: &Path) -> Result<String> {
    let template_html = load_template(templates_dir, &meta.template_name)?;

    let questions_html = questions_table();

    let grade = meta
        .student_grade
        .map(|g| g.to_string())
        .unwrap_or_default();

    let final_html = template_html
        .replace("{{phoneNumber}}", PHONE_NUMBER)
        .replace(
            "{{student_name}}",
            &escape_html(meta.student_name.as_deref().unwrap_or("")),
        )
        .replace("{{student_grade}}", &grade)
        .replace(
            "{{student_school}}",
            &escape_html(meta.student_school.as_deref().unwrap_or("")),
        )
        .replace(
            "{{student_tfi_id}}",
            &escape_html(meta.student_tfi_id.as_deref().unwrap_or("")),
        )
        .replace("{{survey_id}}", &meta.sheet_id.to_string())
        .replace("{{questions}}", &questions_html);

    Ok(final_html)
}

/// Escapes the five HTML metacharacters in a user-supplied value.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
