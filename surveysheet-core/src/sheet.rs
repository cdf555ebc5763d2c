use std::fmt;

/// Identity of one printable survey sheet: which student it belongs to and
/// which template lays it out.
///
/// # Example
///
/// ```rust
/// use surveysheet::SheetMeta;
///
/// let meta = SheetMeta {
///     sheet_id: 7,
///     student_name: Some("Asha".to_string()),
///     student_grade: Some(5),
///     student_school: Some("Lotus".to_string()),
///     student_tfi_id: Some("T-9".to_string()),
///     template_name: "v1".to_string(),
/// };
/// assert!(meta.to_string().contains("Survey ID 7"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetMeta {
    /// Unique identifier for the sheet
    pub sheet_id: u32,
    /// Name of the student
    pub student_name: Option<String>,
    /// Grade/class of the student
    pub student_grade: Option<u32>,
    /// School name of the student
    pub student_school: Option<String>,
    /// TFI ID of the student
    pub student_tfi_id: Option<String>,
    /// Name of the template pair used to lay out the sheet
    pub template_name: String,
}

impl fmt::Display for SheetMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Survey ID {} - Name: {}, Grade: {}, School: {}, TFI ID: {}",
            self.sheet_id,
            self.student_name.as_deref().unwrap_or(""),
            self.student_grade
                .map(|g| g.to_string())
                .unwrap_or_default(),
            self.student_school.as_deref().unwrap_or(""),
            self.student_tfi_id.as_deref().unwrap_or(""),
        )
    }
}
