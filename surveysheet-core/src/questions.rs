use std::path::PathBuf;

/// The survey question bank, in print order. Indexes into this slice are the
/// stable question identifiers used to derive per-question tag assets.
pub static QUESTIONS: &[&str] = &[
    "I feel safe and welcome in my classroom.",
    "My teacher believes I can do well in school.",
    "My teacher explains things again when I do not understand.",
    "I get to ask questions in class when I am confused.",
    "My classmates help me when I find the work hard.",
    "I try my best even when the work is difficult.",
    "I know what I am supposed to learn in each lesson.",
    "My teacher tells me how I can improve my work.",
    "I feel comfortable sharing my ideas with the class.",
    "What I learn in school is useful outside of school.",
    "My teacher treats all students fairly.",
    "I read books or stories outside of class time.",
    "I finish the homework my teacher gives me.",
    "When I make a mistake, I try to learn from it.",
    "My family asks me about what I learn in school.",
    "I enjoy coming to school most days.",
    "My teacher notices when I am upset or worried.",
    "I help my classmates when they find the work hard.",
    "I set goals for what I want to learn.",
    "I believe I will finish school and keep studying.",
];

/// Directory holding the per-question fiducial tag images, relative to the
/// repository root.
pub const TAG_ASSETS_DIR: &str = "assets/tags/25h9";

/// Path of the tag25h9 marker image for a question, derived from its bank
/// index: `assets/tags/25h9/tag25_09_{index:05}.svg`.
pub fn tag_asset_path(question_idx: usize) -> PathBuf {
    PathBuf::from(TAG_ASSETS_DIR).join(format!("tag25_09_{question_idx:05}.svg"))
}
