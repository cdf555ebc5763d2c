use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use surveysheet::{generate_pdf, personalize_sheet, SheetMeta, DEFAULT_TEMPLATES_DIR};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "surveysheet",
    about = "Generate a personalized survey sheet PDF for a student",
    version,
    author
)]
struct Cli {
    /// Unique identifier for the sheet
    #[arg(long)]
    sheet_id: u32,

    /// Name of the student
    #[arg(long)]
    student_name: String,

    /// Grade/class of the student
    #[arg(long)]
    student_grade: u32,

    /// School name of the student
    #[arg(long)]
    student_school: String,

    /// TFI ID of the student
    #[arg(long)]
    student_tfi_id: String,

    /// Name of the template to use (e.g., 'v1', 'test_template')
    #[arg(long)]
    template_name: String,

    /// Output PDF file path
    #[arg(short, long, default_value = "personalized_survey.pdf")]
    output: PathBuf,

    /// Directory containing <name>.html / <name>_style.css template pairs
    #[arg(long, default_value = DEFAULT_TEMPLATES_DIR)]
    templates_dir: PathBuf,

    /// Additional CSS stylesheet applied after the template stylesheet
    /// (may be given multiple times)
    #[arg(long = "stylesheet")]
    stylesheets: Vec<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let meta = SheetMeta {
        sheet_id: cli.sheet_id,
        student_name: Some(cli.student_name.clone()),
        student_grade: Some(cli.student_grade),
        student_school: Some(cli.student_school.clone()),
        student_tfi_id: Some(cli.student_tfi_id.clone()),
        template_name: cli.template_name,
    };

    let html = personalize_sheet(&meta, &cli.templates_dir).with_context(|| {
        format!(
            "failed to personalize sheet with template '{}'",
            meta.template_name
        )
    })?;

    generate_pdf(
        &cli.templates_dir,
        &meta.template_name,
        &html,
        &cli.output,
        &cli.stylesheets,
    )
    .with_context(|| format!("failed to render PDF to {}", cli.output.display()))?;

    println!(
        "✓ Successfully generated personalized survey: {}",
        cli.output.display()
    );
    println!(
        "  Student: {} (Grade {})",
        cli.student_name, cli.student_grade
    );
    println!("  School: {}", cli.student_school);
    println!("  TFI ID: {}", cli.student_tfi_id);

    Ok(())
}
