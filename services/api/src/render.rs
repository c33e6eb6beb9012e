use clap::Args;
use onboarding::error::AppError;
use onboarding::onboarding::{
    evaluate, read_application, ApplicationView, Evaluation, SnapshotError,
};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RenderArgs {
    /// JSON file holding one application document (or `null`)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the rendered tree as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_render(args: RenderArgs) -> Result<(), AppError> {
    let file = File::open(&args.input)?;
    let snapshot = read_application(BufReader::new(file))?;
    let evaluation = evaluate(snapshot.as_ref());

    if args.json {
        let encoded = serde_json::to_string_pretty(&evaluation).map_err(SnapshotError::from)?;
        println!("{encoded}");
    } else {
        print!("{}", render_text(&evaluation));
    }

    Ok(())
}

pub(crate) fn render_text(evaluation: &Evaluation) -> String {
    match evaluation {
        Evaluation::NoData => "No application data available.\n".to_string(),
        Evaluation::Ready(view) => render_view(view),
    }
}

fn render_view(view: &ApplicationView) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Application {} ({})\nStatus: {}\n",
        view.application_id, view.applicant_name, view.status_label
    ));

    for stage in &view.stages {
        out.push_str(&format!(
            "\nStage {}: {} [{}]\n",
            stage.number, stage.label, stage.status_label
        ));

        if let Some(placeholder) = stage.placeholder {
            out.push_str(&format!("  {placeholder}\n"));
        }

        for group in &stage.groups {
            out.push_str(&format!("  {}\n", group.title));
            for field in &group.fields {
                out.push_str(&format!("    - {}: {}\n", field.label, field.value.display()));
            }
        }
    }

    out
}
