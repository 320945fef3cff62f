use crate::api::Download;
use crate::cli::actions::QuestionsAction;
use crate::cli::globals::GlobalArgs;
use crate::features::questions::client as questions;
use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// Handle the question-generation actions.
pub async fn handle(action: QuestionsAction, globals: &GlobalArgs) -> Result<()> {
    let client = super::api_client(globals)?;

    match action {
        QuestionsAction::Generate(request) => {
            info!(
                "generating {} {} questions on {}",
                request.count, request.question_type, request.chapter
            );
            let result = questions::generate(&client, &request).await?;
            print_json(&result)?;
        }
        QuestionsAction::Pdf { request, output } => {
            info!("generating question paper PDF");
            let download = questions::generate_pdf(&client, &request).await?;
            save_download(&download, &output, "questions.pdf").await?;
        }
        QuestionsAction::AnswerKey { request, output } => {
            info!("generating answer key PDF");
            let download = questions::generate_answer_key(&client, &request).await?;
            save_download(&download, &output, "answer_key.pdf").await?;
        }
        QuestionsAction::Mixed(request) => {
            info!("generating mixed paper with {} questions", request.total());
            let result = questions::generate_mixed(&client, &request).await?;
            print_json(&result)?;
        }
        QuestionsAction::MixedPdf { request, output } => {
            info!("generating mixed question paper PDF");
            let download = questions::generate_mixed_pdf(&client, &request).await?;
            save_download(&download, &output, "mixed_questions.pdf").await?;
        }
        QuestionsAction::MixedAnswerKey { request, output } => {
            info!("generating mixed answer key PDF");
            let download = questions::generate_mixed_answer_key(&client, &request).await?;
            save_download(&download, &output, "mixed_answer_key.pdf").await?;
        }
        QuestionsAction::Download { filename, output } => {
            info!("downloading {}", filename);
            let download = questions::download_pdf(&client, &filename).await?;
            save_download(&download, &output, &filename).await?;
        }
        QuestionsAction::AbTest(request) => {
            info!("running provider comparison");
            let report = questions::ab_test(&client, &request).await?;
            for run in &report.runs {
                println!("--- {} ({} ms)", run.provider, run.elapsed.as_millis());
                print_json(&run.result)?;
            }
            if let Some(fastest) = report.fastest() {
                println!("Fastest: {fastest}");
            }
        }
    }

    Ok(())
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn save_download(download: &Download, dir: &Path, fallback: &str) -> Result<()> {
    let filename = download.filename_or(fallback);
    // Keep only the final component; servers name files, they do not pick
    // directories.
    let name = Path::new(filename)
        .file_name()
        .ok_or_else(|| anyhow!("Refusing to save a download without a file name"))?;

    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(name);
    tokio::fs::write(&path, &download.bytes)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Saved {} ({} bytes)", path.display(), download.bytes.len());
    Ok(())
}
