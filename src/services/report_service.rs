use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    chains::{AssistantChain, GraderChain},
    errors::AppResult,
    models::{DatasetRow, EvalResult},
};

/// Runs the assistant and the grader over every dataset row and collects
/// all results. Unlike the dataset runner, nothing here passes or fails:
/// judgment is deferred to whoever reads the report.
pub async fn evaluate_dataset(
    assistant: &AssistantChain,
    grader: &GraderChain,
    dataset: &[DatasetRow],
    quiz_bank: &str,
) -> AppResult<Vec<EvalResult>> {
    log::info!("Starting dataset evaluation");

    let mut eval_results = Vec::with_capacity(dataset.len());
    for (idx, row) in dataset.iter().enumerate() {
        log::info!(
            "Processing example {}/{}: {}",
            idx + 1,
            dataset.len(),
            row.input
        );

        let answer = assistant.invoke(&row.input).await?;
        log::info!("Received assistant response, evaluating...");

        let grader_response = grader.invoke(quiz_bank, &answer).await?;
        log::info!("Evaluation complete for example {}", idx + 1);

        eval_results.push(EvalResult {
            input: row.input.clone(),
            output: answer,
            grader_response,
        });
    }

    log::info!("Completed evaluation of {} examples", dataset.len());
    Ok(eval_results)
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn cell(text: &str) -> String {
    // Newlines in model output become line breaks so multi-line quizzes and
    // explanations stay readable in the table.
    escape_html(text).replace('\n', "<br>")
}

/// Renders the results as a bordered HTML table with an index column.
pub fn render_html(results: &[EvalResult]) -> String {
    let mut html = String::from(
        "<table border=\"1\" class=\"dataframe\">\n  <thead>\n    <tr>\n      <th></th>\n      <th>input</th>\n      <th>output</th>\n      <th>grader_response</th>\n    </tr>\n  </thead>\n  <tbody>\n",
    );

    for (idx, result) in results.iter().enumerate() {
        html.push_str(&format!(
            "    <tr>\n      <th>{}</th>\n      <td>{}</td>\n      <td>{}</td>\n      <td>{}</td>\n    </tr>\n",
            idx,
            cell(&result.input),
            cell(&result.output),
            cell(&result.grader_response),
        ));
    }

    html.push_str("  </tbody>\n</table>");
    html
}

/// Writes the rendered report to `<reports_dir>/eval_results_<timestamp>.html`,
/// creating the directory if absent, and returns the path. Any I/O failure
/// propagates; this is a manually invoked utility with no retry.
pub fn write_report(results: &[EvalResult], reports_dir: impl AsRef<Path>) -> AppResult<PathBuf> {
    let reports_dir = reports_dir.as_ref();
    fs::create_dir_all(reports_dir)?;

    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let filepath = reports_dir.join(format!("eval_results_{}.html", timestamp));

    log::info!("Saving evaluation results to {}", filepath.display());
    fs::write(&filepath, render_html(results))?;

    Ok(filepath)
}
