use std::sync::Arc;

use quiz_assistant::{
    chains::{assistant_chain, GraderChain},
    config::Config,
    errors::AppResult,
    models::builtin_dataset,
    services::{
        file_helpers::read_file_into_string,
        report_service::{evaluate_dataset, write_report},
        OpenAiChatModel,
    },
};

#[tokio::main]
async fn main() -> AppResult<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    log::info!("Starting evaluation report generation");

    let config = Config::from_env();
    let quiz_bank = read_file_into_string(&config.quiz_bank_path).unwrap_or_default();

    let assistant = assistant_chain(&config)?;
    let grader = GraderChain::narrative_grader(Arc::new(OpenAiChatModel::from_config(&config)));

    let results = evaluate_dataset(&assistant, &grader, &builtin_dataset(), &quiz_bank).await?;
    let filepath = write_report(&results, &config.reports_dir)?;

    log::info!("Evaluation report saved to {}", filepath.display());
    Ok(())
}
