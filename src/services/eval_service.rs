use crate::{
    chains::AssistantChain,
    errors::{AppError, AppResult},
    models::DatasetRow,
};

/// Case-insensitive substring check. The oracle's output format is not
/// contractually guaranteed, so fuzzy containment is the only correctness
/// check applied to it.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Invokes the assistant and requires that the response includes at least
/// one expected word and reads like a quiz rather than a refusal. Returns
/// the answer for inspection on success.
pub async fn eval_expected_words(
    assistant: &AssistantChain,
    question: &str,
    expected_words: &[&str],
) -> AppResult<String> {
    log::info!("Testing with question: '{}'", question);
    log::info!("Looking for words: {:?}", expected_words);

    let answer = assistant.invoke(question).await?;
    log::info!("Answer received: {}", answer);

    if !expected_words.iter().any(|word| contains_ci(&answer, word)) {
        return Err(AppError::EvalFailed(format!(
            "Expected the assistant questions to include one of {:?}, but none were found in: {}",
            expected_words, answer
        )));
    }

    let contains_questions = answer.contains("Question") && !answer.contains("I'm sorry");
    if !contains_questions {
        return Err(AppError::EvalFailed(format!(
            "Expected the response to contain quiz questions, but it appears to be a refusal: {}",
            answer
        )));
    }

    Ok(answer)
}

/// Invokes the assistant and requires the decline text in the response.
pub async fn evaluate_refusal(
    assistant: &AssistantChain,
    question: &str,
    decline_response: &str,
) -> AppResult<String> {
    log::info!("Testing refusal with question: '{}'", question);

    let answer = assistant.invoke(question).await?;
    log::info!("Answer received: {}", answer);

    if !contains_ci(&answer, decline_response) {
        return Err(AppError::EvalFailed(format!(
            "Expected the bot to decline with '{}', got {}",
            decline_response, answer
        )));
    }

    Ok(answer)
}

/// Runs the assistant over a dataset sequentially. Each row must contain
/// the expected category and, when subjects are given, at least one of
/// them. The first failing row aborts the run.
pub async fn run_dataset(assistant: &AssistantChain, dataset: &[DatasetRow]) -> AppResult<()> {
    for (idx, row) in dataset.iter().enumerate() {
        log::info!(
            "Testing example {}/{}: {}",
            idx + 1,
            dataset.len(),
            row.input
        );

        let answer = assistant.invoke(&row.input).await?;
        log::info!("Answer received: {}", answer);

        if !contains_ci(&answer, &row.expected_category) {
            return Err(AppError::EvalFailed(format!(
                "expected: {}, got {}",
                row.expected_category, answer
            )));
        }

        if !row.expected_subjects.is_empty()
            && !row
                .expected_subjects
                .iter()
                .any(|subject| contains_ci(&answer, subject))
        {
            return Err(AppError::EvalFailed(format!(
                "Expected the assistant questions to include one of {:?}, but got {}",
                row.expected_subjects, answer
            )));
        }
    }

    Ok(())
}
