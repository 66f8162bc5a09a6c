use serde::{Deserialize, Serialize};

/// One row of a model-graded evaluation run, accumulated in memory and
/// rendered into the HTML report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalResult {
    pub input: String,
    pub output: String,
    pub grader_response: String,
}
