use serde::{Deserialize, Serialize};

/// One evaluation example: a user request, the category label expected in
/// the response, and subject keywords of which at least one should appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRow {
    pub input: String,
    pub expected_category: String,
    #[serde(default)]
    pub expected_subjects: Vec<String>,
}

impl DatasetRow {
    pub fn new(
        input: impl Into<String>,
        expected_category: impl Into<String>,
        expected_subjects: &[&str],
    ) -> Self {
        Self {
            input: input.into(),
            expected_category: expected_category.into(),
            expected_subjects: expected_subjects.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// In a real application the dataset would come from a file or a logging
/// tool. This is a mix of phrasings the quiz assistant supports and things
/// it does not.
pub fn builtin_dataset() -> Vec<DatasetRow> {
    vec![
        DatasetRow::new(
            "I'm trying to learn about science, can you give me a quiz to test my knowledge",
            "science",
            &["davinci", "telescope", "physics", "curie"],
        ),
        DatasetRow::new(
            "I'm an geography expert, give a quiz to prove it?",
            "geography",
            &["paris", "france", "louvre"],
        ),
        DatasetRow::new(
            "Quiz me about Italy",
            "geography",
            &["rome", "alps", "sicily"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dataset_shape() {
        let dataset = builtin_dataset();

        assert_eq!(dataset.len(), 3);
        assert!(dataset.iter().all(|row| !row.input.is_empty()));
        assert!(dataset.iter().all(|row| !row.expected_subjects.is_empty()));
        assert_eq!(dataset[0].expected_category, "science");
        assert_eq!(dataset[2].input, "Quiz me about Italy");
    }
}
