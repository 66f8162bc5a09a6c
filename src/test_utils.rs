#[cfg(test)]
pub mod fixtures {
    /// A tiny bank with one subject per category.
    pub fn sample_quiz_bank() -> &'static str {
        "1. Subject: Paris\n   Categories: Art, Geography\n   Facts:\n    - Capital of France\n    - Location of the Louvre\n\n2. Subject: Physics\n   Category: Science\n   Facts:\n    - Water slows the speed of light"
    }

    /// A response in the format the assistant is instructed to produce.
    pub fn well_formed_quiz() -> &'static str {
        "Question 1:#### What is the capital of France?\n\nQuestion 2:#### Which museum is located in Paris?\n\nQuestion 3:#### What slows the speed of light?"
    }

    /// A response that is not a quiz; the format grader should reject it.
    pub fn known_bad_result() -> &'static str {
        "There are lots of interesting facts. Tell me more about what you'd like to know"
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixture_quiz_has_three_questions() {
        let quiz = well_formed_quiz();
        assert_eq!(quiz.matches("Question").count(), 3);
        assert_eq!(quiz.matches("####").count(), 3);
    }

    #[test]
    fn test_fixture_bank_labels_categories() {
        let bank = sample_quiz_bank();
        assert!(bank.contains("Categories: Art, Geography"));
        assert!(bank.contains("Category: Science"));
    }

    #[test]
    fn test_fixture_bad_result_is_not_a_quiz() {
        assert!(!known_bad_result().contains("Question"));
    }
}
