use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: SecretString,
    pub model_name: String,
    pub temperature: f32,
    pub quiz_bank_path: String,
    pub reports_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: SecretString::from(
                env::var("OPENAI_API_KEY").unwrap_or_else(|_| "".to_string()),
            ),
            model_name: env::var("MODEL_NAME").unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            // Deterministic completions throughout; there is no override on purpose.
            temperature: 0.0,
            quiz_bank_path: env::var("QUIZ_BANK_PATH")
                .unwrap_or_else(|_| "quiz_bank.txt".to_string()),
            reports_dir: env::var("REPORTS_DIR").unwrap_or_else(|_| "reports".to_string()),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: SecretString::from("test_api_key".to_string()),
            model_name: "gpt-3.5-turbo".to_string(),
            temperature: 0.0,
            quiz_bank_path: "quiz_bank.txt".to_string(),
            reports_dir: "reports".to_string(),
        }
    }
}
