pub mod dataset;
pub mod eval_result;

pub use dataset::{builtin_dataset, DatasetRow};
pub use eval_result::EvalResult;
