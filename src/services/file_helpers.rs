use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads a file fully into a string.
///
/// This is the one place with local error recovery: a missing or unreadable
/// file logs a single diagnostic and yields `None`, so a chain can still be
/// assembled with empty bank content.
pub fn read_file_into_string(file_path: impl AsRef<Path>) -> Option<String> {
    let file_path = file_path.as_ref();
    match fs::read_to_string(file_path) {
        Ok(content) => Some(content),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::warn!("The file at '{}' was not found.", file_path.display());
            None
        }
        Err(err) => {
            log::warn!(
                "An error occurred reading '{}': {}",
                file_path.display(),
                err
            );
            None
        }
    }
}
