use thiserror::Error;

/// Spreadsheet formats the backend parses.
pub const SPREADSHEET_EXTENSIONS: [&str; 2] = ["xls", "xlsx"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UploadError {
    #[error("quiz name is required")]
    MissingName,
    #[error("quiz description is required")]
    MissingDescription,
    #[error("a spreadsheet file is required")]
    MissingFile,
    #[error("unsupported file type: {0} (expected .xls or .xlsx)")]
    UnsupportedFile(String),
}

/// A new quiz: name, description and the spreadsheet holding its questions.
#[derive(Clone, PartialEq, Eq)]
pub struct QuizUpload {
    name: String,
    description: String,
    file_name: String,
    contents: Vec<u8>,
}

impl QuizUpload {
    /// # Errors
    ///
    /// Returns `UploadError` when a field is blank, the file is empty, or the
    /// file name does not end in a spreadsheet extension.
    pub fn new(
        name: &str,
        description: &str,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<Self, UploadError> {
        if name.trim().is_empty() {
            return Err(UploadError::MissingName);
        }
        if description.trim().is_empty() {
            return Err(UploadError::MissingDescription);
        }
        if file_name.trim().is_empty() || contents.is_empty() {
            return Err(UploadError::MissingFile);
        }
        if !is_spreadsheet(file_name) {
            return Err(UploadError::UnsupportedFile(file_name.to_owned()));
        }

        Ok(Self {
            name: name.to_owned(),
            description: description.to_owned(),
            file_name: file_name.to_owned(),
            contents,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn contents(&self) -> &[u8] {
        &self.contents
    }
}

impl std::fmt::Debug for QuizUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizUpload")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("file_name", &self.file_name)
            .field("bytes", &self.contents.len())
            .finish()
    }
}

fn is_spreadsheet(file_name: &str) -> bool {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SPREADSHEET_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}
