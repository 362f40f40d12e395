use serde::{Deserialize, Serialize};

/// Вложение: пара «имя файла / URL»
///
/// Содержимое файла не читается и не преобразуется; значение приходит из
/// внешнего file-picker как есть.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(rename = "fileName")]
    pub file_name: String,
    pub url: String,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            url: url.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.file_name.trim().is_empty() && self.url.trim().is_empty()
    }
}
