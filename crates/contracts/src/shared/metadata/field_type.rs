//! Field type enumeration for metadata system

/// Category of field type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldType {
    #[default]
    Text,
    Number,      // money, quantity
    Date,        // ISO yyyy-mm-dd string
    Enum,        // closed set of status/category values
    Attachment,  // opaque file name / URL pair
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Enum => "enum",
            Self::Attachment => "attachment",
        }
    }
}
