/// Email models: attachment file types and message bodies
use serde::{Deserialize, Serialize};

/// Attachment file type, mapped to its fixed MIME content type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Word,
    Excel,
    Pdf,
    Zip,
    /// Generic binary, served as a download
    Download,
}

impl FileType {
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Word => "application/msword; charset=UTF-8",
            Self::Excel => "application/x-xls; charset=UTF-8",
            Self::Pdf => "application/pdf; charset=UTF-8",
            Self::Zip => "application/zip; charset=UTF-8",
            Self::Download => "application/octet-stream; charset=UTF-8",
        }
    }
}

/// Message body, exactly one of HTML or plain text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailBody {
    Html(String),
    Text(String),
}

impl MailBody {
    /// Content type of the MIME part this body becomes
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Html(_) => "text/html; charset=UTF-8",
            Self::Text(_) => "text/plain; charset=UTF-8",
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Html(s) | Self::Text(s) => s,
        }
    }
}

/// Binary attachment: payload plus the filename and type it is delivered as
#[derive(Debug, Clone)]
pub struct MailAttachment {
    pub filename: String,
    pub file_type: FileType,
    pub data: Vec<u8>,
}

impl MailAttachment {
    pub fn new(filename: impl Into<String>, file_type: FileType, data: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            file_type,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_content_types() {
        assert_eq!(
            FileType::Pdf.content_type(),
            "application/pdf; charset=UTF-8"
        );
        assert_eq!(
            FileType::Word.content_type(),
            "application/msword; charset=UTF-8"
        );
        assert_eq!(
            FileType::Download.content_type(),
            "application/octet-stream; charset=UTF-8"
        );
    }

    #[test]
    fn test_body_content_types() {
        assert_eq!(
            MailBody::Html("<b>hi</b>".to_string()).content_type(),
            "text/html; charset=UTF-8"
        );
        assert_eq!(
            MailBody::Text("hi".to_string()).content_type(),
            "text/plain; charset=UTF-8"
        );
    }

    #[test]
    fn test_body_as_str() {
        assert_eq!(MailBody::Html("<p>x</p>".to_string()).as_str(), "<p>x</p>");
        assert_eq!(MailBody::Text("x".to_string()).as_str(), "x");
    }
}
