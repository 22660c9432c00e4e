//! Diagnostics for TOML input files

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// A TOML document that failed to deserialize
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TomlError {
    #[error("TOML error at {span:?}: {message}")]
    Syntax { span: Option<Span>, message: String },
}

impl TomlError {
    /// Source span of the offending input, if the parser reported one
    pub fn span(&self) -> Option<&Span> {
        match self {
            TomlError::Syntax { span, .. } => span.as_ref(),
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let TomlError::Syntax { span, message } = self;
        let span = span.clone().unwrap_or(0..0);

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(message)
            .with_label(
                Label::new((filename, span))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("{}: {}", filename, self),
        }
    }
}

impl From<toml::de::Error> for TomlError {
    fn from(err: toml::de::Error) -> Self {
        TomlError::Syntax {
            span: err.span(),
            message: err.message().trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_from_toml_error() {
        let err = toml::from_str::<toml::Table>("radius = = 3").unwrap_err();
        let err = TomlError::from(err);
        assert!(err.span().is_some());
    }

    #[test]
    fn test_format_mentions_filename() {
        let source = "radius = = 3";
        let err = TomlError::from(toml::from_str::<toml::Table>(source).unwrap_err());
        let report = err.format(source, "stack.toml");
        assert!(report.contains("stack.toml"));
    }
}
