use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for modgen operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("unsupported stack '{stack}'")]
    #[diagnostic(
        code(modgen::unsupported_stack),
        help("available stacks: {available}")
    )]
    UnsupportedStack {
        stack: String,
        /// Registered stack names, comma-separated
        available: String,
    },

    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(modgen::config_read),
        help("omit --config to fall back to built-in defaults")
    )]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    #[diagnostic(code(modgen::config_parse))]
    ConfigParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create an unsupported-stack error listing what is registered.
    pub fn unsupported_stack(stack: &str, available: &[&str]) -> Box<Self> {
        Box::new(Error::UnsupportedStack {
            stack: stack.to_string(),
            available: available.join(", "),
        })
    }

    /// Create a parse error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ConfigParse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_stack_help_lists_available() {
        let err = Error::unsupported_stack("remix", &["go", "react"]);

        assert_eq!(err.to_string(), "unsupported stack 'remix'");
        let help = err.help().map(|h| h.to_string());
        assert_eq!(help.as_deref(), Some("available stacks: go, react"));
    }

    #[test]
    fn test_parse_error_carries_span() {
        let src = "[defaults]\nstack = \n";
        let source = toml::from_str::<toml::Table>(src).unwrap_err();
        let err = Error::parse(source, src, "modgen.toml");

        match *err {
            Error::ConfigParse { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
