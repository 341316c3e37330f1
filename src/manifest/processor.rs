//! File processing API for manifests
//!
//! A processing spec names a stage and an output format, written `<stage>-<format>`:
//!
//! - `token-simple`, `token-json`: the token stream
//! - `ast-tag`, `ast-treeviz`, `ast-json`, `ast-text`: the parsed document tree
//!
//! ```rust
//! use bnd_manifest::manifest::parsing::HeaderParserRepository;
//! use bnd_manifest::manifest::processor::{process_source, ProcessingSpec};
//!
//! let spec = ProcessingSpec::from_string("ast-tag").unwrap();
//! let repository = HeaderParserRepository::with_defaults();
//! let output = process_source("Bundle-Name: Acme\n", &spec, &repository).unwrap();
//! assert!(output.contains("<value>Acme</value>"));
//! ```

use crate::manifest::formats::{FormatError, FormatRegistry};
use crate::manifest::lexing::{tokenize, TokenKind, TokenSpan};
use crate::manifest::parsing::{HeaderParserRepository, ManifestParser};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Tag,
    Treeviz,
    Text,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Tag => "tag",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Text => "text",
        }
    }
}

/// A parsed `stage-format` string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-tag"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "tag" => OutputFormat::Tag,
            "treeviz" => OutputFormat::Treeviz,
            "text" => OutputFormat::Text,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        match (stage, format) {
            (ProcessingStage::Token, OutputFormat::Simple | OutputFormat::Json) => {}
            (ProcessingStage::Ast, OutputFormat::Simple) => {
                return Err(ProcessingError::InvalidFormatType(
                    "Format 'simple' only works with token stage".to_string(),
                ))
            }
            (ProcessingStage::Token, other) => {
                return Err(ProcessingError::InvalidFormatType(format!(
                    "Format '{}' only works with ast stage",
                    other.as_str()
                )))
            }
            (ProcessingStage::Ast, _) => {}
        }

        Ok(ProcessingSpec { stage, format })
    }

    /// Get every supported stage-format combination
    pub fn available_specs() -> Vec<ProcessingSpec> {
        let spec = |stage, format| ProcessingSpec { stage, format };
        vec![
            spec(ProcessingStage::Token, OutputFormat::Simple),
            spec(ProcessingStage::Token, OutputFormat::Json),
            spec(ProcessingStage::Ast, OutputFormat::Tag),
            spec(ProcessingStage::Ast, OutputFormat::Treeviz),
            spec(ProcessingStage::Ast, OutputFormat::Json),
            spec(ProcessingStage::Ast, OutputFormat::Text),
        ]
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self.stage {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
        };
        write!(f, "{}-{}", stage, self.format.as_str())
    }
}

/// Errors that can occur during processing
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid stage: {0}")]
    InvalidStage(String),
    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Process manifest text with the given stage and format
pub fn process_source(
    source: &str,
    spec: &ProcessingSpec,
    repository: &HeaderParserRepository,
) -> Result<String, ProcessingError> {
    debug!(%spec, bytes = source.len(), "processing source");

    match spec.stage {
        ProcessingStage::Token => format_tokens(source, &tokenize(source), spec.format),
        ProcessingStage::Ast => {
            let parser = ManifestParser::new(Arc::new(repository.clone()));
            let doc = parser.parse(source);
            let registry = FormatRegistry::with_defaults();
            Ok(registry.serialize(&doc, spec.format.as_str())?)
        }
    }
}

/// Process a manifest file with the given stage and format
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    repository: &HeaderParserRepository,
) -> Result<String, ProcessingError> {
    let content = read_source(file_path)?;
    process_source(&content, spec, repository)
}

/// Read a manifest file for lexing.
///
/// `\r\n` and lone `\r` line breaks are converted to `\n`, since the lexer only knows `\n`.
pub fn read_source<P: AsRef<Path>>(file_path: P) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(ProcessingError::FileNotFound(
            file_path.display().to_string(),
        ));
    }

    let content = fs::read_to_string(file_path)?;
    Ok(normalize_line_breaks(&content).into_owned())
}

/// Convert `\r\n` and lone `\r` to `\n`
pub fn normalize_line_breaks(source: &str) -> Cow<'_, str> {
    if !source.contains('\r') {
        return Cow::Borrowed(source);
    }

    let mut normalized = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            chars.next_if_eq(&'\n');
            normalized.push('\n');
        } else {
            normalized.push(ch);
        }
    }
    Cow::Owned(normalized)
}

#[derive(Serialize)]
struct JsonToken<'a> {
    kind: TokenKind,
    start: usize,
    end: usize,
    text: &'a str,
}

/// Format tokens according to the specified format
fn format_tokens(
    source: &str,
    tokens: &[TokenSpan],
    format: OutputFormat,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Json => {
            let tokens: Vec<JsonToken<'_>> = tokens
                .iter()
                .map(|(kind, range)| JsonToken {
                    kind: *kind,
                    start: range.start,
                    end: range.end,
                    text: source.get(range.clone()).unwrap_or(""),
                })
                .collect();
            Ok(serde_json::to_string_pretty(&tokens)?)
        }
        _ => {
            let mut result = String::new();
            for (kind, range) in tokens {
                result.push_str(&format!("{} {}..{}", kind, range.start, range.end));
                if !kind.is_line_break() {
                    let text = source.get(range.clone()).unwrap_or("");
                    result.push_str(&format!(" {:?}", text));
                }
                result.push('\n');
            }
            Ok(result)
        }
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::to_string)
        .collect()
}
