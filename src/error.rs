use std::fmt;
use std::path::PathBuf;
use serde::Serialize;
use thiserror::Error;

/// Faults that stop the tool before any scanning starts. These are never
/// recorded as a [`Diagnostic`].
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

impl ScanError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            ScanError::FileNotFound(path)
        } else {
            ScanError::Io { path, source }
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize)]
pub enum DiagnosticKind {
    InvalidCharacter,
    InvalidIdentifier,
    IdLength,
    UnclosedComment,
    StringError,
    CharError,
}

impl DiagnosticKind {
    pub fn category(self) -> &'static str {
        match self {
            DiagnosticKind::InvalidCharacter => "Invalid Character",
            DiagnosticKind::InvalidIdentifier => "Invalid Identifier",
            DiagnosticKind::IdLength => "ID Length",
            DiagnosticKind::UnclosedComment => "Unclosed Comment",
            DiagnosticKind::StringError => "String Error",
            DiagnosticKind::CharError => "Char Error",
        }
    }

    /// Whether the scanner gives up and forces end-of-stream after this fault.
    pub fn is_fatal(self) -> bool {
        matches!(self, DiagnosticKind::UnclosedComment | DiagnosticKind::StringError)
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.category())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Diagnostic {
    pub(crate) kind: DiagnosticKind,
    pub(crate) line: usize,
    pub(crate) column: usize,
    pub(crate) lexeme: String,
    pub(crate) reason: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, line: usize, column: usize, lexeme: String, reason: String) -> Self {
        Self {
            kind,
            line,
            column,
            lexeme,
            reason,
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error: [{}] at {}:{} - Lexeme: '{}' -> {}",
            self.kind, self.line, self.column, self.lexeme, self.reason
        )
    }
}

/// Append-only record of lexical faults, in detection order.
///
/// Every report is echoed to stderr as it happens unless the log is quiet.
#[derive(Debug, Default, Clone)]
pub struct ErrorLog {
    diagnostics: Vec<Diagnostic>,
    quiet: bool,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self {
            diagnostics: Vec::new(),
            quiet: true,
        }
    }

    pub fn report(
        &mut self,
        kind: DiagnosticKind,
        line: usize,
        column: usize,
        lexeme: impl Into<String>,
        reason: impl Into<String>,
    ) {
        let diagnostic = Diagnostic::new(kind, line, column, lexeme.into(), reason.into());
        tracing::warn!(
            category = kind.category(),
            line,
            column,
            lexeme = %diagnostic.lexeme,
            "lexical diagnostic"
        );
        if !self.quiet {
            eprintln!("{}", diagnostic);
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// True when a scan-terminating fault was recorded, i.e. the token
    /// stream ended early.
    pub fn has_fatal(&self) -> bool {
        self.diagnostics.iter().any(|d| d.kind.is_fatal())
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
