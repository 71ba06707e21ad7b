//! Hand-written lexical scanner for a small imperative language.
//!
//! [`Scanner`] turns source text into [`Token`]s one at a time while filling
//! a [`SymbolTable`] with identifier sightings and an [`ErrorLog`] with
//! lexical diagnostics.

pub mod config;
pub mod error;
pub mod keywords;
pub mod logging;
pub mod report;
pub mod scanner;
pub mod stats;
pub mod symbol_table;
pub mod token;

pub use error::{Diagnostic, DiagnosticKind, ErrorLog, ScanError};
pub use keywords::Keywords;
pub use scanner::{ScanOptions, Scanner};
pub use symbol_table::{Symbol, SymbolTable};
pub use token::{Kind, Token};
