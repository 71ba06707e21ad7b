//! Reserved words of the language.
//!
//! The table is built once and handed to every [`Scanner`](crate::scanner::Scanner)
//! by shared reference. Lookups are case-sensitive: `start` is a keyword,
//! `Start` is an identifier.

use std::collections::HashMap;
use crate::token::Kind;

#[derive(Debug, Clone)]
pub struct Keywords {
    table: HashMap<&'static str, Kind>,
}

impl Keywords {
    pub fn new() -> Self {
        let table = HashMap::from([
            ("start", Kind::Start),
            ("finish", Kind::Finish),
            ("loop", Kind::Loop),
            ("condition", Kind::Condition),
            ("declare", Kind::Declare),
            ("output", Kind::Output),
            ("input", Kind::Input),
            ("function", Kind::Function),
            ("return", Kind::Return),
            ("break", Kind::Break),
            ("continue", Kind::Continue),
            ("else", Kind::Else),
            ("true", Kind::Boolean),
            ("false", Kind::Boolean),
        ]);

        Self { table }
    }

    pub fn lookup(&self, word: &str) -> Option<Kind> {
        self.table.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for Keywords {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
