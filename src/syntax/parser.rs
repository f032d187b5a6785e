//! Tree-sitter highlighting
//!
//! The editor only needs "spans for this source in this language", so the
//! highlighter is a capability handed to the renderer rather than shared
//! global state. Each call parses from scratch; no per-document trees are kept.

use std::borrow::Cow;
use std::collections::HashMap;

use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor};

use super::highlights::{highlight_id_for_name, HighlightSpan};
use super::languages::Language;

/// Something that can produce highlight spans for a buffer.
pub trait Highlighter {
    /// Spans for `source`, or None when `language` cannot be highlighted
    fn highlight(&mut self, source: &str, language: Language) -> Option<Vec<HighlightSpan>>;

    /// Whether highlighting for `language` is available at all
    fn supports(&self, language: Language) -> bool;
}

// Built-in queries shipped with the grammar crates (some use HIGHLIGHT_QUERY singular)
const PYTHON_HIGHLIGHTS: &str = tree_sitter_python::HIGHLIGHTS_QUERY;
const JAVA_HIGHLIGHTS: &str = tree_sitter_java::HIGHLIGHTS_QUERY;
const C_HIGHLIGHTS: &str = tree_sitter_c::HIGHLIGHT_QUERY;
const CPP_HIGHLIGHTS: &str = tree_sitter_cpp::HIGHLIGHT_QUERY;

/// Parser and compiled query for one language
struct LanguageSupport {
    parser: Parser,
    query: Query,
}

/// Tree-sitter backed [`Highlighter`] (parsers are !Sync, keep one per thread)
pub struct TreeSitterHighlighter {
    languages: HashMap<Language, LanguageSupport>,
}

impl TreeSitterHighlighter {
    /// Create a highlighter with every supported language initialized
    pub fn new() -> Self {
        let mut highlighter = Self {
            languages: HashMap::new(),
        };
        for language in Language::ALL {
            highlighter.init_language(language);
        }
        highlighter
    }

    /// Create a highlighter with no languages; everything falls back to plain text
    pub fn empty() -> Self {
        Self {
            languages: HashMap::new(),
        }
    }

    /// Initialize a language's parser and query
    fn init_language(&mut self, language: Language) {
        let (ts_lang, highlights_scm): (tree_sitter::Language, Cow<'static, str>) = match language {
            Language::Python => (tree_sitter_python::LANGUAGE.into(), PYTHON_HIGHLIGHTS.into()),
            Language::Java => (tree_sitter_java::LANGUAGE.into(), JAVA_HIGHLIGHTS.into()),
            // The C++ query only adds to the C one
            Language::Cpp => (
                tree_sitter_cpp::LANGUAGE.into(),
                format!("{C_HIGHLIGHTS}\n{CPP_HIGHLIGHTS}").into(),
            ),
            Language::C => (tree_sitter_c::LANGUAGE.into(), C_HIGHLIGHTS.into()),
        };

        let mut parser = Parser::new();
        if let Err(e) = parser.set_language(&ts_lang) {
            tracing::error!("Failed to set language {:?}: {}", language, e);
            return;
        }

        match Query::new(&ts_lang, &highlights_scm) {
            Ok(query) => {
                self.languages
                    .insert(language, LanguageSupport { parser, query });
            }
            Err(e) => {
                tracing::error!("Failed to compile query for {:?}: {:?}", language, e);
            }
        }
    }
}

impl Default for TreeSitterHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter for TreeSitterHighlighter {
    fn highlight(&mut self, source: &str, language: Language) -> Option<Vec<HighlightSpan>> {
        let support = match self.languages.get_mut(&language) {
            Some(s) => s,
            None => {
                tracing::warn!("No highlighter for language {:?}", language);
                return None;
            }
        };

        let tree = match support.parser.parse(source, None) {
            Some(tree) => tree,
            None => {
                tracing::error!("Parse failed for {:?}", language);
                return None;
            }
        };

        let query = &support.query;
        let mut cursor = QueryCursor::new();
        let mut spans = Vec::new();

        // Run query and collect captures using StreamingIterator
        let mut captures = cursor.captures(query, tree.root_node(), source.as_bytes());
        while let Some((query_match, capture_idx)) = captures.next() {
            let capture = &query_match.captures[*capture_idx];
            let capture_name = &query.capture_names()[capture.index as usize];

            let Some(highlight) = highlight_id_for_name(capture_name) else {
                continue; // Skip unknown captures
            };

            let range = capture.node.byte_range();
            if range.start < range.end {
                spans.push(HighlightSpan::new(range, highlight));
            }
        }

        tracing::trace!(?language, spans = spans.len(), "highlighted buffer");
        Some(spans)
    }

    fn supports(&self, language: Language) -> bool {
        self.languages.contains_key(&language)
    }
}
