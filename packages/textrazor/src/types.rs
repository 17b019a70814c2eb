//! Request-side types: extractors and analysis options.

use std::fmt;

/// A named analysis feature requested from the TextRazor API.
///
/// Only select the extractors your application actually needs; each one adds
/// server-side work and response size. Any name that is not one of the
/// predefined extractors is treated by the API as a custom Prolog extractor,
/// modeled here as [`Extractor::Custom`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extractor {
    /// Tokenized words with part-of-speech tags, stems and lemmas.
    Words,
    /// Multi-word noun phrases.
    Phrases,
    /// Named entities linked to Wikipedia/Freebase/DBPedia.
    Entities,
    /// Grammatical dependency trees (Stanford uncollapsed dependencies).
    DependencyTrees,
    /// Subject/predicate/object relations between words.
    Relations,
    /// Words entailed by the source text.
    Entailments,
    /// Abstract topics scored against the document.
    Topics,
    /// Wordnet sense scores per word.
    Senses,
    /// A custom Prolog extractor defined in the request rules.
    Custom(String),
}

impl Extractor {
    /// The wire name of this extractor, as sent in the `extractors` parameter.
    pub fn as_str(&self) -> &str {
        match self {
            Extractor::Words => "words",
            Extractor::Phrases => "phrases",
            Extractor::Entities => "entities",
            Extractor::DependencyTrees => "dependency-trees",
            Extractor::Relations => "relations",
            Extractor::Entailments => "entailments",
            Extractor::Topics => "topics",
            Extractor::Senses => "senses",
            Extractor::Custom(name) => name,
        }
    }
}

impl fmt::Display for Extractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Extractor {
    fn from(name: &str) -> Self {
        match name {
            "words" => Extractor::Words,
            "phrases" => Extractor::Phrases,
            "entities" => Extractor::Entities,
            "dependency-trees" => Extractor::DependencyTrees,
            "relations" => Extractor::Relations,
            "entailments" => Extractor::Entailments,
            "topics" => Extractor::Topics,
            "senses" => Extractor::Senses,
            other => Extractor::Custom(other.to_string()),
        }
    }
}

/// Preprocessing cleanup mode applied to the content before analysis.
///
/// For all modes other than [`CleanupMode::Raw`], position offsets in the
/// response apply to the cleaned text, not the submitted HTML.
///
/// The API defaults to `raw` for text analysis and `cleanHTML` for URL
/// analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupMode {
    /// Content is analyzed as-is, with no preprocessing.
    Raw,
    /// All HTML/XML tags are removed, keeping heading and menu content.
    StripTags,
    /// Boilerplate HTML (tags, comments, menus) is removed, leaving only the
    /// article body.
    CleanHtml,
}

impl CleanupMode {
    /// The wire name of this mode, as sent in the `cleanup.mode` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            CleanupMode::Raw => "raw",
            CleanupMode::StripTags => "stripTags",
            CleanupMode::CleanHtml => "cleanHTML",
        }
    }
}

impl fmt::Display for CleanupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
