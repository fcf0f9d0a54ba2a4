/// Kind of a language pack file, decided from its relative path alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    LangArray,
    EmailTemplate,
    HelpArray,
    SearchSynonyms,
    SearchIgnoreWords,
    IndexPage,
    IsoMetadata,
    Unrecognized,
}

impl FileKind {
    /// Classify a relative, `/`-separated path. First matching rule wins, so
    /// the help and search files are picked out before the generic `.php` rule.
    #[must_use]
    pub fn classify(path: &str) -> Self {
        if path.starts_with("email/") && path.ends_with(".txt") {
            Self::EmailTemplate
        } else if path.starts_with("help_") && path.ends_with(".php") {
            Self::HelpArray
        } else if path == "search_synonyms.php" {
            Self::SearchSynonyms
        } else if path == "search_ignore_words.php" {
            Self::SearchIgnoreWords
        } else if path.ends_with(".php") {
            Self::LangArray
        } else if path.ends_with("index.htm") {
            Self::IndexPage
        } else if path == "iso.txt" {
            Self::IsoMetadata
        } else {
            Self::Unrecognized
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LangArray => "lang",
            Self::EmailTemplate => "email",
            Self::HelpArray => "help",
            Self::SearchSynonyms => "search_synonyms",
            Self::SearchIgnoreWords => "search_ignore_words",
            Self::IndexPage => "index",
            Self::IsoMetadata => "iso",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "kind_tests.rs"]
mod tests;
