use serde::Serialize;

/// Identifier of every message a validator can emit.
///
/// The id is what consumers match on; `template` is only the default English
/// rendering used by the text formatter. `{0}`, `{1}`… refer to positional args.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageId {
    // Checks applied to every file
    NonUnixLineEndings,
    MissingIncludeGuard,
    FileNotValidated,

    // Data file declarations
    InvalidVariableDeclaration,
    UnexpectedOutput,
    ParseError,

    // Language arrays
    MissingKey,
    ExtraKey,

    // Email templates
    EmailMissingSubject,
    EmailInvalidSubject,
    EmailMissingSignature,
    EmailInvalidSignature,
    EmailAdditionalVars,
    EmailMissingVars,
    EmailAdditionalHtml,
    EmailMissingNewline,

    // Help files
    HelpInvalidEntry,
    HelpColumnBreak,

    // Search files
    SearchInvalidSynonymTypes,
    SearchInvalidWordType,

    // Static files
    InvalidIndexFile,
    InvalidIsoFile,

    // Per-key comparison
    KeyInvalidType,
    KeyAdditionalPlaceholders,
    KeyMissingPlaceholders,
    KeyAdditionalVars,
    KeyMissingVars,
    KeyAdditionalHtml,
}

impl MessageId {
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::NonUnixLineEndings => "File must use Unix line endings (found carriage return)",
            Self::MissingIncludeGuard => "File must check that IN_PHPBB is defined",
            Self::FileNotValidated => "File was not validated (unknown file type)",
            Self::InvalidVariableDeclaration => "File must only declare the variable ${0} as an array",
            Self::UnexpectedOutput => "File must not produce output: \"{0}\"",
            Self::ParseError => "File could not be parsed (line {0}): {1}",
            Self::MissingKey => "Missing language key '{0}'",
            Self::ExtraKey => "Language key '{0}' does not exist in the reference language",
            Self::EmailMissingSubject => "Email is missing the 'Subject: ' line",
            Self::EmailInvalidSubject => "Email must not have a 'Subject: ' line",
            Self::EmailMissingSignature => "Email is missing the {EMAIL_SIG} signature",
            Self::EmailInvalidSignature => "Email must not use the {EMAIL_SIG} signature",
            Self::EmailAdditionalVars => "Email uses additional template variables: {0}",
            Self::EmailMissingVars => "Email does not use template variables: {0}",
            Self::EmailAdditionalHtml => "Email must not contain HTML: {0}",
            Self::EmailMissingNewline => "Email should end with a new line",
            Self::HelpInvalidEntry => "Invalid help entry (must be [headline, description]): {0}",
            Self::HelpColumnBreak => "Help file must have exactly one column break entry, found {0}",
            Self::SearchInvalidSynonymTypes => "Synonyms must map string to string: {0} => {1}",
            Self::SearchInvalidWordType => "Ignored words must be strings: {0}",
            Self::InvalidIndexFile => "index.htm must be empty or the default blank page",
            Self::InvalidIsoFile => "iso.txt must have exactly 3 lines (english name, native name, author)",
            Self::KeyInvalidType => "Language key '{0}' must be a {1}",
            Self::KeyAdditionalPlaceholders => "Language key '{0}' uses additional placeholders: {1}",
            Self::KeyMissingPlaceholders => "Language key '{0}' does not use placeholders: {1}",
            Self::KeyAdditionalVars => "Language key '{0}' uses additional template variables: {1}",
            Self::KeyMissingVars => "Language key '{0}' does not use template variables: {1}",
            Self::KeyAdditionalHtml => "Language key '{0}' uses HTML not found in the reference: {1}",
        }
    }

    /// Fill the template's positional slots. Missing args leave the slot as is.
    ///
    /// Single pass, so braces inside an argument are never substituted again.
    #[must_use]
    pub fn render(self, args: &[String]) -> String {
        let template = self.template();
        let mut text = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            text.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let slot = after
                .find('}')
                .and_then(|close| after[..close].parse::<usize>().ok().map(|i| (i, close)));

            match slot {
                Some((index, close)) if index < args.len() => {
                    text.push_str(&args[index]);
                    rest = &after[close + 1..];
                }
                _ => {
                    text.push('{');
                    rest = after;
                }
            }
        }
        text.push_str(rest);
        text
    }
}
