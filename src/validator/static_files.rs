use sha2::{Digest, Sha256};

use crate::finding::{Findings, MessageId};

/// SHA-256 of the blank `index.htm` shipped with every language pack.
pub const INDEX_PAGE_SHA256: &str =
    "465dabbf2c1578c7b942afb21ba626bf35faaa47504e9a9ba75be7ef5639eb06";

/// Hex SHA-256 of file content.
#[must_use]
pub fn index_digest(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

/// `index.htm` must be empty or the stock blank page.
pub(super) fn validate_index(file: &str, content: &[u8], findings: &mut Findings) {
    if !content.is_empty() && index_digest(content) != INDEX_PAGE_SHA256 {
        findings.fail(MessageId::InvalidIndexFile, file, Vec::new());
    }
}

/// `iso.txt` holds english name, native name and author, one per line.
pub(super) fn validate_iso(file: &str, content: &[u8], findings: &mut Findings) {
    let segments = content.split(|b| *b == b'\n').count();
    if segments != 3 {
        findings.fail(MessageId::InvalidIsoFile, file, Vec::new());
    }
}

#[cfg(test)]
#[path = "static_files_tests.rs"]
mod tests;
