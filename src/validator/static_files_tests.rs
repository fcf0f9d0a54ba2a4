use super::*;

const BLANK_INDEX: &str = "<html>\n<head>\n<title></title>\n<meta http-equiv=\"Content-Type\" content=\"text/html; charset=iso-8859-1\">\n</head>\n\n<body bgcolor=\"#FFFFFF\" text=\"#000000\">\n\n</body>\n</html>\n";

#[test]
fn blank_index_page_matches_known_digest() {
    assert_eq!(index_digest(BLANK_INDEX.as_bytes()), INDEX_PAGE_SHA256);
}

#[test]
fn index_empty_or_blank_page_passes() {
    let mut findings = Findings::new();
    validate_index("index.htm", b"", &mut findings);
    validate_index("index.htm", BLANK_INDEX.as_bytes(), &mut findings);
    assert!(findings.is_empty());
}

#[test]
fn index_with_other_content_fails_once() {
    let mut findings = Findings::new();
    let modified = BLANK_INDEX.replace("<title></title>", "<title>Hi</title>");
    validate_index("email/index.htm", modified.as_bytes(), &mut findings);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings.count_message(MessageId::InvalidIndexFile), 1);
}

#[test]
fn iso_with_three_segments_passes() {
    let mut findings = Findings::new();
    validate_iso("iso.txt", b"German\nDeutsch\nphpBB.de", &mut findings);
    assert!(findings.is_empty());
}

#[test]
fn iso_with_other_line_counts_fails_once() {
    for content in [&b""[..], b"German", b"German\nDeutsch", b"German\nDeutsch\nphpBB.de\n"] {
        let mut findings = Findings::new();
        validate_iso("iso.txt", content, &mut findings);
        assert_eq!(findings.count_message(MessageId::InvalidIsoFile), 1, "{content:?}");
        assert_eq!(findings.len(), 1);
    }
}
