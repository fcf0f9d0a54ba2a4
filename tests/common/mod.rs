#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the langpack-guard binary.
#[macro_export]
macro_rules! langpack_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("langpack-guard"))
    };
}

/// Header every language file starts with.
pub const LANG_HEADER: &str = "<?php\n\
if (!defined('IN_PHPBB'))\n\
{\n\
\texit;\n\
}\n\
\n\
if (empty($lang) || !is_array($lang))\n\
{\n\
\t$lang = array();\n\
}\n\n";

/// Builds a complete language file merging the given entries.
pub fn lang_file(entries: &str) -> String {
    format!("{LANG_HEADER}$lang = array_merge($lang, array(\n{entries}\n));\n")
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Writes the same file into `language/<locale>/`.
    pub fn create_pack_file(&self, locale: &str, relative_path: &str, content: &str) {
        self.create_file(&format!("language/{locale}/{relative_path}"), content);
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.langpack-guard.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".langpack-guard.toml", content);
    }

    /// Reference `en` and candidate `de` packs that agree on everything.
    pub fn with_matching_packs() -> Self {
        let fixture = Self::new();
        for locale in ["en", "de"] {
            let text = if locale == "en" { "Hello %s" } else { "Hallo %s" };
            fixture.create_pack_file(
                locale,
                "common.php",
                &lang_file(&format!("\t'GREETING' => '{text}',")),
            );
            fixture.create_pack_file(
                locale,
                "email/welcome.txt",
                "Subject: {SITENAME}\n\nHi {USERNAME}\n\n{EMAIL_SIG}\n",
            );
            fixture.create_pack_file(locale, "index.htm", "");
        }
        fixture
    }
}
