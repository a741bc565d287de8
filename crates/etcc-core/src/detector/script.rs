use std::path::Path;

use super::content::read_text;
use super::{
    ContentDetector, LabelSet, PERL_SCRIPT, PHP_SCRIPT, PYTHON_SCRIPT, RUBY_SCRIPT, SHELL_SCRIPT,
    SYSTEMD,
};

/// Commands whose presence as a whole word marks a file as shell-like
pub const COMMON_SHELL_COMMANDS: &[&str] = &[
    "awk", "bash", "cat", "chmod", "chown", "cp", "cut", "date", "echo", "find", "grep", "head",
    "kill", "less", "ls", "mkdir",
];

/// Section headers and marker phrases found in systemd configuration
pub const SYSTEMD_INDICATORS: &[&str] = &[
    "[Unit]",
    "[Service]",
    "[Install]",
    "[Upload]",
    "[Match]",
    "[Network]",
    "[DHCPv4]",
    "[DHCPv6]",
    "[Journal]",
    "This file is part of systemd.",
    "systemd-analyze cat-config",
];

/// Shebang substring → label, first hit wins
pub const SHEBANG_MAP: &[(&str, &str)] = &[
    ("bin/bash", SHELL_SCRIPT),
    ("bin/sh", SHELL_SCRIPT),
    ("usr/bin/python", PYTHON_SCRIPT),
    ("bin/python", PYTHON_SCRIPT),
    ("usr/bin/perl", PERL_SCRIPT),
    ("bin/perl", PERL_SCRIPT),
    ("usr/bin/ruby", RUBY_SCRIPT),
    ("bin/ruby", RUBY_SCRIPT),
    ("usr/bin/php", PHP_SCRIPT),
    ("bin/php", PHP_SCRIPT),
];

/// Detects systemd units, shell scripts and interpreter scripts.
///
/// Possible labels: `"Systemd"`, `"Shell script"`, `"Python script"`,
/// `"Perl script"`, `"Ruby script"`, `"PHP script"`. The file is read once per
/// call; when it cannot be read only the `.sh` file-name signal can fire.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptLikeCheck;

impl ScriptLikeCheck {
    /// Readable `.service` files, or content carrying a systemd section/marker.
    ///
    /// Unreadable files (`content` is `None`) are never systemd-like, whatever
    /// their name.
    pub fn is_systemd_like(path: &str, content: Option<&str>) -> bool {
        content.is_some_and(|c| {
            path.ends_with(".service") || SYSTEMD_INDICATORS.iter().any(|i| c.contains(i))
        })
    }

    /// `.sh` files, or content that looks like a shell script.
    ///
    /// The last heuristic (every line has `=`, `export` or `LANG`) also accepts
    /// plain key=value files and empty files.
    pub fn is_shell_like(path: &str, content: Option<&str>) -> bool {
        if path.ends_with(".sh") {
            return true;
        }
        let Some(content) = content else {
            return false;
        };
        let lines: Vec<&str> = content.lines().collect();

        if let Some(first) = lines.first() {
            if first.starts_with("#!") && (first.contains("bash") || first.contains("sh")) {
                return true;
            }
        }

        if !lines.iter().take(3).all(|line| line.is_ascii()) {
            return false;
        }

        // whole tokens only, "echo-123" is not "echo"
        if lines.iter().any(|line| {
            line.split_whitespace()
                .any(|token| COMMON_SHELL_COMMANDS.iter().any(|cmd| *cmd == token))
        }) {
            return true;
        }

        lines
            .iter()
            .all(|line| line.contains('=') || line.contains("export") || line.contains("LANG"))
    }

    /// Map a `#!` first line to an interpreter label.
    pub fn shebang_label(first_line: &str) -> Option<&'static str> {
        if !first_line.starts_with("#!") {
            return None;
        }
        SHEBANG_MAP
            .iter()
            .find(|(needle, _)| first_line.contains(needle))
            .map(|(_, label)| *label)
    }
}

impl ContentDetector for ScriptLikeCheck {
    fn name(&self) -> &'static str {
        "ScriptLikeCheck"
    }

    fn check(&self, path: &Path) -> LabelSet {
        let path_str = path.to_string_lossy();
        let content = read_text(path);
        let content = content.as_deref();

        let mut result = LabelSet::new();
        if Self::is_systemd_like(&path_str, content) {
            result.insert(SYSTEMD.to_string());
        }
        if Self::is_shell_like(&path_str, content) {
            result.insert(SHELL_SCRIPT.to_string());
        }
        if let Some(label) = content
            .and_then(|c| c.lines().next())
            .and_then(Self::shebang_label)
        {
            result.insert(label.to_string());
        }
        result
    }
}
