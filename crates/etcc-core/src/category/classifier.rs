//! Path Classifier
//!
//! パス文字列をビルトインカテゴリ表に基づいて1つのカテゴリに分類する。

use std::path::Path;

use super::builtin::{CategoryRule, BUILTIN_CATEGORIES, OTHERS_CATEGORY};

/// マッチ前にパスから取り除くエイリアス接頭辞（この順で削除）
pub const STRIPPED_PREFIXES: &[&str] = &["/usr/share", "/usr/lib"];

/// パスベースのカテゴリ分類器
///
/// カテゴリ宣言順 → パターン宣言順で評価し、最初にマッチしたカテゴリを返す。
/// 純粋な文字列操作のみで、ファイルシステムには触れない。
#[derive(Debug, Clone, Copy)]
pub struct PathClassifier {
    rules: &'static [CategoryRule],
}

impl PathClassifier {
    /// 任意のルール表で分類器を構築
    pub fn new(rules: &'static [CategoryRule]) -> Self {
        Self { rules }
    }

    /// ビルトインカテゴリで分類器を構築
    pub fn builtin() -> Self {
        Self::new(BUILTIN_CATEGORIES)
    }

    /// ルール表（宣言順）
    pub fn rules(&self) -> &'static [CategoryRule] {
        self.rules
    }

    /// カテゴリ名一覧（宣言順、末尾に"Others"）
    pub fn category_names(&self) -> Vec<&'static str> {
        self.rules
            .iter()
            .map(|r| r.name)
            .chain(std::iter::once(OTHERS_CATEGORY))
            .collect()
    }

    /// パス文字列を分類
    pub fn classify(&self, path: &str) -> &'static str {
        let stripped = strip_aliases(path);
        self.rules
            .iter()
            .find(|rule| rule.matches(&stripped))
            .map(|rule| rule.name)
            .unwrap_or(OTHERS_CATEGORY)
    }

    /// `Path`を分類（非UTF-8部分は置換して扱う）
    pub fn classify_path(&self, path: &Path) -> &'static str {
        self.classify(&path.to_string_lossy())
    }
}

impl Default for PathClassifier {
    fn default() -> Self {
        Self::builtin()
    }
}

/// `/usr/share`と`/usr/lib`をパスから削除する
///
/// 例: `/usr/share/fonts/a.conf` → `/fonts/a.conf`
pub fn strip_aliases(path: &str) -> String {
    STRIPPED_PREFIXES
        .iter()
        .fold(path.to_string(), |acc, prefix| acc.replace(prefix, ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: &str = "Desktop Environment and Display Managers";

    #[test]
    fn test_builtin_category_names_end_with_others() {
        let classifier = PathClassifier::builtin();
        assert_eq!(classifier.rules(), BUILTIN_CATEGORIES);

        let names = classifier.category_names();
        assert_eq!(names.len(), BUILTIN_CATEGORIES.len() + 1);
        assert_eq!(names[0], "System Configuration");
        assert_eq!(names.last(), Some(&OTHERS_CATEGORY));
    }

    #[test]
    fn test_classify_is_deterministic() {
        let classifier = PathClassifier::builtin();
        for path in ["/etc/hosts", "/etc/ssh/sshd_config", "/etc/weird"] {
            assert_eq!(classifier.classify(path), classifier.classify(path));
        }
    }

    #[test]
    fn test_usr_share_is_stripped_before_matching() {
        let classifier = PathClassifier::builtin();
        assert_eq!(classifier.classify("/usr/share/fonts/foo.conf"), DESKTOP);
        assert_eq!(classifier.classify("/etc/fonts/foo.conf"), DESKTOP);
    }

    #[test]
    fn test_usr_lib_is_stripped_before_matching() {
        let classifier = PathClassifier::builtin();
        assert_eq!(
            classifier.classify("/usr/lib/systemd/system/foo.service"),
            classifier.classify("/systemd/system/foo.service"),
        );
        assert_eq!(
            classifier.classify("/usr/lib/systemd/system/foo.service"),
            "System Configuration"
        );
    }

    #[test]
    fn test_strip_aliases_removes_every_occurrence() {
        assert_eq!(strip_aliases("/usr/share/fonts/a.conf"), "/fonts/a.conf");
        assert_eq!(strip_aliases("/usr/lib/x/usr/lib/y"), "/x/y");
        assert_eq!(strip_aliases("/etc/hosts"), "/etc/hosts");
    }

    #[test]
    fn test_first_category_wins() {
        let classifier = PathClassifier::builtin();
        // "/systemd" (System Configuration) precedes "/systemd/timers"
        assert_eq!(
            classifier.classify("/etc/systemd/timers/backup.timer"),
            "System Configuration"
        );
        // "/cups" appears in both daemons and hardware
        assert_eq!(
            classifier.classify("/etc/cups/printers.conf"),
            "System Services and Daemons"
        );
        // "/ssh" (security) and "/network" (network services)
        assert_eq!(
            classifier.classify("/etc/ssh/network/config"),
            "Security and Authentication"
        );
    }

    #[test]
    fn test_unmatched_path_is_others() {
        let classifier = PathClassifier::builtin();
        assert_eq!(
            classifier.classify("/etc/totally-unknown-file.xyz"),
            OTHERS_CATEGORY
        );
        assert_eq!(classifier.classify(""), OTHERS_CATEGORY);
    }

    #[test]
    fn test_various_categories() {
        let classifier = PathClassifier::builtin();
        assert_eq!(classifier.classify("/etc/hostname"), "System Configuration");
        assert_eq!(classifier.classify("/etc/pam.d/login"), "Security and Authentication");
        assert_eq!(
            classifier.classify("/etc/nginx/nginx.conf"),
            "Network Services Configuration"
        );
        assert_eq!(classifier.classify("/etc/pacman.conf"), "Package Management");
        assert_eq!(
            classifier.classify("/etc/logrotate.d/rsyslog"),
            "System Services and Daemons"
        );
        assert_eq!(classifier.classify("/etc/pulse/daemon.conf"), "Hardware and Drivers");
        assert_eq!(classifier.classify("/etc/X11/xorg.conf"), DESKTOP);
        assert_eq!(classifier.classify("/etc/zsh/zshrc"), "Miscellaneous");
        assert_eq!(classifier.classify("/etc/default/grub"), "Bootloaders");
        assert_eq!(classifier.classify("/etc/cloud/cloud.cfg"), "Cloud");
    }

    #[test]
    fn test_custom_rule_table() {
        static RULES: &[CategoryRule] = &[
            CategoryRule {
                name: "First",
                patterns: &["/b", "/a"],
            },
            CategoryRule {
                name: "Second",
                patterns: &["/a"],
            },
        ];
        let classifier = PathClassifier::new(RULES);
        assert_eq!(classifier.classify("/x/a/file"), "First");
        assert_eq!(classifier.classify("/x/c/file"), OTHERS_CATEGORY);
        assert_eq!(classifier.category_names(), vec!["First", "Second", "Others"]);
    }
}
