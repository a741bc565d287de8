//! # Category Module
//!
//! `/etc`配下のファイルをパス文字列だけで意味的なカテゴリに分類する。
//!
//! ## 分類規則
//!
//! - マッチ前に`/usr/share`と`/usr/lib`をパスから削除する
//!   （`/usr/share/fonts/...`は`/fonts/...`として扱われる）
//! - カテゴリを宣言順に、各カテゴリのパターンを宣言順に評価する
//! - パターンがパスの部分文字列であれば、そのカテゴリで確定（先勝ち）
//! - どれにもマッチしなければ`"Others"`
//!
//! ## モジュール構成
//!
//! - `builtin`: ビルトインカテゴリ表
//! - `classifier`: 分類器
//!
//! ## 使用例
//!
//! ```rust
//! use etcc_core::category::{PathClassifier, OTHERS_CATEGORY};
//!
//! let classifier = PathClassifier::builtin();
//! assert_eq!(classifier.classify("/etc/hosts"), "System Configuration");
//! assert_eq!(
//!     classifier.classify("/usr/share/fonts/foo.conf"),
//!     classifier.classify("/etc/fonts/foo.conf"),
//! );
//! assert_eq!(classifier.classify("/etc/unknown.xyz"), OTHERS_CATEGORY);
//! ```

mod builtin;
mod classifier;

// Re-exports
pub use builtin::{CategoryRule, BUILTIN_CATEGORIES, OTHERS_CATEGORY};
pub use classifier::{strip_aliases, PathClassifier, STRIPPED_PREFIXES};
