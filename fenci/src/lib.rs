//! # fenci
//!
//! fenciは、単語の頻度に基づく辞書駆動の分かち書き（単語分割）ライブラリです。
//!
//! ## 概要
//!
//! 中国語・日本語・韓国語のように単語の区切りが明示されないテキストを、
//! 辞書に登録された単語の列に分割します。入力はまず文字種ごとのランに分けられ、
//! 漢字・かな・ハングルのランは単語グラフ上の最短経路探索によって分割されます。
//! ラテン文字や数字の連続は1語に、空白や記号は1文字ずつ1語になります。
//!
//! ## 主な機能
//!
//! - **頻度に基づく分割**: 単語のコストを`ln(総頻度 / 頻度)`として最小コストの分割を選択
//! - **複数辞書の併合**: 複数の単語リストを読み込み、頻度を合算
//! - **検索モード**: 長い単語に含まれる部分語も出力する再現率重視のモード
//! - **組み込み辞書**: 追加のファイルなしで使える参照辞書
//!
//! ## 使用例
//!
//! ```
//! use fenci::{Dictionary, Mode, Segmenter};
//! use fenci::segment::segments_to_string;
//!
//! let dict = Dictionary::from_readers([
//!     ("base.txt", "中国 20\n有 8 p3\n人口 6 p12\n十三 3\n".as_bytes()),
//!     ("user.txt", "十三亿 6\n中国 10\n".as_bytes()),
//! ])?;
//! assert_eq!(dict.total_frequency(), 53);
//!
//! let segmenter = Segmenter::new(dict);
//! let segments = segmenter.segment("中国有十三亿人口", Mode::Normal);
//! assert_eq!(segments_to_string(&segments, false), "中国/ 有/p3 十三亿/ 人口/p12");
//!
//! assert_eq!(segments[2].surface(), "十三亿");
//! assert_eq!(segments[2].range_byte(), 9..18);
//! # Ok::<(), fenci::errors::FenciError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

/// 文字種の判定
pub mod character;

/// 辞書データ構造とビルダー
pub mod dictionary;

/// エラー型の定義
pub mod errors;

/// 分かち書きの結果
pub mod segment;

/// 分かち書き器の実装
pub mod segmenter;

/// 入力テキストの内部表現
pub mod sentence;


// Re-exports
pub use dictionary::{Dictionary, DictionaryBuilder};
pub use segment::{LexType, Segment};
pub use segmenter::{Mode, Segmenter};

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
