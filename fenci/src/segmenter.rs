//! 最短経路探索に基づく分かち書き器。
//!
//! このモジュールは、辞書の単語頻度から計算したコストを用いて、
//! 入力文を最も確からしい単語列に分割する [`Segmenter`] を提供します。
//!
//! # 主要な構造体
//!
//! - [`Segmenter`]: 辞書を保持し、分かち書きを実行する構造体
//! - [`Worker`]: 分かち書きのための作業領域を再利用するワーカー
//!
//! # 例
//!
//! ```
//! use fenci::{Dictionary, Mode, Segmenter};
//!
//! let dict = Dictionary::bundled()?;
//! let segmenter = Segmenter::new(dict);
//!
//! for seg in segmenter.segment("中国人口", Mode::Normal) {
//!     println!("{}\t{}", seg.surface(), seg.tag());
//! }
//! # Ok::<(), fenci::errors::FenciError>(())
//! ```
pub(crate) mod lattice;
pub mod worker;

use std::sync::Arc;

use crate::dictionary::Dictionary;
use crate::segment::Segment;
use crate::segmenter::lattice::Lattice;
use crate::segmenter::worker::Worker;

/// 検索モードで部分語に展開する単語の最小文字数のデフォルト値。
pub const DEFAULT_MIN_EXPAND_LEN: usize = 3;

/// 分かち書きのモード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// 最良の分割のみを出力します。
    #[default]
    Normal,

    /// 最良の分割に加えて、長い単語に含まれる部分語も出力します。
    ///
    /// 検索エンジンの索引付けなど、再現率を重視する用途のためのモードです。
    /// 部分語はそれを含む単語の直前に出力され、[`Segment::depth()`]が`1`以上になります。
    Search,
}

/// 分かち書き器。
///
/// 辞書を共有参照として保持するため、複製は低コストです。
/// 複数のスレッドから同時に使用できます。
///
/// # 例
///
/// ```
/// use fenci::{Dictionary, Mode, Segmenter};
///
/// let dict = Dictionary::from_readers([(
///     "t",
///     "中国 20\n有 10 p3\n十三亿 6\n人口 6 p12\n".as_bytes(),
/// )])?;
/// let segmenter = Segmenter::new(dict);
///
/// let words: Vec<_> = segmenter
///     .segment("中国有十三亿人口", Mode::Normal)
///     .iter()
///     .map(|seg| seg.surface())
///     .collect();
/// assert_eq!(words, ["中国", "有", "十三亿", "人口"]);
/// # Ok::<(), fenci::errors::FenciError>(())
/// ```
#[derive(Clone)]
pub struct Segmenter {
    dict: Arc<Dictionary>,
    min_expand_len: usize,
}

impl Segmenter {
    /// 新しい分かち書き器を作成します。
    ///
    /// 辞書の所有権は分かち書き器に移動します。複数の分かち書き器で辞書を共有する
    /// 場合は [`Segmenter::from_shared_dictionary`] を使用してください。
    pub fn new(dict: Dictionary) -> Self {
        Self::from_shared_dictionary(Arc::new(dict))
    }

    /// 共有された辞書から新しい分かち書き器を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use std::sync::Arc;
    /// use fenci::{Dictionary, Segmenter};
    ///
    /// let dict = Arc::new(Dictionary::bundled()?);
    /// let normal = Segmenter::from_shared_dictionary(dict.clone());
    /// let coarse = Segmenter::from_shared_dictionary(dict).min_expand_len(5);
    /// # Ok::<(), fenci::errors::FenciError>(())
    /// ```
    pub fn from_shared_dictionary(dict: Arc<Dictionary>) -> Self {
        Self {
            dict,
            min_expand_len: DEFAULT_MIN_EXPAND_LEN,
        }
    }

    /// 検索モードで部分語に展開する単語の最小文字数を指定します。
    ///
    /// デフォルトは`3`です。`2`未満の値は`2`として扱われます。
    pub fn min_expand_len(mut self, min_expand_len: usize) -> Self {
        self.min_expand_len = min_expand_len.max(2);
        self
    }

    /// 辞書への参照を返します。
    #[inline(always)]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// 新しいワーカーを作成します。
    ///
    /// 同じスレッドで多数の文を処理する場合は、ワーカーを使い回すことで
    /// 作業領域の再確保を避けられます。
    pub fn new_worker(&self) -> Worker<'_> {
        Worker::new(self)
    }

    /// 入力文を分かち書きします。
    ///
    /// 通常モードでは、結果の語は重なりなく連続し、入力全体を覆います。
    /// 空の入力に対しては空のベクトルを返します。
    ///
    /// # 引数
    ///
    /// * `input` - 入力文
    /// * `mode` - 分かち書きのモード
    pub fn segment<'a>(&'a self, input: &'a str, mode: Mode) -> Vec<Segment<'a>> {
        self.new_worker().segment(input, mode)
    }

    /// 文字列に対してラティスを構築します。
    ///
    /// 各位置から始まる辞書の単語をすべて辺として追加します。1文字の単語が
    /// 見つからない位置には、未知語のコストで1文字の辺を追加します。
    ///
    /// # 引数
    ///
    /// * `chars` - 文字列
    /// * `lattice` - 構築するラティス
    /// * `exclude_whole` - `true`の場合、文字列全体を覆う単語を辺に含めません。
    pub(crate) fn build_lattice(&self, chars: &[char], lattice: &mut Lattice, exclude_whole: bool) {
        let len_char = chars.len();
        lattice.reset(len_char);

        for start in 0..len_char {
            if !lattice.is_reachable(start) {
                continue;
            }
            let mut has_single = false;
            for m in self.dict.common_prefix_iterator(&chars[start..]) {
                let end = start + m.end_char;
                if exclude_whole && start == 0 && end == len_char {
                    continue;
                }
                has_single |= m.end_char == 1;
                lattice.relax(start, end, Some(m.word_id), self.dict.word_cost(m.word_id));
            }
            if !has_single {
                lattice.relax(start, start + 1, None, self.dict.unknown_cost());
            }
        }
    }

    #[inline(always)]
    pub(crate) const fn expand_threshold(&self) -> usize {
        self.min_expand_len
    }
}
