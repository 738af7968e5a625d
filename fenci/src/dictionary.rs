//! 分かち書きのための辞書モジュール。
//!
//! このモジュールは、単語リストの読み込み、併合、および検索を行います。
//! 主な機能として以下を提供します:
//!
//! - 複数の辞書ソースの読み込みと併合（頻度の合算）
//! - ダブル配列トライによる接頭辞検索
//! - 頻度に基づく単語コストの計算
//! - 動作確認用の小さな組み込み辞書
//!
//! # 辞書の読み込み方法
//!
//! - [`Dictionary::from_paths`]: ファイルパスから辞書を読み込む
//! - [`Dictionary::from_readers`]: リーダーから辞書を読み込む
//! - [`Dictionary::bundled`]: クレートに組み込まれた参照辞書を読み込む
//! - [`DictionaryBuilder`]: 単語を逐次追加して辞書を構築する
//!
//! 構築後の辞書は不変であり、複数のスレッドから同時に参照できます。
pub mod builder;
pub(crate) mod token;
pub(crate) mod trie;

use std::io::Read;
use std::path::Path;

use hashbrown::HashMap;

use crate::dictionary::trie::Trie;
use crate::errors::{FenciError, Result};

pub use crate::dictionary::builder::DictionaryBuilder;
pub use crate::dictionary::token::Token;

/// 辞書にない文字に与える追加コスト。
///
/// 未知語のコストは、頻度1の単語のコストにこの値を加えたものです。
pub const UNKNOWN_PENALTY: f64 = 10.0;

const BUNDLED_DICTIONARY: &str = include_str!("../resources/dict.txt");

/// 分かち書きのための読み取り専用辞書。
///
/// 単語ごとに合算された頻度とタグを保持し、任意の位置から始まる単語の検索と、
/// 頻度に基づく単語コストを提供します。
///
/// 頻度`f`の単語のコストは`ln(total_frequency / f)`です。コストが低いほど
/// 出現しやすい単語です。頻度0の単語と辞書にない文字には、どの単語よりも
/// 高い[`unknown_cost()`](Self::unknown_cost)が与えられます。
pub struct Dictionary {
    tokens: Vec<Token>,
    costs: Vec<f64>,
    trie: Option<Trie>,
    index: HashMap<String, u32>,
    total_frequency: u64,
    max_word_len: usize,
    unknown_cost: f64,
}

/// 接頭辞検索の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexMatch {
    /// 一致した単語のID
    pub word_id: u32,

    /// 検索開始位置から数えた単語の終了位置（文字単位）
    pub end_char: usize,
}

impl Dictionary {
    /// トークンのリストから辞書を構築します。
    ///
    /// トークンの表層形は互いに異なり、空でない必要があります。
    pub(crate) fn from_tokens(tokens: Vec<Token>) -> Result<Self> {
        let total_frequency = tokens
            .iter()
            .try_fold(0u64, |acc, t| acc.checked_add(t.frequency()))
            .ok_or_else(|| {
                FenciError::invalid_argument("tokens", "the total frequency overflows u64")
            })?;

        let mut index = HashMap::with_capacity(tokens.len());
        let mut records = Vec::with_capacity(tokens.len());
        let mut max_word_len = 0;
        for (i, t) in tokens.iter().enumerate() {
            if t.text().is_empty() {
                return Err(FenciError::invalid_argument(
                    "tokens",
                    "a dictionary word must not be empty",
                ));
            }
            let word_id = u32::try_from(i)?;
            if index.insert(t.text().to_string(), word_id).is_some() {
                return Err(FenciError::invalid_argument(
                    "tokens",
                    format!("duplicate word {:?}", t.text()),
                ));
            }
            records.push((t.text(), word_id));
            max_word_len = max_word_len.max(t.text().chars().count());
        }
        records.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let trie = if records.is_empty() {
            None
        } else {
            Some(Trie::from_records(&records)?)
        };

        let log_total = (total_frequency.max(1) as f64).ln();
        let unknown_cost = log_total + UNKNOWN_PENALTY;
        let costs = tokens
            .iter()
            .map(|t| match t.frequency() {
                0 => unknown_cost,
                f => log_total - (f as f64).ln(),
            })
            .collect();

        Ok(Self {
            tokens,
            costs,
            trie,
            index,
            total_frequency,
            max_word_len,
            unknown_cost,
        })
    }

    /// 複数の辞書ファイルを読み込み、併合した辞書を構築します。
    ///
    /// # 引数
    ///
    /// * `paths` - 辞書ファイルのパス。先に指定したものほど優先してタグが採用されます。
    ///
    /// # エラー
    ///
    /// いずれかのファイルを読み込めない場合、または不正な行を含む場合に
    /// [`FenciError`] を返します。この場合、辞書は構築されません。
    ///
    /// # 例
    ///
    /// ```no_run
    /// use fenci::Dictionary;
    ///
    /// let dict = Dictionary::from_paths(["base.txt", "user.txt"])?;
    /// println!("{} words", dict.num_tokens());
    /// # Ok::<(), fenci::errors::FenciError>(())
    /// ```
    pub fn from_paths<I, P>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut builder = DictionaryBuilder::new();
        for path in paths {
            builder = builder.add_path(path)?;
        }
        builder.build()
    }

    /// 複数のリーダーから辞書ソースを読み込み、併合した辞書を構築します。
    ///
    /// # 引数
    ///
    /// * `sources` - ソース名とリーダーの組。ソース名はエラーメッセージに使用されます。
    ///
    /// # エラー
    ///
    /// いずれかのソースが不正な場合に [`FenciError`] を返します。
    pub fn from_readers<I, N, R>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, R)>,
        N: Into<String>,
        R: Read,
    {
        let mut builder = DictionaryBuilder::new();
        for (name, rdr) in sources {
            builder = builder.add_reader(name, rdr)?;
        }
        builder.build()
    }

    /// クレートに組み込まれた参照辞書を読み込みます。
    ///
    /// 組み込み辞書は動作確認用の小さな単語リスト（約160語）であり、
    /// 実用的な網羅性はありません。実際のテキストを処理する場合は、
    /// [`Dictionary::from_paths`] などで十分な規模の辞書を読み込んでください。
    ///
    /// # 例
    ///
    /// ```
    /// use fenci::Dictionary;
    ///
    /// let dict = Dictionary::bundled()?;
    /// assert_eq!(dict.get("中国").unwrap().tag(), "ns");
    /// # Ok::<(), fenci::errors::FenciError>(())
    /// ```
    pub fn bundled() -> Result<Self> {
        DictionaryBuilder::new()
            .add_reader("bundled:dict.txt", BUNDLED_DICTIONARY.as_bytes())?
            .build()
    }

    /// 登録されている単語の種類数を返します。
    #[inline(always)]
    pub fn num_tokens(&self) -> usize {
        self.tokens.len()
    }

    /// 全単語の頻度の合計を返します。
    #[inline(always)]
    pub const fn total_frequency(&self) -> u64 {
        self.total_frequency
    }

    /// 最も長い単語の文字数を返します。
    #[inline(always)]
    pub const fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    /// 辞書にない文字に与えるコストを返します。
    #[inline(always)]
    pub const fn unknown_cost(&self) -> f64 {
        self.unknown_cost
    }

    /// 単語IDからトークンを取得します。
    ///
    /// # パニック
    ///
    /// `word_id`がこの辞書のものでない場合、パニックします。
    #[inline(always)]
    pub fn token(&self, word_id: u32) -> &Token {
        &self.tokens[word_id as usize]
    }

    /// 単語IDからコストを取得します。
    #[inline(always)]
    pub fn word_cost(&self, word_id: u32) -> f64 {
        self.costs[word_id as usize]
    }

    /// 表層形に完全一致する単語のIDを返します。
    #[inline(always)]
    pub fn word_id(&self, word: &str) -> Option<u32> {
        self.index.get(word).copied()
    }

    /// 表層形に完全一致するトークンを返します。
    pub fn get(&self, word: &str) -> Option<&Token> {
        self.word_id(word).map(|id| self.token(id))
    }

    /// 登録されているすべてのトークンのイテレータを返します。
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// `input`の接頭辞に一致するすべての単語を、短いものから順に返します。
    ///
    /// 一致する単語がない場合は何も返しません。
    ///
    /// # 例
    ///
    /// ```
    /// use fenci::Dictionary;
    ///
    /// let dict = Dictionary::from_readers([("t", "中 5\n中国 9\n国 3\n".as_bytes())])?;
    /// let input: Vec<char> = "中国人".chars().collect();
    ///
    /// let words: Vec<_> = dict
    ///     .common_prefix_iterator(&input)
    ///     .map(|m| dict.token(m.word_id).text())
    ///     .collect();
    /// assert_eq!(words, ["中", "中国"]);
    /// # Ok::<(), fenci::errors::FenciError>(())
    /// ```
    #[inline(always)]
    pub fn common_prefix_iterator<'a>(
        &'a self,
        input: &'a [char],
    ) -> impl Iterator<Item = LexMatch> + 'a {
        self.trie.iter().flat_map(move |trie| {
            trie.common_prefix_iterator(input).map(|m| LexMatch {
                word_id: m.value,
                end_char: m.end_char,
            })
        })
    }
}
