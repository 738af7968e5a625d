//! 辞書構築のためのビルダー
//!
//! このモジュールは、単語リスト形式の辞書ソースから [`Dictionary`] を構築するための
//! ビルダーを提供します。
//!
//! # ソースの形式
//!
//! 各行は空白で区切られた `単語 頻度 [タグ]` です。
//!
//! ```text
//! 中国 30 ns
//! 人口 6 n
//! 十三亿 6
//! ```
//!
//! 空行は読み飛ばされます。コメント行の構文はなく、`#` で始まる行も単語として読み込まれます。
//! 頻度は非負整数でなければならず、各行は UTF-8 でなければなりません。

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use hashbrown::HashMap;

use crate::dictionary::{Dictionary, Token};
use crate::errors::{FenciError, Result};

/// 複数の辞書ソースを併合して [`Dictionary`] を構築するビルダー
///
/// 同じ単語が複数回現れた場合、頻度は合算され、タグは最初に現れた空でないものが
/// 採用されます。いずれかのソースの読み込みに失敗した場合、ビルダーは破棄され、
/// それまでに併合した内容も失われます。
///
/// # 例
///
/// ```
/// use fenci::dictionary::DictionaryBuilder;
///
/// let dict = DictionaryBuilder::new()
///     .add_reader("a.txt", "中国 20\n人口 6 n\n".as_bytes())?
///     .add_reader("b.txt", "中国 10 ns\n".as_bytes())?
///     .build()?;
///
/// assert_eq!(dict.num_tokens(), 2);
/// assert_eq!(dict.get("中国").unwrap().frequency(), 30);
/// assert_eq!(dict.get("中国").unwrap().tag(), "ns");
/// # Ok::<(), fenci::errors::FenciError>(())
/// ```
#[derive(Default)]
pub struct DictionaryBuilder {
    tokens: Vec<Token>,
    index: HashMap<String, usize>,
    min_frequency: u64,
    num_sources: usize,
}

impl DictionaryBuilder {
    /// 空のビルダーを作成します。
    pub fn new() -> Self {
        Self::default()
    }

    /// 構築時に残す単語の最小頻度を指定します。
    ///
    /// すべてのソースを併合した後の頻度がこの値未満の単語は、[`build()`](Self::build)
    /// で取り除かれます。デフォルトは`0`で、すべての単語を残します。
    pub const fn min_frequency(mut self, min_frequency: u64) -> Self {
        self.min_frequency = min_frequency;
        self
    }

    /// ファイルから辞書ソースを読み込みます。
    ///
    /// # エラー
    ///
    /// ファイルを読み込めない場合、または不正な行を含む場合に [`FenciError`] を返します。
    pub fn add_path<P>(self, path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| FenciError::io(path, e))?;
        let name = path.display().to_string();
        self.add_reader(name, file)
    }

    /// リーダーから辞書ソースを読み込みます。
    ///
    /// # 引数
    ///
    /// * `name` - エラーメッセージに使用するソース名
    /// * `rdr` - 辞書ソースのリーダー
    ///
    /// # エラー
    ///
    /// 読み込みに失敗した場合、または不正な行を含む場合に [`FenciError`] を返します。
    pub fn add_reader<N, R>(mut self, name: N, rdr: R) -> Result<Self>
    where
        N: Into<String>,
        R: Read,
    {
        let name = name.into();
        let mut rdr = BufReader::new(rdr);
        let mut buf = Vec::new();
        let mut lineno = 0;
        loop {
            buf.clear();
            let len = rdr
                .read_until(b'\n', &mut buf)
                .map_err(|e| FenciError::io(&name, e))?;
            if len == 0 {
                break;
            }
            lineno += 1;
            let line = std::str::from_utf8(&buf).map_err(|e| {
                FenciError::invalid_format(&name, lineno, format!("invalid UTF-8: {e}"))
            })?;
            // Some word lists are saved with a byte order mark.
            let line = if lineno == 1 {
                line.trim_start_matches('\u{feff}')
            } else {
                line
            };
            if let Some((word, frequency, tag)) = parse_entry(line, &name, lineno)? {
                self.merge(word, frequency, tag);
            }
        }
        self.num_sources += 1;
        log::debug!(
            "Read {} lines from {}; {} distinct words so far",
            lineno,
            name,
            self.tokens.len()
        );
        Ok(self)
    }

    /// 単語を1つ追加します。
    ///
    /// # エラー
    ///
    /// `text` が空の場合に [`FenciError`] を返します。
    pub fn add_word<T, G>(mut self, text: T, frequency: u64, tag: G) -> Result<Self>
    where
        T: AsRef<str>,
        G: AsRef<str>,
    {
        let text = text.as_ref();
        if text.is_empty() {
            return Err(FenciError::invalid_argument(
                "text",
                "a dictionary word must not be empty",
            ));
        }
        self.merge(text, frequency, tag.as_ref());
        Ok(self)
    }

    /// これまでに併合した単語の種類数を返します。
    pub fn num_tokens(&self) -> usize {
        self.tokens.len()
    }

    /// 併合した単語から [`Dictionary`] を構築します。
    ///
    /// # エラー
    ///
    /// 頻度の合計が`u64`に収まらない場合、または単語数が多すぎる場合に
    /// [`FenciError`] を返します。
    pub fn build(self) -> Result<Dictionary> {
        let min_frequency = self.min_frequency;
        let num_merged = self.tokens.len();
        let tokens: Vec<Token> = self
            .tokens
            .into_iter()
            .filter(|t| t.frequency() >= min_frequency)
            .collect();
        if tokens.len() != num_merged {
            log::debug!(
                "Dropped {} words below frequency {}",
                num_merged - tokens.len(),
                min_frequency
            );
        }
        let dict = Dictionary::from_tokens(tokens)?;
        log::info!(
            "Built a dictionary of {} words from {} sources (total frequency {})",
            dict.num_tokens(),
            self.num_sources,
            dict.total_frequency()
        );
        Ok(dict)
    }

    fn merge(&mut self, word: &str, frequency: u64, tag: &str) {
        // Latin words are matched case-insensitively.
        let word = word.to_lowercase();
        match self.index.get(&word) {
            Some(&i) => self.tokens[i].merge(frequency, tag),
            None => {
                self.index.insert(word.clone(), self.tokens.len());
                self.tokens.push(Token::new(word, frequency, tag));
            }
        }
    }
}

/// 辞書ソースの1行をパースします。
///
/// 空行の場合は`None`を返します。
fn parse_entry<'a>(
    line: &'a str,
    source: &str,
    lineno: usize,
) -> Result<Option<(&'a str, u64, &'a str)>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let mut fields = line.split_whitespace();
    let Some(word) = fields.next() else {
        return Ok(None);
    };
    let frequency = fields.next().ok_or_else(|| {
        FenciError::invalid_format(source, lineno, format!("frequency is missing: {line:?}"))
    })?;
    let frequency = frequency.parse::<u64>().map_err(|e| {
        FenciError::invalid_format(
            source,
            lineno,
            format!("frequency must be a non-negative integer, got {frequency:?}: {e}"),
        )
    })?;
    let tag = fields.next().unwrap_or("");
    if fields.next().is_some() {
        return Err(FenciError::invalid_format(
            source,
            lineno,
            format!("a line must have three fields at most: {line:?}"),
        ));
    }
    Ok(Some((word, frequency, tag)))
}
