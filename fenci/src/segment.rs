//! 分かち書きの結果を表す型と、その出力のためのヘルパー関数。
use std::borrow::Cow;
use std::ops::Range;

use crate::dictionary::Token;

/// トークンの由来
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LexType {
    /// 辞書に登録された単語
    #[default]
    System,
    /// 辞書にない文字列から合成された単語
    Unknown,
}

/// 分かち書きされた1つの語。
///
/// 入力文字列中の位置（バイト単位、半開区間）と、対応する辞書のトークンを保持します。
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<'a> {
    start: usize,
    end: usize,
    surface: &'a str,
    token: Cow<'a, Token>,
    lex_type: LexType,
    depth: usize,
}

impl<'a> Segment<'a> {
    pub(crate) fn new(
        input: &'a str,
        range_byte: Range<usize>,
        token: Cow<'a, Token>,
        lex_type: LexType,
        depth: usize,
    ) -> Self {
        Self {
            start: range_byte.start,
            end: range_byte.end,
            surface: &input[range_byte],
            token,
            lex_type,
            depth,
        }
    }

    /// 開始位置（バイト単位）を返します。
    #[inline(always)]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// 終了位置（バイト単位）を返します。
    #[inline(always)]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// 入力文字列中のバイト範囲を返します。
    #[inline(always)]
    pub const fn range_byte(&self) -> Range<usize> {
        self.start..self.end
    }

    /// 入力文字列中の表層形を返します。大文字・小文字は入力のままです。
    #[inline(always)]
    pub const fn surface(&self) -> &'a str {
        self.surface
    }

    /// 対応するトークンを返します。
    #[inline(always)]
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// トークンの表層形を返します。英字は小文字に正規化されています。
    #[inline(always)]
    pub fn text(&self) -> &str {
        self.token.text()
    }

    /// 品詞タグを返します。タグがない場合は空文字列を返します。
    #[inline(always)]
    pub fn tag(&self) -> &str {
        self.token.tag()
    }

    /// 辞書における頻度を返します。辞書にない語は`0`です。
    #[inline(always)]
    pub fn frequency(&self) -> u64 {
        self.token.frequency()
    }

    /// トークンの由来を返します。
    #[inline(always)]
    pub const fn lex_type(&self) -> LexType {
        self.lex_type
    }

    /// 検索モードでの入れ子の深さを返します。
    ///
    /// 通常の分割結果に含まれる語は`0`、その部分語は`1`以上です。
    #[inline(always)]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// 辞書にない語かどうかを判定します。
    #[inline(always)]
    pub fn is_unknown(&self) -> bool {
        self.lex_type == LexType::Unknown
    }
}

/// 分かち書きの結果を`単語/タグ`の形式で空白区切りの文字列に変換します。
///
/// タグが空の場合、または`surface_only`が`true`の場合は`単語/`と出力します。
///
/// # 例
///
/// ```
/// use fenci::{Dictionary, Mode, Segmenter};
/// use fenci::segment::segments_to_string;
///
/// let dict = Dictionary::from_readers([("t", "中国 5 ns\n人口 3 n\n".as_bytes())])?;
/// let segmenter = Segmenter::new(dict);
/// let segments = segmenter.segment("中国人口", Mode::Normal);
///
/// assert_eq!(segments_to_string(&segments, false), "中国/ns 人口/n");
/// assert_eq!(segments_to_string(&segments, true), "中国/ 人口/");
/// # Ok::<(), fenci::errors::FenciError>(())
/// ```
pub fn segments_to_string(segments: &[Segment], surface_only: bool) -> String {
    let mut out = String::new();
    for (i, seg) in segments.iter().enumerate() {
        if i != 0 {
            out.push(' ');
        }
        out.push_str(seg.text());
        out.push('/');
        if !surface_only {
            out.push_str(seg.tag());
        }
    }
    out
}

/// 分かち書きの結果からトークンの表層形だけを取り出します。
pub fn segments_to_words<'s>(segments: &'s [Segment]) -> Vec<&'s str> {
    segments.iter().map(|seg| seg.text()).collect()
}
