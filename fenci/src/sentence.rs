//! 入力テキストの内部表現を提供するモジュール
//!
//! このモジュールは、分かち書きのために入力テキストを文字単位に分割し、
//! 文字位置からバイト位置へのマッピングと、同じ種類の文字が連続する
//! ラン（チャンク）への分割を計算・保持します。

use std::ops::Range;

use crate::character::RunClass;

/// 同じ種類の文字の連続
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// ランの文字位置の範囲
    pub range_char: Range<usize>,

    /// ランの種類
    pub class: RunClass,
}

/// 入力テキストの内部表現を保持する構造体
///
/// # フィールド
///
/// * `chars` - 入力文字列を文字単位に分割した配列
/// * `c2b` - 文字位置からバイト位置へのマッピング配列
/// * `runs` - 入力全体を隙間なく覆うランの列
#[derive(Default, Clone, Debug)]
pub struct Sentence {
    chars: Vec<char>,
    c2b: Vec<usize>,
    runs: Vec<Run>,
}

impl Sentence {
    /// 新しい空の `Sentence` インスタンスを生成します
    pub fn new() -> Self {
        Self::default()
    }

    /// 内部状態をクリアします
    #[inline(always)]
    pub fn clear(&mut self) {
        self.chars.clear();
        self.c2b.clear();
        self.runs.clear();
    }

    /// 入力文字列を解析し、内部データ構造を構築します
    ///
    /// 以前の内容は破棄されます。
    pub fn compile(&mut self, input: &str) {
        self.clear();
        self.compute_basic(input);
        self.compute_runs();
    }

    fn compute_basic(&mut self, input: &str) {
        for (bi, ch) in input.char_indices() {
            self.chars.push(ch);
            self.c2b.push(bi);
        }
        self.c2b.push(input.len());
    }

    /// 隣接する文字が同じ種類であれば1つのランにまとめます。
    ///
    /// 空白・記号のランは常に1文字です。
    fn compute_runs(&mut self) {
        let mut start = 0;
        while start < self.chars.len() {
            let class = RunClass::of(self.chars[start]);
            let mut end = start + 1;
            if class.is_groupable() {
                while end < self.chars.len() && RunClass::of(self.chars[end]) == class {
                    end += 1;
                }
            }
            self.runs.push(Run {
                range_char: start..end,
                class,
            });
            start = end;
        }
    }

    /// 文字配列への参照を返します
    #[inline(always)]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// 文字数を返します
    #[inline(always)]
    pub fn len_char(&self) -> usize {
        self.chars.len()
    }

    /// 指定された文字位置に対応するバイト位置を返します
    ///
    /// `pos_char` には文字数と等しい値（終端）も指定できます。
    #[inline(always)]
    pub fn byte_position(&self, pos_char: usize) -> usize {
        self.c2b[pos_char]
    }

    /// ランの列を返します
    #[inline(always)]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }
}

/// 入力テキストをランに分割し、各ランのバイト範囲と種類を返します。
///
/// 英数字のランは小文字に変換されます。
///
/// # 例
///
/// ```
/// use fenci::sentence::split_runs;
///
/// let words: Vec<String> = split_runs("Wie geht es Ihnen")
///     .into_iter()
///     .map(|(_, _, text)| text)
///     .collect();
/// assert_eq!(words, ["wie", " ", "geht", " ", "es", " ", "ihnen"]);
/// ```
pub fn split_runs(input: &str) -> Vec<(Range<usize>, RunClass, String)> {
    let mut sent = Sentence::new();
    sent.compile(input);
    sent.runs()
        .iter()
        .map(|run| {
            let range_byte =
                sent.byte_position(run.range_char.start)..sent.byte_position(run.range_char.end);
            let text = match run.class {
                RunClass::Word => input[range_byte.clone()].to_lowercase(),
                _ => input[range_byte.clone()].to_string(),
            };
            (range_byte, run.class, text)
        })
        .collect()
}
