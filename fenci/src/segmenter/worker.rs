//! 分かち書き処理のためのルーチンを提供するモジュール。
//!
//! ワーカーは内部データ構造を保持し、再利用することで不要なメモリアロケーションを避けます。
use std::borrow::Cow;

use crate::character::RunClass;
use crate::dictionary::{Dictionary, Token};
use crate::segment::{LexType, Segment};
use crate::segmenter::lattice::{Edge, Lattice};
use crate::segmenter::{Mode, Segmenter};
use crate::sentence::{Run, Sentence};

/// 分かち書き処理のためのルーチンを提供する構造体。
///
/// 入力文の内部表現とラティスを保持し、それらを再利用することで
/// 不要なメモリ再割り当てを回避します。ワーカーはスレッド間で共有できないため、
/// スレッドごとに [`Segmenter::new_worker`] で作成してください。
///
/// # 例
///
/// ```
/// use fenci::{Dictionary, Mode, Segmenter};
///
/// let segmenter = Segmenter::new(Dictionary::bundled()?);
/// let mut worker = segmenter.new_worker();
///
/// for line in ["中国人口", "中央人民政府"] {
///     let segments = worker.segment(line, Mode::Normal);
///     assert_eq!(segments.last().map(|s| s.end()), Some(line.len()));
/// }
/// # Ok::<(), fenci::errors::FenciError>(())
/// ```
pub struct Worker<'s> {
    segmenter: &'s Segmenter,
    sent: Sentence,
    lattice: Lattice,
    path: Vec<Edge>,
}

impl<'s> Worker<'s> {
    pub(crate) fn new(segmenter: &'s Segmenter) -> Self {
        Self {
            segmenter,
            sent: Sentence::new(),
            lattice: Lattice::default(),
            path: vec![],
        }
    }

    /// 入力文を分かち書きします。
    ///
    /// [`Segmenter::segment`] と同じ結果を返します。
    pub fn segment<'a>(&mut self, input: &'a str, mode: Mode) -> Vec<Segment<'a>>
    where
        's: 'a,
    {
        let mut segments = vec![];
        self.segment_into(input, mode, &mut segments);
        segments
    }

    /// 入力文を分かち書きし、結果をベクトルの末尾に追加します。
    ///
    /// # 引数
    ///
    /// * `input` - 入力文
    /// * `mode` - 分かち書きのモード
    /// * `segments` - 結果を追加するベクトル
    pub fn segment_into<'a>(&mut self, input: &'a str, mode: Mode, segments: &mut Vec<Segment<'a>>)
    where
        's: 'a,
    {
        self.sent.compile(input);
        for i in 0..self.sent.runs().len() {
            let run = self.sent.runs()[i].clone();
            match run.class {
                RunClass::Cjk => self.segment_cjk(input, &run, mode, segments),
                RunClass::Word | RunClass::Other => self.push_run(input, &run, segments),
            }
        }
    }

    /// 英数字・記号のランを1語として追加します。
    fn push_run<'a>(&self, input: &'a str, run: &Run, segments: &mut Vec<Segment<'a>>)
    where
        's: 'a,
    {
        let dict: &'s Dictionary = self.segmenter.dictionary();
        let range_byte =
            self.sent.byte_position(run.range_char.start)..self.sent.byte_position(run.range_char.end);
        let surface = &input[range_byte.clone()];
        let text = match run.class {
            RunClass::Word => Cow::Owned(surface.to_lowercase()),
            _ => Cow::Borrowed(surface),
        };
        let (token, lex_type) = match dict.get(&text) {
            Some(token) => (Cow::Borrowed(token), LexType::System),
            None => (Cow::Owned(Token::unknown(text)), LexType::Unknown),
        };
        segments.push(Segment::new(input, range_byte, token, lex_type, 0));
    }

    /// 漢字・かな・ハングルのランを最良経路に沿って分割します。
    fn segment_cjk<'a>(
        &mut self,
        input: &'a str,
        run: &Run,
        mode: Mode,
        segments: &mut Vec<Segment<'a>>,
    ) where
        's: 'a,
    {
        let segmenter = self.segmenter;
        let chars = &self.sent.chars()[run.range_char.clone()];
        segmenter.build_lattice(chars, &mut self.lattice, false);
        self.path.clear();
        self.lattice.append_best_path(&mut self.path);
        log::trace!(
            "Segmented a run of {} chars into {} words (cost {:.3})",
            chars.len(),
            self.path.len(),
            self.lattice.cost(chars.len())
        );

        let path = std::mem::take(&mut self.path);
        let base = run.range_char.start;
        for &edge in &path {
            if mode == Mode::Search {
                self.expand(input, base, edge, 1, segments);
            }
            self.push_edge(input, base, edge, 0, segments);
        }
        self.path = path;
    }

    /// 単語に含まれる部分語を再帰的に追加します。
    ///
    /// 単語を除いた最良の分割に2文字以上の語が含まれる場合のみ、その分割を採用します。
    /// 部分語はそれ自身の部分語の後に追加されます。
    fn expand<'a>(
        &mut self,
        input: &'a str,
        base: usize,
        edge: Edge,
        depth: usize,
        segments: &mut Vec<Segment<'a>>,
    ) where
        's: 'a,
    {
        if edge.len_char() < self.segmenter.expand_threshold() {
            return;
        }
        let segmenter = self.segmenter;
        let start = base + edge.start;
        let chars = &self.sent.chars()[start..base + edge.end];
        segmenter.build_lattice(chars, &mut self.lattice, true);
        let mut sub_path = vec![];
        self.lattice.append_best_path(&mut sub_path);
        if sub_path.iter().all(|e| e.len_char() < 2) {
            return;
        }
        for sub in sub_path {
            self.expand(input, start, sub, depth + 1, segments);
            self.push_edge(input, start, sub, depth, segments);
        }
    }

    fn push_edge<'a>(
        &self,
        input: &'a str,
        base: usize,
        edge: Edge,
        depth: usize,
        segments: &mut Vec<Segment<'a>>,
    ) where
        's: 'a,
    {
        let dict: &'s Dictionary = self.segmenter.dictionary();
        let range_byte =
            self.sent.byte_position(base + edge.start)..self.sent.byte_position(base + edge.end);
        let (token, lex_type) = match edge.word_id {
            Some(word_id) => (Cow::Borrowed(dict.token(word_id)), LexType::System),
            None => (
                Cow::Owned(Token::unknown(&input[range_byte.clone()])),
                LexType::Unknown,
            ),
        };
        segments.push(Segment::new(input, range_byte, token, lex_type, depth));
    }
}
