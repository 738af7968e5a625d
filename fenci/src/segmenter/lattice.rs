//! ラティス（単語グラフ）構造の実装モジュール。
//!
//! 文字位置をノード、単語を辺とする有向非巡回グラフ上で、
//! 先頭から各位置までの最小コストと、その最小コストを与える辺を保持します。
//! 辺はすべて前方に向かうため、位置の昇順に緩和するだけで最短経路が求まります。

/// ラティス内の辺。
///
/// `start`から`end`（文字単位、半開区間）を覆う1つの単語を表します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// 単語の開始位置（文字単位）。
    pub start: usize,
    /// 単語の終了位置（文字単位）。
    pub end: usize,
    /// 辞書の単語ID。辞書にない1文字の場合は`None`。
    pub word_id: Option<u32>,
}

impl Edge {
    /// 辺が覆う文字数を返します。
    #[inline(always)]
    pub const fn len_char(&self) -> usize {
        self.end - self.start
    }
}

/// 最短経路探索用のラティス。
///
/// グラフの辺そのものは保持せず、各位置への最小コストとその直前の辺だけを保持します。
#[derive(Default)]
pub struct Lattice {
    dist: Vec<f64>,
    back: Vec<Option<Edge>>,
}

impl Lattice {
    /// ラティスをリセットし、新しい文字列の処理を準備します。
    ///
    /// # 引数
    ///
    /// * `len_char` - 文字数
    pub fn reset(&mut self, len_char: usize) {
        self.dist.clear();
        self.dist.resize(len_char + 1, f64::INFINITY);
        self.dist[0] = 0.0;
        self.back.clear();
        self.back.resize(len_char + 1, None);
    }

    /// 設定された文字数を返します。
    #[inline(always)]
    pub fn len_char(&self) -> usize {
        self.dist.len().saturating_sub(1)
    }

    /// 位置`i`が先頭から到達可能かどうかを判定します。
    #[inline(always)]
    pub fn is_reachable(&self, i: usize) -> bool {
        self.dist[i].is_finite()
    }

    /// 先頭から位置`i`までの最小コストを返します。
    #[inline(always)]
    pub fn cost(&self, i: usize) -> f64 {
        self.dist[i]
    }

    /// 辺を1本追加し、終了位置の最小コストを更新します。
    ///
    /// コストが厳密に小さい場合のみ更新するため、同じコストの経路が複数ある場合は
    /// 先に追加された辺が残ります。
    ///
    /// # 引数
    ///
    /// * `start` - 単語の開始位置
    /// * `end` - 単語の終了位置
    /// * `word_id` - 単語ID
    /// * `cost` - 単語のコスト
    #[inline(always)]
    pub fn relax(&mut self, start: usize, end: usize, word_id: Option<u32>, cost: f64) {
        debug_assert!(start < end);
        let new_cost = self.dist[start] + cost;
        if new_cost < self.dist[end] {
            self.dist[end] = new_cost;
            self.back[end] = Some(Edge {
                start,
                end,
                word_id,
            });
        }
    }

    /// 最良経路の辺を先頭から順にベクトルに追加します。
    ///
    /// 末尾から直前の辺をたどって経路を復元します。
    ///
    /// # 引数
    ///
    /// * `path` - 辺を追加するベクトル
    pub fn append_best_path(&self, path: &mut Vec<Edge>) {
        let offset = path.len();
        let mut end = self.len_char();
        while end != 0 {
            // Every position is reachable once each offset has an outgoing edge.
            let Some(edge) = self.back[end] else {
                break;
            };
            path.push(edge);
            end = edge.start;
        }
        path[offset..].reverse();
    }
}
