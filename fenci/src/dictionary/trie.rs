//! トライ構造による高速な接頭辞検索
//!
//! このモジュールは、ダブル配列トライを使用して、入力文字列のある位置から
//! 始まる辞書語をすべて列挙する機能を提供します。

use crate::errors::{FenciError, Result};

/// ダブル配列トライ
pub struct Trie {
    da: crawdad::Trie,
}

impl Trie {
    /// レコードからトライを構築します。
    ///
    /// レコードのキーは重複がなく、辞書順に整列されている必要があります。
    pub fn from_records<K>(records: &[(K, u32)]) -> Result<Self>
    where
        K: AsRef<str>,
    {
        Ok(Self {
            da: crawdad::Trie::from_records(records.iter().map(|(k, v)| (k, *v)))
                .map_err(|e| FenciError::invalid_argument("records", e.to_string()))?,
        })
    }

    /// `input`の接頭辞に一致するすべてのキーを、短いものから順に返します。
    #[inline(always)]
    pub fn common_prefix_iterator<'a>(
        &'a self,
        input: &'a [char],
    ) -> impl Iterator<Item = TrieMatch> + 'a {
        self.da
            .common_prefix_search(input.iter().cloned())
            .map(move |(value, end_char)| TrieMatch::new(value, end_char))
    }
}

/// トライマッチング結果
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct TrieMatch {
    pub value: u32,
    pub end_char: usize,
}

impl TrieMatch {
    /// 新しいマッチング結果を作成します。
    #[inline(always)]
    pub const fn new(value: u32, end_char: usize) -> Self {
        Self { value, end_char }
    }
}
