//! 辞書エントリ
//!
//! このモジュールは、辞書に登録された単語を表す [`Token`] を提供します。

/// 辞書に登録された単語
///
/// 表層形、全ソースで合算された頻度、および品詞タグを保持します。
/// タグは不透明な文字列として扱われ、空の場合もあります。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    text: String,
    frequency: u64,
    tag: String,
}

impl Token {
    /// 新しいトークンを作成します。
    ///
    /// # 引数
    ///
    /// * `text` - 表層形
    /// * `frequency` - 頻度
    /// * `tag` - 品詞タグ（空でもよい）
    pub fn new<T, G>(text: T, frequency: u64, tag: G) -> Self
    where
        T: Into<String>,
        G: Into<String>,
    {
        Self {
            text: text.into(),
            frequency,
            tag: tag.into(),
        }
    }

    /// 辞書にない文字列に対する合成トークンを作成します。
    #[inline(always)]
    pub(crate) fn unknown<T>(text: T) -> Self
    where
        T: Into<String>,
    {
        Self::new(text, 0, String::new())
    }

    /// 表層形を取得します。
    #[inline(always)]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 頻度を取得します。
    #[inline(always)]
    pub const fn frequency(&self) -> u64 {
        self.frequency
    }

    /// 品詞タグを取得します。タグがない場合は空文字列を返します。
    #[inline(always)]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// 複数のソースに現れた同じ単語を併合します。
    ///
    /// 頻度は合算されます。タグは最初に現れた空でないものが優先され、
    /// 後から現れたタグで上書きされることはありません。
    pub(crate) fn merge(&mut self, frequency: u64, tag: &str) {
        self.frequency = self.frequency.saturating_add(frequency);
        if self.tag.is_empty() {
            self.tag.push_str(tag);
        } else if !tag.is_empty() && self.tag != tag {
            log::debug!(
                "Keeping tag {:?} for {:?}; ignoring {:?}",
                self.tag,
                self.text,
                tag
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_sums_frequency() {
        let mut t = Token::new("人口", 6, "");
        t.merge(4, "");
        assert_eq!(t.frequency(), 10);
        assert_eq!(t.tag(), "");
    }

    #[test]
    fn test_merge_first_tag_wins() {
        let mut t = Token::new("有", 8, "p3");
        t.merge(2, "p4");
        assert_eq!(t.frequency(), 10);
        assert_eq!(t.tag(), "p3");
    }

    #[test]
    fn test_merge_fills_empty_tag() {
        let mut t = Token::new("中国", 20, "");
        t.merge(10, "ns");
        t.merge(1, "n");
        assert_eq!(t.tag(), "ns");
    }
}
