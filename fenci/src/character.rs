//! 文字種の判定
//!
//! このモジュールは、各文字の文字種と、その文字が属するランの種類を判定します。
//! 漢字・かな・ハングルは辞書による分割の対象となり、ラテン文字や数字は
//! 連続する部分がまとめて1語になり、それ以外の文字は1文字ずつ独立した語になります。

/// 文字種
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    /// CJK統合漢字（拡張領域と互換漢字を含む）
    Han,
    /// ひらがな・カタカナ
    Kana,
    /// ハングル
    Hangul,
    /// その他の文字（ラテン文字、キリル文字など）
    Alpha,
    /// 数字
    Numeric,
    /// 空白文字
    Space,
    /// 記号・句読点・その他
    Symbol,
}

/// ランの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunClass {
    /// 辞書による分割の対象となる漢字・かな・ハングルの連続
    Cjk,
    /// 英数字の連続。全体で1語になります。
    Word,
    /// 空白・記号。1文字で1語になります。
    Other,
}

impl CharType {
    /// 文字の文字種を判定します。
    pub fn of(c: char) -> Self {
        if is_han(c) {
            Self::Han
        } else if is_kana(c) {
            Self::Kana
        } else if is_hangul(c) {
            Self::Hangul
        } else if c.is_alphabetic() {
            Self::Alpha
        } else if c.is_numeric() {
            Self::Numeric
        } else if c.is_whitespace() {
            Self::Space
        } else {
            Self::Symbol
        }
    }

    /// この文字種が属するランの種類を返します。
    #[inline(always)]
    pub const fn run_class(self) -> RunClass {
        match self {
            Self::Han | Self::Kana | Self::Hangul => RunClass::Cjk,
            Self::Alpha | Self::Numeric => RunClass::Word,
            Self::Space | Self::Symbol => RunClass::Other,
        }
    }
}

impl RunClass {
    /// 文字が属するランの種類を判定します。
    #[inline(always)]
    pub fn of(c: char) -> Self {
        CharType::of(c).run_class()
    }

    /// 同じ種類の隣接する文字を1つのランにまとめるかどうか。
    #[inline(always)]
    pub const fn is_groupable(self) -> bool {
        !matches!(self, Self::Other)
    }
}

fn is_han(c: char) -> bool {
    matches!(c,
        '\u{3005}'                  // 々
        | '\u{3007}'                // 〇
        | '\u{3400}'..='\u{4DBF}'   // Extension A
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{F900}'..='\u{FAFF}'   // Compatibility Ideographs
        | '\u{20000}'..='\u{2A6DF}' // Extension B
        | '\u{2A700}'..='\u{2EBEF}' // Extension C-F
        | '\u{2F800}'..='\u{2FA1F}' // Compatibility Supplement
        | '\u{30000}'..='\u{3134F}' // Extension G
    )
}

fn is_kana(c: char) -> bool {
    matches!(c,
        '\u{3041}'..='\u{3096}'     // Hiragana
        | '\u{309D}'..='\u{309F}'
        | '\u{30A1}'..='\u{30FA}'   // Katakana
        | '\u{30FC}'..='\u{30FF}'
        | '\u{31F0}'..='\u{31FF}'   // Katakana Phonetic Extensions
        | '\u{FF66}'..='\u{FF9F}'   // Halfwidth Katakana
    )
}

fn is_hangul(c: char) -> bool {
    matches!(c,
        '\u{1100}'..='\u{11FF}'     // Jamo
        | '\u{3131}'..='\u{318E}'   // Compatibility Jamo
        | '\u{A960}'..='\u{A97F}'
        | '\u{AC00}'..='\u{D7A3}'   // Syllables
        | '\u{D7B0}'..='\u{D7FF}'
        | '\u{FFA0}'..='\u{FFDC}'   // Halfwidth Jamo
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_type() {
        assert_eq!(CharType::of('中'), CharType::Han);
        assert_eq!(CharType::of('〇'), CharType::Han);
        assert_eq!(CharType::of('こ'), CharType::Kana);
        assert_eq!(CharType::of('ー'), CharType::Kana);
        assert_eq!(CharType::of('ｶ'), CharType::Kana);
        assert_eq!(CharType::of('안'), CharType::Hangul);
        assert_eq!(CharType::of('a'), CharType::Alpha);
        assert_eq!(CharType::of('é'), CharType::Alpha);
        assert_eq!(CharType::of('Я'), CharType::Alpha);
        assert_eq!(CharType::of('7'), CharType::Numeric);
        assert_eq!(CharType::of('７'), CharType::Numeric);
        assert_eq!(CharType::of(' '), CharType::Space);
        assert_eq!(CharType::of('\u{3000}'), CharType::Space);
        assert_eq!(CharType::of('，'), CharType::Symbol);
        assert_eq!(CharType::of('。'), CharType::Symbol);
        assert_eq!(CharType::of('・'), CharType::Symbol);
        assert_eq!(CharType::of('¿'), CharType::Symbol);
    }

    #[test]
    fn test_run_class() {
        assert_eq!(RunClass::of('亿'), RunClass::Cjk);
        assert_eq!(RunClass::of('ひ'), RunClass::Cjk);
        assert_eq!(RunClass::of('요'), RunClass::Cjk);
        assert_eq!(RunClass::of('x'), RunClass::Word);
        assert_eq!(RunClass::of('3'), RunClass::Word);
        assert_eq!(RunClass::of('-'), RunClass::Other);
        assert!(RunClass::Cjk.is_groupable());
        assert!(!RunClass::Other.is_groupable());
    }
}
