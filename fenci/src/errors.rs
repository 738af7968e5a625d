//! エラー型の定義
//!
//! このモジュールは、fenciライブラリで使用されるすべてのエラー型を定義します。
//! エラーが発生するのは辞書の構築時のみで、分かち書き処理そのものは失敗しません。

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// fenci専用のResult型
///
/// エラー型としてデフォルトで[`FenciError`]を使用します。
pub type Result<T, E = FenciError> = std::result::Result<T, E>;

/// fenciのエラー型
///
/// 辞書ソースの読み込みと構築で発生する可能性のあるエラーを表現します。
#[derive(Debug, thiserror::Error)]
pub enum FenciError {
    /// 無効な引数エラー
    ///
    /// [`InvalidArgumentError`]のエラーバリアント。
    #[error(transparent)]
    InvalidArgument(InvalidArgumentError),

    /// 無効なフォーマットエラー
    ///
    /// [`InvalidFormatError`]のエラーバリアント。辞書ソースの行が不正な場合に発生します。
    #[error(transparent)]
    InvalidFormat(InvalidFormatError),

    /// 辞書ソースの読み込みエラー
    ///
    /// ソースを開けない、または読み込めない場合に発生します。
    #[error("Failed to read dictionary source '{}': {}", .path.display(), .error)]
    Io {
        /// 読み込みに失敗したソース
        path: PathBuf,

        /// 原因となったI/Oエラー
        #[source]
        error: std::io::Error,
    },

    /// 整数変換エラー
    ///
    /// [`TryFromIntError`](std::num::TryFromIntError)のエラーバリアント。
    #[error(transparent)]
    TryFromInt(#[from] std::num::TryFromIntError),
}

impl FenciError {
    /// 無効な引数エラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - 引数の名前
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    /// 無効なフォーマットエラーを生成します
    ///
    /// # 引数
    ///
    /// * `source` - 辞書ソースの名前
    /// * `line` - 不正な行の番号（1始まり）
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_format<N, S>(source: N, line: usize, msg: S) -> Self
    where
        N: Into<String>,
        S: Into<String>,
    {
        Self::InvalidFormat(InvalidFormatError {
            source: source.into(),
            line,
            msg: msg.into(),
        })
    }

    pub(crate) fn io<P>(path: P, error: std::io::Error) -> Self
    where
        P: Into<PathBuf>,
    {
        Self::Io {
            path: path.into(),
            error,
        }
    }
}

/// 引数が無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// 引数の名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// 辞書ソースのフォーマットが無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidFormatError {
    /// 辞書ソースの名前
    pub(crate) source: String,

    /// 不正な行の番号（1始まり）
    pub(crate) line: usize,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl InvalidFormatError {
    /// 不正な行を含む辞書ソースの名前を返します。
    pub fn source_name(&self) -> &str {
        &self.source
    }

    /// 不正な行の番号（1始まり）を返します。
    pub const fn line(&self) -> usize {
        self.line
    }
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "InvalidFormatError: {}:{}: {}",
            self.source, self.line, self.msg
        )
    }
}

impl Error for InvalidFormatError {}
