//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use std::path::PathBuf;

use rust_xlsxwriter::XlsxError;
use thiserror::Error;

/// xlsxfixtureクレート全体で使用するエラー型
///
/// フィクスチャの構築、ワークブックの生成、ファイルへの書き込み中に発生する
/// すべてのエラーを統一的に扱うために使用されます。
///
/// # エラーの種類
///
/// - `Io`: 出力ディレクトリの作成など、ファイルシステム操作中のエラー
/// - `Write`: ワークブックをパスへ保存する際のエラー
/// - `Xlsx`: メモリ上でワークブックを構築する際のエラー（rust_xlsxwriter由来）
/// - `Config`: 設定やフィクスチャ定義の検証に失敗したエラー
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxfixture::{catalog, FixtureError, GeneratorBuilder};
///
/// fn write_all() -> Result<(), FixtureError> {
///     let generator = GeneratorBuilder::new().build()?;
///     generator.generate_all(&catalog::all()?)?;
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum FixtureError {
    /// I/O操作中に発生したエラー
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ワークブックのファイル保存に失敗したエラー
    ///
    /// 権限不足、無効なパス、ディスク容量不足などが原因となります。
    #[error("Failed to write workbook '{}': {source}", path.display())]
    Write {
        /// 書き込み先のパス
        path: PathBuf,
        /// rust_xlsxwriterが返した元のエラー
        #[source]
        source: XlsxError,
    },

    /// ワークブックの構築中に発生したエラー
    ///
    /// 無効なシート名、行・列の上限超過など。
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] XlsxError),

    /// 設定の検証に失敗したエラー
    ///
    /// 空のファイル名、拡張子が`.xlsx`でないファイル名、同一バッチ内での
    /// ファイル名の重複などで発生します。
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FixtureError {
    /// 根本原因がI/Oエラーであれば、その種類を返す
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            FixtureError::Io(e) => Some(e.kind()),
            FixtureError::Write {
                source: XlsxError::IoError(e),
                ..
            } => Some(e.kind()),
            FixtureError::Xlsx(XlsxError::IoError(e)) => Some(e.kind()),
            _ => None,
        }
    }
}
