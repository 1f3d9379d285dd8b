//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

use serde::Serialize;

use crate::catalog;
use crate::error::FixtureError;
use crate::types::FixtureCase;

/// 生成するフィクスチャの組
///
/// 組み込みカタログのうち、どのケースを生成するかを指定します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum FixtureSet {
    /// すべてのフィクスチャ（デフォルト）
    ///
    /// エッジケース4件のあとにサンプルデータ1件を生成します。
    #[default]
    All,

    /// 取り込み処理のエッジケース
    ///
    /// - 列順の反転（`CODIGOBARRAS`, `IMBLOJA`）
    /// - 小文字の列名
    /// - 空行を含むデータ
    /// - 大文字小文字が混在した列名
    EdgeCases,

    /// サンプルデータ（`dados_exemplo.xlsx`）
    Example,
}

impl FixtureSet {
    /// この組に含まれるフィクスチャを、生成順に返す
    pub fn cases(self) -> Result<Vec<FixtureCase>, FixtureError> {
        match self {
            FixtureSet::All => catalog::all(),
            FixtureSet::EdgeCases => catalog::edge_cases(),
            FixtureSet::Example => Ok(vec![catalog::example()?]),
        }
    }
}
