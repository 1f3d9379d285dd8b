//! Fixture Data Types
//!
//! ワークブック1つ分のフィクスチャ定義（`FixtureCase`）と、その構築用ビルダーを定義するモジュール。

use serde::Serialize;

use crate::error::FixtureError;

/// シート名のデフォルト値
pub const DEFAULT_SHEET_NAME: &str = "Dados";

/// 1行分のセル値（左から順に）
pub type Row = Vec<String>;

/// 1つの生成対象ワークブックを表すフィクスチャ定義
///
/// 行の順序、および各行内のセルの順序はそのまま出力されます。
/// 空文字列のセルも省略されずに空セルとして出力されます。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureCase {
    file_name: String,
    sheet_name: String,
    description: String,
    rows: Vec<Row>,
}

impl FixtureCase {
    /// 指定したファイル名でビルダーを生成する
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use xlsxfixture::FixtureCase;
    ///
    /// # fn main() -> Result<(), xlsxfixture::FixtureError> {
    /// let case = FixtureCase::builder("teste.xlsx")
    ///     .with_row(["IMBLOJA", "CODIGOBARRAS"])
    ///     .with_row(["0001002154", "7896050201756"])
    ///     .build()?;
    ///
    /// assert_eq!(case.sheet_name(), "Dados");
    /// assert_eq!(case.data_row_count(), 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder(file_name: impl Into<String>) -> FixtureCaseBuilder {
        FixtureCaseBuilder::new(file_name)
    }

    /// 出力ファイル名
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// シート名
    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    /// 進捗表示用の説明
    pub fn description(&self) -> &str {
        &self.description
    }

    /// 書き込む行（先頭行はヘッダー）
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// 先頭行（慣例上のヘッダー）
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// ヘッダーを除いた行数
    pub fn data_row_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }
}

/// `FixtureCase`を段階的に構築するビルダー
#[derive(Debug, Clone)]
pub struct FixtureCaseBuilder {
    file_name: String,
    sheet_name: String,
    description: Option<String>,
    rows: Vec<Row>,
}

impl FixtureCaseBuilder {
    fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            description: None,
            rows: Vec::new(),
        }
    }

    /// シート名を指定する（デフォルト: `Dados`）
    pub fn with_sheet_name(mut self, sheet_name: impl Into<String>) -> Self {
        self.sheet_name = sheet_name.into();
        self
    }

    /// 進捗表示用の説明を指定する（デフォルト: ファイル名）
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// 1行を末尾に追加する
    pub fn with_row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// 複数行を末尾に追加する
    pub fn with_rows<R, I, S>(self, rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        rows.into_iter().fold(self, |builder, row| builder.with_row(row))
    }

    /// 設定を検証し、`FixtureCase`を生成する
    ///
    /// # エラー
    ///
    /// - ファイル名が空、または`.xlsx`で終わらない場合
    /// - ファイル名にパス区切り文字が含まれる場合
    /// - シート名が空の場合
    pub fn build(self) -> Result<FixtureCase, FixtureError> {
        if self.file_name.trim().is_empty() {
            return Err(FixtureError::Config(
                "file name must not be empty".to_string(),
            ));
        }

        if !self.file_name.to_ascii_lowercase().ends_with(".xlsx") {
            return Err(FixtureError::Config(format!(
                "file name '{}' must end with .xlsx",
                self.file_name
            )));
        }

        if self.file_name.contains(['/', '\\']) {
            return Err(FixtureError::Config(format!(
                "file name '{}' must not contain a path separator",
                self.file_name
            )));
        }

        if self.sheet_name.is_empty() {
            return Err(FixtureError::Config(format!(
                "sheet name for '{}' must not be empty",
                self.file_name
            )));
        }

        let description = self
            .description
            .unwrap_or_else(|| self.file_name.clone());

        Ok(FixtureCase {
            file_name: self.file_name,
            sheet_name: self.sheet_name,
            description,
            rows: self.rows,
        })
    }
}
