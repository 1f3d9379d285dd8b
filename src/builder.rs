//! Builder Module
//!
//! Fluent Builder APIを提供し、`Generator`インスタンスを段階的に構築する。

use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use crate::error::FixtureError;
use crate::types::FixtureCase;
use crate::writer::build_workbook;

/// 生成処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct GeneratorConfig {
    /// 出力ディレクトリ（Noneの場合はカレントディレクトリ）
    pub output_dir: Option<PathBuf>,

    /// 既存ファイルを上書きするか
    pub overwrite: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            overwrite: true,
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `Generator`インスタンスを段階的に構築するためのビルダーです。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxfixture::GeneratorBuilder;
///
/// # fn main() -> Result<(), xlsxfixture::FixtureError> {
/// let generator = GeneratorBuilder::new()
///     .with_output_dir("target/fixtures")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct GeneratorBuilder {
    config: GeneratorConfig,
}

impl GeneratorBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - 出力ディレクトリ: カレントディレクトリ
    /// - 上書き: する
    pub fn new() -> Self {
        Self::default()
    }

    /// 出力ディレクトリを指定する
    ///
    /// 存在しない場合は最初の書き込み前に作成されます。
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = Some(dir.into());
        self
    }

    /// 既存ファイルを上書きするかを指定する
    ///
    /// * `true`: 既存ファイルを置き換える（デフォルト）
    /// * `false`: 既存ファイルがあれば`io::ErrorKind::AlreadyExists`のI/Oエラー
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.config.overwrite = overwrite;
        self
    }

    /// 設定を検証し、`Generator`インスタンスを生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `FixtureError::Config`: 出力ディレクトリに空のパスが指定された場合
    pub fn build(self) -> Result<Generator, FixtureError> {
        if let Some(dir) = &self.config.output_dir {
            if dir.as_os_str().is_empty() {
                return Err(FixtureError::Config(
                    "output directory must not be empty".to_string(),
                ));
            }
        }

        Ok(Generator {
            config: self.config,
        })
    }
}

/// フィクスチャ生成のファサード
///
/// 各`FixtureCase`を単一シートのXLSXファイルとして書き込みます。
/// 処理は逐次的で、最初のエラーで中断します（書き込み済みのファイルは残ります）。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxfixture::{catalog, GeneratorBuilder};
///
/// # fn main() -> Result<(), xlsxfixture::FixtureError> {
/// let generator = GeneratorBuilder::new().build()?;
/// let written = generator.generate_all(&catalog::all()?)?;
/// assert_eq!(written.len(), 5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// 出力先パスを返す
    pub fn target_path(&self, case: &FixtureCase) -> PathBuf {
        match &self.config.output_dir {
            Some(dir) => dir.join(case.file_name()),
            None => PathBuf::from(case.file_name()),
        }
    }

    /// フィクスチャをメモリ上のXLSXバイト列として生成する
    pub fn write_to_buffer(&self, case: &FixtureCase) -> Result<Vec<u8>, FixtureError> {
        let mut workbook = build_workbook(case)?;
        Ok(workbook.save_to_buffer()?)
    }

    /// フィクスチャを1件生成し、書き込んだパスを返す
    ///
    /// # 発生し得るエラー
    ///
    /// * `FixtureError::Io`: 出力ディレクトリの作成失敗、または上書き禁止時の既存ファイル
    /// * `FixtureError::Xlsx`: ワークブックの構築失敗
    /// * `FixtureError::Write`: ファイルの保存失敗
    pub fn generate(&self, case: &FixtureCase) -> Result<PathBuf, FixtureError> {
        self.prepare_output_dir()?;

        let path = self.target_path(case);
        let mut workbook = build_workbook(case)?;

        let saved = if self.config.overwrite {
            workbook.save(&path)
        } else {
            // create_newで存在確認と作成を同時に行う
            let file = OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)?;
            workbook.save_to_writer(file)
        };
        saved.map_err(|source| FixtureError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), rows = case.rows().len(), "wrote fixture");
        Ok(path)
    }

    /// 複数のフィクスチャを順番に生成する
    ///
    /// 書き込み前に`validate_batch`で検証します。
    pub fn generate_all(&self, cases: &[FixtureCase]) -> Result<Vec<PathBuf>, FixtureError> {
        self.validate_batch(cases)?;

        let mut written = Vec::with_capacity(cases.len());
        for case in cases {
            written.push(self.generate(case)?);
        }
        Ok(written)
    }

    /// 同一バッチ内でのファイル名の重複を検出する
    ///
    /// 大文字小文字を区別しないファイルシステムを考慮し、比較は小文字化して行います。
    pub fn validate_batch(&self, cases: &[FixtureCase]) -> Result<(), FixtureError> {
        let mut seen = HashSet::with_capacity(cases.len());
        for case in cases {
            if !seen.insert(case.file_name().to_lowercase()) {
                return Err(FixtureError::Config(format!(
                    "duplicate fixture file name: '{}'",
                    case.file_name()
                )));
            }
        }
        Ok(())
    }

    fn prepare_output_dir(&self) -> Result<(), FixtureError> {
        if let Some(dir) = self.config.output_dir.as_deref() {
            if !dir.is_dir() {
                tracing::debug!(dir = %dir.display(), "creating output directory");
                fs::create_dir_all(dir)?;
            }
        }
        Ok(())
    }
}
