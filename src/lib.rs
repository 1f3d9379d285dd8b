//! xlsxfixture - Deterministic XLSX fixture generator
//!
//! 店舗コード（`IMBLOJA`）とバーコード（`CODIGOBARRAS`）の組を取り込むシステムの
//! テスト用に、単一シートのExcelファイル（XLSX）を生成するクレートです。
//! 行とセルの順序、空セルは定義どおりに出力されます。
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use xlsxfixture::{FixtureSet, GeneratorBuilder};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // カレントディレクトリにすべてのフィクスチャを書き込む
//!     let generator = GeneratorBuilder::new().build()?;
//!     for path in generator.generate_all(&FixtureSet::All.cases()?)? {
//!         println!("{}", path.display());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Custom Fixture
//!
//! ```rust,no_run
//! use xlsxfixture::{FixtureCase, GeneratorBuilder};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let case = FixtureCase::builder("teste_colunas_extras.xlsx")
//!         .with_row(["IMBLOJA", "CODIGOBARRAS", "OBS"])
//!         .with_row(["0001002154", "7896050201756", ""])
//!         .build()?;
//!
//!     let generator = GeneratorBuilder::new()
//!         .with_output_dir("target/fixtures")
//!         .build()?;
//!     generator.generate(&case)?;
//!     Ok(())
//! }
//! ```

mod api;
mod builder;
pub mod catalog;
mod error;
mod types;
mod writer;

// 公開API
pub use api::FixtureSet;
pub use builder::{Generator, GeneratorBuilder};
pub use error::FixtureError;
pub use types::{FixtureCase, FixtureCaseBuilder, Row, DEFAULT_SHEET_NAME};
