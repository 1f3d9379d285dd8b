//! Fixture Catalog
//!
//! 取り込みシステムのテストで使用する、組み込みのフィクスチャ定義。
//! すべてのケースはシート名`Dados`の単一シートで、先頭行がヘッダーです。

use crate::error::FixtureError;
use crate::types::FixtureCase;

/// 列順を反転したヘッダーのケース
pub const INVERTED_ORDER_FILE: &str = "teste_ordem_invertida.xlsx";
/// 小文字のヘッダーのケース
pub const LOWERCASE_FILE: &str = "teste_lowercase.xlsx";
/// 空行を含むケース
pub const BLANK_ROWS_FILE: &str = "teste_linhas_vazias.xlsx";
/// 大文字小文字が混在したヘッダーのケース
pub const MIXED_CASE_FILE: &str = "teste_mixed_case.xlsx";
/// サンプルデータ
pub const EXAMPLE_FILE: &str = "dados_exemplo.xlsx";

const STORE_A: &str = "0001002154";
const STORE_B: &str = "0001006393";
const BARCODE_1: &str = "7896050201756";
const BARCODE_2: &str = "7898080070050";

const EXAMPLE_ROWS: [[&str; 2]; 10] = [
    ["IMBLOJA", "CODIGOBARRAS"],
    [STORE_A, BARCODE_1],
    [STORE_A, BARCODE_2],
    [STORE_B, "070330717534"],
    [STORE_B, "0735202909010"],
    [STORE_B, "0736532327543"],
    [STORE_B, "0798190262291"],
    [STORE_B, "08000500121467"],
    [STORE_B, "095188794506"],
    [STORE_B, "4893993367528"],
];

/// ヘッダーの列順が反転したケース（`CODIGOBARRAS`, `IMBLOJA`）
pub fn inverted_order() -> Result<FixtureCase, FixtureError> {
    FixtureCase::builder(INVERTED_ORDER_FILE)
        .with_description("columns in inverted order (CODIGOBARRAS, IMBLOJA)")
        .with_rows([
            ["CODIGOBARRAS", "IMBLOJA"],
            [BARCODE_1, STORE_A],
            [BARCODE_2, STORE_A],
        ])
        .build()
}

/// ヘッダーが小文字のケース
pub fn lowercase() -> Result<FixtureCase, FixtureError> {
    FixtureCase::builder(LOWERCASE_FILE)
        .with_description("lowercase column names (imbloja, codigobarras)")
        .with_rows([
            ["imbloja", "codigobarras"],
            [STORE_A, BARCODE_1],
            [STORE_A, BARCODE_2],
        ])
        .build()
}

/// 空行（すべて空文字列の行）を含むケース
///
/// インデックス2と4（0始まり）が空行です。末尾の空行も出力されます。
pub fn blank_rows() -> Result<FixtureCase, FixtureError> {
    FixtureCase::builder(BLANK_ROWS_FILE)
        .with_description("file with blank rows")
        .with_rows([
            ["IMBLOJA", "CODIGOBARRAS"],
            [STORE_A, BARCODE_1],
            ["", ""],
            [STORE_A, BARCODE_2],
            ["", ""],
        ])
        .build()
}

/// ヘッダーが大文字小文字混在のケース
pub fn mixed_case() -> Result<FixtureCase, FixtureError> {
    FixtureCase::builder(MIXED_CASE_FILE)
        .with_description("mixed case column names (ImBLoJa, CoDiGoBarRaS)")
        .with_rows([
            ["ImBLoJa", "CoDiGoBarRaS"],
            [STORE_A, BARCODE_1],
            [STORE_A, BARCODE_2],
        ])
        .build()
}

/// サンプルデータ（ヘッダー1行 + データ9行）
pub fn example() -> Result<FixtureCase, FixtureError> {
    FixtureCase::builder(EXAMPLE_FILE)
        .with_description("example store/barcode data")
        .with_rows(EXAMPLE_ROWS)
        .build()
}

/// エッジケース4件（生成順）
pub fn edge_cases() -> Result<Vec<FixtureCase>, FixtureError> {
    Ok(vec![inverted_order()?, lowercase()?, blank_rows()?, mixed_case()?])
}

/// すべてのフィクスチャ（エッジケースのあとにサンプルデータ）
pub fn all() -> Result<Vec<FixtureCase>, FixtureError> {
    let mut cases = edge_cases()?;
    cases.push(example()?);
    Ok(cases)
}
