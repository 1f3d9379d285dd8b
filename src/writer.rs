//! Sheet Writer Module
//!
//! `FixtureCase`の行を、rust_xlsxwriterのワークシートへそのままの順序で書き込むモジュール。

use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, Worksheet, XlsxError};

use crate::error::FixtureError;
use crate::types::FixtureCase;

/// フィクスチャ1件分のワークブックを構築する
///
/// シートは1枚のみで、名前は`FixtureCase::sheet_name()`になります。
pub(crate) fn build_workbook(case: &FixtureCase) -> Result<Workbook, FixtureError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(case.sheet_name())?;

    write_rows(worksheet, case)?;

    tracing::debug!(
        file = case.file_name(),
        sheet = case.sheet_name(),
        rows = case.rows().len(),
        "rendered fixture workbook"
    );

    Ok(workbook)
}

/// 行をA1から順に書き込む
///
/// 空文字列のセルはExcelでは値を持てないため、空白セル（値なし・書式あり）として
/// 書き込みます。これにより空行も行として出力に残ります。
fn write_rows(worksheet: &mut Worksheet, case: &FixtureCase) -> Result<(), FixtureError> {
    let blank = blank_format();

    for (row_idx, row) in case.rows().iter().enumerate() {
        let row_num = to_row_num(row_idx)?;

        for (col_idx, value) in row.iter().enumerate() {
            let col_num = to_col_num(col_idx)?;

            if value.is_empty() {
                worksheet.write_blank(row_num, col_num, &blank)?;
            } else {
                worksheet.write_string(row_num, col_num, value)?;
            }
        }
    }

    Ok(())
}

/// 空白セル用の書式
///
/// rust_xlsxwriterはデフォルト書式の`write_blank`を出力しないため、
/// 見た目が標準と同じ`General`の表示形式を明示して`<c>`要素を残す。
fn blank_format() -> Format {
    Format::new().set_num_format("General")
}

// 範囲外のインデックスはExcelの行・列上限を超えている
fn to_row_num(index: usize) -> Result<RowNum, FixtureError> {
    RowNum::try_from(index).map_err(|_| XlsxError::RowColumnLimitError.into())
}

fn to_col_num(index: usize) -> Result<ColNum, FixtureError> {
    ColNum::try_from(index).map_err(|_| XlsxError::RowColumnLimitError.into())
}
