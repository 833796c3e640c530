use rust_xlsxwriter::Workbook;

use super::{ReportRow, HEADERS};
use crate::error::{AppError, AppResult};

/// 渲染病人列表为单工作表 xlsx
/// 二进制格式必须整体缓冲完成后再发响应，这里直接返回完整字节
pub fn render(rows: &[ReportRow]) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Patients").map_err(to_report)?;

    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).map_err(to_report)?;
    }
    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_number(r, 0, row.serial as f64).map_err(to_report)?;
        sheet.write_string(r, 1, row.name.as_str()).map_err(to_report)?;
        sheet.write_number(r, 2, f64::from(row.age)).map_err(to_report)?;
        sheet.write_string(r, 3, row.disease.as_str()).map_err(to_report)?;
        sheet
            .write_string(r, 4, row.registered_at.as_str())
            .map_err(to_report)?;
    }

    workbook.save_to_buffer().map_err(to_report)
}

fn to_report(e: impl std::fmt::Display) -> AppError {
    AppError::Report(e.to_string())
}
