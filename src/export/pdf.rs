use printpdf::{BuiltinFont, Mm, PdfDocument};

use super::ReportRow;
use crate::error::{AppError, AppResult};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const LINE_STEP_MM: f32 = 8.0;
const TITLE_SIZE_PT: f32 = 16.0;
const BODY_SIZE_PT: f32 = 12.0;
const PT_TO_MM: f32 = 0.3528;

/// 病人行的正文文案
pub fn line_text(row: &ReportRow) -> String {
    format!(
        "{}. {}, Age: {}, Disease: {}, Registered: {}",
        row.serial, row.name, row.age, row.disease, row.registered_at
    )
}

/// 渲染病人列表为分页 pdf：居中标题，每人一行，溢出自动换页
pub fn render(rows: &[ReportRow]) -> AppResult<Vec<u8>> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "Patient List",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "patients",
    );
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(to_report)?;
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(to_report)?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);

    // 内建字体没有度量表，按平均字宽估算标题宽度来水平居中
    let title = "Patient List";
    let title_width_mm = title.len() as f32 * TITLE_SIZE_PT * 0.5 * PT_TO_MM;
    layer.use_text(
        title,
        TITLE_SIZE_PT,
        Mm((PAGE_WIDTH_MM - title_width_mm) / 2.0),
        Mm(PAGE_HEIGHT_MM - MARGIN_MM),
        &bold,
    );

    let mut y = PAGE_HEIGHT_MM - MARGIN_MM - 2.0 * LINE_STEP_MM;
    for row in rows {
        if y < MARGIN_MM {
            let (page, page_layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "patients");
            layer = doc.get_page(page).get_layer(page_layer);
            y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
        layer.use_text(line_text(row), BODY_SIZE_PT, Mm(MARGIN_MM), Mm(y), &font);
        y -= LINE_STEP_MM;
    }

    doc.save_to_bytes().map_err(to_report)
}

fn to_report(e: impl std::fmt::Display) -> AppError {
    AppError::Report(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::super::report_rows;
    use super::super::tests::sample_patients;
    use super::*;

    #[test]
    fn line_text_reads_like_a_sentence() {
        let rows = report_rows(&sample_patients());
        assert_eq!(
            line_text(&rows[0]),
            "1. Ann, Age: 30, Disease: Flu, Registered: 01/06/2025, 10:30:00"
        );
    }

    #[test]
    fn document_bytes_carry_the_pdf_magic() {
        let rows = report_rows(&sample_patients());
        let bytes = render(&rows).expect("pdf renders");
        assert_eq!(&bytes[..5], b"%PDF-");
    }

    #[test]
    fn long_lists_overflow_to_more_pages_without_error() {
        let mut patients = Vec::new();
        for _ in 0..20 {
            patients.extend(sample_patients());
        }
        let rows = report_rows(&patients);
        let bytes = render(&rows).expect("multi-page pdf renders");
        assert!(bytes.len() > 1000);
    }
}
