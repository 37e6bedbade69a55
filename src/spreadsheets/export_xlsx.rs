use crate::domain::ComparisonTable;
use crate::errors::ServerError;
use rust_xlsxwriter::Workbook;

pub const XLSX_FILENAME: &str = "car_price_comparison.xlsx";

pub fn export_comparison_xlsx(table: &ComparisonTable) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let xlsx_err = |what: &str, e: rust_xlsxwriter::XlsxError| {
        ServerError::ExportError(format!("Failed to write {what}: {e}"))
    };

    // Headers
    for (col, header) in table.headers().iter().enumerate() {
        worksheet
            .write_string(0, col as u16, header.as_str())
            .map_err(|e| xlsx_err("header", e))?;
    }

    let difference_col = (3 + table.sources().len()) as u16;

    // Rows
    for (i, row) in table.rows().iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, row.make.as_str())
            .map_err(|e| xlsx_err("make", e))?;
        worksheet
            .write_string(r, 1, row.model.as_str())
            .map_err(|e| xlsx_err("model", e))?;
        worksheet
            .write_number(r, 2, row.year as f64)
            .map_err(|e| xlsx_err("year", e))?;

        for (offset, source) in table.sources().iter().enumerate() {
            if let Some(price) = row.price(*source) {
                worksheet
                    .write_number(r, 3 + offset as u16, price)
                    .map_err(|e| xlsx_err(source.label(), e))?;
            }
        }

        worksheet
            .write_number(r, difference_col, row.difference)
            .map_err(|e| xlsx_err("difference", e))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::ExportError(format!("Failed to save workbook: {e}")))
}
