use crate::domain::comparison::format_amount;
use crate::domain::ComparisonTable;
use crate::errors::ServerError;

pub const CSV_FILENAME: &str = "car_price_comparison.csv";

/// Writes the comparison as CSV: one header row matching the table's
/// columns, then one line per row. Absent source prices are empty fields.
pub fn export_comparison_csv(table: &ComparisonTable) -> Result<Vec<u8>, ServerError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(table.headers())
        .map_err(|e| ServerError::ExportError(format!("Failed to write CSV header: {e}")))?;

    for row in table.rows() {
        let mut record = vec![row.make.clone(), row.model.clone(), row.year.to_string()];
        record.extend(
            table
                .sources()
                .iter()
                .map(|source| row.price(*source).map(format_amount).unwrap_or_default()),
        );
        record.push(format_amount(row.difference));

        writer.write_record(&record).map_err(|e| {
            ServerError::ExportError(format!(
                "Failed to write CSV row for {} {} {}: {e}",
                row.make, row.model, row.year
            ))
        })?;
    }

    writer
        .into_inner()
        .map_err(|e| ServerError::ExportError(format!("Failed to flush CSV: {e}")))
}
