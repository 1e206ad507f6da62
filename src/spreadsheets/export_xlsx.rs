use crate::dates::{format_br, parse_date};
use crate::domain::order::OrderRow;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use chrono::NaiveDate;
use rust_xlsxwriter::Workbook;

/// Exports the currently filtered/sorted order rows exactly as the user sees
/// them on screen; the filename carries the export date.
pub fn export_orders_xlsx(rows: &[OrderRow], today: NaiveDate) -> ResultResp {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // Headers
    let headers = [
        "Ordem",
        "Entrada",
        "Saída",
        "Status",
        "Marceneiro",
        "Materiais",
    ];

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    // Rows
    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, &row.order.id)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write order id: {}", e)))?;

        worksheet
            .write_string(r, 1, date_cell(row.order.entry_date.as_deref()))
            .map_err(|e| ServerError::XlsxError(format!("Failed to write entry date: {}", e)))?;

        worksheet
            .write_string(r, 2, date_cell(row.order.exit_date.as_deref()))
            .map_err(|e| ServerError::XlsxError(format!("Failed to write exit date: {}", e)))?;

        worksheet
            .write_string(r, 3, row.display_status.label())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write status: {}", e)))?;

        let carpenter = row.carpenter_name.as_deref().unwrap_or("");
        worksheet
            .write_string(r, 4, carpenter)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write carpenter: {}", e)))?;

        worksheet
            .write_string(r, 5, row.materials_summary())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write materials: {}", e)))?;
    }

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))?;

    let filename = format!("ordens_{}.xlsx", today.format("%Y-%m-%d"));
    xlsx_response(buffer, &filename)
}

// Normalized date for the sheet; a malformed backend string is written as-is
// rather than dropped, matching the on-screen pass-through rule.
fn date_cell(raw: Option<&str>) -> String {
    match raw {
        Some(raw) => parse_date(raw)
            .map(format_br)
            .unwrap_or_else(|| raw.to_string()),
        None => String::new(),
    }
}
