//! Client-side CSV export of the currently displayed rows.
//!
//! Column headers come from the first row's key set; fields containing commas
//! (or quotes/newlines) are quoted by the writer. PDF export has no code path
//! here: it is delegated to the browser's print dialog.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("row could not be serialized: {0}")]
    Serialize(String),
    #[error("csv writer error: {0}")]
    Csv(String),
}

/// Serializes the filtered row set to CSV bytes. An empty row set yields an
/// empty document, since there is no first row to derive headers from.
pub fn rows_to_csv<T: Serialize>(rows: &[T]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let mut headers: Vec<String> = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        let value =
            serde_json::to_value(row).map_err(|err| ExportError::Serialize(err.to_string()))?;
        let serde_json::Value::Object(fields) = value else {
            return Err(ExportError::Serialize(
                "row did not serialize to an object".to_string(),
            ));
        };

        if index == 0 {
            headers = fields.keys().cloned().collect();
            writer
                .write_record(&headers)
                .map_err(|err| ExportError::Csv(err.to_string()))?;
        }

        let record: Vec<String> = headers
            .iter()
            .map(|header| cell_text(fields.get(header)))
            .collect();
        writer
            .write_record(&record)
            .map_err(|err| ExportError::Csv(err.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|err| ExportError::Csv(err.to_string()))
}

fn cell_text(value: Option<&serde_json::Value>) -> String {
    match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// `<report-name>_<ISO-date>.csv`
pub fn export_filename(report: &str, date: NaiveDate) -> String {
    format!("{report}_{}.csv", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        a: String,
        b: String,
    }

    #[test]
    fn quotes_fields_containing_commas() {
        let rows = vec![Row {
            a: "1,2".into(),
            b: "x".into(),
        }];
        let csv = String::from_utf8(rows_to_csv(&rows).unwrap()).unwrap();
        assert_eq!(csv, "a,b\n\"1,2\",x\n");
    }

    #[test]
    fn headers_come_from_the_first_row() {
        #[derive(Serialize)]
        struct Agency {
            name: String,
            plan: String,
            users: u32,
        }
        let rows = vec![
            Agency {
                name: "Habita".into(),
                plan: "professional".into(),
                users: 12,
            },
            Agency {
                name: "Lar Doce Lar".into(),
                plan: "free".into(),
                users: 3,
            },
        ];
        let csv = String::from_utf8(rows_to_csv(&rows).unwrap()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("name,plan,users"));
        assert_eq!(lines.next(), Some("Habita,professional,12"));
        assert_eq!(lines.next(), Some("Lar Doce Lar,free,3"));
    }

    #[test]
    fn null_fields_render_empty() {
        #[derive(Serialize)]
        struct Sparse {
            id: u32,
            note: Option<String>,
        }
        let rows = vec![Sparse { id: 1, note: None }];
        let csv = String::from_utf8(rows_to_csv(&rows).unwrap()).unwrap();
        assert_eq!(csv, "id,note\n1,\n");
    }

    #[test]
    fn empty_row_sets_export_nothing() {
        let rows: Vec<Row> = vec![];
        assert!(rows_to_csv(&rows).unwrap().is_empty());
    }

    #[test]
    fn filename_is_suffixed_with_the_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(export_filename("agencies", date), "agencies_2026-08-07.csv");
    }
}
