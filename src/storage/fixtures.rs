use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

/// Reads a JSON array of rows, as exported from the hosted tables.
pub fn load_rows<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<Vec<T>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read {}", path.display()))?;
    let rows = serde_json::from_str(&contents)
        .with_context(|| format!("Could not parse rows in {}", path.display()))?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::storage::EventRow;

    fn write_dump(name: &str, contents: &str) -> PathBuf {
        let file_name = format!("pawpal-{}-{name}.json", std::process::id());
        let path = std::env::temp_dir().join(file_name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn rows_are_read_from_disk() {
        let path = write_dump(
            "events-ok",
            r#"[{"id": 1, "title": "Pet Drive", "description": null, "location": null,
                 "event_date": "2024-06-01", "start_time": "10:00", "end_time": null}]"#,
        );

        let rows: Vec<EventRow> = load_rows(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Pet Drive");
    }

    #[test]
    fn bad_row_reports_the_file() {
        let path = write_dump(
            "events-bad",
            r#"[{"id": "one", "title": "Pet Drive", "description": null, "location": null,
                 "event_date": null, "start_time": null, "end_time": null}]"#,
        );

        let error = load_rows::<EventRow>(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            error.to_string(),
            format!("Could not parse rows in {}", path.display())
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("pawpal-does-not-exist.json");

        let error = load_rows::<EventRow>(&path).unwrap_err();

        assert!(error.to_string().starts_with("Could not read"));
    }
}
