//! Flattens a filter-results object into a CSV safety report.
//!
//! The object maps a category (`hate`, `violence`, ...) to a verdict object.
//! Each category becomes one row; the header is `category` followed by every
//! verdict field in order of first appearance.

use crate::{
    error::{ImageReportError, Result},
    models::{FilterResultKind, ImageGenerationResponse},
};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

fn render_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::Bool(true)) => "True".to_string(),
        Some(Value::Bool(false)) => "False".to_string(),
        Some(Value::String(s)) => s.clone(),
        // Nested values stay compact JSON, not Python-style reprs.
        Some(other) => other.to_string(),
    }
}

/// Builds header and rows without touching the filesystem.
pub fn render_safety_report(
    results: &Map<String, Value>,
    kind: FilterResultKind,
) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut columns: Vec<String> = Vec::new();
    let mut verdicts = Vec::with_capacity(results.len());

    for (category, verdict) in results {
        let verdict = verdict.as_object().ok_or_else(|| {
            ImageReportError::SchemaError(format!(
                "{}.{} is not an object",
                kind.key(),
                category
            ))
        })?;
        for field in verdict.keys() {
            if !columns.iter().any(|c| c == field) {
                columns.push(field.clone());
            }
        }
        verdicts.push((category, verdict));
    }

    let rows: Vec<Vec<String>> = verdicts
        .into_iter()
        .map(|(category, verdict)| {
            std::iter::once(category.clone())
                .chain(columns.iter().map(|c| render_cell(verdict.get(c))))
                .collect::<Vec<String>>()
        })
        .collect();

    let header: Vec<String> = std::iter::once("category".to_string())
        .chain(columns)
        .collect();

    Ok((header, rows))
}

/// Writes `<datasets_dir>/<key>_report.csv`, replacing any earlier report.
///
/// The response is validated before the file is created, so a schema error
/// leaves nothing on disk.
pub fn write_safety_report(
    response: &ImageGenerationResponse,
    kind: FilterResultKind,
    datasets_dir: &Path,
) -> Result<PathBuf> {
    let results = response.first()?.filter_results(kind)?;
    let (header, rows) = render_safety_report(results, kind)?;

    let path = datasets_dir.join(kind.report_file_name());
    let to_fs = |e: csv::Error| match e.into_kind() {
        csv::ErrorKind::Io(io) => ImageReportError::filesystem(&path, io),
        other => ImageReportError::filesystem(
            &path,
            std::io::Error::new(std::io::ErrorKind::Other, format!("{:?}", other)),
        ),
    };

    let mut writer = csv::Writer::from_path(&path).map_err(to_fs)?;
    writer.write_record(&header).map_err(to_fs)?;
    for row in &rows {
        writer.write_record(row).map_err(to_fs)?;
    }
    writer
        .flush()
        .map_err(|e| ImageReportError::filesystem(&path, e))?;

    log::info!(
        "Wrote {} ({} categories)",
        path.display(),
        rows.len()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    fn sample_response() -> ImageGenerationResponse {
        serde_json::from_value(json!({
            "data": [{
                "url": "http://x/y.png",
                "prompt_filter_results": {"hate": {"filtered": false, "severity": "safe"}},
                "content_filter_results": {"violence": {"filtered": false, "severity": "safe"}}
            }]
        }))
        .unwrap()
    }

    #[test]
    fn writes_one_row_per_category() {
        let dir = tempfile::tempdir().unwrap();
        let response = sample_response();

        let prompt = write_safety_report(&response, FilterResultKind::Prompt, dir.path()).unwrap();
        let content =
            write_safety_report(&response, FilterResultKind::Content, dir.path()).unwrap();

        assert_eq!(
            prompt,
            dir.path().join("prompt_filter_results_report.csv")
        );
        assert_eq!(
            fs::read_to_string(prompt).unwrap(),
            "category,filtered,severity\nhate,False,safe\n"
        );
        assert_eq!(
            fs::read_to_string(content).unwrap(),
            "category,filtered,severity\nviolence,False,safe\n"
        );
    }

    #[test]
    fn missing_key_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut response = sample_response();
        response.data[0].content_filter_results = None;

        let err =
            write_safety_report(&response, FilterResultKind::Content, dir.path()).unwrap_err();

        assert!(matches!(err, ImageReportError::SchemaError(_)));
        assert!(!dir
            .path()
            .join("content_filter_results_report.csv")
            .exists());
    }

    #[test]
    fn columns_are_unioned_in_first_seen_order() {
        let results = json!({
            "hate": {"filtered": false, "severity": "safe"},
            "jailbreak": {"filtered": false, "detected": true},
            "custom_blocklists": {"filtered": false, "details": []}
        });
        let (header, rows) =
            render_safety_report(results.as_object().unwrap(), FilterResultKind::Prompt).unwrap();

        assert_eq!(
            header,
            vec!["category", "filtered", "severity", "detected", "details"]
        );
        assert_eq!(rows[0], vec!["hate", "False", "safe", "", ""]);
        assert_eq!(rows[1], vec!["jailbreak", "False", "", "True", ""]);
        assert_eq!(rows[2], vec!["custom_blocklists", "False", "", "", "[]"]);
    }

    #[test]
    fn non_object_verdict_is_rejected() {
        let results = json!({"hate": "safe"});
        let err = render_safety_report(results.as_object().unwrap(), FilterResultKind::Content)
            .unwrap_err();
        assert!(matches!(err, ImageReportError::SchemaError(msg) if msg.contains("content_filter_results.hate")));
    }

    #[test]
    fn existing_report_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prompt_filter_results_report.csv");
        fs::write(&path, "stale,contents\nthat,is,longer\n").unwrap();

        write_safety_report(&sample_response(), FilterResultKind::Prompt, dir.path()).unwrap();

        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "category,filtered,severity\nhate,False,safe\n"
        );
    }
}
