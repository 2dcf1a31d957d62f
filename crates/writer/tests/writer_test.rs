//! Integration tests for the CSV and Excel writers

use apitab_common::{BodyRow, ParamRow, ResponseRow};
use apitab_writer::{write_csv, write_excel};
use std::fs;

fn sample_params() -> Vec<ParamRow> {
    vec![ParamRow {
        name: "limit".to_string(),
        mandatory: true,
        expected: "integer min=1 max=100".to_string(),
        location: "query".to_string(),
        description: "Page size".to_string(),
        examples: "20".to_string(),
    }]
}

fn sample_request() -> Vec<BodyRow> {
    vec![
        BodyRow {
            path: String::new(),
            property: "name".to_string(),
            mandatory: true,
            expected: "string maxLen=50".to_string(),
            description: "Display name".to_string(),
            examples: "Rex".to_string(),
        },
        BodyRow {
            path: "/tags[0]".to_string(),
            property: "label".to_string(),
            mandatory: false,
            expected: "string".to_string(),
            description: String::new(),
            examples: String::new(),
        },
    ]
}

fn sample_responses() -> Vec<ResponseRow> {
    vec![ResponseRow {
        status: "200".to_string(),
        body: BodyRow {
            path: String::new(),
            property: "id".to_string(),
            mandatory: true,
            expected: "string(uuid)".to_string(),
            description: String::new(),
            examples: String::new(),
        },
    }]
}

#[test]
fn test_csv_writer_produces_three_files() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("petstore_api_tab_desc");
    let base = base.to_str().unwrap();

    write_csv(base, &sample_params(), &sample_request(), &sample_responses()).unwrap();

    let params = fs::read_to_string(format!("{base}_params.csv")).unwrap();
    let mut lines = params.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Name,Mandatory,Expected Value(s),In,Description,Examples"
    );
    assert_eq!(
        lines.next().unwrap(),
        "limit,true,integer min=1 max=100,query,Page size,20"
    );

    let request = fs::read_to_string(format!("{base}_req_body.csv")).unwrap();
    assert_eq!(request.lines().count(), 3);
    assert!(request.contains("/tags[0],label,false,string,,"));

    let responses = fs::read_to_string(format!("{base}_res_body.csv")).unwrap();
    assert!(responses.starts_with("Status,Path,Property,Mandatory,"));
    assert!(responses.contains("200,,id,true,string(uuid),,"));
}

#[test]
fn test_csv_writer_emits_headers_for_empty_tables() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("empty");
    let base = base.to_str().unwrap();

    write_csv(base, &[], &[], &[]).unwrap();

    for suffix in ["_params.csv", "_req_body.csv", "_res_body.csv"] {
        let content = fs::read_to_string(format!("{base}{suffix}")).unwrap();
        assert_eq!(content.lines().count(), 1, "{suffix} should be header-only");
    }
}

#[test]
fn test_excel_writer_produces_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("petstore_api_tab_desc.xlsx");

    write_excel(&path, &sample_params(), &sample_request(), &sample_responses()).unwrap();

    let metadata = fs::metadata(&path).unwrap();
    assert!(metadata.len() > 0);
}

#[test]
fn test_excel_writer_accepts_empty_tables() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.xlsx");
    write_excel(&path, &[], &[], &[]).unwrap();
    assert!(path.exists());
}
