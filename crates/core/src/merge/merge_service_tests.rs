use calamine::{Data, Reader, Xlsx};
use rust_xlsxwriter::Workbook;
use std::io::Cursor;

use crate::constants::XLSX_CONTENT_TYPE;
use crate::merge::{MergeError, MergeLimits, MergeService, MergeServiceTrait, UploadedFile};

/// Builds a real xlsx with the given sheet names, one marker cell each.
fn workbook_bytes(sheets: &[&str]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    for (i, name) in sheets.iter().enumerate() {
        let sheet = workbook.add_worksheet();
        sheet.set_name(*name).unwrap();
        sheet.write_string(0, 0, format!("cell-{}", i)).unwrap();
    }
    workbook.save_to_buffer().unwrap()
}

fn upload(name: &str, sheets: &[&str]) -> UploadedFile {
    UploadedFile {
        file_name: name.to_string(),
        content_type: Some(XLSX_CONTENT_TYPE.to_string()),
        bytes: workbook_bytes(sheets),
    }
}

fn output_sheet_names(bytes: &[u8]) -> Vec<String> {
    let workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes.to_vec())).unwrap();
    workbook.sheet_names()
}

#[test]
fn merges_two_files_with_default_rules() {
    let service = MergeService::new();
    let files = vec![upload("A.xlsx", &["Sheet1"]), upload("B.xlsx", &["Sheet1"])];

    let merged = service.merge(&files, None).unwrap();
    assert_eq!(merged.file_name, "merged.xlsx");
    assert_eq!(merged.content_type, XLSX_CONTENT_TYPE);
    assert_eq!(output_sheet_names(&merged.bytes), vec!["A_Sheet1", "B_Sheet1"]);
}

#[test]
fn dedupe_policy_renames_colliding_sheets() {
    let service = MergeService::new();
    let files = vec![upload("A.xlsx", &["Sheet1"]), upload("B.xlsx", &["Sheet1"])];
    let rules = r#"{"mode":"pattern","pattern":"{sheet}","collision":"dedupe"}"#;

    let merged = service.merge(&files, Some(rules)).unwrap();
    assert_eq!(output_sheet_names(&merged.bytes), vec!["Sheet1", "Sheet1_1"]);
}

#[test]
fn error_policy_rejects_colliding_sheets() {
    let service = MergeService::new();
    let files = vec![upload("A.xlsx", &["Sheet1"]), upload("B.xlsx", &["Sheet1"])];
    let rules = r#"{"mode":"pattern","pattern":"{sheet}","collision":"error"}"#;

    let err = service.merge(&files, Some(rules)).unwrap_err();
    assert_eq!(err.code(), "NameCollision");
}

#[test]
fn map_mode_renames_exact_matches() {
    let service = MergeService::new();
    let files = vec![upload("A.xlsx", &["Sheet1"])];
    let rules = r#"{"mode":"map","map":{"A.xlsx":{"Sheet1":"GrantsFY25"}}}"#;

    let merged = service.merge(&files, Some(rules)).unwrap();
    let names = output_sheet_names(&merged.bytes);
    assert_eq!(names, vec!["GrantsFY25"]);
}

#[test]
fn map_mode_wildcard_templates_unmapped_sheets() {
    let service = MergeService::new();
    let files = vec![upload("B.xlsx", &["Data", "Notes"])];
    let rules = r#"{"mode":"map","map":{"B.xlsx":{"*":"{file}-{sheet}"}}}"#;

    let merged = service.merge(&files, Some(rules)).unwrap();
    assert_eq!(output_sheet_names(&merged.bytes), vec!["B-Data", "B-Notes"]);
}

#[test]
fn malformed_rules_fall_back_to_defaults() {
    let service = MergeService::new();
    let files = vec![upload("A.xlsx", &["Sheet1"])];

    let merged = service.merge(&files, Some("{broken json")).unwrap();
    assert_eq!(output_sheet_names(&merged.bytes), vec!["A_Sheet1"]);
}

#[test]
fn empty_file_list_is_rejected() {
    let service = MergeService::new();
    let err = service.merge(&[], None).unwrap_err();
    assert!(matches!(err, MergeError::NoFiles));
    assert_eq!(err.code(), "NoFiles");
}

#[test]
fn too_many_files_is_rejected() {
    let service = MergeService::with_limits(MergeLimits {
        max_files: 2,
        ..Default::default()
    });
    let file = upload("A.xlsx", &["Sheet1"]);
    let files = vec![file.clone(), file.clone(), file];

    let err = service.merge(&files, None).unwrap_err();
    assert!(matches!(err, MergeError::TooManyFiles { max: 2 }));
}

#[test]
fn oversized_file_is_rejected() {
    let service = MergeService::with_limits(MergeLimits {
        max_file_bytes: 16,
        ..Default::default()
    });
    let files = vec![upload("big.xlsx", &["Sheet1"])];

    let err = service.merge(&files, None).unwrap_err();
    assert!(matches!(err, MergeError::PayloadTooLarge { .. }));
    assert_eq!(err.code(), "PayloadTooLarge");
}

#[test]
fn non_spreadsheet_file_is_rejected() {
    let service = MergeService::new();
    let files = vec![UploadedFile {
        file_name: "data.txt".to_string(),
        content_type: Some("text/plain".to_string()),
        bytes: b"hello".to_vec(),
    }];

    let err = service.merge(&files, None).unwrap_err();
    assert!(matches!(err, MergeError::InvalidFileType { .. }));
}

#[test]
fn spreadsheet_content_type_is_enough_without_extension() {
    let service = MergeService::new();
    let files = vec![UploadedFile {
        file_name: "report.bin".to_string(),
        content_type: Some(XLSX_CONTENT_TYPE.to_string()),
        bytes: workbook_bytes(&["Sheet1"]),
    }];

    let merged = service.merge(&files, None).unwrap();
    assert_eq!(output_sheet_names(&merged.bytes), vec!["report_Sheet1"]);
}

#[test]
fn corrupted_workbook_is_rejected_by_file_name() {
    let service = MergeService::new();
    let files = vec![
        upload("A.xlsx", &["Sheet1"]),
        UploadedFile {
            file_name: "bad.xlsx".to_string(),
            content_type: None,
            bytes: b"definitely not a zip archive".to_vec(),
        },
    ];

    let err = service.merge(&files, None).unwrap_err();
    match err {
        MergeError::InvalidWorkbook { file_name } => assert_eq!(file_name, "bad.xlsx"),
        other => panic!("expected InvalidWorkbook, got {:?}", other),
    }
}

#[test]
fn zero_length_files_are_skipped() {
    let service = MergeService::new();
    let files = vec![
        UploadedFile {
            file_name: "empty.xlsx".to_string(),
            content_type: None,
            bytes: Vec::new(),
        },
        upload("A.xlsx", &["Sheet1"]),
    ];

    let merged = service.merge(&files, None).unwrap();
    assert_eq!(output_sheet_names(&merged.bytes), vec!["A_Sheet1"]);
}

#[test]
fn only_zero_length_files_still_produce_a_workbook() {
    let service = MergeService::new();
    let files = vec![UploadedFile {
        file_name: "empty.xlsx".to_string(),
        content_type: None,
        bytes: Vec::new(),
    }];

    let merged = service.merge(&files, None).unwrap();
    // xlsx needs at least one sheet; the output gets a blank default one.
    assert_eq!(output_sheet_names(&merged.bytes).len(), 1);
}

#[test]
fn worksheet_count_limit_spans_all_files() {
    let service = MergeService::with_limits(MergeLimits {
        max_sheets_total: 3,
        ..Default::default()
    });
    let files = vec![
        upload("A.xlsx", &["S1", "S2"]),
        upload("B.xlsx", &["S1", "S2"]),
    ];

    let err = service.merge(&files, None).unwrap_err();
    assert!(matches!(err, MergeError::TooManyWorksheets { max: 3 }));
}

#[test]
fn cell_values_survive_the_copy() {
    let service = MergeService::new();
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Data").unwrap();
    sheet.write_string(0, 0, "label").unwrap();
    sheet.write_number(1, 0, 42.5).unwrap();
    sheet.write_boolean(2, 0, true).unwrap();
    let files = vec![UploadedFile {
        file_name: "A.xlsx".to_string(),
        content_type: None,
        bytes: workbook.save_to_buffer().unwrap(),
    }];

    let merged = service
        .merge(&files, Some(r#"{"pattern":"{sheet}"}"#))
        .unwrap();

    let mut out: Xlsx<_> = Xlsx::new(Cursor::new(merged.bytes)).unwrap();
    let range = out.worksheet_range("Data").unwrap();
    assert_eq!(range.get_value((0, 0)), Some(&Data::String("label".into())));
    assert_eq!(range.get_value((1, 0)), Some(&Data::Float(42.5)));
    assert_eq!(range.get_value((2, 0)), Some(&Data::Bool(true)));
}

#[test]
fn sanitizer_runs_before_collision_checks() {
    let service = MergeService::new();
    let files = vec![upload("A.xlsx", &["Sheet1"])];
    // Forbidden characters in the template come out as underscores.
    let rules = r#"{"pattern":"Q1/Q2:{sheet}"}"#;

    let merged = service.merge(&files, Some(rules)).unwrap();
    assert_eq!(output_sheet_names(&merged.bytes), vec!["Q1_Q2_Sheet1"]);
}
