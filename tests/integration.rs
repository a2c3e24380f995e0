//! Integration tests for the shift calendar engine.
//!
//! Workbooks are built in memory with `rust_xlsxwriter` and run through:
//! - Workbook loading (visibility, tab labels, collisions)
//! - End-to-end shift extraction
//! - Calendar rendering
//! - The HTTP upload endpoints
//! - Error cases

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    Router,
};
use std::io::BufReader;

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use ical::parser::ical::component::IcalCalendar;
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use serde_json::Value;
use tower::ServiceExt;

use shift_calendar::api::{AppState, Clock, create_router};
use shift_calendar::config::EngineConfig;
use shift_calendar::error::EngineError;
use shift_calendar::extraction::{MAX_GRID_CELLS, ShiftExtractor, SkipReason, load_workbook};

// =============================================================================
// Test Helpers
// =============================================================================

struct SheetFixture<'a> {
    title: &'a str,
    hidden: bool,
    cells: Vec<(u32, u16, &'a str)>,
}

fn sheet<'a>(title: &'a str, cells: Vec<(u32, u16, &'a str)>) -> SheetFixture<'a> {
    SheetFixture {
        title,
        hidden: false,
        cells,
    }
}

fn hidden_sheet<'a>(title: &'a str, cells: Vec<(u32, u16, &'a str)>) -> SheetFixture<'a> {
    SheetFixture {
        title,
        hidden: true,
        cells,
    }
}

fn build_workbook(sheets: &[SheetFixture<'_>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    for fixture in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(fixture.title).unwrap();
        for (row, col, text) in &fixture.cells {
            worksheet.write_string(*row, *col, *text).unwrap();
        }
        if fixture.hidden {
            worksheet.set_hidden(true);
        }
    }
    workbook.save_to_buffer().unwrap()
}

/// Anchor at (2, 3); dates in row 3; shift times in column 2.
fn single_shift_roster() -> Vec<(u32, u16, &'static str)> {
    vec![
        (0, 0, "Roster"),
        (2, 3, "Sunday"),
        (2, 4, "Monday"),
        (2, 5, "Tuesday"),
        (3, 3, "8 Jun"),
        (3, 4, "9 Jun"),
        (3, 5, "10 Jun"),
        (4, 2, "08:00-16:00"),
        (4, 3, "Sam"),
        (4, 5, "Alex"),
        (5, 2, "16:00-22:00"),
        (5, 4, "Sam"),
    ]
}

fn two_week_roster() -> Vec<(u32, u16, &'static str)> {
    vec![
        (0, 1, "SUNDAY"),
        (0, 2, "Monday"),
        (0, 3, "Tuesday"),
        (1, 1, "14th Jun"),
        (1, 2, "15th Jun"),
        (1, 3, "16th Jun"),
        (2, 0, "7:00-15:30"),
        (2, 1, "alex"),
        (2, 3, "Jordan"),
        (3, 0, "15:00-23:00"),
        (3, 2, "Alex K"),
        (3, 3, "ALEX"),
    ]
}

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
}

fn extractor() -> ShiftExtractor {
    ShiftExtractor::new(EngineConfig::default()).unwrap()
}

fn router_with(config: EngineConfig) -> Router {
    let state = AppState::new(config)
        .unwrap()
        .with_clock(Clock::Fixed(Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap()));
    create_router(state)
}

const BOUNDARY: &str = "shift-calendar-test-boundary";

fn multipart_body(name: Option<&str>, file: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    if let Some(name) = name {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"name_to_search\"\r\n\r\n{name}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"excel_file\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn post_form(router: Router, uri: &str, body: Vec<u8>) -> (StatusCode, String, Vec<u8>) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, body_bytes.to_vec())
}

fn as_json(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

fn parse_calendar(ics: &str) -> IcalCalendar {
    let mut calendars: Vec<IcalCalendar> = ical::IcalParser::new(BufReader::new(ics.as_bytes()))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(calendars.len(), 1);
    calendars.remove(0)
}

/// Values of one property across all events, in event order.
fn event_values(calendar: &IcalCalendar, name: &str) -> Vec<String> {
    calendar
        .events
        .iter()
        .filter_map(|event| {
            event
                .properties
                .iter()
                .find(|p| p.name == name)
                .and_then(|p| p.value.clone())
        })
        .collect()
}

// =============================================================================
// Workbook Loading
// =============================================================================

#[test]
fn test_load_visible_sheets_with_canonical_labels() {
    let bytes = build_workbook(&[
        sheet("26-1", single_shift_roster()),
        sheet("123-4567", vec![(0, 0, "x")]),
    ]);
    let grids = load_workbook(&bytes).unwrap();

    assert_eq!(grids.labels(), vec!["2/6-1/2", "12/3-45/67"]);
    assert!(grids.skipped().is_empty());

    let grid = grids.get("2/6-1/2").unwrap();
    assert_eq!(grid.get(4, 5).unwrap().text(), "Alex");
}

#[test]
fn test_hidden_and_badly_titled_sheets_are_skipped() {
    let bytes = build_workbook(&[
        sheet("Summary", vec![(0, 0, "Sunday")]),
        sheet("14-2", vec![(0, 0, "x")]),
        hidden_sheet("21-3", two_week_roster()),
        sheet("1-2-3", vec![(0, 0, "x")]),
    ]);
    let grids = load_workbook(&bytes).unwrap();

    assert_eq!(grids.labels(), vec!["1/4-2/2"]);
    let reasons: Vec<(&str, &SkipReason)> = grids
        .skipped()
        .iter()
        .map(|s| (s.title.as_str(), &s.reason))
        .collect();
    assert_eq!(reasons.len(), 3);
    assert!(matches!(reasons[0], ("Summary", SkipReason::InvalidTitle(_))));
    assert!(matches!(reasons[1], ("21-3", SkipReason::Hidden)));
    assert!(matches!(reasons[2], ("1-2-3", SkipReason::InvalidTitle(_))));
}

#[test]
fn test_workbook_without_loadable_tabs_is_empty_not_error() {
    let bytes = build_workbook(&[
        sheet("Notes", vec![(0, 0, "nothing here")]),
        hidden_sheet("12-34", single_shift_roster()),
    ]);
    let grids = load_workbook(&bytes).unwrap();
    assert!(grids.is_empty());
    assert_eq!(grids.skipped().len(), 2);
}

#[test]
fn test_colliding_labels_last_wins() {
    // "012-3" drops the leading zero and shares "1/2-3/2" with "12-3".
    let bytes = build_workbook(&[
        sheet("12-3", vec![(0, 0, "first")]),
        sheet("45-6", vec![(0, 0, "middle")]),
        sheet("012-3", vec![(0, 0, "second")]),
    ]);
    let grids = load_workbook(&bytes).unwrap();

    assert_eq!(grids.labels(), vec!["1/2-3/2", "4/5-6/2"]);
    assert_eq!(grids.get("1/2-3/2").unwrap().get(0, 0).unwrap().text(), "second");
}

#[test]
fn test_sheet_extending_far_from_a1_is_skipped() {
    let bytes = build_workbook(&[
        sheet("26-1", single_shift_roster()),
        sheet("14-2", vec![(0, 0, "Sunday"), (9_999, 999, "stray")]),
    ]);
    assert!(10_000 * 1_000 > MAX_GRID_CELLS);

    let grids = load_workbook(&bytes).unwrap();
    assert_eq!(grids.labels(), vec!["2/6-1/2"]);
    assert_eq!(grids.skipped()[0].title, "14-2");
    assert_eq!(
        grids.skipped()[0].reason,
        SkipReason::TooLarge {
            rows: 10_000,
            cols: 1_000
        }
    );
}

#[test]
fn test_unreadable_bytes_fail_the_load() {
    let result = load_workbook(b"PK\x03\x04 but not really a workbook");
    assert!(matches!(result, Err(EngineError::WorkbookUnreadable { .. })));
}

// =============================================================================
// Extraction
// =============================================================================

#[test]
fn test_single_shift_end_to_end() {
    let bytes = build_workbook(&[sheet("26-1", single_shift_roster())]);
    let extraction = extractor().extract(&bytes, "Alex", reference()).unwrap();

    assert_eq!(extraction.records.len(), 1);
    let record = &extraction.records[0];
    assert_eq!(record.sheet, "2/6-1/2");
    assert_eq!(record.formatted_date(), "10/06/2026");
    assert_eq!(record.formatted_start(), "08:00");
    assert_eq!(record.start_time, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
    assert_eq!(record.duration_hours, 8.0);
    assert_eq!(extraction.sheets_scanned, 1);
}

#[test]
fn test_records_follow_sheet_then_discovery_order() {
    let bytes = build_workbook(&[
        sheet("26-1", single_shift_roster()),
        sheet("14-2", two_week_roster()),
    ]);
    let extraction = extractor().extract(&bytes, "alex", reference()).unwrap();

    let summary: Vec<(String, String, f64)> = extraction
        .records
        .iter()
        .map(|r| (r.formatted_date(), r.formatted_start(), r.duration_hours))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("10/06/2026".to_string(), "08:00".to_string(), 8.0),
            ("14/06/2026".to_string(), "07:00".to_string(), 8.5),
            ("15/06/2026".to_string(), "15:00".to_string(), 8.0),
            ("16/06/2026".to_string(), "15:00".to_string(), 8.0),
        ]
    );
}

#[test]
fn test_extraction_is_idempotent() {
    let bytes = build_workbook(&[
        sheet("26-1", single_shift_roster()),
        sheet("14-2", two_week_roster()),
    ]);
    let first = extractor().extract(&bytes, "Alex", reference()).unwrap();
    let second = extractor().extract(&bytes, "Alex", reference()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unknown_name_yields_no_records() {
    let bytes = build_workbook(&[sheet("26-1", single_shift_roster())]);
    let extraction = extractor().extract(&bytes, "Morgan", reference()).unwrap();
    assert!(extraction.records.is_empty());
}

#[test]
fn test_sheet_without_anchor_contributes_nothing() {
    let bytes = build_workbook(&[sheet(
        "26-1",
        vec![(0, 1, "Monday"), (1, 1, "8 Jun"), (2, 0, "08:00-16:00"), (2, 1, "Alex")],
    )]);
    let extraction = extractor().extract(&bytes, "Alex", reference()).unwrap();
    assert!(extraction.records.is_empty());
    assert_eq!(extraction.sheets_scanned, 0);
}

#[test]
fn test_year_inference_uses_reference_date() {
    let bytes = build_workbook(&[sheet(
        "31-1",
        vec![
            (0, 1, "Sunday"),
            (0, 2, "Monday"),
            (1, 1, "31st Dec"),
            (1, 2, "1st Jan"),
            (2, 0, "09:00-17:00"),
            (2, 1, "Alex"),
            (2, 2, "Alex"),
        ],
    )]);

    let december = NaiveDate::from_ymd_opt(2026, 12, 20).unwrap();
    let dates: Vec<String> = extractor()
        .extract(&bytes, "Alex", december)
        .unwrap()
        .records
        .iter()
        .map(|r| r.formatted_date())
        .collect();
    assert_eq!(dates, vec!["31/12/2026", "01/01/2027"]);

    let january = NaiveDate::from_ymd_opt(2027, 1, 3).unwrap();
    let dates: Vec<String> = extractor()
        .extract(&bytes, "Alex", january)
        .unwrap()
        .records
        .iter()
        .map(|r| r.formatted_date())
        .collect();
    assert_eq!(dates, vec!["31/12/2026", "01/01/2027"]);
}

#[test]
fn test_real_date_cells_skip_year_inference() {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("d mmm");
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("21-1").unwrap();
    worksheet.write_string(0, 1, "Sunday").unwrap();
    worksheet.write_string(0, 2, "Monday").unwrap();
    worksheet
        .write_datetime_with_format(1, 1, &ExcelDateTime::from_ymd(2024, 1, 21).unwrap(), &date_format)
        .unwrap();
    worksheet.write_string(1, 2, "22 Jan").unwrap();
    worksheet.write_string(2, 0, "09:00-17:00").unwrap();
    worksheet.write_string(2, 1, "Alex").unwrap();
    worksheet.write_string(2, 2, "Alex").unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    let dates: Vec<String> = extractor()
        .extract(&bytes, "Alex", reference())
        .unwrap()
        .records
        .iter()
        .map(|r| r.formatted_date())
        .collect();
    // The stored date keeps its own year; the text date takes the reference year.
    assert_eq!(dates, vec!["21/01/2024", "22/01/2026"]);
}

#[test]
fn test_anchor_row_is_not_scanned() {
    let bytes = build_workbook(&[sheet(
        "26-1",
        vec![
            (0, 1, "Sunday"),
            (0, 2, "Alex on call"),
            (1, 1, "7 Jun"),
            (1, 2, "8 Jun"),
            (2, 0, "09:00-17:00"),
            (2, 1, "Alex"),
        ],
    )]);
    let extraction = extractor().extract(&bytes, "Alex", reference()).unwrap();
    assert_eq!(extraction.records.len(), 1);
    assert_eq!(extraction.records[0].formatted_date(), "07/06/2026");
}

#[test]
fn test_name_on_date_row_is_scanned() {
    let bytes = build_workbook(&[sheet(
        "26-1",
        vec![
            (0, 1, "Sunday"),
            (1, 1, "7 Jun"),
            (1, 2, "Alex"),
            (2, 0, "09:00-17:00"),
            (2, 1, "Alex"),
        ],
    )]);
    match extractor().extract(&bytes, "Alex", reference()) {
        Err(EngineError::InvalidDateFormat { input }) => assert_eq!(input, "Alex"),
        other => panic!("Expected InvalidDateFormat, got {:?}", other),
    }
}

#[test]
fn test_malformed_shift_time_fails_extraction() {
    let bytes = build_workbook(&[sheet(
        "26-1",
        vec![(0, 1, "Sunday"), (1, 1, "7 Jun"), (2, 0, "Early"), (2, 1, "Alex")],
    )]);
    let result = extractor().extract(&bytes, "Alex", reference());
    match result {
        Err(EngineError::InvalidShiftFormat { input }) => assert_eq!(input, "Early"),
        other => panic!("Expected InvalidShiftFormat, got {:?}", other),
    }
}

#[test]
fn test_overnight_shift_keeps_negative_duration() {
    let bytes = build_workbook(&[sheet(
        "26-1",
        vec![(0, 1, "Sunday"), (1, 1, "7 Jun"), (2, 0, "23:00-01:00"), (2, 1, "Alex")],
    )]);
    let extraction = extractor().extract(&bytes, "Alex", reference()).unwrap();
    assert_eq!(extraction.records[0].duration_hours, -22.0);

    let strict = ShiftExtractor::new(EngineConfig {
        reject_negative_durations: true,
        ..EngineConfig::default()
    })
    .unwrap();
    assert!(matches!(
        strict.extract(&bytes, "Alex", reference()),
        Err(EngineError::InvalidShift { .. })
    ));
}

// =============================================================================
// Calendar Output
// =============================================================================

#[test]
fn test_calendar_contains_one_event_per_shift() {
    let bytes = build_workbook(&[
        sheet("26-1", single_shift_roster()),
        sheet("14-2", two_week_roster()),
    ]);
    let generated = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
    let ics = extractor()
        .to_calendar(&bytes, "Alex", reference(), generated)
        .unwrap();

    let calendar = parse_calendar(&ics);
    assert_eq!(calendar.events.len(), 4);
    assert_eq!(event_values(&calendar, "SUMMARY"), vec!["Work Shift"; 4]);
    // 10 Jun 08:00 in Sydney (UTC+10).
    assert_eq!(event_values(&calendar, "DTSTART")[0], "20260609T220000Z");
    assert_eq!(event_values(&calendar, "DTEND")[0], "20260610T060000Z");
    assert_eq!(event_values(&calendar, "UID").len(), 4);
}

#[test]
fn test_calendar_is_reproducible() {
    let bytes = build_workbook(&[sheet("14-2", two_week_roster())]);
    let generated = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
    let first = extractor().to_calendar(&bytes, "Alex", reference(), generated).unwrap();
    let second = extractor().to_calendar(&bytes, "ALEX", reference(), generated).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_calendar_with_no_shifts_is_an_error() {
    let bytes = build_workbook(&[sheet("26-1", single_shift_roster())]);
    let generated = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
    let result = extractor().to_calendar(&bytes, "Morgan", reference(), generated);
    assert!(matches!(result, Err(EngineError::NoShiftsFound { .. })));

    let lenient = ShiftExtractor::new(EngineConfig {
        require_shifts: false,
        ..EngineConfig::default()
    })
    .unwrap();
    let ics = lenient
        .to_calendar(&bytes, "Morgan", reference(), generated)
        .unwrap();
    assert!(!ics.contains("BEGIN:VEVENT"));
}

// =============================================================================
// HTTP API
// =============================================================================

#[tokio::test]
async fn test_get_upload_form() {
    let response = router_with(EngineConfig::default())
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("name=\"excel_file\""));
    assert!(html.contains("name=\"name_to_search\""));
}

#[tokio::test]
async fn test_upload_returns_ics_attachment() {
    let workbook = build_workbook(&[sheet("26-1", single_shift_roster())]);
    let body = multipart_body(Some("Alex"), Some(("roster.xlsx", &workbook)));

    let response = router_with(EngineConfig::default())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=shifts.ics"
    );
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/calendar"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let ics = String::from_utf8(bytes.to_vec()).unwrap();
    let calendar = parse_calendar(&ics);
    assert_eq!(calendar.events.len(), 1);
    assert_eq!(event_values(&calendar, "DTSTART"), vec!["20260609T220000Z"]);
    assert_eq!(event_values(&calendar, "DTSTAMP"), vec!["20260601T000000Z"]);
}

#[tokio::test]
async fn test_shift_listing_endpoint() {
    let workbook = build_workbook(&[
        sheet("Summary", vec![(0, 0, "x")]),
        sheet("14-2", two_week_roster()),
    ]);
    let body = multipart_body(Some("alex"), Some(("roster.xlsx", &workbook)));
    let (status, _, bytes) = post_form(router_with(EngineConfig::default()), "/shifts", body).await;

    assert_eq!(status, StatusCode::OK);
    let json = as_json(&bytes);
    let shifts = json["shifts"].as_array().unwrap();
    assert_eq!(shifts.len(), 3);
    assert_eq!(shifts[0]["date"], "14/06/2026");
    assert_eq!(shifts[0]["start_time"], "07:00");
    assert_eq!(shifts[0]["duration"], 8.5);
    assert_eq!(shifts[0]["sheet"], "1/4-2/2");
    assert_eq!(json["skipped_tabs"][0]["title"], "Summary");
    assert_eq!(json["skipped_tabs"][0]["reason"]["kind"], "invalid_title");
}

#[tokio::test]
async fn test_upload_without_file_is_rejected() {
    let body = multipart_body(Some("Alex"), None);
    let (status, content_type, bytes) =
        post_form(router_with(EngineConfig::default()), "/", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(content_type, "application/json");
    assert_eq!(as_json(&bytes)["code"], "MISSING_FIELD");
}

#[tokio::test]
async fn test_upload_without_name_is_rejected() {
    let workbook = build_workbook(&[sheet("26-1", single_shift_roster())]);
    let body = multipart_body(None, Some(("roster.xlsx", &workbook)));
    let (status, _, bytes) = post_form(router_with(EngineConfig::default()), "/", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json = as_json(&bytes);
    assert_eq!(json["code"], "MISSING_FIELD");
    assert!(json["message"].as_str().unwrap().contains("name_to_search"));
}

#[tokio::test]
async fn test_oversized_upload_is_rejected_before_processing() {
    let workbook = build_workbook(&[sheet("26-1", single_shift_roster())]);
    let config = EngineConfig {
        max_upload_bytes: 1024,
        ..EngineConfig::default()
    };
    assert!(workbook.len() > 1024);

    let body = multipart_body(Some("Alex"), Some(("roster.xlsx", &workbook)));
    let (status, _, bytes) = post_form(router_with(config), "/", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(as_json(&bytes)["code"], "FILE_TOO_LARGE");
}

#[tokio::test]
async fn test_wrong_extension_is_rejected() {
    let workbook = build_workbook(&[sheet("26-1", single_shift_roster())]);
    let body = multipart_body(Some("Alex"), Some(("roster.csv", &workbook)));
    let (status, _, bytes) = post_form(router_with(EngineConfig::default()), "/", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(as_json(&bytes)["code"], "UNSUPPORTED_FILE_TYPE");
}

#[tokio::test]
async fn test_unreadable_upload_is_client_error() {
    let body = multipart_body(Some("Alex"), Some(("roster.xlsx", b"not a workbook")));
    let (status, _, bytes) = post_form(router_with(EngineConfig::default()), "/", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(as_json(&bytes)["code"], "UNREADABLE_WORKBOOK");
}

#[tokio::test]
async fn test_no_shifts_is_user_visible_error() {
    let workbook = build_workbook(&[sheet("26-1", single_shift_roster())]);
    let body = multipart_body(Some("Morgan"), Some(("roster.xlsx", &workbook)));
    let (status, _, bytes) = post_form(router_with(EngineConfig::default()), "/", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json = as_json(&bytes);
    assert_eq!(json["code"], "NO_SHIFTS_FOUND");
    assert_eq!(json["message"], "No shifts detected for 'Morgan'");
}

#[tokio::test]
async fn test_health() {
    let response = router_with(EngineConfig::default())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
