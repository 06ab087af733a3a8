//! Font download against a local mock server.

use std::fs::{create_dir_all, read, read_dir, write};

use gicon_core::{FetchOutcome, fetch_and_report, fetch_font};
use httpmock::prelude::*;

const FONT_PATH: &str = "/s/materialicons/v142/font.woff2";

#[test]
fn saves_body_verbatim_on_200() {
    let server = MockServer::start();
    let body: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    let mock = server.mock(|when, then| {
        when.method(GET).path(FONT_PATH);
        then.status(200).header("content-type", "font/woff2").body(&body);
    });

    let tmp = tempfile::tempdir().unwrap();
    let dest = tmp.path().join("css/fonts/MaterialIcons-Regular.woff2");

    let outcome = fetch_font(&server.url(FONT_PATH), &dest).unwrap();

    mock.assert();
    assert_eq!(outcome, FetchOutcome::Saved { path: dest.clone(), bytes: body.len() });
    assert_eq!(read(&dest).unwrap(), body);
}

#[test]
fn writes_nothing_on_404() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path(FONT_PATH);
        then.status(404).body("not found");
    });

    let tmp = tempfile::tempdir().unwrap();
    let dest = tmp.path().join("css/fonts/MaterialIcons-Regular.woff2");

    let outcome = fetch_font(&server.url(FONT_PATH), &dest).unwrap();

    mock.assert();
    assert!(!outcome.is_saved());
    assert!(outcome.to_string().contains("404"));
    assert!(!dest.exists());
}

#[test]
fn other_success_codes_are_failures() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(FONT_PATH);
        then.status(204);
    });

    let tmp = tempfile::tempdir().unwrap();
    let dest = tmp.path().join("font.woff2");

    let outcome = fetch_font(&server.url(FONT_PATH), &dest).unwrap();

    assert!(outcome.to_string().contains("204"));
    assert!(!dest.exists());
}

#[test]
fn keeps_unrelated_files_in_existing_directory() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(FONT_PATH);
        then.status(200).body("new font");
    });

    let tmp = tempfile::tempdir().unwrap();
    let fonts = tmp.path().join("css/fonts");
    create_dir_all(&fonts).unwrap();
    write(fonts.join("Other.woff2"), b"other").unwrap();
    write(fonts.join("MaterialIcons-Regular.woff2"), b"stale").unwrap();

    let dest = fonts.join("MaterialIcons-Regular.woff2");
    let outcome = fetch_font(&server.url(FONT_PATH), &dest).unwrap();

    assert!(outcome.is_saved());
    assert_eq!(read(&dest).unwrap(), b"new font");
    assert_eq!(read(fonts.join("Other.woff2")).unwrap(), b"other");
    assert_eq!(read_dir(&fonts).unwrap().count(), 2);
}

#[test]
fn unreachable_host_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let dest = tmp.path().join("font.woff2");

    // Port 9 (discard) on localhost is expected to refuse connections.
    let result = fetch_font("http://127.0.0.1:9/font.woff2", &dest);

    assert!(result.is_err());
    assert!(!dest.exists());
}

#[test]
fn reports_status_code_line_on_404() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(FONT_PATH);
        then.status(404);
    });

    let tmp = tempfile::tempdir().unwrap();
    let dest = tmp.path().join("css/fonts/MaterialIcons-Regular.woff2");
    let mut out = Vec::new();

    fetch_and_report(&server.url(FONT_PATH), &dest, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "Failed to download font: 404\n");
    assert!(!dest.exists());
}

#[test]
fn reports_destination_line_on_200() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(FONT_PATH);
        then.status(200).body("font");
    });

    let tmp = tempfile::tempdir().unwrap();
    let dest = tmp.path().join("font.woff2");
    let mut out = Vec::new();

    fetch_and_report(&server.url(FONT_PATH), &dest, &mut out).unwrap();

    let line = String::from_utf8(out).unwrap();
    assert_eq!(
        line,
        format!("Successfully downloaded Material Icons font to {}\n", dest.display())
    );
}
