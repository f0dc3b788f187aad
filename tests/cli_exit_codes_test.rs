use httpmock::prelude::*;
use std::process::{Command, Output};
use tempfile::TempDir;

fn recall_etl(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_recall-etl"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch recall-etl")
}

#[test]
fn test_missing_required_options_fail() {
    let output = recall_etl(&["--input", "ids.csv"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--output"));
}

#[test]
fn test_missing_input_exits_1_without_requests() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/recalls/campaignNumber");
        then.status(200).json_body(serde_json::json!({"results": []}));
    });
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("missing.csv");
    let output_file = temp_dir.path().join("out.csv");

    let output = recall_etl(&[
        "--input",
        input.to_str().unwrap(),
        "--output",
        output_file.to_str().unwrap(),
        "--endpoint",
        &server.url("/recalls/campaignNumber"),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
    api_mock.assert_hits(0);
    assert!(!output_file.exists());
}

#[test]
fn test_success_exits_0() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/recalls/campaignNumber")
            .query_param("campaignNumber", "21V123");
        then.status(200).json_body(serde_json::json!({
            "results": [{"Manufacturer": "Acme", "NHTSA ID": "21V123"}]
        }));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/recalls/campaignNumber")
            .query_param("campaignNumber", "99V999");
        then.status(200).json_body(serde_json::json!({"results": []}));
    });
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("ids.csv");
    std::fs::write(&input, "NHTSA ID\n21V123\n99V999\n").unwrap();
    let output_file = temp_dir.path().join("out.csv");

    let output = recall_etl(&[
        "-i",
        input.to_str().unwrap(),
        "-o",
        output_file.to_str().unwrap(),
        "--endpoint",
        &server.url("/recalls/campaignNumber"),
        "--delay-ms",
        "0",
    ]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Processing 1/2: 21V123"));
    assert!(stdout.contains("No results found for NHTSA ID: 99V999"));
    assert_eq!(
        std::fs::read_to_string(&output_file).unwrap(),
        "Manufacturer,NHTSA ID\nAcme,21V123\n"
    );
}

#[test]
fn test_all_server_errors_exit_1_without_output() {
    let server = MockServer::start();
    let failing = server.mock(|when, then| {
        when.method(GET).path("/recalls/campaignNumber");
        then.status(500);
    });
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("ids.csv");
    std::fs::write(&input, "NHTSA ID\n21V123\n99V999\n").unwrap();
    let output_file = temp_dir.path().join("out.csv");

    let output = recall_etl(&[
        "-i",
        input.to_str().unwrap(),
        "-o",
        output_file.to_str().unwrap(),
        "--endpoint",
        &server.url("/recalls/campaignNumber"),
        "--delay-ms",
        "0",
    ]);

    failing.assert_hits(2);
    assert_eq!(output.status.code(), Some(1));
    assert!(!output_file.exists());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Error fetching data for").count(), 2);
    assert!(String::from_utf8_lossy(&output.stderr).contains("No results were found"));
}

#[test]
fn test_debug_prints_full_response() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/recalls/campaignNumber")
            .query_param("campaignNumber", "21V123");
        then.status(200).json_body(serde_json::json!({
            "Count": 1,
            "results": [{"Manufacturer": "Acme", "Component": "FUEL SYSTEM"}]
        }));
    });
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("ids.csv");
    std::fs::write(&input, "NHTSA ID\n21V123\n").unwrap();
    let output_file = temp_dir.path().join("out.csv");

    let output = recall_etl(&[
        "-i",
        input.to_str().unwrap(),
        "-o",
        output_file.to_str().unwrap(),
        "--endpoint",
        &server.url("/recalls/campaignNumber"),
        "--delay-ms",
        "0",
        "-d",
    ]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("API Response:"));
    assert!(stdout.contains("FUEL SYSTEM"));
}

#[test]
fn test_debug_prints_raw_body_when_not_json() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/recalls/campaignNumber");
        then.status(200).body("<html>maintenance window</html>");
    });
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("ids.csv");
    std::fs::write(&input, "NHTSA ID\n21V123\n").unwrap();
    let output_file = temp_dir.path().join("out.csv");

    let output = recall_etl(&[
        "-i",
        input.to_str().unwrap(),
        "-o",
        output_file.to_str().unwrap(),
        "--endpoint",
        &server.url("/recalls/campaignNumber"),
        "--delay-ms",
        "0",
        "-d",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Status: 200 OK"));
    assert!(stdout.contains("Raw Response: <html>maintenance window</html>"));
    assert!(stdout.contains("Error fetching data for 21V123"));
    assert!(!output_file.exists());
}
