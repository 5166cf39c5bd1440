use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::process::{Command, Output};
use std::thread;

const PEOPLE_HTML: &str = include_str!("fixtures/people.html");

fn expected_with_newline(expected: &str) -> String {
    format!("{}\n", expected.trim_end_matches('\n'))
}

/// Serve `body` to the next `requests` connections, returning the page URL
fn serve(body: &'static str, status: &'static str, requests: usize) -> String {
    serve_bytes(body.as_bytes(), "text/html; charset=utf-8", status, requests)
}

fn serve_bytes(
    body: &'static [u8],
    content_type: &'static str,
    status: &'static str,
    requests: usize,
) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let addr = listener.local_addr().expect("local addr");

    thread::spawn(move || {
        for stream in listener.incoming().take(requests) {
            let mut stream = stream.expect("accept");
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
            let mut line = String::new();
            while reader.read_line(&mut line).expect("read request") > 0 {
                if line == "\r\n" {
                    break;
                }
                line.clear();
            }

            let head = format!(
                "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            stream.write_all(head.as_bytes()).expect("write head");
            stream.write_all(body).expect("write body");
        }
    });

    format!("http://{addr}/people.html")
}

fn cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_table-to-json"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run CLI")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "cli exited with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn cli_converts_table_with_defaults() {
    let url = serve(PEOPLE_HTML, "200 OK", 1);
    let output = cli(&[&url]);

    assert_success(&output);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        expected_with_newline(include_str!("fixtures/people.json")),
    );
}

#[test]
fn cli_includes_links_and_omits_partial_rows() {
    let url = serve(PEOPLE_HTML, "200 OK", 1);
    let output = cli(&["-l", "-o", "-s", &url]);

    assert_success(&output);
    let records: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    let records = records.as_array().expect("array");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["age"], "30");
    let base = url.trim_end_matches("people.html");
    assert_eq!(records[0]["site_link"], format!("{base}alice"));
    assert!(records[1].get("site_link").is_none());
}

#[test]
fn cli_reads_urls_in_order() {
    let url = serve(PEOPLE_HTML, "200 OK", 2);
    let output = cli(&["--table-selector", "table", &url, &url]);

    assert_success(&output);
    let records: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(records.as_array().expect("array").len(), 6);
}

#[test]
fn cli_pretty_prints() {
    let url = serve(PEOPLE_HTML, "200 OK", 1);
    let output = cli(&["--pretty", &url]);

    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("[\n  {\n    \"name\": \"Alice\""));
}

#[test]
fn cli_decodes_latin1_pages() {
    let body: &[u8] =
        b"<table><thead><tr><th>Name</th><th>Ville</th></tr></thead><tbody><tr><td>Jos\xE9</td><td>Montr\xE9al</td></tr></tbody></table>";
    let url = serve_bytes(body, "text/html; charset=iso-8859-1", "200 OK", 1);
    let output = cli(&[&url]);

    assert_success(&output);
    assert_eq!(
        String::from_utf8(output.stdout).expect("utf-8 output"),
        "[{\"name\":\"Jos\u{e9}\",\"ville\":\"Montr\u{e9}al\"}]\n"
    );
}

#[test]
fn cli_requires_a_url() {
    let output = cli(&[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn cli_fails_on_http_error_without_output() {
    let url = serve("gone", "404 Not Found", 1);
    let output = cli(&[&url]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("HTTP 404"));
}

#[test]
fn cli_fails_on_invalid_selector_without_fetching() {
    let output = cli(&["-t", "table[", "http://127.0.0.1:9/unused"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid selector"));
}
