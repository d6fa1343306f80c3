use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn rsv_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("rsv");
    path
}

fn setup_test_env() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();

    let config_dir = root.join("config");
    fs::create_dir_all(&config_dir).unwrap();

    let data_dir = root.join("data");
    fs::create_dir_all(&data_dir).unwrap();

    // Create test resume files
    let resumes_dir = root.join("resumes");
    fs::create_dir_all(&resumes_dir).unwrap();
    fs::write(
        resumes_dir.join("alice.txt"),
        "Alice Martin\nalice.martin@example.com\n555-123-4567\n\nPython developer. Python services, Python tooling.",
    )
    .unwrap();
    fs::write(
        resumes_dir.join("bob.txt"),
        "Bob Stone\nbob.stone@example.com\n(555) 987-6543\n\nJava engineer. Java platform work.",
    )
    .unwrap();

    let config_content = format!(
        r#"[db]
path = "{}/data/rsv.sqlite"

[keywords]
default_weight = 5

[search]
limit = 25
"#,
        root.display()
    );

    let config_path = config_dir.join("rsv.toml");
    fs::write(&config_path, config_content).unwrap();

    (tmp, config_path)
}

fn run_rsv(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = rsv_binary();
    let output = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run rsv binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

fn resumes_dir(tmp: &TempDir) -> String {
    tmp.path().join("resumes").to_str().unwrap().to_string()
}

#[test]
fn test_init_creates_database() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_rsv(&config_path, &["init"]);
    assert!(success, "init failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("initialized"));
}

#[test]
fn test_init_idempotent() {
    let (_tmp, config_path) = setup_test_env();

    let (_, _, success1) = run_rsv(&config_path, &["init"]);
    assert!(success1, "First init failed");

    let (_, _, success2) = run_rsv(&config_path, &["init"]);
    assert!(success2, "Second init failed (not idempotent)");
}

#[test]
fn test_ingest_directory() {
    let (tmp, config_path) = setup_test_env();

    run_rsv(&config_path, &["init"]);
    let (stdout, stderr, success) = run_rsv(&config_path, &["ingest", &resumes_dir(&tmp)]);
    assert!(
        success,
        "ingest failed: stdout={}, stderr={}",
        stdout, stderr
    );
    assert!(stdout.contains("stored:          2"));
    assert!(stdout.contains("failed:          0"));
    assert!(stdout.contains("ok"));
}

#[test]
fn test_ingest_extracts_contact_fields() {
    let (tmp, config_path) = setup_test_env();

    run_rsv(&config_path, &["init"]);
    run_rsv(&config_path, &["ingest", &resumes_dir(&tmp)]);

    let (stdout, _, success) = run_rsv(&config_path, &["list"]);
    assert!(success);
    assert!(stdout.contains("Alice Martin"));
    assert!(stdout.contains("alice.martin@example.com"));
    assert!(stdout.contains("555-123-4567"));
    assert!(stdout.contains("Bob Stone"));
    assert!(stdout.contains("(555) 987-6543"));
}

#[test]
fn test_ingest_continues_past_unsupported_file() {
    let (tmp, config_path) = setup_test_env();

    let odd = tmp.path().join("resume.rtf");
    fs::write(&odd, "rtf body").unwrap();
    let good = tmp.path().join("resumes").join("alice.txt");

    run_rsv(&config_path, &["init"]);
    let (stdout, stderr, success) = run_rsv(
        &config_path,
        &["ingest", odd.to_str().unwrap(), good.to_str().unwrap()],
    );
    assert!(success, "batch must not abort on one bad file");
    assert!(stdout.contains("stored:          1"));
    assert!(stdout.contains("failed:          1"));
    assert!(
        stderr.contains("unsupported"),
        "Should report the unsupported format, got: {}",
        stderr
    );
}

#[test]
fn test_search_ranks_by_weighted_occurrences() {
    let (tmp, config_path) = setup_test_env();

    run_rsv(&config_path, &["init"]);
    run_rsv(&config_path, &["keyword", "add", "Python", "--weight", "8"]);
    run_rsv(&config_path, &["keyword", "add", "Java", "--weight", "6"]);
    run_rsv(&config_path, &["ingest", &resumes_dir(&tmp)]);

    // Alice: Python x3 * 8 = 24. Bob: Java x2 * 6 = 12.
    let (stdout, _, success) = run_rsv(&config_path, &["search", "Python, Java"]);
    assert!(success, "search failed");
    assert!(stdout.contains("1. [24] Alice Martin"), "got: {}", stdout);
    assert!(stdout.contains("2. [12] Bob Stone"), "got: {}", stdout);
}

#[test]
fn test_search_excludes_non_matching_resumes() {
    let (tmp, config_path) = setup_test_env();

    run_rsv(&config_path, &["init"]);
    run_rsv(&config_path, &["keyword", "add", "Python", "--weight", "8"]);
    run_rsv(&config_path, &["ingest", &resumes_dir(&tmp)]);

    let (stdout, _, success) = run_rsv(&config_path, &["search", "Python"]);
    assert!(success);
    assert!(stdout.contains("Alice Martin"));
    assert!(
        !stdout.contains("Bob Stone"),
        "Bob's resume never mentions Python, got: {}",
        stdout
    );
}

#[test]
fn test_search_deterministic() {
    let (tmp, config_path) = setup_test_env();

    run_rsv(&config_path, &["init"]);
    run_rsv(&config_path, &["ingest", &resumes_dir(&tmp)]);

    let (stdout1, _, _) = run_rsv(&config_path, &["search", "engineer"]);
    let (stdout2, _, _) = run_rsv(&config_path, &["search", "engineer"]);
    assert_eq!(
        stdout1, stdout2,
        "Search results should be deterministic across runs"
    );
}

#[test]
fn test_search_empty_query() {
    let (_tmp, config_path) = setup_test_env();

    run_rsv(&config_path, &["init"]);
    let (stdout, _, success) = run_rsv(&config_path, &["search", ""]);
    assert!(success, "Empty query should not panic");
    assert!(stdout.contains("No results"));

    let (stdout, _, success) = run_rsv(&config_path, &["search", " , , "]);
    assert!(success);
    assert!(stdout.contains("No results"));
}

#[test]
fn test_search_no_results() {
    let (tmp, config_path) = setup_test_env();

    run_rsv(&config_path, &["init"]);
    run_rsv(&config_path, &["ingest", &resumes_dir(&tmp)]);

    let (stdout, _, success) = run_rsv(&config_path, &["search", "xyznonexistent"]);
    assert!(success);
    assert!(stdout.contains("No results"));
}

#[test]
fn test_search_json_output() {
    let (tmp, config_path) = setup_test_env();

    run_rsv(&config_path, &["init"]);
    run_rsv(&config_path, &["keyword", "add", "Python", "--weight", "8"]);
    run_rsv(&config_path, &["ingest", &resumes_dir(&tmp)]);

    let (stdout, _, success) = run_rsv(&config_path, &["search", "Python", "--json"]);
    assert!(success);
    let hits: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(hits.as_array().unwrap().len(), 1);
    assert_eq!(hits[0]["name"], "Alice Martin");
    assert_eq!(hits[0]["score"], 24);
}

#[test]
fn test_reindex_catches_up_after_keyword_edit() {
    let (tmp, config_path) = setup_test_env();

    run_rsv(&config_path, &["init"]);
    run_rsv(&config_path, &["ingest", &resumes_dir(&tmp)]);

    // No vocabulary at ingest time: Alice qualifies by substring but scores 0.
    let (stdout, _, _) = run_rsv(&config_path, &["search", "Python"]);
    assert!(stdout.contains("[0] Alice Martin"), "got: {}", stdout);

    run_rsv(&config_path, &["keyword", "add", "Python", "--weight", "8"]);
    let (stdout, _, success) = run_rsv(&config_path, &["reindex"]);
    assert!(success, "reindex failed");
    assert!(stdout.contains("ok"));

    let (stdout, _, _) = run_rsv(&config_path, &["search", "Python"]);
    assert!(stdout.contains("[24] Alice Martin"), "got: {}", stdout);
}

#[test]
fn test_show_resume() {
    let (tmp, config_path) = setup_test_env();

    run_rsv(&config_path, &["init"]);
    run_rsv(&config_path, &["keyword", "add", "Python", "--weight", "8"]);
    run_rsv(&config_path, &["ingest", &resumes_dir(&tmp)]);

    // Find Alice's id from the search output.
    let (search_out, _, _) = run_rsv(&config_path, &["search", "Python"]);
    let id = search_out
        .lines()
        .find(|l| l.trim().starts_with("id:"))
        .and_then(|l| l.split("id:").nth(1))
        .map(|s| s.trim().to_string())
        .expect("search output should carry an id");

    let (stdout, _, success) = run_rsv(&config_path, &["show", &id]);
    assert!(success, "show should succeed");
    assert!(stdout.contains("Alice Martin"));
    assert!(stdout.contains("Python (count 3, weight 8"));
    assert!(stdout.contains("Python developer."));
}

#[test]
fn test_show_missing_resume() {
    let (_tmp, config_path) = setup_test_env();

    run_rsv(&config_path, &["init"]);

    let (_, stderr, success) = run_rsv(&config_path, &["show", "999"]);
    assert!(!success, "show with missing id should fail");
    assert!(
        stderr.contains("not found"),
        "Should report not found, got: {}",
        stderr
    );
}

#[test]
fn test_delete_resume_idempotent() {
    let (tmp, config_path) = setup_test_env();

    run_rsv(&config_path, &["init"]);
    run_rsv(&config_path, &["ingest", &resumes_dir(&tmp)]);

    let (stdout, _, success) = run_rsv(&config_path, &["delete", "1"]);
    assert!(success);
    assert!(stdout.contains("Deleted resume 1"));

    let (stdout, _, success) = run_rsv(&config_path, &["delete", "1"]);
    assert!(success, "deleting a missing id must not fail");
    assert!(stdout.contains("No resume with id 1"));
}

#[test]
fn test_keyword_add_rejects_bad_weight() {
    let (_tmp, config_path) = setup_test_env();

    run_rsv(&config_path, &["init"]);
    let (_, stderr, success) = run_rsv(
        &config_path,
        &["keyword", "add", "Python", "--weight", "99"],
    );
    assert!(!success, "out-of-range weight should fail");
    assert!(stderr.contains("[1, 10]"), "got: {}", stderr);
}

#[test]
fn test_keyword_list_and_remove() {
    let (_tmp, config_path) = setup_test_env();

    run_rsv(&config_path, &["init"]);
    run_rsv(&config_path, &["keyword", "add", "Python", "--weight", "8"]);
    run_rsv(&config_path, &["keyword", "add", "Java"]);

    let (stdout, _, _) = run_rsv(&config_path, &["keyword", "list"]);
    assert!(stdout.contains("Python"));
    // Default weight comes from config.
    assert!(stdout.contains("Java"));
    assert!(stdout.contains('5'));

    // Find Java's id in the listing (first column).
    let java_id = stdout
        .lines()
        .find(|l| l.contains("Java"))
        .and_then(|l| l.split_whitespace().next())
        .map(|s| s.to_string())
        .unwrap();

    let (_, _, success) = run_rsv(&config_path, &["keyword", "remove", &java_id]);
    assert!(success);

    let (stdout, _, _) = run_rsv(&config_path, &["keyword", "list"]);
    assert!(!stdout.contains("Java"));
    assert!(stdout.contains("Python"));
}

#[test]
fn test_stats() {
    let (tmp, config_path) = setup_test_env();

    run_rsv(&config_path, &["init"]);
    run_rsv(&config_path, &["keyword", "add", "Python", "--weight", "8"]);
    run_rsv(&config_path, &["ingest", &resumes_dir(&tmp)]);

    let (stdout, _, success) = run_rsv(&config_path, &["stats"]);
    assert!(success);
    assert!(stdout.contains("Resumes:   2"));
    assert!(stdout.contains("Keywords:  1"));
    assert!(stdout.contains("Matches:   1"));
}
