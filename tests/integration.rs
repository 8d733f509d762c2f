use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn people_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("people");
    path
}

const GOOGLE_CSV: &str = "First Name,Middle Name,Last Name,E-mail Address,Mobile Phone,Home Address,Birthday\n\
Ann,,Lee,ann@example.com,555 0101,\"1 Road\nTown, 0001\",1990-05-17\n\
Bob,,Ray,,555 0202,,\n";

const OUTLOOK_CSV: &str = "First Name,Last Name,E-mail Address,Mobile Phone,Company,Job Title\n\
ann,LEE,,555 0101,Acme,Engineer\n\
Cid,Moe,cid@example.com,,Initech,\n\
Broken,Row\n";

fn setup_test_env() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();

    let config_dir = root.join("config");
    fs::create_dir_all(&config_dir).unwrap();

    let files_dir = root.join("files");
    fs::create_dir_all(&files_dir).unwrap();
    fs::write(files_dir.join("google.csv"), GOOGLE_CSV).unwrap();
    fs::write(files_dir.join("outlook.csv"), OUTLOOK_CSV).unwrap();

    let config_content = format!(
        r#"[db]
path = "{}/data/people.sqlite"

[export]
csv_template = "full"
"#,
        root.display()
    );

    let config_path = config_dir.join("people.toml");
    fs::write(&config_path, config_content).unwrap();

    (tmp, config_path)
}

fn run_people(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = people_binary();
    let output = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run people binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

fn file(config_path: &Path, name: &str) -> String {
    let root = config_path.parent().unwrap().parent().unwrap();
    root.join("files").join(name).to_str().unwrap().to_string()
}

#[test]
fn test_init_creates_database() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_people(&config_path, &["init"]);
    assert!(success, "init failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("initialized"));
}

#[test]
fn test_init_idempotent() {
    let (_tmp, config_path) = setup_test_env();

    let (_, _, success1) = run_people(&config_path, &["init"]);
    assert!(success1, "First init failed");

    let (_, _, success2) = run_people(&config_path, &["init"]);
    assert!(success2, "Second init failed (not idempotent)");
}

#[test]
fn test_import_google_csv() {
    let (_tmp, config_path) = setup_test_env();
    let google = file(&config_path, "google.csv");

    run_people(&config_path, &["init"]);
    let (stdout, stderr, success) = run_people(&config_path, &["import", &google]);
    assert!(success, "import failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("parsed: 2"));
    assert!(stdout.contains("added: 2"));
    assert!(stdout.contains("ok"));

    let (stdout, _, _) = run_people(&config_path, &["list"]);
    assert!(stdout.contains("Ann Lee"));
    assert!(stdout.contains("Bob Ray"));
    assert!(stdout.contains("2 contacts"));
}

#[test]
fn test_import_dry_run_writes_nothing() {
    let (_tmp, config_path) = setup_test_env();
    let google = file(&config_path, "google.csv");

    run_people(&config_path, &["init"]);
    let (stdout, _, success) = run_people(&config_path, &["import", &google, "--dry-run"]);
    assert!(success);
    assert!(stdout.contains("dry-run"));
    assert!(stdout.contains("to add: 2"));
    assert!(!stdout.contains("added:"));

    let (stdout, _, _) = run_people(&config_path, &["list"]);
    assert!(stdout.contains("No contacts."));
}

#[test]
fn test_reimport_is_idempotent() {
    let (_tmp, config_path) = setup_test_env();
    let google = file(&config_path, "google.csv");

    run_people(&config_path, &["init"]);
    run_people(&config_path, &["import", &google]);
    let (stdout, _, success) = run_people(&config_path, &["import", &google]);
    assert!(success);
    assert!(stdout.contains("to add: 0"));
    assert!(stdout.contains("to update: 0"));
    assert!(stdout.contains("unchanged: 2"));

    let (stdout, _, _) = run_people(&config_path, &["list"]);
    assert!(stdout.contains("2 contacts"));
}

#[test]
fn test_outlook_merge_fills_gaps_only() {
    let (_tmp, config_path) = setup_test_env();

    run_people(&config_path, &["init"]);
    run_people(&config_path, &["import", &file(&config_path, "google.csv")]);
    let (stdout, stderr, success) =
        run_people(&config_path, &["import", &file(&config_path, "outlook.csv")]);
    assert!(success, "import failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("parsed: 2"));
    assert!(stdout.contains("skipped rows: 1"));
    assert!(stdout.contains("to add: 1"));
    assert!(stdout.contains("to update: 1"));

    let (stdout, _, success) = run_people(&config_path, &["get", "1"]);
    assert!(success);
    // Stored casing wins; the company is new.
    assert!(stdout.contains("first_name: Ann"));
    assert!(stdout.contains("company: Acme"));
    assert!(stdout.contains("birthday: 1990-05-17"));
}

#[test]
fn test_export_json_then_reimport_elsewhere() {
    let (tmp, config_path) = setup_test_env();
    let out = tmp.path().join("out").join("backup.json");

    run_people(&config_path, &["init"]);
    run_people(&config_path, &["import", &file(&config_path, "google.csv")]);
    let (_, stderr, success) =
        run_people(&config_path, &["export", "--output", out.to_str().unwrap()]);
    assert!(success, "export failed: {}", stderr);
    assert!(stderr.contains("Exported 2 contacts"));

    let json = fs::read_to_string(&out).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[0]["birthday"], "1990-05-17");
    assert_eq!(value[0]["homeAddress"], "1 Road\nTown, 0001");

    run_people(&config_path, &["clear", "--yes"]);
    let (stdout, _, success) = run_people(&config_path, &["import", out.to_str().unwrap()]);
    assert!(success);
    assert!(stdout.contains("added: 2"));
}

#[test]
fn test_export_google_csv_to_stdout() {
    let (_tmp, config_path) = setup_test_env();

    run_people(&config_path, &["init"]);
    run_people(&config_path, &["import", &file(&config_path, "google.csv")]);
    let (stdout, _, success) = run_people(
        &config_path,
        &["export", "--format", "csv", "--template", "google"],
    );
    assert!(success);
    assert!(stdout.starts_with("First Name,Middle Name,Last Name,"));
    assert!(stdout.contains("\"1 Road\nTown, 0001\""));
}

#[test]
fn test_get_missing_contact_fails() {
    let (_tmp, config_path) = setup_test_env();

    run_people(&config_path, &["init"]);
    let (_, stderr, success) = run_people(&config_path, &["get", "42"]);
    assert!(!success);
    assert!(stderr.contains("contact not found: 42"));
}

#[test]
fn test_delete_and_clear() {
    let (_tmp, config_path) = setup_test_env();

    run_people(&config_path, &["init"]);
    run_people(&config_path, &["import", &file(&config_path, "google.csv")]);

    let (_, _, success) = run_people(&config_path, &["delete", "1"]);
    assert!(success);
    let (_, _, success) = run_people(&config_path, &["delete", "1"]);
    assert!(!success);

    let (_, _, success) = run_people(&config_path, &["clear"]);
    assert!(!success, "clear without --yes must refuse");

    let (stdout, _, success) = run_people(&config_path, &["clear", "--yes"]);
    assert!(success);
    assert!(stdout.contains("Deleted 1 contacts."));
}

#[test]
fn test_unknown_import_extension_needs_format() {
    let (tmp, config_path) = setup_test_env();
    let txt = tmp.path().join("files").join("outlook.txt");
    fs::write(&txt, OUTLOOK_CSV).unwrap();

    run_people(&config_path, &["init"]);
    let (_, stderr, success) = run_people(&config_path, &["import", txt.to_str().unwrap()]);
    assert!(!success);
    assert!(stderr.contains("--format"));

    let (stdout, _, success) = run_people(
        &config_path,
        &["import", txt.to_str().unwrap(), "--format", "csv"],
    );
    assert!(success);
    assert!(stdout.contains("added: 2"));
}

#[test]
fn test_bad_config_rejected() {
    let (tmp, _) = setup_test_env();
    let bad = tmp.path().join("config").join("bad.toml");
    fs::write(&bad, "[db]\npath = \"x.sqlite\"\n\n[export]\ncsv_template = \"vcard\"\n").unwrap();

    let (_, stderr, success) = run_people(&bad, &["init"]);
    assert!(!success);
    assert!(stderr.contains("csv_template"));
}
