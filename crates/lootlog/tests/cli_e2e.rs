//! CLI-focused end-to-end tests for the `lootlog` binary.
//!
//! Every test runs the binary in its own sandbox: a temporary config file
//! points the filter archive and price history at files inside the sandbox,
//! so nothing touches the real XDG directories and no network is used.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use chrono::NaiveDate;
use lootlog_data::models::{PriceHistory, PriceTable};
use serde_json::Value;
use tempfile::TempDir;

const FILTER: &str = r#"# test filter
Show
    Rarity Unique
    SetBorderColor 175 96 37

Show
    Class "Currency"
    BaseType == "Exalted Orb"
    SetFontSize 45

Hide
    Rarity Normal
"#;

const ITEMS: &str = r#"[
    {"name": "Tabula Rasa", "typeLine": "Simple Robe", "frameType": 3},
    {"typeLine": "Exalted Orb", "itemClass": "Stackable Currency", "frameType": 5, "stackSize": 2},
    {"typeLine": "Iron Ring", "frameType": 0, "ilvl": 10},
    {"typeLine": "Chaos Orb", "frameType": 5, "stackSize": 30}
]"#;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temporary sandbox");
        let sandbox = Self { dir };

        let config = format!(
            "version = 1\n\n[rates]\nbase_url = \"http://127.0.0.1:9\"\n\n[storage]\nfilters = {:?}\nrates = {:?}\n",
            sandbox.path("filters.json").display().to_string(),
            sandbox.path("rates.json").display().to_string(),
        );
        sandbox.write("config.toml", &config);
        sandbox
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("failed to write sandbox file");
        path
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_lootlog"));
        cmd.args(args);
        cmd.env("LOOTLOG_CONFIG", self.path("config.toml"));
        cmd.env("XDG_CONFIG_HOME", self.path("xdg-config"));
        cmd.env("XDG_DATA_HOME", self.path("xdg-data"));
        cmd.env("XDG_CACHE_HOME", self.path("xdg-cache"));
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("LOOTLOG_LOG");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    fn run_allow_failure(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("failed to run lootlog")
    }

    fn run(&self, args: &[&str]) -> Output {
        let output = self.run_allow_failure(args);
        assert!(
            output.status.success(),
            "lootlog failed\nargs: {:?}\nstatus: {}\nstdout:\n{}\nstderr:\n{}",
            args,
            output.status,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
        output
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let output = self.run(args);
        parse_json(&output.stdout)
    }

    fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to spawn lootlog");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(stdin.as_bytes())
            .expect("failed to write stdin");
        child.wait_with_output().expect("failed to wait for lootlog")
    }

    fn store_rates(&self, day: u32, entries: &[(&str, &str, f64)]) {
        let path = self.path("rates.json");
        let mut history: PriceHistory = if path.exists() {
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap()
        } else {
            PriceHistory::new()
        };
        let mut table = PriceTable::new(NaiveDate::from_ymd_opt(2021, 3, day).unwrap());
        for (category, id, value) in entries {
            table.insert(category, id, *value);
        }
        history.insert(table);
        fs::write(&path, serde_json::to_string(&history).unwrap()).unwrap();
    }
}

fn parse_json(bytes: &[u8]) -> Value {
    let text = String::from_utf8_lossy(bytes);
    serde_json::from_str(&text)
        .unwrap_or_else(|err| panic!("output is not valid JSON: {err}\n{text}"))
}

fn path_arg(path: &Path) -> String {
    path.display().to_string()
}

// ==================== check ====================

#[test]
fn test_check_clean_filter() {
    let sandbox = Sandbox::new();
    let filter = sandbox.write("good.filter", FILTER);

    let output = sandbox.run(&["check", &path_arg(&filter)]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("3 rule(s), 0 error(s)"), "{stdout}");
}

#[test]
fn test_check_reports_errors_and_fails() {
    let sandbox = Sandbox::new();
    let filter = sandbox.write("bad.filter", "Show\n    ItemLevl >= 3\n    SetFontSize huge\n");

    let output = sandbox.run_allow_failure(&["--json", "check", &path_arg(&filter)]);
    assert_eq!(output.status.code(), Some(1));

    let report = parse_json(&output.stdout);
    assert_eq!(report["errors"].as_array().unwrap().len(), 2);
    assert_eq!(report["errors"][0]["line"], 2);
    assert!(report["errors"][0]["message"]
        .as_str()
        .unwrap()
        .contains("did you mean 'ItemLevel'"));

    let error = parse_json(&output.stderr);
    assert_eq!(error["error"]["code"], "INVALID_FILTER");
}

// ==================== filters & match ====================

#[test]
fn test_saved_filter_matches_items() {
    let sandbox = Sandbox::new();
    let filter = sandbox.write("main.filter", FILTER);
    let items = sandbox.write("items.json", ITEMS);

    let saved = sandbox.run_json(&["--json", "filters", "save", &path_arg(&filter), "-p", "main"]);
    assert_eq!(saved["profile"], "main");
    assert_eq!(saved["rules"], 3);

    let listed = sandbox.run_json(&["--json", "filters", "list"]);
    assert_eq!(listed["filters"][0]["version"], saved["version"]);

    let matched = sandbox.run_json(&[
        "--json",
        "match",
        &path_arg(&items),
        "--area-level",
        "70",
        "--profile",
        "main",
    ]);
    assert_eq!(matched["filter_version"], saved["version"]);

    let rows = matched["items"].as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["shown"], true);
    assert_eq!(rows[0]["line"], 2);
    assert!(!rows[1]["style"]["font_size"].is_null());
    assert_eq!(rows[2]["shown"], false);
    assert_eq!(rows[2]["line"], 11);
    assert!(rows[3].get("rule").is_none());
}

#[test]
fn test_match_without_saved_filter_fails() {
    let sandbox = Sandbox::new();
    let items = sandbox.write("items.json", ITEMS);

    let output = sandbox.run_allow_failure(&["--json", "match", &path_arg(&items), "-a", "70"]);
    assert_eq!(output.status.code(), Some(5));
    assert_eq!(parse_json(&output.stderr)["error"]["code"], "NO_FILTER");
}

#[test]
fn test_match_filter_file_shown_only() {
    let sandbox = Sandbox::new();
    let filter = sandbox.write("main.filter", FILTER);
    let items = sandbox.write("items.json", ITEMS);

    let output = sandbox.run(&[
        "match",
        &path_arg(&items),
        "-a",
        "70",
        "--filter",
        &path_arg(&filter),
        "--shown",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();

    assert_eq!(lines.len(), 3, "{stdout}");
    assert!(lines[1].contains("Tabula Rasa Simple Robe"));
    assert!(lines[2].contains("Exalted Orb"));
    assert!(lines[2].contains("font="));
}

#[test]
fn test_save_refuses_broken_filter_without_force() {
    let sandbox = Sandbox::new();
    let filter = sandbox.write("broken.filter", "Show\n    Frobnicate\n");

    let output = sandbox.run_allow_failure(&["filters", "save", &path_arg(&filter)]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!sandbox.path("filters.json").exists());

    sandbox.run(&["filters", "save", &path_arg(&filter), "--force"]);
    assert!(sandbox.path("filters.json").exists());
}

// ==================== category ====================

#[test]
fn test_category_from_stdin() {
    let sandbox = Sandbox::new();
    let items = r#"{"items": [
        {"typeLine": "Gilded Ambush Scarab", "frameType": 0},
        {"typeLine": "The Doctor", "frameType": 6},
        {"typeLine": "Unheard Of Thing", "frameType": 0}
    ]}"#;

    let output = sandbox.run_with_stdin(&["--json", "category", "-", "--sub"], items);
    assert!(output.status.success());

    let value = parse_json(&output.stdout);
    assert_eq!(value["items"][0]["category"], "Scarab");
    assert_eq!(value["items"][1]["category"], "Divination Card");
    assert!(value["items"][2]["category"].is_null());
}

// ==================== price & rates ====================

#[test]
fn test_price_uses_snapshot_on_or_before_date() {
    let sandbox = Sandbox::new();
    let items = sandbox.write("items.json", ITEMS);
    sandbox.store_rates(1, &[("Currency", "Exalted Orb", 90.0)]);
    sandbox.store_rates(10, &[("Currency", "Exalted Orb", 120.0)]);

    let early = sandbox.run_json(&["--json", "price", &path_arg(&items), "--date", "2021-03-05"]);
    assert_eq!(early["snapshot"], "2021-03-01");
    assert_eq!(early["items"][1]["value"], 180.0);
    assert_eq!(early["items"][3]["value"], 30.0);
    assert_eq!(early["total"], 210.0);

    let late = sandbox.run_json(&["--json", "price", &path_arg(&items), "--date", "2021-03-10"]);
    assert_eq!(late["total"], 270.0);

    let listed = sandbox.run_json(&["--json", "rates", "list"]);
    assert_eq!(listed["snapshots"].as_array().unwrap().len(), 2);
}

#[test]
fn test_price_without_snapshot_fails() {
    let sandbox = Sandbox::new();
    let items = sandbox.write("items.json", ITEMS);
    sandbox.store_rates(10, &[("Currency", "Exalted Orb", 120.0)]);

    let output =
        sandbox.run_allow_failure(&["--json", "price", &path_arg(&items), "--date", "2021-03-01"]);
    assert_eq!(output.status.code(), Some(5));
    assert_eq!(parse_json(&output.stderr)["error"]["code"], "NO_RATES");
}

// ==================== config & completions ====================

#[test]
fn test_config_set_and_show() {
    let sandbox = Sandbox::new();

    sandbox.run(&["config", "set", "rates.league", "Ritual"]);
    let shown = sandbox.run_json(&["--json", "config", "show"]);
    assert_eq!(shown["effective"]["rates.league"], "Ritual");
    assert_eq!(shown["effective"]["filter.profile"], "default");

    let output = sandbox.run_allow_failure(&["config", "set", "rates.colour", "red"]);
    assert_eq!(output.status.code(), Some(5));

    let path = sandbox.run(&["config", "path"]);
    assert_eq!(
        String::from_utf8_lossy(&path.stdout).trim(),
        path_arg(&sandbox.path("config.toml"))
    );
}

#[test]
fn test_completions() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["completions", "bash"]);
    assert!(String::from_utf8_lossy(&output.stdout).contains("lootlog"));
}
