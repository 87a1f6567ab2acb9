use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const HEADER: &str = "Date,Draw Date,Main Numbers 1,Main Numbers 2,Main Numbers 3,Main Numbers 4,Main Numbers 5,Main Numbers 6,Main Numbers 7,Bonus Number";

struct TestContext {
    dir: TempDir,
    data_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_path = dir.path().join("results.csv");

        let mut rng = fastrand::Rng::with_seed(31);
        let start = chrono::NaiveDate::from_ymd_opt(2019, 7, 3).unwrap();
        let mut file = File::create(&data_path).unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        // Pre-cutoff row, must be ignored
        writeln!(file, "2018-01-03,,1,2,3,4,5,6,7,8").unwrap();
        for i in 0..120 {
            let mut pool: Vec<u8> = (1..=50).collect();
            rng.shuffle(&mut pool);
            let date = start + chrono::Duration::days(i * 3);
            let nums: Vec<String> = pool[..8].iter().map(|n| n.to_string()).collect();
            writeln!(file, "{},,{}", date, nums.join(",")).unwrap();
        }

        Self { dir, data_path }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

fn run(ctx: &TestContext, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lottoforge"))
        .args(args)
        .arg("--data")
        .arg(&ctx.data_path)
        .output()
        .expect("Failed to execute binary")
}

fn only_csv(dir: &Path) -> String {
    let entries: Vec<_> = fs::read_dir(dir).unwrap().map(|e| e.unwrap().path()).collect();
    assert_eq!(entries.len(), 1, "{:?}", entries);
    fs::read_to_string(&entries[0]).unwrap()
}

#[test]
fn test_cli_stats() {
    let ctx = TestContext::new();
    let output = run(&ctx, &["stats", "--top", "3"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Draws:       120"), "{}", stdout);
    assert!(stdout.contains("Next draw:"));
}

#[test]
fn test_cli_seeded_sweep_reproducible() {
    let ctx = TestContext::new();
    let a = ctx.path("a");
    let b = ctx.path("b");

    for dir in [&a, &b] {
        let output = run(
            &ctx,
            &["sweep", "--seed", "17", "--export-dir", dir.to_str().unwrap()],
        );
        assert!(
            output.status.success(),
            "{}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    let first = only_csv(&a);
    assert_eq!(first, only_csv(&b));
    // Header plus 8 strategies x 5 runs
    assert_eq!(first.lines().count(), 41);
}

#[test]
fn test_cli_generate_export_name() {
    let ctx = TestContext::new();
    let out = ctx.path("out");
    let output = run(
        &ctx,
        &[
            "generate",
            "-n",
            "3",
            "--seed",
            "5",
            "--explain",
            "--w-history",
            "0.9",
            "--export-dir",
            out.to_str().unwrap(),
        ],
    );
    assert!(output.status.success());

    // Last synthetic draw is Wednesday 2020-06-24; next draw is Saturday 2020-06-27.
    let file = out.join("06-27-2020_recommendations.csv");
    assert!(file.exists());
    let content = fs::read_to_string(file).unwrap();
    assert_eq!(content.lines().count(), 4);
    assert!(content.lines().skip(1).all(|l| l.contains(",custom,")));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let ticket = regex::Regex::new(r"\d{2}( - \d{2}){6}").unwrap();
    assert!(ticket.is_match(&stdout), "{}", stdout);
}

#[test]
fn test_cli_weights_file() {
    let ctx = TestContext::new();
    let weights = ctx.path("weights.json");
    fs::write(&weights, r#"{ "history": 0.0, "balance": 0.0, "pattern": 0.0 }"#).unwrap();

    let output = run(
        &ctx,
        &["generate", "--weights", weights.to_str().unwrap(), "--jitter", "0"],
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("01 - 02 - 03 - 04 - 05 - 06 - 07"), "{}", stdout);
}

#[test]
fn test_cli_failures_exit_nonzero() {
    let ctx = TestContext::new();

    let missing = Command::new(env!("CARGO_BIN_EXE_lottoforge"))
        .args(["sweep", "--data", "/no/such/file.csv"])
        .output()
        .unwrap();
    assert!(!missing.status.success());

    let future = run(&ctx, &["sweep", "--cutoff", "2099-01-01"]);
    assert!(!future.status.success());

    let negative = run(&ctx, &["generate", "--w-balance=-1"]);
    assert!(!negative.status.success());
}

#[test]
fn test_cli_invalid_weights_fail_before_explain() {
    let ctx = TestContext::new();
    let output = run(&ctx, &["generate", "--explain", "--w-balance=-1"]);
    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Selection trace"), "{}", stdout);
}

#[test]
fn test_cli_nan_jitter_rejected() {
    let ctx = TestContext::new();
    let output = run(&ctx, &["generate", "--jitter=NaN"]);
    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("GENERATED"), "{}", stdout);
}

#[test]
fn test_cli_explain_matches_first_ticket() {
    let ctx = TestContext::new();
    // No --seed: the trace and the tickets must still share one generator seed.
    let output = run(&ctx, &["generate", "-n", "2", "--explain"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let traced = regex::Regex::new(r"Selection trace for (\d{2}(?: - \d{2}){6})").unwrap();
    let traced = traced.captures(&stdout).expect("trace header")[1].to_string();

    let generated = stdout.split("GENERATED").nth(1).expect("ticket table");
    let ticket = regex::Regex::new(r"\d{2}(?: - \d{2}){6}").unwrap();
    assert_eq!(ticket.find(generated).expect("first ticket").as_str(), traced);
}

#[test]
fn test_cli_explain_json() {
    let ctx = TestContext::new();
    let output = run(&ctx, &["generate", "--seed", "3", "--explain", "--json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"steps\""), "{}", stdout);
    assert_eq!(stdout.matches("\"candidate\"").count(), 7);
}
