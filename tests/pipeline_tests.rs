//! Pipeline integration tests.
//!
//! These tests exercise the full load → aggregate → document → render
//! pipeline against fixture files and temporary input directories.

use secscan_report::config::{AppConfig, MissingInputPolicy};
use secscan_report::model::{FieldValue, SeverityTag, ToolKind, NO_ISSUES_FOUND};
use secscan_report::pipeline::{self, collect_report, exit_codes, PipelineError};
use secscan_report::reports::{create_presenter, to_document, OutputFormat};
use std::path::{Path, PathBuf};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

const PINNED: &str = "2024-03-01T12:30:00Z";

fn fixture_config(output_dir: &Path) -> AppConfig {
    AppConfig::builder()
        .input_dir(FIXTURES_DIR)
        .output_dir(output_dir)
        .timestamp(PINNED)
        .quiet(true)
        .build()
}

/// Temporary input directory populated with the given files
fn input_dir(files: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    for (name, content) in files {
        std::fs::write(dir.path().join(name), content).expect("write input");
    }
    dir
}

fn config_for(input: &Path, output: &Path) -> AppConfig {
    AppConfig::builder()
        .input_dir(input)
        .output_dir(output)
        .timestamp(PINNED)
        .quiet(true)
        .build()
}

// ============================================================================
// Scenarios
// ============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn bandit_single_result_projects_row() {
        let input = input_dir(&[(
            "bandit-report.json",
            r#"{"results":[{"issue_severity":"HIGH","issue_text":"eval used","filename":"a.py","line_number":12}]}"#,
        )]);
        let config = AppConfig::builder()
            .input_dir(input.path())
            .tools(vec![ToolKind::Bandit])
            .build();

        let report = collect_report(&config);
        let set = report.finding_set(ToolKind::Bandit).expect("bandit set");
        assert_eq!(set.len(), 1);
        assert_eq!(
            set.rows(),
            vec![vec![
                FieldValue::text("HIGH"),
                FieldValue::text("eval used"),
                FieldValue::text("a.py"),
                FieldValue::Number(12),
            ]]
        );
    }

    #[test]
    fn semgrep_error_with_no_results_shows_both() {
        let input = input_dir(&[(
            "semgrep-report.json",
            r#"{"results": [], "errors": [{"message": "timeout"}]}"#,
        )]);
        let config = AppConfig::builder()
            .input_dir(input.path())
            .tools(vec![ToolKind::Semgrep])
            .build();

        let report = collect_report(&config);
        let set = &report.finding_sets[0];
        assert!(set.is_empty());
        assert_eq!(set.errors, vec!["timeout"]);

        let document = to_document(&report);
        let section = &document.sections[0];
        assert_eq!(section.placeholder(), Some(NO_ISSUES_FOUND));
        assert_eq!(section.errors, vec!["timeout"]);

        let html = create_presenter(OutputFormat::Html)
            .render(&document)
            .expect("render html");
        let html = String::from_utf8(html).expect("utf-8 html");
        assert!(html.contains("<li>timeout</li>"));
        assert!(html.contains("No issues found"));
    }

    #[test]
    fn safety_without_vulnerabilities_key_is_empty() {
        let input = input_dir(&[("safety-report.json", r#"{"report_meta": {}}"#)]);
        let config = AppConfig::builder()
            .input_dir(input.path())
            .tools(vec![ToolKind::Safety])
            .build();

        let report = collect_report(&config);
        let set = &report.finding_sets[0];
        assert_eq!(set.len(), 0);
        assert!(set.errors.is_empty());
    }

    #[test]
    fn pylint_array_keeps_source_order() {
        let input = input_dir(&[(
            "pylint-report.json",
            r#"[{"type":"warning","message":"first","module":"m","line":3},
                {"type":"error","message":"second","module":"m","line":1}]"#,
        )]);
        let config = AppConfig::builder()
            .input_dir(input.path())
            .tools(vec![ToolKind::Pylint])
            .build();

        let report = collect_report(&config);
        let set = &report.finding_sets[0];
        assert_eq!(set.len(), 2);
        assert_eq!(set.findings[0].message, "first");
        assert_eq!(set.findings[1].message, "second");
    }
}

// ============================================================================
// Aggregation Properties
// ============================================================================

mod aggregation {
    use super::*;

    #[test]
    fn order_is_stable_under_failed_inputs() {
        let input = input_dir(&[
            ("pylint-report.json", "[]"),
            ("semgrep-report.json", "{ this is not json"),
        ]);
        let tools = vec![
            ToolKind::Safety,
            ToolKind::Semgrep,
            ToolKind::Bandit,
            ToolKind::Pylint,
        ];
        let config = AppConfig::builder()
            .input_dir(input.path())
            .tools(tools.clone())
            .build();

        let report = collect_report(&config);
        assert_eq!(report.tools(), tools);

        // Missing and malformed inputs each carry one load error
        for tool in [ToolKind::Safety, ToolKind::Semgrep, ToolKind::Bandit] {
            let set = report.finding_set(tool).expect("set present");
            assert!(set.is_empty());
            assert_eq!(set.errors.len(), 1, "{tool}: {:?}", set.errors);
        }
        assert!(report.finding_sets[1].errors[0].starts_with("malformed JSON"));
        assert!(report.finding_sets[0].errors[0].starts_with("input file not found"));
        assert!(!report.finding_set(ToolKind::Pylint).expect("pylint").has_errors());
    }

    #[test]
    fn sections_match_finding_sets() {
        let out = tempfile::tempdir().expect("temp dir");
        let report = collect_report(&fixture_config(out.path()));
        let document = to_document(&report);

        assert_eq!(document.sections.len(), report.finding_sets.len());
        for (section, set) in document.sections.iter().zip(&report.finding_sets) {
            assert_eq!(section.title, set.tool_name);
            assert_eq!(section.row_count(), set.len());
            if let Some(table) = section.table() {
                assert!(table.rows.iter().all(|r| r.cells.len() == table.headers.len()));
            }
        }
    }

    #[test]
    fn omit_policy_removes_only_missing_tools() {
        let input = input_dir(&[
            ("bandit-report.json", r#"{"results": []}"#),
            ("pylint-report.json", "not json"),
        ]);
        let config = AppConfig::builder()
            .input_dir(input.path())
            .missing_input(MissingInputPolicy::Omit)
            .build();

        let report = collect_report(&config);
        assert_eq!(report.tools(), vec![ToolKind::Bandit, ToolKind::Pylint]);
        assert!(report.finding_sets[1].has_errors());
    }
}

// ============================================================================
// Fixture Content
// ============================================================================

mod fixtures {
    use super::*;

    #[test]
    fn fixture_report_has_all_tools_in_default_order() {
        let out = tempfile::tempdir().expect("temp dir");
        let report = collect_report(&fixture_config(out.path()));

        assert_eq!(
            report.tools(),
            vec![
                ToolKind::Semgrep,
                ToolKind::Bandit,
                ToolKind::Pylint,
                ToolKind::Safety
            ]
        );
        assert_eq!(report.total_findings(), 6);
        assert_eq!(report.tools_with_errors(), 0);
    }

    #[test]
    fn fixture_document_rows_and_tags() {
        let out = tempfile::tempdir().expect("temp dir");
        let document = to_document(&collect_report(&fixture_config(out.path())));

        let semgrep = document.sections[0].table().expect("semgrep table");
        assert_eq!(
            semgrep.headers,
            vec!["Check ID", "Severity", "Message", "File", "Line"]
        );
        assert_eq!(
            semgrep.rows[0].cells[0],
            FieldValue::text("python.lang.security.audit.subprocess-shell-true")
        );
        assert_eq!(semgrep.rows[0].tag, SeverityTag::High);

        let bandit = document.sections[1].table().expect("bandit table");
        assert_eq!(bandit.rows[0].tag, SeverityTag::Medium);
        assert_eq!(bandit.rows[1].tag, SeverityTag::Low);
        assert_eq!(bandit.rows[1].cells[3], FieldValue::Number(4));

        let pylint = document.sections[2].table().expect("pylint table");
        assert_eq!(pylint.rows[0].cells[2], FieldValue::text("app.handlers"));
        assert_eq!(pylint.rows[1].tag, SeverityTag::High);

        let safety = document.sections[3].table().expect("safety table");
        assert_eq!(
            safety.rows[0].cells,
            vec![
                FieldValue::text("jinja2"),
                FieldValue::text(
                    "Jinja2 before 2.11.3 is vulnerable to ReDoS in the urlize filter."
                ),
                FieldValue::text("medium"),
            ]
        );
        assert_eq!(document.generated_at, "2024-03-01 12:30:00 UTC");
    }
}

// ============================================================================
// End-to-end Runs
// ============================================================================

mod run {
    use super::*;

    fn read_outputs(dir: &Path, paths: &[PathBuf]) -> Vec<Vec<u8>> {
        paths
            .iter()
            .map(|p| {
                assert!(p.starts_with(dir));
                std::fs::read(p).expect("read output")
            })
            .collect()
    }

    #[test]
    fn writes_all_formats_into_new_directory() {
        let out = tempfile::tempdir().expect("temp dir");
        let out_dir = out.path().join("nested").join("reports");
        let config = AppConfig::builder()
            .input_dir(FIXTURES_DIR)
            .output_dir(&out_dir)
            .formats(OutputFormat::all().to_vec())
            .timestamp(PINNED)
            .quiet(true)
            .build();

        let summary = pipeline::run(&config).expect("run");
        assert!(summary.failures.is_empty());
        assert_eq!(summary.exit_code(), exit_codes::SUCCESS);
        assert_eq!(
            summary.written,
            vec![
                out_dir.join("security_report.html"),
                out_dir.join("security_report.pdf"),
                out_dir.join("security_report.json"),
            ]
        );

        let pdf = std::fs::read(out_dir.join("security_report.pdf")).expect("pdf");
        assert!(pdf.starts_with(b"%PDF-1.4"));
        let html = std::fs::read_to_string(out_dir.join("security_report.html")).expect("html");
        assert!(html.contains("Semgrep Findings"));
        assert!(html.contains("severity-high"));
    }

    #[test]
    fn repeated_runs_are_byte_identical() {
        let first = tempfile::tempdir().expect("temp dir");
        let second = tempfile::tempdir().expect("temp dir");

        let mut config = fixture_config(first.path());
        config.output.formats = OutputFormat::all().to_vec();
        let a = pipeline::run(&config).expect("first run");

        config.output.dir = second.path().to_path_buf();
        let b = pipeline::run(&config).expect("second run");

        assert_eq!(a.document, b.document);
        assert_eq!(
            read_outputs(first.path(), &a.written),
            read_outputs(second.path(), &b.written)
        );
    }

    #[test]
    fn missing_inputs_still_produce_report() {
        let input = input_dir(&[("bandit-report.json", r#"{"results": []}"#)]);
        let out = tempfile::tempdir().expect("temp dir");
        let mut config = config_for(input.path(), out.path());
        config.output.formats = vec![OutputFormat::Json];

        let summary = pipeline::run(&config).expect("run");
        assert_eq!(summary.exit_code(), exit_codes::TOOL_ERRORS);
        assert_eq!(summary.document.sections.len(), 4);
        assert_eq!(summary.document.sections_with_errors().count(), 3);

        let json: serde_json::Value = serde_json::from_slice(
            &std::fs::read(out.path().join("security_report.json")).expect("json"),
        )
        .expect("valid json");
        assert_eq!(json["sections"][1]["title"], "Bandit");
        assert_eq!(json["sections"][1]["body"]["kind"], "placeholder");
    }

    #[test]
    fn unwritable_output_is_reported_per_format() {
        let out = tempfile::tempdir().expect("temp dir");
        let mut config = fixture_config(out.path());
        config.output.formats = vec![OutputFormat::Html, OutputFormat::Json];
        // A directory where the HTML file should go makes that write fail
        std::fs::create_dir(out.path().join("security_report.html")).expect("blocker");

        let summary = pipeline::run(&config).expect("run");
        assert_eq!(summary.written, vec![out.path().join("security_report.json")]);
        assert_eq!(summary.failures.len(), 1);
        assert!(matches!(
            &summary.failures[0],
            PipelineError::WriteFailed { path, .. } if path == &out.path().join("security_report.html")
        ));
        assert_eq!(summary.exit_code(), exit_codes::ERROR);
    }
}
