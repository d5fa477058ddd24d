//! Integration tests for report generation and the `report` command.

use ehr_compliance::{
    Catalog, ComplianceSummary, ReportConfig, ReportFormat,
    cli::{ReportCommandConfig, exit_codes, run_report},
    reports::{ReportMetadata, create_reporter, create_reporter_with_options},
};
use std::path::Path;
use tempfile::TempDir;

fn generate(format: ReportFormat, config: &ReportConfig) -> String {
    let catalog = Catalog::builtin();
    let summary = ComplianceSummary::from_catalog(&catalog);
    create_reporter_with_options(format, false)
        .generate(&catalog, &summary, config)
        .expect("report generation should succeed")
}

#[test]
fn test_every_format_reports_the_same_figures() {
    let summary_text = generate(ReportFormat::Summary, &ReportConfig::default());
    assert!(summary_text.contains("81% (good)"));
    assert!(summary_text.contains("14/17"));

    let markdown = generate(ReportFormat::Markdown, &ReportConfig::default());
    assert!(markdown.contains("| Overall score | 81% (good) |"));
    assert!(markdown.contains("| Checks passed | 14/17 |"));
    assert!(markdown.contains("| ABDM readiness | 88% |"));

    let json: serde_json::Value =
        serde_json::from_str(&generate(ReportFormat::Json, &ReportConfig::default())).unwrap();
    assert_eq!(json["summary"]["overall_score"], 81);
    assert_eq!(json["summary"]["success_rate"], 82);
}

#[test]
fn test_reports_list_layers_in_review_order() {
    let markdown = generate(ReportFormat::Markdown, &ReportConfig::default());
    let positions: Vec<usize> = [
        "### Privacy & Policy Layer",
        "### Interoperability Layer",
        "### Security Layer",
        "### ABDM Integration Layer",
    ]
    .iter()
    .map(|heading| markdown.find(heading).expect("layer heading present"))
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_recommendations_ordered_by_severity() {
    let markdown = generate(ReportFormat::Markdown, &ReportConfig::default());
    let high = markdown.find("1. **high**").unwrap();
    let medium = markdown.find("2. **medium**").unwrap();
    let low = markdown.find("3. **low**").unwrap();
    assert!(high < medium && medium < low);
}

#[test]
fn test_document_name_in_metadata() {
    let mut config = ReportConfig::default();
    config.metadata = ReportMetadata::new().with_document(Some("patient_record.pdf".into()));
    let json: serde_json::Value =
        serde_json::from_str(&generate(ReportFormat::Json, &config)).unwrap();
    assert_eq!(json["metadata"]["document"], "patient_record.pdf");
}

#[test]
fn test_colored_summary_has_ansi_codes() {
    let catalog = Catalog::builtin();
    let summary = ComplianceSummary::from_catalog(&catalog);
    let text = create_reporter(ReportFormat::Summary)
        .generate(&catalog, &summary, &ReportConfig::default())
        .unwrap();
    assert!(text.contains("\x1b["));
    assert!(!generate(ReportFormat::Summary, &ReportConfig::default()).contains("\x1b["));
}

#[test]
fn test_write_report_to_writer() {
    let catalog = Catalog::builtin();
    let summary = ComplianceSummary::from_catalog(&catalog);
    let mut buffer = Vec::new();
    create_reporter(ReportFormat::Markdown)
        .write_report(&catalog, &summary, &ReportConfig::default(), &mut buffer)
        .unwrap();
    let text = String::from_utf8(buffer).unwrap();
    assert!(text.starts_with("# EHR Compliance Report"));
}

fn run_to_file(dir: &Path, format: ReportFormat, min_score: Option<u8>) -> i32 {
    run_report(
        &Catalog::builtin(),
        ReportCommandConfig {
            format,
            output_file: Some(dir.join(format!("report.{}", format.extension()))),
            min_score,
            quiet: true,
            ..ReportCommandConfig::default()
        },
    )
    .expect("report command should succeed")
}

#[test]
fn test_report_command_min_score_gate() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(run_to_file(tmp.path(), ReportFormat::Summary, None), exit_codes::SUCCESS);
    assert_eq!(run_to_file(tmp.path(), ReportFormat::Summary, Some(81)), exit_codes::SUCCESS);
    assert_eq!(
        run_to_file(tmp.path(), ReportFormat::Summary, Some(90)),
        exit_codes::BELOW_MIN_SCORE
    );
}

#[test]
fn test_report_command_summary_only() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("summary.json");
    run_report(
        &Catalog::builtin(),
        ReportCommandConfig {
            format: ReportFormat::Json,
            output_file: Some(path.clone()),
            summary_only: true,
            quiet: true,
            ..ReportCommandConfig::default()
        },
    )
    .unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert!(json["layers"][0].get("details").is_none());
}
