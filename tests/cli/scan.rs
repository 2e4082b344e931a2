use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, REPORT_FILE};

fn report_entry(file: &str, text: &str) -> String {
    format!("File: {}\nUnwrapped Text: {}\n\n", file, text)
}

#[test]
fn test_scan_writes_report() -> Result<()> {
    let test = CliTest::with_file(
        "src/components/Greeting.tsx",
        r#"import { useTranslations } from "next-intl";

export function Greeting() {
    const t = useTranslations();
    return (
        <section className="card">
            <h1>{t("greeting.title")}</h1>
            <p>Welcome back</p>
            <button title="Submit" />
            <a href="https://example.com/docs">{t("docs")}</a>
        </section>
    );
}
"#,
    )?;

    let output = test.scan_command().arg("src").output()?;
    assert!(output.status.success());

    let file = test.path("src/components/Greeting.tsx");
    assert_eq!(
        test.read_report()?,
        [
            report_entry(&file, "greeting.title"),
            report_entry(&file, "Welcome back"),
            report_entry(&file, "Submit"),
            report_entry(&file, "docs"),
        ]
        .concat()
    );

    Ok(())
}

#[test]
fn test_scan_files_in_sorted_order() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/z.jsx", "<p>Zed</p>")?;
    test.write_file("src/b/c.tsx", "<p>Nested</p>")?;
    test.write_file("src/a.tsx", "<p>First</p>")?;
    test.write_file("src/util.ts", r#"export const label = "Not scanned";"#)?;

    let output = test.scan_command().arg("src").output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_report()?,
        [
            report_entry(&test.path("src/a.tsx"), "First"),
            report_entry(&test.path("src/b/c.tsx"), "Nested"),
            report_entry(&test.path("src/z.jsx"), "Zed"),
        ]
        .concat()
    );

    Ok(())
}

#[test]
fn test_scan_continues_after_parse_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/a_broken.tsx", "export const x = <div>")?;
    test.write_file("src/b.tsx", "<p>Kept</p>")?;

    let output = test.scan_command().arg("src").output()?;
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "stderr: {}", stderr);
    assert!(stderr.contains("a_broken.tsx"), "stderr: {}", stderr);
    assert!(stderr.contains("parse-error"), "stderr: {}", stderr);

    assert_eq!(
        test.read_report()?,
        report_entry(&test.path("src/b.tsx"), "Kept")
    );

    Ok(())
}

#[test]
fn test_scan_without_path_fails() -> Result<()> {
    let test = CliTest::with_file("src/a.tsx", "<p>Hello</p>")?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please provide a directory path to search."));
    assert!(!test.root().join(REPORT_FILE).exists());

    Ok(())
}

#[test]
fn test_scan_nonexistent_path_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.scan_command().arg("missing").output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(&format!(
        "The provided path does not exist: {}",
        test.path("missing")
    )));
    assert!(!test.root().join(REPORT_FILE).exists());

    Ok(())
}

#[test]
fn test_scan_without_findings_writes_empty_report() -> Result<()> {
    let test = CliTest::with_file(
        "src/page.tsx",
        r#"export default function Page({ count }) { return <p className="count">{count}</p>; }"#,
    )?;

    let output = test.scan_command().arg("src").output()?;
    assert!(output.status.success());
    assert_eq!(test.read_report()?, "");

    let root = regex::escape(&test.root().display().to_string());
    insta::with_settings!({ filters => vec![(root.as_str(), "[ROOT]")] }, {
        assert_snapshot!(
            String::from_utf8_lossy(&output.stdout),
            @"Search complete. Results written to [ROOT]/unwrapped_text_results.txt"
        );
    });

    Ok(())
}

#[test]
fn test_scan_parent_relative_path_is_normalized() -> Result<()> {
    let test = CliTest::with_file("app/src/a.tsx", "<p>Hello</p>")?;
    test.write_file("app/lib/.keep", "")?;

    let output = test
        .scan_command()
        .current_dir(test.root().join("app/lib"))
        .args(["../src", "--output", "../../report.txt"])
        .output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file("report.txt")?,
        report_entry(&test.path("app/src/a.tsx"), "Hello")
    );

    Ok(())
}

#[test]
fn test_scan_output_flag() -> Result<()> {
    let test = CliTest::with_file("src/a.tsx", "<p>Hello</p>")?;

    let output = test
        .scan_command()
        .args(["src", "--output", "i18n-report.txt"])
        .output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file("i18n-report.txt")?,
        report_entry(&test.path("src/a.tsx"), "Hello")
    );
    assert!(!test.root().join(REPORT_FILE).exists());

    Ok(())
}

#[test]
fn test_scan_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".unwraptrc.json",
        r#"{
  "extensions": ["ts"],
  "ignores": ["**/legacy/**"],
  "output": "from-config.txt"
}"#,
    )?;
    test.write_file("src/a.ts", r#"export const greeting = "Hello";"#)?;
    test.write_file("src/legacy/b.ts", r#"export const old = "Old";"#)?;
    test.write_file("src/c.tsx", "<p>Not scanned</p>")?;

    let output = test.scan_command().arg("src").output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file("from-config.txt")?,
        report_entry(&test.path("src/a.ts"), "Hello")
    );

    Ok(())
}

#[test]
fn test_scan_invalid_config_fails() -> Result<()> {
    let test = CliTest::with_file(".unwraptrc.json", r#"{ "extensions": [] }"#)?;
    test.write_file("src/a.tsx", "<p>Hello</p>")?;

    let output = test.scan_command().arg("src").output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("extensions"), "stderr: {}", stderr);

    Ok(())
}

#[test]
fn test_scan_verbose_prints_findings() -> Result<()> {
    let test = CliTest::with_file(
        "src/a.tsx",
        "export const A = () => <p>Welcome back</p>;",
    )?;

    let output = test.scan_command().args(["src", "-v"]).output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("warning: \"Welcome back\"  unwrapped"),
        "stdout: {}",
        stdout
    );
    assert!(
        stdout.contains(&format!("--> {}:1:27", test.path("src/a.tsx"))),
        "stdout: {}",
        stdout
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("note: Checked 1 file, found 1 unwrapped text"));

    Ok(())
}

#[test]
fn test_scan_is_repeatable() -> Result<()> {
    let test = CliTest::with_file("src/a.tsx", "<div><p>Same</p><p>Same</p></div>")?;

    test.scan_command().arg("src").output()?;
    let first = test.read_report()?;
    test.scan_command().arg("src").output()?;
    let second = test.read_report()?;

    assert_eq!(first, second);
    assert_eq!(first.matches("Unwrapped Text: Same").count(), 2);

    Ok(())
}
