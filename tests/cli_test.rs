//! Integration tests for the meshlint binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const BOOKINFO: &str = r#"# bookinfo sample
apiVersion: networking.istio.io/v1alpha3
kind: VirtualService
metadata:
  name: reviews
  namespace: bookinfo
spec:
  hosts:
    - reviews
  gateways:
    - bookinfo-gateway
  http:
    - route:
        - destination:
            host: ratings
            subset: v2
---
apiVersion: networking.istio.io/v1alpha3
kind: DestinationRule
metadata:
  name: ratings
  namespace: bookinfo
spec:
  host: ratings
  subsets:
    - name: v1
      labels:
        version: v1
---
apiVersion: v1
kind: Pod
metadata:
  name: productpage
  namespace: bookinfo
spec:
  securityContext:
    runAsUser: 1337
  containers:
    - name: productpage
      image: productpage:v1
"#;

const CLEAN: &str = r#"apiVersion: networking.istio.io/v1alpha3
kind: VirtualService
metadata:
  name: reviews
spec:
  hosts: [reviews]
  http:
    - route:
        - destination:
            host: reviews
"#;

fn setup(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(temp.path().join(name), content).unwrap();
    }
    temp
}

fn meshlint(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("meshlint"));
    cmd.current_dir(temp.path());
    cmd.env_remove("MESHLINT_NAMESPACE");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    meshlint(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    meshlint(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn analyze_reports_issues_in_order() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup(&[("bookinfo.yaml", BOOKINFO)]);
    let output = meshlint(&temp)
        .args(["analyze", "bookinfo.yaml"])
        .assert()
        .code(79)
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output)?;
    insta::assert_snapshot!(stdout, @r#"
    Warning [IST0144] (Pod bookinfo/productpage bookinfo.yaml:30) User ID (UID) 1337 is reserved for the sidecar proxy.
    Error [IST0101] (VirtualService bookinfo/reviews bookinfo.yaml:11) Referenced gateway not found: "bookinfo-gateway"
    Error [IST0101] (VirtualService bookinfo/reviews bookinfo.yaml:15) Referenced host+subset in destinationrule not found: "ratings+v2"
    "#);
    Ok(())
}

#[test]
fn analyze_clean_input_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup(&[("vs.yaml", CLEAN)]);
    meshlint(&temp)
        .args(["analyze", "vs.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No validation issues found when analyzing 1 resource(s).",
        ));
    Ok(())
}

#[test]
fn analyze_walks_directories() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup(&[]);
    let manifests = temp.path().join("manifests");
    fs::create_dir_all(manifests.join("nested"))?;
    fs::write(manifests.join("vs.yaml"), CLEAN)?;
    fs::write(
        manifests.join("nested").join("dr.yml"),
        "apiVersion: networking.istio.io/v1alpha3\nkind: DestinationRule\nmetadata:\n  name: reviews\nspec:\n  host: reviews\n",
    )?;
    fs::write(manifests.join("README.md"), "not a manifest")?;

    meshlint(&temp)
        .args(["analyze", "manifests"])
        .assert()
        .success()
        .stdout(predicate::str::contains("analyzing 2 resource(s)"));
    Ok(())
}

#[test]
fn analyze_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup(&[("bookinfo.yaml", BOOKINFO)]);
    let output = meshlint(&temp)
        .args(["analyze", "bookinfo.yaml", "-o", "json"])
        .assert()
        .code(79)
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output)?;
    let messages = value.as_array().unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2]["code"], "IST0101");
    assert_eq!(messages[2]["level"], "Error");
    assert_eq!(messages[2]["origin"], "VirtualService bookinfo/reviews");
    assert_eq!(messages[2]["reference"], "bookinfo.yaml:15");
    assert_eq!(
        messages[2]["documentationUrl"],
        "https://istio.io/latest/docs/reference/config/analysis/ist0101/?ref=meshlint-analyze"
    );
    Ok(())
}

#[test]
fn analyze_yaml_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup(&[("bookinfo.yaml", BOOKINFO)]);
    meshlint(&temp)
        .args(["analyze", "bookinfo.yaml", "--output", "yaml"])
        .assert()
        .code(79)
        .stdout(predicate::str::contains("- code: IST0144"))
        .stdout(predicate::str::contains("reference: bookinfo.yaml:11"));
    Ok(())
}

#[test]
fn failure_threshold_controls_exit_status() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup(&[("bookinfo.yaml", BOOKINFO)]);
    meshlint(&temp)
        .args([
            "analyze",
            "bookinfo.yaml",
            "--suppress",
            "IST0101=VirtualService bookinfo/*",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("IST0144"))
        .stdout(predicate::str::contains("IST0101").not());

    meshlint(&temp)
        .args([
            "analyze",
            "bookinfo.yaml",
            "--suppress",
            "IST0101=*",
            "--failure-threshold",
            "warning",
        ])
        .assert()
        .code(79);
    Ok(())
}

#[test]
fn output_threshold_hides_warnings() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup(&[("bookinfo.yaml", BOOKINFO)]);
    meshlint(&temp)
        .args(["analyze", "bookinfo.yaml", "--output-threshold", "error"])
        .assert()
        .code(79)
        .stdout(predicate::str::contains("IST0144").not())
        .stdout(predicate::str::contains("IST0101"));
    Ok(())
}

#[test]
fn settings_file_applies_suppressions() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup(&[
        ("bookinfo.yaml", BOOKINFO),
        (
            ".meshlint.yml",
            "suppress:\n  - code: IST0101\n    resource: \"VirtualService *\"\n",
        ),
    ]);
    meshlint(&temp)
        .args(["analyze", "bookinfo.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("IST0101").not());
    Ok(())
}

#[test]
fn parse_error_exits_with_data_status() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup(&[("bad.yaml", "kind: [\n")]);
    meshlint(&temp)
        .args(["analyze", "bad.yaml"])
        .assert()
        .code(65)
        .stderr(predicate::str::contains("bad.yaml"));
    Ok(())
}

#[test]
fn missing_path_exits_with_data_status() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    meshlint(&temp)
        .args(["analyze", "nope.yaml"])
        .assert()
        .code(65);
    Ok(())
}

#[test]
fn duplicate_resource_exits_with_data_status() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup(&[("a.yaml", CLEAN), ("b.yaml", CLEAN)]);
    meshlint(&temp)
        .args(["analyze", "a.yaml", "b.yaml"])
        .assert()
        .code(65)
        .stderr(predicate::str::contains("Duplicate"));
    Ok(())
}

#[test]
fn bad_flags_exit_with_usage_status() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup(&[("vs.yaml", CLEAN)]);
    meshlint(&temp).args(["analyze"]).assert().code(64);
    meshlint(&temp)
        .args(["analyze", "vs.yaml", "--output-threshold", "loud"])
        .assert()
        .code(64);
    meshlint(&temp)
        .args(["analyze", "vs.yaml", "--suppress", "IST0101"])
        .assert()
        .code(64);
    Ok(())
}

#[test]
fn namespace_flag_sets_default_namespace() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup(&[(
        "vs.yaml",
        "apiVersion: networking.istio.io/v1alpha3\nkind: VirtualService\nmetadata:\n  name: reviews\nspec:\n  gateways: [gw]\n",
    )]);
    meshlint(&temp)
        .args(["analyze", "vs.yaml", "-n", "shop"])
        .assert()
        .code(79)
        .stdout(predicate::str::contains("VirtualService shop/reviews"));
    Ok(())
}

#[test]
fn analyzers_lists_builtins() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    meshlint(&temp)
        .arg("analyzers")
        .assert()
        .success()
        .stdout(predicate::str::contains("applicationUID.Analyzer"))
        .stdout(predicate::str::contains("virtualservice.DestinationRuleAnalyzer"))
        .stdout(predicate::str::contains("virtualservice.GatewayAnalyzer"));
    Ok(())
}
