use assert_cmd::Command;
use tempfile::NamedTempFile;

fn write_temp(contents: &str, suffix: &str) -> NamedTempFile {
    let mut f = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("tempfile");
    std::io::Write::write_all(&mut f, contents.as_bytes()).expect("write");
    f
}

fn oasgen() -> Command {
    Command::cargo_bin("oasgen").unwrap()
}

const ITEMS: &str = r#"
openapi: 3.0.3
info:
  title: Items
  version: 1.0.0
paths:
  /items/{id}:
    parameters:
      - name: id
        in: path
        required: true
      - name: limit
        in: query
    get:
      operationId: getItem
      parameters:
        - name: limit
          in: query
          required: true
      responses:
        "200":
          description: ok
    delete:
      responses:
        "204":
          description: deleted
"#;

#[test]
fn validate_command_returns_0_for_valid_doc() {
    let f = write_temp(ITEMS, ".yaml");
    oasgen()
        .args(["validate", f.path().to_string_lossy().as_ref()])
        .assert()
        .success();
}

#[test]
fn validate_command_returns_2_for_invalid_doc() {
    let f = write_temp(&ITEMS.replace("openapi: 3.0.3", "openapi: 2.0.0"), ".yaml");
    oasgen()
        .args(["validate", f.path().to_string_lossy().as_ref()])
        .assert()
        .code(2); // VALIDATION_FAILED
}

#[test]
fn validate_command_returns_2_for_malformed_path_item() {
    let doc = ITEMS.replace(
        "    delete:\n      responses:\n        \"204\":\n          description: deleted\n",
        "    delete: true\n",
    );
    let f = write_temp(&doc, ".yaml");
    let out = oasgen()
        .args([
            "validate",
            f.path().to_string_lossy().as_ref(),
            "--format",
            "json",
        ])
        .assert()
        .code(2)
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&out);
    assert!(stderr.contains("key 'delete'"), "stderr: {stderr}");
}

#[test]
fn skip_malformed_keeps_the_rest_of_the_document() {
    let doc = format!("{ITEMS}  /broken:\n    parameters: nope\n");
    let f = write_temp(&doc, ".yaml");
    let out = oasgen()
        .args([
            "validate",
            f.path().to_string_lossy().as_ref(),
            "--skip-malformed",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let result: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(result["valid"], true);
    assert_eq!(result["paths"], 1);
    assert_eq!(result["skipped"].as_array().unwrap().len(), 1);
}

#[test]
fn validate_command_returns_4_for_missing_file() {
    oasgen()
        .args(["validate", "/definitely/not/here.yaml"])
        .assert()
        .code(4); // RUNTIME_ERROR
}

#[test]
fn paths_command_lists_methods() {
    let f = write_temp(ITEMS, ".yaml");
    oasgen()
        .args(["paths", f.path().to_string_lossy().as_ref()])
        .assert()
        .success()
        .stdout("/items/{id} GET,DELETE\n");
}

#[test]
fn operations_command_outputs_effective_parameters() {
    let f = write_temp(ITEMS, ".yaml");
    let out = oasgen()
        .args([
            "operations",
            f.path().to_string_lossy().as_ref(),
            "--method",
            "get",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let ops: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let ops = ops.as_array().unwrap();
    assert_eq!(ops.len(), 1);
    assert_eq!(ops[0]["function_name"], "get_item");
    assert_eq!(
        ops[0]["parameters"],
        serde_json::json!([
            { "name": "id", "in": "path", "required": true },
            { "name": "limit", "in": "query", "required": true }
        ])
    );
}

#[test]
fn operations_command_reports_unknown_path() {
    let f = write_temp(ITEMS, ".yaml");
    oasgen()
        .args([
            "operations",
            f.path().to_string_lossy().as_ref(),
            "--path",
            "/nope",
        ])
        .assert()
        .code(3); // NOT_FOUND
}

#[test]
fn operations_command_rejects_unsupported_method() {
    let f = write_temp(ITEMS, ".yaml");
    oasgen()
        .args([
            "operations",
            f.path().to_string_lossy().as_ref(),
            "--method",
            "trace",
        ])
        .assert()
        .failure();
}
