use std::io::Write;

use oasgen_core::{
    parse_document_file, parse_document_str, validate_document, DecodeOptions, DocumentFormat,
    HttpMethod, ParseError, PathPolicy, Validate,
};

fn petstore_yaml() -> &'static str {
    r#"
openapi: 3.0.3
info:
  title: Petstore
  version: 1.0.0
paths:
  /pets:
    get:
      operationId: listPets
      parameters:
        - name: limit
          in: query
      responses:
        200:
          description: ok
    post:
      operationId: createPet
      requestBody:
        required: true
        content:
          application/json:
            schema:
              $ref: '#/components/schemas/Pet'
      responses:
        "201":
          description: created
  /pets/{petId}:
    parameters:
      - name: petId
        in: path
        required: true
    get:
      operationId: showPetById
      responses:
        "200":
          description: ok
components:
  schemas:
    Pet:
      type: object
"#
}

fn parse(input: &str) -> Result<oasgen_core::ParsedDocument, ParseError> {
    parse_document_str(input, DocumentFormat::Auto, &DecodeOptions::default())
}

#[test]
fn parse_yaml_and_validate_ok() {
    let parsed = parse_document_str(petstore_yaml(), DocumentFormat::Yaml, &DecodeOptions::default())
        .unwrap();
    validate_document(&parsed.document).unwrap();
    assert_eq!(parsed.document.paths.len(), 2);
    assert!(parsed.skipped.is_empty());
}

#[test]
fn numeric_response_codes_become_string_keys() {
    let parsed = parse(petstore_yaml()).unwrap();
    let get = parsed.document.paths["/pets"].get.as_ref().unwrap();
    assert!(get.responses.contains_key("200"));
}

#[test]
fn parse_auto_detects_yaml() {
    let parsed = parse(petstore_yaml()).unwrap();
    assert_eq!(parsed.format, DocumentFormat::Yaml);
}

#[test]
fn parse_json_and_auto_detect() {
    let json = r#"
{
  "openapi": "3.1.0",
  "info": { "title": "Example", "version": "0.0.1" },
  "paths": {
    "/ping": { "get": { "operationId": "ping", "responses": { "200": { "description": "pong" } } } }
  }
}
"#;
    let parsed = parse(json).unwrap();
    assert_eq!(parsed.format, DocumentFormat::Json);
    parsed.document.validate().unwrap();
}

#[test]
fn document_without_paths_has_an_empty_model() {
    let parsed = parse("openapi: 3.1.0\ninfo:\n  title: Empty\n  version: '1'\n").unwrap();
    assert!(parsed.document.paths.is_empty());
    parsed.document.validate().unwrap();
}

#[test]
fn unparseable_input_is_rejected() {
    let err = parse("not: [valid").unwrap_err();
    assert!(matches!(err, ParseError::Yaml(_)), "unexpected error: {err}");
}

#[test]
fn missing_openapi_key_is_a_root_error() {
    let err = parse("info:\n  title: t\n  version: v\n").unwrap_err();
    match err {
        ParseError::Root { key, .. } => assert_eq!(key, "openapi"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn paths_must_be_a_mapping() {
    let err = parse("openapi: 3.0.0\ninfo:\n  title: t\n  version: v\npaths: [1, 2]\n").unwrap_err();
    match err {
        ParseError::Root { key, message } => {
            assert_eq!(key, "paths");
            assert!(message.contains("sequence"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn yaml_merge_keys_are_expanded_into_path_items() {
    let doc = r#"
openapi: 3.0.0
info:
  title: t
  version: v
x-templates:
  read-only: &read_only
    get:
      operationId: readThing
      responses:
        "200":
          description: ok
paths:
  /things:
    <<: *read_only
    post:
      responses:
        "201":
          description: created
"#;
    let parsed = parse(doc).unwrap();
    let item = &parsed.document.paths["/things"];
    assert_eq!(
        item.operations().map(|(m, _)| m).collect::<Vec<_>>(),
        vec![HttpMethod::Get, HttpMethod::Post]
    );
    assert_eq!(
        item.get.as_ref().unwrap().operation_id.as_deref(),
        Some("readThing")
    );
}

#[test]
fn yaml_without_a_json_form_is_reported_as_yaml() {
    let doc = r#"
openapi: 3.0.0
info:
  title: t
  version: v
paths:
  /a:
    get:
      responses:
        ~:
          description: null key
"#;
    let err = parse_document_str(doc, DocumentFormat::Yaml, &DecodeOptions::default()).unwrap_err();
    assert!(matches!(err, ParseError::YamlTree(_)), "unexpected error: {err}");
    assert!(err.to_string().starts_with("YAML document"));
}

const ONE_BAD_PATH: &str = r#"
openapi: 3.0.0
info:
  title: t
  version: v
paths:
  /good:
    get:
      responses:
        "200":
          description: ok
  /bad:
    get: 42
"#;

#[test]
fn malformed_path_aborts_by_default() {
    let err = parse(ONE_BAD_PATH).unwrap_err();
    match err {
        ParseError::Malformed(e) => {
            assert_eq!(e.path, "/bad");
            assert_eq!(e.key, "get");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_path_is_skipped_when_requested() {
    let options = DecodeOptions {
        path_policy: PathPolicy::Skip,
    };
    let parsed = parse_document_str(ONE_BAD_PATH, DocumentFormat::Yaml, &options).unwrap();
    assert!(parsed.document.paths.contains_key("/good"));
    assert!(!parsed.document.paths.contains_key("/bad"));
    assert_eq!(parsed.skipped.len(), 1);
    assert_eq!(parsed.skipped[0].key, "get");
}

#[test]
fn parse_file_uses_extension() {
    let mut f = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("tempfile");
    f.write_all(petstore_yaml().as_bytes()).expect("write");

    let parsed = parse_document_file(f.path(), &DecodeOptions::default()).unwrap();
    assert_eq!(parsed.format, DocumentFormat::Yaml);
    assert_eq!(parsed.document.info.title, "Petstore");
}

#[test]
fn parse_missing_file_is_an_io_error() {
    let err = parse_document_file(
        std::path::Path::new("/definitely/not/here.yaml"),
        &DecodeOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ParseError::Io { .. }));
}

#[test]
fn unsupported_spec_version_is_rejected() {
    let bad = petstore_yaml().replace("openapi: 3.0.3", "openapi: 2.0.0");
    let parsed = parse(&bad).unwrap();
    let err = validate_document(&parsed.document).unwrap_err();
    assert!(err.violations.iter().any(|v| v.path == "$.openapi"));
}

#[test]
fn duplicate_parameters_in_one_list_are_rejected() {
    let doc = r#"
openapi: 3.0.0
info:
  title: t
  version: v
paths:
  /items:
    parameters:
      - name: q
        in: query
      - name: q
        in: query
    get:
      responses:
        "200":
          description: ok
"#;
    let parsed = parse(doc).unwrap();
    let err = validate_document(&parsed.document).unwrap_err();
    assert!(err
        .violations
        .iter()
        .any(|v| v.path == "$.paths['/items'].parameters[1]"
            && v.message.contains("duplicate parameter q (query)")));
}

#[test]
fn same_parameter_at_path_and_operation_level_is_an_override_not_a_duplicate() {
    let doc = r#"
openapi: 3.0.0
info:
  title: t
  version: v
paths:
  /items:
    parameters:
      - name: q
        in: query
    get:
      parameters:
        - name: q
          in: query
          description: narrower
      responses:
        "200":
          description: ok
"#;
    let parsed = parse(doc).unwrap();
    validate_document(&parsed.document).unwrap();
}

#[test]
fn template_segments_need_path_parameters() {
    let doc = r#"
openapi: 3.0.0
info:
  title: t
  version: v
paths:
  /users/{userId}/orders:
    get:
      parameters:
        - name: orderId
          in: path
      responses:
        "200":
          description: ok
"#;
    let parsed = parse(doc).unwrap();
    let err = validate_document(&parsed.document).unwrap_err();
    let messages: Vec<&str> = err.violations.iter().map(|v| v.message.as_str()).collect();
    assert!(messages.iter().any(|m| m.contains("'{userId}'")), "{messages:?}");
    assert!(messages.iter().any(|m| m.contains("'orderId'")), "{messages:?}");
}

#[test]
fn path_parameter_cannot_be_optional() {
    let doc = r#"
openapi: 3.0.0
info:
  title: t
  version: v
paths:
  /users/{id}:
    parameters:
      - name: id
        in: path
        required: false
    get:
      responses:
        "200":
          description: ok
"#;
    let parsed = parse(doc).unwrap();
    let err = validate_document(&parsed.document).unwrap_err();
    assert!(err
        .violations
        .iter()
        .any(|v| v.path == "$.paths['/users/{id}'].parameters[0].required"));
}

#[test]
fn duplicate_operation_ids_are_rejected() {
    let doc = r#"
openapi: 3.0.0
info:
  title: t
  version: v
paths:
  /a:
    get:
      operationId: fetch
      responses:
        "200":
          description: ok
  /b:
    get:
      operationId: fetch
      responses:
        "200":
          description: ok
"#;
    let parsed = parse(doc).unwrap();
    let err = validate_document(&parsed.document).unwrap_err();
    assert!(err
        .violations
        .iter()
        .any(|v| v.path == "$.paths['/b'].get.operationId" && v.message.contains("must be unique")));
}

#[test]
fn operations_need_responses_and_templates_need_a_slash() {
    let doc = r#"
openapi: 3.0.0
info:
  title: ""
  version: v
paths:
  items:
    delete: {}
"#;
    let parsed = parse(doc).unwrap();
    let err = validate_document(&parsed.document).unwrap_err();
    let paths: Vec<&str> = err.violations.iter().map(|v| v.path.as_str()).collect();
    assert!(paths.contains(&"$.info.title"));
    assert!(paths.contains(&"$.paths['items']"));
    assert!(paths.contains(&"$.paths['items'].delete.responses"));
}
