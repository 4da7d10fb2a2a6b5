use std::collections::HashMap;

use crate::types::OpenApiDocument;
use crate::validate::rules::path_item;
use crate::validate::validator::Validator;

pub(crate) fn validate_document(v: &mut Validator, doc: &OpenApiDocument) {
    v.validate_spec_version("$.openapi", &doc.openapi);
    v.validate_non_empty("$.info.title", &doc.info.title);
    v.validate_non_empty("$.info.version", &doc.info.version);

    // operationId -> location of its first use
    let mut operation_ids = HashMap::<&str, String>::new();
    for (template, item) in &doc.paths {
        let path = format!("$.paths['{template}']");
        if !template.starts_with('/') {
            v.push(path.as_str(), "path template must start with '/'");
        }

        path_item::validate_path_item(v, template, item, &path);

        for (method, op) in item.operations() {
            let Some(id) = op.operation_id.as_deref() else {
                continue;
            };
            let op_path = format!("{path}.{}", method.key());
            if id.trim().is_empty() {
                v.push(format!("{op_path}.operationId"), "must not be empty");
                continue;
            }
            if let Some(first) = operation_ids.get(id) {
                v.push(
                    format!("{op_path}.operationId"),
                    format!("must be unique (already used at {first})"),
                );
                continue;
            }
            operation_ids.insert(id, op_path);
        }
    }
}
