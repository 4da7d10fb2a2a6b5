use heck::ToSnakeCase;

use crate::types::HttpMethod;

/// `operationId` in snake_case when the document has one; otherwise the
/// method followed by the path segments, with `{param}` segments spelled
/// `by_param` (`GET /users/{userId}` becomes `get_users_by_user_id`).
pub(crate) fn function_name(method: HttpMethod, path: &str, operation_id: Option<&str>) -> String {
    if let Some(id) = operation_id.map(str::trim).filter(|id| !id.is_empty()) {
        return id.to_snake_case();
    }

    let mut parts = vec![method.key().to_string()];
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        let part = match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Some(name) => format!("by_{}", name.to_snake_case()),
            None => segment.to_snake_case(),
        };
        if !part.is_empty() {
            parts.push(part);
        }
    }
    parts.join("_")
}
