use std::collections::BTreeSet;

use crate::compose::compose_parameters;
use crate::types::{ParameterLocation, PathItem};
use crate::validate::rules::parameters::validate_parameter_list;
use crate::validate::validator::{Validator, TEMPLATE_PARAM_RE};

pub(crate) fn validate_path_item(v: &mut Validator, template: &str, item: &PathItem, path: &str) {
    validate_parameter_list(v, &format!("{path}.parameters"), &item.parameters);

    let template_params: BTreeSet<&str> = TEMPLATE_PARAM_RE
        .captures_iter(template)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect();

    for (method, op) in item.operations() {
        let op_path = format!("{path}.{}", method.key());
        validate_parameter_list(v, &format!("{op_path}.parameters"), &op.parameters);

        if op.responses.is_empty() {
            v.push(format!("{op_path}.responses"), "must declare at least one response");
        }

        let declared: BTreeSet<&str> = compose_parameters(&item.parameters, &op.parameters)
            .into_iter()
            .filter(|p| p.location == ParameterLocation::Path)
            .map(|p| p.name.as_str())
            .collect();

        for name in template_params.difference(&declared) {
            v.push(
                op_path.as_str(),
                format!("path template segment '{{{name}}}' has no matching path parameter"),
            );
        }
        for name in declared.difference(&template_params) {
            v.push(
                op_path.as_str(),
                format!("path parameter '{name}' does not appear in the path template"),
            );
        }
    }
}
