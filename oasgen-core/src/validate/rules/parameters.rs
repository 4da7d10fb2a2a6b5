use std::collections::HashSet;

use crate::types::{Parameter, ParameterKey, ParameterLocation};
use crate::validate::validator::Validator;

pub(crate) fn validate_parameter_list(v: &mut Validator, path: &str, params: &[Parameter]) {
    let mut seen = HashSet::<ParameterKey<'_>>::new();
    for (idx, p) in params.iter().enumerate() {
        let ipath = format!("{path}[{idx}]");
        if p.name.trim().is_empty() {
            v.push(format!("{ipath}.name"), "must not be empty");
        }
        if p.location == ParameterLocation::Path && p.required == Some(false) {
            v.push(
                format!("{ipath}.required"),
                "must be true for path parameters",
            );
        }
        if !seen.insert(p.key()) {
            v.push(
                ipath,
                format!("duplicate parameter {} (unique by name + in)", p.key()),
            );
        }
    }
}
