//! Per-operation parameter lists.
//!
//! A path item declares parameters once for all of its operations; an
//! operation may redeclare any of them. The effective list an operation is
//! generated with is the shared list, with each redeclared entry swapped for
//! the operation's version in place, followed by the operation's remaining
//! parameters.

use std::collections::HashMap;

use crate::types::{HttpMethod, Parameter, ParameterKey, PathItem};

/// Composes `shared` (path-level) and `own` (operation-level) parameters.
///
/// Entries are matched by [`ParameterKey`]. A later entry with a key already
/// seen replaces the earlier one at the earlier one's position, so an
/// operation overrides the path level and, within one list, the last
/// duplicate wins.
pub fn compose_parameters<'a>(shared: &'a [Parameter], own: &'a [Parameter]) -> Vec<&'a Parameter> {
    let mut out: Vec<&'a Parameter> = Vec::with_capacity(shared.len() + own.len());
    let mut positions: HashMap<ParameterKey<'a>, usize> = HashMap::new();

    for param in shared.iter().chain(own) {
        let key = param.key();
        if let Some(&idx) = positions.get(&key) {
            out[idx] = param;
            continue;
        }
        positions.insert(key, out.len());
        out.push(param);
    }
    out
}

impl PathItem {
    /// The parameters `method` is generated with, or `None` if this path item
    /// has no such operation.
    pub fn effective_parameters(&self, method: HttpMethod) -> Option<Vec<&Parameter>> {
        self.method(method)
            .map(|op| compose_parameters(&self.parameters, &op.parameters))
    }
}
