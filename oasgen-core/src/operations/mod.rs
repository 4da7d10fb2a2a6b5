mod model;
mod naming;

use crate::compose::compose_parameters;
use crate::types::{HttpMethod, Method, OpenApiDocument, Parameter, PathItem};

pub use model::{OperationSummary, ParameterSummary};

/// One operation as a generator sees it: where it lives, and the parameter
/// list after path-level parameters have been merged in.
#[derive(Debug, Clone)]
pub struct OperationView<'a> {
    pub path: &'a str,
    pub method: HttpMethod,
    pub operation: &'a Method,
    pub parameters: Vec<&'a Parameter>,
}

impl<'a> OperationView<'a> {
    fn new(path: &'a str, item: &'a PathItem, method: HttpMethod, operation: &'a Method) -> Self {
        Self {
            path,
            method,
            operation,
            parameters: compose_parameters(&item.parameters, &operation.parameters),
        }
    }

    /// Identifier for the generated client function.
    pub fn function_name(&self) -> String {
        naming::function_name(self.method, self.path, self.operation.operation_id.as_deref())
    }

    pub fn summary(&self) -> OperationSummary {
        OperationSummary::from_view(self)
    }
}

/// Every operation in the document: path templates in sorted order, and
/// within a path, methods in [`HttpMethod::ALL`] order. Methods a path item
/// does not declare are skipped.
pub fn collect_operations(doc: &OpenApiDocument) -> Vec<OperationView<'_>> {
    doc.paths
        .iter()
        .flat_map(|(template, item)| {
            item.operations()
                .map(move |(method, operation)| OperationView::new(template, item, method, operation))
        })
        .collect()
}

pub fn find_operation<'a>(
    doc: &'a OpenApiDocument,
    path: &str,
    method: HttpMethod,
) -> Option<OperationView<'a>> {
    let (template, item) = doc.paths.get_key_value(path)?;
    let operation = item.method(method)?;
    Some(OperationView::new(template, item, method, operation))
}
