#![forbid(unsafe_code)]

pub mod compose;
mod decode;
pub mod error;
pub mod operations;
pub mod parser;
pub mod types;
pub mod validate;

pub use crate::compose::compose_parameters;
pub use crate::error::{MalformedDocumentError, OasgenError, ParseError, ValidationError, Violation};
pub use crate::operations::{
    collect_operations, find_operation, OperationSummary, OperationView, ParameterSummary,
};
pub use crate::parser::{
    parse_document_file, parse_document_str, DecodeOptions, DocumentFormat, ParsedDocument,
    PathPolicy,
};
pub use crate::types::{HttpMethod, Method, OpenApiDocument, Parameter, ParameterLocation, PathItem};
pub use crate::validate::{validate_document, Validate};
