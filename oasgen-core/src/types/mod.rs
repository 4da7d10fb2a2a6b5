mod common;
mod document;
mod info;
mod media_type;
mod method;
mod parameter;
mod path_item;
mod request_body;
mod response;

pub use common::{AnyValue, Extensions, JsonSchema};
pub use document::OpenApiDocument;
pub use info::Info;
pub use media_type::MediaType;
pub use method::Method;
pub use parameter::{Parameter, ParameterKey, ParameterLocation};
pub use path_item::{HttpMethod, PathItem, UnknownHttpMethod};
pub use request_body::RequestBody;
pub use response::Response;

pub(crate) use common::is_false;
