use std::fmt;
use std::str::FromStr;

use crate::types::{Method, Parameter};

/// HTTP verbs a path item can carry, in the order generators visit them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
    ];

    /// The key used for this method inside a path item node.
    pub fn key(self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Patch => "patch",
            HttpMethod::Delete => "delete",
        }
    }

    pub fn as_upper(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_upper())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported HTTP method '{0}' (expected one of get, post, put, patch, delete)")]
pub struct UnknownHttpMethod(pub String);

impl FromStr for HttpMethod {
    type Err = UnknownHttpMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::ALL
            .into_iter()
            .find(|m| m.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownHttpMethod(s.to_string()))
    }
}

/// All operations available under one path template, plus the parameters
/// they share.
///
/// Built once by [`PathItem::decode`] and read-only afterwards; see
/// [`PathItem::effective_parameters`] for the per-operation parameter view.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct PathItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Method>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Method>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Method>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Method>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Method>,

    /// Shared by every operation under this path, in document order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
}

impl PathItem {
    pub fn method(&self, method: HttpMethod) -> Option<&Method> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
        }
    }

    pub(crate) fn slot_mut(&mut self, method: HttpMethod) -> &mut Option<Method> {
        match method {
            HttpMethod::Get => &mut self.get,
            HttpMethod::Post => &mut self.post,
            HttpMethod::Put => &mut self.put,
            HttpMethod::Patch => &mut self.patch,
            HttpMethod::Delete => &mut self.delete,
        }
    }

    /// Present operations in [`HttpMethod::ALL`] order.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Method)> + '_ {
        HttpMethod::ALL
            .into_iter()
            .filter_map(move |m| self.method(m).map(|op| (m, op)))
    }
}
