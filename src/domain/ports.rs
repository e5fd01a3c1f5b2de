use crate::domain::response::ServiceResponse;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fmt;

/// 服務合約上的遠端程序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteMethod {
    Ping,
    Lookup,
    AuthorizedWithCapture,
    Returned,
}

impl RemoteMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RemoteMethod::Ping => "Ping",
            RemoteMethod::Lookup => "Lookup",
            RemoteMethod::AuthorizedWithCapture => "AuthorizedWithCapture",
            RemoteMethod::Returned => "Returned",
        }
    }
}

impl fmt::Display for RemoteMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Invokes a named remote procedure with keyword-style arguments.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn call(&self, method: RemoteMethod, payload: serde_json::Value)
        -> Result<ServiceResponse>;
}
