pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{exit_code, CartFile, Cli, Command};

pub use adapters::http::HttpTransport;
pub use config::ServiceConfig;
pub use core::{
    capture::CaptureOperation,
    client::{Operation, RequestClient},
    lookup::LookupOperation,
    ping::PingOperation,
    returned::ReturnOperation,
};
pub use domain::{
    model::{Address, CartItem},
    ports::{RemoteMethod, Transport},
    response::{ResponseType, ServiceResponse},
};
pub use utils::error::{Result, TaxCloudError};
