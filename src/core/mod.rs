pub mod capture;
pub mod client;
pub mod lookup;
pub mod ping;
pub mod returned;
pub mod wire;

pub use crate::domain::model::{Address, CartItem};
pub use crate::domain::ports::{RemoteMethod, Transport};
pub use crate::domain::response::ServiceResponse;
pub use crate::utils::error::Result;
