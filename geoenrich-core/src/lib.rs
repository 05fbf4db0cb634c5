pub mod entities;
pub mod gateways;
pub mod observer;
pub mod pipeline;

mod error;

pub use self::error::Error;

pub type Result<T> = std::result::Result<T, Error>;
