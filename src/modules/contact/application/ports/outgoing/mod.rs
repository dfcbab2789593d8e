pub mod contact_gateway;

pub use contact_gateway::{ContactGateway, ContactGatewayError};
