pub mod contact_gateway_http;

pub use contact_gateway_http::ContactGatewayHttp;
