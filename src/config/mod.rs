mod loader;
mod schema;

pub use schema::{Config, GatewayConfig};
