pub mod client;
pub mod error;
pub mod transform;
pub mod types;

pub use client::UpstreamClient;
pub use error::UpstreamError;
pub use transform::{find_product, transform_inventory, transform_product, transform_products};
pub use types::{UpstreamImage, UpstreamProduct, UpstreamVariant};
