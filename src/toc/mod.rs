pub mod extract;
pub mod platform;
pub mod render;
pub mod section;
pub mod transform;
pub mod types;

pub use extract::normalize_ranks;
pub use platform::Platform;
pub use transform::{get_all_headers, transform};
pub use types::{Header, TransformOptions, TransformResult};
