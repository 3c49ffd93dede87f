pub mod icon_image;
pub mod input_source;
pub mod rounded_mask;

// --- public re-exports ---
pub use icon_image::{IconError, IconImage};
pub use input_source::directory_path::DirectoryPath;
pub use rounded_mask::{CornerRadius, RoundedMask};
