mod images;

pub use images::{prepare_image, PrepareImageError};
