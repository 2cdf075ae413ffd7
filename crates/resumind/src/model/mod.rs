//! Shell-side state: settings, drop batching, the staged upload and
//! preview image handles.

mod drop_batch;
mod preview;
mod settings;
mod staged;

pub use drop_batch::{DropBatch, DropProgress};
pub use preview::ImageFactory;
pub use settings::{AppSettings, load_settings, save_settings, settings_path};
pub use staged::StagedUpload;
