//! Image handles backing resume previews.

use bytes::Bytes;
use iced::widget::image;
use resumind_core::PreviewFactory;
use resumind_core::preview::PreviewError;
use tracing::debug;

/// Creates iced image handles from fetched preview bytes.
#[derive(Debug, Default)]
pub struct ImageFactory {
    live: usize,
}

impl ImageFactory {
    /// Number of handles created and not yet released.
    pub const fn live(&self) -> usize {
        self.live
    }
}

impl PreviewFactory for ImageFactory {
    type Resource = image::Handle;

    fn create(&mut self, bytes: Bytes) -> Result<image::Handle, PreviewError> {
        let Some(format) = sniff_format(&bytes) else {
            return Err(PreviewError::Unsupported(format!(
                "{} bytes with no known image signature",
                bytes.len()
            )));
        };
        self.live += 1;
        debug!("Created {} preview handle ({} live)", format, self.live);
        Ok(image::Handle::from_bytes(bytes))
    }

    fn release(&mut self, handle: image::Handle) {
        self.live = self.live.saturating_sub(1);
        debug!("Released preview handle {:?} ({} live)", handle.id(), self.live);
    }
}

fn sniff_format(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0x89, b'P', b'N', b'G', ..] => Some("png"),
        [0xFF, 0xD8, 0xFF, ..] => Some("jpeg"),
        [b'G', b'I', b'F', b'8', ..] => Some("gif"),
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some("webp"),
        [b'B', b'M', ..] => Some("bmp"),
        _ => None,
    }
}
