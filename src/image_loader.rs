use egui::ColorImage;
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use std::sync::Arc;

use crate::element::{ImageId, ImageSource};
use crate::error::ImageLoadError;
use crate::event::CanvasEvent;

type LoadResult = (ImageId, Result<ColorImage, ImageLoadError>);

/// Decodes background images away from the UI thread.
///
/// Completions are queued on a channel and only surface when the host calls
/// [`ImageLoader::poll`], so they are handled between pointer events like any
/// other [`CanvasEvent`].
pub struct ImageLoader {
    sender: UnboundedSender<LoadResult>,
    receiver: UnboundedReceiver<LoadResult>,
    pending: usize,
    repaint: Option<egui::Context>,
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ImageLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageLoader")
            .field("pending", &self.pending)
            .finish()
    }
}

impl ImageLoader {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded();
        Self {
            sender,
            receiver,
            pending: 0,
            repaint: None,
        }
    }

    /// Wake the egui event loop whenever a load finishes
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    /// Number of loads that have not been polled yet
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Start decoding `source` for the background `id`
    pub fn load(&mut self, id: ImageId, source: ImageSource) {
        log::info!("Loading background {} from {}", id, source.name());
        self.pending += 1;

        let sender = self.sender.clone();
        let repaint = self.repaint.clone();
        let job = move || {
            let result = decode(&source);
            if sender.unbounded_send((id, result)).is_err() {
                log::debug!("Image loader dropped before {} finished", id);
            }
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        };

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(job);

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move { job() });
    }

    /// Collect finished loads as events. Failed loads are logged and dropped;
    /// their backgrounds simply never become ready.
    pub fn poll(&mut self) -> Vec<CanvasEvent> {
        let mut events = Vec::new();

        while let Ok(Some((id, result))) = self.receiver.try_next() {
            self.pending = self.pending.saturating_sub(1);
            match result {
                Ok(pixels) => {
                    log::debug!("Decoded background {}: {}x{}", id, pixels.size[0], pixels.size[1]);
                    events.push(CanvasEvent::ImageLoaded {
                        id,
                        pixels: Arc::new(pixels),
                    });
                }
                Err(err) => log::warn!("Failed to load background {}: {}", id, err),
            }
        }

        events
    }
}

/// Read and decode an image into RGBA pixels
pub fn decode(source: &ImageSource) -> Result<ColorImage, ImageLoadError> {
    let image = match source {
        ImageSource::Bytes { bytes, .. } => image::load_from_memory(bytes)?,
        ImageSource::Path(path) => {
            #[cfg(not(target_arch = "wasm32"))]
            {
                let bytes = std::fs::read(path)?;
                image::load_from_memory(&bytes)?
            }

            #[cfg(target_arch = "wasm32")]
            {
                return Err(ImageLoadError::Unsupported(path.display().to_string()));
            }
        }
    };

    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_flat_samples().as_slice()))
}
