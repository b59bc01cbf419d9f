//! Player skin preview download and scaling

use image::{imageops::FilterType, DynamicImage};

use crate::presenter::{SkinImage, SkinView};

/// Side of the square box the skin preview must fit in
pub const SKIN_BOX_SIZE: u32 = 128;

#[derive(Debug, Clone)]
pub struct SkinFetcher {
    client: reqwest::Client,
}

impl SkinFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Download, decode and scale the skin at `url`.
    ///
    /// Every failure collapses into `SkinView::Failed`.
    pub async fn fetch(&self, url: &str) -> SkinView {
        match self.fetch_image(url).await {
            Ok(image) => SkinView::Loaded(image),
            Err(e) => {
                tracing::warn!("Failed to load skin from {}: {}", url, e);
                SkinView::Failed
            }
        }
    }

    async fn fetch_image(&self, url: &str) -> Result<SkinImage, String> {
        tracing::debug!("Fetching skin {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| format!("Failed to download skin: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("Skin request failed: HTTP {}", response.status()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| format!("Failed to read skin: {}", e))?;

        tokio::task::spawn_blocking(move || decode_and_scale(&bytes))
            .await
            .map_err(|e| format!("Skin decode task failed: {}", e))?
    }
}

/// Decode raw image bytes and fit them into the preview box
pub fn decode_and_scale(bytes: &[u8]) -> Result<SkinImage, String> {
    let img = image::load_from_memory(bytes).map_err(|e| format!("Invalid skin image: {}", e))?;
    Ok(SkinImage::new(fit_to_box(&img, SKIN_BOX_SIZE).to_rgba8()))
}

/// Scale `img` preserving aspect ratio so that it fits in `size` x `size`
pub fn fit_to_box(img: &DynamicImage, size: u32) -> DynamicImage {
    img.resize(size, size, FilterType::Lanczos3)
}
