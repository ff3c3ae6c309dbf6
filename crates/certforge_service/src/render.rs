use certforge_core::models::certificate::CertificateRecord;
use certforge_render::assemble::{assemble_card, card_filename};
use certforge_render::assets::RenderAssets;
use certforge_render::{qr, render_card_faces};

use crate::{CertService, ServiceError};

/// One finished download: the PDF bytes and the deterministic filename.
/// Never persisted; it lives for the duration of the request.
pub struct RenderedDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl CertService {
    /// Drives the full pipeline for one record: fetch photo and generate the
    /// QR concurrently, then rasterize both faces and assemble the PDF on a
    /// blocking thread. Any missing input aborts before a canvas exists, so
    /// a partial card is never produced.
    pub async fn render_card(
        &self,
        record: &CertificateRecord,
    ) -> Result<RenderedDocument, ServiceError> {
        let url = qr::verification_url(&self.config.public_origin, &record.certificate_no);

        let (photo_bytes, qr_image) = tokio::try_join!(self.fetch_photo(&record.image_url), async {
            tokio::task::spawn_blocking(move || qr::encode_qr(&url))
                .await
                .map_err(|e| ServiceError::Internal(e.to_string()))?
                .map_err(ServiceError::from)
        })?;

        let record = record.clone();
        let statics = self.config.card_statics.clone();
        let assets_dir = self.config.assets_dir.clone();

        let document = tokio::task::spawn_blocking(move || -> Result<RenderedDocument, ServiceError> {
            let assets = RenderAssets::load(&assets_dir)?;
            let photo = image::load_from_memory(&photo_bytes)
                .map_err(|e| ServiceError::Asset(format!("photo decode: {}", e)))?
                .to_rgba8();

            let (front, back) = render_card_faces(&record, &statics, &assets, &photo, &qr_image);
            let bytes = assemble_card(&front, &back)?;

            Ok(RenderedDocument {
                filename: card_filename(&record.certificate_no, &record.name),
                bytes,
            })
        })
        .await
        .map_err(|e| ServiceError::Internal(e.to_string()))??;

        tracing::info!(filename = %document.filename, "card rendered");
        Ok(document)
    }

    /// The photo lives on the image host; the record only carries its URL.
    /// The request timeout is set on the client, so a dead host fails the
    /// render instead of hanging it.
    async fn fetch_photo(&self, url: &str) -> Result<Vec<u8>, ServiceError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ServiceError::Asset(format!("photo fetch {}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(ServiceError::Asset(format!(
                "photo fetch {}: HTTP {}",
                url,
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ServiceError::Asset(format!("photo fetch {}: {}", url, e)))?;
        Ok(bytes.to_vec())
    }
}
