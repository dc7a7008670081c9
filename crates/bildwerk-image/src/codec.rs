// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Decode/encode boundary — turns uploaded bytes into raster buffers and
// enhanced buffers back into JPEG payloads with derived output names.

use bildwerk_core::error::{BildwerkError, Result};
use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;
use tracing::{debug, instrument};

/// Decode raw encoded bytes (JPEG, PNG, WebP, etc.) into a raster buffer.
///
/// `name` identifies the image in the error message, since a failed decode
/// aborts an enhancement batch and the caller needs to know which upload sank it.
#[instrument(skip(data), fields(name, data_len = data.len()))]
pub fn decode(name: &str, data: &[u8]) -> Result<DynamicImage> {
    let img = image::load_from_memory(data)
        .map_err(|err| BildwerkError::Decode(format!("failed to decode {}: {}", name, err)))?;
    debug!(
        width = img.width(),
        height = img.height(),
        "Image decoded from bytes"
    );
    Ok(img)
}

/// Load an image from a file path.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn open(path: impl AsRef<std::path::Path>) -> Result<DynamicImage> {
    let img = image::open(path.as_ref()).map_err(|err| {
        BildwerkError::Decode(format!(
            "failed to open {}: {}",
            path.as_ref().display(),
            err
        ))
    })?;
    debug!(width = img.width(), height = img.height(), "Image loaded");
    Ok(img)
}

/// Encode a raster buffer as JPEG bytes with the given quality (1-100).
///
/// Alpha is discarded; JPEG carries three channels.
pub fn encode_jpeg(image: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let rgb = image.to_rgb8();
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    rgb.write_with_encoder(encoder)
        .map_err(|err| BildwerkError::Encode(format!("JPEG encoding failed: {}", err)))?;
    Ok(buffer)
}

/// Sniff the MIME type of encoded image bytes from their magic numbers.
pub fn sniff_mime(data: &[u8]) -> Option<&'static str> {
    image::guess_format(data)
        .ok()
        .map(|format| format.to_mime_type())
}

/// Derive the output name for an enhanced image: the trailing extension is
/// replaced with `_enhanced.jpg`. A name whose tail is not a plain extension
/// (no dot, trailing dot, or a path separator after the last dot) passes
/// through unchanged.
pub fn enhanced_file_name(name: &str) -> String {
    match name.rfind('.') {
        Some(dot) => {
            let ext = &name[dot + 1..];
            if !ext.is_empty() && !ext.contains('/') {
                format!("{}_enhanced.jpg", &name[..dot])
            } else {
                name.to_string()
            }
        }
        None => name.to_string(),
    }
}

// -- Tests --------------------------------------------------------------------
