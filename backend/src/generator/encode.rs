use crate::error::QrGenError;
use image::Luma;
use png::{BitDepth as PngBitDepth, ColorType as PngColorType, Encoder as PngEncoder};
use qrcode::QrCode;

/// Pixels per QR module, on both axes.
pub const MODULE_PIXELS: u32 = 10;

/// Renders `text` as a black-on-white QR code and returns the PNG bytes.
///
/// The symbol version is the smallest one that fits the payload at error
/// correction level M. Payloads too long for any version fail with
/// [`QrGenError::Encode`].
pub fn encode_png(text: &str) -> Result<Vec<u8>, QrGenError> {
    let code = QrCode::new(text.as_bytes()).map_err(|e| QrGenError::Encode(e.to_string()))?;
    let image = code
        .render::<Luma<u8>>()
        .quiet_zone(true)
        .module_dimensions(MODULE_PIXELS, MODULE_PIXELS)
        .dark_color(Luma([0]))
        .light_color(Luma([255]))
        .build();

    let mut bytes = Vec::new();
    {
        let mut encoder = PngEncoder::new(&mut bytes, image.width(), image.height());
        encoder.set_color(PngColorType::Grayscale);
        encoder.set_depth(PngBitDepth::Eight);
        let mut writer = encoder.write_header().map_err(png_error)?;
        writer.write_image_data(image.as_raw()).map_err(png_error)?;
        writer.finish().map_err(png_error)?;
    }

    Ok(bytes)
}

fn png_error(e: png::EncodingError) -> QrGenError {
    QrGenError::Encode(format!("PNG write error: {e}"))
}
