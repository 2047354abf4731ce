//! QR code renderer for external links.

use dioxus::prelude::*;
use qrcode::render::svg;
use qrcode::QrCode;

use crate::theme::colors;

/// Locally rendered QR code.
///
/// The SVG keeps its viewBox but drops fixed width/height so CSS controls
/// the display size. Falls back to nothing but a label if generation fails
/// (it cannot for the short URLs the page encodes).
#[component]
pub fn QrCodeDisplay(
    /// Data to encode
    data: String,
    /// Minimum render quality in pixels
    #[props(default = 120)]
    size: u32,
) -> Element {
    let qr_svg = use_memo(move || match QrCode::new(data.as_bytes()) {
        Ok(code) => {
            let svg_string = code
                .render()
                .min_dimensions(size, size)
                .dark_color(svg::Color(colors::RED_THREAD_DEEP))
                .light_color(svg::Color("transparent"))
                .build();

            // Strip the fixed dimensions, keep the viewBox
            svg_string.replace(&format!("width=\"{}\" height=\"{}\" ", size, size), "")
        }
        Err(e) => {
            tracing::error!("Failed to generate QR code: {:?}", e);
            String::new()
        }
    });

    rsx! {
        if !qr_svg().is_empty() {
            div {
                class: "qr-display",
                dangerous_inner_html: "{qr_svg()}",
            }
        } else {
            div { class: "qr-display-error", "không tạo được mã QR" }
        }
    }
}
