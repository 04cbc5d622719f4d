/// Log the first frame presentation (once only).
pub(crate) fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame presented ({}x{}, format={:?})",
            width,
            height,
            format,
        );
    }
}

/// Convert an sRGB background color into the linear clear color an sRGB
/// surface expects.
pub(crate) fn clear_color(color: &relief_common::Color) -> wgpu::Color {
    let [r, g, b, a] = color.to_linear();
    wgpu::Color { r, g, b, a }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relief_common::Color;

    #[test]
    fn black_stays_black() {
        let c = clear_color(&Color::BLACK);
        assert_eq!((c.r, c.g, c.b, c.a), (0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn mid_grey_is_linearized() {
        let c = clear_color(&Color::from_rgba(128, 128, 128, 255));
        assert!(c.r > 0.2 && c.r < 0.23);
        assert_eq!(c.a, 1.0);
    }
}
