// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Rasterizes the embedded branding SVG at runtime to produce an RGBA icon
//! for the window title bar. Falls back to `None` if rendering fails.

use iced::window::{icon, Icon};
use resvg::usvg;

const SVG_SOURCE: &str = include_str!("../assets/branding/iced_gallery.svg");

/// Edge length of the rasterized icon, in pixels.
pub const ICON_SIZE: u32 = 128;

/// Rasterize the embedded SVG icon to a square RGBA buffer.
/// Returns `None` if parsing or rendering fails.
pub fn rasterize_icon() -> Option<(Vec<u8>, u32)> {
    let tree = usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()).ok()?;

    let orig_size = tree.size();
    let scale_x = ICON_SIZE as f32 / orig_size.width();
    let scale_y = ICON_SIZE as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    let mut pixmap = tiny_skia::Pixmap::new(ICON_SIZE, ICON_SIZE)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Some((pixmap.data().to_vec(), ICON_SIZE))
}

pub fn load_window_icon() -> Option<Icon> {
    let (rgba, size) = rasterize_icon()?;
    icon::from_rgba(rgba, size, size).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_rasterizes_to_rgba_square() {
        let (rgba, size) = rasterize_icon().expect("branding svg renders");
        assert_eq!(size, ICON_SIZE);
        assert_eq!(rgba.len(), (ICON_SIZE * ICON_SIZE * 4) as usize);
        assert!(rgba.iter().any(|&byte| byte != 0));
    }
}
