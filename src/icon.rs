// SPDX-License-Identifier: MPL-2.0
//! Window icon loading.
//!
//! Rasterizes the embedded branding SVG into an RGBA window icon at
//! startup. Any parse or render failure yields `None` and the window falls
//! back to the platform default icon.

use iced::window::{icon, Icon};
use resvg::usvg;

const ICON_SIZE: u32 = 128;

// Embedded so packaging does not need to locate assets on disk.
const LOGO_SVG: &[u8] = include_bytes!("../assets/branding/nav_shell.svg");

pub fn load_window_icon() -> Option<Icon> {
    let tree = usvg::Tree::from_data(LOGO_SVG, &usvg::Options::default()).ok()?;

    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        ICON_SIZE as f32 / size.width(),
        ICON_SIZE as f32 / size.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(ICON_SIZE, ICON_SIZE)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    icon::from_rgba(pixmap.data().to_vec(), ICON_SIZE, ICON_SIZE).ok()
}
