use std::path::Path;

use anyhow::Context;
use image::{Rgb, RgbImage};
use turnip_engine::{
    config::{SCREEN_HEIGHT, SCREEN_WIDTH},
    video::framebuffers::Framebuffers,
};

/// Widen a 5-bit channel to 8 bits, repeating the top bits into the bottom.
fn widen(channel: u16) -> u8 {
    let c = (channel & 31) as u8;
    (c << 3) | (c >> 2)
}

pub fn bgr555_to_rgb(color: u16) -> Rgb<u8> {
    Rgb([widen(color), widen(color >> 5), widen(color >> 10)])
}

/// The page currently being scanned out, through the palette.
pub fn render_visible(fb: &Framebuffers) -> RgbImage {
    let palette = fb.palette();
    RgbImage::from_fn(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32, |x, y| {
        bgr555_to_rgb(palette[fb.visible_pixel(x as usize, y as usize) as usize])
    })
}

pub fn save_visible(fb: &Framebuffers, path: &Path) -> anyhow::Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    }
    render_visible(fb)
        .save(path)
        .with_context(|| format!("failed to write snapshot {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use turnip_engine::{assets::rgb15, video::Display};

    #[test]
    fn channels_widen_to_full_range() {
        assert_eq!(bgr555_to_rgb(rgb15(31, 0, 0)), Rgb([255, 0, 0]));
        assert_eq!(bgr555_to_rgb(rgb15(0, 31, 0)), Rgb([0, 255, 0]));
        assert_eq!(bgr555_to_rgb(rgb15(0, 0, 31)), Rgb([0, 0, 255]));
        assert_eq!(bgr555_to_rgb(rgb15(16, 8, 0)), Rgb([132, 66, 0]));
    }

    #[test]
    fn renders_through_the_palette() {
        let mut fb = Framebuffers::new();
        fb.set_palette_bg(3, rgb15(31, 31, 31));
        fb.plot_pixel8(5, 7, 3);
        fb.flip();

        let img = render_visible(&fb);
        assert_eq!(img.dimensions(), (240, 160));
        assert_eq!(*img.get_pixel(5, 7), Rgb([255, 255, 255]));
        assert_eq!(*img.get_pixel(0, 0), Rgb([0, 0, 0]));
    }

    #[test]
    fn writes_a_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frames").join("0001.png");
        save_visible(&Framebuffers::new(), &path).unwrap();

        let back = image::open(&path).unwrap().to_rgb8();
        assert_eq!(back.dimensions(), (240, 160));
    }
}
