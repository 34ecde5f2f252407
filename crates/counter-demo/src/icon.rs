//! The app icon, drawn in code so window and tray share one image

use eframe::egui;

pub const ICON_SIZE: u32 = 32;

const OUTLINE: [u8; 4] = [20, 90, 64, 255];
const BODY: [u8; 4] = [35, 209, 139, 255];
const LID: [u8; 4] = [101, 255, 193, 255];

/// RGBA pixels of a closed box, `size` x `size`
pub fn box_icon_rgba(size: u32) -> Vec<u8> {
    let inset = size / 10;
    let border = (size / 16).max(1);
    let lid_bottom = size / 3;

    let mut rgba = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let inside = (inset..size - inset).contains(&x) && (inset..size - inset).contains(&y);
            let on_border = inside
                && (x < inset + border
                    || x >= size - inset - border
                    || y < inset + border
                    || y >= size - inset - border
                    || (lid_bottom..lid_bottom + border).contains(&y));

            let pixel = if !inside {
                [0; 4]
            } else if on_border {
                OUTLINE
            } else if y < lid_bottom {
                LID
            } else {
                BODY
            };
            rgba.extend_from_slice(&pixel);
        }
    }

    rgba
}

pub fn window_icon() -> egui::IconData {
    egui::IconData {
        rgba: box_icon_rgba(ICON_SIZE),
        width: ICON_SIZE,
        height: ICON_SIZE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(rgba: &[u8], size: u32, x: u32, y: u32) -> &[u8] {
        let i = ((y * size + x) * 4) as usize;
        &rgba[i..i + 4]
    }

    #[test]
    fn icon_layout() {
        let rgba = box_icon_rgba(ICON_SIZE);
        assert_eq!(rgba.len(), (ICON_SIZE * ICON_SIZE * 4) as usize);
        assert_eq!(pixel(&rgba, ICON_SIZE, 0, 0), [0; 4]);
        assert_eq!(pixel(&rgba, ICON_SIZE, 3, 16), OUTLINE);
        assert_eq!(pixel(&rgba, ICON_SIZE, 16, 7), LID);
        assert_eq!(pixel(&rgba, ICON_SIZE, 16, 20), BODY);
    }
}
