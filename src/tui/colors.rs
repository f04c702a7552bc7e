use std::sync::OnceLock;

use crossterm::style::Color;
use palette::{FromColor, Lch, Srgb};

use crate::engine::tile::{Pip, MAX_PIP};

const PIP_VALUES: usize = MAX_PIP as usize + 1;

static PIP_COLORS: OnceLock<[Color; PIP_VALUES]> = OnceLock::new();

/// Foreground colour for a pip value. Hues are spread evenly around the Lch wheel so that equal
/// values are easy to spot along the snake.
pub(crate) fn pip_color(pip: Pip) -> Color {
    let colors = PIP_COLORS.get_or_init(|| {
        std::array::from_fn(|i| {
            let lch = Lch::new(70.0, 60.0, i as f32 * 360.0 / PIP_VALUES as f32);
            let rgb = Srgb::from_color(lch).into_format::<u8>();
            Color::Rgb {
                r: rgb.red,
                g: rgb.green,
                b: rgb.blue,
            }
        })
    });
    colors[pip as usize]
}
