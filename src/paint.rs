// Image-to-keyboard painting
// Maps image pixels onto the per-key LED grid, one key write at a time

use std::time::Duration;

use image::{imageops::FilterType, DynamicImage, GenericImageView};
use tesoro_keyboard::{Keyboard, KeyboardError, Profile, Rgb};
use tracing::debug;

/// Inter-key write pacing for a paint pass
///
/// Painting a full board is ~104 feature reports back to back; the
/// firmware drops writes that arrive too fast. `Fast` is the shortest
/// interval observed to work reliably, `Safe` adds margin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaintPace {
    /// ~0.8 ms between key writes
    Fast,
    /// ~1 ms between key writes
    #[default]
    Safe,
}

impl PaintPace {
    /// Wait inserted after each key write
    pub fn interval(&self) -> Duration {
        match self {
            Self::Fast => Duration::from_micros(800),
            Self::Safe => Duration::from_millis(1),
        }
    }
}

/// Paints a static image across the per-key grid
///
/// Images larger than the grid are resampled down once (nearest
/// neighbor, no blending); smaller images tile by wrapping their
/// pixels across the grid. Cells holding no key are skipped without
/// pacing, so sparse rows paint faster than full ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImagePainter {
    pace: PaintPace,
}

impl ImagePainter {
    /// Create a painter with the given pacing
    pub fn new(pace: PaintPace) -> Self {
        Self { pace }
    }

    /// Paint `image` onto the keyboard's grid for `profile`.
    ///
    /// Colors land in volatile memory; call
    /// [`Keyboard::save_spectrum`] afterwards to persist them.
    /// Returns the number of keys written. An image with a zero
    /// dimension has nothing to sample and writes no keys.
    pub async fn paint(
        &self,
        keyboard: &Keyboard,
        image: &DynamicImage,
        profile: Profile,
    ) -> Result<usize, KeyboardError> {
        let layout = keyboard.layout()?;
        let grid_w = layout.width() as u32;
        let grid_h = layout.height() as u32;

        let (img_w, img_h) = image.dimensions();
        if img_w == 0 || img_h == 0 {
            debug!("Image has a zero dimension, nothing to sample");
            return Ok(0);
        }

        let resized;
        let source = if img_w > grid_w || img_h > grid_h {
            resized = image.resize_exact(grid_w, grid_h, FilterType::Nearest);
            &resized
        } else {
            image
        };
        let (src_w, src_h) = source.dimensions();

        let mut painted = 0usize;
        for x in 0..layout.width() {
            for y in 0..layout.height() {
                let key = layout.get(x, y);
                if key.is_none() {
                    continue;
                }

                let pixel = source.get_pixel(x as u32 % src_w, y as u32 % src_h);
                let color = Rgb::new(pixel[0], pixel[1], pixel[2]);

                keyboard
                    .set_key_color_with_delay(key, color, profile, Duration::ZERO)
                    .await?;
                tokio::time::sleep(self.pace.interval()).await;
                painted += 1;
            }
        }

        debug!(painted, "Image painted onto key grid");
        Ok(painted)
    }
}
