// Tesoro Gram Spectrum RGB Driver - Shared Library
// Image painting on top of the keyboard session layer

pub mod paint;

pub use paint::{ImagePainter, PaintPace};
