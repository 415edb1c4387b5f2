//! Physical key-position grid
//!
//! Maps 2-D grid coordinates to the key LED sitting at that position.
//! The grid is how images get painted onto the board: an image is
//! scaled to the grid dimensions and each cell's pixel is sent to the
//! cell's key. Lookup is one-directional; nothing needs the reverse.

use crate::keys::LedId;

/// Grid width of the reference (Gram Spectrum) layout
pub const LAYOUT_WIDTH: usize = 22;

/// Grid height of the reference layout
pub const LAYOUT_HEIGHT: usize = 6;

/// (key, x, y) placements for the Gram Spectrum. Cells not listed hold
/// the sentinel; the gaps are real (wide keys and the block between
/// F8 and F9 occupy more than one column of physical space).
const GRAM_SPECTRUM_PLACEMENTS: &[(LedId, usize, usize)] = &[
    // Row 0: function row
    (LedId::ESCAPE, 0, 0),
    (LedId::F1, 2, 0),
    (LedId::F2, 3, 0),
    (LedId::F3, 4, 0),
    (LedId::F4, 5, 0),
    (LedId::F5, 6, 0),
    (LedId::F6, 7, 0),
    (LedId::F7, 8, 0),
    (LedId::F8, 9, 0),
    (LedId::F9, 11, 0),
    (LedId::F10, 12, 0),
    (LedId::F11, 13, 0),
    (LedId::F12, 14, 0),
    (LedId::PRINT_SCREEN, 15, 0),
    (LedId::SCROLL_LOCK, 16, 0),
    (LedId::PAUSE, 17, 0),
    // Row 1: digits
    (LedId::GRAVE, 0, 1),
    (LedId::D1, 1, 1),
    (LedId::D2, 2, 1),
    (LedId::D3, 3, 1),
    (LedId::D4, 4, 1),
    (LedId::D5, 5, 1),
    (LedId::D6, 6, 1),
    (LedId::D7, 7, 1),
    (LedId::D8, 8, 1),
    (LedId::D9, 9, 1),
    (LedId::D0, 10, 1),
    (LedId::MINUS, 11, 1),
    (LedId::EQUALS, 12, 1),
    (LedId::BACKSPACE, 13, 1),
    (LedId::INSERT, 15, 1),
    (LedId::HOME, 16, 1),
    (LedId::PAGE_UP, 17, 1),
    (LedId::NUM_LOCK, 18, 1),
    (LedId::KP_DIVIDE, 19, 1),
    (LedId::KP_MULTIPLY, 20, 1),
    (LedId::KP_MINUS, 21, 1),
    // Row 2: top letters
    (LedId::TAB, 0, 2),
    (LedId::Q, 1, 2),
    (LedId::W, 2, 2),
    (LedId::E, 3, 2),
    (LedId::R, 5, 2),
    (LedId::T, 6, 2),
    (LedId::Y, 7, 2),
    (LedId::U, 8, 2),
    (LedId::I, 9, 2),
    (LedId::O, 10, 2),
    (LedId::P, 11, 2),
    (LedId::LEFT_BRACKET, 12, 2),
    (LedId::RIGHT_BRACKET, 13, 2),
    (LedId::BACKSLASH, 14, 2),
    (LedId::DELETE, 15, 2),
    (LedId::END, 16, 2),
    (LedId::PAGE_DOWN, 17, 2),
    (LedId::KP_7, 18, 2),
    (LedId::KP_8, 19, 2),
    (LedId::KP_9, 20, 2),
    (LedId::KP_PLUS, 21, 2),
    // Row 3: home row
    (LedId::CAPS_LOCK, 0, 3),
    (LedId::A, 1, 3),
    (LedId::S, 3, 3),
    (LedId::D, 4, 3),
    (LedId::F, 5, 3),
    (LedId::G, 6, 3),
    (LedId::H, 7, 3),
    (LedId::J, 8, 3),
    (LedId::K, 9, 3),
    (LedId::L, 10, 3),
    (LedId::SEMICOLON, 11, 3),
    (LedId::APOSTROPHE, 12, 3),
    (LedId::ENTER, 14, 3),
    (LedId::KP_4, 17, 3),
    (LedId::KP_5, 18, 3),
    (LedId::KP_6, 19, 3),
    // Row 4: bottom letters
    (LedId::LEFT_SHIFT, 1, 4),
    (LedId::Z, 2, 4),
    (LedId::X, 3, 4),
    (LedId::C, 4, 4),
    (LedId::V, 5, 4),
    (LedId::B, 6, 4),
    (LedId::N, 7, 4),
    (LedId::M, 8, 4),
    (LedId::COMMA, 9, 4),
    (LedId::PERIOD, 10, 4),
    (LedId::SLASH, 11, 4),
    (LedId::RIGHT_SHIFT, 13, 4),
    (LedId::UP, 16, 4),
    (LedId::KP_1, 18, 4),
    (LedId::KP_2, 19, 4),
    (LedId::KP_3, 20, 4),
    (LedId::KP_ENTER, 21, 4),
    // Row 5: modifiers
    (LedId::LEFT_CTRL, 0, 5),
    (LedId::SUPER, 1, 5),
    (LedId::LEFT_ALT, 3, 5),
    (LedId::SPACE, 6, 5),
    (LedId::RIGHT_ALT, 11, 5),
    (LedId::FN, 12, 5),
    (LedId::MENU, 13, 5),
    (LedId::RIGHT_CTRL, 14, 5),
    (LedId::LEFT, 15, 5),
    (LedId::DOWN, 16, 5),
    (LedId::RIGHT, 17, 5),
    (LedId::KP_0, 18, 5),
    (LedId::KP_DOT, 20, 5),
];

/// Immutable grid of key positions, built once per session.
#[derive(Debug, Clone)]
pub struct KeyLayout {
    width: usize,
    height: usize,
    cells: Vec<LedId>,
}

impl KeyLayout {
    /// Build the reference 22x6 Gram Spectrum grid
    pub fn gram_spectrum() -> Self {
        Self::from_placements(LAYOUT_WIDTH, LAYOUT_HEIGHT, GRAM_SPECTRUM_PLACEMENTS)
    }

    /// Build a grid from an explicit placement table.
    ///
    /// Every cell starts at the sentinel. Placements outside the grid
    /// are dropped silently: the table is static and trusted, so a bad
    /// coordinate is a no-op rather than an error.
    pub fn from_placements(
        width: usize,
        height: usize,
        placements: &[(LedId, usize, usize)],
    ) -> Self {
        let mut layout = Self {
            width,
            height,
            cells: vec![LedId::NONE; width * height],
        };
        for &(key, x, y) in placements {
            layout.place(key, x, y);
        }
        layout
    }

    fn place(&mut self, key: LedId, x: usize, y: usize) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.cells[y * self.width + x] = key;
    }

    /// Key at (x, y); the sentinel for unplaced or out-of-range cells.
    pub fn get(&self, x: usize, y: usize) -> LedId {
        if x >= self.width || y >= self.height {
            return LedId::NONE;
        }
        self.cells[y * self.width + x]
    }

    /// Grid width in cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells holding a real key
    pub fn key_count(&self) -> usize {
        self.cells.iter().filter(|k| !k.is_none()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_placements() {
        let layout = KeyLayout::gram_spectrum();
        assert_eq!(layout.get(0, 0), LedId::ESCAPE);
        assert_eq!(layout.get(11, 0), LedId::F9);
        assert_eq!(layout.get(21, 1), LedId::KP_MINUS);
        assert_eq!(layout.get(6, 5), LedId::SPACE);
        assert_eq!(layout.get(20, 5), LedId::KP_DOT);
    }

    #[test]
    fn unplaced_cells_hold_sentinel() {
        let layout = KeyLayout::gram_spectrum();
        // gap between Escape and F1, and the block right of F8
        assert_eq!(layout.get(1, 0), LedId::NONE);
        assert_eq!(layout.get(10, 0), LedId::NONE);
        // letter-row gap (no key between Q-row E and R on this board)
        assert_eq!(layout.get(4, 2), LedId::NONE);
    }

    #[test]
    fn out_of_range_get_is_sentinel() {
        let layout = KeyLayout::gram_spectrum();
        assert_eq!(layout.get(LAYOUT_WIDTH, 0), LedId::NONE);
        assert_eq!(layout.get(0, LAYOUT_HEIGHT), LedId::NONE);
        assert_eq!(layout.get(usize::MAX, usize::MAX), LedId::NONE);
    }

    #[test]
    fn out_of_range_placements_are_dropped() {
        let layout = KeyLayout::from_placements(
            2,
            2,
            &[
                (LedId::A, 0, 0),
                (LedId::B, 5, 0),
                (LedId::C, 0, 7),
            ],
        );
        assert_eq!(layout.get(0, 0), LedId::A);
        assert_eq!(layout.key_count(), 1);
    }

    #[test]
    fn full_board_key_count() {
        assert_eq!(KeyLayout::gram_spectrum().key_count(), 104);
    }
}
