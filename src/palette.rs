//! Fixed drawing palette
//!
//! Maps each drawable color between three representations:
//! - the keyboard trigger / `.paint` file character (`r`, `g`, `b`, ...)
//! - the domain value [`ColorIndex`]
//! - the surface handle [`RenderAttribute`] that a terminal surface stores
//!
//! The tables are static and total over their domain. The background
//! ("empty") state and the drawable black (`x`) share one render attribute,
//! so reading that attribute back always yields [`ColorIndex::Empty`].

/// A cell color in the domain model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorIndex {
    Red,
    Green,
    Blue,
    Cyan,
    Magenta,
    Yellow,
    White,
    /// Drawable black, triggered by `x`. Renders as the background.
    Black,
    /// Background state of a fresh or cleared canvas.
    Empty,
}

/// Opaque handle for a visual attribute registered with a terminal surface.
///
/// Values only come from [`attribute_for`] or the chrome constants below;
/// the theme decides how each one looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RenderAttribute(u8);

impl RenderAttribute {
    /// Prompt window background (white on green).
    pub const PROMPT: Self = Self(1);
    /// Selected option / cheatsheet key label (black on white).
    pub const HIGHLIGHT: Self = Self(2);
    /// Canvas background, shared by [`ColorIndex::Empty`] and [`ColorIndex::Black`].
    pub const BACKGROUND: Self = Self(10);

    /// Raw slot number, for surfaces that index attribute tables.
    pub fn slot(self) -> usize {
        self.0 as usize
    }
}

/// Unknown `.paint` file character.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    #[error("Unknown palette character: {0:?}")]
    UnknownChar(char),
}

/// All drawable colors in palette order.
pub const DRAWABLE: [ColorIndex; 8] = [
    ColorIndex::Red,
    ColorIndex::Green,
    ColorIndex::Blue,
    ColorIndex::Cyan,
    ColorIndex::Magenta,
    ColorIndex::Yellow,
    ColorIndex::White,
    ColorIndex::Black,
];

/// Color triggered by a key press, or `None` if the key is not a color key.
pub fn color_for_key(key: char) -> Option<ColorIndex> {
    match key {
        'r' => Some(ColorIndex::Red),
        'g' => Some(ColorIndex::Green),
        'b' => Some(ColorIndex::Blue),
        'c' => Some(ColorIndex::Cyan),
        'm' => Some(ColorIndex::Magenta),
        'y' => Some(ColorIndex::Yellow),
        'w' => Some(ColorIndex::White),
        'x' => Some(ColorIndex::Black),
        _ => None,
    }
}

/// Character written to a `.paint` file for a color.
///
/// `Empty` is written as `x`, the same as drawable black.
pub fn file_char_for_color(color: ColorIndex) -> char {
    match color {
        ColorIndex::Red => 'r',
        ColorIndex::Green => 'g',
        ColorIndex::Blue => 'b',
        ColorIndex::Cyan => 'c',
        ColorIndex::Magenta => 'm',
        ColorIndex::Yellow => 'y',
        ColorIndex::White => 'w',
        ColorIndex::Black | ColorIndex::Empty => 'x',
    }
}

/// Color for a character read from a `.paint` file.
pub fn color_for_file_char(ch: char) -> Result<ColorIndex, PaletteError> {
    color_for_key(ch).ok_or(PaletteError::UnknownChar(ch))
}

/// Render attribute a surface stores for a color.
pub fn attribute_for(color: ColorIndex) -> RenderAttribute {
    match color {
        ColorIndex::Red => RenderAttribute(3),
        ColorIndex::Green => RenderAttribute(4),
        ColorIndex::Blue => RenderAttribute(5),
        ColorIndex::Cyan => RenderAttribute(6),
        ColorIndex::Magenta => RenderAttribute(7),
        ColorIndex::Yellow => RenderAttribute(8),
        ColorIndex::White => RenderAttribute(9),
        ColorIndex::Black | ColorIndex::Empty => RenderAttribute::BACKGROUND,
    }
}

/// Color stored under a render attribute.
///
/// Chrome attributes never appear on the canvas; they read back as `Empty`.
pub fn color_for_attribute(attr: RenderAttribute) -> ColorIndex {
    match attr.0 {
        3 => ColorIndex::Red,
        4 => ColorIndex::Green,
        5 => ColorIndex::Blue,
        6 => ColorIndex::Cyan,
        7 => ColorIndex::Magenta,
        8 => ColorIndex::Yellow,
        9 => ColorIndex::White,
        _ => ColorIndex::Empty,
    }
}

impl ColorIndex {
    /// The value this color reads back as once stored on a canvas.
    pub fn canonical(self) -> Self {
        color_for_attribute(attribute_for(self))
    }
}
