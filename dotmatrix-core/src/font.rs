//! 5x8 glyph table for scrolling text
//!
//! Each glyph is five column bytes; bit `i` of a byte lights row `i`
//! (row 0 at the top). Only `A`-`Z` and space have glyphs. Lookup folds
//! lowercase to uppercase and sends everything else to space.

/// Glyph width in columns
pub const GLYPH_WIDTH: usize = 5;

/// One character bitmap, column bytes left to right
pub type Glyph = [u8; GLYPH_WIDTH];

/// The blank glyph, also used for unsupported characters
pub const SPACE: Glyph = [0x00; GLYPH_WIDTH];

/// Character to glyph table
static FONT: [(char, Glyph); 27] = [
    (' ', SPACE),
    ('A', [0x7C, 0x12, 0x11, 0x12, 0x7C]),
    ('B', [0x7F, 0x49, 0x49, 0x49, 0x36]),
    ('C', [0x3E, 0x41, 0x41, 0x41, 0x22]),
    ('D', [0x7F, 0x41, 0x41, 0x22, 0x1C]),
    ('E', [0x7F, 0x49, 0x49, 0x49, 0x41]),
    ('F', [0x7F, 0x09, 0x09, 0x09, 0x01]),
    ('G', [0x3E, 0x41, 0x49, 0x49, 0x7A]),
    ('H', [0x7F, 0x08, 0x08, 0x08, 0x7F]),
    ('I', [0x00, 0x41, 0x7F, 0x41, 0x00]),
    ('J', [0x20, 0x40, 0x41, 0x3F, 0x01]),
    ('K', [0x7F, 0x08, 0x14, 0x22, 0x41]),
    ('L', [0x7F, 0x40, 0x40, 0x40, 0x40]),
    ('M', [0x7F, 0x02, 0x0C, 0x02, 0x7F]),
    ('N', [0x7F, 0x04, 0x08, 0x10, 0x7F]),
    ('O', [0x3E, 0x41, 0x41, 0x41, 0x3E]),
    ('P', [0x7F, 0x09, 0x09, 0x09, 0x06]),
    ('Q', [0x3E, 0x41, 0x51, 0x21, 0x5E]),
    ('R', [0x7F, 0x09, 0x19, 0x29, 0x46]),
    ('S', [0x46, 0x49, 0x49, 0x49, 0x31]),
    ('T', [0x01, 0x01, 0x7F, 0x01, 0x01]),
    ('U', [0x3F, 0x40, 0x40, 0x40, 0x3F]),
    ('V', [0x1F, 0x20, 0x40, 0x20, 0x1F]),
    ('W', [0x3F, 0x40, 0x38, 0x40, 0x3F]),
    ('X', [0x63, 0x14, 0x08, 0x14, 0x63]),
    ('Y', [0x07, 0x08, 0x70, 0x08, 0x07]),
    ('Z', [0x61, 0x51, 0x49, 0x45, 0x43]),
];

/// Find the table entry for a character, after case folding
fn lookup(ch: char) -> Option<&'static Glyph> {
    let key = ch.to_ascii_uppercase();
    FONT.iter()
        .find(|(entry, _)| *entry == key)
        .map(|(_, glyph)| glyph)
}

/// Get the glyph for a character
///
/// Never fails: characters without a glyph render as [`SPACE`].
pub fn glyph(ch: char) -> &'static Glyph {
    lookup(ch).unwrap_or(&SPACE)
}

/// Check whether a character has its own glyph
pub fn is_supported(ch: char) -> bool {
    lookup(ch).is_some()
}
