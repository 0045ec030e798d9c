//! Advance widths of the standard Type1 Helvetica faces.
//!
//! Values are the AFM widths in thousandths of an em for the printable ASCII
//! range. Latin-1 letters fall back to the width of their unaccented base
//! letter, which matches the AFM tables for every accented form used in
//! Spanish text except `í`/`Í`, handled explicitly.

use crate::geometry::pt_to_mm;
use crate::text::FontWeight;

const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,      // 'p'..'~'
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

fn base_letter(c: char) -> Option<char> {
    let base = match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        'ý' | 'ÿ' => 'y',
        'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' => 'A',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' => 'O',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'Ñ' => 'N',
        'Ç' => 'C',
        'Ý' => 'Y',
        _ => return None,
    };
    Some(base)
}

/// AFM widths of the non-letter glyphs WinAnsi text uses outside ASCII,
/// as `(regular, bold)`.
fn symbol_width(c: char) -> Option<(u16, u16)> {
    let widths = match c {
        '\u{2018}' | '\u{2019}' | '\u{201A}' => (222, 278),
        '\u{201C}' | '\u{201D}' | '\u{201E}' => (333, 500),
        '\u{2022}' => (350, 350),
        '\u{2026}' | '\u{2014}' | '\u{2122}' => (1000, 1000),
        '\u{2013}' | '\u{20AC}' => (556, 556),
        '·' => (278, 278),
        '¡' => (333, 333),
        '¿' => (611, 611),
        '°' => (400, 400),
        'ª' => (370, 370),
        'º' => (365, 365),
        '«' | '»' => (556, 556),
        '\u{00A0}' => (278, 278),
        _ => return None,
    };
    Some(widths)
}

/// Advance width of a single character in font units (1/1000 em).
pub fn char_width(c: char, weight: FontWeight) -> u16 {
    let table = match weight {
        FontWeight::Normal => &HELVETICA,
        FontWeight::Bold => &HELVETICA_BOLD,
    };
    if let Some((regular, bold)) = symbol_width(c) {
        return match weight {
            FontWeight::Normal => regular,
            FontWeight::Bold => bold,
        };
    }
    match c {
        ' '..='~' => table[c as usize - 32],
        'í' | 'ì' | 'î' | 'ï' => 278,
        _ => base_letter(c)
            .map(|b| table[b as usize - 32])
            .unwrap_or(FALLBACK_WIDTH),
    }
}

/// Width of `text` set in Helvetica at `size_pt`, in millimetres.
pub fn text_width_mm(text: &str, weight: FontWeight, size_pt: f32) -> f32 {
    let units: u32 = text.chars().map(|c| char_width(c, weight) as u32).sum();
    pt_to_mm(units as f32 * size_pt / 1000.0)
}
