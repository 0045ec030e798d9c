/// Encodes text for a simple font using `WinAnsiEncoding`.
///
/// Latin-1 maps byte-for-byte; the typographic characters WinAnsi places in
/// `0x80..=0x9F` are translated; anything else becomes `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    let mut replaced = 0usize;
    let bytes = s
        .chars()
        .map(|c| match c {
            '\u{20AC}' => 0x80,
            '\u{201A}' => 0x82,
            '\u{201E}' => 0x84,
            '\u{2026}' => 0x85,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2122}' => 0x99,
            c if (c as u32) < 0x80 || ((c as u32) >= 0xA0 && (c as u32) <= 0xFF) => c as u8,
            _ => {
                replaced += 1;
                b'?'
            }
        })
        .collect();
    if replaced > 0 {
        log::warn!(
            "Replaced {} character(s) not representable in WinAnsiEncoding: {:?}",
            replaced,
            s
        );
    }
    bytes
}
