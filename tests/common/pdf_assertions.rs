use lopdf::content::Content;
use lopdf::{Document as LopdfDocument, Object};

const PT_PER_MM: f32 = 72.0 / 25.4;

/// A `Tj` text run with the position of its `Td`, converted back to
/// top-left millimetres.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

fn operations(doc: &LopdfDocument, page: u32) -> Vec<lopdf::content::Operation> {
    let pages = doc.get_pages();
    let Some(page_id) = pages.get(&page) else {
        return Vec::new();
    };
    doc.get_page_content(*page_id)
        .ok()
        .and_then(|bytes| Content::decode(&bytes).ok())
        .map(|content| content.operations)
        .unwrap_or_default()
}

fn number(obj: &Object) -> f32 {
    match obj {
        Object::Integer(i) => *i as f32,
        Object::Real(r) => *r,
        _ => f32::NAN,
    }
}

/// Width and height of `page`'s MediaBox in points.
pub fn media_box(doc: &LopdfDocument, page: u32) -> Option<(f32, f32)> {
    let page_id = *doc.get_pages().get(&page)?;
    let dict = doc.get_dictionary(page_id).ok()?;
    let media_box = dict.get(b"MediaBox").ok()?.as_array().ok()?;
    Some((number(&media_box[2]), number(&media_box[3])))
}

pub fn placed_texts(doc: &LopdfDocument, page: u32) -> Vec<PlacedText> {
    let Some((_, page_height)) = media_box(doc, page) else {
        return Vec::new();
    };
    let mut texts = Vec::new();
    let mut position = (0.0, 0.0);
    for op in operations(doc, page) {
        match op.operator.as_str() {
            "Td" if op.operands.len() == 2 => {
                position = (number(&op.operands[0]), number(&op.operands[1]));
            }
            "Tj" => {
                if let Some(Object::String(bytes, _)) = op.operands.first() {
                    // WinAnsi agrees with Latin-1 for every character used here.
                    let text = bytes.iter().map(|b| *b as char).collect();
                    texts.push(PlacedText {
                        text,
                        x: position.0 / PT_PER_MM,
                        y: (page_height - position.1) / PT_PER_MM,
                    });
                }
            }
            _ => {}
        }
    }
    texts
}

/// Number of `operator` occurrences in `page`'s content stream.
pub fn count_operator(doc: &LopdfDocument, page: u32, operator: &str) -> usize {
    operations(doc, page)
        .iter()
        .filter(|op| op.operator == operator)
        .count()
}

pub fn image_xobject_count(doc: &LopdfDocument) -> usize {
    doc.objects
        .values()
        .filter_map(|obj| obj.as_stream().ok())
        .filter(|stream| {
            stream
                .dict
                .get(b"Subtype")
                .and_then(|s| s.as_name())
                .map(|n| n == b"Image")
                .unwrap_or(false)
        })
        .count()
}

pub fn assert_close(actual: f32, expected: f32, what: &str) {
    assert!(
        (actual - expected).abs() < 0.05,
        "{}: expected {}, got {}",
        what,
        expected,
        actual
    );
}
