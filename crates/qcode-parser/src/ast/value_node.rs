use std::borrow::Cow;

use crate::ByteSpan;
use crate::StringParsingError;
use crate::ast::ValueKind;
use smallvec::SmallVec;

/// The arena holding one value tree. The root is at index 0; most argument
/// values are a single scalar, so two nodes are stored inline.
pub type ValueNodes = SmallVec<[ValueNode; 2]>;

/// One node of a value tree.
///
/// Relations are arena-local indices: `parent_id` and `children` refer to
/// positions in the same [`ValueNodes`] list and mean nothing in any other.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueNode {
    /// Position of this node in its arena.
    pub id: usize,

    /// The enclosing List or Object node, or `None` for the root.
    pub parent_id: Option<usize>,

    pub kind: ValueKind,

    /// The member key, set only on direct children of an Object.
    pub member_name: Option<ByteSpan>,

    /// The raw literal text. `None` for List and Object.
    ///
    /// Strings span the content between the quotes with escapes left raw;
    /// variables span the name after `$`.
    pub value: Option<ByteSpan>,

    /// Child ids, in source order. Only List and Object nodes have any.
    pub children: SmallVec<[usize; 4]>,
}

impl ValueNode {
    pub fn new(id: usize, parent_id: Option<usize>, kind: ValueKind) -> Self {
        Self {
            id,
            parent_id,
            kind,
            member_name: None,
            value: None,
            children: SmallVec::new(),
        }
    }

    /// Raw literal text, or `""` for List and Object nodes.
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        self.value.map_or("", |span| span.text(source))
    }

    pub fn member_name<'src>(&self, source: &'src str) -> Option<&'src str> {
        self.member_name.map(|span| span.text(source))
    }

    pub fn as_i64(&self, source: &str) -> Option<i64> {
        match self.kind {
            ValueKind::Int => self.text(source).parse().ok(),
            _ => None,
        }
    }

    /// Int and Float nodes both convert.
    pub fn as_f64(&self, source: &str) -> Option<f64> {
        match self.kind {
            ValueKind::Int | ValueKind::Float => self.text(source).parse().ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self, source: &str) -> Option<bool> {
        match (self.kind, self.text(source)) {
            (ValueKind::Bool, "true") => Some(true),
            (ValueKind::Bool, "false") => Some(false),
            _ => None,
        }
    }

    /// Returns the unescaped content of a String node.
    ///
    /// Processes `\n`, `\r`, `\t`, `\\`, `\"`, `\/`, `\b`, `\f`, `\uXXXX`
    /// (including UTF-16 surrogate pairs) and `\u{X...}`. Text without
    /// escapes is borrowed from `source`.
    pub fn string_value<'src>(
        &self,
        source: &'src str,
    ) -> Result<Cow<'src, str>, StringParsingError> {
        if self.kind != ValueKind::String {
            return Err(StringParsingError::NotAString);
        }
        let raw = self.text(source);
        if !raw.contains('\\') {
            return Ok(Cow::Borrowed(raw));
        }
        unescape(raw).map(Cow::Owned)
    }
}

/// Decodes every escape in `raw`, copying the text between escapes as is.
fn unescape(raw: &str) -> Result<String, StringParsingError> {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(idx) = rest.find('\\') {
        out.push_str(&rest[..idx]);
        let (decoded, len) = decode_escape(&rest[idx..])?;
        out.push(decoded);
        rest = &rest[idx + len..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Decodes the escape at the start of `escape` (which begins with `\`).
/// Returns the decoded char and the escape's length in bytes.
fn decode_escape(escape: &str) -> Result<(char, usize), StringParsingError> {
    let decoded = match escape.as_bytes().get(1) {
        Some(b'n') => '\n',
        Some(b'r') => '\r',
        Some(b't') => '\t',
        Some(b'b') => '\u{0008}',
        Some(b'f') => '\u{000C}',
        Some(b'\\') => '\\',
        Some(b'"') => '"',
        Some(b'/') => '/',
        Some(b'u') => return decode_unicode_escape(escape),
        _ => {
            return Err(StringParsingError::InvalidEscapeSequence(
                escape.chars().take(2).collect(),
            ));
        },
    };
    Ok((decoded, 2))
}

/// Decodes `\u{X...}`, `\uXXXX`, or a `\uXXXX\uXXXX` surrogate pair.
fn decode_unicode_escape(escape: &str) -> Result<(char, usize), StringParsingError> {
    let invalid = |len: usize| {
        StringParsingError::InvalidUnicodeEscape(escape.chars().take(len).collect())
    };

    if escape[2..].starts_with('{') {
        let digits = escape[3..].bytes().take_while(u8::is_ascii_hexdigit).count();
        // `\u{`, the digits, and the char that ended them.
        let shown = 3 + digits + 1;
        if digits == 0 || digits > 6 || escape.as_bytes().get(3 + digits) != Some(&b'}') {
            return Err(invalid(shown));
        }
        return u32::from_str_radix(&escape[3..3 + digits], 16)
            .ok()
            .and_then(char::from_u32)
            .map(|c| (c, shown))
            .ok_or_else(|| invalid(shown));
    }

    let Some(code) = read_hex4(&escape[2..]) else {
        let digits = escape[2..].bytes().take(4).take_while(u8::is_ascii_hexdigit).count();
        return Err(invalid(2 + digits + 1));
    };
    if !(0xD800..=0xDBFF).contains(&code) {
        return char::from_u32(code).map(|c| (c, 6)).ok_or_else(|| invalid(6));
    }

    // A high surrogate only decodes together with a low surrogate escape.
    let low = escape[6..]
        .strip_prefix("\\u")
        .and_then(read_hex4)
        .filter(|low| (0xDC00..=0xDFFF).contains(low))
        .ok_or_else(|| invalid(6))?;
    let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
    char::from_u32(combined).map(|c| (c, 12)).ok_or_else(|| invalid(12))
}

/// Reads exactly four hex digits from the start of `text`.
fn read_hex4(text: &str) -> Option<u32> {
    let digits = text.get(..4)?;
    if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}
