//! Character classes used by the message codec.
//! All of them are plain byte range checks. Everything outside of US-ASCII is rejected
//! by the header classes, so validated header bytes are always valid `str`.

/// WSP as defined by RFC 5234: space or horizontal tab.
#[inline]
pub fn is_white_space(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// Whitespace that may separate words of a line which is going to be folded.
#[inline]
pub fn is_fold_space(b: u8) -> bool {
    match b {
        b' ' | b'\t' | b'\x0b' | b'\x0c' => true,
        _ => false,
    }
}

/// Whitespace removed around header names, header values and the body.
/// It's the C locale `isspace` set: WSP, CR, LF, VT and FF.
#[inline]
pub fn is_trim_space(b: u8) -> bool {
    match b {
        b' ' | b'\t' | b'\r' | b'\n' | b'\x0b' | b'\x0c' => true,
        _ => false,
    }
}

/// ftext of RFC 5322: printable US-ASCII except colon.
#[inline]
pub fn is_field_name_byte(b: u8) -> bool {
    match b {
        0x21..=0x39 | 0x3B..=0x7E => true,
        _ => false,
    }
}

/// VCHAR or WSP.
#[inline]
pub fn is_field_value_byte(b: u8) -> bool {
    match b {
        0x20..=0x7E => true,
        _ => is_white_space(b),
    }
}

#[inline]
pub fn is_field_name(data: &[u8]) -> bool {
    data.iter().cloned().all(is_field_name_byte)
}

#[inline]
pub fn is_field_value(data: &[u8]) -> bool {
    data.iter().cloned().all(is_field_value_byte)
}

/// trim_space returns data without leading and trailing `is_trim_space` bytes.
pub fn trim_space(data: &[u8]) -> &[u8] {
    let start = match data.iter().position(|b| !is_trim_space(*b)) {
        Some(p) => p,
        None => return &data[..0],
    };
    let end = data.iter().rposition(|b| !is_trim_space(*b)).map_or(start, |p| p + 1);
    &data[start..end]
}

/// trim_space_str is `trim_space` for text. Trimmed bytes are ASCII so char boundaries hold.
#[inline]
pub fn trim_space_str(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_ascii() && is_trim_space(c as u8))
}
