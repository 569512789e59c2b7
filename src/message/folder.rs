//! Producing raw message data.
//!
//! Each header and the body become one logical line. When line length is limited,
//! every logical line is folded independently: words are accumulated greedily and once
//! the buffer (plus CRLF) exceeds the limit it is broken at its last whitespace run.
//! Continuation lines always start with whitespace, so parsing them back unfolds the value.

use std::borrow::Cow;

use tracing::trace;

use crate::message::{CRLF, HeaderList};
use crate::utils::cc::is_fold_space;

/// produce_message renders headers and body as CRLF terminated data.
/// Zero `max_line_length` disables folding.
pub fn produce_message(headers: &HeaderList, body: &[u8], max_line_length: usize) -> Vec<u8> {
    let mut res = Vec::new();
    for h in headers {
        let line = format!("{}: {}", h.name, h.value);
        push_folded(&mut res, line.as_bytes(), max_line_length);
    }
    res.extend_from_slice(CRLF);
    if !body.is_empty() {
        push_folded(&mut res, body, max_line_length);
    }
    res
}

fn push_folded(res: &mut Vec<u8>, line: &[u8], max_line_length: usize) {
    for segment in fold_line(line, max_line_length) {
        res.extend_from_slice(&segment);
        res.extend_from_slice(CRLF);
    }
}

/// fold_line splits single logical line into physical lines, without terminators.
///
/// Line is never broken inside a word. A word longer than the limit is emitted as is.
/// Every segment but the first one starts with whitespace.
pub fn fold_line(line: &[u8], max_line_length: usize) -> Vec<Cow<'_, [u8]>> {
    if max_line_length == 0 || line.len() + CRLF.len() <= max_line_length {
        return vec![Cow::Borrowed(line)];
    }

    let mut res: Vec<Cow<[u8]>> = Vec::new();
    let mut buf = Vec::new();
    let mut rest = line;
    while !rest.is_empty() {
        let offset = next_word_end(rest);
        buf.extend_from_slice(&rest[..offset]);
        rest = &rest[offset..];

        if buf.len() + CRLF.len() <= max_line_length {
            continue;
        }
        if let Some(run) = last_space_run(&buf) {
            let head = trim_fold_space_end(&buf[..run]);
            if !head.is_empty() {
                res.push(Cow::Owned(head.to_vec()));
                buf = buf.split_off(run);
            }
        }
    }

    let tail = trim_fold_space_start(&buf);
    if res.is_empty() {
        res.push(Cow::Owned(buf));
    } else if !tail.is_empty() {
        let mut segment = Vec::with_capacity(tail.len() + 1);
        segment.push(b' ');
        segment.extend_from_slice(tail);
        res.push(Cow::Owned(segment));
    }
    trace!(segments = res.len(), limit = max_line_length, "folded line");
    res
}

fn trim_fold_space_start(data: &[u8]) -> &[u8] {
    let start = data.iter().position(|b| !is_fold_space(*b)).unwrap_or_else(|| data.len());
    &data[start..]
}

fn trim_fold_space_end(data: &[u8]) -> &[u8] {
    let end = data.iter().rposition(|b| !is_fold_space(*b)).map_or(0, |p| p + 1);
    &data[..end]
}

/// next_word_end returns offset right after first whitespace run in data,
/// or data length if there is none.
fn next_word_end(data: &[u8]) -> usize {
    let start = match data.iter().position(|b| is_fold_space(*b)) {
        Some(p) => p,
        None => return data.len(),
    };
    data[start..].iter()
        .position(|b| !is_fold_space(*b))
        .map(|p| start + p)
        .unwrap_or_else(|| data.len())
}

/// last_space_run returns offset where last whitespace run in data begins.
fn last_space_run(data: &[u8]) -> Option<usize> {
    let end = data.iter().rposition(|b| is_fold_space(*b))?;
    let start = data[..end].iter()
        .rposition(|b| !is_fold_space(*b))
        .map(|p| p + 1)
        .unwrap_or(0);
    Some(start)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::message::Header;

    #[test]
    fn test_can_fold_lines() {
        for (i, l, o) in [
            ("Subject: This is a test", 14, vec!["Subject: This", " is a test"]),
            ("Subject: This is a test", 0, vec!["Subject: This is a test"]),
            ("Subject: This is a test", 25, vec!["Subject: This is a test"]),
            ("Subject: This is a test", 24, vec!["Subject: This is a", " test"]),
            ("", 10, vec![""]),
            // words longer than limit are not broken
            ("Supercalifragilisticexpialidocious", 10, vec!["Supercalifragilisticexpialidocious"]),
            ("X: Supercalifragilisticexpialidocious", 10, vec!["X:", " Supercalifragilisticexpialidocious"]),
            ("X: Supercalifragilisticexpialidocious is long", 10, vec!["X: Supercalifragilisticexpialidocious", " is long"]),
            ("a\tb\tc\td", 5, vec!["a\tb", "\tc", " d"]),
            ("a b c d e f g h", 7, vec!["a b c", " d e f", " g h"]),
        ].iter() {
            let res = fold_line(i.as_bytes(), *l);
            let expected: Vec<&[u8]> = o.iter().map(|s| s.as_bytes()).collect();
            assert_eq!(res, expected, "{:?} at {}", i, l);
        }
    }

    #[test]
    fn test_can_produce_message() {
        let headers: HeaderList = vec![
            Header::new("Host", "www.example.com"),
            Header::new("Via", "a"),
            Header::new("Via", "b"),
        ].into();
        assert_eq!(
            produce_message(&headers, b"", 0),
            &b"Host: www.example.com\r\nVia: a\r\nVia: b\r\n\r\n"[..]
        );
        assert_eq!(
            produce_message(&headers, b"Hello body", 0),
            &b"Host: www.example.com\r\nVia: a\r\nVia: b\r\n\r\nHello body\r\n"[..]
        );
        assert_eq!(produce_message(&HeaderList::new(), b"", 0), &b"\r\n"[..]);
    }

    #[test]
    fn test_can_produce_folded_message() {
        let headers: HeaderList = vec![Header::new("Subject", "This is a test")].into();
        assert_eq!(
            produce_message(&headers, b"", 14),
            &b"Subject: This\r\n is a test\r\n\r\n"[..]
        );
        assert_eq!(
            produce_message(&headers, b"Body text is folded too", 14),
            &b"Subject: This\r\n is a test\r\n\r\nBody text is\r\n folded too\r\n"[..]
        );
    }

    #[test]
    fn test_eight_bit_body_is_emitted_verbatim() {
        let headers: HeaderList = vec![Header::new("Host", "h")].into();
        assert_eq!(
            produce_message(&headers, b"caf\xe9 \xff", 0),
            &b"Host: h\r\n\r\ncaf\xe9 \xff\r\n"[..]
        );
        assert_eq!(
            fold_line(b"caf\xe9 na\xefve \xff\xfe", 10),
            vec![&b"caf\xe9 na\xefve"[..], &b" \xff\xfe"[..]]
        );
    }
}
