use std::fmt::Debug;

use crate::message::{fold_line, Message};
use crate::utils::cc::is_fold_space;

pub fn fuzz_parse_message(data: &[u8]) {
    let mut msg = Message::new();
    if msg.parse_bytes(data).is_err() {
        return;
    }
    let produced = msg.produce();
    // producing is read only
    assert_eq!(produced, msg.produce());

    // values are validated and trimmed so headers survive another round
    let mut reparsed = Message::new();
    reparsed.parse_bytes(&produced).expect("Produced message has to be valid");
    assert_eq!(reparsed.get_headers(), msg.get_headers());

    // bare CR and LF in body may join into CRLF once produced
    let body = msg.get_body();
    if !body.iter().any(|b| *b == b'\r' || *b == b'\n') {
        assert_eq!(reparsed.get_body(), body);
    }
}

/// First byte of data is used as line length limit.
pub fn fuzz_parse_message_with_line_length(data: &[u8]) {
    if data.is_empty() {
        return;
    }
    let mut msg = Message::with_line_length(data[0] as usize);
    let res = msg.parse_bytes(&data[1..]);
    sink(res);
    sink(msg.produce());
}

pub fn fuzz_fold_line(data: &[u8]) {
    let expected: Vec<u8> = data.iter().cloned().filter(|b| !is_fold_space(*b)).collect();
    for limit in [0usize, 1, 2, 3, 14, 78, 1000].iter() {
        let segments = fold_line(data, *limit);
        // folding never drops non whitespace bytes
        let folded: Vec<u8> = segments.iter()
            .flat_map(|s| s.iter().cloned())
            .filter(|b| !is_fold_space(*b))
            .collect();
        assert_eq!(folded, expected);
    }
}

#[allow(dead_code)]
#[inline(never)]
fn sink<T: Debug>(_v: T) {
    // eprintln!("{:?}", v);
}
