//! Tests for the line reader's terminator handling

use httpd::http::line::LineReader;

#[tokio::test]
async fn test_crlf_terminated_line() {
    let mut reader = LineReader::new(&b"abc\r\n"[..]);
    assert_eq!(reader.read_line().await.unwrap(), "abc");
}

#[tokio::test]
async fn test_lf_terminated_line() {
    let mut reader = LineReader::new(&b"abc\n"[..]);
    assert_eq!(reader.read_line().await.unwrap(), "abc");
}

#[tokio::test]
async fn test_bare_cr_terminated_line() {
    let mut reader = LineReader::new(&b"abc\r"[..]);
    assert_eq!(reader.read_line().await.unwrap(), "abc");
}

#[tokio::test]
async fn test_empty_stream_yields_empty_line() {
    let mut reader = LineReader::new(&b""[..]);
    assert_eq!(reader.read_line().await.unwrap(), "");
}

#[tokio::test]
async fn test_eof_synthesizes_terminator() {
    // No terminator at all: the partial content is the line.
    let mut reader = LineReader::new(&b"partial"[..]);
    assert_eq!(reader.read_line().await.unwrap(), "partial");
}

#[tokio::test]
async fn test_blank_crlf_line() {
    let mut reader = LineReader::new(&b"\r\nrest"[..]);
    assert_eq!(reader.read_line().await.unwrap(), "");
    assert_eq!(reader.read_line().await.unwrap(), "rest");
}

#[tokio::test]
async fn test_cr_followed_by_other_byte_is_not_lost() {
    // The peeked byte after a bare CR belongs to the next line.
    let mut reader = LineReader::new(&b"abc\rdef\n"[..]);
    assert_eq!(reader.read_line().await.unwrap(), "abc");
    assert_eq!(reader.read_line().await.unwrap(), "def");
}

#[tokio::test]
async fn test_multiple_mixed_lines() {
    let mut reader = LineReader::new(&b"one\r\ntwo\nthree\r"[..]);
    assert_eq!(reader.read_line().await.unwrap(), "one");
    assert_eq!(reader.read_line().await.unwrap(), "two");
    assert_eq!(reader.read_line().await.unwrap(), "three");
}

#[tokio::test]
async fn test_overlong_line_truncates_to_cap_minus_one() {
    let mut reader = LineReader::with_max_line(&b"abcdefghij\r\n"[..], 8);
    let line = reader.read_line().await.unwrap();
    assert_eq!(line, "abcdefg");
    assert_eq!(line.len(), 7);

    // The remainder is still in the stream for the next call.
    assert_eq!(reader.read_line().await.unwrap(), "hij");
}

#[tokio::test]
async fn test_read_byte_honors_lookahead() {
    let mut reader = LineReader::new(&b"a\rXY"[..]);
    assert_eq!(reader.read_line().await.unwrap(), "a");
    assert_eq!(reader.read_byte().await.unwrap(), Some(b'X'));
    assert_eq!(reader.read_byte().await.unwrap(), Some(b'Y'));
    assert_eq!(reader.read_byte().await.unwrap(), None);
}
