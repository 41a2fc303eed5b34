//! Chunk-to-line reassembly.

use std::mem;

/// Incremental UTF-8 decoder for byte chunks.
///
/// Holds back the bytes of a multi-byte character that is cut by a chunk
/// boundary until the rest of it arrives. Invalid sequences are replaced with
/// U+FFFD.
#[derive(Debug, Default)]
pub struct Utf8ChunkDecoder {
    partial: Vec<u8>,
}

impl Utf8ChunkDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a chunk, returning all text that is complete so far
    pub fn push(&mut self, chunk: &[u8]) -> String {
        if chunk.is_empty() {
            return String::new();
        }

        let mut bytes = mem::take(&mut self.partial);
        bytes.extend_from_slice(chunk);

        let mut out = String::with_capacity(bytes.len());
        let mut rest = bytes.as_slice();
        loop {
            match std::str::from_utf8(rest) {
                Ok(text) => {
                    out.push_str(text);
                    break;
                }
                Err(e) => {
                    let (valid, after) = rest.split_at(e.valid_up_to());
                    out.push_str(&String::from_utf8_lossy(valid));
                    match e.error_len() {
                        Some(len) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            rest = &after[len..];
                        }
                        None => {
                            // Incomplete sequence at the end: wait for the next chunk
                            self.partial.extend_from_slice(after);
                            break;
                        }
                    }
                }
            }
        }
        out
    }

    /// Flush at end of input; a dangling incomplete character becomes U+FFFD
    pub fn finish(&mut self) -> String {
        if self.partial.is_empty() {
            return String::new();
        }
        self.partial.clear();
        char::REPLACEMENT_CHARACTER.to_string()
    }
}

/// Splits a sequence of text fragments into complete `\n`-terminated lines.
///
/// Exactly one pending suffix is kept between calls. Reassembly is plain
/// concatenation, so the emitted lines do not depend on how the input was
/// fragmented.
#[derive(Debug, Default)]
pub struct LineSplitter {
    pending: String,
}

impl LineSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment and return every line it completes.
    ///
    /// A `\r` directly before the terminator is stripped.
    pub fn push(&mut self, fragment: &str) -> Vec<String> {
        if fragment.is_empty() {
            return Vec::new();
        }

        // Only the new fragment can hold a terminator; the pending suffix has none
        let start = self.pending.len();
        self.pending.push_str(fragment);

        let Some(last_newline) = fragment.rfind('\n').map(|i| start + i) else {
            return Vec::new();
        };

        // Everything after the last terminator, possibly empty, stays pending
        let tail = self.pending.split_off(last_newline + 1);
        let complete = mem::replace(&mut self.pending, tail);

        complete[..last_newline]
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect()
    }

    /// The incomplete suffix waiting for its terminator
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// End of input: emit the pending suffix unless it is blank
    pub fn finish(&mut self) -> Option<String> {
        let pending = mem::take(&mut self.pending);
        if pending.trim().is_empty() { None } else { Some(pending) }
    }
}

/// True for lines that hold nothing but whitespace
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split_all(fragments: &[&str]) -> Vec<String> {
        let mut splitter = LineSplitter::new();
        let mut lines = Vec::new();
        for fragment in fragments {
            lines.extend(splitter.push(fragment));
        }
        lines.extend(splitter.finish());
        lines
    }

    #[test]
    fn test_lines_within_one_fragment() {
        let mut splitter = LineSplitter::new();
        assert_eq!(splitter.push("a\nb\nc"), vec!["a", "b"]);
        assert_eq!(splitter.pending(), "c");
    }

    #[test]
    fn test_line_split_across_fragments() {
        assert_eq!(split_all(&["{\"id\":\"a4\",\"bo", "dy\"}\n{\"id\"", ":\"a5\"}\n"]), vec![
            "{\"id\":\"a4\",\"body\"}",
            "{\"id\":\"a5\"}"
        ]);
    }

    #[test]
    fn test_every_chunking_gives_same_lines() {
        let content = "first\nsecond line\n\nthird\r\nlast";
        let expected = split_all(&[content]);
        assert_eq!(expected, vec!["first", "second line", "", "third", "last"]);

        for i in 0..=content.len() {
            for j in i..=content.len() {
                let lines = split_all(&[&content[..i], &content[i..j], &content[j..]]);
                assert_eq!(lines, expected, "split at {} and {}", i, j);
            }
        }
    }

    #[test]
    fn test_long_line_one_byte_at_a_time() {
        let mut splitter = LineSplitter::new();
        let n = 200_000;
        for _ in 0..n {
            assert!(splitter.push("x").is_empty());
        }
        assert_eq!(splitter.pending().len(), n);

        let lines = splitter.push("\ny");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), n);
        assert!(lines[0].bytes().all(|b| b == b'x'));
        assert_eq!(splitter.pending(), "y");
    }

    #[test]
    fn test_empty_fragment_is_noop() {
        let mut splitter = LineSplitter::new();
        splitter.push("abc");
        assert!(splitter.push("").is_empty());
        assert_eq!(splitter.pending(), "abc");
    }

    #[test]
    fn test_trailing_newline_leaves_empty_pending() {
        let mut splitter = LineSplitter::new();
        assert_eq!(splitter.push("x\n"), vec!["x"]);
        assert_eq!(splitter.pending(), "");
        assert!(splitter.finish().is_none());
    }

    #[test]
    fn test_finish_emits_non_blank_suffix_once() {
        let mut splitter = LineSplitter::new();
        splitter.push("{\"id\":\"z\"}");
        assert_eq!(splitter.finish().as_deref(), Some("{\"id\":\"z\"}"));
        assert!(splitter.finish().is_none());
    }

    #[test]
    fn test_finish_ignores_whitespace_suffix() {
        let mut splitter = LineSplitter::new();
        splitter.push("a\n  \t ");
        assert!(splitter.finish().is_none());
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\r"));
        assert!(!is_blank(" {} "));
    }

    #[test]
    fn test_utf8_split_inside_character() {
        let text = "手と目\n";
        let bytes = text.as_bytes();
        for i in 0..=bytes.len() {
            let mut decoder = Utf8ChunkDecoder::new();
            let mut out = decoder.push(&bytes[..i]);
            out.push_str(&decoder.push(&bytes[i..]));
            out.push_str(&decoder.finish());
            assert_eq!(out, text, "split at byte {}", i);
        }
    }

    #[test]
    fn test_utf8_one_byte_at_a_time() {
        let text = "ça va 👍";
        let mut decoder = Utf8ChunkDecoder::new();
        let mut out = String::new();
        for byte in text.as_bytes() {
            out.push_str(&decoder.push(std::slice::from_ref(byte)));
        }
        out.push_str(&decoder.finish());
        assert_eq!(out, text);
    }

    #[test]
    fn test_utf8_invalid_bytes_are_replaced() {
        let mut decoder = Utf8ChunkDecoder::new();
        assert_eq!(decoder.push(b"a\xffb"), "a\u{FFFD}b");
    }

    #[test]
    fn test_utf8_dangling_sequence_at_end() {
        let mut decoder = Utf8ChunkDecoder::new();
        assert_eq!(decoder.push(b"ok\xe6\x89"), "ok");
        assert_eq!(decoder.finish(), "\u{FFFD}");
        assert_eq!(decoder.finish(), "");
    }
}
