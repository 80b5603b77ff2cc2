/// Terminates every encoded string.
pub const TERMINATOR: u8 = 0xff;

/// Line break byte. Followed by `0x00` it also ends a string in some tables.
pub const NEWLINE: u8 = 0xfe;

const LITERAL_LEN: usize = "[0x00]".len();

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DecodeError {
    #[error("no character mapping for byte {byte:#04x} at offset {offset}")]
    Unmapped { offset: usize, byte: u8 },

    #[error("input ended inside a multi-byte sequence at offset {offset}")]
    UnexpectedEnd { offset: usize },

    #[error("matched sequence {expected:02x?} does not match input {actual:02x?}")]
    MatchConsistency { expected: Vec<u8>, actual: Vec<u8> },

    #[error("no terminator in {0:02x?}")]
    Unterminated(Vec<u8>),
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EncodeError {
    #[error("failed to convert string to bytes: {string:?} (no mapping for {character:?})")]
    Unmapped { string: String, character: String },
}

#[derive(Debug, PartialEq)]
enum Rule {
    PushText(String),
    Stop,
}

struct Entry {
    pattern: Box<[u8]>,
    rule: Rule,
}

/// What to do with a byte that starts no known sequence.
pub enum FallthroughBehavior {
    /// Render it as a `[0xNN]` literal.
    Literal,
    Error,
}

pub struct CodecBuilder {
    decode_rules: patricia_tree::PatriciaMap<Entry>,
    encode_rules: patricia_tree::PatriciaMap<Box<[u8]>>,
    max_pattern_len: usize,
    fallthrough: FallthroughBehavior,
}

impl CodecBuilder {
    pub fn with_fallthrough_behavior(mut self, behavior: FallthroughBehavior) -> Self {
        self.fallthrough = behavior;
        self
    }

    fn add_rule(mut self, pat: &[u8], rule: Rule) -> Self {
        if let Some(existing) = self.decode_rules.get(pat) {
            // The first mapping for a sequence is the one decoding uses.
            if existing.rule != rule {
                log::warn!(
                    "ignoring {:?} for {:02x?}, already mapped to {:?}",
                    rule,
                    pat,
                    existing.rule
                );
            }
            return self;
        }
        self.max_pattern_len = self.max_pattern_len.max(pat.len());
        self.decode_rules.insert(
            pat,
            Entry {
                pattern: Box::from(pat),
                rule,
            },
        );
        self
    }

    pub fn add_stop_rule(self, pat: &[u8]) -> Self {
        self.add_rule(pat, Rule::Stop)
    }

    pub fn add_text_rule(mut self, pat: &[u8], s: &str) -> Self {
        // Later mappings for the same text win when encoding.
        self.encode_rules.insert(s.as_bytes(), Box::from(pat));
        self.add_rule(pat, Rule::PushText(s.to_string()))
    }

    pub fn add_charset_rules(self, charset: &[(&[u8], &str)]) -> Self {
        let mut this = self;
        for (pat, c) in charset {
            this = this.add_text_rule(pat, c);
        }
        this
    }

    pub fn build(self) -> Codec {
        Codec {
            decode_rules: self.decode_rules,
            encode_rules: self.encode_rules,
            max_pattern_len: self.max_pattern_len,
            fallthrough: self.fallthrough,
        }
    }
}

/// Converts between a game's native string bytes and readable text.
///
/// Decoding is greedy by sequence length: at each position the shortest
/// mapped sequence that matches wins, and bytes with no mapping come out as
/// `[0xNN]` literals so that the text can be encoded back to the same bytes.
pub struct Codec {
    decode_rules: patricia_tree::PatriciaMap<Entry>,
    encode_rules: patricia_tree::PatriciaMap<Box<[u8]>>,
    max_pattern_len: usize,
    fallthrough: FallthroughBehavior,
}

impl Codec {
    pub fn builder() -> CodecBuilder {
        CodecBuilder {
            decode_rules: patricia_tree::PatriciaMap::new(),
            encode_rules: patricia_tree::PatriciaMap::new(),
            max_pattern_len: 0,
            fallthrough: FallthroughBehavior::Literal,
        }
    }

    fn match_at(&self, buf: &[u8], offset: usize) -> Result<Option<(usize, &Rule)>, DecodeError> {
        let rest = &buf[offset..];
        for len in 1..=self.max_pattern_len {
            // Only reached past the first byte while some longer sequence is still a candidate.
            let candidate = rest.get(..len).ok_or(DecodeError::UnexpectedEnd { offset })?;

            if let Some(entry) = self.decode_rules.get(candidate) {
                if *entry.pattern != *candidate {
                    return Err(DecodeError::MatchConsistency {
                        expected: entry.pattern.to_vec(),
                        actual: candidate.to_vec(),
                    });
                }
                return Ok(Some((len, &entry.rule)));
            }

            if self.decode_rules.iter_prefix(candidate).next().is_none() {
                return Ok(None);
            }
        }
        Ok(None)
    }

    /// Decodes bytes up to the first terminator, or the end of the buffer if there is none.
    pub fn decode(&self, buf: &[u8]) -> Result<String, DecodeError> {
        let mut out = String::new();
        let mut offset = 0;

        while offset < buf.len() {
            match self.match_at(buf, offset)? {
                Some((_, Rule::Stop)) => {
                    break;
                }
                Some((len, Rule::PushText(t))) => {
                    out.push_str(t);
                    offset += len;
                }
                None => match self.fallthrough {
                    FallthroughBehavior::Literal => {
                        out.push_str(&format!("[0x{:02x}]", buf[offset]));
                        offset += 1;
                    }
                    FallthroughBehavior::Error => {
                        return Err(DecodeError::Unmapped {
                            offset,
                            byte: buf[offset],
                        });
                    }
                },
            }
        }

        Ok(out)
    }

    /// Decodes one string out of a window of raw game data.
    ///
    /// A single leading `0x00` or `0x0a` is dropped, and the string ends at the
    /// first `0xff` or at a `0xfe 0x00` pair.
    pub fn read_string(&self, buf: &[u8]) -> Result<String, DecodeError> {
        if buf.is_empty() {
            return Ok(String::new());
        }

        let buf = match buf[0] {
            0x00 | 0x0a => &buf[1..],
            _ => buf,
        };

        let end = (0..buf.len())
            .find(|&i| buf[i] == TERMINATOR || (buf[i] == NEWLINE && buf.get(i + 1) == Some(&0x00)))
            .ok_or_else(|| DecodeError::Unterminated(buf.to_vec()))?;

        self.decode(&buf[..end])
    }

    pub fn encode(&self, s: &str) -> Result<Vec<u8>, EncodeError> {
        let mut buf = vec![];
        let mut rest = s;

        while !rest.is_empty() {
            if let Some((b, tail)) = parse_literal(rest) {
                buf.push(b);
                rest = tail;
                continue;
            }

            let (prefix, pat) = self
                .encode_rules
                .get_longest_common_prefix(rest.as_bytes())
                .ok_or_else(|| EncodeError::Unmapped {
                    string: s.to_string(),
                    character: rest.chars().next().map(String::from).unwrap_or_default(),
                })?;
            buf.extend_from_slice(pat);
            rest = &rest[prefix.len()..];
        }

        buf.push(TERMINATOR);
        Ok(buf)
    }
}

fn parse_literal(s: &str) -> Option<(u8, &str)> {
    let digits = s.get(..LITERAL_LEN)?.strip_prefix("[0x")?.strip_suffix(']')?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let b = u8::from_str_radix(digits, 16).ok()?;
    Some((b, &s[LITERAL_LEN..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_codec() -> Codec {
        Codec::builder()
            .add_stop_rule(b"\xff")
            .add_charset_rules(&[
                (b"\x00", "a"),
                (b"\x01", "b"),
                (b"\x10\x00", "X"),
                (b"\x10\x01", "Y"),
                (b"\xfe", "\\n"),
            ])
            .build()
    }

    #[test]
    fn test_decode_prefers_first_complete_sequence() {
        let codec = Codec::builder()
            .add_charset_rules(&[(b"\x01", "short"), (b"\x01\x02", "long")])
            .build();
        assert_eq!(codec.decode(b"\x01\x02").unwrap(), "short[0x02]");
    }

    #[test]
    fn test_decode_multi_byte() {
        assert_eq!(test_codec().decode(b"\x00\x10\x01\x01\xff").unwrap(), "aYb");
    }

    #[test]
    fn test_decode_stops_at_terminator() {
        assert_eq!(test_codec().decode(b"\x00\xff\x01").unwrap(), "a");
    }

    #[test]
    fn test_decode_broken_multi_byte_falls_back_to_literal() {
        assert_eq!(test_codec().decode(b"\x10\x05\xff").unwrap(), "[0x10][0x05]");
    }

    #[test]
    fn test_decode_truncated_multi_byte() {
        assert_eq!(
            test_codec().decode(b"\x00\x10"),
            Err(DecodeError::UnexpectedEnd { offset: 1 })
        );
    }

    #[test]
    fn test_decode_without_fallback() {
        let codec = Codec::builder()
            .add_stop_rule(b"\xff")
            .add_text_rule(b"\x00", "a")
            .with_fallthrough_behavior(FallthroughBehavior::Error)
            .build();
        assert_eq!(
            codec.decode(b"\x00\x42\xff"),
            Err(DecodeError::Unmapped { offset: 1, byte: 0x42 })
        );
    }

    #[test]
    fn test_decode_duplicate_sequence_keeps_first() {
        let codec = Codec::builder()
            .add_text_rule(b"\x00", "a")
            .add_text_rule(b"\x00", "z")
            .build();
        assert_eq!(codec.decode(b"\x00").unwrap(), "a");
    }

    #[test]
    fn test_encode_duplicate_text_keeps_last() {
        let codec = Codec::builder()
            .add_text_rule(b"\x00", "a")
            .add_text_rule(b"\x01", "a")
            .build();
        assert_eq!(codec.encode("a").unwrap(), b"\x01\xff");
    }

    #[test]
    fn test_encode_literal_and_escape() {
        assert_eq!(test_codec().encode("a[0x99]\\nY").unwrap(), b"\x00\x99\xfe\x10\x01\xff");
    }

    #[test]
    fn test_encode_unmapped_reports_whole_string() {
        assert_eq!(
            test_codec().encode("ab?"),
            Err(EncodeError::Unmapped {
                string: "ab?".to_string(),
                character: "?".to_string(),
            })
        );
    }

    #[test]
    fn test_encode_malformed_literal() {
        assert!(test_codec().encode("[0x+1]").is_err());
        assert!(test_codec().encode("[0x1").is_err());
    }

    #[test]
    fn test_read_string_skips_leading_byte() {
        assert_eq!(test_codec().read_string(b"\x0a\x00\x01\xff\x00").unwrap(), "ab");
        assert_eq!(test_codec().read_string(b"\x00\x00\xff").unwrap(), "a");
    }

    #[test]
    fn test_read_string_newline_terminator() {
        assert_eq!(test_codec().read_string(b"\x01\xfe\x00\x01\xff").unwrap(), "b");
        assert_eq!(test_codec().read_string(b"\x01\xfe\x01\xff").unwrap(), "b\\nb");
    }

    #[test]
    fn test_read_string_unterminated() {
        assert_eq!(
            test_codec().read_string(b"\x01\x01"),
            Err(DecodeError::Unterminated(vec![0x01, 0x01]))
        );
        assert_eq!(test_codec().read_string(b"").unwrap(), "");
    }
}
