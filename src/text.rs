use thiserror::Error;

/// Terminator appended to every input. A NUL never occurs in sane text input
/// so the whole printable alphabet stays usable.
pub const SENTINEL: u8 = 0x00;

#[derive(Debug, Error)]
pub enum Error {
    #[error("input contains the sentinel byte 0x00 at position {0}")]
    SentinelInInput(usize),
}

/// The shared text buffer: input bytes plus the sentinel. Every edge and node
/// label in the tree is an `(offset, length)` view into this buffer, never a
/// copy.
pub struct Text {
    buf: Vec<u8>,
}

impl Text {
    pub fn new(input: &[u8]) -> Result<Self, Error> {
        if let Some(pos) = input.iter().position(|&b| b == SENTINEL) {
            return Err(Error::SentinelInInput(pos));
        }

        let mut buf = Vec::with_capacity(input.len() + 1);
        buf.extend_from_slice(input);
        buf.push(SENTINEL);
        Ok(Self { buf })
    }

    /// Length including the sentinel.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn at(&self, i: usize) -> u8 {
        self.buf[i]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn slice(&self, idx: usize, len: usize) -> &[u8] {
        &self.buf[idx .. idx + len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_sentinel() {
        let t = Text::new(b"abc").unwrap();
        assert_eq!(t.len(), 4);
        assert_eq!(t.as_bytes(), b"abc\0");
        assert_eq!(t.at(3), SENTINEL);
    }

    #[test]
    fn empty_input_is_just_the_sentinel() {
        let t = Text::new(b"").unwrap();
        assert_eq!(t.len(), 1);
        assert_eq!(t.as_bytes(), &[SENTINEL]);
    }

    #[test]
    fn rejects_embedded_sentinel() {
        match Text::new(b"ab\0cd") {
            Err(Error::SentinelInInput(2)) => (),
            other => panic!("expected SentinelInInput(2), got {:?}", other.map(|t| t.len())),
        }
    }
}
