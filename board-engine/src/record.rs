//! Write-only game record export.
//!
//! Records use the SGF node syntax: a root node naming the game (`GM[1]`),
//! the format version (`FF[4]`) and the board size, followed by one node per
//! move. Importing records is left to callers.

use crate::turn::Move;

/// Incrementally builds a record string.
#[derive(Debug, Clone)]
pub struct RecordWriter {
    buf: String,
}

impl RecordWriter {
    pub fn new(size: u8) -> Self {
        let mut buf = String::from("(;");
        write_number("GM", 1, &mut buf);
        write_number("FF", 4, &mut buf);
        write_number("SZ", size as usize, &mut buf);
        RecordWriter { buf }
    }

    pub fn push_move(&mut self, m: &Move) {
        self.buf.push(';');
        self.buf.push(m.stone.letter());
        self.buf.push('[');
        self.buf.push(coord_char(m.x()));
        self.buf.push(coord_char(m.y()));
        self.buf.push(']');
    }

    pub fn finish(mut self) -> String {
        self.buf.push(')');
        self.buf
    }
}

fn write_number(ident: &str, n: usize, buf: &mut String) {
    buf.push_str(ident);
    buf.push('[');
    buf.push_str(&n.to_string());
    buf.push(']');
}

/// `a`..`z` for 0..26, then `A`..`Z`; `?` past the 52nd line.
fn coord_char(n: u8) -> char {
    match n {
        0..26 => (b'a' + n) as char,
        26..52 => (b'A' + n - 26) as char,
        _ => '?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Stone;

    #[test]
    fn empty_record_has_header_only() {
        assert_eq!(RecordWriter::new(19).finish(), "(;GM[1]FF[4]SZ[19])");
    }

    #[test]
    fn moves_use_letter_pairs() {
        let mut w = RecordWriter::new(13);
        w.push_move(&Move::new(Stone::Black, (0, 0), 1));
        w.push_move(&Move::new(Stone::White, (12, 3), 2));
        assert_eq!(w.finish(), "(;GM[1]FF[4]SZ[13];B[aa];W[md])");
    }

    #[test]
    fn large_coordinates_continue_in_upper_case() {
        assert_eq!(coord_char(25), 'z');
        assert_eq!(coord_char(26), 'A');
        assert_eq!(coord_char(51), 'Z');
    }
}
