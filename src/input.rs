use std::io::{self, BufRead, Read};

use crate::error::Error;

/// Size of the line buffer, terminator included.
pub const INPUT_BUFFER: u64 = 1024;

/// Reads one line of at most `INPUT_BUFFER - 1` bytes and strips the newline.
pub fn read_input<R: BufRead>(reader: R) -> Result<String, Error> {
    let mut buf = Vec::new();
    let n = reader
        .take(INPUT_BUFFER - 1)
        .read_until(b'\n', &mut buf)
        .map_err(Error::Read)?;
    if n == 0 {
        return Err(Error::Read(io::ErrorKind::UnexpectedEof.into()));
    }

    let cut_short = n as u64 == INPUT_BUFFER - 1 && buf.last() != Some(&b'\n');
    if let Some(pos) = buf.iter().position(|&b| b == b'\n') {
        buf.truncate(pos);
    }
    // The byte limit may split the last character; keep the complete ones.
    if cut_short {
        let split = std::str::from_utf8(&buf)
            .err()
            .filter(|e| e.error_len().is_none())
            .map(|e| e.valid_up_to());
        if let Some(valid) = split {
            buf.truncate(valid);
        }
    }
    let line = String::from_utf8(buf)
        .map_err(|e| Error::Read(io::Error::new(io::ErrorKind::InvalidData, e)))?;

    if line.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn strips_trailing_newline() {
        let line = read_input(Cursor::new("Hello world\n")).unwrap();
        assert_eq!(line, "Hello world");
    }

    #[test]
    fn accepts_line_without_newline() {
        let line = read_input(Cursor::new("no terminator")).unwrap();
        assert_eq!(line, "no terminator");
    }

    #[test]
    fn reads_only_the_first_line() {
        let mut reader = Cursor::new("first\nsecond\n");
        assert_eq!(read_input(&mut reader).unwrap(), "first");
        assert_eq!(read_input(&mut reader).unwrap(), "second");
    }

    #[test]
    fn keeps_carriage_return_and_spaces() {
        let line = read_input(Cursor::new("  spaced \r\n")).unwrap();
        assert_eq!(line, "  spaced \r");
    }

    #[test]
    fn newline_only_is_empty() {
        assert!(matches!(read_input(Cursor::new("\n")), Err(Error::EmptyInput)));
    }

    #[test]
    fn end_of_stream_is_read_error() {
        assert!(matches!(read_input(Cursor::new("")), Err(Error::Read(_))));
    }

    #[test]
    fn invalid_utf8_is_read_error() {
        let bytes: &[u8] = &[0xff, 0xfe, b'\n'];
        assert!(matches!(read_input(Cursor::new(bytes)), Err(Error::Read(_))));
    }

    #[test]
    fn long_lines_are_bounded() {
        let long = "a".repeat(2000);
        let line = read_input(Cursor::new(long)).unwrap();
        assert_eq!(line.len(), (INPUT_BUFFER - 1) as usize);
    }

    #[test]
    fn long_multibyte_line_is_truncated_on_char_boundary() {
        let input = format!("{}é\n", "a".repeat(1022));
        let line = read_input(Cursor::new(input)).unwrap();
        assert_eq!(line, "a".repeat(1022));
    }

    #[test]
    fn short_line_ending_mid_character_is_read_error() {
        let bytes: &[u8] = &[b'a', b'b', 0xc3, b'\n'];
        assert!(matches!(read_input(Cursor::new(bytes)), Err(Error::Read(_))));
    }

    #[test]
    fn invalid_byte_before_the_limit_is_still_read_error() {
        let mut bytes = vec![b'a'; 10];
        bytes.extend_from_slice(&[0xc3, b'a', b'\n']);
        assert!(matches!(read_input(Cursor::new(bytes)), Err(Error::Read(_))));
    }
}
