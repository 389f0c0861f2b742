//! Line parser for the `X,Y:R,G,B` record grammar.
//!
//! Malformed lines are skipped rather than aborting the parse. Each one is
//! logged and kept on the [`RecordSet`] so callers can report them.

use std::io::{BufRead, Read};

use super::{ColorRecord, RecordSet, SkippedLine};
use crate::error::Result;
use crate::render::canvas::Rgb;
use crate::text::split_lines;

/// Parse one record line.
///
/// Fields may carry surrounding whitespace. Channels are not range-checked:
/// values above 255 keep only their low 8 bits.
pub fn parse_line(line: &str) -> std::result::Result<ColorRecord, String> {
    let (coords, rgb) = match line.split(':').collect::<Vec<_>>().as_slice() {
        [coords, rgb] => (*coords, *rgb),
        parts => return Err(format!("expected one ':', found {}", parts.len() - 1)),
    };

    let [x, y] = parse_fields::<2>(coords, "coordinate")?;
    let [r, g, b] = parse_fields::<3>(rgb, "color")?;

    Ok(ColorRecord::new(
        x,
        y,
        Rgb::new(r as u8, g as u8, b as u8),
    ))
}

/// Split `s` on ',' into exactly N base-10 integers.
fn parse_fields<const N: usize>(s: &str, what: &str) -> std::result::Result<[u32; N], String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != N {
        return Err(format!(
            "expected {} {} values, found {}",
            N,
            what,
            parts.len()
        ));
    }

    let mut out = [0u32; N];
    for (slot, part) in out.iter_mut().zip(&parts) {
        let part = part.trim();
        *slot = part
            .parse()
            .map_err(|_| format!("invalid {} value '{}'", what, part))?;
    }
    Ok(out)
}

/// Parse a whole DAT document. Blank lines are ignored.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`.
pub fn parse_records(input: &str) -> RecordSet {
    let mut set = RecordSet::new();
    for (idx, line) in split_lines(input).into_iter().enumerate() {
        accept_line(&mut set, idx + 1, line);
    }
    log::debug!(
        "parsed {} records ({} skipped), extent {}x{}",
        set.len(),
        set.skipped().len(),
        set.extent().width,
        set.extent().height
    );
    set
}

/// Parse DAT records from a reader.
///
/// The stream is read to the end first; read failures and invalid UTF-8
/// abort with [`RasterError::Io`](crate::error::RasterError::Io).
pub fn parse_reader<R: BufRead>(mut reader: R) -> Result<RecordSet> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    Ok(parse_records(&input))
}

fn accept_line(set: &mut RecordSet, line_no: usize, line: &str) {
    let line = line.trim();
    if line.is_empty() {
        return;
    }
    match parse_line(line) {
        Ok(record) => set.insert(record),
        Err(reason) => {
            log::warn!("skipping DAT line {}: {}", line_no, reason);
            set.note_skipped(SkippedLine {
                line: line_no,
                reason,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dat::Extent;
    use crate::error::RasterError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_line_basic() {
        let record = parse_line("12,34:255,128,0").unwrap();
        assert_eq!(record, ColorRecord::new(12, 34, Rgb::new(255, 128, 0)));
    }

    #[test]
    fn test_parse_line_tolerates_whitespace() {
        let record = parse_line("1, 2 : 3 ,4, 5").unwrap();
        assert_eq!(record, ColorRecord::new(1, 2, Rgb::new(3, 4, 5)));
    }

    #[test]
    fn test_parse_line_rejects_wrong_shapes() {
        assert!(parse_line("garbage").is_err());
        assert!(parse_line("1,2:3,4,5:6").is_err());
        assert!(parse_line("1:3,4,5").is_err());
        assert!(parse_line("1,2,3:3,4,5").is_err());
        assert!(parse_line("1,2:3,4").is_err());
        assert!(parse_line("-1,2:3,4,5").is_err());
        assert!(parse_line("a,2:3,4,5").is_err());
    }

    #[test]
    fn test_channel_overflow_keeps_low_byte() {
        let record = parse_line("0,0:256,300,511").unwrap();
        assert_eq!(record.color, Rgb::new(0, 44, 255));
    }

    #[test]
    fn test_malformed_line_is_skipped() {
        let set = parse_records("1,2:10,20,30\ngarbage\n3,4:40,50,60\n");
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(1, 2), Some(Rgb::new(10, 20, 30)));
        assert_eq!(set.get(3, 4), Some(Rgb::new(40, 50, 60)));
        assert_eq!(set.extent(), Extent::new(4, 5));

        assert_eq!(set.skipped().len(), 1);
        assert_eq!(set.skipped()[0].line, 2);
        assert!(matches!(
            set.skipped()[0].to_error(),
            RasterError::MalformedRecord { line: 2, .. }
        ));
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        let set = parse_records("0,0:1,1,1\r\n\r\n\n2,0:2,2,2\r\n");
        assert_eq!(set.len(), 2);
        assert!(set.skipped().is_empty());
        assert_eq!(set.extent(), Extent::new(3, 1));
    }

    #[test]
    fn test_lone_carriage_return_ends_a_line() {
        let set = parse_records("0,0:1,1,1\r1,0:2,2,2\r");
        assert_eq!(set.len(), 2);
        assert!(set.skipped().is_empty());
        assert_eq!(set.get(1, 0), Some(Rgb::new(2, 2, 2)));
    }

    #[test]
    fn test_all_invalid_yields_empty_extent() {
        let set = parse_records("nope\nstill nope");
        assert!(set.is_empty());
        assert_eq!(set.extent(), Extent::new(0, 0));
        assert_eq!(set.skipped().len(), 2);
    }

    #[test]
    fn test_parse_reader_matches_parse_records() {
        let input = "0,0:255,0,0\n1,0:0,255,0\n0,1:0,0,255\n";
        let from_reader = parse_reader(std::io::Cursor::new(input)).unwrap();
        let from_str = parse_records(input);
        assert_eq!(
            from_reader.iter().collect::<Vec<_>>(),
            from_str.iter().collect::<Vec<_>>()
        );
    }
}
