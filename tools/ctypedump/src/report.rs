//! Writing dumps and comparison results.

use std::io::{self, Write};

use crossterm::style::Stylize;

use ctype_rules::{write_sweep, Mismatch, Ruleset};

/// Renders the whole dump before writing it, so a failed write never
/// leaves a partial line behind a complete one.
pub fn write_dump<W, R>(out: &mut W, rules: &R) -> io::Result<()>
where
    W: Write + ?Sized,
    R: Ruleset + ?Sized,
{
    let mut dump = String::with_capacity(256 * 48);
    write_sweep(&mut dump, rules).map_err(|_| io::Error::other("failed to render the dump"))?;
    out.write_all(dump.as_bytes())
}

/// One line per mismatch: missing classes as `-name`, extra ones as
/// `+name`, colored red and green when `color` is set.
pub fn write_mismatches<W: Write + ?Sized>(
    out: &mut W,
    mismatches: &[Mismatch],
    color: bool,
) -> io::Result<()> {
    for mismatch in mismatches {
        if !color {
            writeln!(out, "{mismatch}")?;
            continue;
        }
        write!(out, "0x{:02X}", mismatch.value)?;
        for class in mismatch.missing().iter() {
            write!(out, " {}", format!("-{class}").red())?;
        }
        for class in mismatch.extra().iter() {
            write!(out, " {}", format!("+{class}").green())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use ctype_rules::{compare, Ascii, ClassTable, Latin1, Mismatch};

    use super::{write_dump, write_mismatches};

    fn render(mismatches: &[Mismatch], color: bool) -> String {
        let mut out = Vec::new();
        write_mismatches(&mut out, mismatches, color).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn dump_has_one_line_per_byte() {
        let mut out = Vec::new();
        write_dump(&mut out, &Ascii).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 256);
        assert!(text.starts_with("0x00 cntrl\n0x01 cntrl\n"));
    }

    #[test]
    fn plain_mismatches() {
        let expected = ClassTable::snapshot(&Ascii);
        let actual = ClassTable::snapshot(&Latin1);
        let mismatches: Vec<Mismatch> = compare(&expected, &actual).skip(0x45).take(4).collect();
        assert_snapshot!(render(&mismatches, false).trim_end(), @r"
        0xC5 +alnum +alpha +graph +print +upper
        0xC6 +alnum +alpha +graph +print +upper
        0xC7 +alnum +alpha +graph +print +upper
        0xC8 +alnum +alpha +graph +print +upper
        ");
    }

    #[test]
    fn no_mismatches_writes_nothing() {
        assert_eq!(render(&[], false), "");
        assert_eq!(render(&[], true), "");
    }

    #[test]
    fn colored_mismatches_keep_the_names() {
        let expected = ClassTable::snapshot(&Latin1);
        let actual = ClassTable::snapshot(&Ascii);
        let mismatches: Vec<Mismatch> = compare(&expected, &actual).take(1).collect();
        let text = render(&mismatches, true);
        assert!(text.starts_with("0x80 "));
        assert!(text.contains("-cntrl"));
        assert!(text.ends_with('\n'));
    }
}
