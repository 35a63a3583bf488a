//! Writing results.
//!
//! The result goes to stdout or to a file (`-` also means stdout), optionally
//! wrapped to a fixed column width.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::Path;

use textwrap::Options;
use tracing::info;

/// Wraps `text` to at most `width` columns, or returns it unchanged.
///
/// Long sequences have no break points, so they are split mid-word.
/// Amino acid chains break after a `-`.
pub fn render(text: &str, width: Option<NonZeroUsize>) -> String {
    match width {
        Some(width) => {
            let options = Options::new(width.get()).break_words(true);
            textwrap::fill(text, options)
        }
        None => text.to_string(),
    }
}

/// Writes `text` followed by a newline to any writer.
pub fn write_to<W: Write>(mut writer: W, text: &str) -> io::Result<()> {
    writeln!(writer, "{}", text)?;
    writer.flush()
}

/// Writes `text` to stdout when `output` is `None` or `"-"`, otherwise to the
/// named file.
pub fn write_output(output: Option<&Path>, text: &str) -> io::Result<()> {
    match output {
        Some(path) if path != Path::new("-") => {
            info!(path = %path.display(), "writing result to file");
            let file = File::create(path)?;
            write_to(BufWriter::new(file), text)
        }
        _ => {
            let stdout = io::stdout();
            write_to(stdout.lock(), text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn width(n: usize) -> Option<NonZeroUsize> {
        NonZeroUsize::new(n)
    }

    #[test]
    fn test_render_without_width() {
        assert_eq!(render("ACGTACGT", None), "ACGTACGT");
    }

    #[test]
    fn test_render_wraps_long_sequence() {
        let seq = "ACGTACGTAC";
        let wrapped = render(seq, width(4));
        let lines: Vec<&str> = wrapped.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.len() <= 4));
        assert_eq!(lines.concat(), seq);
    }

    #[test]
    fn test_render_short_text_unchanged() {
        assert_eq!(render("met-val", width(60)), "met-val");
    }

    #[test]
    fn test_write_to_buffer() {
        let mut buf = Vec::new();
        write_to(&mut buf, "TTAACCGG").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "TTAACCGG\n");
    }

    #[test]
    fn test_write_output_to_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.txt");

        write_output(Some(&path), "met-val-stop")?;
        assert_eq!(fs::read_to_string(&path)?, "met-val-stop\n");
        Ok(())
    }
}
