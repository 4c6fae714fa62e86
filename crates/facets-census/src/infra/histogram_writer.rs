//! Histogram file writer
//!
//! Writes one count per line for sizes 0, 1, 2, ... and stops at the first
//! size with a zero count.

use crate::domain::histogram::Histogram;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    Ok(())
}

/// Write the histogram to a line-oriented sink
///
/// Returns the number of lines written.
pub fn write_histogram(mut writer: impl Write, histogram: &Histogram) -> io::Result<usize> {
    let mut lines = 0;
    for count in histogram.emitted() {
        writeln!(writer, "{}", count)?;
        lines += 1;
    }
    writer.flush()?;
    Ok(lines)
}

/// Save the histogram to a file, creating parent directories as needed
pub fn save_histogram(path: impl AsRef<Path>, histogram: &Histogram) -> io::Result<usize> {
    ensure_parent_dir(path.as_ref())?;
    let file = File::create(path)?;
    write_histogram(BufWriter::new(file), histogram)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(histogram: &Histogram) -> String {
        let mut buf = Vec::new();
        write_histogram(&mut buf, histogram).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_histogram_worked_example() {
        let histogram = Histogram::from_counts(&[1, 9, 18, 15, 6, 1]);
        assert_eq!(render(&histogram), "1\n9\n18\n15\n6\n1\n");
    }

    #[test]
    fn test_write_histogram_stops_at_first_zero() {
        let histogram = Histogram::from_counts(&[1, 2, 0, 7]);
        assert_eq!(render(&histogram), "1\n2\n");
    }

    #[test]
    fn test_write_histogram_nothing_when_first_zero() {
        let histogram = Histogram::from_counts(&[0, 5]);
        assert_eq!(render(&histogram), "");
    }

    #[test]
    fn test_write_histogram_line_count() {
        let histogram = Histogram::from_counts(&[1, 1]);
        let lines = write_histogram(io::sink(), &histogram).unwrap();
        assert_eq!(lines, 2);
    }

    #[test]
    fn test_save_histogram_creates_parent_dir() {
        let dir = std::env::temp_dir().join("facets_writer_test").join("nested");
        let path = dir.join("out.txt");
        fs::remove_dir_all(&dir).ok();

        let histogram = Histogram::from_counts(&[1, 2, 1]);
        save_histogram(&path, &histogram).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "1\n2\n1\n");

        fs::remove_dir_all(dir).ok();
    }
}
