//! Output management module
//!
//! Derives the output path next to the input and writes the WiGLE CSV with
//! buffering. An existing output file is truncated without warning.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Fixed WiGLE header, written before any data row
pub const WIGLE_HEADER: [&str; 8] = [
    "MAC",
    "SSID",
    "AuthMode",
    "FirstSeen",
    "Channel",
    "RSSI",
    "CurrentLatitude",
    "CurrentLongitude",
];

/// Suffix appended to the input's base name
pub const OUTPUT_SUFFIX: &str = "wigle.csv";

const WRITE_BUFFER_SIZE: usize = 256 * 1024;

/// Derive the output path: same directory, input stem + `.wigle.csv`.
///
/// Only the final extension is replaced, so `data.tar.csv` becomes
/// `data.tar.wigle.csv`.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let name = format!("{}.{}", stem, OUTPUT_SUFFIX);

    match input.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

/// Buffered CSV writer tracking rows written
pub struct CsvOutput {
    writer: csv::Writer<BufWriter<File>>,
    path: PathBuf,
    rows_written: u64,
}

impl CsvOutput {
    /// Create (or truncate) the output file
    pub fn create(path: &Path) -> Result<Self, csv::Error> {
        let file = File::create(path)?;
        let writer = csv::Writer::from_writer(BufWriter::with_capacity(WRITE_BUFFER_SIZE, file));

        Ok(Self {
            writer,
            path: path.to_path_buf(),
            rows_written: 0,
        })
    }

    /// Write the fixed WiGLE header record
    pub fn write_header(&mut self) -> Result<(), csv::Error> {
        self.writer.write_record(WIGLE_HEADER)
    }

    /// Write one data record; counts toward `rows_written`
    pub fn write_row<I, T>(&mut self, fields: I) -> Result<(), csv::Error>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.writer.write_record(fields)?;
        self.rows_written += 1;
        Ok(())
    }

    /// Flush buffered records to disk
    pub fn flush(&mut self) -> Result<(), csv::Error> {
        self.writer.flush()?;
        Ok(())
    }

    /// The output file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of data rows written (header excluded)
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_derive_output_path_replaces_extension() {
        let path = derive_output_path(Path::new("/captures/capture.log"));
        assert_eq!(path, PathBuf::from("/captures/capture.wigle.csv"));
    }

    #[test]
    fn test_derive_output_path_keeps_inner_extension() {
        let path = derive_output_path(Path::new("/captures/data.tar.csv"));
        assert_eq!(path, PathBuf::from("/captures/data.tar.wigle.csv"));
    }

    #[test]
    fn test_derive_output_path_no_extension() {
        let path = derive_output_path(Path::new("/captures/scan"));
        assert_eq!(path, PathBuf::from("/captures/scan.wigle.csv"));
    }

    #[test]
    fn test_derive_output_path_bare_filename() {
        let path = derive_output_path(Path::new("capture.log"));
        assert_eq!(path, PathBuf::from("capture.wigle.csv"));
    }

    #[test]
    fn test_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.wigle.csv");

        let mut out = CsvOutput::create(&path).unwrap();
        out.write_header().unwrap();
        out.write_row(["AA:BB:CC:DD:EE:FF", "MyWifi", "WPA2", "2023-01-01 10:00:00", "6", "-50", "12.34", "56.78"])
            .unwrap();
        out.flush().unwrap();

        assert_eq!(out.rows_written(), 1);

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "MAC,SSID,AuthMode,FirstSeen,Channel,RSSI,CurrentLatitude,CurrentLongitude"
        );
        assert_eq!(
            lines.next().unwrap(),
            "AA:BB:CC:DD:EE:FF,MyWifi,WPA2,2023-01-01 10:00:00,6,-50,12.34,56.78"
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.wigle.csv");

        let mut out = CsvOutput::create(&path).unwrap();
        out.write_row(["AA", "Cafe, Free WiFi", "WPA2", "2023", "1", "-40", "0.0", "0.0"])
            .unwrap();
        out.flush().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"Cafe, Free WiFi\""));
    }

    #[test]
    fn test_existing_output_is_truncated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.wigle.csv");
        std::fs::write(&path, "stale contents\nwith lines\n").unwrap();

        let mut out = CsvOutput::create(&path).unwrap();
        out.write_header().unwrap();
        out.flush().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
        assert!(content.starts_with("MAC,"));
    }
}
