//! Output writers for simulation results.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::types::{AttemptRecord, OutputFormat};

enum Sink {
    Jsonl(BufWriter<File>),
    Csv(csv::Writer<BufWriter<File>>),
}

pub struct OutputWriter {
    sink: Sink,
    path: PathBuf,
}

impl OutputWriter {
    pub fn new(output_dir: &str, format: &OutputFormat) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = Path::new(output_dir);
        std::fs::create_dir_all(dir)?;

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");

        let (sink, path) = match format {
            OutputFormat::Jsonl => {
                let path = dir.join(format!("attempts_{timestamp}.jsonl"));
                let file = open_truncated(&path)?;
                (Sink::Jsonl(BufWriter::new(file)), path)
            }
            OutputFormat::Csv => {
                let path = dir.join(format!("attempts_{timestamp}.csv"));
                let file = open_truncated(&path)?;
                (Sink::Csv(csv::Writer::from_writer(BufWriter::new(file))), path)
            }
        };

        Ok(Self { sink, path })
    }

    pub fn write_attempt(&mut self, record: &AttemptRecord) -> Result<(), Box<dyn std::error::Error>> {
        match &mut self.sink {
            Sink::Jsonl(writer) => {
                serde_json::to_writer(&mut *writer, record)?;
                writer.write_all(b"\n")?;
            }
            Sink::Csv(writer) => {
                // The csv writer emits the header row from the struct fields
                // on the first serialize call.
                writer.serialize(record)?;
            }
        }
        Ok(())
    }

    /// Flush and return the path written.
    pub fn finish(self) -> Result<PathBuf, Box<dyn std::error::Error>> {
        match self.sink {
            Sink::Jsonl(mut writer) => writer.flush()?,
            Sink::Csv(mut writer) => writer.flush()?,
        }
        Ok(self.path)
    }
}

fn open_truncated(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}
