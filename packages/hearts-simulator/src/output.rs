//! Output writers for simulation results.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::metrics::{CsvSummaryRow, GameMetrics};
use crate::types::OutputFormat;

pub struct OutputWriter {
    format: OutputFormat,
    details_writer: Option<Box<dyn Write + Send>>,
    csv_writer: Option<csv::Writer<BufWriter<File>>>,
    details_path: PathBuf,
    csv_path: PathBuf,
    /// Held until `finish` in JSON mode.
    pending: Vec<GameMetrics>,
}

impl OutputWriter {
    pub fn new(
        output_dir: &str,
        format: &OutputFormat,
        compress: bool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = Path::new(output_dir);
        std::fs::create_dir_all(dir)?;

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");

        let extension = match format {
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Json => "json",
        };
        let filename = format!("simulation_{timestamp}.{extension}");
        let (details_writer, details_path) = open_details(dir, &filename, compress)?;

        // Always create CSV summary
        let csv_path = dir.join(format!("simulation_{timestamp}_summary.csv"));
        let csv_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&csv_path)?;
        let csv_writer = csv::Writer::from_writer(BufWriter::new(csv_file));

        Ok(Self {
            format: format.clone(),
            details_writer: Some(details_writer),
            csv_writer: Some(csv_writer),
            details_path,
            csv_path,
            pending: Vec::new(),
        })
    }

    pub fn write_game(&mut self, metrics: &GameMetrics) -> Result<(), Box<dyn std::error::Error>> {
        match self.format {
            OutputFormat::Jsonl => {
                if let Some(ref mut writer) = self.details_writer {
                    let json = serde_json::to_string(metrics)?;
                    writeln!(writer, "{json}")?;
                    writer.flush()?;
                }
            }
            OutputFormat::Json => self.pending.push(metrics.clone()),
        }

        if let Some(ref mut writer) = self.csv_writer {
            let row: CsvSummaryRow = metrics.into();
            writer.serialize(&row)?;
            writer.flush()?;
        }

        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(mut writer) = self.details_writer.take() {
            if matches!(self.format, OutputFormat::Json) {
                serde_json::to_writer_pretty(&mut writer, &self.pending)?;
                writeln!(writer)?;
            }
            writer.flush()?;
        }
        if let Some(ref mut writer) = self.csv_writer {
            writer.flush()?;
        }
        Ok(())
    }

    pub fn output_paths(&self) -> (&Path, &Path) {
        (&self.details_path, &self.csv_path)
    }
}

type DetailsSink = (Box<dyn Write + Send>, PathBuf);

fn open_details(
    dir: &Path,
    filename: &str,
    compress: bool,
) -> Result<DetailsSink, Box<dyn std::error::Error>> {
    if compress {
        let gz_path = dir.join(format!("{filename}.gz"));
        let writer: Box<dyn Write + Send> = Box::new(BufWriter::new(GzEncoder::new(
            File::create(&gz_path)?,
            Compression::default(),
        )));
        Ok((writer, gz_path))
    } else {
        let path = dir.join(filename);
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)?;
        let writer: Box<dyn Write + Send> = Box::new(BufWriter::new(file));
        Ok((writer, path))
    }
}
