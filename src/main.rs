use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use log::warn;
use serde::Serialize;
use structopt::StructOpt;

use ynet_extract::{ExtractError, Extraction, Extractor, YnetExtractor};

#[allow(missing_docs)]
#[derive(Debug, StructOpt)]
#[structopt(
    name = "ynet-extract",
    about = "Extract article text from downloaded ynet pages."
)]
struct App {
    #[structopt(
        name = "files",
        help = "The html files to extract, reads stdin if none are given.",
        parse(from_os_str)
    )]
    files: Vec<PathBuf>,
    #[structopt(
        long = "output",
        short = "o",
        help = "The file to store the extracted articles as json.",
        parse(from_os_str)
    )]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct Entry {
    source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Extraction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Entry {
    fn new(source: String, result: Result<Extraction, ExtractError>) -> Self {
        match result {
            Ok(extraction) => Entry {
                source,
                result: Some(extraction),
                error: None,
            },
            Err(err) => {
                warn!("Skipping {}: {}", source, err);
                Entry {
                    source,
                    result: None,
                    error: Some(err.to_string()),
                }
            }
        }
    }
}

impl App {
    fn run(self) -> anyhow::Result<()> {
        let extractor = YnetExtractor::default();

        let entries = if self.files.is_empty() {
            let stdin = io::stdin();
            let result = extractor.extract_read(stdin.lock());
            vec![Entry::new("-".to_string(), result)]
        } else {
            let mut entries = Vec::with_capacity(self.files.len());
            for path in &self.files {
                let file =
                    File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
                let result = extractor.extract_read(file);
                entries.push(Entry::new(path.display().to_string(), result));
            }
            entries
        };

        Self::write(self.output, &entries)
    }

    /// Writes the entries as json.
    ///
    /// If a output file is configured, then the entries will be stored there,
    /// otherwise to std::out.
    fn write(out: Option<PathBuf>, entries: &[Entry]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
        if let Some(out) = out {
            std::fs::write(&out, json).with_context(|| format!("Failed to write {:?}", out))?;
        } else {
            println!("{}", json);
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    App::from_args().run()
}
