use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// A command result that can be printed in every output format.
pub trait Record: Serialize {
    /// Column names and values, in display order.
    fn fields(&self) -> Vec<(&'static str, String)>;

    /// Bytes written for `--format raw`.
    fn raw(&self) -> Vec<u8>;
}

pub fn print_records<R: Record>(records: &[R], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            for record in records {
                println!(
                    "{}",
                    serde_json::to_string(record).unwrap_or_else(|_| "{}".to_string())
                );
            }
        }
        OutputFormat::Table => {
            let Some(first) = records.first() else {
                return;
            };
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(
                    first
                        .fields()
                        .into_iter()
                        .map(|(name, _)| name.to_uppercase())
                        .collect::<Vec<_>>(),
                );
            for record in records {
                table.add_row(
                    record
                        .fields()
                        .into_iter()
                        .map(|(_, value)| value)
                        .collect::<Vec<_>>(),
                );
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for record in records {
                println!("{}", pretty_line(record));
            }
        }
        OutputFormat::Raw => {
            for record in records {
                print_raw(&record.raw());
            }
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

fn pretty_line<R: Record>(record: &R) -> String {
    record
        .fields()
        .into_iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn payload_preview(payload: &[u8]) -> String {
    match std::str::from_utf8(payload) {
        Ok(text) => text.to_string(),
        Err(_) => format!("<binary {} bytes>", payload.len()),
    }
}
