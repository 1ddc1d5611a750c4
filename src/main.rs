//! InvoicePilot Lite - 主入口

use anyhow::Result;
use invoice_pilot::cli::{Command, RunMode};
use invoice_pilot::pdf::PdfTextExtractor;
use invoice_pilot::{console, AmountPatterns, InvoiceRenamer};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    console::enable_utf8();

    // 日志输出到 stderr，不与状态行混在一起
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if Command::parse(args.as_slice()) == Command::Help {
        console::print_help();
        return Ok(());
    }

    let mode = RunMode::detect();
    let directory = mode.target_directory()?;
    tracing::info!(?mode, directory = ?directory, "启动");

    let renamer = InvoiceRenamer::new(PdfTextExtractor, AmountPatterns::default());
    renamer.process_directory(&directory)?;

    if mode.waits_for_keypress() {
        console::wait_for_enter();
    }

    Ok(())
}
