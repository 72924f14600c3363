use std::path::PathBuf;

use anyhow::Context;
use attest_core::enums::ExportFormat;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CategoryExportArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct ExportResponse {
    format: ExportFormat,
    path: PathBuf,
    bytes: usize,
}

pub async fn run(args: &CategoryExportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let format = parse_enum::<ExportFormat>(&args.export_format, "export format")?;
    let path = args
        .output
        .as_ref()
        .map_or_else(|| PathBuf::from(format.default_file_name()), PathBuf::from);

    let progress = Progress::spinner(&format!("Exporting controls as {format}..."));
    let bytes = match ctx.client.export_categories(format, args.show_hidden).await {
        Ok(bytes) => bytes,
        Err(error) => {
            progress.finish_err("export failed");
            return Err(error.into());
        }
    };
    std::fs::write(&path, &bytes).with_context(|| format!("failed to write {}", path.display()))?;
    progress.finish_ok(&format!("saved {}", path.display()));

    output(
        &ExportResponse {
            format,
            path,
            bytes: bytes.len(),
        },
        flags.format,
    )
}
