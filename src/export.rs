use anyhow::Result;

/// Serialization used when handing cells to a renderer outside this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
    Cbor,
}

/// Writes month rows or year cells for a renderer in another process.
pub fn export<T: serde::Serialize + ?Sized>(
    w: &mut impl std::io::Write,
    cells: &T,
    format: ExportFormat,
) -> Result<()> {
    match format {
        ExportFormat::Json => serde_json::to_writer(w, cells)?,
        ExportFormat::Yaml => serde_yaml::to_writer(w, cells)?,
        ExportFormat::Cbor => ciborium::into_writer(cells, w)?,
    }

    Ok(())
}
