//! Serialization and export of generated addresses

pub mod exporter;
pub mod serializer;

pub use exporter::{ExportReport, Exporter, FileExporter, StdoutExporter};
pub use serializer::{address, serialize, write_document};
