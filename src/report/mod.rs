//! Report output: Markdown rendering and JSON export.

mod export;
mod render;

pub use export::{safe_name, ExportRecord, TIMESTAMP_FORMAT};
pub use render::{render_markdown, RenderContext, DIMENSIONS_HEADER};
