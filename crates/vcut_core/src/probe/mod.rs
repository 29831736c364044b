//! Stream probing through the external `ffprobe` tool.
//!
//! The probing itself is done by ffprobe; this module runs it and maps the
//! `-show_streams -of json` output onto a [`StreamSet`](crate::models::StreamSet).

mod ffprobe;
mod types;

pub use ffprobe::{parse_ffprobe_json, probe_file, read_probe_json};
pub use types::{ProbeError, ProbeResult};
