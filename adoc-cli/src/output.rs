//! Event stream printing
//!
//! `text` prints one event per line using the events' display form, `json` prints the whole
//! stream as a pretty printed JSON array.

use adoc_babel::Event;
use adoc_config::OutputFormat;

/// Renders a translated event stream in the requested format
pub fn render_events(events: &[Event], format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for event in events {
                out.push_str(&event.to_string());
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(events)
                .map_err(|e| format!("JSON serialization failed: {}", e))?;
            out.push('\n');
            Ok(out)
        }
    }
}
