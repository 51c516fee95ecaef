use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::sync::Arc;

use anyhow::Context;
use serde_json::Value as JsonValue;
use tracing::{info, warn};

use crate::config::Config;
use crate::story::Page;
use crate::value::common_value_helpers::{UnsupportedPolicy, translate_common_values};

/// Translates the common values in `input_path` against the configured page,
/// writing one JSON dictionary per line to stdout.
pub fn run(config: &Config, input_path: &str) -> anyhow::Result<usize> {
    let page = Arc::new(Page::new(
        config.page.parsed_url()?,
        config.page.name.clone(),
    ));
    info!(
        "translating common values from {} for page {} ({})",
        input_path,
        page,
        page.url()
    );

    let file = File::open(input_path)
        .with_context(|| format!("failed to open common values file: {}", input_path))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let count = translate_stream(
        BufReader::new(file),
        &mut out,
        &page,
        config.system.on_unsupported,
    )?;
    out.flush()?;

    info!("translated {} values", count);
    Ok(count)
}

/// Reads a JSON array of common values and writes the translated values as JSON lines.
pub fn translate_stream<R: Read, W: Write>(
    input: R,
    out: &mut W,
    page: &Arc<Page>,
    policy: UnsupportedPolicy,
) -> anyhow::Result<usize> {
    let records: Vec<JsonValue> =
        serde_json::from_reader(input).context("expected a JSON array of common values")?;

    let values = translate_common_values(&records, page, policy)?;

    let failures = values.iter().filter(|v| v.is_failure()).count();
    if failures > 0 {
        warn!("{} of {} values are failures", failures, values.len());
    }

    for value in &values {
        serde_json::to_writer(&mut *out, value)?;
        out.write_all(b"\n")?;
    }

    Ok(values.len())
}
