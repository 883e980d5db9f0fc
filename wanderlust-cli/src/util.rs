use anyhow::{Context, Result};
use chrono::Utc;
use wanderlust_core::Emotion;

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Parse a comma-separated list of emotion labels.
pub fn parse_emotions(s: &str) -> Result<Vec<Emotion>> {
    split_csv(s)
        .iter()
        .map(|label| {
            label
                .parse::<Emotion>()
                .with_context(|| format!("parsing --emotions entry {label:?}"))
        })
        .collect()
}

/// Seed for an unseeded recommendation pass.
pub fn entropy_seed() -> u64 {
    let now = Utc::now();
    let nanos = now
        .timestamp_nanos_opt()
        .map_or_else(|| now.timestamp_millis().unsigned_abs(), i64::unsigned_abs);
    nanos ^ (u64::from(std::process::id()) << 32)
}

#[cfg(test)]
pub fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "wanderlust-cli-unit-{label}-{}-{}",
        std::process::id(),
        Utc::now().timestamp_nanos_opt().unwrap_or_default()
    ))
}
