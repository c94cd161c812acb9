//! services/app/src/bin/export_content.rs
//!
//! This binary writes the built-in content as a JSON file with the shape
//! `CONTENT_PATH` expects, so it can be edited and loaded back.

use app_lib::{adapters::content::ContentRecord, error::AppError};
use cognistack_core::seed;

/// Serializes the built-in content and writes it to `path`.
fn export(path: &str) -> Result<(), AppError> {
    let record = ContentRecord::from_domain(
        &seed::sample_posts(),
        &seed::sample_questions(),
        &seed::sample_profile(),
    );
    let json = serde_json::to_string_pretty(&record)?;
    std::fs::write(path, json)?;
    println!("Content written to {}", path);
    Ok(())
}

fn main() -> Result<(), AppError> {
    // First argument overrides the default output file.
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "content.json".to_string());
    export(&path)
}
