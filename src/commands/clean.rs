//! Clean generated files

use anyhow::Result;
use std::fs;

use crate::generator::Generator;
use crate::AiBlaze;

/// Remove the files written by `generate`
pub fn run(app: &AiBlaze) -> Result<()> {
    for path in Generator::new(app).outputs() {
        if path.exists() {
            fs::remove_file(&path)?;
            tracing::info!("Deleted: {:?}", path);
        }
    }

    Ok(())
}
