//! Generate static files

use anyhow::Result;

use crate::generator::Generator;
use crate::AiBlaze;

/// Write the post bundle and sitemap into the public directory
pub fn run(app: &AiBlaze) -> Result<()> {
    let start = std::time::Instant::now();

    let written = Generator::new(app).generate()?;
    for path in &written {
        tracing::debug!("Wrote {:?}", path);
    }

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}
