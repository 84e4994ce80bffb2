//! # Ambient Backdrop
//!
//! The full windowed experience: move the pointer around to light up
//! neurons and drag the pulse ring across the graph. Resize the window to
//! watch the density adapt.
//!
//! Run with: `cargo run --example ambient`

use anyhow::Result;
use nbe::prelude::*;

fn main() -> Result<()> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")?.start()?;

    Background::new()
        .with_size(1280.0, 720.0)
        .with_title("Ambient Neural Backdrop")
        .with_theme(Theme::amber())
        .run()?;

    Ok(())
}
