/// wirecube - a wireframe cube rotating in the terminal
///
/// Press q, Esc or Ctrl+C to quit.

use anyhow::{Context, Result};
use log::info;
use wirecube_core::CubeConfig;
use wirecube_terminal::{logger, TerminalApp};

fn main() -> Result<()> {
    let log_path = logger::init().context("failed to initialise logging")?;

    let config = CubeConfig::default();
    info!(
        "starting: canvas {}x{}, fov {}, viewer distance {}, {} ticks/s, logging to {}",
        config.canvas_width,
        config.canvas_height,
        config.field_of_view,
        config.viewer_distance,
        config.ticks_per_second,
        log_path.display()
    );

    // Run the terminal app
    let mut app = TerminalApp::new(config).context("failed to set up the terminal")?;
    app.run().context("animation failed")?;

    info!("exiting");
    Ok(())
}
