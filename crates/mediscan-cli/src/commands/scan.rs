use std::path::PathBuf;

use anyhow::{Result, bail};
use mediscan_application::Tab;

use super::SessionOptions;
use crate::render;

/// One-shot image identification, using `image` as the camera frame.
pub async fn run(options: &SessionOptions, image: PathBuf) -> Result<()> {
    let mut session = options.factory(Some(image.clone()), false)?.create_session();
    session.start_scan();
    session.select_tab(Tab::Camera);

    if !session.toggle_camera().await {
        render::print_notice(&session);
        bail!("Could not open {} as a capture source", image.display());
    }

    if let Some(outcome) = session.capture_image().await {
        render::print_notice(&session);
        render::print_outcome(&outcome);
    }

    session.teardown();
    Ok(())
}
