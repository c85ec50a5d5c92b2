use super::{or_empty, DocumentKind};
use crate::core::document::DeviceInfoDocument;
use crate::core::services::PlatformServices;
use crate::error::Result;

pub fn read(platform: &dyn PlatformServices) -> DeviceInfoDocument {
    or_empty(DocumentKind::Screen, collect(platform))
}

pub fn read_json(platform: &dyn PlatformServices) -> String {
    read(platform).to_json_or_empty()
}

fn collect(platform: &dyn PlatformServices) -> Result<DeviceInfoDocument> {
    let metrics = platform.display_metrics()?;
    log::debug!("Display metrics: {:?}", metrics);

    Ok(DeviceInfoDocument::new()
        .with("width", metrics.width_pixels)
        .with("height", metrics.height_pixels)
        .with("density", metrics.density)
        .with("densityDpi", metrics.density_dpi)
        .with("scaledDensity", metrics.scaled_density)
        .with("xdpi", metrics.xdpi)
        .with("ydpi", metrics.ydpi))
}
