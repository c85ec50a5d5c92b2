use super::{or_empty, DocumentKind};
use crate::core::classify::SUPPORTED_ABIS_MIN_SDK;
use crate::core::document::DeviceInfoDocument;
use crate::core::services::PlatformServices;
use crate::error::Result;

pub fn read(platform: &dyn PlatformServices) -> DeviceInfoDocument {
    or_empty(DocumentKind::System, collect(platform))
}

pub fn read_json(platform: &dyn PlatformServices) -> String {
    read(platform).to_json_or_empty()
}

fn collect(platform: &dyn PlatformServices) -> Result<DeviceInfoDocument> {
    let mut doc = DeviceInfoDocument::new();

    // Memory
    let memory = platform.memory()?;
    log::debug!("Memory status: {:?}", memory);
    doc.insert("totalMemory", memory.total_bytes);
    doc.insert("availableMemory", memory.available_bytes);
    doc.insert("isLowMemory", memory.low_memory);
    doc.insert("memoryThreshold", memory.threshold_bytes);

    // Storage
    let internal = platform.internal_storage()?;
    doc.insert("internalStorageTotal", internal.total_bytes);
    doc.insert("internalStorageFree", internal.free_bytes);

    // Unmounted external storage is omitted, not zeroed
    if let Some(external) = platform.external_storage()? {
        doc.insert("externalStorageTotal", external.total_bytes);
        doc.insert("externalStorageFree", external.free_bytes);
    }

    // CPU and build
    let build = platform.build_info()?;
    doc.insert("cpuAbi", build.cpu_abi);
    if build.sdk_int >= SUPPORTED_ABIS_MIN_SDK {
        doc.insert("supportedAbis", build.supported_abis);
    }

    doc.insert("sdkInt", build.sdk_int);
    doc.insert("release", build.release);
    doc.insert("codename", build.codename);
    doc.insert("incremental", build.incremental);

    doc.insert("board", build.board);
    doc.insert("bootloader", build.bootloader);
    doc.insert("brand", build.brand);
    doc.insert("device", build.device);
    doc.insert("display", build.display);
    doc.insert("fingerprint", build.fingerprint);
    doc.insert("hardware", build.hardware);
    doc.insert("host", build.host);
    doc.insert("id", build.id);
    doc.insert("manufacturer", build.manufacturer);
    doc.insert("model", build.model);
    doc.insert("product", build.product);
    doc.insert("serial", build.serial);
    doc.insert("tags", build.tags);
    doc.insert("type", build.build_type);
    doc.insert("user", build.user);

    Ok(doc)
}
