//! Device list exchange example
//!
//! Runs both ends of a channel in one process over an in-memory pipe.

use cecinfo::{DeviceInfo, DeviceInfoChannel, DeviceType};

#[tokio::main]
async fn main() -> cecinfo::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let (a, b) = tokio::io::duplex(4096);
    let mut controller = DeviceInfoChannel::from_stream(a, "client");
    let mut client = DeviceInfoChannel::from_stream(b, "controller");

    let devices = vec![
        DeviceInfo::for_cec_device(0, 0x0000, 0, DeviceType::Tv, 0x0000F0, "TV".to_string()),
        DeviceInfo::for_cec_device(4, 0x1000, 1, DeviceType::Playback, 0x001A, "BluRay".to_string()),
        DeviceInfo::for_cec_device(5, 0x2000, 2, DeviceType::AudioSystem, 0x00E091, None),
        DeviceInfo::for_non_cec_device(0x3000, 3),
    ];

    controller.send_devices(&devices).await?;

    for device in client.receive_devices().await? {
        let role = if device.is_source_type() { "source" } else { "sink" };
        println!("✓ {} [{}]", device, role);
    }

    controller.close().await?;
    client.close().await?;

    Ok(())
}
