//! Unix socket example
//!
//! Serves the device list to every client connecting to `CECINFO_SOCKET`.

use cecinfo::{DeviceInfo, DeviceInfoChannel, DeviceType};
use tokio::net::UnixListener;

#[tokio::main]
async fn main() -> cecinfo::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let path = std::env::var("CECINFO_SOCKET").unwrap_or_else(|_| "/tmp/cecinfo.sock".to_string());
    let _ = std::fs::remove_file(&path);

    let listener = UnixListener::bind(&path).map_err(io_error)?;
    println!("Listening on {}...", path);

    let devices = vec![
        DeviceInfo::for_cec_device(4, 0x1000, 1, DeviceType::Playback, 0x001A, "BluRay".to_string()),
        DeviceInfo::for_non_cec_device(0x2000, 2),
    ];

    loop {
        let (stream, _) = listener.accept().await.map_err(io_error)?;
        let mut channel = DeviceInfoChannel::from_stream(stream, "client");

        channel.send_devices(&devices).await?;
        channel.close().await?;
        println!("✓ Sent {} devices", devices.len());
    }
}

fn io_error(e: std::io::Error) -> cecinfo::Error {
    cecinfo::Error::Transport(e.into())
}
