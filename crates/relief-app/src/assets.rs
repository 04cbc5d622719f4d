//! Asynchronous font and matcap loading.
//!
//! Both loads run as independent tasks on the app's tokio runtime and report
//! back over a std channel drained by the event loop.

use std::path::PathBuf;
use std::sync::mpsc::Sender;

use relief_common::AssetError;
use relief_config::schema::AssetsConfig;
use relief_renderer::{Font, MatcapImage};

/// Completion of one asset load.
#[derive(Debug)]
pub enum AssetEvent {
    Font(Result<Font, AssetError>),
    Matcap(Result<MatcapImage, AssetError>),
}

async fn read(path: &PathBuf) -> Result<Vec<u8>, AssetError> {
    tokio::fs::read(path).await.map_err(|source| AssetError::Io {
        path: path.clone(),
        source,
    })
}

pub async fn load_font(path: PathBuf) -> Result<Font, AssetError> {
    let bytes = read(&path).await?;
    Font::from_path_bytes(&path, bytes).map_err(|e| AssetError::Font {
        path,
        reason: e.to_string(),
    })
}

pub async fn load_matcap(path: PathBuf) -> Result<MatcapImage, AssetError> {
    let bytes = read(&path).await?;
    MatcapImage::decode(&bytes).map_err(|e| AssetError::Image {
        path,
        reason: e.to_string(),
    })
}

/// Start both loads. Each result is sent as soon as it is ready; a closed
/// channel (app shutting down) is ignored.
pub fn spawn_asset_loads(
    runtime: &tokio::runtime::Runtime,
    assets: &AssetsConfig,
    tx: Sender<AssetEvent>,
) {
    let font_path = assets.font.clone();
    let font_tx = tx.clone();
    runtime.spawn(async move {
        tracing::debug!(path = %font_path.display(), "Loading font");
        let _ = font_tx.send(AssetEvent::Font(load_font(font_path).await));
    });

    let matcap_path = assets.matcap.clone();
    runtime.spawn(async move {
        tracing::debug!(path = %matcap_path.display(), "Loading matcap");
        let _ = tx.send(AssetEvent::Matcap(load_matcap(matcap_path).await));
    });
}
