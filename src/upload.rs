//! アップロード対象ファイルの読み込み
//!
//! MIMEタイプは内容から判定し、判定できなければ拡張子で推定する。
//! 画像以外も受け付ける（検証はサービス側で行う）。

use crate::error::{LeafDoctorError, Result};
use leaf_doctor_common::SelectedFile;
use std::path::Path;

const FALLBACK_MIME: &str = "application/octet-stream";

/// ファイルを読み込んでSelectedFileを作成
pub async fn load_selected_file(path: &Path) -> Result<SelectedFile> {
    let is_file = tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false);
    if !is_file {
        return Err(LeafDoctorError::FileNotFound(path.display().to_string()));
    }

    let bytes = tokio::fs::read(path).await?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let mime_type = detect_mime_type(path, &bytes);

    Ok(SelectedFile::new(name, mime_type, bytes))
}

/// MIMEタイプ判定
pub fn detect_mime_type(path: &Path, bytes: &[u8]) -> &'static str {
    image::guess_format(bytes)
        .ok()
        .or_else(|| image::ImageFormat::from_path(path).ok())
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME)
}
