//! 選択画像のプレビューURL管理
//!
//! Object URLは差し替え・リセット時に必ずrevokeする。

use leptos::prelude::*;
use web_sys::{Blob, Url};

/// Blobからプレビュー用URLを作成
pub fn create(blob: &Blob) -> Option<String> {
    match Url::create_object_url_with_blob(blob) {
        Ok(url) => Some(url),
        Err(e) => {
            log::error!("preview URL creation failed: {:?}", e);
            None
        }
    }
}

/// プレビューURLを差し替え、以前のURLを解放
pub fn replace(preview: RwSignal<Option<String>>, next: Option<String>) {
    let previous = preview
        .try_update(|current| std::mem::replace(current, next))
        .flatten();
    if let Some(url) = previous {
        if let Err(e) = Url::revoke_object_url(&url) {
            log::warn!("preview URL revoke failed: {:?}", e);
        }
    }
}
