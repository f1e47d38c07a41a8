//! ファイル選択コンポーネント
//!
//! 1ファイルのみ。選択のたびに前のファイル・結果・プレビューを置き換える。
//! 読み込みは非同期なので、最後に選んだファイル以外の読み込み結果は捨てる。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, HtmlInputElement};
use leaf_doctor_common::{SelectedFile, UploadPredictor};

/// ファイル読み込みの世代管理
///
/// `begin` のたびに世代が進み、最新世代の `finish` だけが反映対象になる。
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReadSequence {
    latest: u64,
    pending: bool,
}

impl ReadSequence {
    /// 新しい読み込みを開始し、その世代を返す
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.pending = true;
        self.latest
    }

    /// 読み込み完了。最新世代ならtrue
    pub fn finish(&mut self, generation: u64) -> bool {
        if generation != self.latest {
            return false;
        }
        self.pending = false;
        true
    }

    /// 最新の読み込みが未完了か（送信を止める）
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[component]
pub fn FilePicker(
    predictor: RwSignal<UploadPredictor>,
    preview: RwSignal<Option<String>>,
    reads: RwSignal<ReadSequence>,
) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            read_file(file, predictor, preview, reads);
        }
    };

    view! {
        <input
            type="file"
            accept="image/*"
            class="file-input"
            on:change=on_change
        />

        <Show when=move || preview.with(|url| url.is_some())>
            <div class="preview-box">
                <img
                    class="preview-image"
                    src=move || preview.get().unwrap_or_default()
                    alt="Uploaded Preview"
                />
            </div>
        </Show>
    }
}

fn read_file(
    file: File,
    predictor: RwSignal<UploadPredictor>,
    preview: RwSignal<Option<String>>,
    reads: RwSignal<ReadSequence>,
) {
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            log::error!("FileReader creation failed: {:?}", e);
            return;
        }
    };
    let Some(generation) = reads.try_update(|r| r.begin()) else {
        return;
    };

    let name = file.name();
    let mime_type = file.type_();
    let reader_clone = reader.clone();
    let file_clone = file.clone();
    // loadendは成功・失敗どちらでも1回だけ呼ばれる
    let onloadend = Closure::once_into_js(move |_: web_sys::ProgressEvent| {
        if !reads.try_update(|r| r.finish(generation)).unwrap_or(false) {
            log::debug!("discarding stale read of {}", name);
            return;
        }
        let buffer = match reader_clone.result() {
            Ok(buffer) if !buffer.is_null() => buffer,
            Ok(_) => {
                log::error!("reading {} failed", name);
                return;
            }
            Err(e) => {
                log::error!("reading {} failed: {:?}", name, e);
                return;
            }
        };
        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
        predictor.update(|p| p.select_file(SelectedFile::new(name, mime_type, bytes)));
        crate::preview::replace(preview, crate::preview::create(&file_clone));
    });

    reader.set_onloadend(Some(onloadend.unchecked_ref()));
    if let Err(e) = reader.read_as_array_buffer(&file) {
        log::error!("reading {} failed: {:?}", file.name(), e);
        reads.update(|r| {
            r.finish(generation);
        });
    }
}
