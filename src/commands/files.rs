//! File Commands
//!
//! Reads the file picked in an `<input type="file">` into memory.

use pedidos_flows::UploadFile;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

/// First selected file of `input`, or `None` when nothing is selected.
pub async fn read_selected_file(input: &HtmlInputElement) -> Result<Option<UploadFile>, String> {
    let Some(file) = input.files().and_then(|list| list.get(0)) else {
        return Ok(None);
    };

    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Falha ao ler arquivo: {:?}", e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    let mime = file.type_();
    Ok(Some(UploadFile {
        name: file.name(),
        content_type: (!mime.is_empty()).then_some(mime),
        bytes,
    }))
}
