//! WASM bindings for rendering and downloading model cards in the browser.
//!
//! Records and options cross the boundary as JSON strings. Errors surface as
//! JS `Error` objects carrying the crate's error message, so a missing model
//! id reads `Missing required field: model_id`.

use std::io;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use js_sys::{Array, Object, Reflect, Uint8Array};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::error::{Error, Result};
use crate::export::{Delivery, ExportOptions, ExportedFile, Format, RenderedDocument, export, prepare};
use crate::model::ModelCardRecord;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render a record without saving it.
///
/// Returns `{ filename, mimeType, bytes }` where `bytes` is a `Uint8Array`.
#[wasm_bindgen]
pub fn render_model_card(
    record_json: &str,
    format: &str,
    options_json: Option<String>,
) -> std::result::Result<JsValue, JsValue> {
    let (record, format, options) = parse_inputs(record_json, format, options_json.as_deref()).map_err(to_js)?;
    let file = prepare(format.renderer().as_ref(), &record, &options).map_err(to_js)?;
    exported_to_js(&file)
}

/// Render a record and trigger a browser download. Returns the file name.
#[wasm_bindgen]
pub fn download_model_card(
    record_json: &str,
    format: &str,
    options_json: Option<String>,
) -> std::result::Result<String, JsValue> {
    let (record, format, options) = parse_inputs(record_json, format, options_json.as_deref()).map_err(to_js)?;
    let file = export(format.renderer().as_ref(), &record, &options, &mut BrowserDownload).map_err(to_js)?;
    Ok(file.filename)
}

fn parse_inputs(
    record_json: &str,
    format: &str,
    options_json: Option<&str>,
) -> Result<(ModelCardRecord, Format, ExportOptions)> {
    let record = ModelCardRecord::from_json(record_json)?;
    let format: Format = format.parse()?;
    let options = match options_json.filter(|s| !s.trim().is_empty()) {
        Some(json) => serde_json::from_str(json)?,
        None => ExportOptions::default(),
    };
    Ok((record, format, options))
}

fn to_js(err: Error) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn exported_to_js(file: &ExportedFile) -> std::result::Result<JsValue, JsValue> {
    let out = Object::new();
    Reflect::set(&out, &"filename".into(), &file.filename.as_str().into())?;
    Reflect::set(&out, &"mimeType".into(), &file.document.mime_type.into())?;
    let bytes = Uint8Array::from(file.document.bytes.as_slice());
    Reflect::set(&out, &"bytes".into(), &bytes)?;
    Ok(out.into())
}

/// Saves documents through the browser's download mechanism.
///
/// The document is offered through a temporary object URL. Where blobs are
/// unavailable it falls back to a base64 `data:` URL.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserDownload;

impl Delivery for BrowserDownload {
    fn deliver(&mut self, filename: &str, document: &RenderedDocument) -> io::Result<()> {
        trigger_download(filename, document).map_err(|e| io::Error::other(format!("{e:?}")))
    }
}

fn trigger_download(filename: &str, document: &RenderedDocument) -> std::result::Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let page = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let body = page.body().ok_or_else(|| JsValue::from_str("no document body"))?;

    let anchor: HtmlAnchorElement = page.create_element("a")?.dyn_into().map_err(JsValue::from)?;
    let object_url = object_url(document).ok();
    let href = object_url.clone().unwrap_or_else(|| data_url(document));

    anchor.set_href(&href);
    anchor.set_download(filename);
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;

    if let Some(url) = object_url {
        Url::revoke_object_url(&url)?;
    }
    Ok(())
}

fn object_url(document: &RenderedDocument) -> std::result::Result<String, JsValue> {
    let parts = Array::new();
    parts.push(&Uint8Array::from(document.bytes.as_slice()));
    let options = BlobPropertyBag::new();
    options.set_type(document.mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    Url::create_object_url_with_blob(&blob)
}

fn data_url(document: &RenderedDocument) -> String {
    format!("data:{};base64,{}", document.mime_type, STANDARD.encode(&document.bytes))
}
