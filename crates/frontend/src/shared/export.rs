/// Download de CSV gerado no navegador (Blob + link temporário)
use chrono::Local;
use contracts::shared::csv::{build_csv, build_csv_from_json, csv_filename, CsvExportable};
use serde_json::Value;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

const CSV_MIME: &str = "text/csv;charset=utf-8";

/// Exporta linhas tipadas para `{prefix}_{AAAA-MM-DD}.csv`.
pub fn export_csv<T: CsvExportable>(data: &[T], prefix: &str) -> Result<(), String> {
    let content = build_csv(data).map_err(|e| e.to_string())?;
    download_text(&content, &csv_filename(prefix, Local::now().date_naive()))
}

/// Exporta linhas de relatório sem tipo (objetos JSON planos).
pub fn export_json_rows(rows: &[Value], prefix: &str) -> Result<(), String> {
    let content = build_csv_from_json(rows).map_err(|e| e.to_string())?;
    download_text(&content, &csv_filename(prefix, Local::now().date_naive()))
}

fn download_text(content: &str, filename: &str) -> Result<(), String> {
    let blob = create_csv_blob(content)?;
    download_blob(&blob, filename)?;
    log::debug!("csv exported: {} ({} bytes)", filename, content.len());
    Ok(())
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(CSV_MIME);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Cria um `<a download>` oculto, clica e remove.
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

/// `window.alert` com a mensagem de erro da exportação.
pub fn alert_on_error(result: Result<(), String>) {
    if let Err(e) = result {
        log::warn!("csv export failed: {}", e);
        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message(&e);
        }
    }
}
