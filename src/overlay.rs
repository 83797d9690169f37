use crate::constants::HINT_ID;
use grid_core::GridConfig;
use web_sys as web;

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(HINT_ID)
        .and_then(|el| el.get_attribute("style"))
        .map(|s| s.contains("display:none"))
        .unwrap_or(false)
}

#[inline]
pub fn toggle(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        let style = if is_hidden(document) { "" } else { "display:none" };
        _ = el.set_attribute("style", style);
    }
}

/// Show the current grid settings and the key bindings.
pub fn update_hint(document: &web::Document, grid: &GridConfig, cells: usize, bloom: bool) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        let grid_text = format!(
            "{} {}×{} • {} cells • gutter {:.1}",
            grid.layout.name(),
            grid.rows,
            grid.cols,
            cells,
            grid.gutter
        );
        let keys_text = format!(
            "1/2 layout • [ ] gutter • r shuffle • b bloom {}",
            if bloom { "on" } else { "off" }
        );
        let hint_html = format!(
            "<div style='color: #cfe7ff; font: 13px system-ui; background: rgba(10, 14, 24, 0.8); padding: 8px 12px; border-radius: 6px; border: 1px solid rgba(80, 110, 150, 0.35);'>{}<br>{}</div>",
            grid_text, keys_text
        );
        el.set_inner_html(&hint_html);
    }
}
