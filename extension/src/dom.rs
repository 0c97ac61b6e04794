//! DOM application of launcher preview plans.
//!
//! The only module that touches the visited page. Rendering is
//! remove-then-insert keyed by a fixed container id, so repeated preview
//! requests never stack overlays. The mockup is cosmetic: clicking it
//! shows a transient "Preview Mode" tooltip and never starts a voice
//! session.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement};
use widget::preview::{PREVIEW_CONTAINER_ID, PREVIEW_Z_INDEX, PreviewPlan};

/// Inline mic glyph shown when no avatar is configured.
const MIC_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M12 1a3 3 0 0 0-3 3v8a3 3 0 0 0 6 0V4a3 3 0 0 0-3-3z"></path><path d="M19 10v2a7 7 0 0 1-14 0v-2"></path><line x1="12" y1="19" x2="12" y2="23"></line><line x1="8" y1="23" x2="16" y2="23"></line></svg>"#;

/// Render `plan` on the current page, replacing any prior preview.
pub fn render_preview(plan: &PreviewPlan) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    remove_preview();
    if let Err(err) = insert_preview(&document, plan) {
        leptos::logging::warn!("widget preview render failed: {err:?}");
    }
}

/// Remove the preview container, if present.
pub fn remove_preview() {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(existing) = document.get_element_by_id(PREVIEW_CONTAINER_ID) {
            existing.remove();
        }
    }
}

fn insert_preview(document: &Document, plan: &PreviewPlan) -> Result<(), JsValue> {
    let container: HtmlElement = document.create_element("div")?.unchecked_into();
    container.set_id(PREVIEW_CONTAINER_ID);
    let style = container.style();
    style.set_property("position", "fixed")?;
    style.set_property("z-index", PREVIEW_Z_INDEX)?;
    for (property, value) in plan.anchor_offsets() {
        style.set_property(property, &value)?;
    }

    let button = build_button(document, plan)?;
    let tooltip_plan = plan.clone();
    let tooltip_host = container.clone();
    let on_click = Closure::<dyn FnMut()>::new(move || {
        show_preview_tooltip(&tooltip_host, &tooltip_plan);
    });
    button.set_onclick(Some(on_click.as_ref().unchecked_ref()));
    on_click.forget();
    container.append_child(&button)?;
    container.append_child(&build_badge(document)?)?;

    if let Some(body) = document.body() {
        body.append_child(&container)?;
    }
    Ok(())
}

fn build_button(document: &Document, plan: &PreviewPlan) -> Result<HtmlElement, JsValue> {
    let button: HtmlElement = document.create_element("button")?.unchecked_into();
    let style = button.style();
    style.set_property("background-color", &plan.color)?;
    style.set_property("color", "white")?;
    style.set_property("border", "none")?;
    style.set_property("border-radius", "50px")?;
    style.set_property("padding", "10px 20px")?;
    style.set_property("display", "flex")?;
    style.set_property("align-items", "center")?;
    style.set_property("cursor", "pointer")?;
    style.set_property("box-shadow", "0 2px 10px rgba(0, 0, 0, 0.1)")?;

    if let Some(avatar_url) = &plan.avatar_url {
        let avatar: HtmlElement = document.create_element("img")?.unchecked_into();
        avatar.set_attribute("src", avatar_url)?;
        avatar.set_attribute("alt", "Avatar")?;
        let avatar_style = avatar.style();
        avatar_style.set_property("width", "24px")?;
        avatar_style.set_property("height", "24px")?;
        avatar_style.set_property("border-radius", "50%")?;
        avatar_style.set_property("margin-right", "8px")?;
        button.append_child(&avatar)?;
    } else {
        let mic: HtmlElement = document.create_element("span")?.unchecked_into();
        mic.set_inner_html(MIC_SVG);
        mic.style().set_property("margin-right", "8px")?;
        button.append_child(&mic)?;
    }

    let label = document.create_text_node(&plan.label);
    button.append_child(&label)?;
    Ok(button)
}

fn build_badge(document: &Document) -> Result<HtmlElement, JsValue> {
    let badge: HtmlElement = document.create_element("div")?.unchecked_into();
    badge.set_text_content(Some("PREVIEW"));
    let style = badge.style();
    style.set_property("position", "absolute")?;
    style.set_property("top", "-20px")?;
    style.set_property("left", "50%")?;
    style.set_property("transform", "translateX(-50%)")?;
    style.set_property("background-color", "rgba(0, 0, 0, 0.7)")?;
    style.set_property("color", "white")?;
    style.set_property("padding", "2px 6px")?;
    style.set_property("border-radius", "4px")?;
    style.set_property("font-size", "10px")?;
    style.set_property("font-weight", "bold")?;
    Ok(badge)
}

fn show_preview_tooltip(host: &HtmlElement, plan: &PreviewPlan) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(element) = document.create_element("div") else {
        return;
    };
    let tooltip: HtmlElement = element.unchecked_into();
    tooltip.set_text_content(Some("Preview Mode"));
    let style = tooltip.style();
    let styled = style.set_property("position", "absolute").is_ok()
        && style.set_property("background-color", "rgba(0, 0, 0, 0.8)").is_ok()
        && style.set_property("color", "white").is_ok()
        && style.set_property("padding", "5px 10px").is_ok()
        && style.set_property("border-radius", "4px").is_ok()
        && style.set_property("font-size", "12px").is_ok()
        && style.set_property("z-index", "10000").is_ok();
    if !styled {
        return;
    }
    for (property, value) in plan.tooltip_offsets() {
        let _ = style.set_property(property, &value);
    }
    if host.append_child(&tooltip).is_err() {
        return;
    }

    let visible_ms = plan.tooltip_visible_ms;
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(visible_ms).await;
        tooltip.remove();
    });
}
