//! Real capability implementations over the extension sandbox.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `chrome.*` APIs are ambient globals that may be absent (the popup
//! can be opened as a plain web page during development), so every access
//! goes through reflection and degrades to `None` instead of throwing.

use std::rc::Rc;

use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use crate::capabilities::{Messenger, SendError, TabQuery, UrlStore};
use crate::content::ContentScript;
use crate::messages::{Message, decode_message, encode_message};
use crate::relay;

/// `localStorage` key the content script keeps the current page URL under.
const PAGE_URL_STORAGE_KEY: &str = "voicelet_current_page_url";

/// Walk `globalThis.chrome.<...names>` without throwing on absence.
fn chrome_api(names: &[&str]) -> Option<JsValue> {
    let mut current: JsValue = js_sys::global().into();
    for name in ["chrome"].iter().chain(names) {
        current = js_sys::Reflect::get(&current, &JsValue::from_str(name)).ok()?;
        if current.is_undefined() || current.is_null() {
            return None;
        }
    }
    Some(current)
}

/// Call `chrome.<path>(args...)` dynamically. The receiver is the object
/// holding the method so `this` binds the way the API expects.
fn call_chrome(path: &[&str], args: &[&JsValue]) -> Option<JsValue> {
    let (method_name, holder_path) = path.split_last()?;
    let holder = chrome_api(holder_path)?;
    let method: js_sys::Function =
        js_sys::Reflect::get(&holder, &JsValue::from_str(method_name)).ok()?.dyn_into().ok()?;
    let call_args = js_sys::Array::new();
    for arg in args {
        call_args.push(arg);
    }
    js_sys::Reflect::apply(&method, &holder, &call_args).ok()
}

/// Register `listener` on an event object like `chrome.tabs.onUpdated`.
fn add_listener(event_path: &[&str], listener: &JsValue) -> bool {
    let mut path: Vec<&str> = event_path.to_vec();
    path.push("addListener");
    call_chrome(&path, &[listener]).is_some()
}

fn message_to_js(message: &Message) -> Result<JsValue, SendError> {
    let raw = encode_message(message)?;
    js_sys::JSON::parse(&raw).map_err(|_| SendError::NoReceiver)
}

fn message_from_js(value: &JsValue) -> Option<Message> {
    let raw: String = js_sys::JSON::stringify(value).ok()?.into();
    decode_message(&raw).ok()
}

/// Tab query over `chrome.tabs.query({active, currentWindow})`.
pub struct BrowserTabs;

#[async_trait(?Send)]
impl TabQuery for BrowserTabs {
    async fn active_tab_url(&self) -> Option<String> {
        let criteria = js_sys::Object::new();
        js_sys::Reflect::set(&criteria, &JsValue::from_str("active"), &JsValue::TRUE).ok()?;
        js_sys::Reflect::set(&criteria, &JsValue::from_str("currentWindow"), &JsValue::TRUE)
            .ok()?;

        let promise: js_sys::Promise =
            call_chrome(&["tabs", "query"], &[&criteria])?.dyn_into().ok()?;
        let tabs = wasm_bindgen_futures::JsFuture::from(promise).await.ok()?;
        let first = js_sys::Array::from(&tabs).get(0);
        if first.is_undefined() {
            return None;
        }
        js_sys::Reflect::get(&first, &JsValue::from_str("url")).ok()?.as_string()
    }
}

/// Messenger targeting the content script of one tab.
pub struct TabMessenger {
    tab_id: JsValue,
}

impl Messenger for TabMessenger {
    fn send(&self, message: &Message) -> Result<(), SendError> {
        let payload = message_to_js(message)?;
        call_chrome(&["tabs", "sendMessage"], &[&self.tab_id, &payload])
            .map(|_| ())
            .ok_or(SendError::NoReceiver)
    }
}

/// Messenger toward the extension runtime (content script → background).
pub struct RuntimeMessenger;

impl Messenger for RuntimeMessenger {
    fn send(&self, message: &Message) -> Result<(), SendError> {
        let payload = message_to_js(message)?;
        call_chrome(&["runtime", "sendMessage"], &[&payload])
            .map(|_| ())
            .ok_or(SendError::NoReceiver)
    }
}

/// Page-local URL cell backed by `localStorage`.
pub struct PageUrlStore;

impl UrlStore for PageUrlStore {
    fn set_current_url(&self, url: &str) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(PAGE_URL_STORAGE_KEY, url);
        }
    }

    fn current_url(&self) -> Option<String> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(PAGE_URL_STORAGE_KEY).ok().flatten())
    }
}

/// Wire the content script: announce, then handle relay messages.
pub fn run_content_script() {
    let script = Rc::new(ContentScript::new(PageUrlStore));
    script.announce_loaded(&RuntimeMessenger);

    let handler = Rc::clone(&script);
    let listener = Closure::<dyn FnMut(JsValue, JsValue, JsValue)>::new(
        move |message: JsValue, _sender: JsValue, _send_response: JsValue| {
            if let Some(message) = message_from_js(&message) {
                handler.handle(&message);
            }
        },
    );
    if !add_listener(&["runtime", "onMessage"], listener.as_ref()) {
        leptos::logging::warn!("content script loaded outside an extension context");
    }
    listener.forget();
}

/// Wire the background service worker: tab-URL pushes and URL queries.
pub fn run_background() {
    // Push completed navigations to the tab's content script.
    let on_updated = Closure::<dyn FnMut(JsValue, JsValue, JsValue)>::new(
        move |tab_id: JsValue, change_info: JsValue, tab: JsValue| {
            let complete = js_sys::Reflect::get(&change_info, &JsValue::from_str("status"))
                .ok()
                .and_then(|status| status.as_string())
                .is_some_and(|status| status == "complete");
            let url = js_sys::Reflect::get(&tab, &JsValue::from_str("url"))
                .ok()
                .and_then(|url| url.as_string());
            relay::on_tab_updated(&TabMessenger { tab_id }, complete, url.as_deref());
        },
    );
    add_listener(&["tabs", "onUpdated"], on_updated.as_ref());
    on_updated.forget();

    // Answer GET_CURRENT_URL queries asynchronously; returning `true`
    // keeps the reply channel open until sendResponse runs.
    let on_message = Closure::<dyn FnMut(JsValue, JsValue, js_sys::Function) -> JsValue>::new(
        move |message: JsValue, _sender: JsValue, send_response: js_sys::Function| {
            match message_from_js(&message) {
                Some(Message::GetCurrentUrl) => {
                    wasm_bindgen_futures::spawn_local(async move {
                        let reply = relay::answer_current_url(&BrowserTabs).await;
                        let payload = serde_json::to_string(&reply)
                            .ok()
                            .and_then(|raw| js_sys::JSON::parse(&raw).ok())
                            .unwrap_or(JsValue::NULL);
                        let _ = send_response.call1(&JsValue::NULL, &payload);
                    });
                    JsValue::TRUE
                }
                _ => JsValue::FALSE,
            }
        },
    );
    add_listener(&["runtime", "onMessage"], on_message.as_ref());
    on_message.forget();
}
