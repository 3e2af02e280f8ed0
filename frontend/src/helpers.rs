//! Small browser and formatting helpers shared by the pages.

use common::model::hotel::Hotel;
use common::model::picture::{order_pictures, Picture};
use common::validation::ValidationErrors;
use js_sys::Reflect;
use num_format::{Locale, ToFormattedString};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{BeforeUnloadEvent, HtmlElement};

/// How long a toast stays on screen.
const TOAST_MS: u32 = 3000;
/// Pause between a toast and a page load that would wipe it.
const NAVIGATE_AFTER_TOAST_MS: u32 = 1200;

const DIRTY_FLAG: &str = "app_dirty";

/// Shows a short-lived notification at the bottom of the page.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

pub fn navigate(href: &str) {
    if let Some(window) = web_sys::window() {
        window.location().set_href(href).ok();
    }
}

/// Shows `message`, then loads `href` once the toast has been on screen for a
/// moment.
pub fn navigate_after_toast(href: String, message: &str) {
    show_toast(message);
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(NAVIGATE_AFTER_TOAST_MS).await;
        navigate(&href);
    });
}

/// Asks the user to confirm a destructive action.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// MD5 hex digest, used to detect unsaved form changes.
pub fn compute_md5(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}

/// Publishes the unsaved-changes flag as `window.app_dirty`.
pub fn set_window_dirty_flag(dirty: bool) {
    if let Some(window) = web_sys::window() {
        let _ = Reflect::set(
            &window,
            &JsValue::from_str(DIRTY_FLAG),
            &JsValue::from_bool(dirty),
        );
    }
}

/// Text for the browser's leave-page prompt, if one should be shown.
fn leave_prompt(dirty: bool) -> Option<&'static str> {
    dirty.then_some("You have unsaved changes. Leave this page?")
}

/// Makes the browser ask before leaving a page while `window.app_dirty` is
/// set. Installed once at start-up.
pub fn install_unsaved_changes_guard() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let guard = Closure::<dyn FnMut(BeforeUnloadEvent)>::new(move |event: BeforeUnloadEvent| {
        let dirty = web_sys::window()
            .and_then(|w| Reflect::get(&w, &JsValue::from_str(DIRTY_FLAG)).ok())
            .and_then(|flag| flag.as_bool())
            .unwrap_or(false);
        if let Some(prompt) = leave_prompt(dirty) {
            event.prevent_default();
            event.set_return_value(prompt);
        }
    });

    if window
        .add_event_listener_with_callback("beforeunload", guard.as_ref().unchecked_ref())
        .is_ok()
    {
        guard.forget();
    }
}

/// `1234.5` -> `"1,234.50"`.
pub fn format_price(price: f64) -> String {
    let cents = (price * 100.0).round() as i64;
    format!(
        "{}.{:02}",
        (cents / 100).to_formatted_string(&Locale::en),
        (cents % 100).abs()
    )
}

/// The hotel's pictures in slideshow order.
pub fn sorted_pictures(hotel: &Hotel) -> Vec<Picture> {
    let mut pictures = hotel.pictures.clone().unwrap_or_default();
    order_pictures(&mut pictures);
    pictures
}

/// Flattens client-side validation errors into display messages, field by field.
pub fn validation_messages(errors: ValidationErrors) -> Vec<String> {
    errors.into_map().into_values().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use common::model::hotel::{HotelFields, HotelStatus};
    use common::validation::validate_hotel;
    use serde_json::json;

    fn picture(id: i64, index: i64) -> Picture {
        Picture {
            id,
            hotel_id: 1,
            file_path: format!("/storage/pictures/1/{}.png", id),
            file_size: 10,
            index,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn leaving_only_prompts_with_unsaved_changes() {
        assert!(leave_prompt(false).is_none());
        assert!(leave_prompt(true).unwrap().contains("unsaved changes"));
    }

    #[test]
    fn navigation_waits_while_the_toast_is_visible() {
        assert!(NAVIGATE_AFTER_TOAST_MS > 0);
        assert!(NAVIGATE_AFTER_TOAST_MS < TOAST_MS);
    }

    #[test]
    fn prices_are_grouped_and_rounded() {
        assert_eq!(format_price(0.0), "0.00");
        assert_eq!(format_price(89.9), "89.90");
        assert_eq!(format_price(1234.5), "1,234.50");
        assert_eq!(format_price(1999.999), "2,000.00");
    }

    #[test]
    fn pictures_are_shown_by_index_then_id() {
        let hotel = Hotel {
            id: 1,
            fields: HotelFields::default(),
            status: HotelStatus::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
            pictures: Some(vec![picture(3, 2), picture(9, 0), picture(4, 0)]),
        };
        let ids: Vec<i64> = sorted_pictures(&hotel).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 9, 3]);
    }

    #[test]
    fn client_errors_flatten_to_messages() {
        let errors = validate_hotel(&json!({ "name": "Solo" })).unwrap_err();
        let messages = validation_messages(errors);
        assert!(messages.contains(&"The city field is required.".to_string()));
        assert!(!messages.iter().any(|m| m.contains("name")));
    }
}
