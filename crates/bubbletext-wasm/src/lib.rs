use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use bubbletext_core::{Message, Role};

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RenderOptions {
    role: Option<Role>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderedMessage {
    role: Role,
    who: &'static str,
    html: String,
    is_markup: bool,
}

/// Formats assistant text for `innerHTML`. `null` and `undefined` give `""`.
#[wasm_bindgen(js_name = formatForDisplay)]
pub fn format_for_display(raw: Option<String>) -> String {
    bubbletext_core::format_for_display(raw.as_deref())
}

#[wasm_bindgen(js_name = renderMessage)]
pub fn render_message(text: Option<String>) -> Result<JsValue, JsValue> {
    render_message_with_options(text, JsValue::UNDEFINED)
}

#[wasm_bindgen(js_name = renderMessageWithOptions)]
pub fn render_message_with_options(
    text: Option<String>,
    options: JsValue,
) -> Result<JsValue, JsValue> {
    let options = options_from_js(options)?;
    let rendered = rendered_message(options.role.unwrap_or(Role::Assistant), text.as_deref());
    serde_wasm_bindgen::to_value(&rendered).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Display text for a chat reply body, falling back to pretty JSON.
#[wasm_bindgen(js_name = replyText)]
pub fn reply_text(body: &str) -> Result<String, JsValue> {
    bubbletext_core::reply_text(body).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[wasm_bindgen(js_name = failureText)]
pub fn failure_text(body: Option<String>) -> String {
    bubbletext_core::failure_text(body.as_deref())
}

fn options_from_js(value: JsValue) -> Result<RenderOptions, JsValue> {
    if value.is_null() || value.is_undefined() {
        return Ok(RenderOptions::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

fn rendered_message(role: Role, text: Option<&str>) -> RenderedMessage {
    let content = Message::new(role, text).content();
    RenderedMessage {
        role,
        who: role.speaker(),
        is_markup: content.is_markup(),
        html: content.to_inner_html(),
    }
}

#[cfg(test)]
mod tests {
    use super::{RenderedMessage, rendered_message};
    use bubbletext_core::Role;

    #[test]
    fn assistant_messages_are_markup() {
        let rendered = rendered_message(Role::Assistant, Some("*hi*"));
        assert_eq!(
            rendered,
            RenderedMessage {
                role: Role::Assistant,
                who: "Assistant",
                html: "<strong>hi</strong>".to_string(),
                is_markup: true,
            }
        );
    }

    #[test]
    fn user_messages_are_escaped_text() {
        let rendered = rendered_message(Role::User, Some("*hi* <b>"));
        assert!(!rendered.is_markup);
        assert_eq!(rendered.who, "You");
        assert_eq!(rendered.html, "*hi* &lt;b&gt;");
    }

    #[test]
    fn absent_text_renders_empty() {
        assert_eq!(rendered_message(Role::Assistant, None).html, "");
        assert_eq!(super::format_for_display(None), "");
    }
}
