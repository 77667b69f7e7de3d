use dioxus::document::eval;
use dioxus::prelude::*;

/// JS snippet that copies `text` to the clipboard.
pub(crate) fn clipboard_script(text: &str) -> String {
    // A JSON string is a valid JS string literal.
    let literal = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
    format!("navigator.clipboard.writeText({literal});")
}

#[component]
pub fn ShareButton(text: String, link: String) -> Element {
    let mut copied = use_signal(|| false);
    let script = clipboard_script(&text);

    rsx! {
        div { class: "share",
            button {
                class: "btn btn-secondary share-copy",
                r#type: "button",
                onclick: move |_| {
                    let _ = eval(&script);
                    tracing::debug!("share text copied");
                    copied.set(true);
                },
                if copied() { "Copied!" } else { "Share" }
            }
            a {
                class: "share-link",
                href: "{link}",
                target: "_blank",
                rel: "noopener noreferrer",
                "Post it"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipboard_script_escapes_text() {
        assert_eq!(
            clipboard_script("I am a \"cat\"! https://q.example"),
            r#"navigator.clipboard.writeText("I am a \"cat\"! https://q.example");"#
        );
    }
}
