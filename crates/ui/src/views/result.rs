use dioxus::prelude::*;

use crate::views::share::ShareButton;
use crate::vm::ResultVm;

#[component]
pub fn ResultCard(result: ResultVm, on_retake: EventHandler<()>) -> Element {
    let rows = result.breakdown.iter().map(|row| {
        rsx! {
            li { key: "{row.label}", class: "result-breakdown-row",
                span { class: "result-breakdown-label", "{row.label}" }
                span { class: "result-breakdown-count", "{row.count}" }
            }
        }
    });

    rsx! {
        div { class: "result",
            h2 { class: "result-headline", "{result.headline}" }
            img {
                class: "result-image",
                src: "{result.image_src}",
                alt: "{result.image_alt}",
                width: "512",
                height: "512",
            }
            ul { class: "result-breakdown", {rows} }
            ShareButton { text: result.share_text.clone(), link: result.share_link.clone() }
            button {
                class: "btn btn-primary retake",
                r#type: "button",
                onclick: move |_| on_retake.call(()),
                "Retake Quiz"
            }
        }
    }
}
