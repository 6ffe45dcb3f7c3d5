//! Preview region.
//!
//! Both anchors are always mounted; the preview state decides which one is
//! visible. The iframe is pointed at `about:blank` whenever nothing is
//! embedded so a previous document never lingers behind the placeholder.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::models::DisplayMode;

stylance::import_crate_style!(css, "src/components/browser/preview.module.css");

const BLANK: &str = "about:blank";

fn display(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

#[component]
pub fn PreviewPane() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let preview = Memo::new(move |_| ctx.browser.preview());
    let mode = Memo::new(move |_| preview.with(|p| p.mode()));

    let message = move || preview.with(|p| p.message().unwrap_or_default().to_string());
    let target = move || preview.with(|p| p.target().unwrap_or(BLANK).to_string());

    view! {
        <section
            class=css::pane
            aria-label="PDF preview"
            style:display=move || display(mode.get() != DisplayMode::Hidden)
        >
            <p
                id="pdf-placeholder"
                class=css::placeholder
                style:display=move || display(mode.get() == DisplayMode::Placeholder)
            >
                {message}
            </p>
            <iframe
                id="pdf-viewer"
                class=css::viewer
                title="PDF Viewer"
                src=target
                style:display=move || display(mode.get() == DisplayMode::Embedded)
            />
        </section>
    }
}
