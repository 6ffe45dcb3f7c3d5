//! Main browser component.
//!
//! ## Layout
//!
//! - **Desktop**: file list on the left, embedded preview on the right
//! - **Mobile**: single column; the preview region only shows messages

use leptos::prelude::*;

use super::{Breadcrumbs, FileList, PreviewPane};
use crate::app::AppContext;
use crate::config::{APP_NAME, ROOT_LABEL};

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// Folder browser view component.
#[component]
pub fn Browser() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Recomputed on navigation or load; equal models skip repainting.
    let model = Memo::new(move |_| ctx.browser.view());

    let folder_label = move || {
        model.with(|m| {
            m.as_ref()
                .map(|v| v.folder_label.clone())
                .unwrap_or_else(|| ROOT_LABEL.to_string())
        })
    };

    view! {
        <div class=css::browser>
            <header class=css::header>
                <h1 class=css::title>{APP_NAME}</h1>
                <Breadcrumbs model=model />
            </header>

            <div class=css::body>
                <section class=css::listPane aria-label="Folder contents">
                    <h2 id="current-folder-name" class=css::folderName>{folder_label}</h2>
                    <FileList model=model />
                </section>

                <PreviewPane />
            </div>
        </div>
    }
}
