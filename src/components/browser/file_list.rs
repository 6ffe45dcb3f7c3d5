//! File list component.
//!
//! Rows come from the view model in source order. Folder rows descend, the
//! up row ascends, file rows select; the download link on file rows is
//! isolated from the row click.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{DOWNLOAD_LABEL, LOAD_ERROR_PREFIX};
use crate::core::{ExplorerView, Row};
use crate::models::LoadState;

stylance::import_crate_style!(css, "src/components/browser/file_list.module.css");

#[component]
pub fn FileList(model: Memo<Option<ExplorerView>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let load_error = move || {
        ctx.browser.structure.with(|s| match s {
            LoadState::Failed(msg) => Some(format!("{} {}", LOAD_ERROR_PREFIX, msg)),
            _ => None,
        })
    };

    // Index is part of the key: file names are not guaranteed unique.
    let rows = move || {
        model
            .get()
            .map(|v| v.rows)
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <ul id="file-list" class=css::list>
            {move || load_error().map(|msg| view! { <li class=css::error>{msg}</li> })}
            <For
                each=rows
                key=|(idx, row)| (*idx, row.clone())
                children=move |(_, row)| view! { <FileListItem row=row /> }
            />
        </ul>
    }
}

#[component]
fn FileListItem(row: Row) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let icon = ic::row_icon(&row);
    let label = row.label().to_string();
    let action = row.action();
    let download = row.download();

    let item_class = match row {
        Row::Up | Row::Folder { .. } => format!("{} {}", css::item, css::folder),
        Row::File { .. } => format!("{} {}", css::item, css::file),
        Row::Empty => format!("{} {}", css::item, css::empty),
    };

    let is_interactive = action.is_some();
    let handle_click = move |_: MouseEvent| {
        if let Some(action) = action.clone() {
            ctx.browser.dispatch(action);
        }
    };

    view! {
        <li
            class=item_class
            on:click=handle_click
            role=is_interactive.then_some("button")
            tabindex=is_interactive.then_some("0")
        >
            {icon.map(|icon| view! {
                <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            })}
            <span class=css::name>{label}</span>
            {download.map(|d| view! {
                <a
                    class=css::download
                    href=d.href
                    download=d.filename
                    on:click=|ev: MouseEvent| ev.stop_propagation()
                >
                    <span class=css::icon aria-hidden="true"><Icon icon=ic::DOWNLOAD /></span>
                    {DOWNLOAD_LABEL}
                </a>
            })}
        </li>
    }
}
