//! Breadcrumb trail.
//!
//! Root control first, then one element per path segment. Ancestors are
//! buttons; the displayed folder is plain text.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::BREADCRUMB_SEPARATOR;
use crate::core::{Crumb, ExplorerView};

stylance::import_crate_style!(css, "src/components/browser/breadcrumbs.module.css");

#[component]
pub fn Breadcrumbs(model: Memo<Option<ExplorerView>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <nav id="breadcrumbs" class=css::breadcrumbs aria-label="Breadcrumb">
            {move || {
                let crumbs = model
                    .get()
                    .map(|v| v.breadcrumbs)
                    .unwrap_or_else(|| vec![Crumb::Root]);

                crumbs
                    .into_iter()
                    .enumerate()
                    .map(|(idx, crumb)| {
                        let label = crumb.label().to_string();
                        let is_root = matches!(crumb, Crumb::Root);

                        view! {
                            <>
                                {(idx > 0).then(|| view! {
                                    <span class=css::separator aria-hidden="true">
                                        {BREADCRUMB_SEPARATOR}
                                    </span>
                                })}
                                {match crumb.action() {
                                    Some(action) => view! {
                                        <button
                                            class=css::link
                                            on:click=move |_| ctx.browser.dispatch(action.clone())
                                        >
                                            {is_root.then(|| view! {
                                                <span class=css::icon><Icon icon=ic::HOME /></span>
                                            })}
                                            {label}
                                        </button>
                                    }.into_any(),
                                    None => view! {
                                        <span class=css::current aria-current="page">{label}</span>
                                    }.into_any(),
                                }}
                            </>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
