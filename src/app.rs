//! Root application module.
//!
//! Contains the main App component, AppContext definition, BrowserState,
//! and the one-shot structure load following Leptos conventions.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::Browser;
use crate::config::STRUCTURE_URL;
use crate::core::{Action, ExplorerView, Navigator, SelectEffect, store};
use crate::models::{DeviceClass, LoadState, PreviewState};
use crate::utils::dom;

// ============================================================================
// BrowserState
// ============================================================================

/// Browser state managed with Leptos signals.
///
/// Holds the loaded structure and the single [`Navigator`]. All mutation
/// goes through [`BrowserState::dispatch`], which runs to completion inside
/// the event handler that calls it.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct BrowserState {
    /// Structure document lifecycle.
    pub structure: RwSignal<LoadState>,
    /// Current path and preview.
    pub navigator: RwSignal<Navigator>,
}

impl BrowserState {
    /// Creates browser state at the root, with nothing loaded yet.
    pub fn new(device: DeviceClass) -> Self {
        Self {
            structure: RwSignal::new(LoadState::Loading),
            navigator: RwSignal::new(Navigator::new(device)),
        }
    }

    /// View model for the current path, once the structure is loaded.
    pub fn view(&self) -> Option<ExplorerView> {
        self.structure.with(|structure| match structure {
            LoadState::Ready(tree) => Some(self.navigator.with(|nav| nav.view(tree))),
            _ => None,
        })
    }

    /// Preview to display. Hidden once the structure has failed to load.
    pub fn preview(&self) -> PreviewState {
        self.structure.with(|structure| match structure {
            LoadState::Failed(_) => PreviewState::Hidden,
            LoadState::Loading | LoadState::Ready(_) => {
                self.navigator.with(|nav| nav.preview().clone())
            }
        })
    }

    /// Apply a user intent and carry out its side effect.
    pub fn dispatch(&self, action: Action) {
        let device = self.navigator.with_untracked(|nav| nav.device());
        let selected = match &action {
            Action::Select { name, .. } => Some(name.clone()),
            _ => None,
        };

        let effect = self
            .navigator
            .try_update(|nav| nav.apply(action))
            .flatten();

        let (Some(effect), Some(name)) = (effect, selected) else {
            return;
        };

        web_sys::console::log_1(
            &format!(
                "Handling PDF: {} ({:?}) name={}",
                effect.target(),
                device,
                name
            )
            .into(),
        );

        if let SelectEffect::OpenExternal { target } = effect
            && !dom::open_in_new_tab(&target)
        {
            web_sys::console::warn_1(&format!("Browser refused to open {}", target).into());
        }
    }

    /// Fetch the structure document once and publish the result.
    pub fn load(&self) {
        let structure = self.structure;
        spawn_local(async move {
            match store::load().await {
                Ok(tree) => {
                    web_sys::console::log_1(
                        &format!("Loaded {}: {} nodes", STRUCTURE_URL, tree.node_count()).into(),
                    );
                    if tree.is_empty() {
                        web_sys::console::warn_1(&format!("{} has no entries", STRUCTURE_URL).into());
                    }
                    structure.set(LoadState::Ready(tree));
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Error loading or parsing {}: {}", STRUCTURE_URL, e).into(),
                    );
                    structure.set(LoadState::Failed(e.to_string()));
                }
            }
        });
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component using `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Structure, navigation and preview state.
    pub browser: BrowserState,
}

impl AppContext {
    /// Creates a new application context for the detected device class.
    pub fn new() -> Self {
        Self {
            browser: BrowserState::new(dom::detect_device_class()),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Starts the structure load
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    ctx.browser.load();

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #c0392b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #c0392b; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="padding: 0.75rem 2rem; cursor: pointer;"
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Browser />
        </ErrorBoundary>
    }
}
