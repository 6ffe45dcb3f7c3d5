//! In-browser tests. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use leptos::mount::mount_to;
use leptos::prelude::*;
use pdf_shelf::App;
use pdf_shelf::app::{AppContext, BrowserState};
use pdf_shelf::components::browser::FileList;
use pdf_shelf::config::LOAD_ERROR_PREFIX;
use pdf_shelf::core::{Action, Row};
use pdf_shelf::models::{DeviceClass, LoadState, NavigationPath, Node, PreviewState, Tree};
use pdf_shelf::utils::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn ready_state(device: DeviceClass) -> BrowserState {
    let state = BrowserState::new(device);
    state.structure.set(LoadState::Ready(Tree::new(vec![Node::folder(
        "A",
        vec![Node::file("x.pdf", "A/x.pdf")],
    )])));
    state
}

/// Mount a file list bound to `state` in its own container, so tests on the
/// shared page do not see each other's markup.
fn mount_file_list(state: BrowserState) -> HtmlElement {
    let document = document();
    let container: HtmlElement = document
        .create_element("div")
        .unwrap()
        .dyn_into()
        .unwrap();
    document.body().unwrap().append_child(&container).unwrap();

    mount_to(container.clone(), move || {
        provide_context(AppContext { browser: state });
        let model = Memo::new(move |_| state.view());
        view! { <FileList model=model /> }
    })
    .forget();

    container
}

fn current_path(state: &BrowserState) -> NavigationPath {
    state.navigator.with_untracked(|nav| nav.path().clone())
}

#[wasm_bindgen_test]
fn test_device_class_follows_user_agent() {
    let ua = dom::user_agent();
    assert!(!ua.is_empty());
    assert_eq!(dom::detect_device_class(), DeviceClass::from_user_agent(&ua));
}

#[wasm_bindgen_test]
fn test_preview_idle_while_loading_hidden_on_failure() {
    let state = BrowserState::new(DeviceClass::Pointer);
    assert_eq!(state.preview(), PreviewState::idle(DeviceClass::Pointer));
    assert_eq!(state.view(), None);

    let touch = BrowserState::new(DeviceClass::Touch);
    assert_eq!(touch.preview(), PreviewState::idle(DeviceClass::Touch));

    state.structure.set(LoadState::Failed("HTTP error: 404".to_string()));
    assert_eq!(state.preview(), PreviewState::Hidden);
    assert_eq!(state.view(), None);
}

#[wasm_bindgen_test]
fn test_dispatch_navigates_and_selects() {
    let state = ready_state(DeviceClass::Pointer);

    state.dispatch(Action::EnterFolder("A".to_string()));
    let view = state.view().unwrap();
    assert_eq!(view.folder_label, "A");
    assert_eq!(view.rows[0], Row::Up);

    state.dispatch(Action::Select {
        name: "x.pdf".to_string(),
        path: "A/x.pdf".to_string(),
    });
    assert_eq!(state.preview().target(), Some("A/x.pdf"));

    state.dispatch(Action::GoToRoot);
    assert_eq!(state.preview(), PreviewState::idle(DeviceClass::Pointer));
    assert_eq!(current_path(&state), NavigationPath::root());
}

#[wasm_bindgen_test]
fn test_download_link_leaves_path_and_preview() {
    let state = ready_state(DeviceClass::Pointer);
    state.dispatch(Action::EnterFolder("A".to_string()));
    let container = mount_file_list(state);

    let link: HtmlElement = container
        .query_selector("#file-list li a")
        .unwrap()
        .expect("file row has a download link")
        .dyn_into()
        .unwrap();
    assert_eq!(link.get_attribute("download").as_deref(), Some("x.pdf"));

    // Keep the browser from starting a real download; propagation is untouched.
    let cancel = Closure::<dyn FnMut(web_sys::Event)>::new(|ev: web_sys::Event| {
        ev.prevent_default();
    });
    link.add_event_listener_with_callback_and_bool("click", cancel.as_ref().unchecked_ref(), true)
        .unwrap();
    cancel.forget();

    link.click();
    assert_eq!(current_path(&state), ["A"].into_iter().collect::<NavigationPath>());
    assert_eq!(state.preview(), PreviewState::idle(DeviceClass::Pointer));

    // The row itself still selects.
    let row: HtmlElement = link.parent_element().unwrap().dyn_into().unwrap();
    row.click();
    assert_eq!(state.preview().target(), Some("A/x.pdf"));
    assert_eq!(current_path(&state), ["A"].into_iter().collect::<NavigationPath>());
}

#[wasm_bindgen_test]
fn test_load_failure_renders_single_error_row() {
    let detail = "HTTP error! status: 404 - Not Found";
    let state = BrowserState::new(DeviceClass::Pointer);
    state.structure.set(LoadState::Failed(detail.to_string()));
    let container = mount_file_list(state);

    let items = container.query_selector_all("#file-list li").unwrap();
    assert_eq!(items.length(), 1);

    let text = items.get(0).and_then(|li| li.text_content()).unwrap_or_default();
    assert!(text.contains(LOAD_ERROR_PREFIX), "got {:?}", text);
    assert!(text.contains(detail), "got {:?}", text);
    assert_eq!(state.preview(), PreviewState::Hidden);
}

#[wasm_bindgen_test]
fn test_app_mounts_ui_anchors() {
    mount_to_body(App);

    let document = document();
    for id in [
        "file-list",
        "breadcrumbs",
        "pdf-viewer",
        "pdf-placeholder",
        "current-folder-name",
    ] {
        assert!(document.get_element_by_id(id).is_some(), "missing #{}", id);
    }
}
