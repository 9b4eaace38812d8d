//! Upload view: pick a board image, choose whose turn it is, submit for
//! analysis. The flow state machine lives in vision-core; this component only
//! wires browser events and the network call to it.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{DragEvent, FormData, HtmlInputElement};

use vision_core::{AnalysisResult, Turn, UploadFlow};

use crate::{fetch, session, Page};

async fn submit_analysis(file: &web_sys::File, turn: Turn) -> Result<AnalysisResult, String> {
    let form = FormData::new().map_err(|_| "Failed to build form data".to_string())?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| "Failed to attach file".to_string())?;
    form.append_with_str("turn", turn.as_str())
        .map_err(|_| "Failed to attach turn".to_string())?;

    let (status, body) = fetch::post_form("/api/analyze", &form).await?;
    if !(200..300).contains(&status) {
        return Err(fetch::error_message(status, &body));
    }

    serde_json::from_str(&body)
        .map_err(|_| "Invalid response from server - missing required data".to_string())
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let page = expect_context::<RwSignal<Page>>();
    let flow = RwSignal::new(UploadFlow::new());
    let selected_file = RwSignal::new_local(None::<web_sys::File>);
    let turn = RwSignal::new(Turn::White);
    let (drag_active, set_drag_active) = signal(false);

    let pick_file = move |file: web_sys::File| {
        flow.update(|f| {
            if f.select_file(file.name()) {
                selected_file.set(Some(file));
            }
        });
    };

    let on_file_input = move |ev: web_sys::Event| {
        let input = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok());
        if let Some(file) = input.and_then(|i| i.files()).and_then(|l| l.get(0)) {
            pick_file(file);
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);
        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|l| l.get(0))
        {
            pick_file(file);
        }
    };

    let on_analyze = move |_| {
        let Some(file) = selected_file.get_untracked() else {
            return;
        };
        let mut started = false;
        flow.update(|f| started = f.begin_submit().is_ok());
        if !started {
            return;
        }

        let turn_value = turn.get_untracked();
        spawn_local(async move {
            match submit_analysis(&file, turn_value).await {
                Ok(result) => {
                    let mut stored = None;
                    flow.update(|f| {
                        if let Ok(s) = f.complete(result, turn_value) {
                            stored = Some(s);
                        }
                    });
                    // complete() already moved the flow into its error state
                    // on a validation failure.
                    if let Some(s) = stored {
                        match session::save(&s) {
                            Ok(()) => page.set(Page::Results),
                            Err(message) => flow.update(|f| f.fail(message)),
                        }
                    }
                }
                Err(message) => flow.update(|f| f.fail(message)),
            }
        });
    };

    view! {
        <div class="app-shell">
            <header class="app-header">
                <span class="logo">"♟️"</span>
                <div>
                    <h1>"Chess Vision"</h1>
                    <p class="subtitle">"AI-Powered Strategy Coach"</p>
                </div>
            </header>

            <main class="container">
                <section class="hero">
                    <h2>"Analyze Your Chess Position"</h2>
                    <p>
                        "Upload a photo of your chess board and get expert move "
                        "suggestions with detailed explanations"
                    </p>
                </section>

                <section class="upload-card">
                    <div class="upload-grid">
                        <div>
                            <label class="field-label">"Chess Board Image"</label>
                            <div
                                class=move || {
                                    let state = if drag_active.get() {
                                        "drag-active"
                                    } else if flow.with(|f| f.file_name().is_some()) {
                                        "has-file"
                                    } else {
                                        ""
                                    };
                                    format!("drop-zone {state}")
                                }
                                on:dragenter=move |ev: DragEvent| {
                                    ev.prevent_default();
                                    set_drag_active.set(true);
                                }
                                on:dragover=move |ev: DragEvent| {
                                    ev.prevent_default();
                                    set_drag_active.set(true);
                                }
                                on:dragleave=move |ev: DragEvent| {
                                    ev.prevent_default();
                                    set_drag_active.set(false);
                                }
                                on:drop=on_drop
                            >
                                <input type="file" accept="image/*" class="file-input" on:change=on_file_input />
                                {move || match flow.with(|f| f.file_name().map(str::to_string)) {
                                    Some(name) => view! {
                                        <div class="drop-hint">
                                            <p class="file-name">{name}</p>
                                            <p class="hint-minor">"Ready to analyze"</p>
                                        </div>
                                    }.into_any(),
                                    None => view! {
                                        <div class="drop-hint">
                                            <p>"Drop your chess board image here"</p>
                                            <p class="hint-minor">"or click to browse files"</p>
                                        </div>
                                    }.into_any(),
                                }}
                            </div>
                        </div>

                        <div class="upload-settings">
                            <div>
                                <label class="field-label">"Whose Turn?"</label>
                                <select
                                    class="turn-select"
                                    on:change=move |ev| {
                                        if let Ok(t) = event_target_value(&ev).parse::<Turn>() {
                                            turn.set(t);
                                        }
                                    }
                                >
                                    <option value="White" selected=move || turn.get() == Turn::White>
                                        "White to move"
                                    </option>
                                    <option value="Black" selected=move || turn.get() == Turn::Black>
                                        "Black to move"
                                    </option>
                                </select>
                            </div>

                            <div class="info-box">
                                <h3>"What happens next?"</h3>
                                <ul>
                                    <li>"AI converts your image to chess notation"</li>
                                    <li>"The engine analyzes the position"</li>
                                    <li>"Get top move suggestions with explanations"</li>
                                    <li>"See visual board representations"</li>
                                </ul>
                            </div>

                            {move || flow.with(|f| f.error_message().map(|m| {
                                let message = m.to_string();
                                view! {
                                    <div class="error-box">
                                        <strong>"Error: "</strong>
                                        {message}
                                    </div>
                                }
                            }))}

                            <button
                                class="analyze-btn"
                                disabled=move || flow.with(|f| !f.can_submit())
                                on:click=on_analyze
                            >
                                {move || if flow.with(|f| f.is_submitting()) {
                                    "Analyzing Position..."
                                } else {
                                    "Analyze Position"
                                }}
                            </button>
                        </div>
                    </div>
                </section>
            </main>
        </div>
    }
}
