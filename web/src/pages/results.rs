//! Results view: renders the stored analysis session as per-move cards and
//! drives on-demand sequence browsing.
//!
//! All reconciliation logic (normalization, score formatting, PV pairing,
//! last-selection-wins) lives in vision-core; this module is markup and
//! signal wiring.

use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlImageElement;

use vision_core::analysis::metric_color;
use vision_core::variation::{format_principal_variation, variation_plies};
use vision_core::{AdvancedAnalysis, AnalysisSession, MoveCard, SequenceBrowser, SequenceData};

use crate::{fetch, session, Page};

/// Rendered boards and sequence frames are served by the backend directly.
const ARTIFACTS_BASE: &str = "http://localhost:5000/static/artifacts";
const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

async fn fetch_sequence(move_id: u32) -> Result<SequenceData, String> {
    let (status, body) = fetch::get(&format!("/api/sequence/{move_id}")).await?;
    if !(200..300).contains(&status) {
        return Err(fetch::error_message(status, &body));
    }
    serde_json::from_str(&body).map_err(|e| format!("Malformed sequence payload: {e}"))
}

#[component]
pub fn ResultsPage() -> impl IntoView {
    // Missing or unparsable session data is terminal for this view; the only
    // way out is back to the upload flow.
    match session::load() {
        Ok(session) => view! { <ResultsView session=session /> }.into_any(),
        Err(err) => view! { <ErrorCard message=err.to_string() /> }.into_any(),
    }
}

#[component]
fn ErrorCard(message: String) -> impl IntoView {
    let page = expect_context::<RwSignal<Page>>();
    view! {
        <div class="center-screen">
            <div class="error-card">
                <h2>"Error Loading Results"</h2>
                <p>{message}</p>
                <button class="analyze-btn" on:click=move |_| page.set(Page::Upload)>
                    "Return to Upload Page"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ResultsView(session: AnalysisSession) -> impl IntoView {
    let page = expect_context::<RwSignal<Page>>();
    let cards = session.result.move_cards();
    let fen = session.result.fen.clone();
    let advanced = session.result.advanced_analysis.clone();

    let browser = RwSignal::new(SequenceBrowser::new());
    let selected_ply = RwSignal::new(None::<(u32, usize)>);
    let (copied, set_copied) = signal(false);

    let copy_fen = {
        let fen = fen.clone();
        move |_| {
            if let Some(window) = web_sys::window() {
                let _ = window.navigator().clipboard().write_text(&fen);
                set_copied.set(true);
                set_timeout(move || set_copied.set(false), Duration::from_millis(2000));
            }
        }
    };

    // Selecting any ply fetches the whole sequence for that move, keyed by
    // the move's 1-based position. Only the most recent selection may commit.
    let select_move = move |move_id: u32, ply_idx: usize| {
        selected_ply.set(Some((move_id, ply_idx)));
        browser.update(|b| b.select(move_id));
        spawn_local(async move {
            match fetch_sequence(move_id).await {
                Ok(data) => {
                    browser.update(|b| {
                        b.commit(move_id, data);
                    });
                }
                Err(_) => browser.update(|b| b.fail(move_id)),
            }
        });
    };

    view! {
        <div class="app-shell">
            <header class="app-header">
                <span class="logo">"♟️"</span>
                <div>
                    <h1>"Chess Vision"</h1>
                    <p class="subtitle">"Analysis Results"</p>
                </div>
            </header>

            <main class="container">
                <button class="ghost-btn back-btn" on:click=move |_| page.set(Page::Upload)>
                    "← Analyze Another Position"
                </button>

                <section class="panel">
                    <h3>"Position Analysis"</h3>
                    <div class="fen-row">
                        <div>
                            <p class="field-label">"FEN Notation:"</p>
                            <code class="fen">{fen.clone()}</code>
                        </div>
                        <button class="ghost-btn" on:click=copy_fen>
                            {move || if copied.get() { "Copied!" } else { "Copy" }}
                        </button>
                    </div>
                </section>

                {advanced.map(|adv| view! { <AdvancedPanel advanced=adv /> })}

                <h2 class="section-title">"Top Move Suggestions"</h2>
                <div class="card-list">
                    {cards
                        .into_iter()
                        .map(|card| move_card_view(card, browser, selected_ply, select_move))
                        .collect_view()}
                </div>
            </main>
        </div>
    }
}

fn move_card_view<F>(
    card: MoveCard,
    browser: RwSignal<SequenceBrowser>,
    selected_ply: RwSignal<Option<(u32, usize)>>,
    select_move: F,
) -> impl IntoView
where
    F: Fn(u32, usize) + Copy + Send + Sync + 'static,
{
    let move_id = (card.index + 1) as u32;
    let uci = card.uci.clone();
    let score_label = card.score.format();
    let score_class = format!("score-badge {}", card.score.color_class());
    let explanation = card.explanation.clone();
    let pv_text = format_principal_variation(&card.variation);
    let plies = variation_plies(&card.variation);
    let board_url = card
        .board_image
        .as_ref()
        .map(|img| format!("{ARTIFACTS_BASE}/{img}"))
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    let (tab, set_tab) = signal("analysis");

    let on_img_error = move |ev: web_sys::ErrorEvent| {
        if let Some(img) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlImageElement>().ok())
        {
            img.set_src(PLACEHOLDER_IMAGE);
        }
    };

    let badge_uci = uci.clone();
    let board_panel = move || {
        let showing = browser.with(|b| b.selected() == Some(move_id));
        if !showing {
            return view! {
                <div class="board-wrap">
                    <img
                        src=board_url.clone()
                        alt=format!("Board position after {badge_uci}")
                        class="board-img"
                        on:error=on_img_error
                    />
                    <span class="board-badge">{format!("After {badge_uci}")}</span>
                </div>
            }
            .into_any();
        }

        if browser.with(|b| b.is_loading()) {
            return view! {
                <div class="sequence-loading">
                    <div class="spinner"></div>
                </div>
            }
            .into_any();
        }

        match browser.with(|b| b.current_image_url(ARTIFACTS_BASE)) {
            Some(src) => {
                let step_label = browser.with(|b| {
                    format!("Step {} of {}", b.step() + 1, b.step_count())
                });
                view! {
                    <div class="sequence-panel">
                        <img src=src alt="Move sequence step" class="board-img" on:error=on_img_error />
                        <div class="sequence-nav">
                            <button
                                class="ghost-btn"
                                disabled=move || browser.with(|b| b.step() == 0)
                                on:click=move |_| browser.update(|b| b.prev_step())
                            >
                                "← Previous"
                            </button>
                            <span class="step-label">{step_label}</span>
                            <button
                                class="ghost-btn"
                                disabled=move || browser.with(|b| {
                                    b.step_count() == 0 || b.step() + 1 == b.step_count()
                                })
                                on:click=move |_| browser.update(|b| b.next_step())
                            >
                                "Next →"
                            </button>
                        </div>
                    </div>
                }
                .into_any()
            }
            // Sequence fetch failed: fall back to the static board.
            None => view! {
                <div class="board-wrap">
                    <img
                        src=board_url.clone()
                        alt=format!("Board position after {badge_uci}")
                        class="board-img"
                        on:error=on_img_error
                    />
                </div>
            }
            .into_any(),
        }
    };

    let analysis_tab = move || {
        let e = explanation.clone();
        if e.is_empty() {
            return view! {
                <div class="explain-box muted-box">
                    <p>"No detailed analysis available for this move."</p>
                </div>
            }
            .into_any();
        }
        view! {
            <div class="explain-list">
                {(!e.best_move_explanation.is_empty()).then(|| view! {
                    <div class="explain-box explain-best">
                        <h4>"Best Move Explanation"</h4>
                        <p>{e.best_move_explanation.clone()}</p>
                    </div>
                })}
                {(!e.strategic_idea.is_empty()).then(|| view! {
                    <div class="explain-box explain-strategy">
                        <h4>"Strategic Idea"</h4>
                        <p>{e.strategic_idea.clone()}</p>
                    </div>
                })}
                {(!e.tactical_motif.is_empty()).then(|| view! {
                    <div class="explain-box explain-tactic">
                        <h4>"Tactical Motif"</h4>
                        <p>{e.tactical_motif.clone()}</p>
                    </div>
                })}
            </div>
        }
        .into_any()
    };

    let variation_tab = move || {
        let pv = pv_text.clone();
        let ply_buttons = if plies.is_empty() {
            view! { <p class="muted">"No variation available"</p> }.into_any()
        } else {
            plies
                .iter()
                .enumerate()
                .map(|(idx, ply)| {
                    let label = ply.clone();
                    view! {
                        <button
                            class=move || {
                                if selected_ply.get() == Some((move_id, idx)) {
                                    "ply-btn active"
                                } else {
                                    "ply-btn"
                                }
                            }
                            on:click=move |_| select_move(move_id, idx)
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()
                .into_any()
        };
        view! {
            <div class="variation-panel">
                <p class="field-label">"Principal Variation:"</p>
                <code class="pv-line">{pv}</code>
                <p class="hint-minor">
                    "This shows the expected continuation if both players play optimally."
                </p>
                <p class="field-label">"Interactive Moves:"</p>
                <p class="hint-minor">"Click on a move to see the board position after that move."</p>
                <div class="ply-row">{ply_buttons}</div>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="move-card">
            <div class="move-card-header">
                <div class="move-title">
                    <span class="move-number">{move_id}</span>
                    "Move: "
                    <code class="move-uci">{uci.clone()}</code>
                </div>
                <span class=score_class>{score_label}</span>
            </div>
            <div class="move-card-body">
                <div class="board-panel">{board_panel}</div>
                <div class="analysis-panel">
                    <div class="tabs">
                        <button
                            class=move || if tab.get() == "analysis" { "tab active" } else { "tab" }
                            on:click=move |_| set_tab.set("analysis")
                        >
                            "Analysis"
                        </button>
                        <button
                            class=move || if tab.get() == "variation" { "tab active" } else { "tab" }
                            on:click=move |_| set_tab.set("variation")
                        >
                            "Variation"
                        </button>
                    </div>
                    {move || if tab.get() == "analysis" { analysis_tab() } else { variation_tab() }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn AdvancedPanel(advanced: AdvancedAnalysis) -> impl IntoView {
    let best = advanced.best_move.clone();
    view! {
        <section class="panel advanced-panel">
            <h3>"Advanced Engine Analysis"</h3>
            <div class="advanced-grid">
                <div>
                    <h4>{format!("Best Move: {}", best.mv)}</h4>
                    {metric_row("Engine Evaluation", best.norm_engine_eval)}
                    {metric_row("King Safety", best.norm_king_safety)}
                    {metric_row("Positional Score", best.norm_positional_score)}
                    {metric_row("Tactical Complexity", best.norm_tactical_complexity)}
                </div>
                <div>
                    <h4>"Analysis Reasoning"</h4>
                    <p class="reasoning">{advanced.reasoning.clone()}</p>
                </div>
            </div>
        </section>
    }
}

fn metric_row(label: &'static str, value: f64) -> impl IntoView {
    let pct = (value * 100.0).round() as i64;
    view! {
        <div class="metric-row">
            <span class="metric-label">{label}</span>
            <div class="metric-track">
                <div
                    class=format!("metric-fill {}", metric_color(value))
                    style=format!("width: {pct}%")
                ></div>
            </div>
            <span class="metric-pct">{format!("{pct}%")}</span>
        </div>
    }
}
