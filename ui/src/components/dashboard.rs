//! Product dashboard: manufacturer selection, debounced search, pagination
//! and row expansion over the remote products endpoint.
//!
//! All query state lives in one [`DashboardState`] signal mutated through its
//! named transitions; this component is glue between DOM events, the debounce
//! timer and the fetch task.

use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::format::format_cell;
use crate::state::DashboardState;
use crate::types::{manufacturer_by_code, Manufacturer, Record, MANUFACTURERS};
use crate::SessionContext;

/// Quiet period between the last query-affecting event and the fetch.
const DEBOUNCE_MS: u32 = 300;

/// At or below this width the table collapses into a card list.
const MOBILE_BREAKPOINT: f64 = 768.0;

/// Columns a card shows without expanding.
const CARD_VISIBLE_COLUMNS: usize = 3;

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1024.0)
}

#[component]
pub fn ProductDashboard() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let state = RwSignal::new(DashboardState::new());
    let pending = StoredValue::new_local(None::<Timeout>);

    let (viewport, set_viewport) = signal(viewport_width());
    let _resize = window_event_listener(ev::resize, move |_| set_viewport.set(viewport_width()));

    let run_fetch = move || {
        let Some(query) = state.with_untracked(|s| s.query()) else {
            return;
        };
        let seq = state.try_update(|s| s.begin_fetch()).unwrap_or(0);
        spawn_local(async move {
            match api::fetch_products(&query).await {
                Ok(slice) => state.update(|s| {
                    if !s.apply_success(seq, slice.data, slice.count) {
                        log::info!("discarded stale products response (seq {seq})");
                    }
                }),
                Err(err) => {
                    log::error!("products fetch failed: {err}");
                    state.update(|s| s.apply_failure(seq));
                }
            }
        });
    };

    // One debounce timer covers every query-affecting transition; scheduling
    // cancels any not-yet-fired predecessor, so only the newest query state
    // reaches the network.
    let schedule_fetch = move || {
        pending.update_value(|slot| {
            if let Some(timer) = slot.take() {
                timer.cancel();
            }
        });
        pending.set_value(Some(Timeout::new(DEBOUNCE_MS, run_fetch)));
    };

    view! {
        <div class="min-h-screen bg-gray-100">
            <header class="bg-white shadow">
                <div class="max-w-7xl mx-auto px-6 py-4 flex items-center justify-between">
                    <h1 class="text-xl font-bold text-gray-900">"Database Product Dashboard"</h1>
                    <div class="flex items-center gap-4">
                        <span class="text-sm text-gray-500">
                            {move || ctx.session.get().map(|s| s.email).unwrap_or_default()}
                        </span>
                        <button
                            class="px-3 py-1.5 text-sm bg-gray-200 text-gray-700 rounded hover:bg-gray-300"
                            on:click=move |_| ctx.logout()
                        >
                            "Sign Out"
                        </button>
                    </div>
                </div>
            </header>

            <main class="max-w-7xl mx-auto p-6 space-y-6">
                // Filters
                <div class="bg-white rounded-lg shadow p-4">
                    <h2 class="text-sm font-semibold text-gray-700 uppercase tracking-wide mb-3">
                        "Filters"
                    </h2>
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">
                                "Manufacturer"
                            </label>
                            <select
                                class="block w-full px-3 py-2 border border-gray-300 rounded-md bg-white text-sm focus:outline-none focus:ring-2 focus:ring-blue-500"
                                prop:value=move || {
                                    state.with(|s| s.manufacturer.map(|c| c.to_string()).unwrap_or_default())
                                }
                                on:change=move |ev| {
                                    let code = event_target_value(&ev).chars().next();
                                    let fetch = state
                                        .try_update(|s| s.select_manufacturer(code))
                                        .unwrap_or(false);
                                    if fetch {
                                        schedule_fetch();
                                    }
                                }
                            >
                                <option value="">"Select a manufacturer"</option>
                                {MANUFACTURERS
                                    .iter()
                                    .map(|m| view! { <option value=m.code.to_string()>{m.name}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">
                                "Search"
                            </label>
                            <input
                                type="text"
                                class="block w-full px-3 py-2 border border-gray-300 rounded-md text-sm placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:bg-gray-100"
                                placeholder="Search products..."
                                prop:value=move || state.with(|s| s.search.clone())
                                disabled=move || state.with(|s| s.manufacturer.is_none())
                                on:input=move |ev| {
                                    let text = event_target_value(&ev);
                                    let fetch = state
                                        .try_update(|s| s.edit_search(&text))
                                        .unwrap_or(false);
                                    if fetch {
                                        schedule_fetch();
                                    }
                                }
                            />
                        </div>
                    </div>
                </div>

                // Results
                {move || {
                    let snapshot = state.get();
                    let Some(manufacturer) = snapshot.manufacturer.and_then(manufacturer_by_code) else {
                        return view! {
                            <div class="text-center text-gray-500 py-12">
                                "Select a manufacturer to browse products."
                            </div>
                        }
                        .into_any();
                    };

                    let mobile = viewport.get() <= MOBILE_BREAKPOINT;
                    let body = if snapshot.loading {
                        view! { <div class="text-center py-8 text-gray-500">"Loading..."</div> }
                            .into_any()
                    } else if snapshot.rows.is_empty() {
                        view! { <div class="text-center py-8 text-gray-500">"No products found."</div> }
                            .into_any()
                    } else if mobile {
                        card_list(manufacturer, &snapshot, state).into_any()
                    } else {
                        results_table(manufacturer, &snapshot, state).into_any()
                    };

                    let footer = (!snapshot.loading && !snapshot.rows.is_empty())
                        .then(|| pagination(&snapshot, state, schedule_fetch));

                    view! {
                        <div class="bg-white rounded-lg shadow">
                            <div class="px-4 py-3 border-b border-gray-200">
                                <h2 class="text-lg font-semibold text-gray-800">
                                    {manufacturer.card_title()}
                                </h2>
                            </div>
                            <div class="p-4">{body}</div>
                            {footer}
                        </div>
                    }
                    .into_any()
                }}
            </main>
        </div>
    }
}

fn row_json(row: &Record) -> String {
    serde_json::to_string_pretty(row).unwrap_or_default()
}

/// Full-width table: every catalog column plus the expand affordance; an
/// expanded row shows the raw record across the full row below it.
fn results_table(
    manufacturer: &'static Manufacturer,
    snapshot: &DashboardState,
    state: RwSignal<DashboardState>,
) -> impl IntoView {
    let columns = manufacturer.columns;
    let span = (columns.len() + 1).to_string();

    let rows = snapshot
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let expanded = snapshot.is_expanded(i);
            let raw = expanded.then(|| row_json(row));
            let span = span.clone();
            let cells = columns
                .iter()
                .map(|col| {
                    view! {
                        <td class="px-3 py-2 whitespace-nowrap text-gray-700">
                            {format_cell(col.key, row.get(col.key))}
                        </td>
                    }
                })
                .collect::<Vec<_>>();

            view! {
                <tr class="hover:bg-gray-50">
                    {cells}
                    <td class="px-3 py-2">
                        <button
                            class="text-blue-600 hover:text-blue-800 font-medium"
                            on:click=move |_| state.update(|s| s.toggle_row(i))
                        >
                            {if expanded { "Hide" } else { "Expand" }}
                        </button>
                    </td>
                </tr>
                {raw.map(|raw| view! {
                    <tr>
                        <td colspan=span class="bg-gray-50 px-3 py-2">
                            <pre class="text-xs text-gray-600 overflow-x-auto whitespace-pre-wrap">
                                {raw}
                            </pre>
                        </td>
                    </tr>
                })}
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200 text-sm">
                <thead>
                    <tr>
                        {columns
                            .iter()
                            .map(|col| view! {
                                <th class="px-3 py-2 text-left text-xs font-semibold text-gray-500 uppercase tracking-wide">
                                    {col.label}
                                </th>
                            })
                            .collect::<Vec<_>>()}
                        <th class="px-3 py-2 text-left text-xs font-semibold text-gray-500 uppercase tracking-wide">
                            "Actions"
                        </th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-100">{rows}</tbody>
            </table>
        </div>
    }
}

/// Narrow-viewport rendering: a card per row with the first three columns
/// always visible, the rest plus the raw record behind the expand toggle.
fn card_list(
    manufacturer: &'static Manufacturer,
    snapshot: &DashboardState,
    state: RwSignal<DashboardState>,
) -> impl IntoView {
    let split = manufacturer.columns.len().min(CARD_VISIBLE_COLUMNS);
    let (visible, hidden) = manufacturer.columns.split_at(split);

    let cards = snapshot
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let expanded = snapshot.is_expanded(i);
            let field = |col: &crate::types::Column| {
                view! {
                    <div class="flex justify-between gap-2 text-sm">
                        <span class="text-gray-500">{col.label}</span>
                        <span class="font-medium text-gray-800 text-right">
                            {format_cell(col.key, row.get(col.key))}
                        </span>
                    </div>
                }
            };
            let visible_fields = visible.iter().map(field).collect::<Vec<_>>();
            let detail = expanded.then(|| {
                let hidden_fields = hidden.iter().map(field).collect::<Vec<_>>();
                view! {
                    <div class="mt-2 pt-2 border-t border-gray-100 space-y-1">
                        {hidden_fields}
                        <pre class="mt-2 text-xs text-gray-600 bg-gray-50 rounded p-2 overflow-x-auto whitespace-pre-wrap">
                            {row_json(row)}
                        </pre>
                    </div>
                }
            });

            view! {
                <div class="border border-gray-200 rounded-lg p-3">
                    <div class="space-y-1">{visible_fields}</div>
                    {detail}
                    <button
                        class="mt-2 text-sm text-blue-600 hover:text-blue-800 font-medium"
                        on:click=move |_| state.update(|s| s.toggle_row(i))
                    >
                        {if expanded { "Show less" } else { "Show more" }}
                    </button>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="space-y-3">{cards}</div> }
}

fn pagination(
    snapshot: &DashboardState,
    state: RwSignal<DashboardState>,
    schedule_fetch: impl Fn() + Copy + 'static,
) -> impl IntoView {
    let page = snapshot.page;
    let pages = snapshot.total_pages();

    view! {
        <div class="flex items-center justify-between px-4 py-3 border-t border-gray-200">
            <button
                class="px-4 py-2 border border-gray-300 rounded-md text-sm font-medium text-gray-700 bg-white hover:bg-gray-50 disabled:opacity-50 disabled:cursor-not-allowed"
                disabled={page <= 1}
                on:click=move |_| {
                    if state.try_update(|s| s.prev_page()).unwrap_or(false) {
                        schedule_fetch();
                    }
                }
            >
                "Previous"
            </button>
            <span class="text-sm text-gray-600">{format!("Page {page} of {pages}")}</span>
            <button
                class="px-4 py-2 border border-gray-300 rounded-md text-sm font-medium text-gray-700 bg-white hover:bg-gray-50 disabled:opacity-50 disabled:cursor-not-allowed"
                disabled={page >= pages}
                on:click=move |_| {
                    if state.try_update(|s| s.next_page()).unwrap_or(false) {
                        schedule_fetch();
                    }
                }
            >
                "Next"
            </button>
        </div>
    }
}
