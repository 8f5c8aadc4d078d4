//! Budget Panel Component
//!
//! Total spend, the per-item breakdown and the custom expense form.

use escala_core::budget::{BreakdownRow, Ledger};
use escala_core::domain::Cents;
use escala_core::Action;
use leptos::prelude::*;

use super::{ExpenseForm, RemoveRecordButton};
use crate::context::use_app_context;
use crate::models::SavedRecord;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BudgetPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let totals = Memo::new(move |_| {
        let trip = store.trip().read();
        let ledger = Ledger::new(&trip.itinerary, &trip.expenses);
        (ledger.total(), ledger.planned_total(), ledger.custom_total())
    });
    let rows = Memo::new(move |_| {
        let trip = store.trip().read();
        Ledger::new(&trip.itinerary, &trip.expenses).breakdown()
    });
    let share = move |amount: Cents| {
        let total = totals.get().0;
        if total.is_positive() { (amount.0 as f64 / total.0 as f64 * 100.0).round() } else { 0.0 }
    };

    view! {
        <section class="budget-panel">
            <div class="budget-total-card">
                <span class="budget-total-label">"Total del día"</span>
                <span class="budget-total-value">{move || totals.get().0.to_string()}</span>
                <span class="budget-total-split">
                    {move || {
                        let (_, planned, custom) = totals.get();
                        format!("Previsto {} · Extra {}", planned, custom)
                    }}
                </span>
            </div>

            <div class="budget-bar">
                <For
                    each=move || rows.get()
                    key=|row| row.id.clone()
                    children=move |row: BreakdownRow| {
                        let amount = row.amount;
                        let style = move || format!("width: {}%; background: {}", share(amount), row.color);
                        view! { <span class="budget-bar-segment" style=style></span> }
                    }
                />
            </div>

            <h3 class="panel-subtitle">"Desglose"</h3>
            <ul class="budget-rows">
                <For
                    each=move || rows.get()
                    key=|row| (row.id.clone(), row.color)
                    children=move |row: BreakdownRow| {
                        let id = row.id.clone();
                        view! {
                            <li class="budget-row">
                                <span class="budget-dot" style=format!("background: {}", row.color)></span>
                                <span class="budget-row-title">{row.title.clone()}</span>
                                <span class="budget-row-tag">{row.tag}</span>
                                <span class="budget-row-amount">{row.amount.to_string()}</span>
                                {row.custom.then(|| view! {
                                    <RemoveRecordButton
                                        kind=SavedRecord::Expense
                                        label=row.title.clone()
                                        on_remove=Callback::new(move |_| ctx.dispatch(Action::RemoveExpense(id.clone())))
                                    />
                                })}
                            </li>
                        }
                    }
                />
            </ul>

            <h3 class="panel-subtitle">"Añadir gasto"</h3>
            <ExpenseForm />
        </section>
    }
}
