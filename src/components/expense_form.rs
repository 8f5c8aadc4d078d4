//! Expense Form Component
//!
//! Title, amount (comma or dot decimals) and category of an unplanned
//! expense.

use chrono::Utc;
use escala_core::domain::{ExpenseCategory, ExpenseDraft};
use escala_core::Action;
use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ExpenseForm() -> impl IntoView {
    let ctx = use_app_context();
    let (title, set_title) = signal(String::new());
    let (amount, set_amount) = signal(String::new());
    let (category, set_category) = signal(ExpenseCategory::default());
    let (error, set_error) = signal::<Option<&'static str>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ExpenseDraft {
            title: title.get_untracked(),
            amount: amount.get_untracked(),
            category: category.get_untracked(),
        };
        match ctx.try_dispatch(Action::AddExpense { draft, now_ms: Utc::now().timestamp_millis() }) {
            Ok(()) => {
                set_title.set(String::new());
                set_amount.set(String::new());
                set_error.set(None);
            }
            Err(_) => set_error.set(Some("Revisa el concepto y el importe")),
        }
    };

    view! {
        <form class="expense-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Concepto"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <input
                type="text"
                inputmode="decimal"
                placeholder="Importe (€)"
                prop:value=move || amount.get()
                on:input=move |ev| set_amount.set(event_target_value(&ev))
            />
            <select
                prop:value=move || category.get().as_str()
                on:change=move |ev| set_category.set(ExpenseCategory::from_str(&event_target_value(&ev)))
            >
                {ExpenseCategory::ALL
                    .into_iter()
                    .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                    .collect_view()}
            </select>
            <button type="submit">"Añadir"</button>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
        </form>
    }
}
