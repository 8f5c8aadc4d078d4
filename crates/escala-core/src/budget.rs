//! Trip spending ledger: planned paid entries plus custom expenses.

use crate::domain::{Cents, CustomExpense, ItineraryEntry};

/// Breakdown row colours, cycled by position
pub const BREAKDOWN_COLORS: [&str; 4] = ["#1e3a8a", "#be123c", "#d97706", "#64748b"];

/// One row of the spending breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub id: String,
    pub title: String,
    /// Kind or expense category label
    pub tag: &'static str,
    pub amount: Cents,
    pub color: &'static str,
    pub custom: bool,
}

/// Read-only view over the day's spending
pub struct Ledger<'a> {
    entries: &'a [ItineraryEntry],
    expenses: &'a [CustomExpense],
}

impl<'a> Ledger<'a> {
    pub fn new(entries: &'a [ItineraryEntry], expenses: &'a [CustomExpense]) -> Self {
        Self { entries, expenses }
    }

    /// Entries with a positive price
    pub fn paid_entries(&self) -> impl Iterator<Item = &'a ItineraryEntry> {
        self.entries.iter().filter(|e| e.price.is_positive())
    }

    pub fn planned_total(&self) -> Cents {
        self.paid_entries().map(|e| e.price).sum()
    }

    pub fn custom_total(&self) -> Cents {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    pub fn total(&self) -> Cents {
        self.planned_total() + self.custom_total()
    }

    /// Paid entries first, then custom expenses in insertion order
    pub fn breakdown(&self) -> Vec<BreakdownRow> {
        let planned = self.paid_entries().map(|e| (e.id.clone(), e.title.clone(), e.kind.label(), e.price, false));
        let custom = self.expenses.iter().map(|e| (e.id.clone(), e.title.clone(), e.category.label(), e.amount, true));
        planned
            .chain(custom)
            .enumerate()
            .map(|(i, (id, title, tag, amount, custom))| BreakdownRow {
                id,
                title,
                tag,
                amount,
                color: BREAKDOWN_COLORS[i % BREAKDOWN_COLORS.len()],
                custom,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::barcelona_itinerary;
    use crate::domain::ExpenseCategory;

    fn expense(id: &str, cents: i64) -> CustomExpense {
        CustomExpense { id: id.into(), title: format!("Gasto {}", id), amount: Cents(cents), category: ExpenseCategory::Food, timestamp: 0 }
    }

    #[test]
    fn test_planned_total_of_catalog() {
        let entries = barcelona_itinerary();
        let ledger = Ledger::new(&entries, &[]);
        // shuttle 4.50 + two metro rides 2.90
        assert_eq!(ledger.total(), Cents(1030));
        assert_eq!(ledger.paid_entries().count(), 3);
    }

    #[test]
    fn test_total_includes_custom_expenses() {
        let entries = barcelona_itinerary();
        let expenses = vec![expense("e1", 320), expense("e2", 1999)];
        let ledger = Ledger::new(&entries, &expenses);
        assert_eq!(ledger.total(), Cents(1030 + 320 + 1999));
    }

    #[test]
    fn test_removing_expense_decreases_total_exactly() {
        let entries = barcelona_itinerary();
        let mut expenses = vec![expense("e1", 10), expense("e2", 20), expense("e3", 33)];
        let before = Ledger::new(&entries, &expenses).total();
        let removed = expenses.remove(1);
        let after = Ledger::new(&entries, &expenses).total();
        assert_eq!(before - after, removed.amount);
    }

    #[test]
    fn test_breakdown_cycles_colors() {
        let entries = barcelona_itinerary();
        let expenses = vec![expense("e1", 100), expense("e2", 200)];
        let rows = Ledger::new(&entries, &expenses).breakdown();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].color, BREAKDOWN_COLORS[0]);
        assert_eq!(rows[4].color, BREAKDOWN_COLORS[0]);
        assert!(rows[3].custom);
        assert_eq!(rows[3].tag, "Comida");
    }
}
