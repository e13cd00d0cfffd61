use std::collections::HashSet;

use crate::date::CalendarDate;

/// The set of days the user has tapped on.
///
/// Mutating it does not rebuild anything by itself; the owner is expected to
/// rebuild the calendar content after each toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    dates: HashSet<CalendarDate>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes `date` if it is selected, selects it otherwise.
    pub fn toggle(&mut self, date: CalendarDate) {
        if !self.dates.remove(&date) {
            self.dates.insert(date);
        }
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.dates.contains(date)
    }

    pub fn all(&self) -> &HashSet<CalendarDate> {
        &self.dates
    }

    /// Selected days in chronological order.
    pub fn selected_dates(&self) -> Vec<CalendarDate> {
        let mut dates: Vec<CalendarDate> = self.dates.iter().copied().collect();
        dates.sort_unstable();
        dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn clear(&mut self) {
        self.dates.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> CalendarDate {
        CalendarDate::from_ymd(2020, 7, d).unwrap()
    }

    #[test]
    fn test_toggle_inserts_then_removes() {
        let mut selection = SelectionState::new();
        selection.toggle(day(16));
        assert!(selection.contains(&day(16)));

        selection.toggle(day(16));
        assert!(!selection.contains(&day(16)));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut selection = SelectionState::new();
        selection.toggle(day(1));
        selection.toggle(day(20));
        let before = selection.clone();

        selection.toggle(day(9));
        selection.toggle(day(9));
        assert_eq!(selection, before);

        selection.toggle(day(20));
        selection.toggle(day(20));
        assert_eq!(selection, before);
    }

    #[test]
    fn test_toggle_dedupes_by_day() {
        let mut selection = SelectionState::new();
        selection.toggle(day(16));
        selection.toggle("2020-07-16".parse().unwrap());
        assert!(selection.is_empty());
    }

    #[test]
    fn test_selected_dates_sorted() {
        let mut selection = SelectionState::new();
        for d in [30, 2, 17, 9] {
            selection.toggle(day(d));
        }

        assert_eq!(selection.len(), 4);
        assert_eq!(
            selection.selected_dates(),
            vec![day(2), day(9), day(17), day(30)]
        );

        selection.clear();
        assert!(selection.selected_dates().is_empty());
    }
}
