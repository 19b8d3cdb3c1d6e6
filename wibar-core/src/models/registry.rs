use super::BarId;

/// Every live bar in the order it was placed. Among bars sharing a screen
/// edge, later entries stack outward from earlier ones.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<BarId>,
}

impl Registry {
    pub fn add(&mut self, bar: BarId) {
        self.entries.push(bar);
    }

    /// Gives `bar` a fresh stacking slot behind every other bar.
    pub fn move_to_end(&mut self, bar: BarId) {
        self.remove(bar);
        self.entries.push(bar);
    }

    /// Returns how many entries were dropped. Anything other than 0 or 1
    /// means the registry had been corrupted.
    pub fn remove(&mut self, bar: BarId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|b| *b != bar);
        let removed = before - self.entries.len();
        if removed > 1 {
            tracing::warn!("{} was registered {} times", bar, removed);
        }
        removed
    }

    #[must_use]
    pub fn contains(&self, bar: BarId) -> bool {
        self.entries.contains(&bar)
    }

    pub fn iter(&self) -> impl Iterator<Item = BarId> + '_ {
        self.entries.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn add_duplicate(&mut self, bar: BarId) {
        self.entries.push(bar);
    }
}
