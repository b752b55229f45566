/// Open/closed state for the FAQ entries. Every entry toggles independently;
/// there is no accordion-style exclusivity. `deck.js` performs the same class
/// toggle on the rendered entries.
#[derive(Debug, Clone)]
pub struct FaqToggles {
    open: Vec<bool>,
}

impl FaqToggles {
    /// All entries start closed.
    pub fn new(count: usize) -> Self {
        Self {
            open: vec![false; count],
        }
    }

    /// Flips entry `index` and returns its new state. Out-of-range indexes
    /// are ignored and report closed.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.open.get_mut(index) {
            Some(state) => {
                *state = !*state;
                *state
            }
            None => false,
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_toggle_independently() {
        let mut toggles = FaqToggles::new(3);
        toggles.toggle(0);
        toggles.toggle(1);
        assert!(toggles.is_open(0));
        assert!(toggles.is_open(1));
        assert!(!toggles.is_open(2));

        toggles.toggle(0);
        assert!(!toggles.is_open(0));
        assert!(toggles.is_open(1));
    }

    #[test]
    fn test_all_closed_initially() {
        let toggles = FaqToggles::new(4);
        assert!((0..4).all(|i| !toggles.is_open(i)));
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut toggles = FaqToggles::new(1);
        assert!(!toggles.toggle(5));
        assert!(!toggles.is_open(5));
    }
}
