//! Single-open FAQ accordion.

/// Expanded flags for every question, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion {
    expanded: Vec<bool>,
}

/// Answer panel height after a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelHeight {
    /// Natural content height (`scrollHeight`).
    Content,
    Zero,
}

impl Accordion {
    /// Seed from the markup's `aria-expanded` values.
    pub fn new(expanded: Vec<bool>) -> Self {
        Self { expanded }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    pub fn expanded(&self) -> &[bool] {
        &self.expanded
    }

    /// Collapse every other question, then flip the clicked one.
    pub fn click(&mut self, index: usize) {
        if index >= self.expanded.len() {
            return;
        }
        let next = !self.expanded[index];
        for (i, flag) in self.expanded.iter_mut().enumerate() {
            *flag = i == index && next;
        }
    }

    pub fn height(&self, index: usize) -> PanelHeight {
        if self.is_expanded(index) {
            PanelHeight::Content
        } else {
            PanelHeight::Zero
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_count(acc: &Accordion) -> usize {
        acc.expanded().iter().filter(|e| **e).count()
    }

    #[test]
    fn click_opens_then_closes() {
        let mut acc = Accordion::new(vec![false; 3]);
        acc.click(1);
        assert_eq!(acc.expanded(), &[false, true, false]);
        assert_eq!(acc.height(1), PanelHeight::Content);
        acc.click(1);
        assert_eq!(acc.expanded(), &[false, false, false]);
        assert_eq!(acc.height(1), PanelHeight::Zero);
    }

    #[test]
    fn opening_one_closes_the_rest() {
        let mut acc = Accordion::new(vec![true, false, false]);
        acc.click(2);
        assert_eq!(acc.expanded(), &[false, false, true]);
    }

    #[test]
    fn at_most_one_open_after_any_clicks() {
        // Markup may ship with several open; the first click normalises it.
        let mut acc = Accordion::new(vec![true, true, false, true, false]);
        let clicks = [3, 3, 0, 4, 1, 1, 2, 0, 0, 4, 2, 3];
        for index in clicks {
            acc.click(index);
            assert!(open_count(&acc) <= 1);
        }
    }

    #[test]
    fn out_of_range_click_is_ignored() {
        let mut acc = Accordion::new(vec![false, true]);
        acc.click(9);
        assert_eq!(acc.expanded(), &[false, true]);
    }
}
