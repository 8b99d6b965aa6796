//! Tab button / pane pairing.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSelection {
    pub buttons: Vec<bool>,
    pub panes: Vec<bool>,
}

/// Resolve a click on button `clicked`.
///
/// `targets` are the buttons' `data-tab` values and `panes` the panes'
/// `data-tab-pane` values, both in document order. Returns `None` when the
/// button has no target or no pane carries it, in which case nothing changes.
/// Only the clicked button and the first matching pane end up active.
pub fn select(targets: &[Option<String>], panes: &[String], clicked: usize) -> Option<TabSelection> {
    let target = targets.get(clicked)?.as_deref().filter(|t| !t.is_empty())?;
    let pane = panes.iter().position(|p| p == target)?;
    Some(TabSelection {
        buttons: (0..targets.len()).map(|i| i == clicked).collect(),
        panes: (0..panes.len()).map(|i| i == pane).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(ids: &[&str]) -> Vec<Option<String>> {
        ids.iter().map(|id| Some((*id).to_owned())).collect()
    }

    fn panes(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| (*id).to_owned()).collect()
    }

    #[test]
    fn clicked_button_and_its_pane_are_the_only_active() {
        let sel = select(
            &targets(&["design", "build", "launch"]),
            &panes(&["design", "build", "launch"]),
            1,
        )
        .unwrap();
        assert_eq!(sel.buttons, vec![false, true, false]);
        assert_eq!(sel.panes, vec![false, true, false]);
    }

    #[test]
    fn pane_order_need_not_match_buttons() {
        let sel = select(&targets(&["a", "b"]), &panes(&["b", "a"]), 0).unwrap();
        assert_eq!(sel.panes, vec![false, true]);
    }

    #[test]
    fn missing_pane_is_a_no_op() {
        assert!(select(&targets(&["a", "ghost"]), &panes(&["a"]), 1).is_none());
        assert!(select(&[None], &panes(&["a"]), 0).is_none());
        assert!(select(&targets(&[""]), &panes(&[""]), 0).is_none());
    }

    #[test]
    fn duplicate_targets_still_activate_one_button() {
        let sel = select(&targets(&["a", "a"]), &panes(&["a", "a"]), 1).unwrap();
        assert_eq!(sel.buttons.iter().filter(|b| **b).count(), 1);
        assert_eq!(sel.panes.iter().filter(|p| **p).count(), 1);
    }
}
