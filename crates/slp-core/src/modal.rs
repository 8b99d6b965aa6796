//! Modal dialog registry.
//!
//! Dialogs are addressed by document position. Triggers open a dialog by id,
//! a dialog's own close controls close only that dialog, and Escape closes
//! them all.

pub const DISMISS_KEY: &str = "Escape";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalSet {
    ids: Vec<Option<String>>,
    open: Vec<bool>,
}

impl ModalSet {
    /// `ids` are the dialogs' `id` attributes in document order.
    pub fn new(ids: Vec<Option<String>>) -> Self {
        let open = vec![false; ids.len()];
        Self { ids, open }
    }

    /// Open the dialog carrying `id`. Returns its index, or `None` when no
    /// dialog matches.
    pub fn open(&mut self, id: &str) -> Option<usize> {
        let index = self.ids.iter().position(|d| d.as_deref() == Some(id))?;
        self.open[index] = true;
        Some(index)
    }

    pub fn close(&mut self, index: usize) {
        if let Some(flag) = self.open.get_mut(index) {
            *flag = false;
        }
    }

    /// Handle a key release. Escape closes every dialog, open or not.
    pub fn key_up(&mut self, key: &str) -> bool {
        if key != DISMISS_KEY {
            return false;
        }
        self.open.iter_mut().for_each(|flag| *flag = false);
        true
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modals() -> ModalSet {
        ModalSet::new(vec![
            Some("signup".to_owned()),
            None,
            Some("video".to_owned()),
        ])
    }

    #[test]
    fn trigger_then_escape() {
        let mut set = modals();
        assert_eq!(set.open("signup"), Some(0));
        assert!(set.is_open(0));
        assert!(!set.is_open(2));
        assert!(set.key_up("Escape"));
        assert!(!set.is_open(0));
    }

    #[test]
    fn close_control_only_affects_its_own_dialog() {
        let mut set = modals();
        set.open("signup");
        set.open("video");
        set.close(2);
        assert!(set.is_open(0));
        assert!(!set.is_open(2));
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut set = modals();
        assert_eq!(set.open("login"), None);
        assert!((0..3).all(|i| !set.is_open(i)));
    }

    #[test]
    fn other_keys_do_nothing() {
        let mut set = modals();
        set.open("video");
        assert!(!set.key_up("Enter"));
        assert!(set.is_open(2));
    }

    #[test]
    fn escape_with_nothing_open_is_harmless() {
        let mut set = modals();
        assert!(set.key_up("Escape"));
        assert!((0..3).all(|i| !set.is_open(i)));
    }
}
