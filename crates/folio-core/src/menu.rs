//! Dropdown menus: at most one open at a time

/// Which dropdown (if any) is open
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dropdown {
    open: Option<String>,
}

impl Dropdown {
    pub fn is_open(&self, id: &str) -> bool {
        self.open.as_deref() == Some(id)
    }

    pub fn open_menu(&self) -> Option<&str> {
        self.open.as_deref()
    }

    /// Close `id` if it is open, otherwise open it and close any other
    pub fn toggle(&mut self, id: &str) {
        if self.is_open(id) {
            self.open = None;
        } else {
            self.open = Some(id.to_string());
        }
    }

    /// Outside click or Escape
    pub fn close_all(&mut self) {
        self.open = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_same_menu() {
        let mut menus = Dropdown::default();
        menus.toggle("user");
        assert!(menus.is_open("user"));
        menus.toggle("user");
        assert!(!menus.is_open("user"));
        assert_eq!(menus.open_menu(), None);
    }

    #[test]
    fn test_opening_another_closes_first() {
        let mut menus = Dropdown::default();
        menus.toggle("user");
        menus.toggle("create");
        assert!(menus.is_open("create"));
        assert!(!menus.is_open("user"));

        menus.close_all();
        assert_eq!(menus.open_menu(), None);
    }
}
