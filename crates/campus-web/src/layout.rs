/// UI-only layout state of the dashboard shell
///
/// Neither flag is persisted; a reload starts expanded with the drawer closed.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShellState {
    pub sidebar_collapsed: bool,
    pub mobile_drawer_open: bool,
}

impl ShellState {
    pub fn toggle_collapse(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn toggle_mobile(&mut self) {
        self.mobile_drawer_open = !self.mobile_drawer_open;
    }

    /// Close the mobile drawer. Idempotent.
    pub fn close_mobile(&mut self) {
        self.mobile_drawer_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_expanded_and_closed() {
        let state = ShellState::default();
        assert!(!state.sidebar_collapsed);
        assert!(!state.mobile_drawer_open);
    }

    #[test]
    fn toggle_collapse_touches_only_collapse() {
        let mut state = ShellState {
            sidebar_collapsed: false,
            mobile_drawer_open: true,
        };

        state.toggle_collapse();
        assert_eq!(
            state,
            ShellState {
                sidebar_collapsed: true,
                mobile_drawer_open: true,
            }
        );

        state.toggle_collapse();
        assert_eq!(
            state,
            ShellState {
                sidebar_collapsed: false,
                mobile_drawer_open: true,
            }
        );
    }

    #[test]
    fn toggle_mobile_flips_drawer() {
        let mut state = ShellState::default();

        state.toggle_mobile();
        assert!(state.mobile_drawer_open);
        state.toggle_mobile();
        assert!(!state.mobile_drawer_open);
        assert!(!state.sidebar_collapsed);
    }

    #[test]
    fn close_mobile_is_idempotent() {
        for collapsed in [false, true] {
            for open in [false, true] {
                let mut state = ShellState {
                    sidebar_collapsed: collapsed,
                    mobile_drawer_open: open,
                };

                state.close_mobile();
                assert!(!state.mobile_drawer_open);
                assert_eq!(state.sidebar_collapsed, collapsed);

                state.close_mobile();
                assert!(!state.mobile_drawer_open);
            }
        }
    }
}
