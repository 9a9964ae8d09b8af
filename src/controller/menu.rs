//! Menu actions and the signal a dispatch hands back to the host.

/// The three actions the settings menu exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Toggle the background between light and dark.
    ChangeColor,
    /// Show the about dialog.
    About,
    /// End the session.
    Exit,
}

impl std::fmt::Display for MenuAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuAction::ChangeColor => write!(f, "Change color"),
            MenuAction::About => write!(f, "About"),
            MenuAction::Exit => write!(f, "Exit"),
        }
    }
}

/// What the host should do after a menu dispatch.
///
/// The engine never terminates the process itself; `Exit` tells the host
/// the session is over and it owns the actual shutdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "the host must honor an Exit signal"]
pub enum MenuSignal {
    /// Keep running.
    Continue,
    /// The session ended; shut the host down.
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_action_display() {
        assert_eq!(format!("{}", MenuAction::ChangeColor), "Change color");
        assert_eq!(format!("{}", MenuAction::About), "About");
        assert_eq!(format!("{}", MenuAction::Exit), "Exit");
    }
}
