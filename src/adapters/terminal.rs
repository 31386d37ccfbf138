use crate::domain::model::{FormControl, StatusBanner, StatusKind, MESSAGE_FIELD};
use crate::domain::ports::Page;

/// A page whose form is filled from the command line and whose status
/// banner is printed to the terminal.
#[derive(Debug, Clone, Default)]
pub struct TerminalPage {
    controls: Vec<FormControl>,
    busy: bool,
}

impl TerminalPage {
    pub fn new(controls: Vec<FormControl>) -> Self {
        Self {
            controls,
            ..Default::default()
        }
    }
}

impl Page for TerminalPage {
    fn controls(&self) -> Vec<FormControl> {
        self.controls.clone()
    }

    fn set_busy(&mut self, busy: bool) {
        if busy && !self.busy {
            println!("⏳ A enviar...");
        }
        self.busy = busy;
    }

    fn clear_message(&mut self) {
        for control in &mut self.controls {
            if control.name.as_deref() == Some(MESSAGE_FIELD) {
                control.value.clear();
            }
        }
    }

    fn show_status(&mut self, banner: &StatusBanner) {
        let icon = match banner.kind {
            StatusKind::Success => "✅",
            StatusKind::Error => "❌",
            _ => "ℹ️",
        };
        if banner.kind == StatusKind::Error {
            eprintln!("{} {} {}", icon, banner.sr_label, banner.text);
        } else {
            println!("{} {} {}", icon, banner.sr_label, banner.text);
        }
    }

    // 已印出的訊息無法收回
    fn hide_status(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_message_only_touches_msg() {
        let mut page = TerminalPage::new(vec![
            FormControl::named("username", "961234567"),
            FormControl::named("msg", "olá"),
        ]);

        page.clear_message();

        let controls = page.controls();
        assert_eq!(controls[0].value, "961234567");
        assert_eq!(controls[1].value, "");
    }

    #[test]
    fn test_busy_toggle() {
        let mut page = TerminalPage::default();
        page.set_busy(true);
        assert!(page.busy);
        page.set_busy(false);
        assert!(!page.busy);
    }
}
