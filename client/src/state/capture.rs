#[cfg(test)]
#[path = "capture_test.rs"]
mod capture_test;

/// Plan interest recorded when a trigger supplies no label.
pub const DEFAULT_PLAN_INTEREST: &str = "General";

/// Page-level state of the capture modal: whether it is shown, and which
/// call-to-action most recently asked for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureModal {
    pub visible: bool,
    pub plan_interest: String,
}

impl Default for CaptureModal {
    fn default() -> Self {
        Self { visible: false, plan_interest: DEFAULT_PLAN_INTEREST.to_owned() }
    }
}

impl CaptureModal {
    /// Show the form for `label`. A missing or empty label means "General".
    pub fn open(&mut self, label: Option<&str>) {
        self.plan_interest = match label {
            Some(l) if !l.is_empty() => l.to_owned(),
            _ => DEFAULT_PLAN_INTEREST.to_owned(),
        };
        self.visible = true;
    }

    /// Hide the form. Closing a closed form is a no-op.
    pub fn close(&mut self) {
        self.visible = false;
    }
}
