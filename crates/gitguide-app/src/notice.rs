//! Dismissible compatibility notice

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompatibilityNotice {
    pub issues: Vec<String>,
    pub dismissed: bool,
}

impl CompatibilityNotice {
    pub fn new(issues: Vec<String>, dismissed: bool) -> Self {
        Self { issues, dismissed }
    }

    pub fn visible(&self) -> bool {
        !self.dismissed && !self.issues.is_empty()
    }

    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }
}
