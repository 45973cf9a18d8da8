/// What a cascading delete removed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletionReport {
    pub identity_deleted: bool,
    pub food_logs: u64,
    pub chat_messages: u64,
    pub preferences: u64,
}

impl DeletionReport {
    /// Report for an id that had no identity row
    pub fn nothing_deleted() -> Self {
        Self::default()
    }

    pub fn dependent_rows(&self) -> u64 {
        self.food_logs + self.chat_messages + self.preferences
    }
}
