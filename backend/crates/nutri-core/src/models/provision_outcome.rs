/// Result of an atomic insert-if-absent on the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// A new identity row was written
    Created,
    /// The identity already existed; nothing changed
    AlreadyPresent,
    /// The id belongs to a deleted identity and was not recreated
    PermanentlyDeleted,
}

impl ProvisionOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::AlreadyPresent => "already_present",
            Self::PermanentlyDeleted => "permanently_deleted",
        }
    }
}

impl std::fmt::Display for ProvisionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
