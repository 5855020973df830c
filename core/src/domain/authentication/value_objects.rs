use uuid::Uuid;

/// The authenticated caller, as resolved by the transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    user_id: Uuid,
}

impl Identity {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }

    pub fn id(&self) -> Uuid {
        self.user_id
    }
}
