use orderdesk_types::OrderId;

/// Two-step gate in front of delete: arm with a target, then confirm or
/// cancel. Nothing reaches the network until the confirm.
#[derive(Debug, Clone, Default)]
pub struct DeleteConfirmation {
    target: Option<OrderId>,
}

impl DeleteConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the gate with the delete target.
    pub fn request(&mut self, id: OrderId) {
        self.target = Some(id);
    }

    /// Takes the armed target, disarming either way. `None` means the
    /// gate was not armed and the caller should just close the prompt.
    pub fn confirm(&mut self) -> Option<OrderId> {
        self.target.take()
    }

    /// Disarms without touching the target order.
    pub fn cancel(&mut self) {
        self.target = None;
    }

    pub fn target(&self) -> Option<&OrderId> {
        self.target.as_ref()
    }

    pub fn is_armed(&self) -> bool {
        self.target.is_some()
    }
}
