use crate::app::FormSubmission;
use crate::types::ActivityStatus;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone, PartialEq)]
pub(super) enum Action {
    ReloadActivities,
    SaveForm(FormSubmission),
    ToggleStatus { id: String, next: ActivityStatus },
    ConfirmDelete { id: String },
    LoadPersonnel,
    RefreshBackground,
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
