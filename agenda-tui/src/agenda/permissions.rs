use crate::types::{Activity, ActivityStatus, User};

use super::AgendaError;

fn ensure_owner_or_supervisor(activity: &Activity, actor: &User) -> Result<(), AgendaError> {
    if actor.is_supervisor() || activity.user_id == actor.id {
        Ok(())
    } else {
        Err(AgendaError::NotOwner)
    }
}

fn ensure_unlocked_for(activity: &Activity, actor: &User) -> Result<(), AgendaError> {
    if activity.is_submitted() && !actor.is_supervisor() {
        Err(AgendaError::Locked)
    } else {
        Ok(())
    }
}

/// Returns the status the activity moves to when `actor` toggles it.
///
/// Draft → Submitted is open to the owner and supervisors. Submitted → Draft
/// needs a supervisor.
pub fn authorize_toggle(activity: &Activity, actor: &User) -> Result<ActivityStatus, AgendaError> {
    ensure_owner_or_supervisor(activity, actor)?;
    ensure_unlocked_for(activity, actor)?;
    Ok(activity.status.toggled())
}

pub fn authorize_edit(activity: &Activity, actor: &User) -> Result<(), AgendaError> {
    ensure_owner_or_supervisor(activity, actor)?;
    ensure_unlocked_for(activity, actor)
}

pub fn authorize_delete(activity: &Activity, actor: &User) -> Result<(), AgendaError> {
    ensure_owner_or_supervisor(activity, actor)?;
    ensure_unlocked_for(activity, actor)
}
