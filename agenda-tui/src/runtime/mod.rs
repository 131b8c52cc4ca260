mod action_queue;
mod actions;
mod event_loop;
mod views;

pub(crate) use actions::{load_activities, load_personnel};
pub use event_loop::run_app;
