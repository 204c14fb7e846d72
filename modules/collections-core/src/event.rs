mod change_action;
mod change_event;
#[cfg(test)]
mod tests;

pub use change_action::ChangeAction;
pub use change_event::ChangeEvent;
