/// A request to change the form state, raised by one of the form controls.
///
/// Text intents carry the full replacement text of their input, not a delta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileIntent {
    SetName(String),
    SetAge(String),
    IncrementCount,
    DecrementCount,
    ResetCount,
}
