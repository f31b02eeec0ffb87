//! The profile form model: the state record, numeric coercion for the age
//! input, and the pure reducer that applies form intents.

pub mod age;
pub mod intent;
pub mod reducer;
pub mod state;

pub use age::Age;
pub use intent::ProfileIntent;
pub use reducer::reduce;
pub use state::ProfileState;
