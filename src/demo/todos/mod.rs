mod intent;
mod reducer;
mod state;

pub use intent::TodoIntent;
pub use reducer::TodoReducer;
pub use state::{Todo, TodoState, VisibilityFilter};
