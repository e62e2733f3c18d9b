pub mod allocation;
pub mod sale_state;

pub use allocation::*;
pub use sale_state::*;
