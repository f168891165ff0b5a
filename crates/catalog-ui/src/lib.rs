pub mod dispatch;
pub mod input;
pub mod keys;
pub mod surface;
pub mod view;

pub use dispatch::{CatalogController, CatalogState, Effect, ModalState};
pub use input::{CardHit, CatalogEvent};
