//! State - Sales Screen State Modules
//!
//! Each module holds one distinct piece of screen state. None of them talk to
//! the service layer; the controller drives them.

pub mod data_state;
pub mod filter_state;
pub mod number_input;
pub mod page_state;
pub mod part_catalog;

pub use data_state::DataState;
pub use filter_state::{CollectionSelection, FilterState};
pub use number_input::NumberInput;
pub use page_state::{PageLink, PageState};
pub use part_catalog::{PartCatalog, PartSelection};
