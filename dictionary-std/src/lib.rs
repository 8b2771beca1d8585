//! Standard DICOM dictionaries and constants.
//!
//! - [`data_element`] holds the standard attribute dictionary,
//!   queried through the [`DataDictionary`](dcmkit_core::DataDictionary) trait.
//! - [`private`] holds a run-time dictionary of private attributes,
//!   keyed by their private creator.
//! - [`tags`] maps attribute aliases to their tags at compile time.
//! - [`uids`] declares normative unique identifiers.
pub mod data_element;
pub mod private;
pub mod tags;
pub mod uids;

pub use data_element::{StandardDataDictionary, StandardDataDictionaryRegistry};
pub use private::{register_private, PrivateDataDictionary};
