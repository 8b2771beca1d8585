//! This crate contains the types and methods needed to interact
//! with DICOM nodes through the upper layer protocol.
//!
//! - The [`pdu`] module
//!   provides data structures representing _protocol data units_,
//!   together with their reader and writer.
//! - The [`dimse`] module
//!   holds DIMSE messages,
//!   and splits them into P-DATA fragments and back.
//! - The [`association`] module
//!   comprises abstractions for establishing and negotiating associations
//!   between application entities,
//!   via the upper layer protocol by TCP.
//!
//! ## Example
//!
//! Verifying that a remote node is alive with C-ECHO:
//!
//! ```no_run
//! # use dcmkit_ul::{ClientAssociationOptions, DimseMessage};
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let association = ClientAssociationOptions::new()
//!     .with_abstract_syntax("1.2.840.10008.1.1")
//!     .establish("127.0.0.1:11112", ())?;
//! let handle = association.handle();
//! let message_id = handle.next_message_id();
//! let response = handle.request(DimseMessage::c_echo_rq(message_id))?.wait()?;
//! assert!(response.status().map(|s| s.is_success()).unwrap_or(false));
//! association.release();
//! # Ok(())
//! # }
//! ```

pub mod association;
pub mod dimse;
pub mod pdu;

pub use dcmkit_object::{IMPLEMENTATION_CLASS_UID, IMPLEMENTATION_VERSION_NAME};

// re-exports

pub use association::client::ClientAssociationOptions;
pub use association::listener::Listener;
pub use association::server::ServerAssociationOptions;
pub use association::{
    Association, AssociationEvent, AssociationHandle, AssociationHandler, AssociationState,
    FnHandler, RequestError, ResponseWaiter,
};
pub use dimse::{DimseMessage, DimseStatus};
pub use pdu::read_pdu;
pub use pdu::write_pdu;
pub use pdu::Pdu;
