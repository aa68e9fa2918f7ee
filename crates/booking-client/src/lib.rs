//! # booking-client
//!
//! The backend-facing half of the scheduling surface: fetches weekly grids,
//! gates slot computation on the tutor's session settings, validates and
//! commits bookings, and reconciles the displayed grid after every
//! mutation by re-fetching the whole week.
//!
//! Scheduling math lives in `grid-engine`; this crate only decides *when*
//! to run it and what to do with the backend's answers.
//!
//! ## Modules
//!
//! - [`api`] — the backend's JSON wire contract
//! - [`transport`] — the injected request-issuing collaborator
//! - [`http`] — reqwest implementation of the transport
//! - [`mediator`] — grid ownership, staleness checks, booking flow
//! - [`error`] — error types

pub mod api;
pub mod error;
pub mod http;
pub mod mediator;
pub mod transport;

pub use api::{BookingOutcome, BookingRequest, CommitReply, CommitStatus};
pub use error::ClientError;
pub use http::ReqwestScheduleTransport;
pub use mediator::BookingMediator;
pub use transport::ScheduleTransport;
