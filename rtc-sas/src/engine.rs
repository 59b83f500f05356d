//! Collaborators consumed by the negotiation core.
//!
//! The core drives, but never implements, the connection-establishment
//! engine: ICE, DTLS and media live behind [`ConnectionEngine`]. Inbound
//! notifications from the engine are fed back as [`EngineEvent`]s through
//! [`Endpoint::handle_engine_event`](crate::endpoint::Endpoint::handle_engine_event).
#![allow(async_fn_in_trait)]

use crate::candidate::RTCIceCandidateInit;
use crate::error::Result;
use crate::sdp::RTCSessionDescription;

/// The connection-establishment engine of one endpoint.
///
/// Errors returned here are wrapped by the negotiation core into the
/// matching `Err*Failed` kind, keeping the engine's message.
pub trait ConnectionEngine {
    /// Local media handed to the engine before negotiation starts.
    type LocalResource;

    async fn create_offer(&mut self) -> Result<RTCSessionDescription>;

    async fn create_answer(&mut self) -> Result<RTCSessionDescription>;

    async fn set_local_description(&mut self, description: &RTCSessionDescription) -> Result<()>;

    async fn set_remote_description(&mut self, description: &RTCSessionDescription)
    -> Result<()>;

    /// Applies a remote candidate. Only called once a remote description has
    /// been set; earlier candidates are held back by the core.
    async fn add_ice_candidate(&mut self, candidate: &RTCIceCandidateInit) -> Result<()>;

    fn add_local_resource(&mut self, resource: Self::LocalResource) -> Result<()>;
}

/// Produces the local media attached to the engine, e.g. a camera capture.
pub trait LocalResourceSource {
    type Resource;

    async fn acquire(&mut self) -> Result<Self::Resource>;
}

/// Notifications raised by the connection engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The remote endpoint's media arrived, identified by the engine.
    RemoteResourceAdded(String),

    /// A local candidate was discovered. `None` means discovery is complete.
    LocalCandidate(Option<RTCIceCandidateInit>),

    /// The engine asks for renegotiation. Logged and surfaced only.
    NegotiationNeeded,
}
