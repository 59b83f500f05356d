//! Application-facing endpoint.
//!
//! An [`Endpoint`] owns one connection engine, one outbound signal handler and
//! the negotiation state of a single connection attempt. It is sans-I/O in the
//! same sense as the engine it wraps: the application moves signal text in and
//! out, forwards engine notifications with [`Endpoint::handle_engine_event`]
//! and drains [`RTCEndpointEvent`]s with [`Endpoint::poll_event`].
//!
//! ```no_run
//! use rtc_sas::configuration::RTCConfiguration;
//! use rtc_sas::endpoint::Endpoint;
//! use rtc_sas::engine::{ConnectionEngine, LocalResourceSource};
//! use rtc_sas::event::RTCEndpointEvent;
//!
//! # async fn run<E, S>(engine: E, mut camera: S) -> rtc_sas::error::Result<()>
//! # where
//! #     E: ConnectionEngine,
//! #     S: LocalResourceSource<Resource = E::LocalResource>,
//! # {
//! let mut alice = Endpoint::new(
//!     "alice",
//!     engine,
//!     |text: String| println!("to bob: {text}"),
//!     RTCConfiguration::default(),
//! );
//! alice.start_local_resources(&mut camera).await?;
//! alice.offer().await?;
//!
//! while let Some(event) = alice.poll_event() {
//!     if let RTCEndpointEvent::OnSasAvailable(sas) = event {
//!         println!("read this to bob: {sas}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use crate::candidate::RTCIceCandidateInit;
use crate::configuration::RTCConfiguration;
use crate::engine::{ConnectionEngine, EngineEvent, LocalResourceSource};
use crate::error::{Error, Result};
use crate::event::RTCEndpointEvent;
use crate::fingerprint::Fingerprint;
use crate::negotiation::NegotiationEngine;
use crate::negotiation::state::RTCNegotiationState;
use crate::sas::RTCShortAuthenticationString;
use crate::sdp::RTCSessionDescription;
use crate::signal::SignalSink;

pub struct Endpoint<E: ConnectionEngine> {
    negotiation: NegotiationEngine<E>,
    configuration: RTCConfiguration,
    local_resources_ready: bool,
}

impl<E: ConnectionEngine> Endpoint<E> {
    /// Creates an endpoint. Every outbound signal is handed to `signal_sink`.
    pub fn new(
        id: impl Into<String>,
        engine: E,
        signal_sink: impl SignalSink + Send + 'static,
        configuration: RTCConfiguration,
    ) -> Self {
        let negotiation = NegotiationEngine::new(id, engine, signal_sink, &configuration);
        Self {
            negotiation,
            configuration,
            local_resources_ready: false,
        }
    }

    pub fn id(&self) -> &str {
        self.negotiation.id()
    }

    pub fn configuration(&self) -> &RTCConfiguration {
        &self.configuration
    }

    /// Acquires local media from `source` and attaches it to the engine.
    ///
    /// Must complete before [`Endpoint::offer`] or [`Endpoint::answer`]. Any
    /// failure is reported as [`Error::ErrNoLocalResourceAvailable`].
    pub async fn start_local_resources<S>(&mut self, source: &mut S) -> Result<()>
    where
        S: LocalResourceSource<Resource = E::LocalResource>,
    {
        let resource = source.acquire().await.map_err(|err| {
            log::error!("{}: failed to acquire local resource: {err}", self.id());
            Error::ErrNoLocalResourceAvailable
        })?;

        let id = self.negotiation.id().to_owned();
        self.negotiation
            .engine_mut()
            .add_local_resource(resource)
            .map_err(|err| {
                log::error!("{id}: failed to attach local resource: {err}");
                Error::ErrNoLocalResourceAvailable
            })?;

        log::debug!("{id}: local resources ready");
        self.local_resources_ready = true;
        Ok(())
    }

    pub fn local_resources_ready(&self) -> bool {
        self.local_resources_ready
    }

    pub async fn offer(&mut self) -> Result<RTCSessionDescription> {
        self.warn_if_resources_not_ready("offer");
        self.negotiation.offer().await
    }

    pub async fn answer(&mut self, offer: RTCSessionDescription) -> Result<RTCSessionDescription> {
        self.warn_if_resources_not_ready("answer");
        self.negotiation.answer(offer).await
    }

    pub async fn create_offer(&mut self) -> Result<RTCSessionDescription> {
        self.negotiation.create_offer().await
    }

    pub async fn create_answer(&mut self) -> Result<RTCSessionDescription> {
        self.negotiation.create_answer().await
    }

    pub async fn set_local_description(
        &mut self,
        description: RTCSessionDescription,
    ) -> Result<RTCSessionDescription> {
        self.negotiation.set_local_description(description).await
    }

    pub async fn receive_remote_description(
        &mut self,
        description: RTCSessionDescription,
    ) -> Result<()> {
        self.negotiation.receive_remote_description(description).await
    }

    pub async fn handle_signal(&mut self, text: &str) -> Result<()> {
        self.negotiation.handle_signal(text).await
    }

    pub async fn add_ice_candidate(&mut self, candidate: RTCIceCandidateInit) -> Result<()> {
        self.negotiation.add_ice_candidate(candidate).await
    }

    pub fn set_outbound_signal_handler(&mut self, signal_sink: impl SignalSink + Send + 'static) {
        self.negotiation.set_signal_sink(signal_sink);
    }

    /// Dispatches a notification raised by the connection engine.
    pub fn handle_engine_event(&mut self, event: EngineEvent) -> Result<()> {
        match event {
            EngineEvent::RemoteResourceAdded(resource_id) => {
                log::info!("{}: remote resource {resource_id} added", self.id());
                self.negotiation
                    .push_event(RTCEndpointEvent::OnRemoteResourceAdded(resource_id));
                Ok(())
            }
            EngineEvent::LocalCandidate(candidate) => {
                self.negotiation.on_ice_candidate_discovered(candidate)
            }
            EngineEvent::NegotiationNeeded => {
                log::info!("{}: negotiation needed, ignored", self.id());
                self.negotiation
                    .push_event(RTCEndpointEvent::OnNegotiationNeeded);
                Ok(())
            }
        }
    }

    pub fn negotiation_state(&self) -> RTCNegotiationState {
        self.negotiation.state()
    }

    /// SAS of the remote fingerprint, once known.
    pub fn current_sas(&self) -> Option<&RTCShortAuthenticationString> {
        self.negotiation.current_sas()
    }

    pub fn local_sas(&self) -> Option<&RTCShortAuthenticationString> {
        self.negotiation.local_sas()
    }

    pub fn local_fingerprint(&self) -> Option<&Fingerprint> {
        self.negotiation.local_fingerprint()
    }

    pub fn remote_fingerprint(&self) -> Option<&Fingerprint> {
        self.negotiation.remote_fingerprint()
    }

    pub fn local_description(&self) -> Option<&RTCSessionDescription> {
        self.negotiation.local_description()
    }

    pub fn remote_description(&self) -> Option<&RTCSessionDescription> {
        self.negotiation.remote_description()
    }

    pub fn pending_candidates(&self) -> usize {
        self.negotiation.pending_candidates()
    }

    pub fn engine(&self) -> &E {
        self.negotiation.engine()
    }

    pub fn engine_mut(&mut self) -> &mut E {
        self.negotiation.engine_mut()
    }

    pub fn poll_event(&mut self) -> Option<RTCEndpointEvent> {
        self.negotiation.poll_event()
    }

    /// Abandons the current attempt. Local resources stay attached.
    pub fn reset(&mut self) {
        self.negotiation.reset();
    }

    fn warn_if_resources_not_ready(&self, op: &str) {
        if !self.local_resources_ready {
            log::warn!(
                "{}: {op} called before local resources were started",
                self.id()
            );
        }
    }
}
