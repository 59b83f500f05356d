//! Offer/answer/candidate state machine for one endpoint.

pub mod state;

use std::collections::VecDeque;
use std::sync::Arc;

use crate::candidate::RTCIceCandidateInit;
use crate::configuration::RTCConfiguration;
use crate::engine::ConnectionEngine;
use crate::error::{Error, Result};
use crate::event::RTCEndpointEvent;
use crate::fingerprint::{Fingerprint, extract_fingerprint};
use crate::sas::{RTCShortAuthenticationString, generate_sas};
use crate::sdp::{RTCSdpType, RTCSessionDescription};
use crate::signal::{SignalMessage, SignalSink};
use crate::word_table::WordTable;
use state::{
    NegotiationOp, RTCFailureReason, RTCNegotiationRole, RTCNegotiationState,
    check_negotiation_op,
};

/// Drives one endpoint's [`ConnectionEngine`] through the offer/answer
/// exchange and derives the short authentication string of the remote
/// fingerprint.
///
/// Every state-mutating operation takes `&mut self`, so two of them can never
/// run concurrently for the same endpoint; an operation that is invalid for
/// the current state fails immediately with
/// [`Error::ErrNegotiationStateProposedTransitionInvalid`] and leaves the state
/// untouched. Engine failures move the machine to the terminal
/// [`RTCNegotiationState::Failed`] and are returned to the caller; nothing is
/// retried.
///
/// Remote candidates that arrive before the remote description are buffered
/// and applied, in arrival order and exactly once, as soon as the remote
/// description is set.
pub struct NegotiationEngine<E: ConnectionEngine> {
    id: String,
    engine: E,
    signal_sink: Box<dyn SignalSink + Send>,

    word_table: Arc<WordTable>,
    max_sas_words: usize,
    auto_answer: bool,

    state: RTCNegotiationState,
    role: Option<RTCNegotiationRole>,
    local_description: Option<RTCSessionDescription>,
    remote_description: Option<RTCSessionDescription>,
    local_fingerprint: Option<Fingerprint>,
    remote_fingerprint: Option<Fingerprint>,
    local_sas: Option<RTCShortAuthenticationString>,
    remote_sas: Option<RTCShortAuthenticationString>,

    pending_candidates: VecDeque<RTCIceCandidateInit>,
    events: VecDeque<RTCEndpointEvent>,
}

impl<E: ConnectionEngine> NegotiationEngine<E> {
    pub fn new(
        id: impl Into<String>,
        engine: E,
        signal_sink: impl SignalSink + Send + 'static,
        config: &RTCConfiguration,
    ) -> Self {
        Self {
            id: id.into(),
            engine,
            signal_sink: Box::new(signal_sink),
            word_table: Arc::clone(&config.word_table),
            max_sas_words: config.max_sas_words,
            auto_answer: config.auto_answer,
            state: RTCNegotiationState::Idle,
            role: None,
            local_description: None,
            remote_description: None,
            local_fingerprint: None,
            remote_fingerprint: None,
            local_sas: None,
            remote_sas: None,
            pending_candidates: VecDeque::new(),
            events: VecDeque::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> RTCNegotiationState {
        self.state
    }

    pub fn role(&self) -> Option<RTCNegotiationRole> {
        self.role
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn local_description(&self) -> Option<&RTCSessionDescription> {
        self.local_description.as_ref()
    }

    pub fn remote_description(&self) -> Option<&RTCSessionDescription> {
        self.remote_description.as_ref()
    }

    pub fn local_fingerprint(&self) -> Option<&Fingerprint> {
        self.local_fingerprint.as_ref()
    }

    pub fn remote_fingerprint(&self) -> Option<&Fingerprint> {
        self.remote_fingerprint.as_ref()
    }

    /// Words derived from the local fingerprint: what the other human should
    /// see as their current SAS.
    pub fn local_sas(&self) -> Option<&RTCShortAuthenticationString> {
        self.local_sas.as_ref()
    }

    /// Words derived from the remote fingerprint, available once a remote
    /// description carrying one has been applied.
    pub fn current_sas(&self) -> Option<&RTCShortAuthenticationString> {
        self.remote_sas.as_ref()
    }

    /// Number of remote candidates waiting for the remote description.
    pub fn pending_candidates(&self) -> usize {
        self.pending_candidates.len()
    }

    /// Replaces the outbound signal handler. Signals already emitted are not
    /// replayed.
    pub fn set_signal_sink(&mut self, signal_sink: impl SignalSink + Send + 'static) {
        self.signal_sink = Box::new(signal_sink);
    }

    pub fn poll_event(&mut self) -> Option<RTCEndpointEvent> {
        self.events.pop_front()
    }

    pub(crate) fn push_event(&mut self, event: RTCEndpointEvent) {
        self.events.push_back(event);
    }

    /// Offerer entry point: creates an offer and applies it locally, which
    /// signals it to the remote endpoint.
    pub async fn offer(&mut self) -> Result<RTCSessionDescription> {
        let offer = self.create_offer().await?;
        self.set_local_description(offer).await
    }

    /// Answerer entry point: applies the remote offer, then creates an answer
    /// and applies it locally, which signals it to the remote endpoint.
    pub async fn answer(&mut self, offer: RTCSessionDescription) -> Result<RTCSessionDescription> {
        self.receive_remote_description(offer).await?;
        let answer = self.create_answer().await?;
        self.set_local_description(answer).await
    }

    pub async fn create_offer(&mut self) -> Result<RTCSessionDescription> {
        let role = check_negotiation_op(self.state, self.role, NegotiationOp::CreateOffer)?;

        match self.engine.create_offer().await {
            Ok(offer) => {
                self.role = Some(role);
                self.set_state(RTCNegotiationState::OfferPending);
                Ok(offer)
            }
            Err(err) => {
                self.role = Some(role);
                self.fail(RTCFailureReason::OfferCreationFailed, &err);
                Err(Error::ErrOfferCreationFailed(err.to_string()))
            }
        }
    }

    pub async fn create_answer(&mut self) -> Result<RTCSessionDescription> {
        check_negotiation_op(self.state, self.role, NegotiationOp::CreateAnswer)?;

        match self.engine.create_answer().await {
            Ok(answer) => {
                self.set_state(RTCNegotiationState::AnswerPending);
                Ok(answer)
            }
            Err(err) => {
                self.fail(RTCFailureReason::AnswerCreationFailed, &err);
                Err(Error::ErrAnswerCreationFailed(err.to_string()))
            }
        }
    }

    /// Applies `description` on the engine and emits it as an sdp signal.
    ///
    /// The signal is emitted exactly once per successful call and never on
    /// failure.
    pub async fn set_local_description(
        &mut self,
        description: RTCSessionDescription,
    ) -> Result<RTCSessionDescription> {
        check_negotiation_op(
            self.state,
            self.role,
            NegotiationOp::SetLocal(description.sdp_type),
        )?;

        if let Err(err) = self.engine.set_local_description(&description).await {
            self.fail(RTCFailureReason::SetLocalDescriptionFailed, &err);
            return Err(Error::ErrSetLocalDescriptionFailed(err.to_string()));
        }

        let signal = SignalMessage::Sdp(description.clone()).encode()?;

        self.local_fingerprint = extract_fingerprint(&description);
        self.local_sas = self
            .local_fingerprint
            .as_ref()
            .map(|fingerprint| generate_sas(fingerprint, &self.word_table, self.max_sas_words));
        if self.local_fingerprint.is_none() {
            log::debug!("{}: local description carries no fingerprint", self.id);
        }
        self.local_description = Some(description.clone());
        self.set_state(RTCNegotiationState::LocalDescriptionSet);

        log::trace!("{}: sending {} signal", self.id, description.sdp_type);
        self.signal_sink.send_signal(signal);

        if self.remote_description.is_some() {
            self.set_state(RTCNegotiationState::Negotiated);
        }

        Ok(description)
    }

    /// Applies the remote `description` on the engine, derives the SAS of its
    /// fingerprint and flushes the buffered remote candidates.
    ///
    /// A description without a sha-256 fingerprint is accepted; the endpoint
    /// logs a warning and reports [`Error::ErrMissingFingerprint`] as an
    /// [`RTCEndpointEvent::OnWarning`].
    pub async fn receive_remote_description(
        &mut self,
        description: RTCSessionDescription,
    ) -> Result<()> {
        let role = check_negotiation_op(
            self.state,
            self.role,
            NegotiationOp::SetRemote(description.sdp_type),
        )?;
        self.role = Some(role);

        if let Err(err) = self.engine.set_remote_description(&description).await {
            self.fail(RTCFailureReason::SetRemoteDescriptionFailed, &err);
            return Err(Error::ErrSetRemoteDescriptionFailed(err.to_string()));
        }

        match extract_fingerprint(&description) {
            Some(fingerprint) => {
                let sas = generate_sas(&fingerprint, &self.word_table, self.max_sas_words);
                log::debug!(
                    "{}: remote fingerprint {fingerprint}, sas \"{sas}\"",
                    self.id
                );
                self.remote_fingerprint = Some(fingerprint);
                self.remote_sas = Some(sas.clone());
                self.push_event(RTCEndpointEvent::OnSasAvailable(sas));
            }
            None => {
                log::warn!("{}: {}", self.id, Error::ErrMissingFingerprint);
                self.remote_fingerprint = None;
                self.remote_sas = None;
                self.push_event(RTCEndpointEvent::OnWarning(Error::ErrMissingFingerprint));
            }
        }

        self.remote_description = Some(description);
        self.set_state(RTCNegotiationState::RemoteDescriptionSet);

        self.flush_pending_candidates().await;

        if self.local_description.is_some() {
            self.set_state(RTCNegotiationState::Negotiated);
        }

        Ok(())
    }

    /// Applies a remote candidate, or buffers it until the remote description
    /// is set. Valid in every state, including the terminal ones. A failed
    /// endpoint without a remote description can never flush, so it drops
    /// the candidate instead of buffering it.
    pub async fn add_ice_candidate(&mut self, candidate: RTCIceCandidateInit) -> Result<()> {
        if candidate.is_end_of_candidates() {
            log::debug!("{}: remote end of candidates", self.id);
            return Ok(());
        }

        if self.remote_description.is_none() && self.state.is_failed() {
            log::warn!(
                "{}: dropping remote candidate {} in state {}",
                self.id,
                candidate.candidate,
                self.state
            );
            return Ok(());
        }

        if self.remote_description.is_none() {
            log::trace!(
                "{}: buffering remote candidate {}",
                self.id,
                candidate.candidate
            );
            self.pending_candidates.push_back(candidate);
            return Ok(());
        }

        self.engine
            .add_ice_candidate(&candidate)
            .await
            .map_err(|err| Error::ErrAddIceCandidateFailed(err.to_string()))
    }

    /// Signals a locally discovered candidate. `None` and the empty
    /// end-of-candidates marker are not transmitted.
    pub fn on_ice_candidate_discovered(
        &mut self,
        candidate: Option<RTCIceCandidateInit>,
    ) -> Result<()> {
        let candidate = match candidate {
            Some(candidate) if !candidate.is_end_of_candidates() => candidate,
            _ => {
                log::debug!("{}: local candidate discovery complete", self.id);
                return Ok(());
            }
        };

        log::trace!("{}: sending candidate {}", self.id, candidate.candidate);
        let signal = SignalMessage::Candidate(candidate).encode()?;
        self.signal_sink.send_signal(signal);
        Ok(())
    }

    /// Decodes one inbound signal and dispatches it.
    ///
    /// Malformed and unexpected signals are logged, reported as
    /// [`RTCEndpointEvent::OnWarning`] and dropped without touching the state.
    /// With auto-answer enabled an inbound offer is answered right away.
    pub async fn handle_signal(&mut self, text: &str) -> Result<()> {
        let signal = match SignalMessage::decode(text) {
            Ok(signal) => signal,
            Err(err) => {
                log::warn!("{}: dropping signal: {err}", self.id);
                self.push_event(RTCEndpointEvent::OnWarning(err));
                return Ok(());
            }
        };

        match signal {
            SignalMessage::Sdp(description)
                if self.auto_answer && description.sdp_type == RTCSdpType::Offer =>
            {
                self.answer(description).await.map(|_| ())
            }
            SignalMessage::Sdp(description) => self.receive_remote_description(description).await,
            SignalMessage::Candidate(candidate) => self.add_ice_candidate(candidate).await,
        }
    }

    /// Returns to `Idle`, dropping descriptions, fingerprints, SAS values and
    /// buffered candidates. Queued events are kept.
    pub fn reset(&mut self) {
        log::debug!("{}: reset", self.id);
        self.role = None;
        self.local_description = None;
        self.remote_description = None;
        self.local_fingerprint = None;
        self.remote_fingerprint = None;
        self.local_sas = None;
        self.remote_sas = None;
        self.pending_candidates.clear();
        self.set_state(RTCNegotiationState::Idle);
    }

    async fn flush_pending_candidates(&mut self) {
        if self.pending_candidates.is_empty() {
            return;
        }
        log::debug!(
            "{}: flushing {} buffered candidates",
            self.id,
            self.pending_candidates.len()
        );

        while let Some(candidate) = self.pending_candidates.pop_front() {
            if let Err(err) = self.engine.add_ice_candidate(&candidate).await {
                log::warn!(
                    "{}: {}",
                    self.id,
                    Error::ErrAddIceCandidateFailed(format!("{}: {err}", candidate.candidate))
                );
            }
        }
    }

    fn set_state(&mut self, next: RTCNegotiationState) {
        if self.state == next {
            return;
        }
        log::debug!("{}: negotiation state {} -> {next}", self.id, self.state);
        self.state = next;
        self.push_event(RTCEndpointEvent::OnNegotiationStateChange(next));
    }

    fn fail(&mut self, reason: RTCFailureReason, err: &Error) {
        log::error!("{}: negotiation failed ({reason}): {err}", self.id);
        self.set_state(RTCNegotiationState::Failed(reason));
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::Mutex;

    const OFFER_SDP: &str = "v=0\r\na=fingerprint:sha-256 10:20:30:40:50\r\n";

    #[derive(Default)]
    struct StubEngine {
        fail_create_offer: bool,
        fail_set_remote: bool,
        candidates: Vec<String>,
    }

    impl ConnectionEngine for StubEngine {
        type LocalResource = ();

        async fn create_offer(&mut self) -> Result<RTCSessionDescription> {
            if self.fail_create_offer {
                return Err(Error::Other("no codecs".to_owned()));
            }
            Ok(RTCSessionDescription::offer(OFFER_SDP.to_owned()))
        }

        async fn create_answer(&mut self) -> Result<RTCSessionDescription> {
            Ok(RTCSessionDescription::answer("v=0\r\n".to_owned()))
        }

        async fn set_local_description(&mut self, _: &RTCSessionDescription) -> Result<()> {
            Ok(())
        }

        async fn set_remote_description(&mut self, _: &RTCSessionDescription) -> Result<()> {
            if self.fail_set_remote {
                return Err(Error::Other("bad sdp".to_owned()));
            }
            Ok(())
        }

        async fn add_ice_candidate(&mut self, candidate: &RTCIceCandidateInit) -> Result<()> {
            self.candidates.push(candidate.candidate.clone());
            Ok(())
        }

        fn add_local_resource(&mut self, _: ()) -> Result<()> {
            Ok(())
        }
    }

    fn new_engine(stub: StubEngine) -> (NegotiationEngine<StubEngine>, Arc<Mutex<Vec<String>>>) {
        let sent = Arc::new(Mutex::new(Vec::new()));
        let sink = {
            let sent = Arc::clone(&sent);
            move |text: String| sent.lock().unwrap().push(text)
        };
        let engine = NegotiationEngine::new("test", stub, sink, &RTCConfiguration::default());
        (engine, sent)
    }

    #[tokio::test]
    async fn test_offer_emits_sdp_signal_once() {
        let (mut engine, sent) = new_engine(StubEngine::default());

        let offer = engine.offer().await.unwrap();
        assert_eq!(offer.sdp_type, RTCSdpType::Offer);
        assert_eq!(engine.state(), RTCNegotiationState::LocalDescriptionSet);
        assert_eq!(engine.role(), Some(RTCNegotiationRole::Offerer));

        let sent = sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            SignalMessage::decode(&sent[0]).unwrap(),
            SignalMessage::Sdp(offer)
        );
        assert_eq!(
            engine.local_sas().map(|sas| sas.to_string()),
            Some("assume butterfat chairlift Dakota".to_owned())
        );
    }

    #[tokio::test]
    async fn test_create_offer_failure_is_terminal() {
        let (mut engine, sent) = new_engine(StubEngine {
            fail_create_offer: true,
            ..Default::default()
        });

        assert_eq!(
            engine.offer().await,
            Err(Error::ErrOfferCreationFailed("no codecs".to_owned()))
        );
        assert_eq!(
            engine.state(),
            RTCNegotiationState::Failed(RTCFailureReason::OfferCreationFailed)
        );
        assert!(sent.lock().unwrap().is_empty());

        assert!(matches!(
            engine.offer().await,
            Err(Error::ErrNegotiationStateProposedTransitionInvalid(_))
        ));
        assert_eq!(
            engine.state(),
            RTCNegotiationState::Failed(RTCFailureReason::OfferCreationFailed)
        );
    }

    #[tokio::test]
    async fn test_invalid_op_leaves_state_unchanged() {
        let (mut engine, _) = new_engine(StubEngine::default());

        let result = engine.create_answer().await;
        assert!(matches!(
            result,
            Err(Error::ErrNegotiationStateProposedTransitionInvalid(_))
        ));
        assert_eq!(engine.state(), RTCNegotiationState::Idle);
        assert_eq!(engine.poll_event(), None);
    }

    #[tokio::test]
    async fn test_set_remote_failure() {
        let (mut engine, _) = new_engine(StubEngine {
            fail_set_remote: true,
            ..Default::default()
        });

        let result = engine
            .receive_remote_description(RTCSessionDescription::offer(OFFER_SDP.to_owned()))
            .await;
        assert_eq!(
            result,
            Err(Error::ErrSetRemoteDescriptionFailed("bad sdp".to_owned()))
        );
        assert_eq!(
            engine.state(),
            RTCNegotiationState::Failed(RTCFailureReason::SetRemoteDescriptionFailed)
        );
        assert!(engine.current_sas().is_none());

        for n in 0..1000 {
            engine
                .add_ice_candidate(RTCIceCandidateInit::new(&format!("candidate:{n}")))
                .await
                .unwrap();
        }
        assert_eq!(engine.pending_candidates(), 0);
        assert!(engine.engine().candidates.is_empty());
    }

    #[tokio::test]
    async fn test_candidates_buffered_until_remote_description() {
        let (mut engine, _) = new_engine(StubEngine::default());

        for candidate in ["candidate:1", "candidate:2", ""] {
            engine
                .add_ice_candidate(RTCIceCandidateInit::new(candidate))
                .await
                .unwrap();
        }
        assert_eq!(engine.pending_candidates(), 2);
        assert!(engine.engine().candidates.is_empty());

        engine
            .receive_remote_description(RTCSessionDescription::offer(OFFER_SDP.to_owned()))
            .await
            .unwrap();
        assert_eq!(engine.pending_candidates(), 0);
        assert_eq!(engine.engine().candidates, vec!["candidate:1", "candidate:2"]);

        engine
            .add_ice_candidate(RTCIceCandidateInit::new("candidate:3"))
            .await
            .unwrap();
        assert_eq!(
            engine.engine().candidates,
            vec!["candidate:1", "candidate:2", "candidate:3"]
        );
    }

    #[test]
    fn test_discovery_complete_is_not_signaled() {
        let (mut engine, sent) = new_engine(StubEngine::default());

        engine.on_ice_candidate_discovered(None).unwrap();
        engine
            .on_ice_candidate_discovered(Some(RTCIceCandidateInit::new("")))
            .unwrap();
        assert!(sent.lock().unwrap().is_empty());

        let candidate = RTCIceCandidateInit::new("candidate:1 1 udp 1 10.0.0.1 9 typ host");
        engine
            .on_ice_candidate_discovered(Some(candidate.clone()))
            .unwrap();
        let sent = sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            SignalMessage::decode(&sent[0]).unwrap(),
            SignalMessage::Candidate(candidate)
        );
    }

    #[tokio::test]
    async fn test_reset() {
        let (mut engine, _) = new_engine(StubEngine::default());
        engine.offer().await.unwrap();
        engine
            .add_ice_candidate(RTCIceCandidateInit::new("candidate:1"))
            .await
            .unwrap();

        engine.reset();
        assert_eq!(engine.state(), RTCNegotiationState::Idle);
        assert_eq!(engine.role(), None);
        assert_eq!(engine.pending_candidates(), 0);
        assert!(engine.local_description().is_none());
        assert!(engine.local_sas().is_none());

        engine.offer().await.unwrap();
        assert_eq!(engine.state(), RTCNegotiationState::LocalDescriptionSet);
    }
}
