/// Engine failures move the endpoint to the terminal Failed state and are
/// returned to the caller of the in-flight operation; nothing is signaled.
use anyhow::Result;

use rtc_sas::configuration::RTCConfiguration;
use rtc_sas::endpoint::Endpoint;
use rtc_sas::error::Error;
use rtc_sas::negotiation::state::{RTCFailureReason, RTCNegotiationState};
use rtc_sas::sdp::RTCSessionDescription;

mod common;
use common::*;

fn remote_offer() -> RTCSessionDescription {
    RTCSessionDescription::offer(sdp_with_fingerprint("alice", Some(ALICE_FINGERPRINT)))
}

#[tokio::test]
async fn test_offerer_failures() -> Result<()> {
    init_log();

    let tests = vec![
        (
            FailAt::CreateOffer,
            Error::ErrOfferCreationFailed("create_offer refused".to_owned()),
            RTCFailureReason::OfferCreationFailed,
        ),
        (
            FailAt::SetLocalDescription,
            Error::ErrSetLocalDescriptionFailed("set_local_description refused".to_owned()),
            RTCFailureReason::SetLocalDescriptionFailed,
        ),
    ];

    for (fail_at, expected_err, expected_reason) in tests {
        let outbox = Outbox::default();
        let mut alice = Endpoint::new(
            "alice",
            ScriptedEngine::new("alice", Some(ALICE_FINGERPRINT)).failing_at(fail_at),
            outbox.clone(),
            RTCConfiguration::default(),
        );

        assert_eq!(alice.offer().await, Err(expected_err), "{fail_at:?}");
        assert_eq!(
            alice.negotiation_state(),
            RTCNegotiationState::Failed(expected_reason),
            "{fail_at:?}"
        );
        assert_eq!(outbox.len(), 0, "{fail_at:?}");
        assert!(alice.local_sas().is_none(), "{fail_at:?}");
    }

    Ok(())
}

#[tokio::test]
async fn test_answerer_failures() -> Result<()> {
    init_log();

    let tests = vec![
        (
            FailAt::SetRemoteDescription,
            Error::ErrSetRemoteDescriptionFailed("set_remote_description refused".to_owned()),
            RTCFailureReason::SetRemoteDescriptionFailed,
            false,
        ),
        (
            FailAt::CreateAnswer,
            Error::ErrAnswerCreationFailed("create_answer refused".to_owned()),
            RTCFailureReason::AnswerCreationFailed,
            true,
        ),
        (
            FailAt::SetLocalDescription,
            Error::ErrSetLocalDescriptionFailed("set_local_description refused".to_owned()),
            RTCFailureReason::SetLocalDescriptionFailed,
            true,
        ),
    ];

    for (fail_at, expected_err, expected_reason, sas_known) in tests {
        let outbox = Outbox::default();
        let mut bob = Endpoint::new(
            "bob",
            ScriptedEngine::new("bob", Some(BOB_FINGERPRINT)).failing_at(fail_at),
            outbox.clone(),
            RTCConfiguration::default(),
        );

        assert_eq!(bob.answer(remote_offer()).await, Err(expected_err), "{fail_at:?}");
        assert_eq!(
            bob.negotiation_state(),
            RTCNegotiationState::Failed(expected_reason),
            "{fail_at:?}"
        );
        assert_eq!(outbox.len(), 0, "{fail_at:?}");
        assert_eq!(bob.current_sas().is_some(), sas_known, "{fail_at:?}");

        // Only an endpoint that has a remote description still applies
        // candidates; the others can never flush, so nothing is buffered.
        bob.add_ice_candidate(rtc_sas::candidate::RTCIceCandidateInit::new(
            "candidate:1 1 udp 1 10.0.0.1 9 typ host",
        ))
        .await?;
        assert_eq!(bob.pending_candidates(), 0, "{fail_at:?}");
        assert_eq!(
            bob.engine().applied_candidates.len(),
            usize::from(sas_known),
            "{fail_at:?}"
        );
    }

    Ok(())
}

#[tokio::test]
async fn test_failed_is_terminal() -> Result<()> {
    init_log();

    let mut alice = Endpoint::new(
        "alice",
        ScriptedEngine::new("alice", Some(ALICE_FINGERPRINT)).failing_at(FailAt::CreateOffer),
        Outbox::default(),
        RTCConfiguration::default(),
    );
    assert!(alice.offer().await.is_err());

    let failed = RTCNegotiationState::Failed(RTCFailureReason::OfferCreationFailed);
    alice.engine_mut().fail_at = FailAt::Nothing;

    // No automatic retry, and further description operations are refused.
    assert!(matches!(
        alice.offer().await,
        Err(Error::ErrNegotiationStateProposedTransitionInvalid(_))
    ));
    assert!(matches!(
        alice.receive_remote_description(remote_offer()).await,
        Err(Error::ErrNegotiationStateProposedTransitionInvalid(_))
    ));
    assert_eq!(alice.negotiation_state(), failed);
    assert_eq!(
        alice
            .engine()
            .calls
            .iter()
            .filter(|call| *call == "create_offer")
            .count(),
        1
    );

    // Candidates are still accepted, but with no remote description to wait
    // for they are dropped rather than buffered.
    alice
        .add_ice_candidate(rtc_sas::candidate::RTCIceCandidateInit::new(
            "candidate:1 1 udp 1 10.0.0.1 9 typ host",
        ))
        .await?;
    assert_eq!(alice.pending_candidates(), 0);
    assert!(alice.engine().applied_candidates.is_empty());

    // Reset is the way out.
    alice.reset();
    assert_eq!(alice.negotiation_state(), RTCNegotiationState::Idle);
    assert_eq!(alice.pending_candidates(), 0);
    alice.offer().await?;
    assert_eq!(alice.negotiation_state(), RTCNegotiationState::LocalDescriptionSet);

    Ok(())
}

#[tokio::test]
async fn test_out_of_order_operations_are_refused() -> Result<()> {
    init_log();

    let outbox = Outbox::default();
    let mut alice = Endpoint::new(
        "alice",
        ScriptedEngine::new("alice", Some(ALICE_FINGERPRINT)),
        outbox.clone(),
        RTCConfiguration::default(),
    );

    assert!(matches!(
        alice.create_answer().await,
        Err(Error::ErrNegotiationStateProposedTransitionInvalid(_))
    ));
    assert!(matches!(
        alice
            .set_local_description(RTCSessionDescription::offer("v=0".to_owned()))
            .await,
        Err(Error::ErrNegotiationStateProposedTransitionInvalid(_))
    ));
    assert!(matches!(
        alice
            .receive_remote_description(RTCSessionDescription::answer("v=0".to_owned()))
            .await,
        Err(Error::ErrNegotiationStateProposedTransitionInvalid(_))
    ));
    assert_eq!(alice.negotiation_state(), RTCNegotiationState::Idle);
    assert!(alice.engine().calls.is_empty());

    alice.offer().await?;
    assert!(matches!(
        alice.offer().await,
        Err(Error::ErrNegotiationStateProposedTransitionInvalid(_))
    ));
    assert!(matches!(
        alice.receive_remote_description(remote_offer()).await,
        Err(Error::ErrNegotiationStateProposedTransitionInvalid(_))
    ));
    assert_eq!(alice.negotiation_state(), RTCNegotiationState::LocalDescriptionSet);
    assert_eq!(outbox.len(), 1);

    Ok(())
}
