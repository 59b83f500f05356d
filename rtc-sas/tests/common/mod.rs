#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use rtc_sas::candidate::RTCIceCandidateInit;
use rtc_sas::engine::{ConnectionEngine, LocalResourceSource};
use rtc_sas::error::{Error, Result};
use rtc_sas::sdp::RTCSessionDescription;
use rtc_sas::signal::SignalSink;

pub const ALICE_FINGERPRINT: &str =
    "6B:8B:F0:65:5F:78:E2:51:3B:AC:6F:F3:3F:46:1B:35:DC:B8:5F:64:1A:24:C2:43:F0:A1:58:D0:A1:2C:19:08";
pub const BOB_FINGERPRINT: &str =
    "10:20:30:40:50:60:70:80:90:A0:B0:C0:D0:E0:F0:00:11:22:33:44:55:66:77:88:99:AA:BB:CC:DD:EE:FF:01";

pub fn init_log() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init()
        .ok();
}

pub fn sdp_with_fingerprint(session: &str, fingerprint: Option<&str>) -> String {
    let mut sdp = format!("v=0\r\no=- 0 0 IN IP4 127.0.0.1\r\ns={session}\r\nt=0 0\r\n");
    if let Some(fingerprint) = fingerprint {
        sdp.push_str(&format!("a=fingerprint:sha-256 {fingerprint}\r\n"));
    }
    sdp.push_str("m=application 9 UDP/DTLS/SCTP webrtc-datachannel\r\n");
    sdp
}

/// Which engine call should fail.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum FailAt {
    #[default]
    Nothing,
    CreateOffer,
    CreateAnswer,
    SetLocalDescription,
    SetRemoteDescription,
    AddIceCandidate,
    AddLocalResource,
}

/// Connection engine that answers with canned descriptions and records the
/// calls it receives. Like a real engine it refuses remote candidates until
/// a remote description is set.
#[derive(Debug, Default)]
pub struct ScriptedEngine {
    pub session: String,
    pub fingerprint: Option<String>,
    pub fail_at: FailAt,

    pub calls: Vec<String>,
    pub local_description: Option<RTCSessionDescription>,
    pub remote_description: Option<RTCSessionDescription>,
    pub applied_candidates: Vec<RTCIceCandidateInit>,
    pub local_resources: Vec<String>,
}

impl ScriptedEngine {
    pub fn new(session: &str, fingerprint: Option<&str>) -> Self {
        Self {
            session: session.to_owned(),
            fingerprint: fingerprint.map(str::to_owned),
            ..Default::default()
        }
    }

    pub fn failing_at(mut self, fail_at: FailAt) -> Self {
        self.fail_at = fail_at;
        self
    }

    fn check(&mut self, call: &str, fail_at: FailAt) -> Result<()> {
        self.calls.push(call.to_owned());
        if self.fail_at == fail_at {
            Err(Error::Other(format!("{call} refused")))
        } else {
            Ok(())
        }
    }

    fn sdp(&self) -> String {
        sdp_with_fingerprint(&self.session, self.fingerprint.as_deref())
    }
}

impl ConnectionEngine for ScriptedEngine {
    type LocalResource = String;

    async fn create_offer(&mut self) -> Result<RTCSessionDescription> {
        self.check("create_offer", FailAt::CreateOffer)?;
        Ok(RTCSessionDescription::offer(self.sdp()))
    }

    async fn create_answer(&mut self) -> Result<RTCSessionDescription> {
        self.check("create_answer", FailAt::CreateAnswer)?;
        if self.remote_description.is_none() {
            return Err(Error::Other("no remote offer".to_owned()));
        }
        Ok(RTCSessionDescription::answer(self.sdp()))
    }

    async fn set_local_description(&mut self, description: &RTCSessionDescription) -> Result<()> {
        self.check("set_local_description", FailAt::SetLocalDescription)?;
        self.local_description = Some(description.clone());
        Ok(())
    }

    async fn set_remote_description(
        &mut self,
        description: &RTCSessionDescription,
    ) -> Result<()> {
        self.check("set_remote_description", FailAt::SetRemoteDescription)?;
        self.remote_description = Some(description.clone());
        Ok(())
    }

    async fn add_ice_candidate(&mut self, candidate: &RTCIceCandidateInit) -> Result<()> {
        self.check("add_ice_candidate", FailAt::AddIceCandidate)?;
        if self.remote_description.is_none() {
            return Err(Error::Other(
                "remote description is not set, candidate dropped".to_owned(),
            ));
        }
        self.applied_candidates.push(candidate.clone());
        Ok(())
    }

    fn add_local_resource(&mut self, resource: String) -> Result<()> {
        self.check("add_local_resource", FailAt::AddLocalResource)?;
        self.local_resources.push(resource);
        Ok(())
    }
}

/// Local media source handing out a named track.
pub struct FakeCamera {
    pub track: String,
    pub available: bool,
}

impl LocalResourceSource for FakeCamera {
    type Resource = String;

    async fn acquire(&mut self) -> Result<String> {
        if self.available {
            Ok(self.track.clone())
        } else {
            Err(Error::Other("camera busy".to_owned()))
        }
    }
}

/// Signal sink collecting everything an endpoint sends.
#[derive(Debug, Default, Clone)]
pub struct Outbox(Arc<Mutex<VecDeque<String>>>);

impl Outbox {
    pub fn pop(&self) -> Option<String> {
        self.0.lock().unwrap().pop_front()
    }

    pub fn drain(&self) -> Vec<String> {
        self.0.lock().unwrap().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

impl SignalSink for Outbox {
    fn send_signal(&mut self, text: String) {
        self.0.lock().unwrap().push_back(text);
    }
}
