use std::collections::VecDeque;
use std::io::Write;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use rcgen::{CertificateParams, KeyPair};
use sha2::{Digest, Sha256};
use tokio::sync::mpsc;

use sas::candidate::RTCIceCandidateInit;
use sas::configuration::RTCConfigurationBuilder;
use sas::endpoint::Endpoint;
use sas::engine::{ConnectionEngine, EngineEvent, LocalResourceSource};
use sas::error::{Error, Result as SasResult};
use sas::event::RTCEndpointEvent;
use sas::negotiation::state::RTCNegotiationState;
use sas::sas::sas_matches;
use sas::sdp::RTCSessionDescription;
use sas::signal::SignalMessage;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(5);

#[derive(Parser)]
#[command(name = "loopback")]
#[command(author = "Rusty Rain <y@liu.mx>")]
#[command(version = "0.0.0")]
#[command(about = "An example of SAS verification between two in-process endpoints", long_about = None)]
struct Cli {
    #[arg(short, long)]
    debug: bool,
    #[arg(long, default_value_t = format!("INFO"))]
    log_level: String,
    #[arg(long, default_value_t = 4)]
    sas_words: usize,
    /// Substitute the offer's fingerprint on the way, like a man-in-the-middle.
    #[arg(long)]
    tamper: bool,
}

/// sha-256 fingerprint of a fresh self-signed certificate, formatted for SDP.
fn certificate_fingerprint(name: &str) -> Result<String> {
    let key_pair = KeyPair::generate_for(&rcgen::PKCS_ECDSA_P256_SHA256)?;
    let certificate = CertificateParams::new(vec![name.to_owned()])?.self_signed(&key_pair)?;

    let mut h = Sha256::new();
    h.update(certificate.der().as_ref());
    let values: Vec<String> = h.finalize().iter().map(|x| format!("{x:02x}")).collect();
    Ok(values.join(":"))
}

/// Stands in for a real ICE/DTLS stack: it hands out descriptions carrying
/// its certificate fingerprint and reports one host candidate per
/// description it applies.
struct LoopbackEngine {
    name: String,
    fingerprint: String,
    port: u16,
    remote_set: bool,
    tracks: Vec<String>,
    events: VecDeque<EngineEvent>,
}

impl LoopbackEngine {
    fn new(name: &str, port: u16) -> Result<Self> {
        Ok(Self {
            name: name.to_owned(),
            fingerprint: certificate_fingerprint(name)?,
            port,
            remote_set: false,
            tracks: vec![],
            events: VecDeque::new(),
        })
    }

    fn sdp(&self) -> String {
        format!(
            "v=0\r\no=- 0 0 IN IP4 127.0.0.1\r\ns={}\r\nt=0 0\r\na=fingerprint:sha-256 {}\r\nm=audio 9 UDP/TLS/RTP/SAVPF 111\r\n",
            self.name, self.fingerprint
        )
    }

    fn poll_event(&mut self) -> Option<EngineEvent> {
        self.events.pop_front()
    }
}

impl ConnectionEngine for LoopbackEngine {
    type LocalResource = String;

    async fn create_offer(&mut self) -> SasResult<RTCSessionDescription> {
        Ok(RTCSessionDescription::offer(self.sdp()))
    }

    async fn create_answer(&mut self) -> SasResult<RTCSessionDescription> {
        Ok(RTCSessionDescription::answer(self.sdp()))
    }

    async fn set_local_description(&mut self, _: &RTCSessionDescription) -> SasResult<()> {
        let candidate = RTCIceCandidateInit {
            candidate: format!(
                "candidate:1 1 udp 2130706431 127.0.0.1 {} typ host",
                self.port
            ),
            sdp_mid: Some("0".to_owned()),
            sdp_mline_index: Some(0),
            username_fragment: None,
        };
        self.events
            .push_back(EngineEvent::LocalCandidate(Some(candidate)));
        self.events.push_back(EngineEvent::LocalCandidate(None));
        Ok(())
    }

    async fn set_remote_description(&mut self, _: &RTCSessionDescription) -> SasResult<()> {
        self.remote_set = true;
        self.events
            .push_back(EngineEvent::RemoteResourceAdded(format!("{}-remote-audio", self.name)));
        Ok(())
    }

    async fn add_ice_candidate(&mut self, candidate: &RTCIceCandidateInit) -> SasResult<()> {
        if !self.remote_set {
            return Err(Error::Other("remote description not set".to_owned()));
        }
        info!("{}: remote candidate {}", self.name, candidate.candidate);
        Ok(())
    }

    fn add_local_resource(&mut self, track: String) -> SasResult<()> {
        self.tracks.push(track);
        Ok(())
    }
}

struct Microphone(String);

impl LocalResourceSource for Microphone {
    type Resource = String;

    async fn acquire(&mut self) -> SasResult<String> {
        Ok(self.0.clone())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = log::LevelFilter::from_str(&cli.log_level)?;
    if cli.debug {
        env_logger::Builder::new()
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{}:{} [{}] {} - {}",
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0),
                    record.level(),
                    chrono::Local::now().format("%H:%M:%S.%6f"),
                    record.args()
                )
            })
            .filter(None, log_level)
            .init();
    }

    let config = RTCConfigurationBuilder::new()
        .with_max_sas_words(cli.sas_words)
        .build();

    let (alice_tx, mut alice_rx) = mpsc::unbounded_channel::<String>();
    let (bob_tx, mut bob_rx) = mpsc::unbounded_channel::<String>();

    let mut alice = Endpoint::new(
        "alice",
        LoopbackEngine::new("alice", 50000)?,
        move |text: String| {
            if alice_tx.send(text).is_err() {
                warn!("alice: signaling channel closed");
            }
        },
        config.clone(),
    );
    let mut bob = Endpoint::new(
        "bob",
        LoopbackEngine::new("bob", 50001)?,
        move |text: String| {
            if bob_tx.send(text).is_err() {
                warn!("bob: signaling channel closed");
            }
        },
        config,
    );

    alice
        .start_local_resources(&mut Microphone("alice-mic".to_owned()))
        .await?;
    bob.start_local_resources(&mut Microphone("bob-mic".to_owned()))
        .await?;

    alice.offer().await?;

    let mallory = if cli.tamper {
        Some(certificate_fingerprint("mallory")?)
    } else {
        None
    };

    let negotiate = async {
        while !negotiated(&alice) || !negotiated(&bob) {
            pump_engine_events(&mut alice)?;
            pump_engine_events(&mut bob)?;

            tokio::select! {
                Some(text) = alice_rx.recv() => {
                    let text = relay(text, mallory.as_deref())?;
                    bob.handle_signal(&text).await?;
                }
                Some(text) = bob_rx.recv() => {
                    alice.handle_signal(&text).await?;
                }
                else => break,
            }
        }
        Ok::<(), anyhow::Error>(())
    };
    tokio::time::timeout(DEFAULT_TIMEOUT_DURATION, negotiate).await??;

    for endpoint in [&mut alice, &mut bob] {
        while let Some(event) = endpoint.poll_event() {
            match event {
                RTCEndpointEvent::OnSasAvailable(sas) => {
                    info!("{}: sas available: {sas}", endpoint.id())
                }
                RTCEndpointEvent::OnWarning(err) => warn!("{}: {err}", endpoint.id()),
                event => info!("{}: {event:?}", endpoint.id()),
            }
        }
    }

    let show = |endpoint: &Endpoint<LoopbackEngine>| {
        endpoint
            .current_sas()
            .map(|sas| sas.to_string())
            .unwrap_or_else(|| "<none>".to_owned())
    };
    println!("alice reads: {}", show(&alice));
    println!("bob reads:   {}", show(&bob));

    if alice.current_sas().is_none() || bob.current_sas().is_none() {
        println!("SAS unavailable: a description carried no fingerprint, nothing verified");
    } else if sas_matches(alice.current_sas(), bob.local_sas())
        && sas_matches(bob.current_sas(), alice.local_sas())
    {
        println!("SAS verified: both sides see each other's certificate");
    } else {
        println!("SAS MISMATCH: the connection is being intercepted");
    }

    Ok(())
}

fn negotiated(endpoint: &Endpoint<LoopbackEngine>) -> bool {
    endpoint.negotiation_state() == RTCNegotiationState::Negotiated
}

fn pump_engine_events(endpoint: &mut Endpoint<LoopbackEngine>) -> Result<()> {
    while let Some(event) = endpoint.engine_mut().poll_event() {
        endpoint.handle_engine_event(event)?;
    }
    Ok(())
}

/// Delivers a signal, swapping in `mallory`'s fingerprint when tampering.
fn relay(text: String, mallory: Option<&str>) -> Result<String> {
    let Some(mallory) = mallory else {
        return Ok(text);
    };

    match SignalMessage::decode(&text)? {
        SignalMessage::Sdp(mut description) => {
            description.sdp = description
                .sdp
                .lines()
                .map(|line| {
                    if line.starts_with("a=fingerprint:") {
                        format!("a=fingerprint:sha-256 {mallory}")
                    } else {
                        line.to_owned()
                    }
                })
                .collect::<Vec<_>>()
                .join("\r\n");
            warn!("mallory: replaced fingerprint in {}", description.sdp_type);
            Ok(SignalMessage::Sdp(description).encode()?)
        }
        signal => Ok(signal.encode()?),
    }
}
