//! Process-wide transport context.
//!
//! The first client to start up initializes the context; later clients
//! share it, and it is torn down when the last holder goes away. A new
//! client after that point initializes a fresh one. Holder counting,
//! initialization and release all happen under one lock.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::error::TransportError;

static REGISTRY: Lazy<Mutex<Registry>> = Lazy::new(|| {
    Mutex::new(Registry {
        shared: None,
        holders: 0,
    })
});
static INITIALIZATIONS: AtomicUsize = AtomicUsize::new(0);
static CLEANUPS: AtomicUsize = AtomicUsize::new(0);

struct Registry {
    shared: Option<Arc<Shared>>,
    holders: usize,
}

/// State built once per generation and shared by every holder
#[derive(Debug)]
struct Shared {
    generation: usize,
    started: Instant,
    tls: rustls::ClientConfig,
}

/// A hold on the shared transport state. Cloning takes another hold;
/// dropping the last one releases the state.
///
/// Holds no per-call data; every request gets its own handle from
/// [`TransportContext::handle`].
#[derive(Debug)]
pub struct TransportContext {
    shared: Arc<Shared>,
}

/// Counters describing context lifetimes in this process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextStats {
    pub initializations: usize,
    pub cleanups: usize,
    pub holders: usize,
    pub live: bool,
}

impl TransportContext {
    /// Take a hold on the live context, initializing it if nobody holds one
    pub fn acquire() -> Result<Self, TransportError> {
        let mut registry = REGISTRY.lock();

        let shared = match &registry.shared {
            Some(shared) => shared.clone(),
            None => {
                let shared = Arc::new(Shared {
                    generation: INITIALIZATIONS.load(Ordering::SeqCst) + 1,
                    started: Instant::now(),
                    tls: tls_config()?,
                });
                INITIALIZATIONS.fetch_add(1, Ordering::SeqCst);
                tracing::debug!(generation = shared.generation, "transport context initialized");

                registry.shared = Some(shared.clone());
                shared
            }
        };

        registry.holders += 1;
        Ok(Self { shared })
    }

    /// Build a fresh blocking HTTP client for a single request
    pub fn handle(
        &self,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<reqwest::blocking::Client, TransportError> {
        reqwest::blocking::Client::builder()
            .use_preconfigured_tls(self.shared.tls.clone())
            .timeout(timeout)
            .user_agent(user_agent)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(TransportError::Client)
    }

    pub fn generation(&self) -> usize {
        self.shared.generation
    }

    pub fn stats() -> ContextStats {
        let registry = REGISTRY.lock();
        ContextStats {
            initializations: INITIALIZATIONS.load(Ordering::SeqCst),
            cleanups: CLEANUPS.load(Ordering::SeqCst),
            holders: registry.holders,
            live: registry.shared.is_some(),
        }
    }
}

/// TLS client settings: ring provider, safe protocol versions, webpki roots
fn tls_config() -> Result<rustls::ClientConfig, TransportError> {
    let roots = rustls::RootCertStore::from_iter(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let config = rustls::ClientConfig::builder_with_provider(Arc::new(
        rustls::crypto::ring::default_provider(),
    ))
    .with_safe_default_protocol_versions()
    .map_err(TransportError::Tls)?
    .with_root_certificates(roots)
    .with_no_client_auth();

    Ok(config)
}

impl Clone for TransportContext {
    fn clone(&self) -> Self {
        REGISTRY.lock().holders += 1;
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl Drop for TransportContext {
    fn drop(&mut self) {
        let mut registry = REGISTRY.lock();
        registry.holders -= 1;

        if registry.holders == 0 {
            if let Some(shared) = registry.shared.take() {
                CLEANUPS.fetch_add(1, Ordering::SeqCst);
                tracing::debug!(
                    generation = shared.generation,
                    uptime_ms = shared.started.elapsed().as_millis() as u64,
                    "transport context released"
                );
            }
        }
    }
}
