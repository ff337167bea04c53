// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpectralSphere — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Request orchestration: one shared engine load, fingerprint short-circuit,
//! and last-request-wins supersession.
//!
//! [`EngineHandle`] owns the load state machine (unloaded → loading → ready
//! or failed). It is an explicit value passed to whoever needs the engine –
//! construct one per process and share it by reference; nothing here is a
//! hidden global. The first caller triggers the load, concurrent callers
//! await the same in-flight attempt, and the outcome – success or failure –
//! is cached for everyone after.
//!
//! [`SpectralGateway`] applies the request policy on top: a request whose
//! fingerprint matches the last completed evaluation is answered from the
//! cache without touching the engine, and a request that is superseded by a
//! newer one before it settles has its result (or error) discarded rather
//! than applied. Supersession is cooperative – the engine call itself is not
//! interrupted, only its delivery is suppressed.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::engine::SpectralEngine;
use crate::error::{GatewayError, GatewayResult};
use crate::fingerprint::Fingerprint;
use crate::loader::{EngineLoader, LoadError};
use crate::result::SpectralTripleResult;

/// Lazily loaded, process-shared engine handle.
pub struct EngineHandle {
    loader: Arc<dyn EngineLoader>,
    slot: OnceCell<Result<Arc<dyn SpectralEngine>, LoadError>>,
}

impl EngineHandle {
    pub fn new(loader: Arc<dyn EngineLoader>) -> Self {
        Self {
            loader,
            slot: OnceCell::new(),
        }
    }

    /// Await the engine, triggering the load if nobody has yet.
    ///
    /// At most one load attempt is ever in flight; every caller observes the
    /// same eventual outcome. A cached failure stays failed – there is no
    /// automatic retry.
    pub async fn engine(&self) -> Result<Arc<dyn SpectralEngine>, LoadError> {
        let outcome = self
            .slot
            .get_or_init(|| async {
                info!("loading spectral engine module");
                let loaded = self.loader.load().await;
                match &loaded {
                    Ok(_) => info!("spectral engine ready"),
                    Err(error) => warn!(%error, "spectral engine load failed"),
                }
                loaded
            })
            .await;
        outcome.clone()
    }

    /// True once a load attempt has settled successfully.
    pub fn is_ready(&self) -> bool {
        matches!(self.slot.get(), Some(Ok(_)))
    }

    /// True once a load attempt has settled in failure.
    pub fn is_failed(&self) -> bool {
        matches!(self.slot.get(), Some(Err(_)))
    }
}

/// How a compute request resolved.
#[derive(Clone, Debug)]
pub enum ComputeOutcome {
    /// A fresh engine evaluation for this input.
    Fresh(Arc<SpectralTripleResult>),
    /// The last completed evaluation already covers this exact input; the
    /// engine was not re-invoked.
    Cached(Arc<SpectralTripleResult>),
    /// A newer request took over before this one settled. Its result and
    /// error were discarded; this is a policy outcome, not a failure.
    Superseded,
}

impl ComputeOutcome {
    /// The result carried by a fresh or cached outcome.
    pub fn result(&self) -> Option<&Arc<SpectralTripleResult>> {
        match self {
            ComputeOutcome::Fresh(result) | ComputeOutcome::Cached(result) => Some(result),
            ComputeOutcome::Superseded => None,
        }
    }
}

struct Evaluated {
    fingerprint: Fingerprint,
    result: Arc<SpectralTripleResult>,
}

/// Gateway applying fingerprint and supersession policy over an
/// [`EngineHandle`].
pub struct SpectralGateway {
    handle: Arc<EngineHandle>,
    generation: AtomicU64,
    latest: Mutex<Option<Evaluated>>,
}

impl SpectralGateway {
    pub fn new(handle: Arc<EngineHandle>) -> Self {
        Self {
            handle,
            generation: AtomicU64::new(0),
            latest: Mutex::new(None),
        }
    }

    /// Compute the spectral triple for `(matrix, epsilon)`.
    ///
    /// Settles to exactly one of: a fresh result, the cached result for an
    /// identical fingerprint, a superseded outcome, or an error from the
    /// taxonomy ([`GatewayError`]). Row-stochasticity of `matrix` is not
    /// checked here; the engine sees whatever the caller supplied.
    pub async fn compute(
        &self,
        matrix: &[Vec<f64>],
        epsilon: f64,
    ) -> GatewayResult<ComputeOutcome> {
        let fingerprint = Fingerprint::of(matrix, epsilon);
        if let Some(hit) = self.lookup(&fingerprint) {
            debug!("fingerprint unchanged; serving cached spectral triple");
            return Ok(ComputeOutcome::Cached(hit));
        }

        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let engine = match self.handle.engine().await {
            Ok(engine) => engine,
            Err(load_error) => {
                if self.is_stale(ticket) {
                    debug!(ticket, "superseded request discarding load failure");
                    return Ok(ComputeOutcome::Superseded);
                }
                return Err(GatewayError::EngineUnavailable(load_error));
            }
        };

        let n = matrix.len();
        let flat = flatten_row_major(matrix);
        let computed = engine.compute_spectral_triple(&flat, n, epsilon).await;

        if self.is_stale(ticket) {
            debug!(ticket, "stale spectral request discarded");
            return Ok(ComputeOutcome::Superseded);
        }

        let raw = computed.map_err(|fault| GatewayError::ComputationFailed {
            message: fault.to_string(),
        })?;
        raw.validate_shape()
            .map_err(|violation| GatewayError::ComputationFailed {
                message: violation.to_string(),
            })?;

        let result = Arc::new(raw);
        let mut latest = self.latest.lock().unwrap();
        *latest = Some(Evaluated {
            fingerprint,
            result: Arc::clone(&result),
        });
        Ok(ComputeOutcome::Fresh(result))
    }

    /// Most recently applied result, if any request has completed.
    pub fn latest_result(&self) -> Option<Arc<SpectralTripleResult>> {
        self.latest
            .lock()
            .unwrap()
            .as_ref()
            .map(|evaluated| Arc::clone(&evaluated.result))
    }

    fn lookup(&self, fingerprint: &Fingerprint) -> Option<Arc<SpectralTripleResult>> {
        let latest = self.latest.lock().unwrap();
        latest
            .as_ref()
            .filter(|evaluated| &evaluated.fingerprint == fingerprint)
            .map(|evaluated| Arc::clone(&evaluated.result))
    }

    fn is_stale(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) != ticket
    }
}

/// Flatten a transition matrix row-major, as the engine contract requires.
///
/// Rows are concatenated as supplied; a ragged matrix flattens without
/// complaint and the engine's own verdict on it rides back as a computation
/// failure.
pub fn flatten_row_major(matrix: &[Vec<f64>]) -> Vec<f64> {
    let mut flat = Vec::with_capacity(matrix.len() * matrix.len());
    for row in matrix {
        flat.extend_from_slice(row);
    }
    flat
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_is_row_major() {
        let matrix = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert_eq!(flatten_row_major(&matrix), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn flatten_tolerates_ragged_rows() {
        let matrix = vec![vec![1.0], vec![2.0, 3.0]];
        assert_eq!(flatten_row_major(&matrix), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn outcome_result_accessor() {
        assert!(ComputeOutcome::Superseded.result().is_none());
    }
}
