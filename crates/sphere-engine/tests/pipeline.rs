//! The consumer-side data flow: a gateway result's Connes distance matrix
//! feeds the classical-scaling embedder for display.

use std::sync::Arc;

use async_trait::async_trait;

use sphere_engine::{
    ComputeOutcome, EngineFault, EngineHandle, EngineLoader, LoadError, SpectralEngine,
    SpectralGateway, SpectralTripleResult,
};
use sphere_mds::{embed_distances, normalize_to_unit_box};

/// Engine double returning a fixed three-state triple whose Connes distances
/// form a 3-4-5 triangle.
struct TriangleEngine;

#[async_trait]
impl SpectralEngine for TriangleEngine {
    async fn compute_spectral_triple(
        &self,
        _matrix: &[f64],
        n: usize,
        epsilon: f64,
    ) -> Result<SpectralTripleResult, EngineFault> {
        Ok(SpectralTripleResult {
            n,
            stationary: vec![1.0 / n as f64; n],
            eigenvalues: vec![0.0, 0.4, 1.1],
            dirac: vec![0.0; n * n],
            distances: vec![
                0.0, 3.0, 4.0, //
                3.0, 0.0, 5.0, //
                4.0, 5.0, 0.0,
            ],
            conditioning: sphere_engine::ConditioningReport {
                spectral_gap: 0.4,
                epsilon,
                max_commutator_norm: 2.0,
                ill_conditioned: false,
            },
        })
    }
}

struct TriangleLoader;

#[async_trait]
impl EngineLoader for TriangleLoader {
    async fn load(&self) -> Result<Arc<dyn SpectralEngine>, LoadError> {
        Ok(Arc::new(TriangleEngine))
    }
}

#[tokio::test]
async fn distances_flow_from_gateway_into_the_embedding() {
    let gateway = SpectralGateway::new(Arc::new(EngineHandle::new(Arc::new(TriangleLoader))));
    let transition = vec![
        vec![0.8, 0.1, 0.1],
        vec![0.2, 0.6, 0.2],
        vec![0.3, 0.3, 0.4],
    ];

    let outcome = gateway.compute(&transition, 1e-3).await.expect("compute");
    let result = match outcome {
        ComputeOutcome::Fresh(result) => result,
        other => panic!("expected a fresh result, got {other:?}"),
    };
    assert_eq!(result.validate_shape(), Ok(()));

    let mut points =
        embed_distances(result.distances_matrix(), result.n).expect("embedding");
    assert_eq!(points.len(), 3);

    // The 3-4-5 triangle is exactly Euclidean; its distances reconstruct.
    for i in 0..3 {
        for j in 0..3 {
            let got = points[i].distance_to(&points[j]);
            let want = result.distance_between(i, j).unwrap();
            assert!(
                (got - want).abs() < 1e-9,
                "({i},{j}): reconstructed {got}, expected {want}"
            );
        }
    }

    normalize_to_unit_box(&mut points);
    for p in &points {
        for value in [p.x, p.y, p.z] {
            assert!((-1e-12..=1.0 + 1e-12).contains(&value), "{p:?}");
        }
    }
}
