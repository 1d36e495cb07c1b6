// Cluster-based key-point selection.
//
// Sentences are vectorized with TF-IDF and partitioned with k-means. Each
// non-empty cluster contributes one key point: its longest sentence by
// character count, earliest sentence on ties. Cluster ids keep centroid
// order, so key points come out in the order the algorithm produced the
// clusters — not re-sorted.
//
// Initialization is randomized (10 restarts, lowest intra-cluster variance
// wins), so when candidate partitions tie, two runs may pick different key
// points. That is accepted: callers that need exact reproducibility pass a
// fixed seed, and every run uses its own request-local RNG.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

use super::error::EngineError;
use super::vectorize;

/// Restarts per call — the best partition across all of them is kept.
const N_INIT: usize = 10;

/// Iteration cap per restart; assignments almost always stabilize sooner.
const MAX_ITERATIONS: usize = 100;

/// Pick one representative sentence per cluster.
///
/// `k` is clamped to the sentence count, so the result always has exactly
/// `min(k, sentences.len())` entries and no cluster starts empty. Fails with
/// `EngineError::InsufficientData` when `sentences` is empty.
///
/// `seed` pins the k-means initialization for reproducible output; `None`
/// draws a fresh OS-seeded generator for this call.
pub fn select_key_points(
    sentences: &[String],
    k: usize,
    seed: Option<u64>,
) -> Result<Vec<String>, EngineError> {
    if sentences.is_empty() {
        return Err(EngineError::InsufficientData);
    }

    let k = k.clamp(1, sentences.len());

    let vectorized = vectorize::vectorize(sentences);
    let rows: Vec<Vec<f64>> = vectorized
        .vectors
        .iter()
        .map(|v| v.to_dense(vectorized.vocabulary.len()))
        .collect();

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let mut best: Option<(Vec<usize>, f64)> = None;
    for _ in 0..N_INIT {
        let (assignments, inertia) = kmeans(&rows, k, &mut rng);
        let better = match &best {
            Some((_, best_inertia)) => inertia < *best_inertia,
            None => true,
        };
        if better {
            best = Some((assignments, inertia));
        }
    }
    // k >= 1 and N_INIT > 0, so a partition always exists
    let (assignments, _) = best.unwrap_or_default();

    // One pass per cluster id, in centroid order. A cluster can still end up
    // empty when duplicate points collapse onto one centroid — skip it.
    let mut key_points = Vec::new();
    for cluster in 0..k {
        let mut chosen: Option<(usize, usize)> = None; // (char length, index)
        for (i, &assigned) in assignments.iter().enumerate() {
            if assigned != cluster {
                continue;
            }
            let len = sentences[i].chars().count();
            let replace = match chosen {
                Some((best_len, _)) => len > best_len,
                None => true,
            };
            if replace {
                chosen = Some((len, i));
            }
        }
        if let Some((_, i)) = chosen {
            key_points.push(sentences[i].clone());
        }
    }

    Ok(key_points)
}

/// One k-means run: Forgy initialization from `rng`, Lloyd iterations until
/// assignments stabilize. Returns the assignment per row and the total
/// intra-cluster variance (inertia).
fn kmeans(rows: &[Vec<f64>], k: usize, rng: &mut StdRng) -> (Vec<usize>, f64) {
    let dims = rows.first().map(|r| r.len()).unwrap_or(0);

    // Forgy: k distinct rows as initial centroids.
    let mut centroids: Vec<Vec<f64>> = index::sample(rng, rows.len(), k)
        .iter()
        .map(|i| rows[i].clone())
        .collect();

    let mut assignments = vec![0usize; rows.len()];
    for _ in 0..MAX_ITERATIONS {
        let mut changed = false;
        for (i, row) in rows.iter().enumerate() {
            let nearest = nearest_centroid(row, &centroids);
            if assignments[i] != nearest {
                assignments[i] = nearest;
                changed = true;
            }
        }

        // Recompute centroids; an empty cluster keeps its previous position.
        let mut sums = vec![vec![0.0; dims]; k];
        let mut counts = vec![0usize; k];
        for (row, &cluster) in rows.iter().zip(&assignments) {
            counts[cluster] += 1;
            for (s, v) in sums[cluster].iter_mut().zip(row) {
                *s += v;
            }
        }
        for (cluster, sum) in sums.into_iter().enumerate() {
            if counts[cluster] > 0 {
                centroids[cluster] = sum
                    .into_iter()
                    .map(|s| s / counts[cluster] as f64)
                    .collect();
            }
        }

        if !changed {
            break;
        }
    }

    let inertia = rows
        .iter()
        .zip(&assignments)
        .map(|(row, &cluster)| squared_distance(row, &centroids[cluster]))
        .sum();

    (assignments, inertia)
}

fn nearest_centroid(row: &[f64], centroids: &[Vec<f64>]) -> usize {
    let mut nearest = 0;
    let mut best = f64::INFINITY;
    for (i, centroid) in centroids.iter().enumerate() {
        let d = squared_distance(row, centroid);
        if d < best {
            best = d;
            nearest = i;
        }
    }
    nearest
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}
