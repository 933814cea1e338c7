use criterion::*;
use rand::prelude::*;

use distances::{sparse::minkowski, Number};

/// A random sparse vector over `dimensionality` indices with the given density.
fn random_sparse(dimensionality: usize, density: f64, rng: &mut StdRng) -> Vec<(usize, f32)> {
    (0..dimensionality)
        .filter_map(|i| rng.gen_bool(density).then(|| (i, 20.0 * f32::next_random(rng) - 10.0)))
        .collect()
}

fn sparse_lp_norms(c: &mut Criterion) {
    let mut group = c.benchmark_group("SparseF32");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for d in 3..=6 {
        let dimensionality = 10_usize.pow(d);
        let mut rng = StdRng::seed_from_u64(u64::from(d));
        let x = random_sparse(dimensionality, 0.05, &mut rng);
        let y = random_sparse(dimensionality, 0.05, &mut rng);

        for p in [1, 2] {
            let metric = minkowski(p);
            let id = BenchmarkId::new(format!("L{p}"), dimensionality);
            group.bench_with_input(id, &dimensionality, |b, _| b.iter(|| black_box(metric(&x, &y))));
        }
    }
    group.finish();
}

criterion_group!(benches, sparse_lp_norms);
criterion_main!(benches);
