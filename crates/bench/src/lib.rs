use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLE_SIZE: usize = 10;
const WARM_UP_MS: u64 = 80;
const MEASURE_MS_SMALL: u64 = 120;
const MEASURE_MS_LARGE: u64 = 300;
const MEASURE_MS_XL: u64 = 500;
const RNG_SEED: u64 = 0x5EED_2026;

/// Input shapes the sort benchmarks are run against.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Distribution {
    RandomUniform,
    FewDistinct,
    NearlySorted1pctSwaps,
    Descending,
}

pub const DISTRIBUTIONS: [Distribution; 4] = [
    Distribution::RandomUniform,
    Distribution::FewDistinct,
    Distribution::NearlySorted1pctSwaps,
    Distribution::Descending,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::FewDistinct => "few_distinct",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
            Self::Descending => "descending",
        }
    }

    fn salt(self) -> u64 {
        match self {
            Self::RandomUniform => 11,
            Self::FewDistinct => 12,
            Self::NearlySorted1pctSwaps => 13,
            Self::Descending => 14,
        }
    }
}

/// Scales sampling to the input size so large inputs stay within budget.
pub fn apply_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(WARM_UP_MS));
    if size <= 16384 {
        group.sampling_mode(SamplingMode::Auto);
        group.measurement_time(Duration::from_millis(MEASURE_MS_SMALL));
    } else if size <= 65536 {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(MEASURE_MS_LARGE));
    } else {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(MEASURE_MS_XL));
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn seed_for(dist: Distribution, size: usize, salt: u64) -> u64 {
    mix_seed(RNG_SEED ^ (dist.salt() << 48) ^ (size as u64) ^ salt)
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

pub fn generate_dataset(dist: Distribution, size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size);

    match dist {
        Distribution::RandomUniform => {
            for _ in 0..size {
                data.push(rng.random::<i64>());
            }
        }
        Distribution::FewDistinct => {
            for _ in 0..size {
                data.push(rng.random_range(0..16_i64));
            }
        }
        Distribution::NearlySorted1pctSwaps => {
            data.extend(0..size as i64);
            let swaps = (size / 100).max(1);
            for _ in 0..swaps {
                let a = rng.random_range(0..size);
                let b = rng.random_range(0..size);
                data.swap(a, b);
            }
        }
        Distribution::Descending => {
            data.extend((0..size as i64).rev());
        }
    }

    data
}
