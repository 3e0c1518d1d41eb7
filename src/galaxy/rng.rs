//! Deterministic, cross-platform-reproducible pseudo-random stream.
//!
//! The galaxy generator's reproducibility guarantee (I2) depends on every
//! host platform producing bitwise-identical draws for a given seed. That
//! rules out `rand`'s default generators, which make no cross-version
//! stability promise. This module pins the classic MT19937 algorithm via
//! `rand_mt` and fixes, once and for all, the two details the generator
//! family leaves open: how a 64-bit seed becomes engine state, and how raw
//! 32-bit words become a uniform `f64`.

use rand_mt::Mt19937GenRand32;

/// Two independent Mersenne streams, as required by the data model: one
/// used for coordinate generation, one reserved for future non-generation
/// (AI) consumers. Only `deterministic` is read by anything in this crate
/// today.
pub struct DeterministicRng {
    deterministic: Mt19937GenRand32,
    #[allow(dead_code)]
    ai: Mt19937GenRand32,
}

impl DeterministicRng {
    /// Builds the stream pair from two seeds. Only `seed` feeds coordinate
    /// generation; `ai_seed` is threaded through for parity with the data
    /// model but is not consumed anywhere in this crate.
    pub fn new(seed: u64, ai_seed: u64) -> Self {
        DeterministicRng {
            deterministic: seed_engine(seed),
            ai: seed_engine(ai_seed),
        }
    }

    /// Uniform real in `[0, 1)` with a 53-bit mantissa, using the
    /// reference MT19937 `genrand_res53` construction: two 32-bit draws
    /// combined as `(a >> 5) * 2^26 + (b >> 6)) / 2^53`. This is the same
    /// transform CPython's `random.random()` uses, and it is the fixed
    /// choice this crate documents per the RNG contract.
    pub fn next_double(&mut self) -> f64 {
        let a = (self.deterministic.next_u32() >> 5) as f64;
        let b = (self.deterministic.next_u32() >> 6) as f64;
        (a * 67_108_864.0 + b) / 9_007_199_254_740_992.0
    }

    /// Uniform integer in the closed range `[lo, hi]`.
    pub fn next_int_range(&mut self, lo: i64, hi: i64) -> i64 {
        debug_assert!(lo <= hi, "next_int_range: empty range [{lo}, {hi}]");
        let span = (hi - lo + 1) as f64;
        lo + (self.next_double() * span).floor() as i64
    }

    /// Normally distributed draw via the Box-Muller transform, consuming
    /// two uniform draws from the deterministic stream.
    pub fn next_normal(&mut self, mu: f64, sigma: f64) -> f64 {
        let u1 = self.next_double().max(f64::MIN_POSITIVE);
        let u2 = self.next_double();
        let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
        mu + sigma * z
    }
}

/// Seeds an MT19937 engine from a 64-bit value by splitting it into two
/// little-endian 32-bit words and seeding through the array form
/// (`init_by_array`), the same approach NumPy's legacy `RandomState` uses
/// to extend the 32-bit Mersenne Twister to wider seeds.
fn seed_engine(seed: u64) -> Mt19937GenRand32 {
    let key = [seed as u32, (seed >> 32) as u32];
    Mt19937GenRand32::new_with_key(key.into_iter())
}
