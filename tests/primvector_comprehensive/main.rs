//! PrimVector Comprehensive Test Suite
//!
//! End-to-end tests through the `primvec` facade: domain checking on append,
//! construction, the byte format, sorting, projection sorting and slicing.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test primvector_comprehensive
//!
//! # Run projection tests only
//! cargo test --test primvector_comprehensive projection::
//! ```

use primvec::prelude::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Test modules
pub mod append_domain;
pub mod projection;
pub mod sorting;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Install a test-writer subscriber so library `debug!` output shows on failure
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Seeded RNG for reproducible randomized tests
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random in-domain integer vector of length `n`
pub fn random_vector(rng: &mut StdRng, typecode: TypeCode, n: usize) -> PrimVector {
    let mut v = PrimVector::with_capacity(typecode, n);
    match typecode.domain() {
        Domain::Int { min, max } => {
            for _ in 0..n {
                v.append(rng.gen_range(min..=max)).expect("in-domain value");
            }
        }
        Domain::Unbounded => {
            for _ in 0..n {
                v.append(rng.gen_range(-1.0e6f64..1.0e6)).expect("float value");
            }
        }
    }
    v
}

/// Elements of `v` as boundary scalars
pub fn scalars(v: &PrimVector) -> Vec<Scalar> {
    v.iter().collect()
}

/// Strategy over every type code
pub fn any_typecode() -> impl Strategy<Value = TypeCode> {
    prop::sample::select(TypeCode::all().to_vec())
}

/// Strategy over vectors of any type code with in-domain elements
pub fn any_vector(max_len: usize) -> impl Strategy<Value = PrimVector> {
    any_typecode().prop_flat_map(move |tc| {
        let values: BoxedStrategy<Vec<Scalar>> = match tc.domain() {
            Domain::Int { min, max } => {
                prop::collection::vec((min..=max).prop_map(Scalar::Int), 0..max_len).boxed()
            }
            Domain::Unbounded => prop::collection::vec(
                any::<f32>().prop_map(|f| Scalar::Float(f64::from(f))),
                0..max_len,
            )
            .boxed(),
        };
        values.prop_map(move |vals| {
            PrimVector::try_from_iter(tc, vals).expect("generated values are in domain")
        })
    })
}
