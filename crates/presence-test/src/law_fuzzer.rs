//! Law Fuzzer - Property-based checking of the optional contract
//!
//! Tests:
//! - Presence of falsy-but-meaningful values
//! - Shared absent value
//! - Fallback rules for `or`
//! - `or_null` / `or_undefined` agreement
//! - Transform identity and short-circuiting
//! - Round trips through `or_null`

use presence_core::legacy::diverges_from_legacy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

/// Fuzzer configuration
#[derive(Clone, Debug)]
pub struct FuzzerConfig {
    /// Number of samples to generate
    pub sample_count: usize,
    /// Probability that a sampled value is absent (0.0 - 1.0)
    pub absent_prob: f64,
    /// Probability that the fallback is absent
    pub fallback_absent_prob: f64,
    /// Probability that a present value is falsy (0, "", false, NaN)
    pub zero_bias: f64,
    /// Random seed
    pub seed: u64,
}

impl Default for FuzzerConfig {
    fn default() -> Self {
        FuzzerConfig {
            sample_count: 1000,
            absent_prob: 0.3,
            fallback_absent_prob: 0.3,
            zero_bias: 0.2,
            seed: 42,
        }
    }
}

impl FuzzerConfig {
    /// Light fuzzing for quick tests
    pub fn light() -> Self {
        FuzzerConfig {
            sample_count: 100,
            absent_prob: 0.3,
            fallback_absent_prob: 0.3,
            zero_bias: 0.2,
            seed: 42,
        }
    }

    /// Heavy fuzzing for thorough testing
    pub fn heavy() -> Self {
        FuzzerConfig {
            sample_count: 10000,
            absent_prob: 0.4,
            fallback_absent_prob: 0.4,
            zero_bias: 0.3,
            seed: 42,
        }
    }

    /// Mostly absent and falsy inputs
    pub fn adversarial() -> Self {
        FuzzerConfig {
            sample_count: 5000,
            absent_prob: 0.5,
            fallback_absent_prob: 0.7,
            zero_bias: 0.6,
            seed: 42,
        }
    }
}

/// A raw input together with the fallback offered to `or`
#[derive(Clone, Debug, PartialEq)]
pub enum Sample {
    Int {
        value: Option<i64>,
        fallback: Option<i64>,
    },
    Float {
        value: Option<f64>,
        fallback: Option<f64>,
    },
    Text {
        value: Option<String>,
        fallback: Option<String>,
    },
    Flag {
        value: Option<bool>,
        fallback: Option<bool>,
    },
}

impl Sample {
    pub fn is_present(&self) -> bool {
        match self {
            Sample::Int { value, .. } => value.is_some(),
            Sample::Float { value, .. } => value.is_some(),
            Sample::Text { value, .. } => value.is_some(),
            Sample::Flag { value, .. } => value.is_some(),
        }
    }

    /// Would the legacy truthy rule classify the value differently?
    pub fn diverges_from_legacy(&self) -> bool {
        match self {
            Sample::Int { value, .. } => diverges_from_legacy(value),
            Sample::Float { value, .. } => diverges_from_legacy(value),
            Sample::Text { value, .. } => diverges_from_legacy(value),
            Sample::Flag { value, .. } => diverges_from_legacy(value),
        }
    }
}

/// A law of the optional contract
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Law {
    PresentGetIdentity,
    OfRejectsAbsent,
    AbsentShared,
    PresentOrIgnoresFallback,
    AbsentOrFollowsFallback,
    OrNullAgreement,
    TransformMatchesDirect,
    AbsentTransformSilent,
    MissingTransformRejected,
    RoundTrip,
}

impl Law {
    pub fn name(self) -> &'static str {
        match self {
            Law::PresentGetIdentity => "present-get-identity",
            Law::OfRejectsAbsent => "of-rejects-absent",
            Law::AbsentShared => "absent-shared",
            Law::PresentOrIgnoresFallback => "present-or-ignores-fallback",
            Law::AbsentOrFollowsFallback => "absent-or-follows-fallback",
            Law::OrNullAgreement => "or-null-agreement",
            Law::TransformMatchesDirect => "transform-matches-direct",
            Law::AbsentTransformSilent => "absent-transform-silent",
            Law::MissingTransformRejected => "missing-transform-rejected",
            Law::RoundTrip => "round-trip",
        }
    }
}

/// A broken law and the sample that broke it
#[derive(Clone, Debug)]
pub struct LawViolation {
    pub law: Law,
    pub sample: Sample,
}

/// Fuzzing result
#[derive(Debug, Default)]
pub struct FuzzResult {
    pub samples: usize,
    pub present: usize,
    pub absent: usize,
    /// Samples the legacy truthy rule would have classified differently
    pub legacy_divergences: usize,
    pub violations: Vec<LawViolation>,
}

impl FuzzResult {
    pub fn new() -> Self {
        FuzzResult::default()
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Law fuzzer
pub struct LawFuzzer {
    config: FuzzerConfig,
    rng: StdRng,
}

impl LawFuzzer {
    /// Create a new fuzzer
    pub fn new(config: FuzzerConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        LawFuzzer { config, rng }
    }

    pub fn config(&self) -> &FuzzerConfig {
        &self.config
    }

    /// Run the fuzzer
    pub fn run(&mut self) -> FuzzResult {
        let mut result = FuzzResult::new();

        for _ in 0..self.config.sample_count {
            let sample = self.generate_sample();

            result.samples += 1;
            if sample.is_present() {
                result.present += 1;
            } else {
                result.absent += 1;
            }
            if sample.diverges_from_legacy() {
                result.legacy_divergences += 1;
            }

            for law in check_sample(&sample) {
                warn!(law = law.name(), ?sample, "optional law violated");
                result.violations.push(LawViolation {
                    law,
                    sample: sample.clone(),
                });
            }
        }

        debug!(
            samples = result.samples,
            present = result.present,
            absent = result.absent,
            legacy_divergences = result.legacy_divergences,
            violations = result.violations.len(),
            "law fuzz run complete"
        );

        result
    }

    /// Generate a random sample
    fn generate_sample(&mut self) -> Sample {
        let absent_prob = self.config.absent_prob;
        let fallback_absent_prob = self.config.fallback_absent_prob;

        match self.rng.gen_range(0..4) {
            0 => Sample::Int {
                value: self.maybe(absent_prob, Self::gen_int),
                fallback: self.maybe(fallback_absent_prob, Self::gen_int),
            },
            1 => Sample::Float {
                value: self.maybe(absent_prob, Self::gen_float),
                fallback: self.maybe(fallback_absent_prob, Self::gen_float),
            },
            2 => Sample::Text {
                value: self.maybe(absent_prob, Self::gen_text),
                fallback: self.maybe(fallback_absent_prob, Self::gen_text),
            },
            _ => Sample::Flag {
                value: self.maybe(absent_prob, Self::gen_flag),
                fallback: self.maybe(fallback_absent_prob, Self::gen_flag),
            },
        }
    }

    fn maybe<T>(&mut self, absent_prob: f64, gen: fn(&mut Self, bool) -> T) -> Option<T> {
        if self.rng.gen::<f64>() < absent_prob {
            return None;
        }
        let falsy = self.rng.gen::<f64>() < self.config.zero_bias;
        Some(gen(self, falsy))
    }

    fn gen_int(&mut self, falsy: bool) -> i64 {
        if falsy {
            0
        } else {
            // Zero is reached through `falsy` only
            match self.rng.gen::<i64>() {
                0 => 1,
                n => n,
            }
        }
    }

    fn gen_float(&mut self, falsy: bool) -> f64 {
        if falsy {
            match self.rng.gen_range(0..3) {
                0 => 0.0,
                1 => -0.0,
                _ => f64::NAN,
            }
        } else {
            let magnitude = self.rng.gen_range(1.0..1.0e9);
            if self.rng.gen::<bool>() {
                magnitude
            } else {
                -magnitude
            }
        }
    }

    fn gen_text(&mut self, falsy: bool) -> String {
        if falsy {
            return String::new();
        }
        let len = self.rng.gen_range(1..16);
        (0..len)
            .map(|_| self.rng.gen_range(b'a'..=b'z') as char)
            .collect()
    }

    fn gen_flag(&mut self, falsy: bool) -> bool {
        !falsy
    }
}

/// Check every law against one sample, returning the broken ones
pub fn check_sample(sample: &Sample) -> Vec<Law> {
    match sample {
        Sample::Int { value, fallback } => check_laws(*value, *fallback, properties::eq_default),
        Sample::Float { value, fallback } => {
            check_laws(*value, *fallback, properties::eq_float_bits)
        }
        Sample::Text { value, fallback } => {
            check_laws(value.clone(), fallback.clone(), properties::eq_default)
        }
        Sample::Flag { value, fallback } => check_laws(*value, *fallback, properties::eq_default),
    }
}

fn check_laws<T: Clone>(
    value: Option<T>,
    fallback: Option<T>,
    eq: fn(&T, &T) -> bool,
) -> Vec<Law> {
    let mut broken = Vec::new();

    match &value {
        Some(v) => {
            if !properties::present_get_identity(v, eq) {
                broken.push(Law::PresentGetIdentity);
            }
            if !properties::present_or_ignores_fallback(v, fallback.clone(), eq) {
                broken.push(Law::PresentOrIgnoresFallback);
            }
            if !properties::transform_matches_direct(v, eq) {
                broken.push(Law::TransformMatchesDirect);
            }
            if !properties::round_trip(v, eq) {
                broken.push(Law::RoundTrip);
            }
        }
        None => {
            if !properties::of_rejects_absent::<T>() {
                broken.push(Law::OfRejectsAbsent);
            }
            if !properties::absent_is_shared::<T>() {
                broken.push(Law::AbsentShared);
            }
        }
    }

    if !properties::absent_or_follows_fallback(fallback, eq) {
        broken.push(Law::AbsentOrFollowsFallback);
    }
    if !properties::or_null_agrees(value.clone(), eq) {
        broken.push(Law::OrNullAgreement);
    }
    if !properties::absent_transform_silent::<T>() {
        broken.push(Law::AbsentTransformSilent);
    }
    if !properties::missing_transform_rejected(value) {
        broken.push(Law::MissingTransformRejected);
    }

    broken
}

/// Property-based test helpers
pub mod properties {
    use presence_core::{absent, from_nullable, of, Absent, Optional, OptionalError};

    use crate::CallSpy;

    pub fn eq_default<T: PartialEq>(a: &T, b: &T) -> bool {
        a == b
    }

    /// Bitwise float equality, so NaN equals itself
    pub fn eq_float_bits(a: &f64, b: &f64) -> bool {
        a.to_bits() == b.to_bits()
    }

    fn optional_eq<T>(a: &Optional<T>, b: &Optional<T>, eq: fn(&T, &T) -> bool) -> bool {
        match (a.as_ref().or_null(), b.as_ref().or_null()) {
            (Some(x), Some(y)) => eq(x, y),
            (None, None) => true,
            _ => false,
        }
    }

    /// Property: `of(v).get() == v` and `of(v)` is present
    pub fn present_get_identity<T: Clone>(v: &T, eq: fn(&T, &T) -> bool) -> bool {
        match of(Some(v.clone())) {
            Ok(opt) => opt.is_present() && opt.get().is_ok_and(|got| eq(&got, v)),
            Err(_) => false,
        }
    }

    /// Property: `of(absent)` fails with `MustBePresent`
    pub fn of_rejects_absent<T>() -> bool {
        matches!(of(None::<T>), Err(OptionalError::MustBePresent))
    }

    /// Property: classifying an absent input yields the shared absent value
    pub fn absent_is_shared<T>() -> bool {
        match from_nullable(None::<T>) {
            Optional::Absent(a) => a == *Absent::shared(),
            Optional::Present(_) => false,
        }
    }

    /// Property: a present optional never consults the fallback
    pub fn present_or_ignores_fallback<T: Clone>(
        v: &T,
        fallback: Option<T>,
        eq: fn(&T, &T) -> bool,
    ) -> bool {
        match of(Some(v.clone())).and_then(|opt| opt.or(fallback)) {
            Ok(got) => eq(&got, v),
            Err(_) => false,
        }
    }

    /// Property: absent `or` yields the fallback, or fails when it is absent too
    pub fn absent_or_follows_fallback<T: Clone>(
        fallback: Option<T>,
        eq: fn(&T, &T) -> bool,
    ) -> bool {
        match (absent::<T>().or(fallback.clone()), fallback) {
            (Ok(got), Some(f)) => eq(&got, &f),
            (Err(OptionalError::AtLeastOnePresent), None) => true,
            _ => false,
        }
    }

    /// Property: `or_undefined` and `or_null` agree
    pub fn or_null_agrees<T: Clone>(raw: Option<T>, eq: fn(&T, &T) -> bool) -> bool {
        let null = from_nullable(raw.clone()).or_null();
        let undefined = from_nullable(raw).or_undefined();
        match (null, undefined) {
            (Some(a), Some(b)) => eq(&a, &b),
            (None, None) => true,
            _ => false,
        }
    }

    /// Property: `of(v).transform(f) == f(v)`, calling `f` exactly once
    pub fn transform_matches_direct<T: Clone>(v: &T, eq: fn(&T, &T) -> bool) -> bool {
        let spy = CallSpy::new();
        let f = |x: T| from_nullable(Some(x));

        let direct = f(v.clone());
        match of(Some(v.clone())) {
            Ok(opt) => {
                let via = opt.transform(spy.track(f));
                spy.calls() == 1 && optional_eq(&via, &direct, eq)
            }
            Err(_) => false,
        }
    }

    /// Property: absent `transform` returns absent and never calls `f`
    pub fn absent_transform_silent<T>() -> bool {
        let spy = CallSpy::new();
        let out = absent::<T>().transform(spy.track(|x: T| Some(x)));
        out.is_absent() && !spy.was_called()
    }

    /// Property: a missing mapping function is rejected on both variants
    pub fn missing_transform_rejected<T>(raw: Option<T>) -> bool {
        let missing: Option<fn(T) -> Option<T>> = None;
        matches!(
            from_nullable(raw).transform_with(missing),
            Err(OptionalError::MissingTransformFunction)
        )
    }

    /// Property: `from_nullable(of(v).or_null())` is `Present(v)`
    pub fn round_trip<T: Clone>(v: &T, eq: fn(&T, &T) -> bool) -> bool {
        match of(Some(v.clone())) {
            Ok(opt) => {
                let back = from_nullable(opt.or_null());
                back.is_present() && back.get().is_ok_and(|got| eq(&got, v))
            }
            Err(_) => false,
        }
    }
}
