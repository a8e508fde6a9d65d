#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use presence_test::{check_sample, Sample};

#[derive(Arbitrary, Debug)]
enum Input {
    Int(Option<i64>, Option<i64>),
    Float(Option<f64>, Option<f64>),
    Text(Option<String>, Option<String>),
    Flag(Option<bool>, Option<bool>),
}

impl From<Input> for Sample {
    fn from(input: Input) -> Self {
        match input {
            Input::Int(value, fallback) => Sample::Int { value, fallback },
            Input::Float(value, fallback) => Sample::Float { value, fallback },
            Input::Text(value, fallback) => Sample::Text { value, fallback },
            Input::Flag(value, fallback) => Sample::Flag { value, fallback },
        }
    }
}

fuzz_target!(|input: Input| {
    let sample = Sample::from(input);
    let broken = check_sample(&sample);
    assert!(broken.is_empty(), "laws {:?} broken by {:?}", broken, sample);
});
