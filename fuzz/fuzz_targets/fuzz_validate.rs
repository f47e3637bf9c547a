#![no_main]

use arbitrary::Arbitrary;
use asciicheck::{
    IterSource, ScanResult, StreamValidator, chunk_utils::split_at_cuts, is_ascii,
    scanner::scan_scalar, validate, validate_at, validate_stream,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    origin: usize,
    cuts: Vec<usize>,
    data: Vec<u8>,
}

fn check(input: &Input) {
    let data = &input.data;
    let baseline = scan_scalar(data);

    assert_eq!(validate(data), baseline);
    assert_eq!(validate_at(data, input.origin), baseline);
    assert_eq!(is_ascii(data), baseline == ScanResult::Valid);

    let blocks = split_at_cuts(data, &input.cuts);
    let Ok(outcome) = validate_stream(IterSource::new(blocks.iter().copied()));
    assert_eq!(outcome.result, baseline);

    let mut validator = StreamValidator::new();
    for block in &blocks {
        if !validator.feed(block).is_valid() {
            break;
        }
    }
    assert_eq!(validator.finish(), outcome);
}

fuzz_target!(|input: Input| check(&input));
