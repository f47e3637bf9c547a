use alloc::{boxed::Box, vec::Vec};

use quickcheck::{Arbitrary, Gen};

mod sentences;

/// Number of quickcheck cases, scaled for CI and miri.
pub(crate) fn iterations() -> u64 {
    #[cfg(not(miri))]
    let tests = if cfg!(feature = "test-fast") {
        100
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    };
    #[cfg(miri)]
    let tests = 10;

    tests
}

/// Mostly-ASCII bytes with the occasional high byte, so that both valid
/// buffers and late offenders show up often.
#[derive(Debug, Clone)]
pub(crate) struct AsciiHeavy(pub Vec<u8>);

impl Arbitrary for AsciiHeavy {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % (4 * g.size() + 1);
        let bytes = (0..len)
            .map(|_| {
                let b = u8::arbitrary(g) & 0x7F;
                if u8::arbitrary(g) < 4 { b | 0x80 } else { b }
            })
            .collect();
        AsciiHeavy(bytes)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(AsciiHeavy))
    }
}

/// Lowest index of a non-ASCII byte, computed the obvious way.
pub(crate) fn first_offender(bytes: &[u8]) -> Option<usize> {
    bytes.iter().position(|b| !b.is_ascii())
}
