use crate::bit_reader::BitReader;
use crate::ir_code::IrCode;
use crate::pulse::{Modulation, Pulse};
use crate::Result;

/// Lazily expands one [`IrCode`] into its `pair_count` pulses, in transmission order.
///
/// Each step reads one `index_width`-bit value from the packed stream and resolves it through
/// the code's timing table. The code's carrier setting is attached to every pulse. After the
/// first error the iterator is exhausted.
#[derive(Clone, Debug)]
pub struct CodeDecoder<'a> {
    code: &'a IrCode,
    reader: BitReader<'a>,
    modulation: Modulation,
    remaining: u8,
}

impl<'a> CodeDecoder<'a> {
    #[must_use]
    pub fn new(code: &'a IrCode) -> Self {
        Self {
            code,
            reader: BitReader::new(code.packed_indices()),
            modulation: Modulation::from(code.carrier()),
            remaining: code.pair_count(),
        }
    }

    /// Pulses not yet produced.
    #[must_use]
    pub const fn remaining(&self) -> u8 {
        self.remaining
    }

    /// Flush the cursor's leftover bits and hand it back, so the caller can see where decoding
    /// stopped. The next code must start from a fresh cursor at its own byte 0.
    #[must_use]
    pub fn finish(mut self) -> BitReader<'a> {
        self.reader.reset();
        self.reader
    }

    fn next_pulse(&mut self) -> Result<Pulse> {
        let index = self.reader.read_bits(self.code.index_width())?;
        let pair = self.code.timing_pair(index)?;
        Ok(Pulse {
            pair,
            modulation: self.modulation,
        })
    }
}

impl Iterator for CodeDecoder<'_> {
    type Item = Result<Pulse>;

    fn next(&mut self) -> Option<Self::Item> {
        self.remaining = self.remaining.checked_sub(1)?;
        let pulse = self.next_pulse();
        if pulse.is_err() {
            self.remaining = 0;
        }
        Some(pulse)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(usize::from(self.remaining)))
    }
}

impl core::iter::FusedIterator for CodeDecoder<'_> {}
