/// Cyclic selector over the ascending permitted values of one field.
///
/// Works like a digit of a mixed-radix counter whose digits are indexes into
/// an arbitrary sorted set: moving past the largest value wraps to the
/// smallest and reports a carry to the next coarser field.
///
/// An empty rotor reports a carry on every movement; [`value`](Rotor::value)
/// must not be called on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Rotor {
    values: Vec<u8>,
    position: usize,
}

impl Rotor {
    /// Caller is responsible to pass values sorted ascending without duplicates.
    #[inline]
    pub(crate) fn new(values: Vec<u8>) -> Self {
        debug_assert!(values.windows(2).all(|pair| pair[0] < pair[1]), "unsorted rotor values");
        Self { values, position: 0 }
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Selects the smallest value. Returns `true` only for an empty rotor.
    #[inline]
    pub(crate) fn reset(&mut self) -> bool {
        self.position = 0;
        self.is_empty()
    }

    /// Selects the smallest value not less than `target`.
    ///
    /// Returns `true` (carry) if every value is less than `target`; the rotor wraps to its smallest value then.
    pub(crate) fn set(&mut self, target: u8) -> bool {
        match self.values.iter().position(|value| *value >= target) {
            Some(position) => {
                self.position = position;
                false
            }
            None => {
                self.position = 0;
                true
            }
        }
    }

    /// Advances to the next value, wrapping to the first one with a carry.
    pub(crate) fn increment(&mut self) -> bool {
        if self.position + 1 < self.values.len() {
            self.position += 1;
            false
        } else {
            self.position = 0;
            true
        }
    }

    /// All values the rotor cycles through.
    #[inline]
    pub(crate) fn values(&self) -> &[u8] {
        &self.values
    }

    /// Currently selected value.
    #[inline]
    pub(crate) fn value(&self) -> u8 {
        self.values[self.position]
    }
}

/// Year counter: grows without bound and never wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub(crate) struct YearRotor {
    value: i32,
}

impl YearRotor {
    #[inline]
    pub(crate) fn set(&mut self, target: i32) {
        self.value = target;
    }

    #[inline]
    pub(crate) fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    #[inline]
    pub(crate) fn value(&self) -> i32 {
        self.value
    }
}
