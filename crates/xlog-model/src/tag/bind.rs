use crate::{LogValue, Tag, TagSlot, TagSpec};

/// Outcome of pairing one recognized tag with an argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundArg<'a> {
    /// The argument matches the tag and can be logged.
    Bound { tag: Tag, value: &'a LogValue<'a> },
    /// The argument was consumed but its kind does not fit the tag.
    Mismatch { tag: Tag, value: &'a LogValue<'a> },
    /// The argument list ran out before this tag.
    Missing(Tag),
}

impl<'a> BoundArg<'a> {
    /// The value to write, if this position is loggable.
    #[inline]
    pub fn loggable(&self) -> Option<&'a LogValue<'a>> {
        match self {
            BoundArg::Bound { value, .. } => Some(*value),
            BoundArg::Mismatch { .. } | BoundArg::Missing(_) => None,
        }
    }
}

/// Result of walking a [`TagSpec`] against an argument list.
///
/// Unknown slots consume nothing. Each recognized tag consumes the next
/// argument in order; arguments left over after the last tag are counted in
/// [`Binding::unused`].
#[derive(Debug, Clone, PartialEq)]
pub struct Binding<'a> {
    entries: Vec<BoundArg<'a>>,
    skipped: usize,
    unused: usize,
}

impl<'a> Binding<'a> {
    #[inline]
    pub fn entries(&self) -> &[BoundArg<'a>] {
        &self.entries
    }

    /// Values that can be logged, in tag order.
    pub fn loggable(&self) -> impl Iterator<Item = &'a LogValue<'a>> + '_ {
        self.entries.iter().filter_map(BoundArg::loggable)
    }

    /// Number of unrecognized tag characters.
    #[inline]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Arguments never reached by a recognized tag.
    #[inline]
    pub fn unused(&self) -> usize {
        self.unused
    }

    pub fn mismatched(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, BoundArg::Mismatch { .. }))
            .count()
    }

    pub fn missing(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, BoundArg::Missing(_)))
            .count()
    }

    /// True when every slot was recognized and every argument matched.
    pub fn is_exact(&self) -> bool {
        self.skipped == 0 && self.unused == 0 && self.mismatched() == 0 && self.missing() == 0
    }
}

impl TagSpec {
    /// Pairs recognized tags with `args` in order.
    ///
    /// # Examples
    /// ```
    /// use xlog_model::{LogValue, TagSpec};
    ///
    /// let args = [LogValue::from(7), LogValue::from("ignored")];
    /// let binding = TagSpec::parse("ix").bind(&args);
    ///
    /// assert_eq!(binding.loggable().count(), 1);
    /// assert_eq!(binding.skipped(), 1);
    /// assert_eq!(binding.unused(), 1);
    /// ```
    pub fn bind<'a>(&self, args: &'a [LogValue<'a>]) -> Binding<'a> {
        let mut next = args.iter();
        let mut entries = Vec::with_capacity(self.len());
        let mut skipped = 0;

        for slot in self.slots() {
            let tag = match slot {
                TagSlot::Known(t) => *t,
                TagSlot::Unknown(_) => {
                    skipped += 1;
                    continue;
                }
            };
            let entry = match next.next() {
                Some(value) if tag.accepts(value) => BoundArg::Bound { tag, value },
                Some(value) => BoundArg::Mismatch { tag, value },
                None => BoundArg::Missing(tag),
            };
            entries.push(entry);
        }

        Binding {
            entries,
            skipped,
            unused: next.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_binding_logs_everything() {
        let args = [
            LogValue::from(42),
            LogValue::from("hello"),
            LogValue::from(3.14),
        ];
        let binding = TagSpec::parse("isd").bind(&args);

        assert!(binding.is_exact());
        assert_eq!(binding.loggable().count(), 3);
    }

    #[test]
    fn unknown_tag_does_not_consume_an_argument() {
        let args = [LogValue::from(1), LogValue::from(2)];
        let binding = TagSpec::parse("i?i").bind(&args);

        assert_eq!(binding.skipped(), 1);
        assert_eq!(binding.unused(), 0);
        assert_eq!(
            binding.loggable().collect::<Vec<_>>(),
            vec![&LogValue::Int(1), &LogValue::Int(2)]
        );
    }

    #[test]
    fn mismatched_argument_is_consumed_but_not_loggable() {
        let args = [LogValue::from("oops"), LogValue::from(5)];
        let binding = TagSpec::parse("ii").bind(&args);

        assert_eq!(binding.mismatched(), 1);
        assert_eq!(binding.loggable().collect::<Vec<_>>(), vec![&LogValue::Int(5)]);
        assert!(!binding.is_exact());
    }

    #[test]
    fn missing_arguments_are_recorded_per_tag() {
        let args = [LogValue::from(true)];
        let binding = TagSpec::parse("bsi").bind(&args);

        assert_eq!(binding.loggable().count(), 1);
        assert_eq!(binding.missing(), 2);
        assert_eq!(
            &binding.entries()[1..],
            &[BoundArg::Missing(Tag::Str), BoundArg::Missing(Tag::Int)]
        );
    }

    #[test]
    fn leftover_arguments_are_unused() {
        let args = [LogValue::from('a'), LogValue::from('b'), LogValue::from('c')];
        let binding = TagSpec::parse("c").bind(&args);

        assert_eq!(binding.loggable().count(), 1);
        assert_eq!(binding.unused(), 2);
    }
}
