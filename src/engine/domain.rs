use itertools::Either;

use crate::parsnip_assert_extreme;
use crate::parsnip_assert_moderate;
use crate::parsnip_assert_simple;

/// The marker returned when a narrowing operation has left a domain without any value. The search
/// treats this as the signal to undo the current tentative assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyDomain;

/// A half-open interval `[start, end)` of integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interval {
    pub start: i32,
    pub end: i32,
}

impl Interval {
    pub fn new(start: i32, end: i32) -> Self {
        Interval { start, end }
    }

    pub fn contains(&self, value: i32) -> bool {
        self.start <= value && value < self.end
    }

    pub fn len(&self) -> usize {
        (self.end as i64 - self.start as i64) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// The set of values a variable can still take, in one of two physical forms.
///
/// The `Values` form enumerates the members explicitly; the `Ranges` form stores disjoint
/// half-open intervals in strictly ascending order. Narrowing operations mutate in place and may
/// collapse a `Ranges` domain into a `Values` domain, never the other way around: propagation
/// narrows towards singletons, and once a domain is that small an explicit list is cheaper than
/// interval arithmetic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Domain {
    /// An explicit list of distinct values.
    Values(Vec<i32>),
    /// Disjoint half-open intervals, strictly ascending, each non-empty.
    Ranges(Vec<Interval>),
}

impl Domain {
    /// A domain holding exactly one value.
    pub fn singleton(value: i32) -> Self {
        Domain::Values(vec![value])
    }

    /// The domain `{0, 1}` of a boolean variable.
    pub fn boolean() -> Self {
        Domain::Values(vec![0, 1])
    }

    /// The contiguous domain `[lower, upper)`. Requires `lower < upper`.
    pub fn from_bounds(lower: i32, upper: i32) -> Self {
        parsnip_assert_simple!(
            lower < upper,
            "a domain [{lower}, {upper}) holds no value"
        );
        Domain::Ranges(vec![Interval::new(lower, upper)])
    }

    /// A domain enumerating the given values. Requires at least one value; the values must be
    /// distinct.
    pub fn from_values(values: Vec<i32>) -> Self {
        parsnip_assert_simple!(!values.is_empty(), "a domain must hold at least one value");
        parsnip_assert_moderate!(
            {
                let mut sorted = values.clone();
                sorted.sort_unstable();
                sorted.windows(2).all(|pair| pair[0] != pair[1])
            },
            "the values of a domain must be distinct"
        );
        Domain::Values(values)
    }

    /// The number of values in the domain.
    pub fn len(&self) -> usize {
        match self {
            Domain::Values(values) => values.len(),
            Domain::Ranges(ranges) => ranges.iter().map(Interval::len).sum(),
        }
    }

    /// An empty domain means the variable has no feasible value left.
    pub fn is_empty(&self) -> bool {
        match self {
            Domain::Values(values) => values.is_empty(),
            Domain::Ranges(ranges) => ranges.is_empty(),
        }
    }

    /// Whether the domain holds exactly one value.
    pub fn is_fixed(&self) -> bool {
        self.len() == 1
    }

    pub fn contains(&self, value: i32) -> bool {
        match self {
            Domain::Values(values) => values.contains(&value),
            Domain::Ranges(ranges) => ranges.iter().any(|range| range.contains(value)),
        }
    }

    pub fn lower_bound(&self) -> Option<i32> {
        match self {
            Domain::Values(values) => values.iter().min().copied(),
            Domain::Ranges(ranges) => ranges.first().map(|range| range.start),
        }
    }

    pub fn upper_bound(&self) -> Option<i32> {
        match self {
            Domain::Values(values) => values.iter().max().copied(),
            Domain::Ranges(ranges) => ranges.last().map(|range| range.end - 1),
        }
    }

    /// Iterates the values in storage order: a `Values` domain as stored, a `Ranges` domain
    /// ascending within each interval, intervals in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        match self {
            Domain::Values(values) => Either::Left(values.iter().copied()),
            Domain::Ranges(ranges) => {
                Either::Right(ranges.iter().flat_map(|range| range.start..range.end))
            }
        }
    }

    /// Keeps only `value`; the domain becomes empty if `value` was not a member. Collapses a
    /// `Ranges` domain to the `Values` form.
    pub fn retain_value(&mut self, value: i32) -> Result<(), EmptyDomain> {
        match self {
            Domain::Values(values) => values.retain(|&candidate| candidate == value),
            Domain::Ranges(ranges) => {
                let is_member = ranges.iter().any(|range| range.contains(value));
                *self = Domain::Values(if is_member { vec![value] } else { Vec::new() });
            }
        }
        self.ensure_non_empty()
    }

    /// Keeps only the values equal to `first` or `second`. Collapses a `Ranges` domain to the
    /// `Values` form.
    pub fn retain_either(&mut self, first: i32, second: i32) -> Result<(), EmptyDomain> {
        match self {
            Domain::Values(values) => {
                values.retain(|&candidate| candidate == first || candidate == second)
            }
            Domain::Ranges(ranges) => {
                let mut kept = Vec::with_capacity(2);
                if ranges.iter().any(|range| range.contains(first)) {
                    kept.push(first);
                }
                if second != first && ranges.iter().any(|range| range.contains(second)) {
                    kept.push(second);
                }
                *self = Domain::Values(kept);
            }
        }
        self.ensure_non_empty()
    }

    /// Keeps only the values in `[lower, upper)`. Preserves the `Ranges` form: every interval is
    /// clipped and the ones that become empty are dropped.
    pub fn retain_range(&mut self, lower: i32, upper: i32) -> Result<(), EmptyDomain> {
        match self {
            Domain::Values(values) => {
                values.retain(|&candidate| lower <= candidate && candidate < upper)
            }
            Domain::Ranges(ranges) => {
                for range in ranges.iter_mut() {
                    range.start = range.start.max(lower);
                    range.end = range.end.min(upper);
                }
                ranges.retain(|range| !range.is_empty());
            }
        }
        parsnip_assert_extreme!(self.ranges_invariant_holds());
        self.ensure_non_empty()
    }

    /// Removes `value` if present; a no-op otherwise. In the `Ranges` form, removing an interior
    /// value splits the interval in two, removing a boundary value trims an endpoint, and
    /// removing the only value of an interval deletes the interval.
    pub fn remove_value(&mut self, value: i32) -> Result<(), EmptyDomain> {
        match self {
            Domain::Values(values) => {
                if let Some(position) = values.iter().position(|&candidate| candidate == value) {
                    let _ = values.remove(position);
                }
            }
            Domain::Ranges(ranges) => {
                if let Some(position) = ranges.iter().position(|range| range.contains(value)) {
                    let range = &mut ranges[position];
                    if range.len() == 1 {
                        let _ = ranges.remove(position);
                    } else if range.start == value {
                        range.start += 1;
                    } else if range.end == value + 1 {
                        range.end -= 1;
                    } else {
                        let upper_part = Interval::new(value + 1, range.end);
                        range.end = value;
                        ranges.insert(position + 1, upper_part);
                    }
                }
            }
        }
        parsnip_assert_extreme!(self.ranges_invariant_holds());
        self.ensure_non_empty()
    }

    /// Removes every value smaller than `bound`.
    pub fn tighten_lower_bound(&mut self, bound: i32) -> Result<(), EmptyDomain> {
        match self {
            Domain::Values(values) => values.retain(|&candidate| candidate >= bound),
            Domain::Ranges(ranges) => {
                ranges.retain(|range| range.end > bound);
                if let Some(first) = ranges.first_mut() {
                    first.start = first.start.max(bound);
                }
            }
        }
        self.ensure_non_empty()
    }

    /// Removes every value greater than `bound`.
    pub fn tighten_upper_bound(&mut self, bound: i32) -> Result<(), EmptyDomain> {
        if bound == i32::MAX {
            return self.ensure_non_empty();
        }
        match self {
            Domain::Values(values) => values.retain(|&candidate| candidate <= bound),
            Domain::Ranges(ranges) => {
                ranges.retain(|range| range.start <= bound);
                if let Some(last) = ranges.last_mut() {
                    last.end = last.end.min(bound + 1);
                }
            }
        }
        self.ensure_non_empty()
    }

    fn ensure_non_empty(&self) -> Result<(), EmptyDomain> {
        if self.is_empty() {
            Err(EmptyDomain)
        } else {
            Ok(())
        }
    }

    /// Whether the `Ranges` invariant holds: non-empty intervals, disjoint and strictly ascending.
    /// Trivially true for the `Values` form.
    fn ranges_invariant_holds(&self) -> bool {
        match self {
            Domain::Values(_) => true,
            Domain::Ranges(ranges) => {
                ranges.iter().all(|range| !range.is_empty())
                    && ranges.windows(2).all(|pair| pair[0].end < pair[1].start)
            }
        }
    }
}
