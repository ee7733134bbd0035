//! Run-length attribute table.
//!
//! A table is a sequence of runs, each a character count with one
//! [`Attributes`] record. Runs are contiguous and non-empty, and together
//! they cover the text exactly. Adjacent runs with equal attributes are
//! merged after every mutation.

use std::ops::Range;

use super::attributes::Attributes;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Run {
    pub(crate) len: usize,
    pub(crate) attributes: Attributes,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RunTable {
    runs: Vec<Run>,
}

impl RunTable {
    /// A single unstyled run covering `len` characters.
    pub(crate) fn plain(len: usize) -> Self {
        let mut table = Self::default();
        table.extend_to(len);
        table
    }

    /// Total characters covered.
    pub(crate) fn len(&self) -> usize {
        self.runs.iter().map(|run| run.len).sum()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub(crate) fn run_count(&self) -> usize {
        self.runs.len()
    }

    pub(crate) fn first(&self) -> Option<&Attributes> {
        self.runs.first().map(|run| &run.attributes)
    }

    pub(crate) fn attributes_at(&self, index: usize) -> Option<&Attributes> {
        let mut start = 0;
        for run in &self.runs {
            if index < start + run.len {
                return Some(&run.attributes);
            }
            start += run.len;
        }
        None
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (Range<usize>, &Attributes)> + '_ {
        self.runs.iter().scan(0, |start, run| {
            let range = *start..*start + run.len;
            *start = range.end;
            Some((range, &run.attributes))
        })
    }

    /// Applies `update` to every run.
    pub(crate) fn update_all(&mut self, mut update: impl FnMut(&mut Attributes)) {
        for run in &mut self.runs {
            update(&mut run.attributes);
        }
        self.coalesce();
    }

    /// Maps the text one run at a time, resizing each run to the length of
    /// its mapped segment. Returns the mapped text.
    pub(crate) fn map_segments(&mut self, text: &str, map: impl Fn(&str) -> String) -> String {
        let mut mapped = String::with_capacity(text.len());
        let mut rest = text;
        for run in &mut self.runs {
            let split = rest
                .char_indices()
                .nth(run.len)
                .map_or(rest.len(), |(byte, _)| byte);
            let (segment, tail) = rest.split_at(split);
            let segment = map(segment);
            run.len = segment.chars().count();
            mapped.push_str(&segment);
            rest = tail;
        }
        self.runs.retain(|run| run.len > 0);
        self.coalesce();
        mapped
    }

    /// Removes the characters in `range`, shrinking the runs that held them.
    pub(crate) fn remove(&mut self, range: Range<usize>) {
        let mut start = 0;
        for run in &mut self.runs {
            let run_range = start..start + run.len;
            start = run_range.end;

            let overlap_start = range.start.max(run_range.start);
            let overlap_end = range.end.min(run_range.end);
            if overlap_start < overlap_end {
                run.len -= overlap_end - overlap_start;
            }
        }
        self.runs.retain(|run| run.len > 0);
        self.coalesce();
    }

    /// Drops coverage past `len`.
    pub(crate) fn truncate(&mut self, len: usize) {
        let total = self.len();
        if len < total {
            self.remove(len..total);
        }
    }

    /// Grows coverage to `len` by extending the last run, or by adding a
    /// plain run when the table is empty.
    pub(crate) fn extend_to(&mut self, len: usize) {
        let total = self.len();
        if len <= total {
            return;
        }
        match self.runs.last_mut() {
            Some(last) => last.len += len - total,
            None => self.runs.push(Run {
                len,
                attributes: Attributes::default(),
            }),
        }
    }

    pub(crate) fn append(&mut self, other: &RunTable) {
        self.runs.extend(other.runs.iter().cloned());
        self.coalesce();
    }

    fn coalesce(&mut self) {
        let mut merged: Vec<Run> = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            match merged.last_mut() {
                Some(last) if last.attributes == run.attributes => last.len += run.len,
                _ => merged.push(run),
            }
        }
        self.runs = merged;
    }
}
