use crate::core::SuppressedDestination;
use crate::utils::error::Result;
use std::collections::BTreeMap;
use std::io::Write;

/// Count of suppressed destinations per reason.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub counts: BTreeMap<String, usize>,
    pub total: usize,
}

impl Summary {
    pub fn from_destinations(destinations: &[SuppressedDestination]) -> Self {
        let mut counts = BTreeMap::new();
        for destination in destinations {
            *counts
                .entry(destination.reason.as_str().to_string())
                .or_insert(0) += 1;
        }

        Self {
            counts,
            total: destinations.len(),
        }
    }

    pub fn count_for(&self, reason: &str) -> usize {
        self.counts.get(reason).copied().unwrap_or(0)
    }

    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Reason, Count")?;
        for (reason, count) in &self.counts {
            writeln!(out, "{}, {}", reason, count)?;
        }
        writeln!(out, "TOTAL, {}", self.total)?;
        Ok(())
    }
}
