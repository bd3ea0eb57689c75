use super::catalog::SegmentCatalog;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// How often a single catalog offer may be bought
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SelectionMode {
    /// Each offer at most once (0/1 covering knapsack)
    #[default]
    Bounded,
    /// Each offer any number of times
    Unbounded,
}

/// Integer length a cover has to reach for a real-valued target.
/// Saturates at `usize::MAX` for an infinite target.
pub fn threshold_for(target_length: f64) -> usize {
    if target_length.is_nan() || target_length <= 0.0 {
        0
    } else {
        target_length.ceil() as usize
    }
}

/// Dense DP table of minimum prices.
///
/// Cell `(i, j)` holds the cheapest way to reach length `j` using only the
/// first `i` catalog offers, or `None` when that is impossible.
#[derive(Debug, Clone)]
pub struct CoverageTable<'a> {
    catalog: &'a SegmentCatalog,
    mode: SelectionMode,
    threshold: usize,
    cells: Vec<Option<u64>>, // (catalog.len() + 1) rows x (threshold + 1) columns
}

impl<'a> CoverageTable<'a> {
    pub fn build(catalog: &'a SegmentCatalog, threshold: usize, mode: SelectionMode) -> Self {
        let width = threshold + 1;
        let rows = catalog.len() + 1;
        // row 0: nothing bought, nothing covered
        let mut cells: Vec<Option<u64>> = vec![None; rows * width];

        for (i, seg) in (1..rows).zip(catalog.iter()) {
            let len = seg.length as usize;
            let price = seg.price as u64;
            let source_row = match mode {
                SelectionMode::Bounded => i - 1,
                SelectionMode::Unbounded => i,
            };

            for j in 0..width {
                let skip = cells[(i - 1) * width + j];
                let take = if len >= j {
                    Some(price)
                } else {
                    cells[source_row * width + j - len].map(|p| p.saturating_add(price))
                };
                cells[i * width + j] = cheaper(skip, take);
            }
        }

        debug!(
            "coverage table: {} rows x {} columns ({})",
            rows, width, mode
        );

        Self {
            catalog,
            mode,
            threshold,
            cells,
        }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Minimum price for length `length` using the first `items` offers.
    /// Out-of-range coordinates read as infeasible.
    pub fn cell(&self, items: usize, length: usize) -> Option<u64> {
        if items > self.catalog.len() || length > self.threshold {
            return None;
        }
        self.cells[items * (self.threshold + 1) + length]
    }

    /// Minimum price covering the full threshold with the whole catalog
    pub fn answer(&self) -> Option<u64> {
        self.cell(self.catalog.len(), self.threshold)
    }

    /// Catalog indices (0-based) of one optimal purchase, in descending order.
    ///
    /// Empty when the threshold cannot be reached. In unbounded mode an index
    /// appears once per piece bought.
    pub fn selection(&self) -> Vec<usize> {
        let mut picked = Vec::new();
        let mut i = self.catalog.len();
        let mut j = self.threshold;

        if self.answer().is_none() {
            return picked;
        }

        while i > 0 {
            let current = self.cell(i, j);
            if current == self.cell(i - 1, j) {
                i -= 1;
                continue;
            }

            let len = self.catalog.segments()[i - 1].length as usize;
            picked.push(i - 1);
            if len >= j {
                break;
            }
            j -= len;
            if self.mode == SelectionMode::Bounded {
                i -= 1;
            }
        }

        picked
    }
}

fn cheaper(a: Option<u64>, b: Option<u64>) -> Option<u64> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (x, None) => x,
        (None, y) => y,
    }
}

/// Outcome of a cover query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Cover {
    Feasible {
        threshold: usize,
        price: u64,
        /// Catalog indices bought, one entry per piece
        selected: Vec<usize>,
        total_length: u64,
    },
    Infeasible {
        threshold: usize,
        /// Longest wall the catalog can produce in bounded mode
        available_length: u64,
    },
}

impl Cover {
    pub fn price(&self) -> Option<u64> {
        match self {
            Cover::Feasible { price, .. } => Some(*price),
            Cover::Infeasible { .. } => None,
        }
    }

    pub fn threshold(&self) -> usize {
        match self {
            Cover::Feasible { threshold, .. } | Cover::Infeasible { threshold, .. } => *threshold,
        }
    }

    pub fn is_feasible(&self) -> bool {
        matches!(self, Cover::Feasible { .. })
    }
}

/// Cheapest bounded purchase whose total length reaches `ceil(target_length)`.
///
/// Returns `None` when even buying every offer once falls short.
pub fn min_cost(catalog: &SegmentCatalog, target_length: f64) -> Option<u64> {
    if target_length == f64::INFINITY {
        return None;
    }
    let threshold = threshold_for(target_length);
    CoverageTable::build(catalog, threshold, SelectionMode::Bounded).answer()
}

/// Full cover query: price plus the purchase that achieves it
pub fn solve_cover(catalog: &SegmentCatalog, target_length: f64, mode: SelectionMode) -> Cover {
    let threshold = threshold_for(target_length);
    let available_length = catalog.total_length();

    if target_length == f64::INFINITY {
        return Cover::Infeasible {
            threshold,
            available_length,
        };
    }

    // the table could only confirm this, and it may be huge
    if mode == SelectionMode::Bounded && available_length < threshold as u64 {
        info!(
            "catalog offers {} in total, {} needed: infeasible",
            available_length, threshold
        );
        return Cover::Infeasible {
            threshold,
            available_length,
        };
    }

    let table = CoverageTable::build(catalog, threshold, mode);
    match table.answer() {
        Some(price) => {
            let selected = table.selection();
            let total_length = selected
                .iter()
                .map(|&k| catalog.segments()[k].length as u64)
                .sum();
            info!(
                "cheapest cover of {}: price {} using {} piece(s), length {}",
                threshold,
                price,
                selected.len(),
                total_length
            );
            Cover::Feasible {
                threshold,
                price,
                selected,
                total_length,
            }
        }
        None => Cover::Infeasible {
            threshold,
            available_length,
        },
    }
}
