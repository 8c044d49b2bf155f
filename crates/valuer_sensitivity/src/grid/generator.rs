//! Grid enumeration: lazy iterator, eager collect, and the Rayon path.

use rayon::prelude::*;
use valuer_core::engine::adr_multiplier_approach;
use valuer_core::types::ValuationInputs;

use super::config::{ErrorPolicy, GridConfig};
use super::row::SensitivityRow;
use crate::cancel::CancelToken;
use crate::error::GridError;

/// Lazy, finite iterator over sensitivity grid rows.
///
/// Yields rows in the contract order (ADR outermost, occupancy middle, cap
/// rate innermost) without materializing the whole table, so large grids
/// can stream straight to export. Restart by constructing a new iterator
/// from the same inputs and configuration; the enumeration is
/// deterministic.
///
/// The per-row error policy is applied inside the iterator: under
/// [`ErrorPolicy::Skip`] failing cells are silently dropped, under
/// [`ErrorPolicy::Halt`] the first failure is yielded as an error and the
/// iterator fuses. A cancellation token, if attached, is checked between
/// outer ADR iterations.
#[derive(Debug, Clone)]
pub struct GridIter {
    adr_values: Vec<f64>,
    occupancy_values: Vec<f64>,
    cap_rate_values: Vec<f64>,
    room_count: u32,
    opex: f64,
    adr_multiplier: f64,
    error_policy: ErrorPolicy,
    cancel: Option<CancelToken>,
    adr_idx: usize,
    occ_idx: usize,
    cap_idx: usize,
    // Memoized ADR-approach value for the current ADR step; it varies
    // only with ADR, so recomputing it per cell would be wasted work.
    current_adr_value: f64,
    done: bool,
}

impl GridIter {
    /// Creates an iterator after validating the fixed inputs and the grid
    /// configuration. Fails before any row is computed.
    ///
    /// # Errors
    /// - `GridError::Valuation` if the fixed inputs are structurally invalid
    /// - `GridError::InvalidRange` / `InvalidStep` / `NonFiniteBound` from
    ///   configuration validation
    pub fn new(inputs: &ValuationInputs, config: &GridConfig) -> Result<Self, GridError> {
        inputs.validate()?;
        config.validate()?;
        Ok(Self {
            adr_values: config.adr_values(),
            occupancy_values: config.occupancy_values(),
            cap_rate_values: config.cap_rate_values(),
            room_count: inputs.room_count,
            opex: inputs.opex,
            adr_multiplier: inputs.adr_multiplier,
            error_policy: config.error_policy,
            cancel: None,
            adr_idx: 0,
            occ_idx: 0,
            cap_idx: 0,
            current_adr_value: 0.0,
            done: false,
        })
    }

    /// Attaches a cancellation token, checked between outer ADR iterations.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Number of cells the full enumeration visits (before any skipping).
    pub fn cell_count(&self) -> usize {
        self.adr_values.len() * self.occupancy_values.len() * self.cap_rate_values.len()
    }

    fn advance(&mut self) {
        self.cap_idx += 1;
        if self.cap_idx == self.cap_rate_values.len() {
            self.cap_idx = 0;
            self.occ_idx += 1;
            if self.occ_idx == self.occupancy_values.len() {
                self.occ_idx = 0;
                self.adr_idx += 1;
            }
        }
    }
}

impl Iterator for GridIter {
    type Item = Result<SensitivityRow, GridError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done || self.adr_idx >= self.adr_values.len() {
                self.done = true;
                return None;
            }
            let adr = self.adr_values[self.adr_idx];
            if self.occ_idx == 0 && self.cap_idx == 0 {
                // Entering a new ADR block: cancellation checkpoint and
                // memoized ADR-value refresh.
                if let Some(token) = &self.cancel {
                    if token.is_cancelled() {
                        self.done = true;
                        return Some(Err(GridError::Cancelled));
                    }
                }
                self.current_adr_value =
                    adr_multiplier_approach(adr, self.room_count, self.adr_multiplier);
            }
            let occupancy = self.occupancy_values[self.occ_idx];
            let cap_rate = self.cap_rate_values[self.cap_idx];
            self.advance();

            match SensitivityRow::compute(
                adr,
                occupancy,
                cap_rate,
                self.room_count,
                self.opex,
                self.current_adr_value,
            ) {
                Ok(row) => return Some(Ok(row)),
                Err(err) => match self.error_policy {
                    ErrorPolicy::Halt => {
                        self.done = true;
                        return Some(Err(GridError::Valuation(err)));
                    }
                    ErrorPolicy::Skip => continue,
                },
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Skipped cells make the exact count unknowable upfront.
        (0, Some(self.cell_count()))
    }
}

/// Materializes the full grid in contract order.
///
/// # Errors
/// - Upfront validation errors from [`GridIter::new`]
/// - `GridError::Valuation` under the halt policy; no partial output
pub fn generate(
    inputs: &ValuationInputs,
    config: &GridConfig,
) -> Result<Vec<SensitivityRow>, GridError> {
    collect_rows(GridIter::new(inputs, config)?)
}

/// [`generate`] with a cancellation token.
///
/// # Errors
/// - Everything [`generate`] reports, plus `GridError::Cancelled`; a
///   cancelled generation returns no partial output
pub fn generate_with_cancel(
    inputs: &ValuationInputs,
    config: &GridConfig,
    token: CancelToken,
) -> Result<Vec<SensitivityRow>, GridError> {
    collect_rows(GridIter::new(inputs, config)?.with_cancel(token))
}

fn collect_rows(iter: GridIter) -> Result<Vec<SensitivityRow>, GridError> {
    let mut rows = Vec::with_capacity(iter.cell_count());
    for row in iter {
        rows.push(row?);
    }
    Ok(rows)
}

/// Materializes the full grid using Rayon, one task per ADR block.
///
/// Rows are independent (each derives from its own cell assumptions plus
/// the fixed inputs), so the grid is embarrassingly parallel. The parallel
/// map collects blocks in ADR order, so the output is identical to
/// [`generate`] — same rows, same order, bit for bit.
///
/// # Errors
/// - Same as [`generate`]
pub fn generate_parallel(
    inputs: &ValuationInputs,
    config: &GridConfig,
) -> Result<Vec<SensitivityRow>, GridError> {
    parallel_rows(inputs, config, None)
}

/// [`generate_parallel`] with a cancellation token, checked at the start
/// of each ADR block.
///
/// # Errors
/// - Same as [`generate_with_cancel`]
pub fn generate_parallel_with_cancel(
    inputs: &ValuationInputs,
    config: &GridConfig,
    token: CancelToken,
) -> Result<Vec<SensitivityRow>, GridError> {
    parallel_rows(inputs, config, Some(token))
}

fn parallel_rows(
    inputs: &ValuationInputs,
    config: &GridConfig,
    cancel: Option<CancelToken>,
) -> Result<Vec<SensitivityRow>, GridError> {
    inputs.validate()?;
    config.validate()?;

    let adr_values = config.adr_values();
    let occupancy_values = config.occupancy_values();
    let cap_rate_values = config.cap_rate_values();
    let room_count = inputs.room_count;
    let opex = inputs.opex;
    let adr_multiplier = inputs.adr_multiplier;
    let error_policy = config.error_policy;

    let blocks: Result<Vec<Vec<SensitivityRow>>, GridError> = adr_values
        .par_iter()
        .map(|&adr| {
            if let Some(token) = &cancel {
                if token.is_cancelled() {
                    return Err(GridError::Cancelled);
                }
            }
            let adr_value = adr_multiplier_approach(adr, room_count, adr_multiplier);
            let mut block = Vec::with_capacity(occupancy_values.len() * cap_rate_values.len());
            for &occupancy in &occupancy_values {
                for &cap_rate in &cap_rate_values {
                    match SensitivityRow::compute(
                        adr, occupancy, cap_rate, room_count, opex, adr_value,
                    ) {
                        Ok(row) => block.push(row),
                        Err(err) => match error_policy {
                            ErrorPolicy::Halt => return Err(GridError::Valuation(err)),
                            ErrorPolicy::Skip => {}
                        },
                    }
                }
            }
            Ok(block)
        })
        .collect();

    let blocks = blocks?;
    let mut rows = Vec::with_capacity(blocks.iter().map(Vec::len).sum());
    for block in blocks {
        rows.extend(block);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::config::{AssumptionRange, GridSteps};
    use approx::assert_relative_eq;

    fn base_inputs() -> ValuationInputs {
        ValuationInputs {
            noi: 230_000.0,
            cap_rate: 0.085,
            adr: 175.0,
            room_count: 18,
            adr_multiplier: 7.6,
            equity_invested: 10_000.0,
            opex: 480_000.0,
        }
    }

    #[test]
    fn test_default_grid_has_seventy_rows() {
        let rows = generate(&base_inputs(), &GridConfig::default()).unwrap();
        assert_eq!(rows.len(), 2 * 7 * 5);
    }

    #[test]
    fn test_first_row_matches_naive_enumeration() {
        let rows = generate(&base_inputs(), &GridConfig::default()).unwrap();
        let first = &rows[0];
        assert_eq!(first.adr, 70.0);
        assert_relative_eq!(first.occupancy, 0.55, max_relative = 1e-12);
        assert_relative_eq!(first.cap_rate, 0.07, max_relative = 1e-12);
        assert_eq!(first.revenue, 252_945.0);
        assert_eq!(first.noi, -227_055.0);
        assert_eq!(first.adr_value, 9_576.0);
    }

    #[test]
    fn test_adr_value_constant_within_adr_block() {
        let rows = generate(&base_inputs(), &GridConfig::default()).unwrap();
        // First 35 rows share ADR 70, last 35 share ADR 95.
        assert!(rows[..35].iter().all(|r| r.adr_value == 9_576.0));
        assert!(rows[35..].iter().all(|r| r.adr_value == 12_996.0));
    }

    #[test]
    fn test_cap_rate_varies_fastest() {
        let rows = generate(&base_inputs(), &GridConfig::default()).unwrap();
        assert!(rows[1].cap_rate > rows[0].cap_rate);
        assert_eq!(rows[1].occupancy, rows[0].occupancy);
        assert_eq!(rows[1].adr, rows[0].adr);
    }

    #[test]
    fn test_iterator_matches_eager_collect() {
        let inputs = base_inputs();
        let config = GridConfig::default();
        let eager = generate(&inputs, &config).unwrap();
        let lazy: Vec<_> = GridIter::new(&inputs, &config)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(eager, lazy);
    }

    #[test]
    fn test_parallel_matches_sequential_exactly() {
        let inputs = base_inputs();
        let config = GridConfig::default();
        assert_eq!(
            generate(&inputs, &config).unwrap(),
            generate_parallel(&inputs, &config).unwrap()
        );
    }

    fn zero_cap_config() -> GridConfig {
        // Cap range 0-1% step 1 point puts an exact zero in the grid.
        GridConfig::new(
            AssumptionRange::new(70.0, 95.0),
            AssumptionRange::new(55.0, 85.0),
            AssumptionRange::new(0.0, 1.0),
        )
    }

    #[test]
    fn test_skip_policy_drops_zero_cap_rows() {
        let rows = generate(&base_inputs(), &zero_cap_config()).unwrap();
        // 2 ADR x 7 occupancy x 2 cap values, minus the 14 zero-cap rows.
        assert_eq!(rows.len(), 2 * 7 * 2 - 14);
        assert!(rows.iter().all(|r| r.cap_rate != 0.0));
    }

    #[test]
    fn test_halt_policy_propagates_zero_cap() {
        let config = zero_cap_config().with_error_policy(ErrorPolicy::Halt);
        let result = generate(&base_inputs(), &config);
        assert!(matches!(result, Err(GridError::Valuation(_))));
    }

    #[test]
    fn test_halt_policy_parallel_also_fails() {
        let config = zero_cap_config().with_error_policy(ErrorPolicy::Halt);
        assert!(generate_parallel(&base_inputs(), &config).is_err());
    }

    #[test]
    fn test_invalid_range_fails_before_rows() {
        let config = GridConfig {
            occupancy_range: AssumptionRange::new(85.0, 55.0),
            ..GridConfig::default()
        };
        assert!(matches!(
            generate(&base_inputs(), &config),
            Err(GridError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_pre_cancelled_token_yields_no_rows() {
        let token = CancelToken::new();
        token.cancel();
        assert_eq!(
            generate_with_cancel(&base_inputs(), &GridConfig::default(), token),
            Err(GridError::Cancelled)
        );
    }

    #[test]
    fn test_pre_cancelled_token_parallel() {
        let token = CancelToken::new();
        token.cancel();
        assert_eq!(
            generate_parallel_with_cancel(&base_inputs(), &GridConfig::default(), token),
            Err(GridError::Cancelled)
        );
    }

    #[test]
    fn test_custom_steps_change_density() {
        let config = GridConfig::default().with_steps(GridSteps {
            adr: 5.0,
            occupancy: 0.05,
            cap_rate: 0.01,
        });
        let rows = generate(&base_inputs(), &config).unwrap();
        // ADR 70..95 step 5 gives 6 values.
        assert_eq!(rows.len(), 6 * 7 * 5);
    }

    #[test]
    fn test_row_order_is_lexicographic() {
        let rows = generate(&base_inputs(), &GridConfig::default()).unwrap();
        for pair in rows.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let ordered = a.adr < b.adr
                || (a.adr == b.adr && a.occupancy < b.occupancy)
                || (a.adr == b.adr && a.occupancy == b.occupancy && a.cap_rate < b.cap_rate);
            assert!(ordered, "rows out of order: {:?} then {:?}", a, b);
        }
    }
}
