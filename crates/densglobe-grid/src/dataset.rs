use std::collections::BTreeMap;

use crate::error::GridError;

/// Placement and bookkeeping values read from `key value` header lines.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridMetadata {
    pub ncols: Option<usize>,
    pub nrows: Option<usize>,
    pub xllcorner: f32,
    pub yllcorner: f32,
    pub cellsize: Option<f32>,
    pub nodata_value: Option<f32>,
    /// Any other header keys, verbatim.
    pub extra: BTreeMap<String, f32>,
}

impl GridMetadata {
    /// Keys whose value counts cells and so must be a whole number.
    pub fn is_count_key(key: &str) -> bool {
        key.eq_ignore_ascii_case("ncols") || key.eq_ignore_ascii_case("nrows")
    }

    /// Stores a header pair. Well-known keys match case-insensitively.
    pub fn set(&mut self, key: &str, value: f32) {
        match key.to_ascii_lowercase().as_str() {
            "ncols" => self.ncols = Some(value.max(0.0) as usize),
            "nrows" => self.nrows = Some(value.max(0.0) as usize),
            "xllcorner" => self.xllcorner = value,
            "yllcorner" => self.yllcorner = value,
            "cellsize" => self.cellsize = Some(value),
            "nodata_value" => self.nodata_value = Some(value),
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl ValueRange {
    #[inline]
    pub fn single(v: f32) -> Self {
        Self { min: v, max: v }
    }

    #[inline]
    pub fn include(&mut self, v: f32) {
        self.min = self.min.min(v);
        self.max = self.max.max(v);
    }

    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.max <= self.min
    }

    /// Position of `v` within the range, 0 at `min` and 1 at `max`.
    /// A degenerate range maps everything to 0.
    #[inline]
    pub fn normalize(&self, v: f32) -> f32 {
        if self.is_degenerate() {
            0.0
        } else {
            (v - self.min) / (self.max - self.min)
        }
    }

    /// Running min/max that starts empty and adopts the first value seen.
    pub fn accumulate(range: &mut Option<ValueRange>, v: f32) {
        match range {
            Some(r) => r.include(v),
            None => *range = Some(ValueRange::single(v)),
        }
    }
}

/// Row-major grid of optional samples. `None` marks a missing cell.
#[derive(Clone, Debug, PartialEq)]
pub struct GridDataset {
    pub meta: GridMetadata,
    nrows: usize,
    ncols: usize,
    cells: Vec<Option<f32>>,
    range: Option<ValueRange>,
}

impl GridDataset {
    /// Builds a dataset from rows, rejecting ragged input and recomputing min/max.
    pub fn from_rows(meta: GridMetadata, rows: Vec<Vec<Option<f32>>>) -> Result<Self, GridError> {
        let ncols = rows.first().map(Vec::len).unwrap_or(0);
        let nrows = rows.len();
        let mut cells = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(GridError::Ragged {
                    line: i + 1,
                    expected: ncols,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self::from_cells(meta, nrows, ncols, cells))
    }

    pub(crate) fn from_cells(
        meta: GridMetadata,
        nrows: usize,
        ncols: usize,
        cells: Vec<Option<f32>>,
    ) -> Self {
        debug_assert_eq!(cells.len(), nrows * ncols);
        let mut range = None;
        for v in cells.iter().flatten() {
            ValueRange::accumulate(&mut range, *v);
        }
        Self {
            meta,
            nrows,
            ncols,
            cells,
            range,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.ncols
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Min/max over defined cells; `None` when every cell is missing.
    #[inline]
    pub fn range(&self) -> Option<ValueRange> {
        self.range
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.nrows || col >= self.ncols {
            return None;
        }
        self.cells[row * self.ncols + col]
    }

    #[inline]
    pub fn is_missing(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_none()
    }

    pub fn row(&self, row: usize) -> &[Option<f32>] {
        &self.cells[row * self.ncols..(row + 1) * self.ncols]
    }

    pub fn cells(&self) -> &[Option<f32>] {
        &self.cells
    }

    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_ragged() {
        let rows = vec![vec![Some(1.0), Some(2.0)], vec![Some(3.0)]];
        let err = GridDataset::from_rows(GridMetadata::default(), rows).unwrap_err();
        assert!(matches!(
            err,
            GridError::Ragged {
                line: 2,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn range_ignores_missing_cells() {
        let rows = vec![vec![Some(5.0), None], vec![None, Some(-1.0)]];
        let ds = GridDataset::from_rows(GridMetadata::default(), rows).unwrap();
        assert_eq!(ds.range(), Some(ValueRange { min: -1.0, max: 5.0 }));
        assert_eq!(ds.missing_count(), 2);
        assert_eq!(ds.get(1, 1), Some(-1.0));
        assert!(ds.is_missing(0, 1));
        assert!(ds.is_missing(7, 0));
    }

    #[test]
    fn degenerate_range_normalizes_to_zero() {
        let r = ValueRange::single(3.0);
        assert_eq!(r.normalize(3.0), 0.0);
        let r = ValueRange { min: 2.0, max: 4.0 };
        assert_eq!(r.normalize(3.0), 0.5);
    }

    #[test]
    fn metadata_keys_match_case_insensitively() {
        let mut meta = GridMetadata::default();
        meta.set("NODATA_value", -9999.0);
        meta.set("XLLCORNER", -180.0);
        meta.set("NCOLS", 360.0);
        meta.set("custom", 1.5);
        assert_eq!(meta.nodata_value, Some(-9999.0));
        assert_eq!(meta.xllcorner, -180.0);
        assert_eq!(meta.ncols, Some(360));
        assert_eq!(meta.extra.get("custom"), Some(&1.5));
    }
}
