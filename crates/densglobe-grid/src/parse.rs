use crate::dataset::{GridDataset, GridMetadata};
use crate::error::GridError;

fn malformed(token: &str, line: usize, reason: &'static str) -> GridError {
    GridError::Malformed {
        line,
        token: token.to_string(),
        reason,
    }
}

/// Values are read at double precision, then narrowed; anything outside the
/// single-precision range is rejected rather than turned into infinity.
#[inline]
fn parse_token(token: &str, line: usize) -> Result<f32, GridError> {
    let v = token
        .parse::<f64>()
        .map_err(|_| malformed(token, line, "is not a number"))?;
    if !v.is_finite() {
        return Err(malformed(token, line, "is not a finite number"));
    }
    if v.abs() > f32::MAX as f64 {
        return Err(malformed(token, line, "is outside the f32 range"));
    }
    Ok(v as f32)
}

/// Parses the whitespace-separated grid text format.
///
/// A two-token line whose first token is not a number is a `key value` header
/// pair. Any other line with two or more tokens is a data row. Shorter lines
/// are ignored. Tokens equal to the most recently read `NODATA_value` become
/// missing cells. Every token must be a finite number; rows must share one
/// width, which also has to agree with `ncols` when the header gives it.
pub fn parse_grid(text: &str) -> Result<GridDataset, GridError> {
    let mut meta = GridMetadata::default();
    let mut cells: Vec<Option<f32>> = Vec::new();
    let mut width: Option<usize> = None;
    let mut nrows = 0usize;

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        if tokens.len() < 2 {
            continue;
        }
        if tokens.len() == 2 && tokens[0].parse::<f64>().is_err() {
            let value = parse_token(tokens[1], line)?;
            if GridMetadata::is_count_key(tokens[0]) && (value < 0.0 || value.fract() != 0.0) {
                return Err(malformed(tokens[1], line, "is not a whole, non-negative count"));
            }
            meta.set(tokens[0], value);
            continue;
        }

        let expected = width.or(meta.ncols).unwrap_or(tokens.len());
        if tokens.len() != expected {
            return Err(GridError::Ragged {
                line,
                expected,
                found: tokens.len(),
            });
        }
        width = Some(expected);
        for token in tokens {
            let v = parse_token(token, line)?;
            if meta.nodata_value == Some(v) {
                cells.push(None);
            } else {
                cells.push(Some(v));
            }
        }
        nrows += 1;
    }

    if let Some(declared) = meta.nrows {
        if declared != nrows {
            log::warn!("grid header declares {} rows but {} were read", declared, nrows);
        }
    }

    Ok(GridDataset::from_cells(meta, nrows, width.unwrap_or(0), cells))
}
