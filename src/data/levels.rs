use thiserror::Error;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level {level} is outside the multiplier table (valid range 1..={max})")]
    OutOfRange { level: f64, max: u32 },
}

/// Per-level CP multipliers from the player level settings entry.
///
/// The underlying vector keeps index 0 as an unused sentinel so that level L
/// maps directly to position L. Half levels are not stored; they are the
/// arithmetic mean of their two integer neighbors.
#[derive(Clone, Debug)]
pub struct LevelTable {
    multipliers: Vec<f64>,
}

impl LevelTable {
    pub fn from_raw(values: Vec<f64>) -> Self {
        let mut multipliers = Vec::with_capacity(values.len() + 1);
        multipliers.push(0.0);
        multipliers.extend(values);
        Self { multipliers }
    }

    /// Highest integer level the table covers.
    pub fn max_level(&self) -> u32 {
        (self.multipliers.len() - 1) as u32
    }

    /// CP multiplier at an integer or half-integer level.
    pub fn multiplier_at(&self, level: f64) -> Result<f64, LevelError> {
        let out_of_range = || LevelError::OutOfRange {
            level,
            max: self.max_level(),
        };

        if level == level.floor() {
            let index = level as usize;
            if index < 1 || index >= self.multipliers.len() {
                return Err(out_of_range());
            }
            Ok(self.multipliers[index])
        } else {
            let lower = level.floor() as usize;
            if lower < 1 || lower + 1 >= self.multipliers.len() {
                return Err(out_of_range());
            }
            Ok((self.multipliers[lower] + self.multipliers[lower + 1]) / 2.0)
        }
    }
}
