use super::{Generator, RngCore, SeedValue};
use rand::Rng;

const fn one_indexed_i64(index: usize) -> i64 {
    (index as i64) + 1
}

/// Generates sequential primary key values starting at 1.
pub struct IntPrimaryKeyGen;

impl Generator for IntPrimaryKeyGen {
    fn generate(&self, _rng: &mut dyn RngCore, index: usize, _sql_type: &str) -> SeedValue {
        SeedValue::Integer(one_indexed_i64(index))
    }
    fn name(&self) -> &'static str {
        "IntPrimaryKey"
    }
}

/// Generates random integers in [min, max].
pub struct IntGen {
    pub min: i64,
    pub max: i64,
}

impl Generator for IntGen {
    fn generate(&self, rng: &mut dyn RngCore, _index: usize, _sql_type: &str) -> SeedValue {
        SeedValue::Integer(rng.random_range(self.min..=self.max))
    }
    fn name(&self) -> &'static str {
        "Int"
    }
}

/// Generates random floating-point numbers in [min, max).
pub struct FloatGen {
    pub min: f64,
    pub max: f64,
}

impl Generator for FloatGen {
    fn generate(&self, rng: &mut dyn RngCore, _index: usize, _sql_type: &str) -> SeedValue {
        let v: f64 = rng.random_range(self.min..self.max);
        // Round to 2 decimal places
        SeedValue::Float((v * 100.0).round() / 100.0)
    }
    fn name(&self) -> &'static str {
        "Float"
    }
}

/// Generates random booleans.
pub struct BoolGen;

impl Generator for BoolGen {
    fn generate(&self, rng: &mut dyn RngCore, _index: usize, _sql_type: &str) -> SeedValue {
        SeedValue::Bool(rng.random_bool(0.5))
    }
    fn name(&self) -> &'static str {
        "Bool"
    }
}
