//! Shared nutrition data structure
//!
//! One ingredient's macronutrient breakdown. The same shape doubles as the
//! meal totals.

/// Macronutrient breakdown
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutritionRecord {
    pub calories: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

/// Sum of all nutrition records in one analysis
pub type Totals = NutritionRecord;

/// kcal per gram of protein and carbohydrate
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
/// kcal per gram of fat
pub const KCAL_PER_G_FAT: f64 = 9.0;

impl NutritionRecord {
    pub const fn new(calories: f64, protein_g: f64, fat_g: f64, carbs_g: f64) -> Self {
        Self {
            calories,
            protein_g,
            fat_g,
            carbs_g,
        }
    }

    /// Create a new record with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale nutrition values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein_g: self.protein_g * multiplier,
            fat_g: self.fat_g * multiplier,
            carbs_g: self.carbs_g * multiplier,
        }
    }

    /// Add another record to this one
    pub fn add(&self, other: &NutritionRecord) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein_g: self.protein_g + other.protein_g,
            fat_g: self.fat_g + other.fat_g,
            carbs_g: self.carbs_g + other.carbs_g,
        }
    }

    /// Energy implied by the macronutrients alone (Atwater factors)
    pub fn macro_energy(&self) -> f64 {
        self.protein_g * KCAL_PER_G_PROTEIN
            + self.fat_g * KCAL_PER_G_FAT
            + self.carbs_g * KCAL_PER_G_CARBS
    }
}

impl std::ops::Add for NutritionRecord {
    type Output = NutritionRecord;

    fn add(self, other: NutritionRecord) -> NutritionRecord {
        NutritionRecord::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for NutritionRecord {
    type Output = NutritionRecord;

    fn mul(self, multiplier: f64) -> NutritionRecord {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for NutritionRecord {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutritionRecord::zero(), |acc, n| acc + n)
    }
}

impl<'a> std::iter::Sum<&'a NutritionRecord> for NutritionRecord {
    fn sum<I: Iterator<Item = &'a NutritionRecord>>(iter: I) -> Self {
        iter.fold(NutritionRecord::zero(), |acc, n| acc + *n)
    }
}
