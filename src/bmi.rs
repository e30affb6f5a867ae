//! Body Mass Index calculation behind the "Calculate your BMI" widget.
//!
//! Inputs arrive as the raw text of the two form fields. The value is rounded
//! to one decimal first and the category is derived from the rounded value, so
//! what the visitor sees and how it is classified always agree.

use std::fmt;

use crate::error::{BmiError, Field};

/// Lower bound (inclusive) of the Healthy band.
pub const HEALTHY_MIN: f64 = 18.5;
/// Upper bound (exclusive) of the Healthy band. Exactly 24.9 is Overweight.
pub const HEALTHY_MAX: f64 = 24.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Healthy,
    Overweight,
}

impl BmiCategory {
    pub fn classify(bmi: f64) -> Self {
        if bmi < HEALTHY_MIN {
            BmiCategory::Underweight
        } else if bmi < HEALTHY_MAX {
            BmiCategory::Healthy
        } else {
            BmiCategory::Overweight
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Healthy => "Healthy",
            BmiCategory::Overweight => "Overweight",
        }
    }

    pub fn is_healthy(self) -> bool {
        self == BmiCategory::Healthy
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiInput {
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl BmiInput {
    pub fn parse(height: &str, weight: &str) -> Result<Self, BmiError> {
        let height = height.trim();
        let weight = weight.trim();
        if height.is_empty() {
            return Err(BmiError::MissingInput(Field::Height));
        }
        if weight.is_empty() {
            return Err(BmiError::MissingInput(Field::Weight));
        }

        Ok(Self {
            height_cm: parse_positive(Field::Height, height)?,
            weight_kg: parse_positive(Field::Weight, weight)?,
        })
    }

    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm / 100.0;
        self.weight_kg / (height_m * height_m)
    }
}

fn parse_positive(field: Field, raw: &str) -> Result<f64, BmiError> {
    let value: f64 = raw.parse().map_err(|_| BmiError::InvalidNumber {
        field,
        value: raw.to_string(),
    })?;
    // "NaN" and "inf" parse fine as f64 but are not numbers a visitor can type.
    if !value.is_finite() {
        return Err(BmiError::InvalidNumber {
            field,
            value: raw.to_string(),
        });
    }
    if value <= 0.0 {
        return Err(BmiError::NotPositive { field });
    }
    Ok(value)
}

#[derive(Debug, Clone, PartialEq)]
pub struct BmiResult {
    pub value: f64,
    pub display: String,
    pub category: BmiCategory,
}

impl BmiResult {
    fn from_raw(raw: f64) -> Result<Self, BmiError> {
        if !raw.is_finite() {
            return Err(BmiError::OutOfRange);
        }
        let display = one_decimal(raw);
        let value: f64 = display.parse().map_err(|_| BmiError::OutOfRange)?;
        Ok(Self {
            value,
            category: BmiCategory::classify(value),
            display,
        })
    }
}

/// Formats to one decimal from the exact binary value, so 18.45 (stored as
/// 18.4499...) stays 18.4. Exact halves round up rather than to even.
fn one_decimal(raw: f64) -> String {
    // Only odd multiples of 0.25 sit exactly halfway between two tenths.
    let quarters = raw * 4.0;
    if quarters.fract() == 0.0 && quarters.rem_euclid(2.0) == 1.0 {
        return format!("{:.1}", (raw * 10.0).ceil() / 10.0);
    }
    format!("{:.1}", raw)
}

/// Parses both fields and classifies the resulting BMI.
pub fn calculate(height_cm: &str, weight_kg: &str) -> Result<BmiResult, BmiError> {
    let input = BmiInput::parse(height_cm, weight_kg)?;
    BmiResult::from_raw(input.bmi())
}

/// One row of the reference chart printed next to the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartBand {
    pub range: &'static str,
    pub status: &'static str,
    pub color_class: &'static str,
}

/// The chart lists an "Obese" band the calculator itself never reports;
/// anything from 24.9 up comes back as Overweight.
pub const BMI_CHART: [ChartBand; 4] = [
    ChartBand { range: "Below 18.5", status: "Underweight", color_class: "text-yellow-500" },
    ChartBand { range: "18.5 - 24.9", status: "Healthy", color_class: "text-green-500" },
    ChartBand { range: "25.0 - 29.9", status: "Overweight", color_class: "text-orange-500" },
    ChartBand { range: "30.0 & Above", status: "Obese", color_class: "text-red-500" },
];
