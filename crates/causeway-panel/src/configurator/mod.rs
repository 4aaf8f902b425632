//! VariableConfigurator — target/model selection plus the treatment and
//! condition variable lists, validated against fetched state bounds.

pub mod input;

use causeway_core::errors::ValidationError;
use causeway_core::{BoundCheck, ConditionVar, PredictionModel, StateBounds, TreatmentVar};

/// Holds the user's variable selections for the next estimation request.
#[derive(Debug, Clone, Default)]
pub struct VariableConfigurator {
    target_var: Option<String>,
    prediction_model: Option<PredictionModel>,
    treatments: Vec<TreatmentVar>,
    conditions: Vec<ConditionVar>,
}

impl VariableConfigurator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target_var(&self) -> Option<&str> {
        self.target_var.as_deref()
    }

    pub fn prediction_model(&self) -> Option<PredictionModel> {
        self.prediction_model
    }

    pub fn treatments(&self) -> &[TreatmentVar] {
        &self.treatments
    }

    pub fn conditions(&self) -> &[ConditionVar] {
        &self.conditions
    }

    pub fn has_treatments(&self) -> bool {
        !self.treatments.is_empty()
    }

    pub fn has_conditions(&self) -> bool {
        !self.conditions.is_empty()
    }

    /// Variable entry opens once both target and model are chosen.
    pub fn can_add_variables(&self) -> bool {
        self.target_var.is_some() && self.prediction_model.is_some()
    }

    /// Choose the estimation target. Must name a known variable.
    pub fn set_target_var(
        &mut self,
        var_names: &[String],
        name: &str,
    ) -> Result<(), ValidationError> {
        if !var_names.iter().any(|v| v == name) {
            return Err(ValidationError::UnknownVariable {
                name: name.to_string(),
            });
        }
        self.target_var = Some(name.to_string());
        Ok(())
    }

    pub fn set_prediction_model(&mut self, model: PredictionModel) {
        self.prediction_model = Some(model);
    }

    /// Add a treatment variable. Both values must be present and within the
    /// variable's max state bound; a prior entry with the same name is
    /// replaced (list length unchanged).
    pub fn add_treatment(
        &mut self,
        bounds: &StateBounds,
        name: &str,
        treatment: Option<f64>,
        control: Option<f64>,
    ) -> Result<(), ValidationError> {
        let treatment = treatment.ok_or(ValidationError::MissingValue {
            field: "treatment value",
        })?;
        let control = control.ok_or(ValidationError::MissingValue {
            field: "control value",
        })?;
        check_bound(bounds, name, "treatment value", treatment)?;
        check_bound(bounds, name, "control value", control)?;

        if let Some(index) = self.treatments.iter().position(|t| t.name == name) {
            self.treatments.remove(index);
        }
        self.treatments.push(TreatmentVar::new(name, treatment, control));
        Ok(())
    }

    /// Add a condition variable. Same bound and replacement rules, but only
    /// the one value is required.
    pub fn add_condition(
        &mut self,
        bounds: &StateBounds,
        name: &str,
        value: Option<f64>,
    ) -> Result<(), ValidationError> {
        let value = value.ok_or(ValidationError::MissingValue {
            field: "condition value",
        })?;
        check_bound(bounds, name, "condition value", value)?;

        if let Some(index) = self.conditions.iter().position(|c| c.name == name) {
            self.conditions.remove(index);
        }
        self.conditions.push(ConditionVar::new(name, value));
        Ok(())
    }

    /// Remove the treatment entry at `index`, preserving the order of the
    /// rest. Out-of-range indices are a no-op.
    pub fn remove_treatment(&mut self, index: usize) -> Option<TreatmentVar> {
        (index < self.treatments.len()).then(|| self.treatments.remove(index))
    }

    /// Remove the condition entry at `index`, preserving the order of the
    /// rest.
    pub fn remove_condition(&mut self, index: usize) -> Option<ConditionVar> {
        (index < self.conditions.len()).then(|| self.conditions.remove(index))
    }
}

fn check_bound(
    bounds: &StateBounds,
    var: &str,
    field: &'static str,
    value: f64,
) -> Result<(), ValidationError> {
    match bounds.check(var, value) {
        BoundCheck::Within => Ok(()),
        BoundCheck::Exceeds { max } => Err(ValidationError::ExceedsBound {
            field,
            var: var.to_string(),
            value,
            max,
        }),
        BoundCheck::Unknown => Err(ValidationError::BoundUnknown {
            var: var.to_string(),
        }),
    }
}
