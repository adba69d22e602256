//! Archive Form - Raw Field Values and Client-Side Validation

use crate::domain::archive::{ArchiveMetadata, ArchivePayload};

/// Text fields of the archive form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Number,
    Source,
    Location,
    Unit,
    DeviceId,
    BatteryLevel,
}

impl FormField {
    /// Rendering order
    pub const ALL: [FormField; 6] = [
        FormField::Number,
        FormField::Source,
        FormField::Location,
        FormField::Unit,
        FormField::DeviceId,
        FormField::BatteryLevel,
    ];

    pub fn label_key(&self) -> &'static str {
        match self {
            FormField::Number => "archive-number",
            FormField::Source => "archive-source",
            FormField::Location => "archive-location",
            FormField::Unit => "archive-unit",
            FormField::DeviceId => "archive-device-id",
            FormField::BatteryLevel => "archive-battery-level",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Number => "23.5",
            FormField::Source => "sensor",
            FormField::Location => "lab-1",
            FormField::Unit => "°C",
            FormField::DeviceId => "DEV-001",
            FormField::BatteryLevel => "0 - 100",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, FormField::BatteryLevel)
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    NotANumber,
    OutOfRange,
}

impl FieldError {
    pub fn message_key(&self) -> &'static str {
        match self {
            FieldError::Required => "field-required",
            FieldError::NotANumber => "field-not-a-number",
            FieldError::OutOfRange => "field-out-of-range",
        }
    }
}

/// Per-field errors in rendering order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(Vec<(FormField, FieldError)>);

impl FormErrors {
    fn push(&mut self, field: FormField, error: FieldError) {
        self.0.push((field, error));
    }

    pub fn get(&self, field: FormField) -> Option<FieldError> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, e)| *e)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Raw values as typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArchiveForm {
    pub number: String,
    pub source: String,
    pub location: String,
    pub unit: String,
    pub device_id: String,
    pub battery_level: String,
    pub calibrated: bool,
    pub updated: bool,
}

impl ArchiveForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Number => &self.number,
            FormField::Source => &self.source,
            FormField::Location => &self.location,
            FormField::Unit => &self.unit,
            FormField::DeviceId => &self.device_id,
            FormField::BatteryLevel => &self.battery_level,
        }
    }

    pub fn set_value(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Number => self.number = value,
            FormField::Source => self.source = value,
            FormField::Location => self.location = value,
            FormField::Unit => self.unit = value,
            FormField::DeviceId => self.device_id = value,
            FormField::BatteryLevel => self.battery_level = value,
        }
    }

    /// Build the payload, or report every invalid field.
    ///
    /// Text values are trimmed. An empty required field is always an error.
    pub fn validate(&self) -> Result<ArchivePayload, FormErrors> {
        let mut errors = FormErrors::default();

        for field in FormField::ALL {
            if field.is_required() && self.value(field).trim().is_empty() {
                errors.push(field, FieldError::Required);
            }
        }

        let number = match parse_number(&self.number) {
            Ok(n) => n,
            Err(err) => {
                if errors.get(FormField::Number).is_none() {
                    errors.push(FormField::Number, err);
                }
                None
            }
        };

        let battery_level = match parse_number(&self.battery_level) {
            Ok(Some(level)) if !(0.0..=100.0).contains(&level) => {
                errors.push(FormField::BatteryLevel, FieldError::OutOfRange);
                None
            }
            Ok(level) => level,
            Err(err) => {
                errors.push(FormField::BatteryLevel, err);
                None
            }
        };

        match number {
            Some(number) if errors.is_empty() => Ok(ArchivePayload {
                number,
                metadata: ArchiveMetadata {
                    source: self.source.trim().to_string(),
                    location: self.location.trim().to_string(),
                    unit: self.unit.trim().to_string(),
                    device_id: self.device_id.trim().to_string(),
                    battery_level,
                    calibrated: self.calibrated,
                    updated: self.updated,
                },
            }),
            _ => Err(errors),
        }
    }
}

/// `Ok(None)` for blank input, finite floats only
fn parse_number(raw: &str) -> Result<Option<f64>, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Some(n)),
        _ => Err(FieldError::NotANumber),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ArchiveForm {
        ArchiveForm {
            number: " 21.5 ".into(),
            source: "sensor".into(),
            location: "lab-2".into(),
            unit: "C".into(),
            device_id: " DEV-001".into(),
            battery_level: String::new(),
            calibrated: true,
            updated: false,
        }
    }

    #[test]
    fn test_valid_form_builds_payload() {
        let payload = filled().validate().expect("valid");
        assert_eq!(payload.number, 21.5);
        assert_eq!(payload.metadata.device_id, "DEV-001");
        assert_eq!(payload.metadata.battery_level, None);
        assert!(payload.metadata.calibrated);
        assert!(!payload.metadata.updated);
    }

    #[test]
    fn test_empty_required_field_blocks_submission() {
        for field in FormField::ALL.into_iter().filter(FormField::is_required) {
            let mut form = filled();
            form.set_value(field, "   ");
            let errors = form.validate().expect_err("must be rejected");
            assert_eq!(errors.get(field), Some(FieldError::Required), "{field:?}");
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let errors = ArchiveForm::default().validate().expect_err("empty form");
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(FormField::BatteryLevel), None);
    }

    #[test]
    fn test_number_must_parse() {
        let mut form = filled();
        form.number = "abc".into();
        let errors = form.validate().expect_err("not a number");
        assert_eq!(errors.get(FormField::Number), Some(FieldError::NotANumber));

        form.number = "NaN".into();
        let errors = form.validate().expect_err("nan");
        assert_eq!(errors.get(FormField::Number), Some(FieldError::NotANumber));
    }

    #[test]
    fn test_battery_level_optional_but_checked() {
        let mut form = filled();
        form.battery_level = "87".into();
        assert_eq!(
            form.validate().expect("valid").metadata.battery_level,
            Some(87.0)
        );

        form.battery_level = "150".into();
        let errors = form.validate().expect_err("out of range");
        assert_eq!(
            errors.get(FormField::BatteryLevel),
            Some(FieldError::OutOfRange)
        );

        form.battery_level = "full".into();
        let errors = form.validate().expect_err("not a number");
        assert_eq!(
            errors.get(FormField::BatteryLevel),
            Some(FieldError::NotANumber)
        );
    }
}
