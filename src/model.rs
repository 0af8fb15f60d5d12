use serde_json::Value;

pub const ROOT_FILE: &str = "config.json";
pub const FAKE_DATA_FIELD: &str = "chip_simulate_fake_data";
pub const CHIP_FIELD: &str = "chip";
pub const SELF_ID_FIELD: &str = "aio_config.ck_0.self_id";
pub const CALC_METHOD_FIELD: &str = "QuantumChipArch.calc_method";

/// Walk `doc` one dotted segment at a time.
///
/// Returns `None` as soon as a segment is missing or the current value is
/// not an object. Never mutates `doc`.
pub fn resolve<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(doc, |current, key| current.as_object()?.get(key))
}

/// Like [`resolve`], but a JSON `null` counts as absent.
pub fn resolve_present<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    resolve(doc, path).filter(|v| !v.is_null())
}

/// Render a value the way operators are used to reading it:
/// strings bare, booleans as `True`/`False`, null as `None`.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Architecture file for a chip. Chip `72` is stored as `D72`.
pub fn arch_file_name(chip: &str) -> String {
    if chip == "72" {
        "ChipArchConfig_D72.json".to_string()
    } else {
        format!("ChipArchConfig_{}.json", chip)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcMethod {
    Simulated,
    Real,
}

impl CalcMethod {
    pub fn classify(value: &Value) -> Self {
        match value {
            Value::Bool(true) => CalcMethod::Simulated,
            _ if value.as_f64() == Some(1.0) => CalcMethod::Simulated,
            _ => CalcMethod::Real,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            CalcMethod::Simulated => "currently simulated computation",
            CalcMethod::Real => "currently real computation",
        }
    }
}

pub fn fake_data_line(enabled: bool) -> String {
    let meaning = if enabled {
        "return fake data from simulated computation"
    } else {
        "use QVM simulated computation"
    };
    format!(
        "{}: {}, {}",
        FAKE_DATA_FIELD,
        render_value(&Value::Bool(enabled)),
        meaning
    )
}

pub fn self_id_path(chip: &str) -> String {
    format!("{}.{}.{}", CHIP_FIELD, chip, SELF_ID_FIELD)
}

pub fn self_id_line(chip: &str, value: &Value) -> String {
    format!("{}: {}", self_id_path(chip), render_value(value))
}

pub fn calc_method_line(file: &str, value: &Value) -> String {
    format!(
        "{} -> {}: {}, {}",
        file,
        CALC_METHOD_FIELD,
        render_value(value),
        CalcMethod::classify(value).describe()
    )
}
