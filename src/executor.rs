use crate::console::{Console, Status};
use crate::error::CheckError;
use crate::loader::load_document;
use crate::model::*;
use crate::prompt::{ConfirmGate, LineSource};
use serde_json::{Map, Value};
use std::io::Write;
use std::path::Path;
use tracing::debug;

const CONFIRM_PROMPT: &str = "Is this configuration correct?";

/// What a successful run checked, in the order it was shown.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    pub chips: Vec<String>,
    pub lines: Vec<String>,
}

struct Executor<'a, S: LineSource, W: Write> {
    dir: &'a Path,
    gate: &'a mut ConfirmGate<S>,
    console: &'a mut Console<W>,
    report: Report,
}

/// Run every check against the configuration tree in `dir`.
///
/// Stops at the first failure or rejection; nothing after it is looked at.
pub fn run<S: LineSource, W: Write>(
    dir: &Path,
    gate: &mut ConfirmGate<S>,
    console: &mut Console<W>,
) -> Result<Report, CheckError> {
    if !dir.is_dir() {
        return Err(CheckError::DirectoryMissing(dir.to_path_buf()));
    }

    let mut exec = Executor {
        dir,
        gate,
        console,
        report: Report::default(),
    };
    exec.run_all()?;
    Ok(exec.report)
}

impl<S: LineSource, W: Write> Executor<'_, S, W> {
    fn run_all(&mut self) -> Result<(), CheckError> {
        let root = load_document(&self.dir.join(ROOT_FILE))?;

        self.check_fake_data(&root)?;

        let chips = chip_map(&root)?;
        self.report.chips = chips.keys().cloned().collect();
        if !self.gate.is_auto() {
            let listed = format!("chips found in {}: {}", ROOT_FILE, list_repr(&self.report.chips));
            self.status(Status::Search, &listed)?;
            self.blank()?;
        }

        for (chip, entry) in chips {
            self.check_chip(chip, entry)?;
        }

        self.finish()
    }

    fn check_fake_data(&mut self, root: &Value) -> Result<(), CheckError> {
        let enabled = match resolve(root, FAKE_DATA_FIELD) {
            None => {
                return Err(CheckError::FieldMissing {
                    path: FAKE_DATA_FIELD.to_string(),
                })
            }
            Some(Value::Bool(b)) => *b,
            Some(_) => {
                return Err(CheckError::TypeMismatch {
                    field: FAKE_DATA_FIELD.to_string(),
                    expected: "boolean (True/False)",
                })
            }
        };
        debug!(enabled, "fake data flag");

        self.show_and_confirm(fake_data_line(enabled))
    }

    fn check_chip(&mut self, chip: &str, entry: &Value) -> Result<(), CheckError> {
        if !self.gate.is_auto() {
            self.blank()?;
            self.line(&format!("================== checking chip: {} ==================", chip))?;
        }

        let self_id = resolve_present(entry, SELF_ID_FIELD).ok_or_else(|| {
            CheckError::FieldMissing {
                path: self_id_path(chip),
            }
        })?;
        self.show_and_confirm(self_id_line(chip, self_id))?;

        let file = arch_file_name(chip);
        let path = self.dir.join(&file);
        if !path.exists() {
            return Err(CheckError::ArchFileMissing(file));
        }

        let arch = load_document(&path)?;
        let calc = resolve_present(&arch, CALC_METHOD_FIELD).ok_or_else(|| {
            CheckError::FieldMissingIn {
                file: file.clone(),
                path: CALC_METHOD_FIELD.to_string(),
            }
        })?;
        debug!(chip, file = %file, calc = %calc, "calc method");

        self.show_and_confirm(calc_method_line(&file, calc))
    }

    /// Interactive mode shows the line before asking; automatic mode only
    /// collects it for the summary.
    fn show_and_confirm(&mut self, line: String) -> Result<(), CheckError> {
        if !self.gate.is_auto() {
            self.line(&line)?;
        }
        self.report.lines.push(line);

        if self.gate.confirm(CONFIRM_PROMPT, &mut *self.console)? {
            Ok(())
        } else {
            Err(CheckError::Rejected)
        }
    }

    fn finish(&mut self) -> Result<(), CheckError> {
        self.blank()?;
        if !self.gate.is_auto() {
            return self.status(Status::Success, "all checks passed!");
        }

        self.line("=== Summary ===")?;
        for line in self.report.lines.clone() {
            self.line(&line)?;
        }
        self.blank()?;
        self.status(Status::Attention, "please review all of the configuration above.")
    }

    fn status(&mut self, status: Status, msg: &str) -> Result<(), CheckError> {
        self.console.status(status, msg).map_err(CheckError::Output)
    }

    fn line(&mut self, msg: &str) -> Result<(), CheckError> {
        self.console.line(msg).map_err(CheckError::Output)
    }

    fn blank(&mut self) -> Result<(), CheckError> {
        self.console.blank().map_err(CheckError::Output)
    }
}

fn chip_map(root: &Value) -> Result<&Map<String, Value>, CheckError> {
    match root.get(CHIP_FIELD) {
        None => Err(CheckError::FieldMissingIn {
            file: ROOT_FILE.to_string(),
            path: CHIP_FIELD.to_string(),
        }),
        Some(Value::Object(map)) => Ok(map),
        Some(_) => Err(CheckError::TypeMismatch {
            field: CHIP_FIELD.to_string(),
            expected: "mapping",
        }),
    }
}

fn list_repr(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|i| format!("'{}'", i)).collect();
    format!("[{}]", quoted.join(", "))
}
