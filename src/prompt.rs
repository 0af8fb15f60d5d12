use crate::console::{Console, Status};
use crate::error::CheckError;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Where operator answers come from. `Ok(None)` means the input is closed.
pub trait LineSource {
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

pub struct StdinSource {
    inner: io::StdinLock<'static>,
}

impl StdinSource {
    pub fn new() -> Self {
        Self {
            inner: io::stdin().lock(),
        }
    }
}

impl LineSource for StdinSource {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        match self.inner.read_line(&mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(buf)),
        }
    }
}

/// Yes/no gate in front of every checked value.
///
/// In automatic mode every question is answered yes without reading input.
/// Otherwise the question repeats until the operator types `y` or `n`
/// (any case); only a closed input ends the loop early.
pub struct ConfirmGate<S: LineSource> {
    input: S,
    auto: bool,
}

impl<S: LineSource> ConfirmGate<S> {
    pub fn new(input: S, auto: bool) -> Self {
        Self { input, auto }
    }

    pub fn is_auto(&self) -> bool {
        self.auto
    }

    #[cfg(test)]
    pub fn into_input(self) -> S {
        self.input
    }

    pub fn confirm<W: Write>(
        &mut self,
        prompt: &str,
        console: &mut Console<W>,
    ) -> Result<bool, CheckError> {
        if self.auto {
            debug!(prompt, "auto-accepted");
            return Ok(true);
        }

        loop {
            console
                .prompt(&format!("{} (y/n): ", prompt))
                .map_err(CheckError::Output)?;

            let answer = self
                .input
                .read_line()
                .map_err(CheckError::Input)?
                .ok_or(CheckError::InputClosed)?;

            match answer.trim_end_matches(['\r', '\n']).to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                other => {
                    warn!(input = other, "invalid confirmation input");
                    console
                        .status(Status::Warning, "please enter 'y' or 'n'.")
                        .map_err(CheckError::Output)?;
                }
            }
        }
    }
}

#[cfg(test)]
pub struct ScriptedInput {
    lines: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl ScriptedInput {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| format!("{}\n", l)).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
impl LineSource for ScriptedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(lines: &[&str]) -> (Result<bool, CheckError>, String, usize) {
        let mut gate = ConfirmGate::new(ScriptedInput::new(lines), false);
        let mut console = Console::new(Vec::new());
        let res = gate.confirm("Is this configuration correct?", &mut console);
        let out = String::from_utf8(console.into_inner()).unwrap();
        (res, out, gate.input.remaining())
    }

    #[test]
    fn auto_mode_never_reads_input() {
        let mut gate = ConfirmGate::new(ScriptedInput::new(&["n"]), true);
        let mut console = Console::new(Vec::new());
        assert!(gate.confirm("ok?", &mut console).unwrap());
        assert_eq!(gate.input.remaining(), 1);
        assert!(console.into_inner().is_empty());
    }

    #[test]
    fn accepts_either_case() {
        assert!(ask(&["y"]).0.unwrap());
        assert!(ask(&["Y"]).0.unwrap());
        assert!(!ask(&["n"]).0.unwrap());
        assert!(!ask(&["N"]).0.unwrap());
    }

    #[test]
    fn reprompts_until_valid() {
        let (res, out, remaining) = ask(&["yes", "", "maybe", "n", "y"]);
        assert!(!res.unwrap());
        assert_eq!(remaining, 1);
        assert_eq!(out.matches("please enter 'y' or 'n'").count(), 3);
        assert_eq!(out.matches("(y/n): ").count(), 4);
    }

    #[test]
    fn padded_answers_are_not_accepted() {
        let (res, out, remaining) = ask(&[" y ", "\ty", "n ", "Y", "n"]);
        assert!(res.unwrap());
        assert_eq!(remaining, 1);
        assert_eq!(out.matches("please enter 'y' or 'n'").count(), 3);
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let mut gate = ConfirmGate::new(CrlfInput(Some("N\r\n".to_string())), false);
        let mut console = Console::new(Vec::new());
        assert!(!gate.confirm("ok?", &mut console).unwrap());
    }

    struct CrlfInput(Option<String>);

    impl LineSource for CrlfInput {
        fn read_line(&mut self) -> io::Result<Option<String>> {
            Ok(self.0.take())
        }
    }

    #[test]
    fn closed_input_is_an_error() {
        let (res, _, _) = ask(&["x"]);
        assert!(matches!(res, Err(CheckError::InputClosed)));
    }
}
