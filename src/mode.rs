//! Execution mode parsed from raw flag tokens.

use crate::error::{CleanError, Result};

/// How a run behaves: simulate or delete, descend or not.
///
/// Built once from the process arguments and never mutated. Every token has
/// its leading `-` stripped and each remaining character is a flag:
/// `d` deletes, `r` enables recursion, `v` raises verbosity. A `--` token is
/// a named option given after the flags and is rejected as such.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode {
    readonly: bool,
    recurse: bool,
    verbose: bool,
}

impl Default for Mode {
    fn default() -> Self {
        Self {
            readonly: true,
            recurse: false,
            verbose: false,
        }
    }
}

impl Mode {
    /// Parse raw tokens such as `["-dv"]` or `["-d", "-r"]`.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        let mut mode = Self::default();
        for token in tokens {
            let token = token.as_ref().trim();
            if token.starts_with("--") {
                return Err(CleanError::MisplacedOption(token.to_string()));
            }
            let flags = token.strip_prefix('-').unwrap_or(token);
            for flag in flags.chars() {
                match flag {
                    'd' => mode.readonly = false,
                    'r' => mode.recurse = true,
                    'v' => mode.verbose = true,
                    other => return Err(CleanError::InvalidArgument(other)),
                }
            }
        }
        Ok(mode)
    }

    /// True when nothing should be removed.
    pub fn readonly(&self) -> bool {
        self.readonly
    }

    pub fn recurse(&self) -> bool {
        self.recurse
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
