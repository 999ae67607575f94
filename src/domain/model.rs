use crate::utils::error::PrinterError;
use crate::utils::validation::validate_non_negative;
use serde::Serialize;
use std::fmt;

/// An integer already checked to be `>= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct NonNegativeNumber(i64);

impl NonNegativeNumber {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for NonNegativeNumber {
    type Error = PrinterError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        validate_non_negative(value)?;
        Ok(Self(value))
    }
}

impl fmt::Display for NonNegativeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn format_message(n: NonNegativeNumber) -> String {
    format!("Message from C: We got the number {}!", n)
}

#[derive(Debug, Clone, Serialize)]
pub struct FunctionDef {
    pub name: &'static str,
    pub doc: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModuleDef {
    pub name: &'static str,
    pub doc: &'static str,
    pub version: &'static str,
    pub functions: &'static [FunctionDef],
}

impl ModuleDef {
    pub fn function(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.iter().find(|f| f.name == name)
    }
}

pub const PRINT_NUMBER: FunctionDef = FunctionDef {
    name: "print_number",
    doc: "Prints a message to stdout. Requires a non-negative integer argument.",
};

pub const EXAMPLE_LIBRARY: ModuleDef = ModuleDef {
    name: "example_library",
    doc: "A toy C library showing how work with the C API.",
    version: env!("CARGO_PKG_VERSION"),
    functions: &[PRINT_NUMBER],
};
