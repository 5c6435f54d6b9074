use arch::op::OpCode;
use color_print::ceprintln;
use thiserror::Error;

use crate::token::Pos;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unrecognized operation: `{0}`")]
    UnknownOperation(String),

    #[error("`{0}` requires an operand")]
    MissingOperand(OpCode),

    #[error("Operand `{0}` does not fit in 4 bits")]
    OperandRange(String),

    #[error("DAT requires an integer")]
    MissingData,

    #[error("DAT value `{0}` does not fit in 8 bits")]
    DataRange(i64),

    #[error("Undefined label: `{0}`")]
    UndefinedLabel(String),

    #[error("Re-defined label: `{0}`")]
    RedefinedLabel(String),

    #[error("Memory out of space: program needs more than 16 words")]
    OutOfMemory,
}

impl Error {
    /// Capacity errors stop the encoder; everything else is reported and skipped.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::OutOfMemory)
    }
}

/// An error tied to the source line it was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diag {
    pub err: Error,
    pub pos: Pos,
}

impl Diag {
    pub fn new(err: Error, pos: Pos) -> Self {
        Diag { err, pos }
    }

    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, file: &str, lines: &[&str]) {
        ceprintln!("<red,bold>error</>: {}", self.err);

        if self.pos.row == 0 {
            ceprintln!("     <blue>--></> <underline>{}</>", file);
            return;
        }

        let line_num = self.pos.row;
        ceprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
        ceprintln!("      <blue>|</>");

        let line_content = lines.get(line_num - 1).copied().unwrap_or("");

        ceprintln!(" <blue>{:>4} |</> {}", line_num, line_content);
        ceprintln!("      <blue>|</>");
    }
}

#[derive(Error, Debug)]
pub enum IoError {
    #[error("Failed to read file: {0}")]
    FileRead(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}
