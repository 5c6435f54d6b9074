use indexmap::IndexMap;

use crate::error::{Diag, Error};
use crate::parser::{Line, Stmt};
use crate::token::Pos;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelType {
    Code,
    Data(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub pos: Pos,
    pub kind: LabelType,
    pub addr: usize,
}

/// Symbol table: label name (colon stripped) to the address of the word that
/// follows its definition.
#[derive(Debug, Clone, Default)]
pub struct Labels {
    labels: IndexMap<String, Label>,
}

impl Label {
    /// Constant recorded by `name: DAT n`.
    pub fn data(&self) -> Option<i64> {
        match self.kind {
            LabelType::Data(val) => Some(val),
            LabelType::Code => None,
        }
    }
}

impl Labels {
    pub fn new() -> Self {
        Labels {
            labels: IndexMap::new(),
        }
    }

    /// Pre-pass over the statements, so forward references resolve.
    pub fn collect(lines: &[Line]) -> (Labels, Vec<Diag>) {
        let mut labels = Labels::new();
        let mut diags = vec![];
        let mut addr = 0;

        for (idx, line) in lines.iter().enumerate() {
            if let Stmt::Label(name) = &line.stmt {
                let kind = match lines.get(idx + 1).map(|next| &next.stmt) {
                    Some(Stmt::Data(Some(val))) => LabelType::Data(*val),
                    _ => LabelType::Code,
                };
                let label = Label {
                    pos: line.pos,
                    kind,
                    addr,
                };
                if let Err(err) = labels.insert(name.clone(), label) {
                    diags.push(Diag::new(err, line.pos));
                }
            }
            addr += line.stmt.words();
        }
        (labels, diags)
    }

    /// Bind a label. A second definition is rejected and the first one kept.
    pub fn insert(&mut self, name: String, label: Label) -> Result<(), Error> {
        if self.labels.contains_key(&name) {
            return Err(Error::RedefinedLabel(name));
        }
        self.labels.insert(name, label);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Label> {
        self.labels.get(name)
    }

    pub fn get_addr(&self, name: &str) -> Option<usize> {
        self.labels.get(name).map(|label| label.addr)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.labels.contains_key(name)
    }

    /// Labels in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Label)> {
        self.labels.iter()
    }

}
