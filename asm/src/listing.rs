use arch::inst::cformat_word;
use color_print::cformat;

use crate::parser::{Operand, Stmt};
use crate::Assembly;

/// One row per statement: address, encoded byte, disassembly, source form.
pub fn cformat_listing(asm: &Assembly) -> Vec<String> {
    let mut rows = vec![];
    for (line, addr) in asm.lines.iter().zip(&asm.addrs) {
        let head = match addr {
            Some(addr) => {
                let bin = asm.mem[*addr];
                let dis = match &line.stmt {
                    Stmt::Data(_) => cformat!("<c>{:<8}</>", "data"),
                    _ => cformat_word(bin),
                };
                format!("[{:X}] {:02X} {}", addr, bin, dis)
            }
            None => format!("{:15}", ""),
        };

        let body = match &line.stmt {
            Stmt::Label(name) => cformat!("<g>{}:</>", name),
            Stmt::Op(op, None) => cformat!("<r>{}</>", op),
            Stmt::Op(op, Some(Operand::Literal(val))) => cformat!("<r>{}</> <y>{}</>", op, val),
            Stmt::Op(op, Some(Operand::Ident(name))) => match asm.labels.get_addr(name) {
                Some(addr) => cformat!("<r>{}</> <g>{}({})</>", op, name, addr),
                None => cformat!("<r>{}</> <r,u>{}</>", op, name),
            },
            Stmt::Data(Some(val)) => cformat!("<c>DAT</> <y>{}</>", val),
            Stmt::Data(None) => cformat!("<c>DAT</> <r,u>?</>"),
            Stmt::Stray(kind) => cformat!("<r,u>{}</>", kind),
        };

        rows.push(format!("{} | {:>4}: {}", head, line.pos.row, body));
    }
    rows
}

/// Label table: name, address and the constant of `name: DAT n` labels.
pub fn cformat_labels(asm: &Assembly) -> Vec<String> {
    asm.labels
        .iter()
        .map(|(name, label)| match label.data() {
            Some(val) => format!(
                "{:>14} | {} = {:X} {}",
                "",
                cformat!("<g>{}</>", name),
                label.addr,
                cformat!("<c>DAT</> <y>{}</>", val)
            ),
            None => format!("{:>14} | {} = {:X}", "", cformat!("<g>{}</>", name), label.addr),
        })
        .collect()
}

pub fn print_dump(file: &str, asm: &Assembly) {
    eprintln!(
        "{}+------[{}]{}",
        "-".repeat(15),
        file,
        "-".repeat(45usize.saturating_sub(file.len()))
    );
    for row in cformat_listing(asm) {
        eprintln!("{}", row);
    }
    eprintln!("---------------+-----------------------------------------------------");
    for row in cformat_labels(asm) {
        eprintln!("{}", row);
    }
}

/// Plain hex form of an image, one byte per token, eight per line.
pub fn hex(mem: &[u8]) -> String {
    mem.chunks(8)
        .map(|row| {
            row.iter()
                .map(|b| format!("{:02X}", b))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
