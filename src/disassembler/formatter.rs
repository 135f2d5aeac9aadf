//! Formatting functions for disassembled instructions

use crate::addressing::AddressingMode;
use crate::disassembler::Instruction;

/// Format a single instruction as assembly text
///
/// Branch operands are shown as their resolved target address.
pub fn format_instruction(instr: &Instruction) -> String {
    let operand = format_operand(instr);

    if operand.is_empty() {
        instr.mnemonic.to_string()
    } else {
        format!("{} {}", instr.mnemonic, operand)
    }
}

/// Instruction bytes as space-separated upper-case hex pairs (`A9 42`).
pub fn format_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_operand(instr: &Instruction) -> String {
    use AddressingMode::*;

    if instr.mnemonic == ".byte" {
        return format!("${:02X}", instr.opcode);
    }

    let zp = || match instr.operand_bytes.first() {
        Some(b) => format!("{:02X}", b),
        None => "??".to_string(),
    };
    let abs = || match instr.operand_bytes.as_slice() {
        [lo, hi, ..] => format!("{:04X}", u16::from_le_bytes([*lo, *hi])),
        _ => "????".to_string(),
    };

    match instr.addressing_mode {
        Implicit => String::new(),
        Accumulator => "A".to_string(),
        Immediate => format!("#${}", zp()),
        ZeroPage => format!("${}", zp()),
        ZeroPageX => format!("${},X", zp()),
        ZeroPageY => format!("${},Y", zp()),
        Relative => match instr.operand_bytes.first() {
            Some(&offset) => {
                let target = instr
                    .address
                    .wrapping_add(2)
                    .wrapping_add(offset as i8 as u16);
                format!("${:04X}", target)
            }
            None => "$????".to_string(),
        },
        Absolute => format!("${}", abs()),
        AbsoluteX => format!("${},X", abs()),
        AbsoluteY => format!("${},Y", abs()),
        Indirect => format!("(${})", abs()),
        IndirectX => format!("(${},X)", zp()),
        IndirectY => format!("(${}),Y", zp()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instr(opcode: u8, mnemonic: &'static str, mode: AddressingMode, operands: &[u8]) -> Instruction {
        Instruction {
            address: 0x8000,
            opcode,
            mnemonic,
            addressing_mode: mode,
            operand_bytes: operands.to_vec(),
            size_bytes: 1 + operands.len() as u8,
            base_cycles: 2,
        }
    }

    #[test]
    fn test_format_immediate() {
        let i = instr(0xA9, "LDA", AddressingMode::Immediate, &[0x42]);
        assert_eq!(format_instruction(&i), "LDA #$42");
    }

    #[test]
    fn test_format_absolute_and_indirect() {
        let sta = instr(0x8D, "STA", AddressingMode::Absolute, &[0x00, 0x80]);
        assert_eq!(format_instruction(&sta), "STA $8000");

        let jmp = instr(0x6C, "JMP", AddressingMode::Indirect, &[0xFC, 0xFF]);
        assert_eq!(format_instruction(&jmp), "JMP ($FFFC)");
    }

    #[test]
    fn test_format_branch_targets() {
        // BNE -2 loops onto itself
        let back = instr(0xD0, "BNE", AddressingMode::Relative, &[0xFE]);
        assert_eq!(format_instruction(&back), "BNE $8000");

        let forward = instr(0xF0, "BEQ", AddressingMode::Relative, &[0x10]);
        assert_eq!(format_instruction(&forward), "BEQ $8012");
    }

    #[test]
    fn test_format_implied_and_data() {
        let nop = instr(0xEA, "NOP", AddressingMode::Implicit, &[]);
        assert_eq!(format_instruction(&nop), "NOP");

        let data = instr(0xFF, ".byte", AddressingMode::Implicit, &[]);
        assert_eq!(format_instruction(&data), ".byte $FF");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(&[0xA9, 0x0F]), "A9 0F");
        assert_eq!(format_bytes(&[0xEA]), "EA");
        assert_eq!(format_bytes(&[]), "");
    }
}
