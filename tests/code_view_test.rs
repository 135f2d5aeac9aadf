//! Integration tests for the debugger views over a 6502 snapshot.

use nese_debug::{
    CodeView, CodeViewConfig, CpuSnapshot, DebugTarget, FlatMemory, Registers6502, RegistersView,
    StackView, TableView, INVALID_CELL,
};

/// Typical NES reset handler at $8000:
///
/// ```text
/// 8000  SEI
/// 8001  CLD
/// 8002  LDX #$FF
/// 8004  TXS
/// 8005  BIT $2002
/// 8008  BPL $8005
/// 800A  JMP $800A
/// ```
const RESET_HANDLER: [u8; 13] = [
    0x78, 0xD8, 0xA2, 0xFF, 0x9A, 0x2C, 0x02, 0x20, 0x10, 0xFB, 0x4C, 0x0A, 0x80,
];

fn setup_cpu() -> CpuSnapshot<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(0x8000, &RESET_HANDLER);
    CpuSnapshot::with_registers(
        memory,
        Registers6502 {
            pc: 0x8000,
            ..Registers6502::default()
        },
    )
}

#[test]
fn test_listing_rows() {
    let cpu = setup_cpu();
    let mut view = CodeView::new(CodeViewConfig::default());
    view.reset(0x8000);

    let rows = view.render(&cpu, 0..7);
    let text: Vec<_> = rows.iter().map(|r| r[2].as_str()).collect();
    assert_eq!(
        text,
        ["SEI", "CLD", "LDX #$FF", "TXS", "BIT $2002", "BPL $8005", "JMP $800A"]
    );
    assert_eq!(rows[4][0], "0x00008005");
    assert_eq!(rows[4][1], "2C 02 20");
}

#[test]
fn test_stepping_through_the_wait_loop() {
    let mut cpu = setup_cpu();
    let mut view = CodeView::new(CodeViewConfig::default());
    view.reset(0x8000);
    assert!(view.update_instruction_pointer(0x8000, &cpu).view_reset);

    let mut active = Vec::new();
    for pc in [0x8000, 0x8001, 0x8002, 0x8004, 0x8005, 0x8008, 0x8005, 0x8008, 0x800A] {
        cpu.registers.pc = pc;
        let update = view.update_instruction_pointer(cpu.instruction_pointer(), &cpu);
        assert!(!update.view_reset, "pc 0x{:04X} should stay in view", pc);
        active.push(update.active_row);
    }
    assert_eq!(active, [0, 1, 2, 3, 4, 5, 4, 5, 6]);

    // Looping on the JMP does not repaint anything
    let update = view.update_instruction_pointer(0x800A, &cpu);
    assert!(update.changed_rows.is_empty());
}

#[test]
fn test_moving_highlight_reports_both_rows() {
    let cpu = setup_cpu();
    let mut view = CodeView::new(CodeViewConfig::default());
    view.reset(0x8000);

    view.update_instruction_pointer(0x8008, &cpu);
    let update = view.update_instruction_pointer(0x8005, &cpu);
    assert_eq!(update.changed_rows, vec![5, 4]);

    assert!(view.row_background(4, &cpu).is_some());
    assert!(view.row_background(5, &cpu).is_none());
}

#[test]
fn test_jump_into_operand_rebases() {
    let cpu = setup_cpu();
    let mut view = CodeView::new(CodeViewConfig::default());
    view.reset(0x8000);
    view.update_instruction_pointer(0x8005, &cpu);

    // $8003 is the operand of LDX #$FF
    let update = view.update_instruction_pointer(0x8003, &cpu);
    assert_eq!(update.active_row, 0);
    assert!(update.view_reset);
    assert_eq!(view.index().origin(), 0x8003);
    // From $8003 the bytes read FF (illegal) so the next row is unavailable
    assert_eq!(view.cell(&cpu, 0, 2).as_deref(), Some(INVALID_CELL));
    assert_eq!(view.cell(&cpu, 1, 0).as_deref(), Some(INVALID_CELL));
}

#[test]
fn test_reset_then_move_repaints_old_row() {
    let cpu = setup_cpu();
    let mut view = CodeView::new(CodeViewConfig::default());
    view.reset(0x8000);
    view.update_instruction_pointer(0x8008, &cpu);

    // Memory changed under the view, same origin
    view.reset(0x8000);
    let update = view.update_instruction_pointer(0x8002, &cpu);
    assert_eq!(update.active_row, 2);
    assert_eq!(update.changed_rows, vec![5, 2]);
    assert!(update.view_reset);

    // Later moves are incremental again
    let update = view.update_instruction_pointer(0x8004, &cpu);
    assert_eq!(update.changed_rows, vec![2, 3]);
    assert!(!update.view_reset);
}

#[test]
fn test_every_row_reports_something() {
    let cpu = setup_cpu();
    let mut view = CodeView::new(CodeViewConfig {
        max_rows: 128,
        ..CodeViewConfig::default()
    });
    view.reset(0x8000);

    let rows = view.render(&cpu, 0..view.row_count(&cpu));
    assert_eq!(rows.len(), 128);
    assert!(rows.iter().all(|r| r.len() == 3 && r.iter().all(|c| !c.is_empty())));
}

#[test]
fn test_register_and_stack_tables() {
    let mut cpu = setup_cpu();
    cpu.registers.sp = 0xFC;
    cpu.memory.load(0x01FD, &[0x30, 0x0A, 0x80]);

    let registers = RegistersView.render(&cpu, 0..6);
    assert_eq!(registers[3], vec!["SP".to_string(), "0xFC".to_string()]);

    let stack = StackView.render(&cpu, 0..StackView.row_count(&cpu));
    assert_eq!(stack.len(), 3);
    assert_eq!(stack[0], vec!["0x000001FD".to_string(), "0x30".to_string()]);
    assert_eq!(stack[2][1], "0x80");
}
