//! Prints the debugger tables for a small NES reset handler.
//!
//! Run with `RUST_LOG=debug` to see the code view rebase as the
//! instruction pointer jumps around.

use nese_debug::{
    CodeView, CodeViewConfig, CpuSnapshot, FlatMemory, RegistersView, StackView, TableView,
};

fn print_table<T, V: TableView<T>>(title: &str, view: &V, target: &T, rows: usize) {
    println!("== {}", title);
    let headers: Vec<_> = (0..view.column_count())
        .map(|c| view.header(c).unwrap_or_default())
        .collect();
    println!("{}", headers.join(" | "));
    for row in view.render(target, 0..rows) {
        println!("{}", row.join(" | "));
    }
    println!();
}

fn main() {
    env_logger::init();

    let program = [
        0x78, // SEI
        0xD8, // CLD
        0xA2, 0xFF, // LDX #$FF
        0x9A, // TXS
        0x2C, 0x02, 0x20, // BIT $2002
        0x10, 0xFB, // BPL $8005
        0x20, 0x10, 0x80, // JSR $8010
        0x4C, 0x0D, 0x80, // JMP $800D
        0x60, // RTS
    ];

    let mut memory = FlatMemory::new();
    memory.load(0x8000, &program);
    let mut cpu = CpuSnapshot::new(memory);

    let config = CodeViewConfig::from_json(r#"{ "max_rows": 16 }"#).unwrap_or_default();
    let mut code = CodeView::new(config);
    code.reset(0x8000);

    for pc in [0x8000u16, 0x8005, 0x8008, 0x8005, 0x800A, 0x8010, 0x8003] {
        cpu.registers.pc = pc;
        let update = code.update_instruction_pointer(u32::from(pc), &cpu);
        println!(
            "pc=${:04X} row={} changed={:?} reset={}",
            pc, update.active_row, update.changed_rows, update.view_reset
        );
    }
    println!();

    cpu.registers.pc = 0x8010;
    cpu.registers.sp = 0xFB;
    cpu.memory.load(0x01FC, &[0x0C, 0x80]);
    code.update_instruction_pointer(0x8000, &cpu);
    code.update_instruction_pointer(0x8010, &cpu);

    print_table("Code", &code, &cpu, 12);
    print_table("Registers", &RegistersView, &cpu, 6);
    print_table("Stack", &StackView, &cpu, StackView.row_count(&cpu));
}
