//! Single-cycle processor orchestrator.
//!
//! This module composes the functional units and storage into one
//! state-transition function per clock tick. It performs:
//! 1. **Fetch:** Reads the instruction at the current PC.
//! 2. **Decode:** Extracts fields, immediate, and the control bundle.
//! 3. **Execute:** Selects operands, runs the ALU, and resolves the branch.
//! 4. **Memory:** Accesses data memory at the ALU result.
//! 5. **Write-back & Commit:** Writes the register file, stores to memory,
//!    and advances the PC — all from pre-commit state only.
//!
//! The hardware's parallel always-blocks are reimplemented as a pure
//! function pipeline evaluated in dependency order; identical architectural
//! state always produces an identical next state, bit for bit.

use tracing::trace;

use crate::config::Config;
use crate::core::mem::{DataMemory, InstructionMemory, RegisterFile};
use crate::core::pc::ProgramCounter;
use crate::core::signals::{AluSrc, WritebackSrc};
use crate::core::units::{Alu, BranchUnit, ControlUnit, ImmediateGenerator};
use crate::isa::InstructionBits;
use crate::isa::rv32i::opcodes;

/// Per-cycle debug observation points, sampled once per [`Processor::step`].
///
/// Read-only outputs for test harnesses; nothing feeds back into the core.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// PC of the instruction executed this cycle.
    pub pc: u32,
    /// The fetched instruction word.
    pub inst: u32,
    /// ALU result for this cycle.
    pub alu_result: u32,
    /// Value read from rs1.
    pub rs1_value: u32,
    /// Value read from rs2.
    pub rs2_value: u32,
}

/// Single-cycle RV32I processor.
///
/// Exclusively owns one instance of each stateful component. Construction
/// fixes the instruction image; thereafter the only mutations are the
/// per-cycle commits of [`step`](Self::step) and the synchronous
/// [`reset`](Self::reset).
#[derive(Debug)]
pub struct Processor {
    pc: ProgramCounter,
    regs: RegisterFile,
    imem: InstructionMemory,
    dmem: DataMemory,
}

impl Processor {
    /// Creates a processor running the built-in default program.
    pub fn new(config: &Config) -> Self {
        Self::with_program(config, &crate::core::mem::imem::DEFAULT_PROGRAM)
    }

    /// Creates a processor with an externally supplied program image,
    /// one instruction per memory slot starting at word 0.
    pub fn with_program(config: &Config, image: &[u32]) -> Self {
        Self {
            pc: ProgramCounter::new(config.reset_pc),
            regs: RegisterFile::new(),
            imem: InstructionMemory::with_image(config.imem_words, image),
            dmem: DataMemory::new(config.dmem_bytes),
        }
    }

    /// Asserts reset for `cycles` clock cycles.
    ///
    /// Each cycle it remains asserted, reset forces the PC to the reset
    /// address and clears the register file and data memory, winning over
    /// any ordinary write. Instruction memory is construction-time state and
    /// is untouched.
    pub fn reset(&mut self, cycles: u32) {
        for _ in 0..cycles {
            self.pc.reset();
            self.regs.reset();
            self.dmem.reset();
        }
    }

    /// Executes exactly one full cycle and returns the new debug snapshot.
    pub fn step(&mut self) -> Snapshot {
        let pc = self.pc.value();

        // Fetch.
        let inst = self.imem.fetch(pc);

        // Decode: fields, control bundle, and immediate are data-independent.
        let opcode = inst.opcode();
        let funct3 = inst.funct3();
        let ctrl = ControlUnit::decode(opcode, funct3, inst.funct7());
        let imm = ImmediateGenerator::generate(inst);

        // Register read (combinational, pre-commit values).
        let rs1_value = self.regs.read(inst.rs1());
        let rs2_value = self.regs.read(inst.rs2());

        // Operand selection. A four-way mux with a default-zero arm the
        // control unit never selects.
        let (a, b) = match ctrl.alu_src {
            AluSrc::Reg => (rs1_value, rs2_value),
            AluSrc::Imm => (rs1_value, imm),
            AluSrc::Pc => (pc, imm),
            AluSrc::Zero => (0, 0),
        };

        // Execute.
        let alu = Alu::execute(ctrl.alu_op, a, b);

        // Branch resolution uses raw register values, not ALU flags.
        let take_branch = BranchUnit::resolve(rs1_value, rs2_value, funct3, ctrl.branch, ctrl.jump);

        // Target: PC-relative for branches and JAL; register-relative with
        // bit 0 cleared for JALR only.
        let branch_target = if opcode == opcodes::OP_JALR {
            rs1_value.wrapping_add(imm) & !1
        } else {
            pc.wrapping_add(imm)
        };

        // Memory access at the ALU result.
        let load_value = if ctrl.mem_read {
            self.dmem.load(alu.result, funct3)
        } else {
            0
        };

        // Write-back mux, with the same explicit default-zero arm.
        let wb_value = match ctrl.write_src {
            WritebackSrc::Alu => alu.result,
            WritebackSrc::Mem => load_value,
            WritebackSrc::PcPlus4 => self.pc.plus_4(),
            WritebackSrc::Zero => 0,
        };

        // Commit: logically simultaneous; every input above came from the
        // pre-commit state, so ordering here is unobservable.
        if ctrl.mem_write {
            self.dmem.store(alu.result, rs2_value, funct3);
        }
        self.regs.write(ctrl.reg_write, inst.rd(), wb_value);
        self.pc.advance(take_branch, branch_target, false);

        trace!(
            pc,
            inst,
            result = alu.result,
            rs1 = rs1_value,
            rs2 = rs2_value,
            taken = take_branch,
            "cycle"
        );

        Snapshot {
            pc,
            inst,
            alu_result: alu.result,
            rs1_value,
            rs2_value,
        }
    }

    /// Current PC value.
    pub fn pc(&self) -> u32 {
        self.pc.value()
    }

    /// Copy of all 32 general-purpose registers.
    pub fn registers(&self) -> [u32; 32] {
        self.regs.dump()
    }

    /// Dumps PC and the register file to stdout in paired hex rows.
    pub fn dump_state(&self) {
        println!("PC = {:#010x}", self.pc.value());
        let r = self.regs.dump();
        for i in (0..32).step_by(2) {
            println!(
                "x{:<2} = {:#010x}    x{:<2} = {:#010x}",
                i,
                r[i],
                i + 1,
                r[i + 1]
            );
        }
    }
}
