use super::*;
use crate::error::CoreError;
use crate::registers::Flag;
use crate::ENTRY_POINT;

/// A fresh CPU with `program` placed at the entry point and all flags
/// cleared, so each test states exactly the flag inputs it cares about.
fn cpu_with_program(program: &[u8]) -> Cpu {
    let mut cpu = Cpu::new();
    for (i, byte) in program.iter().enumerate() {
        cpu.memory.write_byte(ENTRY_POINT + i as u16, *byte);
    }
    cpu.regs.f = 0x00;
    cpu
}

// --- reset states ----------------------------------------------------

#[test]
fn reset_without_boot_rom_matches_post_boot_state() {
    let cpu = Cpu::new();
    assert_eq!(cpu.regs.a, 0x01);
    assert_eq!(cpu.regs.f, 0xB0);
    assert_eq!(cpu.regs.b, 0x00);
    assert_eq!(cpu.regs.c, 0x13);
    assert_eq!(cpu.regs.d, 0x00);
    assert_eq!(cpu.regs.e, 0xD8);
    assert_eq!(cpu.regs.h, 0x01);
    assert_eq!(cpu.regs.l, 0x4D);
    assert_eq!(cpu.regs.sp, 0xFFFE);
    assert_eq!(cpu.regs.pc, 0x0100);
    assert!(!cpu.halted);
}

#[test]
fn reset_with_boot_rom_zeroes_everything() {
    let mut cpu = Cpu::new();
    cpu.halted = true;
    cpu.reset(true);
    assert_eq!(cpu.regs.af(), 0x0000);
    assert_eq!(cpu.regs.bc(), 0x0000);
    assert_eq!(cpu.regs.de(), 0x0000);
    assert_eq!(cpu.regs.hl(), 0x0000);
    assert_eq!(cpu.regs.sp, 0x0000);
    assert_eq!(cpu.regs.pc, 0x0000);
    assert!(!cpu.halted);
}

// --- loads and 16-bit immediates --------------------------------------

#[test]
fn ld_bc_nn_loads_little_endian() {
    // 0x0100: LD BC, 0x1234
    let mut cpu = cpu_with_program(&[0x01, 0x34, 0x12]);
    let cycles = cpu.step().unwrap();
    assert_eq!(cycles, 12);
    assert_eq!(cpu.regs.c, 0x34);
    assert_eq!(cpu.regs.b, 0x12);
    assert_eq!(cpu.regs.pc, 0x0103);
}

#[test]
fn ld_nn_sp_stores_both_bytes() {
    // 0x0100: LD (0xC000), SP
    let mut cpu = cpu_with_program(&[0x08, 0x00, 0xC0]);
    cpu.regs.sp = 0xBEEF;
    assert_eq!(cpu.step().unwrap(), 20);
    assert_eq!(cpu.memory.read_byte(0xC000), 0xEF);
    assert_eq!(cpu.memory.read_byte(0xC001), 0xBE);
}

#[test]
fn ld_hli_and_hld_move_the_pointer() {
    // 0x0100: LD (HL+), A ; LD (HL-), A
    let mut cpu = cpu_with_program(&[0x22, 0x32]);
    cpu.regs.a = 0x7E;
    cpu.regs.set_hl(0xC000);

    assert_eq!(cpu.step().unwrap(), 8);
    assert_eq!(cpu.memory.read_byte(0xC000), 0x7E);
    assert_eq!(cpu.regs.hl(), 0xC001);

    assert_eq!(cpu.step().unwrap(), 8);
    assert_eq!(cpu.memory.read_byte(0xC001), 0x7E);
    assert_eq!(cpu.regs.hl(), 0xC000);
}

#[test]
fn ldh_uses_the_high_page() {
    // 0x0100: LDH (0x80), A ; LDH A, (0x80) ; LD (C), A
    let mut cpu = cpu_with_program(&[0xE0, 0x80, 0xF0, 0x80, 0xE2]);
    cpu.regs.a = 0x42;
    assert_eq!(cpu.step().unwrap(), 12);
    assert_eq!(cpu.memory.read_byte(0xFF80), 0x42);

    cpu.regs.a = 0x00;
    assert_eq!(cpu.step().unwrap(), 12);
    assert_eq!(cpu.regs.a, 0x42);

    cpu.regs.c = 0x81;
    assert_eq!(cpu.step().unwrap(), 8);
    assert_eq!(cpu.memory.read_byte(0xFF81), 0x42);
}

#[test]
fn ld_r_r_costs_four_cycles() {
    // 0x0100: LD A, H ; LD A, A
    let mut cpu = cpu_with_program(&[0x7C, 0x7F]);
    cpu.regs.h = 0x99;
    assert_eq!(cpu.step().unwrap(), 4);
    assert_eq!(cpu.regs.a, 0x99);
    assert_eq!(cpu.step().unwrap(), 4);
    assert_eq!(cpu.regs.a, 0x99);
}

// --- 8-bit arithmetic -------------------------------------------------

#[test]
fn add_sets_half_carry_from_bit_three() {
    // 0x0100: ADD A, B
    let mut cpu = cpu_with_program(&[0x80]);
    cpu.regs.a = 0x0F;
    cpu.regs.b = 0x01;
    assert_eq!(cpu.step().unwrap(), 4);
    assert_eq!(cpu.regs.a, 0x10);
    assert!(!cpu.regs.flag(Flag::Z));
    assert!(!cpu.regs.flag(Flag::N));
    assert!(cpu.regs.flag(Flag::H));
    assert!(!cpu.regs.flag(Flag::C));
}

#[test]
fn add_wraps_and_sets_carry_and_zero() {
    // 0x0100: ADD A, 0x01
    let mut cpu = cpu_with_program(&[0xC6, 0x01]);
    cpu.regs.a = 0xFF;
    assert_eq!(cpu.step().unwrap(), 8);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.regs.flag(Flag::Z));
    assert!(cpu.regs.flag(Flag::H));
    assert!(cpu.regs.flag(Flag::C));
}

#[test]
fn adc_folds_the_incoming_carry() {
    // 0x0100: ADC A, B
    let mut cpu = cpu_with_program(&[0x88]);
    cpu.regs.a = 0xE0;
    cpu.regs.b = 0x1F;
    cpu.regs.set_flag(Flag::C, true);
    cpu.step().unwrap();
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.regs.flag(Flag::Z));
    assert!(cpu.regs.flag(Flag::H));
    assert!(cpu.regs.flag(Flag::C));
}

#[test]
fn sub_sets_borrow_flags() {
    // 0x0100: SUB A, B
    let mut cpu = cpu_with_program(&[0x90]);
    cpu.regs.a = 0x10;
    cpu.regs.b = 0x01;
    cpu.step().unwrap();
    assert_eq!(cpu.regs.a, 0x0F);
    assert!(!cpu.regs.flag(Flag::Z));
    assert!(cpu.regs.flag(Flag::N));
    assert!(cpu.regs.flag(Flag::H));
    assert!(!cpu.regs.flag(Flag::C));
}

#[test]
fn sub_below_zero_sets_carry() {
    // 0x0100: SUB A, 0x20
    let mut cpu = cpu_with_program(&[0xD6, 0x20]);
    cpu.regs.a = 0x10;
    cpu.step().unwrap();
    assert_eq!(cpu.regs.a, 0xF0);
    assert!(cpu.regs.flag(Flag::N));
    assert!(!cpu.regs.flag(Flag::H));
    assert!(cpu.regs.flag(Flag::C));
}

#[test]
fn sbc_folds_the_incoming_borrow() {
    // 0x0100: SBC A, B
    let mut cpu = cpu_with_program(&[0x98]);
    cpu.regs.a = 0x10;
    cpu.regs.b = 0x0F;
    cpu.regs.set_flag(Flag::C, true);
    cpu.step().unwrap();
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.regs.flag(Flag::Z));
    assert!(cpu.regs.flag(Flag::N));
}

#[test]
fn cp_sets_flags_without_storing() {
    // 0x0100: CP A, 0x42
    let mut cpu = cpu_with_program(&[0xFE, 0x42]);
    cpu.regs.a = 0x42;
    assert_eq!(cpu.step().unwrap(), 8);
    assert_eq!(cpu.regs.a, 0x42);
    assert!(cpu.regs.flag(Flag::Z));
    assert!(cpu.regs.flag(Flag::N));
}

#[test]
fn inc_r_leaves_carry_alone() {
    // 0x0100: INC E
    let mut cpu = cpu_with_program(&[0x1C]);
    cpu.regs.e = 0xFF;
    cpu.regs.set_flag(Flag::C, true);
    cpu.step().unwrap();
    assert_eq!(cpu.regs.e, 0x00);
    assert!(cpu.regs.flag(Flag::Z));
    assert!(!cpu.regs.flag(Flag::N));
    assert!(cpu.regs.flag(Flag::H));
    assert!(cpu.regs.flag(Flag::C));
}

#[test]
fn dec_r_leaves_carry_alone() {
    // 0x0100: DEC B
    let mut cpu = cpu_with_program(&[0x05]);
    cpu.regs.b = 0x10;
    cpu.regs.set_flag(Flag::C, true);
    cpu.step().unwrap();
    assert_eq!(cpu.regs.b, 0x0F);
    assert!(!cpu.regs.flag(Flag::Z));
    assert!(cpu.regs.flag(Flag::N));
    assert!(cpu.regs.flag(Flag::H));
    assert!(cpu.regs.flag(Flag::C));
}

#[test]
fn inc_hl_indirect_goes_through_memory() {
    // 0x0100: INC (HL)
    let mut cpu = cpu_with_program(&[0x34]);
    cpu.regs.set_hl(0xC000);
    cpu.memory.write_byte(0xC000, 0x0F);
    assert_eq!(cpu.step().unwrap(), 12);
    assert_eq!(cpu.memory.read_byte(0xC000), 0x10);
    assert!(cpu.regs.flag(Flag::H));
}

#[test]
fn and_or_xor_flag_profiles() {
    // 0x0100: AND A, B ; OR A, C ; XOR A, A
    let mut cpu = cpu_with_program(&[0xA0, 0xB1, 0xAF]);
    cpu.regs.a = 0xF0;
    cpu.regs.b = 0x0F;
    cpu.regs.c = 0x05;

    cpu.step().unwrap();
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.regs.flag(Flag::Z));
    assert!(cpu.regs.flag(Flag::H));
    assert!(!cpu.regs.flag(Flag::C));

    cpu.step().unwrap();
    assert_eq!(cpu.regs.a, 0x05);
    assert_eq!(cpu.regs.f, 0x00);

    cpu.step().unwrap();
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.regs.f, 0x80);
}

#[test]
fn cpl_inverts_and_sets_n_h() {
    // 0x0100: CPL
    let mut cpu = cpu_with_program(&[0x2F]);
    cpu.regs.a = 0x35;
    cpu.step().unwrap();
    assert_eq!(cpu.regs.a, 0xCA);
    assert!(cpu.regs.flag(Flag::N));
    assert!(cpu.regs.flag(Flag::H));
}

#[test]
fn scf_and_ccf_only_touch_n_h_c() {
    // 0x0100: SCF ; CCF
    let mut cpu = cpu_with_program(&[0x37, 0x3F]);
    cpu.regs.set_flag(Flag::Z, true);
    cpu.regs.set_flag(Flag::N, true);
    cpu.regs.set_flag(Flag::H, true);

    cpu.step().unwrap();
    assert!(cpu.regs.flag(Flag::Z));
    assert!(!cpu.regs.flag(Flag::N));
    assert!(!cpu.regs.flag(Flag::H));
    assert!(cpu.regs.flag(Flag::C));

    cpu.step().unwrap();
    assert!(cpu.regs.flag(Flag::Z));
    assert!(!cpu.regs.flag(Flag::C));
}

// --- 16-bit arithmetic ------------------------------------------------

#[test]
fn add_hl_carries_out_of_bit_eleven() {
    // 0x0100: ADD HL, BC
    let mut cpu = cpu_with_program(&[0x09]);
    cpu.regs.set_hl(0x0FFF);
    cpu.regs.set_bc(0x0001);
    cpu.regs.set_flag(Flag::Z, true);
    assert_eq!(cpu.step().unwrap(), 8);
    assert_eq!(cpu.regs.hl(), 0x1000);
    assert!(cpu.regs.flag(Flag::Z)); // untouched
    assert!(!cpu.regs.flag(Flag::N));
    assert!(cpu.regs.flag(Flag::H));
    assert!(!cpu.regs.flag(Flag::C));
}

#[test]
fn add_hl_carries_out_of_bit_fifteen() {
    // 0x0100: ADD HL, SP
    let mut cpu = cpu_with_program(&[0x39]);
    cpu.regs.set_hl(0x8000);
    cpu.regs.sp = 0x8000;
    cpu.step().unwrap();
    assert_eq!(cpu.regs.hl(), 0x0000);
    assert!(!cpu.regs.flag(Flag::H));
    assert!(cpu.regs.flag(Flag::C));
}

#[test]
fn inc_dec_rr_never_touch_flags() {
    // 0x0100: INC DE ; DEC DE
    let mut cpu = cpu_with_program(&[0x13, 0x1B]);
    cpu.regs.set_de(0xFFFF);
    cpu.regs.f = 0xF0;
    assert_eq!(cpu.step().unwrap(), 8);
    assert_eq!(cpu.regs.de(), 0x0000);
    assert_eq!(cpu.regs.f, 0xF0);
    assert_eq!(cpu.step().unwrap(), 8);
    assert_eq!(cpu.regs.de(), 0xFFFF);
    assert_eq!(cpu.regs.f, 0xF0);
}

#[test]
fn add_sp_e_uses_unsigned_low_byte_carries() {
    // 0x0100: ADD SP, -1
    let mut cpu = cpu_with_program(&[0xE8, 0xFF]);
    cpu.regs.sp = 0x0001;
    cpu.regs.set_flag(Flag::Z, true);
    assert_eq!(cpu.step().unwrap(), 16);
    assert_eq!(cpu.regs.sp, 0x0000);
    // 0x01 + 0xFF carries out of both nibble and byte.
    assert!(!cpu.regs.flag(Flag::Z));
    assert!(!cpu.regs.flag(Flag::N));
    assert!(cpu.regs.flag(Flag::H));
    assert!(cpu.regs.flag(Flag::C));
}

#[test]
fn ld_hl_sp_e_shares_the_displacement_rule() {
    // 0x0100: LD HL, SP+0x08
    let mut cpu = cpu_with_program(&[0xF8, 0x08]);
    cpu.regs.sp = 0xFFF8;
    assert_eq!(cpu.step().unwrap(), 12);
    assert_eq!(cpu.regs.hl(), 0x0000);
    assert_eq!(cpu.regs.sp, 0xFFF8);
    assert!(cpu.regs.flag(Flag::H));
    assert!(cpu.regs.flag(Flag::C));
}

// --- DAA --------------------------------------------------------------

#[test]
fn daa_corrects_a_bcd_addition() {
    // 0x0100: ADD A, B ; DAA
    let mut cpu = cpu_with_program(&[0x80, 0x27]);
    cpu.regs.a = 0x45;
    cpu.regs.b = 0x38;
    cpu.step().unwrap();
    assert_eq!(cpu.regs.a, 0x7D);
    cpu.step().unwrap();
    assert_eq!(cpu.regs.a, 0x83);
    assert!(!cpu.regs.flag(Flag::C));
    assert!(!cpu.regs.flag(Flag::H));
}

#[test]
fn daa_corrects_a_bcd_subtraction() {
    // 0x0100: SUB A, B ; DAA
    let mut cpu = cpu_with_program(&[0x90, 0x27]);
    cpu.regs.a = 0x20;
    cpu.regs.b = 0x13;
    cpu.step().unwrap();
    assert_eq!(cpu.regs.a, 0x0D);
    cpu.step().unwrap();
    assert_eq!(cpu.regs.a, 0x07);
}

// --- rotates, shifts and bit ops --------------------------------------

#[test]
fn rlca_always_clears_zero() {
    // 0x0100: RLCA
    let mut cpu = cpu_with_program(&[0x07]);
    cpu.regs.a = 0x00;
    cpu.regs.set_flag(Flag::Z, true);
    assert_eq!(cpu.step().unwrap(), 4);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(!cpu.regs.flag(Flag::Z));
}

#[test]
fn rla_rotates_through_carry() {
    // 0x0100: RLA
    let mut cpu = cpu_with_program(&[0x17]);
    cpu.regs.a = 0x80;
    cpu.regs.set_flag(Flag::C, false);
    cpu.step().unwrap();
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.regs.flag(Flag::C));
    assert!(!cpu.regs.flag(Flag::Z));
}

#[test]
fn rra_feeds_carry_into_bit_seven() {
    // 0x0100: RRA
    let mut cpu = cpu_with_program(&[0x1F]);
    cpu.regs.a = 0x01;
    cpu.regs.set_flag(Flag::C, true);
    cpu.step().unwrap();
    assert_eq!(cpu.regs.a, 0x80);
    assert!(cpu.regs.flag(Flag::C));
}

#[test]
fn cb_rlc_sets_zero_from_result() {
    // 0x0100: RLC B
    let mut cpu = cpu_with_program(&[0xCB, 0x00]);
    cpu.regs.b = 0x00;
    assert_eq!(cpu.step().unwrap(), 8);
    assert!(cpu.regs.flag(Flag::Z));
    assert!(!cpu.regs.flag(Flag::C));
}

#[test]
fn cb_rlc_wraps_bit_seven_into_carry() {
    // 0x0100: RLC A
    let mut cpu = cpu_with_program(&[0xCB, 0x07]);
    cpu.regs.a = 0x85;
    cpu.step().unwrap();
    assert_eq!(cpu.regs.a, 0x0B);
    assert!(cpu.regs.flag(Flag::C));
    assert!(!cpu.regs.flag(Flag::Z));
}

#[test]
fn sra_preserves_the_sign_bit() {
    // 0x0100: SRA D
    let mut cpu = cpu_with_program(&[0xCB, 0x2A]);
    cpu.regs.d = 0x81;
    cpu.step().unwrap();
    assert_eq!(cpu.regs.d, 0xC0);
    assert!(cpu.regs.flag(Flag::C));
}

#[test]
fn srl_clears_the_sign_bit() {
    // 0x0100: SRL A
    let mut cpu = cpu_with_program(&[0xCB, 0x3F]);
    cpu.regs.a = 0x81;
    cpu.step().unwrap();
    assert_eq!(cpu.regs.a, 0x40);
    assert!(cpu.regs.flag(Flag::C));
}

#[test]
fn swap_exchanges_nibbles_and_only_sets_zero() {
    // 0x0100: SWAP L ; SWAP H
    let mut cpu = cpu_with_program(&[0xCB, 0x35, 0xCB, 0x34]);
    cpu.regs.l = 0xAB;
    cpu.regs.h = 0x00;
    cpu.regs.set_flag(Flag::C, true);

    cpu.step().unwrap();
    assert_eq!(cpu.regs.l, 0xBA);
    assert_eq!(cpu.regs.f, 0x00);

    cpu.step().unwrap();
    assert_eq!(cpu.regs.h, 0x00);
    assert_eq!(cpu.regs.f, 0x80);
}

#[test]
fn bit_seven_reports_a_set_bit() {
    // 0x0100: BIT 7, A
    let mut cpu = cpu_with_program(&[0xCB, 0x7F]);
    cpu.regs.a = 0x80;
    cpu.regs.set_flag(Flag::C, true);
    assert_eq!(cpu.step().unwrap(), 8);
    assert!(!cpu.regs.flag(Flag::Z));
    assert!(!cpu.regs.flag(Flag::N));
    assert!(cpu.regs.flag(Flag::H));
    assert!(cpu.regs.flag(Flag::C)); // untouched
}

#[test]
fn bit_on_hl_indirect_costs_twelve() {
    // 0x0100: BIT 0, (HL)
    let mut cpu = cpu_with_program(&[0xCB, 0x46]);
    cpu.regs.set_hl(0xC000);
    assert_eq!(cpu.step().unwrap(), 12);
    assert!(cpu.regs.flag(Flag::Z));
}

#[test]
fn set_and_res_never_touch_flags() {
    // 0x0100: SET 3, B ; RES 3, B ; SET 1, (HL)
    let mut cpu = cpu_with_program(&[0xCB, 0xD8, 0xCB, 0x98, 0xCB, 0xCE]);
    cpu.regs.f = 0xF0;
    cpu.regs.set_hl(0xC000);

    assert_eq!(cpu.step().unwrap(), 8);
    assert_eq!(cpu.regs.b, 0x08);
    assert_eq!(cpu.step().unwrap(), 8);
    assert_eq!(cpu.regs.b, 0x00);
    assert_eq!(cpu.step().unwrap(), 16);
    assert_eq!(cpu.memory.read_byte(0xC000), 0x02);
    assert_eq!(cpu.regs.f, 0xF0);
}

// --- control flow -----------------------------------------------------

#[test]
fn jr_lands_relative_to_the_following_instruction() {
    // 0x0100: JR +0x05
    let mut cpu = cpu_with_program(&[0x18, 0x05]);
    assert_eq!(cpu.step().unwrap(), 12);
    assert_eq!(cpu.regs.pc, 0x0107);
}

#[test]
fn jr_takes_negative_displacements() {
    // 0x0100: JR -2 (spins on itself)
    let mut cpu = cpu_with_program(&[0x18, 0xFE]);
    cpu.step().unwrap();
    assert_eq!(cpu.regs.pc, 0x0100);
}

#[test]
fn jr_nz_cycle_cost_depends_on_the_branch() {
    // 0x0100: JR NZ, +0x02 (twice)
    let mut cpu = cpu_with_program(&[0x20, 0x02, 0x00, 0x00, 0x20, 0x02]);
    cpu.regs.set_flag(Flag::Z, false);
    assert_eq!(cpu.step().unwrap(), 12);
    assert_eq!(cpu.regs.pc, 0x0104);

    cpu.regs.set_flag(Flag::Z, true);
    assert_eq!(cpu.step().unwrap(), 8);
    assert_eq!(cpu.regs.pc, 0x0106);
}

#[test]
fn jp_cc_always_consumes_the_immediate() {
    // 0x0100: JP C, 0x2000
    let mut cpu = cpu_with_program(&[0xDA, 0x00, 0x20]);
    cpu.regs.set_flag(Flag::C, false);
    assert_eq!(cpu.step().unwrap(), 12);
    assert_eq!(cpu.regs.pc, 0x0103);
}

#[test]
fn jp_nn_and_jp_hl() {
    // 0x0100: JP 0x1234        0x1234: JP HL
    let mut cpu = cpu_with_program(&[0xC3, 0x34, 0x12]);
    cpu.memory.write_byte(0x1234, 0xE9);
    cpu.regs.set_hl(0x4000);

    assert_eq!(cpu.step().unwrap(), 16);
    assert_eq!(cpu.regs.pc, 0x1234);
    assert_eq!(cpu.step().unwrap(), 4);
    assert_eq!(cpu.regs.pc, 0x4000);
}

#[test]
fn call_and_ret_round_trip() {
    // 0x0100: CALL 0x2000      0x2000: RET
    let mut cpu = cpu_with_program(&[0xCD, 0x00, 0x20]);
    cpu.memory.write_byte(0x2000, 0xC9);
    let sp_before = cpu.regs.sp;

    assert_eq!(cpu.step().unwrap(), 24);
    assert_eq!(cpu.regs.pc, 0x2000);
    assert_eq!(cpu.regs.sp, sp_before - 2);
    // Return address on the stack is the byte after the CALL.
    assert_eq!(cpu.memory.read_byte(cpu.regs.sp), 0x03);
    assert_eq!(cpu.memory.read_byte(cpu.regs.sp + 1), 0x01);

    assert_eq!(cpu.step().unwrap(), 16);
    assert_eq!(cpu.regs.pc, 0x0103);
    assert_eq!(cpu.regs.sp, sp_before);
}

#[test]
fn call_nz_not_taken_skips_the_push() {
    // 0x0100: CALL NZ, 0x2000
    let mut cpu = cpu_with_program(&[0xC4, 0x00, 0x20]);
    cpu.regs.set_flag(Flag::Z, true);
    let sp_before = cpu.regs.sp;
    assert_eq!(cpu.step().unwrap(), 12);
    assert_eq!(cpu.regs.pc, 0x0103);
    assert_eq!(cpu.regs.sp, sp_before);
}

#[test]
fn ret_cc_cycle_costs() {
    // 0x0100: RET C (twice, flag toggled between)
    let mut cpu = cpu_with_program(&[0xD8, 0xD8]);
    cpu.push_word(0x3000);

    cpu.regs.set_flag(Flag::C, false);
    assert_eq!(cpu.step().unwrap(), 8);
    assert_eq!(cpu.regs.pc, 0x0101);

    cpu.regs.set_flag(Flag::C, true);
    assert_eq!(cpu.step().unwrap(), 20);
    assert_eq!(cpu.regs.pc, 0x3000);
}

#[test]
fn reti_returns_like_ret() {
    // 0x0100: RETI
    let mut cpu = cpu_with_program(&[0xD9]);
    cpu.push_word(0x1234);
    assert_eq!(cpu.step().unwrap(), 16);
    assert_eq!(cpu.regs.pc, 0x1234);
}

#[test]
fn rst_pushes_and_jumps_to_the_vector() {
    // 0x0100: RST 28h
    let mut cpu = cpu_with_program(&[0xEF]);
    let sp_before = cpu.regs.sp;
    assert_eq!(cpu.step().unwrap(), 16);
    assert_eq!(cpu.regs.pc, 0x0028);
    assert_eq!(cpu.regs.sp, sp_before - 2);
    assert_eq!(cpu.memory.read_byte(cpu.regs.sp), 0x01);
    assert_eq!(cpu.memory.read_byte(cpu.regs.sp + 1), 0x01);
}

// --- stack ------------------------------------------------------------

#[test]
fn push_pop_round_trip() {
    // 0x0100: PUSH DE ; POP BC
    let mut cpu = cpu_with_program(&[0xD5, 0xC1]);
    cpu.regs.set_de(0xABCD);
    let sp_before = cpu.regs.sp;

    assert_eq!(cpu.step().unwrap(), 16);
    assert_eq!(cpu.regs.sp, sp_before - 2);
    assert_eq!(cpu.memory.read_byte(sp_before - 1), 0xAB);
    assert_eq!(cpu.memory.read_byte(sp_before - 2), 0xCD);

    assert_eq!(cpu.step().unwrap(), 12);
    assert_eq!(cpu.regs.bc(), 0xABCD);
    assert_eq!(cpu.regs.sp, sp_before);
}

#[test]
fn pop_af_masks_the_low_nibble() {
    // 0x0100: POP AF
    let mut cpu = cpu_with_program(&[0xF1]);
    cpu.push_word(0x12FF);
    cpu.step().unwrap();
    assert_eq!(cpu.regs.a, 0x12);
    assert_eq!(cpu.regs.f, 0xF0);
    assert_eq!(cpu.regs.af(), 0x12F0);
}

// --- halt, stop, interrupt-adjacent opcodes ---------------------------

#[test]
fn halt_freezes_the_machine_at_minimum_cost() {
    // 0x0100: HALT ; INC A
    let mut cpu = cpu_with_program(&[0x76, 0x3C]);
    assert_eq!(cpu.step().unwrap(), 4);
    assert!(cpu.halted);
    let pc = cpu.regs.pc;
    let a = cpu.regs.a;

    // Halted steps spin without fetching.
    for _ in 0..3 {
        assert_eq!(cpu.step().unwrap(), MIN_CYCLES);
    }
    assert_eq!(cpu.regs.pc, pc);
    assert_eq!(cpu.regs.a, a);

    // Once the driver clears the latch, execution resumes after HALT.
    cpu.halted = false;
    cpu.step().unwrap();
    assert_eq!(cpu.regs.a, a.wrapping_add(1));
}

#[test]
fn stop_consumes_its_padding_byte() {
    // 0x0100: STOP 0x00
    let mut cpu = cpu_with_program(&[0x10, 0x00]);
    assert_eq!(cpu.step().unwrap(), 4);
    assert_eq!(cpu.regs.pc, 0x0102);
    assert!(!cpu.halted);
}

#[test]
fn di_ei_only_cost_cycles_here() {
    // 0x0100: DI ; EI
    let mut cpu = cpu_with_program(&[0xF3, 0xFB]);
    assert_eq!(cpu.step().unwrap(), 4);
    assert_eq!(cpu.step().unwrap(), 4);
    assert_eq!(cpu.regs.pc, 0x0102);
}

// --- illegal opcodes and table shape ----------------------------------

const ILLEGAL_OPCODES: [u8; 11] = [
    0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
];

#[test]
fn illegal_opcode_reports_byte_and_address() {
    // 0x0100: 0xD3 (no such instruction)
    let mut cpu = cpu_with_program(&[0xD3]);
    let err = cpu.step().unwrap_err();
    assert_eq!(
        err,
        CoreError::IllegalOpcode {
            opcode: 0xD3,
            pc: 0x0100,
        }
    );
}

#[test]
fn every_illegal_opcode_errors() {
    for op in ILLEGAL_OPCODES {
        let mut cpu = cpu_with_program(&[op]);
        assert!(
            matches!(cpu.step(), Err(CoreError::IllegalOpcode { opcode, .. }) if opcode == op),
            "opcode {op:#04x} should be illegal",
        );
    }
}

#[test]
fn base_table_has_exactly_eleven_holes() {
    let holes: Vec<u8> = (0u16..256)
        .filter(|&op| mnemonic(op as u8) == "???")
        .map(|op| op as u8)
        .collect();
    assert_eq!(holes, ILLEGAL_OPCODES);
}

#[test]
fn mnemonic_lookups() {
    assert_eq!(mnemonic(0x00), "NOP");
    assert_eq!(mnemonic(0x76), "HALT");
    assert_eq!(mnemonic(0xC3), "JP nn");
    assert_eq!(extended_mnemonic(0x00), "RLC B");
    assert_eq!(extended_mnemonic(0x7E), "BIT 7, (HL)");
    assert_eq!(extended_mnemonic(0xFF), "SET 7, A");
}

#[test]
fn extended_table_cycle_shape() {
    for op in 0u16..256 {
        let entry = &cb::EXTENDED[op as usize];
        let hl_form = op & 0x07 == 0x06;
        let bit_row = (0x40..0x80).contains(&op);
        let expected = match (hl_form, bit_row) {
            (false, _) => 8,
            (true, true) => 12,
            (true, false) => 16,
        };
        assert_eq!(entry.cycles, expected, "opcode CB {op:#04x}");
    }
}

#[test]
fn base_table_cycle_spot_checks() {
    let costs = [
        (0x00u8, 4u32),  // NOP
        (0x01, 12),      // LD BC, nn
        (0x08, 20),      // LD (nn), SP
        (0x36, 12),      // LD (HL), n
        (0x3E, 8),       // LD A, n
        (0x7C, 4),       // LD A, H
        (0x7F, 4),       // LD A, A
        (0x86, 8),       // ADD A, (HL)
        (0xC9, 16),      // RET
        (0xCD, 24),      // CALL nn
        (0xE8, 16),      // ADD SP, e
        (0xEA, 16),      // LD (nn), A
        (0xF8, 12),      // LD HL, SP+e
    ];
    for (op, expected) in costs {
        assert_eq!(opcode::BASE[op as usize].cycles, expected, "opcode {op:#04x}");
    }
}
