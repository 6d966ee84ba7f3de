use ch8_core::{Interpreter, Keys};
use proptest::prelude::*;

fn run_program(program: &[u8], steps: usize) -> Interpreter {
    let mut chip8 = Interpreter::new(0);
    chip8.load_program(program).unwrap();
    let keys = Keys::new();
    for _ in 0..steps {
        chip8.step(&keys).unwrap();
    }
    chip8
}

/// V1 = a; V2 = b; then the given 8XY_ arithmetic opcode on V1, V2
fn arithmetic(a: u8, b: u8, low: u8) -> Interpreter {
    run_program(&[0x61, a, 0x62, b, 0x81, 0x20 | low], 3)
}

proptest! {
    #[test]
    fn load_then_add_wraps(x in 0u8..0xF, nn1 in any::<u8>(), nn2 in any::<u8>()) {
        let chip8 = run_program(&[0x60 | x, nn1, 0x70 | x, nn2], 2);
        prop_assert_eq!(chip8.registers()[x as usize], nn1.wrapping_add(nn2));
    }

    #[test]
    fn add_sets_carry_on_overflow(a in any::<u8>(), b in any::<u8>()) {
        let chip8 = arithmetic(a, b, 0x4);
        let sum = u16::from(a) + u16::from(b);
        prop_assert_eq!(chip8.registers()[0x1], sum as u8);
        prop_assert_eq!(chip8.registers()[0xF], (sum > 255) as u8);
    }

    #[test]
    fn sub_clears_flag_on_borrow(a in any::<u8>(), b in any::<u8>()) {
        let chip8 = arithmetic(a, b, 0x5);
        prop_assert_eq!(chip8.registers()[0x1], a.wrapping_sub(b));
        prop_assert_eq!(chip8.registers()[0xF], (a > b) as u8);
    }

    #[test]
    fn subn_clears_flag_on_borrow(a in any::<u8>(), b in any::<u8>()) {
        let chip8 = arithmetic(a, b, 0x7);
        prop_assert_eq!(chip8.registers()[0x1], b.wrapping_sub(a));
        prop_assert_eq!(chip8.registers()[0xF], (b > a) as u8);
    }

    #[test]
    fn store_then_read_round_trips(x in 0u8..=0xF, values in any::<[u8; 16]>()) {
        let count = x as usize + 1;
        let mut program = Vec::new();
        for (reg, value) in values[..count].iter().enumerate() {
            program.extend_from_slice(&[0x60 | reg as u8, *value]);
        }
        // I = 0x400; store; clobber; read back
        program.extend_from_slice(&[0xA4, 0x00, 0xF0 | x, 0x55]);
        for reg in 0..count {
            program.extend_from_slice(&[0x60 | reg as u8, 0x00]);
        }
        program.extend_from_slice(&[0xF0 | x, 0x65]);

        let chip8 = run_program(&program, 2 * count + 3);
        prop_assert_eq!(&chip8.registers()[..count], &values[..count]);
        prop_assert_eq!(chip8.index(), 0x400);
    }

    #[test]
    fn bcd_digits_recompose(value in any::<u8>()) {
        let chip8 = run_program(&[0x65, value, 0xA4, 0x00, 0xF5, 0x33], 3);
        let digits = &chip8.state().memory[0x400..0x403];
        let recomposed = u16::from(digits[0]) * 100 + u16::from(digits[1]) * 10 + u16::from(digits[2]);
        prop_assert_eq!(recomposed, u16::from(value));
    }
}
