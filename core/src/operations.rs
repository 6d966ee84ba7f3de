use rand::RngCore;

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_SPRITE_SIZE, FONT_START};
use crate::error::Chip8Error;
use crate::instruction::{Context, ProgramCounter};
use crate::keypad::first_down;
use crate::opcode::Opcode;
use crate::state::State;

type Outcome = Result<ProgramCounter, Chip8Error>;

fn skip_if(condition: bool) -> Outcome {
    Ok(if condition {
        ProgramCounter::Skip
    } else {
        ProgramCounter::Next
    })
}

/// Anything not in the instruction set (including 0NNN) is tolerated and does nothing
pub fn nop(_op: &dyn Opcode, _state: &mut State, _ctx: &mut Context) -> Outcome {
    Ok(ProgramCounter::Next)
}

/// clear
pub fn clr(_op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    state.frame_buffer = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    state.draw_flag = true;
    Ok(ProgramCounter::Next)
}

/// PC = STACK.pop()
pub fn rts(_op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    state.pop().map(ProgramCounter::Jump)
}

/// PC = nnn
pub fn jump(op: &dyn Opcode, _state: &mut State, _ctx: &mut Context) -> Outcome {
    Ok(ProgramCounter::Jump(op.nnn()))
}

/// STACK.push(PC + 2); PC = nnn
pub fn call(op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    state.push(state.pc.wrapping_add(0x2))?;
    Ok(ProgramCounter::Jump(op.nnn()))
}

/// if Vx == nn then skip
pub fn ske(op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    skip_if(state.v[op.x()] == op.nn())
}

/// if Vx != nn then skip
pub fn skne(op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    skip_if(state.v[op.x()] != op.nn())
}

/// if Vx == Vy then skip
pub fn skre(op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    skip_if(state.v[op.x()] == state.v[op.y()])
}

/// Vx = nn
pub fn load(op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    state.v[op.x()] = op.nn();
    Ok(ProgramCounter::Next)
}

/// Vx += nn
/// Add nn to Vx; allow for overflow but implicitly drop it
pub fn add(op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    state.v[op.x()] = state.v[op.x()].wrapping_add(op.nn());
    Ok(ProgramCounter::Next)
}

/// Vx = Vy
pub fn mv(op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    state.v[op.x()] = state.v[op.y()];
    Ok(ProgramCounter::Next)
}

/// Vx |= Vy
pub fn or(op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    state.v[op.x()] |= state.v[op.y()];
    Ok(ProgramCounter::Next)
}

/// Vx &= Vy
pub fn and(op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    state.v[op.x()] &= state.v[op.y()];
    Ok(ProgramCounter::Next)
}

/// Vx ^= Vy
pub fn xor(op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    state.v[op.x()] ^= state.v[op.y()];
    Ok(ProgramCounter::Next)
}

/// Sets VF, then Vx. When x is F the result wins over the flag.
fn set_with_flag(state: &mut State, x: usize, flag: bool, value: u8) {
    state.v[0xF] = flag as u8;
    state.v[x] = value;
}

/// Vx += Vy; VF = overflow
pub fn addr(op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    let (res, over) = state.v[op.x()].overflowing_add(state.v[op.y()]);
    set_with_flag(state, op.x(), over, res);
    Ok(ProgramCounter::Next)
}

/// Vx -= Vy; VF = Vx > Vy
pub fn sub(op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    let (vx, vy) = (state.v[op.x()], state.v[op.y()]);
    set_with_flag(state, op.x(), vx > vy, vx.wrapping_sub(vy));
    Ok(ProgramCounter::Next)
}

/// Vx >>= 1; VF = shifted out bit
pub fn shr(op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    let vx = state.v[op.x()];
    set_with_flag(state, op.x(), vx & 0x1 == 0x1, vx >> 1);
    Ok(ProgramCounter::Next)
}

/// Vx = Vy - Vx; VF = Vy > Vx
pub fn subn(op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    let (vx, vy) = (state.v[op.x()], state.v[op.y()]);
    set_with_flag(state, op.x(), vy > vx, vy.wrapping_sub(vx));
    Ok(ProgramCounter::Next)
}

/// Vx <<= 1; VF = shifted out bit
pub fn shl(op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    let vx = state.v[op.x()];
    set_with_flag(state, op.x(), vx & 0x80 != 0, vx << 1);
    Ok(ProgramCounter::Next)
}

/// if Vx != Vy then skip
pub fn skrne(op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    skip_if(state.v[op.x()] != state.v[op.y()])
}

/// I = nnn
pub fn loadi(op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    state.i = op.nnn();
    Ok(ProgramCounter::Next)
}

/// PC = V0 + nnn
pub fn jumpi(op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    Ok(ProgramCounter::Jump(u16::from(state.v[0x0]) + op.nnn()))
}

/// Vx = rand_byte & nn
pub fn rnd(op: &dyn Opcode, state: &mut State, ctx: &mut Context) -> Outcome {
    let rand_byte = ctx.rng.next_u32() as u8;
    state.v[op.x()] = rand_byte & op.nn();
    Ok(ProgramCounter::Next)
}

/// draw_sprite(x=Vx y=Vy size=n)
/// Draws a sprite from memory i..i+n at position x, y on the FrameBuffer with wrapping.
/// Sprite bits only ever light pixels; VF is set if any lit pixel was drawn over.
pub fn draw(op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    let (vx, vy) = (state.v[op.x()] as usize, state.v[op.y()] as usize);
    let mut sprite = [0; 0xF];
    let rows = op.n() as usize;
    sprite[..rows].copy_from_slice(state.read_memory(state.i, rows)?);

    let mut collision = false;
    for (row, byte) in sprite[..rows].iter().enumerate() {
        let y = (vy + row) % DISPLAY_HEIGHT;
        for bit in 0..8 {
            if (byte >> (7 - bit)) & 0x1 == 0 {
                continue;
            }
            let x = (vx + bit) % DISPLAY_WIDTH;
            let pixel = &mut state.frame_buffer[y][x];
            collision |= *pixel;
            *pixel = true;
        }
    }

    state.v[0xF] = collision as u8;
    state.draw_flag = true;
    Ok(ProgramCounter::Next)
}

/// if Vx.pressed then skip
pub fn skpr(op: &dyn Opcode, state: &mut State, ctx: &mut Context) -> Outcome {
    skip_if(ctx.keypad.is_key_down(state.v[op.x()]))
}

/// if !Vx.pressed then skip
pub fn skup(op: &dyn Opcode, state: &mut State, ctx: &mut Context) -> Outcome {
    skip_if(!ctx.keypad.is_key_down(state.v[op.x()]))
}

/// Vx = DT
pub fn moved(op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    state.v[op.x()] = state.delay_timer;
    Ok(ProgramCounter::Next)
}

/// await keypress for Vx
/// Holds the PC on this instruction until some key is down.
pub fn keyd(op: &dyn Opcode, state: &mut State, ctx: &mut Context) -> Outcome {
    match first_down(ctx.keypad) {
        Some(key) => {
            state.v[op.x()] = key;
            Ok(ProgramCounter::Next)
        }
        None => Ok(ProgramCounter::Wait),
    }
}

/// DT = Vx
pub fn loads(op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    state.delay_timer = state.v[op.x()];
    Ok(ProgramCounter::Next)
}

/// ST = Vx
pub fn ld(op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    state.sound_timer = state.v[op.x()];
    Ok(ProgramCounter::Next)
}

/// I += Vx
pub fn addi(op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    state.i = state.i.wrapping_add(u16::from(state.v[op.x()]));
    Ok(ProgramCounter::Next)
}

/// I = Vx * 5
/// Set I to the memory address of the sprite for Vx
/// See constants::SPRITE_SHEET for more details
pub fn ldspr(op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    state.i = FONT_START + u16::from(state.v[op.x()]) * FONT_SPRITE_SIZE;
    Ok(ProgramCounter::Next)
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn bcd(op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    let vx = state.v[op.x()];
    state.write_memory(state.i, &[vx / 100, vx / 10 % 10, vx % 10])?;
    Ok(ProgramCounter::Next)
}

/// mem[I..=I+x] = V0..=Vx
/// Fill memory starting at address i with V0..=Vx
pub fn stor(op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    let registers = state.v;
    state.write_memory(state.i, &registers[..=op.x()])?;
    Ok(ProgramCounter::Next)
}

/// V0..=Vx = mem[I..=I+x]
/// Fill V0..=Vx with memory starting at address i
pub fn read(op: &dyn Opcode, state: &mut State, _ctx: &mut Context) -> Outcome {
    let count = op.x() + 1;
    let mut registers = [0; 16];
    registers[..count].copy_from_slice(state.read_memory(state.i, count)?);
    state.v[..count].copy_from_slice(&registers[..count]);
    Ok(ProgramCounter::Next)
}
