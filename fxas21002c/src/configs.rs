use crate::registers::*;
use crate::types::GyroRange;

pub const ACTIVE_ODR: GyroOdr = GyroOdr::Hz100;

/// CTRL_REG1 value for active mode at the default output data rate.
pub const CTRL_REG1_ACTIVE: u8 = (ACTIVE_ODR as u8) << CTRL_REG1_DR_LOC | CtrlReg1Flags::ACTIVE.bits();

/// Range selection followed by the switch to active mode.
/// FS may only be changed while in standby or ready, so CTRL_REG0 goes first.
pub fn wakeup_config(range: GyroRange) -> [RegConfig<GyroReg>; 2] {
    [
        RegConfig {
            op: RegOp::Write,
            reg: GyroReg::CtrlReg0,
            value: range.fs_bits() << CTRL_REG0_FS_LOC, // widest LPF, HPF off
        },
        RegConfig {
            op: RegOp::Write,
            reg: GyroReg::CtrlReg1,
            value: CTRL_REG1_ACTIVE, // 100Hz, active
        },
    ]
}

pub const CONFIG_STANDBY: &[RegConfig<GyroReg>] = &[
    RegConfig {
        op: RegOp::Write,
        reg: GyroReg::CtrlReg1,
        value: 0x00, // Standby
    },
];
