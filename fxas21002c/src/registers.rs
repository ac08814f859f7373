#![allow(unused_imports)]
use bitflags::bitflags;

use paste::paste;

macro_rules! registers {
    (
        $enum_name:ident, $slice_name:ident {
            $($name:ident = $val:expr),* $(,)?
        }
    ) => {
        #[repr(u8)]
        #[derive(Copy, Clone, Debug, PartialEq, Eq)]
        pub enum $enum_name {
            $($name = $val),*
        }

        pub const $slice_name: &[$enum_name] = &[
            $($enum_name::$name),*
        ];

        impl $enum_name {
            pub fn name(&self) -> &'static str {
                match self {
                    $($enum_name::$name => stringify!($name),)*
                }
            }
        }

        impl Register for $enum_name {
            fn addr(self) -> u8 {
                self as u8
            }
        }

        impl NamedRegister for $enum_name {
            fn name(&self) -> &'static str {
                self.name()
            }
        }

        impl From<$enum_name> for u8 {
            fn from(r: $enum_name) -> u8 {
                r as u8
            }
        }

        paste! {
            /// Looks up a register by address.
            pub fn [<$enum_name:snake _from_addr>](value: u8) -> Option<$enum_name> {
                $slice_name.iter().copied().find(|r| r.addr() == value)
            }
        }
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegOp {
    Read,
    Write
}

pub trait NamedRegister: Register {
    fn name(&self) -> &'static str;
}

pub trait Register: Copy {
    fn addr(self) -> u8;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegConfig<R: Register> {
    pub op: RegOp,
    pub reg: R,
    pub value: u8,
}

registers! {
    GyroReg, GYRO_REGS {
        Status = 0x00,
        OutXMsb = 0x01,
        OutXLsb = 0x02,
        OutYMsb = 0x03,
        OutYLsb = 0x04,
        OutZMsb = 0x05,
        OutZLsb = 0x06,
        DrStatus = 0x07,
        FStatus = 0x08,
        FSetup = 0x09,
        FEvent = 0x0A,
        IntSrcFlag = 0x0B,
        WhoAmI = 0x0C,
        CtrlReg0 = 0x0D,
        RtCfg = 0x0E,
        RtSrc = 0x0F,
        RtThs = 0x10,
        RtCount = 0x11,
        Temp = 0x12,
        CtrlReg1 = 0x13,
        CtrlReg2 = 0x14,
        CtrlReg3 = 0x15,
    }
}

pub const WHO_AM_I_VALUE: u8 = 0xD7;

/// Number of bytes covering OUT_X_MSB..=OUT_Z_LSB.
pub const OUT_DATA_LEN: usize = 6;

/* DR_STATUS
 * B7    B6   B5   B4   B3    B2   B1   B0
 * ZYXOW ZOW  YOW  XOW  ZYXDR ZDR  YDR  XDR
*/
bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct StatusFlags: u8 {
        const ZYXOW = 1 << 7;
        const ZOW   = 1 << 6;
        const YOW   = 1 << 5;
        const XOW   = 1 << 4;
        const ZYXDR = 1 << 3;
        const ZDR   = 1 << 2;
        const YDR   = 1 << 1;
        const XDR   = 1 << 0;
    }
}

/* CTRL_REG0
 * B7   B6   B5   B4   B3   B2     B1   B0
 * BW1  BW0  SPIW SEL1 SEL0 HPF_EN FS1  FS0
*/
pub const CTRL_REG0_FS_LOC: u8 = 0;
pub const CTRL_REG0_FS_MASK: u8 = 0b0000_0011;

pub const CTRL_REG0_BW_LOC: u8 = 6;
#[repr(u8)]
pub enum LowPassBandwidth {
    Widest  = 0,
    Mid     = 1,
    Narrow  = 2,
}

/* CTRL_REG1
 * B7   B6   B5   B4   B3   B2   B1     B0
 * 0    RST  ST   DR2  DR1  DR0  ACTIVE READY
*/
bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct CtrlReg1Flags: u8 {
        const RST    = 1 << 6;
        const ST     = 1 << 5;
        const ACTIVE = 1 << 1;
        const READY  = 1 << 0;
    }
}

pub const CTRL_REG1_DR_LOC: u8 = 2;
pub const CTRL_REG1_DR_MASK: u8 = 0b0001_1100;
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GyroOdr {
    Hz800   = 0,
    Hz400   = 1,
    Hz200   = 2,
    Hz100   = 3,
    Hz50    = 4,
    Hz25    = 5,
    Hz12_5  = 6,
}

impl GyroOdr {
    pub fn period_us(self) -> u32 {
        match self {
            GyroOdr::Hz800 => 1_250,
            GyroOdr::Hz400 => 2_500,
            GyroOdr::Hz200 => 5_000,
            GyroOdr::Hz100 => 10_000,
            GyroOdr::Hz50 => 20_000,
            GyroOdr::Hz25 => 40_000,
            GyroOdr::Hz12_5 => 80_000,
        }
    }
}

/// Standby to active transition time, excluding the first output period.
pub const STANDBY_TO_ACTIVE_US: u32 = 60_000;
