//! Driver for the NXP FXAS21002C 3-axis digital gyroscope over I2C.
//!
//! Construction puts the chip into active mode at 100Hz with the chosen
//! full-scale range. [`Fxas21002c::gyroscope`] returns angular velocity in rad/s.

#![no_std]

pub mod registers;
pub mod configs;
pub mod types;

use core::fmt::{Debug, Display, Formatter};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{I2c, SevenBitAddress};
use log::{debug, warn};

use registers::*;

pub use configs::*;
pub use crate::types::*;

/// Trait alias to support both I2c<SevenBitAddress> and I2c without address mode.
pub trait CompatibleI2c<E>: I2c<SevenBitAddress, Error = E> {}
impl<T, E> CompatibleI2c<E> for T where T: I2c<SevenBitAddress, Error = E> {}

/// SA0 pulled high.
pub const DEFAULT_ADDRESS: u8 = 0x21;
/// SA0 pulled low.
pub const ALTERNATE_ADDRESS: u8 = 0x20;

pub struct Fxas21002c<I2C, E> {
    i2c: I2C,
    address: u8,
    range: GyroRange,
    _error: core::marker::PhantomData<E>,
}

impl<I2C, E> Fxas21002c<I2C, E> {
    pub fn i2c(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn range(&self) -> GyroRange {
        self.range
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// The bus transaction failed (NACK, arbitration loss, absent device).
    Communication(E),
    /// WHO_AM_I returned something other than 0xD7.
    InvalidDevice(u8),
}

impl<E: Debug> Display for Error<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Communication(e) => write!(f, "i2c communication error: {:?}", e),
            Error::InvalidDevice(id) => write!(f, "unexpected WHO_AM_I {:#04x}, expected {:#04x}", id, WHO_AM_I_VALUE),
        }
    }
}

impl<E: Debug> core::error::Error for Error<E> {}

impl<I2C, E> Fxas21002c<I2C, E>
where
    I2C: CompatibleI2c<E>,
    E: core::fmt::Debug,
{
    /// Configures the device at `address` with the default ±250dps range.
    pub fn new(i2c: I2C, address: u8) -> Result<Self, Error<E>> {
        Self::with_range(i2c, address, GyroRange::default())
    }

    pub fn default(i2c: I2C) -> Result<Self, Error<E>> {
        Self::new(i2c, DEFAULT_ADDRESS)
    }

    pub fn with_range(i2c: I2C, address: u8, range: GyroRange) -> Result<Self, Error<E>> {
        let mut gyro = Self {
            i2c,
            address,
            range,
            _error: core::marker::PhantomData,
        };
        debug!("fxas21002c@{:#04x}: configuring {:?}", address, range);
        gyro.apply_config(&wakeup_config(range))?;
        Ok(gyro)
    }

    pub fn destroy(self) -> I2C {
        self.i2c
    }

    pub fn who_am_i(&mut self) -> Result<u8, Error<E>> {
        self.read_reg(GyroReg::WhoAmI.into())
    }

    pub fn verify_identity(&mut self) -> Result<(), Error<E>> {
        let id = self.who_am_i()?;
        if id != WHO_AM_I_VALUE {
            warn!("fxas21002c@{:#04x}: WHO_AM_I = {:#04x}, check wiring", self.address, id);
            return Err(Error::InvalidDevice(id));
        }
        Ok(())
    }

    /// Blocks for the standby to active transition (60ms + 1/ODR).
    /// Samples read before this elapses are not valid.
    pub fn wait_until_active<D: DelayNs>(&mut self, delay: &mut D) {
        delay.delay_us(STANDBY_TO_ACTIVE_US + ACTIVE_ODR.period_us());
    }

    /// Full-scale range as currently programmed in CTRL_REG0.
    pub fn read_range(&mut self) -> Result<GyroRange, Error<E>> {
        let ctrl0 = self.read_reg(GyroReg::CtrlReg0.into())?;
        Ok(GyroRange::from_fs_bits((ctrl0 & CTRL_REG0_FS_MASK) >> CTRL_REG0_FS_LOC))
    }

    pub fn standby(&mut self) -> Result<(), Error<E>> {
        self.apply_config(CONFIG_STANDBY)
    }

    pub fn read_reg(&mut self, reg: u8) -> Result<u8, Error<E>> {
        let mut buf = [0u8];
        self.i2c
            .write_read(self.address, &[reg], &mut buf)
            .map_err(Error::Communication)?;
        Ok(buf[0])
    }

    pub fn write_reg(&mut self, reg: u8, val: u8) -> Result<(), Error<E>> {
        self.i2c
            .write(self.address, &[reg, val])
            .map_err(Error::Communication)?;
        Ok(())
    }

    pub fn read_bytes(&mut self, start_reg: u8, buffer: &mut [u8]) -> Result<(), Error<E>> {
        self.i2c
            .write_read(self.address, &[start_reg], buffer)
            .map_err(Error::Communication)
    }

    /// One 6-byte burst from OUT_X_MSB.
    pub fn read_raw(&mut self) -> Result<RawSample, Error<E>> {
        let mut buf = [0u8; OUT_DATA_LEN];
        self.read_bytes(GyroReg::OutXMsb.into(), &mut buf)?;
        Ok(RawSample::from_be_bytes(&buf))
    }

    /// Angular velocity in rad/s.
    pub fn gyroscope(&mut self) -> Result<AngularVelocity, Error<E>> {
        let raw = self.read_raw()?;
        Ok(raw.to_angular_velocity(self.range))
    }

    pub fn read_status(&mut self) -> Result<StatusFlags, Error<E>> {
        let status = self.read_reg(GyroReg::DrStatus.into())?;
        Ok(StatusFlags::from_bits_truncate(status))
    }

    pub fn data_ready(&mut self) -> Result<bool, Error<E>> {
        Ok(self.read_status()?.contains(StatusFlags::ZYXDR))
    }

    /// Die temperature in °C, 1°C/LSB, uncalibrated.
    pub fn read_temperature(&mut self) -> Result<i8, Error<E>> {
        let raw = self.read_reg(GyroReg::Temp.into())?;
        Ok(raw as i8)
    }

    /// Accepts any register type that implements the `Register` trait
    pub fn apply_config<R>(&mut self, config: &[RegConfig<R>]) -> Result<(), Error<E>>
    where
        R: Register + NamedRegister + Copy,
    {
        for entry in config {
            let addr = entry.reg.addr();
            match entry.op {
                RegOp::Write => {
                    debug!("write_reg {:<12}({:#04X}) = {:#04x}", entry.reg.name(), addr, entry.value);
                    self.write_reg(addr, entry.value)?
                },
                RegOp::Read => {
                    let data = self.read_reg(addr)?;
                    debug!("read_reg {:<12}({:#04X}) = {:#04x}", entry.reg.name(), addr, data);
                }
            }
        }
        Ok(())
    }

    pub fn dump_config<R>(&mut self, regs: &[R]) -> Result<(), Error<E>>
    where
        R: NamedRegister + Copy,
    {
        for reg in regs {
            let label = reg.name();
            let addr = reg.addr();
            let v = self.read_reg(addr)?;
            debug!("{:<12}({:#04x}): 0x{:02X} ({:>3}) 0b{:08b}", label, addr, v, v, v);
        }

        Ok(())
    }
}
