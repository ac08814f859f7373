//! Recording I2C bus and delay doubles for driver tests.

#![allow(dead_code)]

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation, SevenBitAddress};

/// I2C transaction type for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I2cTransaction {
    Write { addr: u8, data: Vec<u8> },
    Read { addr: u8, len: usize },
    WriteRead {
        addr: u8,
        write_data: Vec<u8>,
        read_len: usize,
    },
}

/// Records every transaction and serves pre-programmed read data.
/// Transaction number `fail_on` (0-based) is NACKed after being recorded.
#[derive(Debug, Default)]
pub struct MockI2c {
    transactions: Vec<I2cTransaction>,
    read_data: Vec<u8>,
    fail_on: Option<usize>,
}

impl MockI2c {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transactions(&self) -> &[I2cTransaction] {
        &self.transactions
    }

    pub fn clear_transactions(&mut self) {
        self.transactions.clear();
    }

    pub fn set_read_data(&mut self, data: &[u8]) {
        self.read_data = data.to_vec();
    }

    pub fn fail_on(&mut self, index: usize) {
        self.fail_on = Some(index);
    }

    pub fn fail_next(&mut self) {
        self.fail_on = Some(self.transactions.len());
    }
}

impl ErrorType for MockI2c {
    type Error = ErrorKind;
}

impl I2c<SevenBitAddress> for MockI2c {
    fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let index = self.transactions.len();
        let record = match operations {
            [Operation::Write(data)] => I2cTransaction::Write {
                addr: address,
                data: data.to_vec(),
            },
            [Operation::Read(buf)] => I2cTransaction::Read {
                addr: address,
                len: buf.len(),
            },
            [Operation::Write(data), Operation::Read(buf)] => I2cTransaction::WriteRead {
                addr: address,
                write_data: data.to_vec(),
                read_len: buf.len(),
            },
            other => panic!("unexpected transaction with {} operations", other.len()),
        };
        self.transactions.push(record);

        if self.fail_on == Some(index) {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }

        for op in operations.iter_mut() {
            if let Operation::Read(buf) = op {
                let to_read = buf.len().min(self.read_data.len());
                buf[..to_read].copy_from_slice(&self.read_data[..to_read]);
                self.read_data.drain(..to_read);
            }
        }
        Ok(())
    }
}

/// Accumulates requested delay instead of sleeping.
#[derive(Debug, Default)]
pub struct CountingDelay {
    pub total_ns: u64,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}
