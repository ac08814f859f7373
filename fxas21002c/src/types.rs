use core::f32::consts::PI;

const DEG_TO_RAD: f32 = PI / 180.0;

/// Full-scale range of the angular rate output.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GyroRange {
    #[default]
    Dps250,
    Dps500,
    Dps1000,
    Dps2000,
}

impl GyroRange {
    /// Value of CTRL_REG0.FS for this range.
    pub fn fs_bits(self) -> u8 {
        match self {
            GyroRange::Dps250 => 0b11,
            GyroRange::Dps500 => 0b10,
            GyroRange::Dps1000 => 0b01,
            GyroRange::Dps2000 => 0b00,
        }
    }

    pub fn from_fs_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b11 => GyroRange::Dps250,
            0b10 => GyroRange::Dps500,
            0b01 => GyroRange::Dps1000,
            _ => GyroRange::Dps2000,
        }
    }

    /// Datasheet sensitivity in deg/s per LSB (Table 35).
    pub fn dps_per_lsb(self) -> f32 {
        match self {
            GyroRange::Dps250 => 0.0078125,
            GyroRange::Dps500 => 0.015625,
            GyroRange::Dps1000 => 0.03125,
            GyroRange::Dps2000 => 0.0625,
        }
    }

    /// Sensitivity in rad/s per LSB.
    pub fn sensitivity(self) -> f32 {
        self.dps_per_lsb() * DEG_TO_RAD
    }
}

/// Undecoded output counts, one per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl RawSample {
    /// Decodes OUT_X_MSB..=OUT_Z_LSB. The device stores each axis MSB first.
    pub fn from_be_bytes(buf: &[u8; 6]) -> Self {
        Self {
            x: i16::from_be_bytes([buf[0], buf[1]]),
            y: i16::from_be_bytes([buf[2], buf[3]]),
            z: i16::from_be_bytes([buf[4], buf[5]]),
        }
    }

    pub fn to_angular_velocity(self, range: GyroRange) -> AngularVelocity {
        let scale = range.sensitivity();
        AngularVelocity {
            x: self.x as f32 * scale,
            y: self.y as f32 * scale,
            z: self.z as f32 * scale,
        }
    }
}

/// Angular velocity in rad/s.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AngularVelocity {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl AngularVelocity {
    pub fn as_tuple(&self) -> (f32, f32, f32) {
        (self.x, self.y, self.z)
    }
}

impl From<AngularVelocity> for (f32, f32, f32) {
    fn from(v: AngularVelocity) -> Self {
        v.as_tuple()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANGES: [GyroRange; 4] = [
        GyroRange::Dps250,
        GyroRange::Dps500,
        GyroRange::Dps1000,
        GyroRange::Dps2000,
    ];

    #[test]
    fn fs_bits_round_trip() {
        for range in RANGES {
            assert_eq!(GyroRange::from_fs_bits(range.fs_bits()), range);
        }
    }

    #[test]
    fn full_scale_is_close_to_nominal() {
        // 32768 counts cover slightly more than the nominal range.
        let expected = [256.0, 512.0, 1024.0, 2048.0];
        for (range, dps) in RANGES.iter().zip(expected) {
            assert_eq!(range.dps_per_lsb() * 32768.0, dps);
        }
    }

    #[test]
    fn scale_law_holds_for_every_count() {
        let range = GyroRange::Dps500;
        let scale = range.sensitivity();
        for raw in (i16::MIN..=i16::MAX).step_by(97).chain([i16::MIN, -1, 0, 1, i16::MAX]) {
            let v = RawSample { x: raw, y: raw, z: raw }.to_angular_velocity(range);
            assert_eq!(v.x, raw as f32 * scale);
            assert_eq!(v.y, v.x);
            assert_eq!(v.z, v.x);
        }
    }

    #[test]
    fn decodes_msb_first() {
        let raw = RawSample::from_be_bytes(&[0x00, 0x10, 0x00, 0x20, 0x00, 0x30]);
        assert_eq!(raw, RawSample { x: 16, y: 32, z: 48 });

        let raw = RawSample::from_be_bytes(&[0xFF, 0xFF, 0x80, 0x00, 0x7F, 0xFF]);
        assert_eq!(raw, RawSample { x: -1, y: i16::MIN, z: i16::MAX });
    }

    #[test]
    fn sensitivity_is_in_radians() {
        let rad = GyroRange::Dps2000.sensitivity();
        assert!((rad - 0.0625 * PI / 180.0).abs() < 1e-8);
    }
}
