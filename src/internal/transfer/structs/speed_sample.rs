use std::fmt;

/// 速度单位，按 1024 进制。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedUnit {
    Byte,
    KB,
    MB,
    GB,
}

impl SpeedUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Byte => "Byte",
            Self::KB => "KB",
            Self::MB => "MB",
            Self::GB => "GB",
        }
    }

    fn shift(&self) -> u32 {
        match self {
            Self::Byte => 0,
            Self::KB => 10,
            Self::MB => 20,
            Self::GB => 30,
        }
    }
}

/// 一次吞吐采样：上一个采样周期内写入的字节数。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpeedSample {
    pub bytes_per_interval: u64,
}

impl SpeedSample {
    pub fn new(bytes_per_interval: u64) -> Self {
        Self { bytes_per_interval }
    }

    /// 取换算后数值不为 0 的最大单位；0 字节时为 `Byte`。
    pub fn unit(&self) -> SpeedUnit {
        let b = self.bytes_per_interval;
        if b >> 30 > 0 {
            SpeedUnit::GB
        } else if b >> 20 > 0 {
            SpeedUnit::MB
        } else if b >> 10 > 0 {
            SpeedUnit::KB
        } else {
            SpeedUnit::Byte
        }
    }

    /// 按 [`unit`](Self::unit) 换算后的整数值（向下取整）。
    pub fn value(&self) -> u64 {
        self.bytes_per_interval >> self.unit().shift()
    }
}

impl fmt::Display for SpeedSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/s", self.value(), self.unit().as_str())
    }
}
