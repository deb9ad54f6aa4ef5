use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceProfile {
    #[default]
    Mobile,
    Desktop,
}

impl DeviceProfile {
    pub const ALL: [DeviceProfile; 2] = [DeviceProfile::Mobile, DeviceProfile::Desktop];

    pub fn as_str(self) -> &'static str {
        match self {
            DeviceProfile::Mobile => "mobile",
            DeviceProfile::Desktop => "desktop",
        }
    }
}

impl fmt::Display for DeviceProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown device profile `{0}`, expected `mobile` or `desktop`")]
pub struct UnknownDevice(pub String);

impl FromStr for DeviceProfile {
    type Err = UnknownDevice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" => Ok(DeviceProfile::Mobile),
            "desktop" => Ok(DeviceProfile::Desktop),
            _ => Err(UnknownDevice(s.to_string())),
        }
    }
}
