//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_CONTRAST, MAX_THREE_BIT_OPERAND, MIN_CONTRAST};

use crate::command;

/// LCD bias ratio
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Bias {
    /// 1/9 bias
    #[default]
    OneNinth,
    /// 1/7 bias
    OneSeventh,
}

impl Bias {
    /// Command byte selecting this bias
    pub fn command(self) -> u8 {
        match self {
            Self::OneNinth => command::BIAS_1_9,
            Self::OneSeventh => command::BIAS_1_7,
        }
    }
}

/// Segment (column) driver direction
///
/// Reversing it mirrors the image horizontally.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SegmentDirection {
    /// Column 0 drives SEG0
    Normal,
    /// Column 0 drives the last segment
    #[default]
    Reverse,
}

impl SegmentDirection {
    /// Command byte selecting this direction
    pub fn command(self) -> u8 {
        match self {
            Self::Normal => command::SEGMENT_NORMAL,
            Self::Reverse => command::SEGMENT_REVERSE,
        }
    }
}

/// Common (row) output scan direction
///
/// Reversing it mirrors the image vertically.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum CommonDirection {
    /// COM0 first
    #[default]
    Normal,
    /// COM63 first
    Reverse,
}

impl CommonDirection {
    /// Command byte selecting this direction
    pub fn command(self) -> u8 {
        match self {
            Self::Normal => command::COMMON_NORMAL,
            Self::Reverse => command::COMMON_REVERSE,
        }
    }
}

/// Display configuration
///
/// This struct holds the power-up parameters sent during initialization.
/// Use `Builder` to create a Config. Fields are checked by
/// [`Builder::build`] and again when the display is initialized.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// LCD bias ratio
    pub bias: Bias,
    /// Segment driver direction
    pub segment_direction: SegmentDirection,
    /// Common output scan direction
    pub common_direction: CommonDirection,
    /// V0 regulator resistor ratio (0..=7)
    pub resistor_ratio: u8,
    /// Power control mode bits (0..=7)
    pub power_mode: u8,
    /// Initial contrast (0x01..=0x3F)
    pub contrast: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bias: Bias::OneNinth,
            segment_direction: SegmentDirection::Reverse,
            common_direction: CommonDirection::Normal,
            resistor_ratio: 5,
            // Booster, regulator and follower all on
            power_mode: 7,
            contrast: 0x1B,
        }
    }
}

impl Config {
    /// Check every field against the range the controller accepts
    ///
    /// # Errors
    ///
    /// Returns a [`BuilderError`] naming the first field out of range.
    pub fn validate(&self) -> Result<(), BuilderError> {
        if !(MIN_CONTRAST..=MAX_CONTRAST).contains(&self.contrast) {
            return Err(BuilderError::InvalidContrast {
                value: self.contrast,
            });
        }
        if self.resistor_ratio > MAX_THREE_BIT_OPERAND {
            return Err(BuilderError::InvalidResistorRatio {
                value: self.resistor_ratio,
            });
        }
        if self.power_mode > MAX_THREE_BIT_OPERAND {
            return Err(BuilderError::InvalidPowerMode {
                value: self.power_mode,
            });
        }
        Ok(())
    }

    /// The eight power-up command bytes, in the order the controller needs them
    ///
    /// Display off comes first; bias and scan directions are fixed before
    /// contrast and power so the panel never shows garbage while powering up.
    pub fn init_sequence(&self) -> [u8; 8] {
        [
            command::DISPLAY_OFF,
            self.bias.command(),
            self.segment_direction.command(),
            self.common_direction.command(),
            command::resistor_ratio(self.resistor_ratio),
            command::SET_CONTRAST,
            self.contrast,
            command::power_control(self.power_mode),
        ]
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use st7565::{Builder, CommonDirection, SegmentDirection};
///
/// // Panel mounted upside down
/// let config = match Builder::new()
///     .segment_direction(SegmentDirection::Normal)
///     .common_direction(CommonDirection::Reverse)
///     .contrast(0x20)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the LCD bias ratio
    pub fn bias(mut self, bias: Bias) -> Self {
        self.config.bias = bias;
        self
    }

    /// Set the segment driver direction
    pub fn segment_direction(mut self, direction: SegmentDirection) -> Self {
        self.config.segment_direction = direction;
        self
    }

    /// Set the common output scan direction
    pub fn common_direction(mut self, direction: CommonDirection) -> Self {
        self.config.common_direction = direction;
        self
    }

    /// Set the V0 regulator resistor ratio (0..=7)
    pub fn resistor_ratio(mut self, value: u8) -> Self {
        self.config.resistor_ratio = value;
        self
    }

    /// Set the power control mode bits (0..=7)
    pub fn power_mode(mut self, value: u8) -> Self {
        self.config.power_mode = value;
        self
    }

    /// Set the initial contrast (0x01..=0x3F)
    pub fn contrast(mut self, value: u8) -> Self {
        self.config.contrast = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns a [`BuilderError`] naming the first parameter outside the
    /// range the controller accepts.
    pub fn build(self) -> Result<Config, BuilderError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_init_sequence() {
        let config = Builder::new().build().unwrap();
        assert_eq!(
            config.init_sequence(),
            [0xAE, 0xA2, 0xA1, 0xC0, 0x25, 0x81, 0x1B, 0x2F]
        );
    }

    #[test]
    fn test_builder_default_matches_config_default() {
        assert_eq!(Builder::new().build().unwrap(), Config::default());
    }

    #[test]
    fn test_custom_init_sequence() {
        let config = Builder::new()
            .bias(Bias::OneSeventh)
            .segment_direction(SegmentDirection::Normal)
            .common_direction(CommonDirection::Reverse)
            .resistor_ratio(3)
            .power_mode(4)
            .contrast(0x3F)
            .build()
            .unwrap();
        assert_eq!(
            config.init_sequence(),
            [0xAE, 0xA3, 0xA0, 0xC8, 0x23, 0x81, 0x3F, 0x2C]
        );
    }

    #[test]
    fn test_contrast_bounds() {
        assert_eq!(
            Builder::new().contrast(0x00).build(),
            Err(BuilderError::InvalidContrast { value: 0x00 })
        );
        assert_eq!(
            Builder::new().contrast(0x40).build(),
            Err(BuilderError::InvalidContrast { value: 0x40 })
        );
        assert!(Builder::new().contrast(0x01).build().is_ok());
        assert!(Builder::new().contrast(0x3F).build().is_ok());
    }

    #[test]
    fn test_three_bit_operands() {
        assert_eq!(
            Builder::new().resistor_ratio(8).build(),
            Err(BuilderError::InvalidResistorRatio { value: 8 })
        );
        assert_eq!(
            Builder::new().power_mode(9).build(),
            Err(BuilderError::InvalidPowerMode { value: 9 })
        );
        assert!(Builder::new().resistor_ratio(7).power_mode(0).build().is_ok());
    }
}
