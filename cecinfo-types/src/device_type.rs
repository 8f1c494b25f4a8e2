//! HDMI-CEC device type codes

use std::fmt;

/// Device type of an HDMI-CEC device
///
/// Codes 0 through 7 are the types defined by the CEC standard. `-1` marks a
/// device that is not an active source. Any other code is kept verbatim in
/// [`DeviceType::Unknown`] so that it survives a round trip unchanged.
///
/// Values are only built from a code through `From<i32>`, so each code has
/// exactly one `DeviceType`.
///
/// # Examples
///
/// ```
/// use cecinfo_types::DeviceType;
///
/// assert_eq!(DeviceType::from(4), DeviceType::Playback);
/// assert_eq!(i32::from(DeviceType::from(42)), 42);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DeviceType {
    Tv,
    Recorder,
    /// Reserved for future usage
    Reserved,
    Tuner,
    Playback,
    AudioSystem,
    PureCecSwitch,
    VideoProcessor,
    /// Not an active source
    Inactive,
    Unknown(UnknownCode),
}

/// Device type code outside the standard set
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct UnknownCode(i32);

impl UnknownCode {
    pub fn code(&self) -> i32 {
        self.0
    }
}

impl DeviceType {
    /// Get the integer code
    pub fn code(&self) -> i32 {
        match self {
            Self::Tv => 0,
            Self::Recorder => 1,
            Self::Reserved => 2,
            Self::Tuner => 3,
            Self::Playback => 4,
            Self::AudioSystem => 5,
            Self::PureCecSwitch => 6,
            Self::VideoProcessor => 7,
            Self::Inactive => -1,
            Self::Unknown(code) => code.code(),
        }
    }

    /// Get human-readable type name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tv => "TV",
            Self::Recorder => "RECORDER",
            Self::Reserved => "RESERVED",
            Self::Tuner => "TUNER",
            Self::Playback => "PLAYBACK",
            Self::AudioSystem => "AUDIO_SYSTEM",
            Self::PureCecSwitch => "PURE_CEC_SWITCH",
            Self::VideoProcessor => "VIDEO_PROCESSOR",
            Self::Inactive => "INACTIVE",
            Self::Unknown(_) => "UNKNOWN",
        }
    }

    /// Check if a device of this type can be an input source
    pub fn is_source_type(&self) -> bool {
        matches!(self, Self::Playback | Self::Recorder | Self::Tuner)
    }

    /// Check if this is one of the codes defined by the CEC standard
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<i32> for DeviceType {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::Tv,
            1 => Self::Recorder,
            2 => Self::Reserved,
            3 => Self::Tuner,
            4 => Self::Playback,
            5 => Self::AudioSystem,
            6 => Self::PureCecSwitch,
            7 => Self::VideoProcessor,
            -1 => Self::Inactive,
            other => Self::Unknown(UnknownCode(other)),
        }
    }
}

impl From<DeviceType> for i32 {
    fn from(device_type: DeviceType) -> Self {
        device_type.code()
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_device_type_conversion() {
        assert_eq!(i32::from(DeviceType::Tv), 0);
        assert_eq!(i32::from(DeviceType::VideoProcessor), 7);
        assert_eq!(DeviceType::from(5), DeviceType::AudioSystem);
        assert_eq!(DeviceType::from(-1), DeviceType::Inactive);
    }

    #[test]
    fn test_unknown_code_preserved() {
        let device_type = DeviceType::from(8);
        assert!(matches!(device_type, DeviceType::Unknown(code) if code.code() == 8));
        assert!(!device_type.is_known());
        assert_eq!(device_type.code(), 8);
        assert_eq!(device_type.name(), "UNKNOWN");
    }

    #[test]
    fn test_source_types() {
        assert!(DeviceType::Playback.is_source_type());
        assert!(DeviceType::Recorder.is_source_type());
        assert!(DeviceType::Tuner.is_source_type());

        assert!(!DeviceType::Tv.is_source_type());
        assert!(!DeviceType::Reserved.is_source_type());
        assert!(!DeviceType::AudioSystem.is_source_type());
        assert!(!DeviceType::PureCecSwitch.is_source_type());
        assert!(!DeviceType::VideoProcessor.is_source_type());
        assert!(!DeviceType::Inactive.is_source_type());
        assert!(!DeviceType::from(99).is_source_type());
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(DeviceType::Playback.to_string(), "4");
        assert_eq!(DeviceType::Inactive.to_string(), "-1");
        assert_eq!(DeviceType::from(-7).to_string(), "-7");
    }

    #[test]
    fn test_standard_codes_never_unknown() {
        for code in -1..=7 {
            assert!(DeviceType::from(code).is_known(), "code {}", code);
        }
        assert_eq!(DeviceType::from(4), DeviceType::Playback);
        assert!(DeviceType::from(4).is_source_type());
    }

    proptest! {
        #[test]
        fn prop_equality_follows_code(a in any::<i32>(), b in any::<i32>()) {
            prop_assert_eq!(DeviceType::from(a) == DeviceType::from(b), a == b);
            prop_assert_eq!(DeviceType::from(DeviceType::from(a).code()), DeviceType::from(a));
        }

        #[test]
        fn prop_code_round_trip(code in any::<i32>()) {
            prop_assert_eq!(DeviceType::from(code).code(), code);
        }

        #[test]
        fn prop_source_type_matches_codes(code in any::<i32>()) {
            let expected = matches!(code, 1 | 3 | 4);
            prop_assert_eq!(DeviceType::from(code).is_source_type(), expected);
        }
    }
}
