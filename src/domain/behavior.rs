use std::fmt;

/// Hive behavioral state emitted by the pretrained classifier.
///
/// The index-to-label map is closed: indices outside the trained set map to
/// `Unknown` rather than failing, so label-map drift between model versions
/// degrades visibly instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    Normal,
    Swarming,
    QueenAbsence,
    Disease,
    Unknown,
}

impl Behavior {
    pub fn from_index(index: i64) -> Self {
        match index {
            0 => Behavior::Normal,
            1 => Behavior::Swarming,
            2 => Behavior::QueenAbsence,
            3 => Behavior::Disease,
            _ => Behavior::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Behavior::Normal => "Normal",
            Behavior::Swarming => "Swarming",
            Behavior::QueenAbsence => "Queen Absence",
            Behavior::Disease => "Disease",
            Behavior::Unknown => "Unknown",
        }
    }

    /// False when the classifier emitted an index outside the trained set.
    pub fn is_known(&self) -> bool {
        !matches!(self, Behavior::Unknown)
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
