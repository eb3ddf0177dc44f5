//! Named-value updates delivered over the reconfiguration channel.

/// Value carried by a reconfiguration update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl ParamValue {
    pub(crate) fn as_bool(self) -> Option<bool> {
        match self {
            ParamValue::Bool(v) => Some(v),
            _ => None,
        }
    }

    /// Integers are accepted where a float is expected.
    pub(crate) fn as_f64(self) -> Option<f64> {
        match self {
            ParamValue::Float(v) => Some(v),
            ParamValue::Int(v) => Some(v as f64),
            ParamValue::Bool(_) => None,
        }
    }

    pub(crate) fn as_f32(self) -> Option<f32> {
        self.as_f64().map(|v| v as f32)
    }

    pub(crate) fn as_u32(self) -> Option<u32> {
        match self {
            ParamValue::Int(v) => u32::try_from(v).ok(),
            _ => None,
        }
    }

    pub(crate) fn as_usize(self) -> Option<usize> {
        match self {
            ParamValue::Int(v) => usize::try_from(v).ok(),
            _ => None,
        }
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

/// One named update.
///
/// Names outside the recognized key set are ignored without error, so senders
/// may carry keys this pipeline does not know yet.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamUpdate {
    pub name: String,
    pub value: ParamValue,
}

impl ParamUpdate {
    pub fn new(name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
