//! DXF stream reader trait and common types

use crate::error::Result;
use encoding_rs::Encoding;

/// How the value line of a group code is to be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupCodeValueType {
    String,
    Double,
    Int16,
    Int32,
    Int64,
    Bool,
    Handle,
    Comment,
}

impl GroupCodeValueType {
    /// Classify a group code by the ranges of the DXF reference
    pub fn from_code(code: i32) -> Self {
        match code {
            0..=4 | 6..=9 => Self::String,
            5 | 105 | 320..=369 | 390..=399 | 480..=481 | 1005 => Self::Handle,
            10..=59 | 110..=149 | 210..=239 | 460..=469 | 1010..=1059 => Self::Double,
            60..=79 | 170..=179 | 270..=289 | 370..=389 | 400..=409 | 1060..=1070 => Self::Int16,
            90..=99 | 420..=429 | 440..=459 | 1071 => Self::Int32,
            160..=169 => Self::Int64,
            290..=299 => Self::Bool,
            999 => Self::Comment,
            _ => Self::String,
        }
    }
}

/// A DXF code/value pair
#[derive(Debug, Clone, PartialEq)]
pub struct DxfCodePair {
    /// The DXF group code
    pub code: i32,

    pub value_type: GroupCodeValueType,

    /// String representation of the value
    pub value_string: String,

    /// Integer value (if applicable)
    pub value_int: Option<i64>,

    /// Floating-point value (if applicable)
    pub value_double: Option<f64>,
}

impl DxfCodePair {
    /// Create a new code/value pair
    pub fn new(code: i32, value_string: impl Into<String>) -> Self {
        let value_string = value_string.into();
        let value_type = GroupCodeValueType::from_code(code);

        let value_int = match value_type {
            GroupCodeValueType::Int16
            | GroupCodeValueType::Int32
            | GroupCodeValueType::Int64
            | GroupCodeValueType::Bool => parse_int(&value_string),
            _ => None,
        };

        let value_double = match value_type {
            GroupCodeValueType::Double => value_string.trim().parse::<f64>().ok(),
            _ => None,
        };

        Self {
            code,
            value_type,
            value_string,
            value_int,
            value_double,
        }
    }

    /// True for the `0` pair that starts a record of the given name
    pub fn is_record(&self, name: &str) -> bool {
        self.code == 0 && self.value_string == name
    }

    pub fn as_str(&self) -> &str {
        &self.value_string
    }

    pub fn as_int(&self) -> Option<i64> {
        self.value_int
    }

    pub fn as_i16(&self) -> Option<i16> {
        self.value_int.and_then(|v| i16::try_from(v).ok())
    }

    pub fn as_i32(&self) -> Option<i32> {
        self.value_int.and_then(|v| i32::try_from(v).ok())
    }

    pub fn as_double(&self) -> Option<f64> {
        self.value_double
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.value_type {
            GroupCodeValueType::Bool => self.value_int.map(|v| v != 0),
            _ => None,
        }
    }
}

/// Integers are sometimes written with a decimal point ("1.0")
fn parse_int(value: &str) -> Option<i64> {
    let value = value.trim();
    value
        .parse::<i64>()
        .ok()
        .or_else(|| value.parse::<f64>().ok().map(|v| v as i64))
}

/// Trait for reading DXF code/value pairs from a stream
pub trait DxfStreamReader {
    /// Read the next code/value pair
    fn read_pair(&mut self) -> Result<Option<DxfCodePair>>;

    /// Peek at the next code without consuming it
    fn peek_code(&mut self) -> Result<Option<i32>>;

    /// Push a pair back to be read again on next read_pair call
    fn push_back(&mut self, pair: DxfCodePair);

    /// Reset the reader to the beginning
    fn reset(&mut self) -> Result<()>;

    /// Decoding used for lines that are not valid UTF-8
    fn set_encoding(&mut self, encoding: &'static Encoding);
}
