//! Array-like grid variables and the ordered grid mapping.
//!
//! A grid maps variable names to n-dimensional arrays. Consumers only need
//! the summary operations exposed by [`ArrayLike`] (shape, element type,
//! minimum and maximum), so any array container can be plugged in.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{GridError, GridResult};

/// Element type of an array, named the way NetCDF/NumPy tooling names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DType {
    UInt8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
}

impl DType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DType::UInt8 => "uint8",
            DType::Int16 => "int16",
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single array element, used for reductions such as min and max.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float32(f32),
    Float64(f64),
}

impl Scalar {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Scalar::Int(v) => v as f64,
            Scalar::Float32(v) => v as f64,
            Scalar::Float64(v) => v,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Float32(v) => f.write_str(&format_float(format!("{:?}", v), v.is_nan(), v.is_infinite(), v < 0.0)),
            Scalar::Float64(v) => f.write_str(&format_float(format!("{:?}", v), v.is_nan(), v.is_infinite(), v < 0.0)),
        }
    }
}

/// Render a float the way Python prints it: `nan`, `inf`, `1.0`, `1e+16`, `1.5e-05`.
///
/// Rust's `Debug` output already uses the same shortest round-trip digits and
/// the same decimal/scientific thresholds, only the exponent spelling differs.
fn format_float(debug: String, is_nan: bool, is_inf: bool, negative: bool) -> String {
    if is_nan {
        return "nan".to_string();
    }
    if is_inf {
        return if negative { "-inf".to_string() } else { "inf".to_string() };
    }

    match debug.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa.trim_end_matches(".0"), sign, digits)
        }
        None => debug,
    }
}

/// Format an array shape as a tuple: `(2, 2)`, `(5,)` or `()`.
pub fn format_shape(shape: &[usize]) -> String {
    match shape {
        [] => "()".to_string(),
        [n] => format!("({},)", n),
        dims => {
            let parts: Vec<String> = dims.iter().map(|d| d.to_string()).collect();
            format!("({})", parts.join(", "))
        }
    }
}

/// The capability a grid value must offer to be summarized.
pub trait ArrayLike {
    /// Dimension sizes, outermost first.
    fn shape(&self) -> &[usize];

    /// Element type.
    fn dtype(&self) -> DType;

    /// Smallest element, `None` for an empty array. NaN propagates.
    fn min(&self) -> Option<Scalar>;

    /// Largest element, `None` for an empty array. NaN propagates.
    fn max(&self) -> Option<Scalar>;

    /// Total number of elements.
    fn len(&self) -> usize {
        self.shape().iter().product()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Typed backing buffer of a [`GridArray`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "dtype", content = "values", rename_all = "lowercase")]
pub enum ArrayData {
    UInt8(Vec<u8>),
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

impl ArrayData {
    pub fn len(&self) -> usize {
        match self {
            ArrayData::UInt8(v) => v.len(),
            ArrayData::Int16(v) => v.len(),
            ArrayData::Int32(v) => v.len(),
            ArrayData::Int64(v) => v.len(),
            ArrayData::Float32(v) => v.len(),
            ArrayData::Float64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dtype(&self) -> DType {
        match self {
            ArrayData::UInt8(_) => DType::UInt8,
            ArrayData::Int16(_) => DType::Int16,
            ArrayData::Int32(_) => DType::Int32,
            ArrayData::Int64(_) => DType::Int64,
            ArrayData::Float32(_) => DType::Float32,
            ArrayData::Float64(_) => DType::Float64,
        }
    }

    fn reduce(&self, pick_max: bool) -> Option<Scalar> {
        fn ints<T: Copy + Ord + Into<i64>>(values: &[T], pick_max: bool) -> Option<Scalar> {
            let it = values.iter().copied();
            let v = if pick_max { it.max() } else { it.min() };
            v.map(|v| Scalar::Int(v.into()))
        }

        match self {
            ArrayData::UInt8(v) => ints(v, pick_max),
            ArrayData::Int16(v) => ints(v, pick_max),
            ArrayData::Int32(v) => ints(v, pick_max),
            ArrayData::Int64(v) => ints(v, pick_max),
            ArrayData::Float32(v) => reduce_float(v.iter().map(|&x| x as f64), pick_max)
                .map(|x| Scalar::Float32(x as f32)),
            ArrayData::Float64(v) => reduce_float(v.iter().copied(), pick_max).map(Scalar::Float64),
        }
    }
}

// NaN anywhere poisons the result, matching NumPy's min/max.
fn reduce_float(values: impl Iterator<Item = f64>, pick_max: bool) -> Option<f64> {
    values.fold(None, |acc, x| match acc {
        None => Some(x),
        Some(a) if a.is_nan() || x.is_nan() => Some(f64::NAN),
        Some(a) => Some(if pick_max { a.max(x) } else { a.min(x) }),
    })
}

impl From<Vec<u8>> for ArrayData {
    fn from(v: Vec<u8>) -> Self {
        ArrayData::UInt8(v)
    }
}

impl From<Vec<i16>> for ArrayData {
    fn from(v: Vec<i16>) -> Self {
        ArrayData::Int16(v)
    }
}

impl From<Vec<i32>> for ArrayData {
    fn from(v: Vec<i32>) -> Self {
        ArrayData::Int32(v)
    }
}

impl From<Vec<i64>> for ArrayData {
    fn from(v: Vec<i64>) -> Self {
        ArrayData::Int64(v)
    }
}

impl From<Vec<f32>> for ArrayData {
    fn from(v: Vec<f32>) -> Self {
        ArrayData::Float32(v)
    }
}

impl From<Vec<f64>> for ArrayData {
    fn from(v: Vec<f64>) -> Self {
        ArrayData::Float64(v)
    }
}

/// An in-memory n-dimensional array stored in row-major order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGridArray")]
pub struct GridArray {
    shape: Vec<usize>,
    data: ArrayData,
}

/// Unchecked wire form; deserialization goes through [`GridArray::new`].
#[derive(Deserialize)]
struct RawGridArray {
    shape: Vec<usize>,
    data: ArrayData,
}

impl TryFrom<RawGridArray> for GridArray {
    type Error = GridError;

    fn try_from(raw: RawGridArray) -> GridResult<Self> {
        GridArray::new(raw.shape, raw.data)
    }
}

impl GridArray {
    /// Create an array, checking that the buffer length matches the shape.
    pub fn new(shape: Vec<usize>, data: impl Into<ArrayData>) -> GridResult<Self> {
        let data = data.into();
        let expected: usize = shape.iter().product();
        if expected != data.len() {
            return Err(GridError::ShapeMismatch {
                shape: format_shape(&shape),
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Create a one-dimensional array from a buffer.
    pub fn from_vec(data: impl Into<ArrayData>) -> Self {
        let data = data.into();
        Self {
            shape: vec![data.len()],
            data,
        }
    }
}

impl ArrayLike for GridArray {
    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn dtype(&self) -> DType {
        self.data.dtype()
    }

    fn min(&self) -> Option<Scalar> {
        self.data.reduce(false)
    }

    fn max(&self) -> Option<Scalar> {
        self.data.reduce(true)
    }
}

/// Boxed array value stored in a [`Grid`].
pub type GridValue = Box<dyn ArrayLike + Send + Sync>;

/// Named grid variables, iterated in insertion order.
#[derive(Default)]
pub struct Grid {
    entries: Vec<(String, GridValue)>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable. Re-inserting an existing name replaces the value
    /// and keeps the original position.
    pub fn insert<A>(&mut self, name: impl Into<String>, array: A)
    where
        A: ArrayLike + Send + Sync + 'static,
    {
        let name = name.into();
        let value: GridValue = Box::new(array);
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder-style [`Grid::insert`].
    pub fn with<A>(mut self, name: impl Into<String>, array: A) -> Self
    where
        A: ArrayLike + Send + Sync + 'static,
    {
        self.insert(name, array);
        self
    }

    pub fn get(&self, name: &str) -> Option<&(dyn ArrayLike + Send + Sync)> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &(dyn ArrayLike + Send + Sync))> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_ref()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.entries
                    .iter()
                    .map(|(n, v)| (n, format!("{} {}", format_shape(v.shape()), v.dtype()))),
            )
            .finish()
    }
}
