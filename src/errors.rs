error_chain! {
    errors {
        DimensionMismatch(s: String) {
            description("Dimension mismatch")
            display("{}", s)
        }
        ShapeError(s: String) {
            description("Shape error")
            display("Shape error: {}", s)
        }
        IndexError(s: String) {
            description("Index error")
            display("Index error: {}", s)
        }
        ZeroMagnitude {
            description("Zero magnitude")
            display("Zero magnitude: direction is undefined for a zero vector")
        }
    }
}

pub const OPERAND_MISMATCH: &'static str =
    "Height of second operand must match width of first operand.";

pub fn dimension_mismatch<S: Into<String>>(s: S) -> Error {
    Error::from_kind(ErrorKind::DimensionMismatch(s.into()))
}
pub fn shape_error<S: Into<String>>(s: S) -> Error {
    Error::from_kind(ErrorKind::ShapeError(s.into()))
}
pub fn index_error<S: Into<String>>(s: S) -> Error {
    Error::from_kind(ErrorKind::IndexError(s.into()))
}
