// Create the Error, ErrorKind, ResultExt, and Result types
// Result is a typedef of std `Result` with the error type our own `Error`
// Defines the From conversions that let try! and ? work for our `Error`.
// ResultExt adds the `chain_err` trait method.
use error_chain::error_chain;

use crate::cells::GridCoordinate;

error_chain! {
    errors {
        InvalidGridDimensions(width: usize, height: usize) {
            description("grid dimensions must both be at least 1")
            display("invalid grid dimensions {}x{}: width and height must both be at least 1", width, height)
        }

        CoordinateOutOfBounds(coord: GridCoordinate, width: usize, height: usize) {
            description("coordinate is outside of the grid")
            display("coordinate {} is outside of the {}x{} grid", coord, width, height)
        }
    }
}
