pub use self::comparator::{
    prefers_max, prefers_min, ByKey, Comparator, Max, Min, Prefers, Reversed,
};
pub use self::error::EmptyInputError;
pub use self::reduce::{position_by, position_with, reduce_by, reduce_with, Favored};

pub mod comparator;
pub mod error;
pub mod reduce;
