//! Domain layer: the exercise types and their pure operations
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod bst;
pub mod change;
pub mod error;
pub mod lines;
pub mod powers;
pub mod quaternion;
pub mod sayer;
pub mod sequence;
pub mod shape;
pub mod stack;

pub use bst::BinarySearchTree;
pub use change::{change, change_with, Change, US_DENOMINATIONS};
pub use error::DomainError;
pub use lines::{count_meaningful, is_meaningful_line, DEFAULT_COMMENT_PREFIX};
pub use powers::{powers, powers_up_to, Powers};
pub use quaternion::Quaternion;
pub use sayer::{say, Sayer};
pub use sequence::{first_then_apply, first_then_lower_case};
pub use shape::Shape;
pub use stack::Stack;
