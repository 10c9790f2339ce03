pub mod homework;
pub mod id;
pub mod schema;
pub mod task;
pub mod validation;

pub use homework::{Homework, HomeworkDraft};
pub use id::next_id;
pub use schema::{Draft, ListItem};
pub use task::{Task, TaskDraft};
pub use validation::{
    short_fields, validate, ValidationError, DEFAULT_MIN_LENGTH, MIN_LENGTH_FLOOR,
};
