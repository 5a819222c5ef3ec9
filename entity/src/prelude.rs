pub use super::author::Entity as Author;
pub use super::course::Entity as Course;
