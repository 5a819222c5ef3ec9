mod author;
mod course;
