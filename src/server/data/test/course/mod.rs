use crate::server::{
    data::course::CourseRepository,
    model::course::{CreateCourseParam, UpdateCourseParam},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod exists;
mod get;
mod get_by_author;
mod update;
