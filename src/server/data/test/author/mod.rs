use crate::server::{
    data::author::AuthorRepository,
    model::{
        author::{AuthorsResourceParam, CreateAuthorParam},
        course::CreateCourseParam,
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory, fixture};
use uuid::Uuid;

mod create;
mod delete;
mod exists;
mod get_by_ids;
mod get_paged;

fn create_param(courses: Vec<CreateCourseParam>) -> CreateAuthorParam {
    CreateAuthorParam {
        first_name: "Jaimy".to_string(),
        last_name: "Johnson".to_string(),
        date_of_birth: fixture::author::default_date_of_birth(),
        main_category: "Maps".to_string(),
        courses,
    }
}
