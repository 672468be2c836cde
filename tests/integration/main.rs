//! Integration test entry point.

mod helpers;

mod folder_test;
mod participation_test;
mod repository_test;
