//! Headless end-to-end flows driven through [`crate::test_harness::TestTracker`].

mod advance_flow;
mod image_attach;
mod submission_flow;
mod view_flow;
