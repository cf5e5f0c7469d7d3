pub mod apps;
pub mod dispatch;
pub mod matching;
pub mod show;
pub mod status;
