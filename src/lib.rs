pub mod alerts;
pub mod appsettings;
pub mod calendar;
pub mod health;
pub mod models;
pub mod storage;
pub mod upload;
