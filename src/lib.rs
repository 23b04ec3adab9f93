pub mod app;
pub mod data;
pub mod error;
pub mod model;
pub mod presenter;
pub mod scheduler;
pub mod ui;
pub mod view_models;

pub use app::QuizController;
pub use error::QuizError;
pub use ui::MovieQuizApp;
