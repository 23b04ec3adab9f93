use movie_quiz::data::read_bank_embedded;
use movie_quiz::{MovieQuizApp, QuizError};

fn create_app() -> Result<MovieQuizApp, QuizError> {
    read_bank_embedded()
        .and_then(MovieQuizApp::new)
        .inspect_err(|e| log::error!("no se pudo preparar el quiz: {e}"))
}

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([440.0, 860.0]),
        ..Default::default()
    };
    // Un banco inválido sale de run_native como eframe::Error::AppCreation
    eframe::run_native(
        "Movie Quiz",
        options,
        Box::new(|_cc| Ok(Box::new(create_app()?))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_bank_builds_the_app() {
        let app = create_app().unwrap();
        assert_eq!(app.controller.total(), 10);
    }

    #[test]
    fn quiz_errors_fit_the_app_creator_error() {
        let err: Box<dyn std::error::Error + Send + Sync> = QuizError::EmptyQuestionList.into();
        assert_eq!(err.to_string(), "question list is empty");
    }
}
