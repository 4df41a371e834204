use clap::Parser;
use quiz_grader::{logger, Config, Quiz, QuizError};

fn main() {
    let config = Config::parse();

    if let Err(e) = run(&config) {
        tracing::error!(error = %e, "quiz-grader failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), QuizError> {
    logger::init(config)?;

    match &config.answers {
        Some(answers) => {
            let report = quiz_grader::grade_answer_sheet(&config.questions, answers, config.json)?;
            print!("{}", report);
            Ok(())
        }
        None => Quiz::from_json(&config.questions)?.run(),
    }
}
