//! Interactive two-phase intake session
//!
//! Phase one collects the farmer and cow identity and stores it. Phase two
//! walks the checklist one question at a time and ends with the case report.

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use tracing::warn;
use triage_application::{
    CaseReport, DiagnoseError, DiagnoseUseCase, Diagnosis, RegisterIntakeError,
    RegisterIntakeUseCase,
};
use triage_domain::{
    Answer, AnswerPolicy, AnswerVector, IntakeForm, IntakeRecord, Question, ValidationError,
};

/// Outcome of reading one line
enum Input {
    Line(String),
    /// Ctrl-C or Ctrl-D: leave the session
    Quit,
}

/// Interactive intake session
pub struct IntakeSession {
    register: RegisterIntakeUseCase,
    diagnose: DiagnoseUseCase,
    formatter: Box<dyn OutputFormatter>,
}

impl IntakeSession {
    pub fn new(
        register: RegisterIntakeUseCase,
        diagnose: DiagnoseUseCase,
        formatter: Box<dyn OutputFormatter>,
    ) -> Self {
        Self {
            register,
            diagnose,
            formatter,
        }
    }

    /// Run sessions until the user quits
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;
        self.print_welcome();

        loop {
            let Some(intake) = self.identity_phase(&mut rl).await? else {
                break;
            };
            let Some(answers) = self.checklist_phase(&mut rl)? else {
                break;
            };

            match diagnose_answers(&self.diagnose, answers) {
                Ok(diagnosis) => {
                    let report = CaseReport::new(intake, diagnosis);
                    println!("{}", self.formatter.case_report(&report));
                }
                Err(e) => {
                    warn!("Checklist for intake {} not diagnosed: {}", intake.id, e);
                    eprintln!("{} {}", "Error:".red().bold(), e);
                }
            }

            match Self::ask(&mut rl, "Start another intake? [y/N] ")? {
                Input::Line(line) if line.trim().eq_ignore_ascii_case("y") => continue,
                _ => break,
            }
        }

        println!("Bye!");
        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│         Bovine Triage - Intake Mode         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Fill in the identity form, then answer the checklist.");
        match self.diagnose.policy() {
            AnswerPolicy::Lenient => {
                println!("Press Enter to skip a question. Ctrl-D quits.")
            }
            AnswerPolicy::Strict => println!("Every question must be answered. Ctrl-D quits."),
        }
        println!();
    }

    /// Collect and store the identity form. Re-asks until it validates.
    async fn identity_phase(&self, rl: &mut DefaultEditor) -> RlResult<Option<IntakeRecord>> {
        println!("{}", "Farmer and cow details".cyan().bold());

        loop {
            let mut values = Vec::with_capacity(IDENTITY_PROMPTS.len());
            for label in IDENTITY_PROMPTS {
                match Self::ask(rl, &format!("  {}: ", label))? {
                    Input::Line(line) => values.push(line),
                    Input::Quit => return Ok(None),
                }
            }

            let form = identity_form(values);
            match self.register.execute(&form).await {
                Ok(record) => {
                    println!("{} (id {})\n", "Saved.".green(), record.id);
                    return Ok(Some(record));
                }
                Err(RegisterIntakeError::Validation(e)) => {
                    println!("{} {}\n", "!".yellow().bold(), validation_message(&e));
                }
                Err(e) => {
                    eprintln!("{} {}", "Error:".red().bold(), e);
                    return Ok(None);
                }
            }
        }
    }

    /// Ask every question in order. `None` means the user quit.
    fn checklist_phase(&self, rl: &mut DefaultEditor) -> RlResult<Option<Vec<Answer>>> {
        println!("{}", "Symptom checklist".cyan().bold());
        let policy = self.diagnose.policy();
        let mut answers = Vec::new();

        for (position, question) in self.diagnose.table().questionnaire().iter() {
            println!("\n{} {}", format!("{}.", position).cyan(), question.prompt.bold());
            for (i, option) in question.options.iter().enumerate() {
                println!("   [{}] {}", i + 1, option.label);
            }

            let answer = loop {
                let Input::Line(line) = Self::ask(rl, "  > ")? else {
                    return Ok(None);
                };
                match parse_choice(question, &line) {
                    Ok(Answer::Unanswered) if policy == AnswerPolicy::Strict => {
                        println!("  This question must be answered.");
                    }
                    Ok(answer) => break answer,
                    Err(message) => println!("  {}", message),
                }
            };
            answers.push(answer);
        }

        Ok(Some(answers))
    }

    fn ask(rl: &mut DefaultEditor, prompt: &str) -> RlResult<Input> {
        match rl.readline(prompt) {
            Ok(line) => Ok(Input::Line(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(Input::Quit),
            Err(err) => Err(err),
        }
    }
}

fn diagnose_answers(
    diagnose: &DiagnoseUseCase,
    answers: Vec<Answer>,
) -> Result<Diagnosis, DiagnoseError> {
    let vector = AnswerVector::new(answers)?;
    diagnose.execute_vector(vector)
}

/// Prompts in `IntakeForm` field order
const IDENTITY_PROMPTS: [&str; 5] = [
    "Your name",
    "Contact",
    "Cow name",
    "Cow age (years)",
    "Cow breed",
];

fn identity_form(values: Vec<String>) -> IntakeForm {
    let mut values = values.into_iter();
    let mut next = || values.next().filter(|v| !v.trim().is_empty());
    IntakeForm {
        username: next(),
        user_contact: next(),
        cow_name: next(),
        cow_age: next().map(|age| age.as_str().into()),
        cow_breed: next(),
    }
}

/// Same wording the web form used
pub(crate) fn validation_message(error: &ValidationError) -> &'static str {
    match error {
        ValidationError::MissingFields(_) => "All fields are required.",
        ValidationError::InvalidAge(_) => "cowAge must be a valid number.",
    }
}

/// Interpret a typed answer: an option number, an option code, or blank/`-`
fn parse_choice(question: &Question, input: &str) -> Result<Answer, String> {
    let input = input.trim();
    if let Answer::Unanswered = Answer::parse(input) {
        return Ok(Answer::Unanswered);
    }

    if let Ok(index) = input.parse::<usize>() {
        return question
            .option_at(index)
            .map(|option| Answer::Code(option.code.clone()))
            .ok_or_else(|| format!("Pick a number from 1 to {}.", question.options.len()));
    }

    if question.accepts(input) {
        Ok(Answer::Code(input.to_string()))
    } else {
        Err(format!("'{}' is not one of the options.", input))
    }
}
